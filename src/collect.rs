//! Point collection from nested scene hierarchies.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

/// Element of a scene hierarchy as seen by framing
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    /// Drawable geometry: vertex positions in the node's local frame
    Geometry(Vec<Vec3>),
    /// Grouping element whose children live in the frame given by `transform`
    Group {
        transform: Transform,
        children:  Vec<SceneNode>,
    },
    /// Anything else; contributes no points
    Unrecognized,
}

impl SceneNode {
    /// World-space points of this node alone, taking its coordinates as world space
    pub fn points(&self) -> Vec<Vec3> {
        collect_points(std::iter::once(self), GlobalTransform::IDENTITY)
    }
}

/// Flattens `nodes` into world-space points.
///
/// Geometry vertices are mapped through `accumulated`; groups recurse with
/// `accumulated × group.transform`. Points are not deduplicated.
pub fn collect_points<'a>(
    nodes: impl IntoIterator<Item = &'a SceneNode>,
    accumulated: GlobalTransform,
) -> Vec<Vec3> {
    let mut points = Vec::new();
    extend_points(&mut points, nodes, accumulated);
    points
}

fn extend_points<'a>(
    points: &mut Vec<Vec3>,
    nodes: impl IntoIterator<Item = &'a SceneNode>,
    accumulated: GlobalTransform,
) {
    for node in nodes {
        match node {
            SceneNode::Geometry(vertices) => {
                points.extend(vertices.iter().map(|v| accumulated.transform_point(*v)));
            },
            SceneNode::Group {
                transform,
                children,
            } => extend_points(points, children, accumulated.mul_transform(*transform)),
            SceneNode::Unrecognized => {},
        }
    }
}

/// Local transforms along `ChildOf` chains.
///
/// Entities with a `Projection` are cameras; their transforms are not read, which keeps this
/// parameter compatible with systems that mutate camera transforms.
#[derive(SystemParam)]
pub struct Ancestry<'w, 's> {
    parents:    Query<'w, 's, &'static ChildOf>,
    transforms: Query<'w, 's, &'static Transform, Without<Projection>>,
}

impl Ancestry<'_, '_> {
    /// Transform from the frame `entity` is placed in to world space, composed from the local
    /// transforms of its ancestors.
    pub fn parent_transform(&self, entity: Entity) -> GlobalTransform {
        let ancestors: Vec<Entity> = self.parents.iter_ancestors(entity).collect();
        ancestors
            .iter()
            .rev()
            .fold(GlobalTransform::IDENTITY, |accumulated, ancestor| {
                accumulated.mul_transform(self.local_transform(*ancestor))
            })
    }

    pub fn local_transform(&self, entity: Entity) -> Transform {
        self.transforms.get(entity).copied().unwrap_or_default()
    }
}

/// Read access to the entity hierarchy and meshes, for snapshotting entities as [`SceneNode`]s
#[derive(SystemParam)]
pub struct SceneGraph<'w, 's> {
    ancestry:    Ancestry<'w, 's>,
    children:    Query<'w, 's, &'static Children>,
    meshes:      Query<'w, 's, &'static Mesh3d>,
    mesh_assets: Res<'w, Assets<Mesh>>,
}

impl SceneGraph<'_, '_> {
    /// Snapshot of `entity` and its descendants.
    ///
    /// Every entity becomes a group with its local `Transform`, holding its mesh geometry (if
    /// any) followed by its children. Entities with neither are unrecognized.
    pub fn scene_node(&self, entity: Entity) -> SceneNode {
        let mut nodes = Vec::new();

        if let Some(vertices) = self.mesh_vertices(entity) {
            nodes.push(SceneNode::Geometry(vertices));
        }
        if let Ok(children) = self.children.get(entity) {
            nodes.extend(children.iter().map(|child| self.scene_node(child)));
        }

        if nodes.is_empty() {
            return SceneNode::Unrecognized;
        }
        SceneNode::Group {
            transform: self.ancestry.local_transform(entity),
            children:  nodes,
        }
    }

    pub fn parent_transform(&self, entity: Entity) -> GlobalTransform {
        self.ancestry.parent_transform(entity)
    }

    /// World-space points of `targets` and their descendants
    pub fn collect_points(&self, targets: &[Entity]) -> Vec<Vec3> {
        let mut points = Vec::new();
        for target in targets {
            let node = self.scene_node(*target);
            extend_points(&mut points, std::iter::once(&node), self.parent_transform(*target));
        }
        points
    }

    fn mesh_vertices(&self, entity: Entity) -> Option<Vec<Vec3>> {
        let mesh3d = self.meshes.get(entity).ok()?;
        let mesh = self.mesh_assets.get(&mesh3d.0)?;
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|a| a.as_float3())?;
        Some(positions.iter().map(|pos| Vec3::from_array(*pos)).collect())
    }
}
