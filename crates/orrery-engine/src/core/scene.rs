use std::collections::HashMap;

use glam::{Mat4, Vec3};

use crate::api::types::NodeId;
use crate::components::mesh::MeshComponent;
use crate::core::transform::Transform;

/// A node in the scene graph: a transform with an optional mesh.
///
/// Mesh-less nodes act as pivots: they carry a transform for their
/// children and draw nothing themselves.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    /// String tag for finding nodes by name.
    pub tag: String,
    /// Parent node, or `None` for nodes attached to the graph root.
    pub parent: Option<NodeId>,
    pub transform: Transform,
    pub mesh: Option<MeshComponent>,
    /// Hidden nodes (and their subtrees) are skipped when building frames.
    pub visible: bool,
    /// Cached world matrix, refreshed by `SceneGraph::propagate`.
    world: Mat4,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            tag: String::new(),
            parent: None,
            transform: Transform::default(),
            mesh: None,
            visible: true,
            world: Mat4::IDENTITY,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.translation = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// World matrix as of the last propagation.
    pub fn world_matrix(&self) -> Mat4 {
        self.world
    }

    /// World-space position as of the last propagation.
    pub fn world_position(&self) -> Vec3 {
        self.world.w_axis.truncate()
    }
}

/// Flat node storage with parent links.
///
/// Nodes are kept in insertion order and a parent must be spawned before its
/// children, so one forward pass computes every world matrix.
/// Designed for small graphs (tens to hundreds of nodes).
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph.
    ///
    /// A node whose parent is unknown is attached to the root instead.
    pub fn spawn(&mut self, mut node: Node) {
        if let Some(parent) = node.parent {
            if !self.index.contains_key(&parent) {
                log::warn!(
                    "node {} spawned under unknown parent {}, attaching to root",
                    node.id.raw(),
                    parent.raw()
                );
                node.parent = None;
            }
        }
        node.world = self.compose_world(node.parent, &node.transform);
        self.index.insert(node.id, self.nodes.len());
        self.nodes.push(node);
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        match self.index.get(&id) {
            Some(&i) => Some(&mut self.nodes[i]),
            None => None,
        }
    }

    /// Mutable access to a node's local transform.
    pub fn transform_mut(&mut self, id: NodeId) -> Option<&mut Transform> {
        self.get_mut(id).map(|n| &mut n.transform)
    }

    /// Iterate over all nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// A node is drawn only if it and all of its ancestors are visible.
    pub fn is_visible(&self, id: NodeId) -> bool {
        let mut cursor = self.get(id);
        while let Some(node) = cursor {
            if !node.visible {
                return false;
            }
            cursor = node.parent.and_then(|p| self.get(p));
        }
        true
    }

    /// Recompute every node's world matrix from the local transforms.
    pub fn propagate(&mut self) {
        for i in 0..self.nodes.len() {
            let parent_world = self.nodes[i]
                .parent
                .and_then(|p| self.index.get(&p))
                .map(|&pi| self.nodes[pi].world)
                .unwrap_or(Mat4::IDENTITY);
            let node = &mut self.nodes[i];
            node.world = parent_world * node.transform.matrix();
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn compose_world(&self, parent: Option<NodeId>, local: &Transform) -> Mat4 {
        let parent_world = parent
            .and_then(|p| self.get(p))
            .map(|n| n.world)
            .unwrap_or(Mat4::IDENTITY);
        parent_world * local.matrix()
    }
}
