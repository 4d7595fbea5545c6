// SPDX-License-Identifier: MIT OR Apache-2.0
//! Minimal scene registry standing in for the host application's scene.
//!
//! The host owns the real scene graph; this module models the slice of it
//! the camera path feature needs: ordered nodes with identities, add/remove
//! events for listeners, and observation of the node kinds that project
//! onto the timeline. Node kinds are a closed enum, so dispatch happens by
//! matching a variant rather than comparing type-name strings.

use camerapath_model::{CameraPath, CameraPose};
use indexmap::IndexMap;
use uuid::Uuid;

/// Unique identifier for scene nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// A node registered in the scene.
#[derive(Debug, Clone)]
pub enum SceneNode {
    /// A camera path with its keyframe table and channels.
    CameraPath {
        /// Display name.
        name: String,
        /// The owned path model.
        path: CameraPath,
    },
    /// A dense spline polyline published for display.
    PointSpline {
        /// Display name.
        name: String,
        /// Sampled 3-D points.
        samples: Vec<[f64; 3]>,
    },
    /// A standalone camera.
    Camera {
        /// Display name.
        name: String,
        /// The camera's pose.
        pose: CameraPose,
    },
}

impl SceneNode {
    /// Display name of the node.
    pub fn name(&self) -> &str {
        match self {
            SceneNode::CameraPath { name, .. }
            | SceneNode::PointSpline { name, .. }
            | SceneNode::Camera { name, .. } => name,
        }
    }

    /// Whether this node kind projects onto the timeline and is therefore
    /// observed by the camera path module.
    pub fn projects_to_timeline(&self) -> bool {
        matches!(
            self,
            SceneNode::CameraPath { .. } | SceneNode::PointSpline { .. }
        )
    }
}

/// Scene change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// A node was added.
    NodeAdded(NodeId),
    /// A node was removed.
    NodeRemoved(NodeId),
}

/// Ordered registry of scene nodes.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: IndexMap<NodeId, SceneNode>,
    observed: Vec<NodeId>,
    pending_events: Vec<SceneEvent>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get a node.
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// Get a mutable node.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&id)
    }

    /// Iterate over `(id, node)` pairs in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    /// Get the camera path owned by a node, if the node is one.
    pub fn camera_path(&self, id: NodeId) -> Option<&CameraPath> {
        match self.nodes.get(&id) {
            Some(SceneNode::CameraPath { path, .. }) => Some(path),
            _ => None,
        }
    }

    /// Get a mutable camera path, if the node is one.
    pub fn camera_path_mut(&mut self, id: NodeId) -> Option<&mut CameraPath> {
        match self.nodes.get_mut(&id) {
            Some(SceneNode::CameraPath { path, .. }) => Some(path),
            _ => None,
        }
    }

    /// Add a node, observing it when its kind projects onto the timeline.
    pub fn add_node(&mut self, node: SceneNode) -> NodeId {
        let id = NodeId::new();
        if node.projects_to_timeline() {
            self.observed.push(id);
            tracing::debug!(name = node.name(), "observing scene node");
        }
        self.nodes.insert(id, node);
        self.pending_events.push(SceneEvent::NodeAdded(id));
        id
    }

    /// Remove a node, detaching any observation, and return it.
    pub fn remove_node(&mut self, id: NodeId) -> Option<SceneNode> {
        let node = self.nodes.shift_remove(&id)?;
        self.observed.retain(|o| *o != id);
        self.pending_events.push(SceneEvent::NodeRemoved(id));
        Some(node)
    }

    /// Whether the module currently observes a node.
    pub fn observes(&self, id: NodeId) -> bool {
        self.observed.contains(&id)
    }

    /// Drain the pending change events.
    pub fn take_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
