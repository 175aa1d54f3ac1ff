/// Unique identifier for a node in the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Raw index value, handy for logging and DOM ids.
    pub fn raw(self) -> u32 {
        self.0
    }
}
