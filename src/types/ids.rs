//! Small index newtypes: node identity, message index, output slot

use serde::{Deserialize, Serialize};
use crate::{MESSAGE_COUNT, NODE_COUNT, SLOT_COUNT};
use crate::types::GestureError;

/// Which physical unit this is. Selects the permutation table.
///
/// Holds the raw configured value; only 1..=6 has a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u8);

impl NodeId {
    /// Validate a configured node id
    pub fn checked(raw: u8) -> Result<Self, GestureError> {
        let node = NodeId(raw);
        if node.is_valid() {
            Ok(node)
        } else {
            Err(GestureError::InvalidNode(raw))
        }
    }

    pub fn is_valid(&self) -> bool {
        (1..=NODE_COUNT as u8).contains(&self.0)
    }
}

impl Default for NodeId {
    fn default() -> Self {
        NodeId(1)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node{}", self.0)
    }
}

/// Position of a message in the dictionary (0..=9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageIndex(u8);

impl MessageIndex {
    pub fn new(index: usize) -> Option<Self> {
        (index < MESSAGE_COUNT).then_some(MessageIndex(index as u8))
    }

    pub fn get(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for MessageIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "message{}", self.0)
    }
}

/// Physical output position (pixel 0..=9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot(u8);

impl Slot {
    pub fn new(slot: usize) -> Option<Self> {
        (slot < SLOT_COUNT).then_some(Slot(slot as u8))
    }

    pub fn get(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_range() {
        assert!(NodeId(1).is_valid());
        assert!(NodeId(6).is_valid());
        assert!(!NodeId(0).is_valid());
        assert!(!NodeId(7).is_valid());
        assert!(NodeId::checked(7).is_err());
        assert_eq!(NodeId::checked(4).unwrap(), NodeId(4));
    }

    #[test]
    fn test_bounded_indices() {
        assert_eq!(MessageIndex::new(9).map(|m| m.get()), Some(9));
        assert!(MessageIndex::new(10).is_none());
        assert_eq!(Slot::new(0).map(|s| s.get()), Some(0));
        assert!(Slot::new(10).is_none());
    }
}
