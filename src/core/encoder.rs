//! Node encoder: message index → output slot, symbol → color
//!
//! Each node owns a fixed permutation of the ten slots so that the same
//! message lights a different pixel on every unit.

use crate::types::{MessageIndex, NodeId, Rgb, Slot, Symbol};
use crate::{NODE_COUNT, SLOT_COUNT};

/// Slot permutation per node, row 0 is node 1
pub const NODE_PERMUTATIONS: [[u8; SLOT_COUNT]; NODE_COUNT] = [
    [3, 4, 2, 8, 7, 1, 6, 0, 5, 9],
    [0, 5, 3, 9, 4, 2, 8, 1, 6, 7],
    [4, 8, 1, 7, 2, 9, 0, 6, 3, 5],
    [5, 3, 8, 2, 0, 6, 1, 7, 9, 4],
    [1, 9, 0, 5, 3, 8, 2, 4, 7, 6],
    [7, 2, 1, 9, 4, 6, 3, 5, 8, 0],
];

/// Pixel color per symbol index
pub const SYMBOL_COLORS: [Rgb; 6] = [
    Rgb::RED,
    Rgb::ORANGE,
    Rgb::YELLOW,
    Rgb::GREEN,
    Rgb::BLUE,
    Rgb::VIOLET,
];

/// Maps messages and symbols onto this board's pixels
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeEncoder;

impl NodeEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Slot that shows `message` on `node`; None when the node has no table
    pub fn slot_for(&self, node: NodeId, message: MessageIndex) -> Option<Slot> {
        if !node.is_valid() {
            return None;
        }
        let row = &NODE_PERMUTATIONS[node.0 as usize - 1];
        Slot::new(row[message.get()] as usize)
    }

    /// Color of a symbol; no symbol is off
    pub fn color_for(&self, symbol: Option<Symbol>) -> Rgb {
        symbol.map(|s| self.color_for_index(s.index())).unwrap_or(Rgb::OFF)
    }

    /// Color by raw symbol index; anything past the table is off
    pub fn color_for_index(&self, index: u8) -> Rgb {
        SYMBOL_COLORS.get(index as usize).copied().unwrap_or(Rgb::OFF)
    }
}

// =============================================================================
// TESTS
// =============================================================================
