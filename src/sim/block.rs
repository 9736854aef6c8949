//! Functional blocks that viruses are assembled from

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable block identity, independent of which collection holds the block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(pub u32);

/// Broad role a block plays inside an assembled virus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    Replicator,
    Payload,
    Camouflage,
    Dropper,
}

impl BlockKind {
    /// Label shown on the block's card
    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Replicator => "Replicator",
            BlockKind::Payload => "Payload",
            BlockKind::Camouflage => "Camouflage",
            BlockKind::Dropper => "Dropper",
        }
    }
}

/// A functional block
///
/// A block belongs to exactly one collection at a time: the shared player
/// inventory, the market stock, or one virus's assigned list. Moving a block
/// is always a transfer, never a copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub name: String,
    pub kind: BlockKind,
    /// Contribution to the infectivity aggregate
    pub infectivity: i32,
    /// Contribution to the resilience aggregate
    pub resilience: i32,
    /// Contribution to the visibility aggregate (higher = easier to detect)
    pub visibility: i32,
}

impl Block {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        kind: BlockKind,
        infectivity: i32,
        resilience: i32,
        visibility: i32,
    ) -> Self {
        Self {
            id: BlockId(id),
            name: name.into(),
            kind,
            infectivity,
            resilience,
            visibility,
        }
    }
}

/// Failed block transfer attempt
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    #[error("no block at index {0}")]
    BadIndex(usize),
}

/// Moves the block at `index` from one collection to the tail of another.
///
/// Returns the id of the moved block. The two collections together hold the
/// same block multiset before and after the call.
pub fn transfer(
    from: &mut Vec<Block>,
    to: &mut Vec<Block>,
    index: usize,
) -> Result<BlockId, TransferError> {
    if index >= from.len() {
        return Err(TransferError::BadIndex(index));
    }
    let block = from.remove(index);
    let id = block.id;
    to.push(block);
    Ok(id)
}

/// Creates the starting block stocks: (market stock, player inventory)
pub fn starting_blocks() -> (Vec<Block>, Vec<Block>) {
    let market = vec![
        Block::new(0, "Mitosis Engine", BlockKind::Replicator, 9, 2, 5),
        Block::new(1, "Grid Worm", BlockKind::Dropper, 6, 4, 6),
        Block::new(2, "Catalyst Rot", BlockKind::Payload, 3, 7, 4),
        Block::new(3, "Ghost Shell", BlockKind::Camouflage, 1, 5, -6),
    ];

    let inventory = vec![
        Block::new(4, "Binary Spore", BlockKind::Replicator, 5, 2, 3),
        Block::new(5, "Rust Payload", BlockKind::Payload, 2, 6, 4),
        Block::new(6, "Dust Coat", BlockKind::Camouflage, 0, 3, -4),
        Block::new(7, "Vent Crawler", BlockKind::Dropper, 4, 1, 2),
        Block::new(8, "Relay Spike", BlockKind::Payload, 3, 4, 5),
    ];

    (market, inventory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_moves_block_to_tail() {
        let (_, mut inventory) = starting_blocks();
        let mut assigned = Vec::new();

        let moved = transfer(&mut inventory, &mut assigned, 1).unwrap();
        assert_eq!(moved, BlockId(5));
        assert_eq!(assigned.last().unwrap().id, BlockId(5));
        assert_eq!(inventory.len(), 4);
        assert!(inventory.iter().all(|b| b.id != BlockId(5)));
    }

    #[test]
    fn test_transfer_bad_index_leaves_collections_unchanged() {
        let (_, mut inventory) = starting_blocks();
        let mut assigned = Vec::new();
        let before = inventory.len();

        let result = transfer(&mut inventory, &mut assigned, before);
        assert_eq!(result, Err(TransferError::BadIndex(before)));
        assert_eq!(inventory.len(), before);
        assert!(assigned.is_empty());
    }

    #[test]
    fn test_starting_block_ids_are_unique() {
        let (market, inventory) = starting_blocks();
        let mut ids: Vec<BlockId> = market.iter().chain(&inventory).map(|b| b.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
