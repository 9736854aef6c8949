//! Virus assembly rules: block lists, industries, stats, release gating

use enum_map::Enum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::block::Block;

/// Production industry a virus can be targeted at
///
/// Exactly one industry may be selected per virus at a time; selecting a new
/// one overwrites the previous choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
pub enum Industry {
    PowerPlant,
    Chemical,
    Manufactory,
}

impl Industry {
    /// All industries, in the fixed order the assembly screen lists them
    pub const ALL: [Industry; 3] = [
        Industry::PowerPlant,
        Industry::Chemical,
        Industry::Manufactory,
    ];

    /// Button label for this industry
    pub fn label(self) -> &'static str {
        match self {
            Industry::PowerPlant => "Power Plant",
            Industry::Chemical => "Chemical Plant",
            Industry::Manufactory => "Car Manufactory",
        }
    }
}

/// Aggregate stats derived from a virus's block list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub infectivity: i32,
    pub resilience: i32,
    pub visibility: i32,
}

impl Stats {
    /// Folds a block list into its aggregate stats
    pub fn from_blocks(blocks: &[Block]) -> Self {
        blocks.iter().fold(Stats::default(), |acc, b| Stats {
            infectivity: acc.infectivity + b.infectivity,
            resilience: acc.resilience + b.resilience,
            visibility: acc.visibility + b.visibility,
        })
    }
}

/// A virus under assembly or already released
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Virus {
    name: String,
    blocks: Vec<Block>,
    industry: Option<Industry>,
    released: bool,
    stats: Stats,
}

impl Virus {
    /// Creates a new unreleased virus with no blocks, no industry, and a
    /// generated strain name
    pub fn new() -> Self {
        let mut rng = rand::rng();
        let tag: String = (0..4)
            .map(|_| (b'A' + rng.random_range(0..26u8)) as char)
            .collect();
        Self::named(format!("Strain {}", tag))
    }

    /// Creates a new unreleased virus with a fixed name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: Vec::new(),
            industry: None,
            released: false,
            stats: Stats::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Mutable access to the assigned block list, for transfers
    pub fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.blocks
    }

    pub fn industry(&self) -> Option<Industry> {
        self.industry
    }

    /// Selects the target industry, overwriting any previous choice
    pub fn set_industry(&mut self, industry: Industry) {
        self.industry = Some(industry);
    }

    pub fn released(&self) -> bool {
        self.released
    }

    /// Finalizes the virus. One-way: there is no un-release.
    pub fn release(&mut self) {
        self.released = true;
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Rederives aggregate stats from the current block list.
    ///
    /// Must be called after every transfer affecting this virus. Idempotent
    /// for a given block multiset.
    pub fn recompute_stats(&mut self) {
        self.stats = Stats::from_blocks(&self.blocks);
    }
}

impl Default for Virus {
    fn default() -> Self {
        Self::new()
    }
}

/// Release validity predicate, injected into the controller
///
/// The controller only consumes the boolean outcome and, when invalid, a
/// human-readable reason for the tooltip.
pub trait ReleaseRule {
    /// Returns `Ok(())` if the virus may be released, otherwise the reason
    /// it may not
    fn validate(&self, virus: &Virus) -> Result<(), String>;
}

/// Default rule: an industry must be selected and at least one block assigned
pub struct StandardReleaseRule;

impl ReleaseRule for StandardReleaseRule {
    fn validate(&self, virus: &Virus) -> Result<(), String> {
        if virus.industry().is_none() {
            return Err("no industry selected".to_string());
        }
        if virus.blocks().is_empty() {
            return Err("no blocks assigned".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::block::{BlockKind, starting_blocks, transfer};

    fn block(id: u32, infectivity: i32) -> Block {
        Block::new(id, "test", BlockKind::Payload, infectivity, 1, 1)
    }

    #[test]
    fn test_recompute_stats_folds_block_list() {
        let mut virus = Virus::named("Test");
        virus.blocks_mut().push(block(0, 3));
        virus.blocks_mut().push(block(1, 4));
        virus.recompute_stats();

        assert_eq!(virus.stats().infectivity, 7);
        assert_eq!(virus.stats().resilience, 2);
    }

    #[test]
    fn test_recompute_stats_is_idempotent() {
        let mut virus = Virus::named("Test");
        virus.blocks_mut().push(block(0, 5));
        virus.recompute_stats();
        let first = virus.stats();
        virus.recompute_stats();
        assert_eq!(virus.stats(), first);
    }

    #[test]
    fn test_transfer_round_trip_restores_contents() {
        let (_, mut inventory) = starting_blocks();
        let mut virus = Virus::named("Test");
        let before: Vec<_> = inventory.iter().map(|b| b.id).collect();

        transfer(&mut inventory, virus.blocks_mut(), 0).unwrap();
        virus.recompute_stats();
        transfer(virus.blocks_mut(), &mut inventory, 0).unwrap();
        virus.recompute_stats();

        let mut after: Vec<_> = inventory.iter().map(|b| b.id).collect();
        let mut expected = before.clone();
        after.sort();
        expected.sort();
        assert_eq!(after, expected);
        assert!(virus.blocks().is_empty());
        assert_eq!(virus.stats(), Stats::default());
    }

    #[test]
    fn test_standard_rule_requires_industry_then_blocks() {
        let mut virus = Virus::named("Test");
        let rule = StandardReleaseRule;

        assert_eq!(
            rule.validate(&virus),
            Err("no industry selected".to_string())
        );

        virus.set_industry(Industry::PowerPlant);
        assert_eq!(rule.validate(&virus), Err("no blocks assigned".to_string()));

        virus.blocks_mut().push(block(0, 1));
        assert_eq!(rule.validate(&virus), Ok(()));
    }

    #[test]
    fn test_release_is_one_way() {
        let mut virus = Virus::named("Test");
        assert!(!virus.released());
        virus.release();
        assert!(virus.released());
    }

    #[test]
    fn test_industry_selection_overwrites() {
        let mut virus = Virus::named("Test");
        virus.set_industry(Industry::Chemical);
        virus.set_industry(Industry::Manufactory);
        assert_eq!(virus.industry(), Some(Industry::Manufactory));
    }
}
