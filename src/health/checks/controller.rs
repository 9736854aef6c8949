//! Game controller health check
//!
//! Runs a headless controller through a scripted session and verifies the
//! invariants that survive every interaction: blocks are conserved across
//! transfers, view transitions land where they should, and the scroll
//! offset stays in bounds.

use crate::game::{Game, PointerSnapshot, RegionKind, View};
use crate::health::check::{CheckResult, SystemCheck};

const RESOLUTION: [f32; 2] = [1280.0, 720.0];

/// Checks the controller's state machine with scripted pointer input
pub struct ControllerCheck;

impl ControllerCheck {
    pub fn new() -> Self {
        Self
    }

    fn click(game: &mut Game, kind: RegionKind) -> Result<(), String> {
        let pos = game
            .regions()
            .iter()
            .find(|r| r.kind == kind)
            .map(|r| r.rect.center())
            .ok_or_else(|| format!("region {:?} not present in {}", kind, game.view().name()))?;
        game.update(&PointerSnapshot {
            pos: Some(pos),
            primary_down: true,
        });
        game.update(&PointerSnapshot {
            pos: Some(pos),
            primary_down: false,
        });
        Ok(())
    }

    fn block_total(game: &Game) -> usize {
        game.inventory().len()
            + game
                .viruses()
                .iter()
                .map(|v| v.blocks().len())
                .sum::<usize>()
    }

    fn run_script(&self) -> Result<Vec<String>, String> {
        let mut game = Game::new(RESOLUTION);
        let mut details = Vec::new();
        let initial_blocks = Self::block_total(&game);

        // Create a virus from the main list
        Self::click(&mut game, RegionKind::NewVirusCard)?;
        if game.view() != View::VirusAssembly {
            return Err(format!(
                "expected assembly view after creating a virus, got {}",
                game.view().name()
            ));
        }
        details.push("  ✓ New virus opens the assembly view".to_string());

        // Move a block into the virus and back out
        Self::click(&mut game, RegionKind::InventoryCard(0))?;
        if Self::block_total(&game) != initial_blocks {
            return Err("block count changed after assigning a block".to_string());
        }
        Self::click(&mut game, RegionKind::VirusBlockCard(0))?;
        if game.inventory().len() != initial_blocks || !game.viruses()[0].blocks().is_empty() {
            return Err("transfer round trip did not restore the inventory".to_string());
        }
        details.push("  ✓ Block transfers conserve the block pool".to_string());

        // Release without an industry must be refused
        Self::click(&mut game, RegionKind::Release)?;
        if game.view() != View::VirusAssembly || game.viruses()[0].released() {
            return Err("invalid release was not refused".to_string());
        }
        details.push("  ✓ Invalid release refused".to_string());

        // With an industry and a block the release goes through
        Self::click(
            &mut game,
            RegionKind::Industry(crate::sim::Industry::PowerPlant),
        )?;
        Self::click(&mut game, RegionKind::InventoryCard(0))?;
        Self::click(&mut game, RegionKind::Release)?;
        if game.view() != View::VirusInfo || !game.viruses()[0].released() {
            return Err("valid release did not transition to the info view".to_string());
        }
        details.push("  ✓ Valid release transitions to virus info".to_string());

        // Back out and confirm scroll stays clamped
        Self::click(&mut game, RegionKind::ToMainList)?;
        for _ in 0..10 {
            Self::click(&mut game, RegionKind::ScrollUp)?;
        }
        for _ in 0..20 {
            Self::click(&mut game, RegionKind::ScrollDown)?;
        }
        if game.scroll_offset() != 0.0 {
            return Err(format!(
                "scroll offset {} escaped its bounds",
                game.scroll_offset()
            ));
        }
        details.push("  ✓ Scroll offset stays clamped".to_string());

        Ok(details)
    }
}

impl Default for ControllerCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ControllerCheck {
    fn name(&self) -> &'static str {
        "Game Controller"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates the view state machine and interaction invariants")
    }

    fn check(&self) -> CheckResult {
        match self.run_script() {
            Ok(details) => {
                CheckResult::pass("Scripted session behaved").with_details(details.join("\n"))
            }
            Err(e) => CheckResult::fail("Scripted session diverged").with_details(format!("  {e}")),
        }
    }
}
