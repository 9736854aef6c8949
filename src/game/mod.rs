//! Interactive core: the view state machine and per-frame update loop
//!
//! One `Game` instance lives for the whole session. Each frame the app shell
//! hands it a pointer snapshot and receives a draw list:
//!
//! ```text
//! PointerSnapshot → region list → gesture phase → state machine → DrawList
//! ```
//!
//! The controller owns the domain model (viruses, inventory, world) and is
//! the only code that mutates it. It performs no drawing and never blocks;
//! every action resolves within the frame it is detected.

pub mod draw;
pub mod gesture;
pub mod layout;
pub mod region;
pub mod view;

use tracing::{debug, error, info};

pub use draw::{ButtonId, ButtonVisual, CardFace, DrawInstr, DrawList, PanelStyle};
pub use gesture::{Gesture, PointerPhase};
pub use layout::Layout;
pub use region::{Rect, Region, RegionKind, hit_test};
pub use view::View;

use crate::sim::{
    Block, Industry, ReleaseRule, StandardReleaseRule, Virus, World, starting_blocks, transfer,
};

/// One frame of sampled pointer input
///
/// A pure snapshot: position (if the pointer is inside the window) and
/// whether the primary button is down. No event queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSnapshot {
    pub pos: Option<[f32; 2]>,
    pub primary_down: bool,
}

/// The game controller
pub struct Game {
    view: View,
    selected: Option<usize>,
    viruses: Vec<Virus>,
    inventory: Vec<Block>,
    market_stock: Vec<Block>,
    world: World,
    /// Main list scroll offset, always in [min(0, viewport - content), 0]
    main_scroll: f32,
    gesture: Gesture,
    layout: Layout,
    release_rule: Box<dyn ReleaseRule>,
}

impl Game {
    /// Creates a controller on the main list with the starting block stocks
    pub fn new(resolution: [f32; 2]) -> Self {
        let (market_stock, inventory) = starting_blocks();
        Self {
            view: View::MainList,
            selected: None,
            viruses: Vec::new(),
            inventory,
            market_stock,
            world: World::new(),
            main_scroll: 0.0,
            gesture: Gesture::new(),
            layout: Layout::new(resolution),
            release_rule: Box::new(StandardReleaseRule),
        }
    }

    /// Replaces the injected release validity rule
    pub fn with_release_rule(mut self, rule: Box<dyn ReleaseRule>) -> Self {
        self.release_rule = rule;
        self
    }

    /// Rebuilds all cached geometry for a new resolution.
    ///
    /// Must run before the next frame's hit test; stale geometry is never
    /// hit-tested. The scroll offset is re-clamped into the new bounds.
    pub fn resolution_change(&mut self, resolution: [f32; 2]) {
        self.layout = Layout::new(resolution);
        self.main_scroll = self.main_scroll.clamp(self.scroll_floor(), 0.0);
        info!(
            width = resolution[0],
            height = resolution[1],
            "rebuilt view geometry for new resolution"
        );
    }

    /// Advances the controller by one frame and returns the draw list
    pub fn update(&mut self, pointer: &PointerSnapshot) -> DrawList {
        // A view that reads the selection must never run without one; that
        // would be a programming defect, so recover locally instead of
        // indexing out of bounds.
        if self.view.requires_selection() && !self.selection_valid() {
            error!(
                view = self.view.name(),
                selected = ?self.selected,
                "view requires a virus selection but none is valid, resetting"
            );
            self.view = View::MainList;
        }

        let regions = self.regions();
        let hit = hit_test(&regions, pointer.pos);
        let phase = self.gesture.step(pointer.primary_down, hit);

        let mut list = vec![DrawInstr::Clear];
        match self.view {
            View::MainList => self.update_main_list(&regions, phase, &mut list),
            View::WorldMap => self.update_world_map(&regions, phase, &mut list),
            View::Market => {} // reserved: background only
            View::VirusInfo => self.update_virus_info(&regions, phase, &mut list),
            View::VirusAssembly => self.update_assembly(&regions, phase, pointer, &mut list),
        }
        list
    }

    /// Ordered interactive regions for the current view.
    ///
    /// Chrome buttons first, then card regions in collection order. The same
    /// state always yields the same list.
    pub fn regions(&self) -> Vec<Region> {
        match self.view {
            View::MainList => self
                .layout
                .main_list_regions(self.viruses.len(), self.main_scroll),
            View::WorldMap => self.layout.world_map_regions(),
            View::Market => Vec::new(),
            View::VirusInfo => self.layout.virus_info_regions(),
            View::VirusAssembly => {
                let n_blocks = self
                    .selected
                    .and_then(|s| self.viruses.get(s))
                    .map_or(0, |v| v.blocks().len());
                self.layout.assembly_regions(self.inventory.len(), n_blocks)
            }
        }
    }

    // Per-view update: apply the released action (if any), then rebuild the
    // frame's draw list from the resulting state.

    fn update_main_list(&mut self, regions: &[Region], phase: PointerPhase, list: &mut DrawList) {
        if let PointerPhase::Released(i) = phase {
            match regions[i].kind {
                RegionKind::ScrollUp => self.scroll_main_up(),
                RegionKind::ScrollDown => self.scroll_main_down(),
                RegionKind::ToWorldMap => {
                    info!("transitioning to world map view");
                    self.view = View::WorldMap;
                }
                RegionKind::VirusCard(index) => self.open_virus(index),
                RegionKind::NewVirusCard => self.create_virus(),
                _ => {}
            }
        }

        let ml = &self.layout.main_list;
        list.push(DrawInstr::Panel {
            rect: ml.tray,
            style: PanelStyle::Tray,
        });
        list.push(DrawInstr::Panel {
            rect: ml.scroll_track,
            style: PanelStyle::ScrollTrack,
        });

        for (i, virus) in self.viruses.iter().enumerate() {
            list.push(DrawInstr::Card {
                rect: ml.card_rect(i, self.main_scroll),
                face: virus_card_face(virus),
            });
        }
        list.push(DrawInstr::Card {
            rect: ml.card_rect(self.viruses.len(), self.main_scroll),
            face: CardFace::new("Create new virus", ""),
        });

        // Chrome buttons paint over scrolled cards
        list.push(DrawInstr::Button {
            id: ButtonId::ScrollUp,
            rect: ml.scroll_up,
            visual: button_visual(regions, phase, RegionKind::ScrollUp),
        });
        list.push(DrawInstr::Button {
            id: ButtonId::ScrollDown,
            rect: ml.scroll_down,
            visual: button_visual(regions, phase, RegionKind::ScrollDown),
        });
        list.push(DrawInstr::Button {
            id: ButtonId::ToWorldMap,
            rect: ml.world_map_button,
            visual: button_visual(regions, phase, RegionKind::ToWorldMap),
        });
    }

    fn update_world_map(&mut self, regions: &[Region], phase: PointerPhase, list: &mut DrawList) {
        if let PointerPhase::Released(i) = phase
            && regions[i].kind == RegionKind::ToMainList
        {
            info!("transitioning to main list view");
            self.view = View::MainList;
        }

        list.push(DrawInstr::Button {
            id: ButtonId::ToMainList,
            rect: self.layout.world_map.main_list_button,
            visual: button_visual(regions, phase, RegionKind::ToMainList),
        });
    }

    fn update_virus_info(&mut self, regions: &[Region], phase: PointerPhase, list: &mut DrawList) {
        if let PointerPhase::Released(i) = phase
            && regions[i].kind == RegionKind::ToMainList
        {
            info!("transitioning to main list view");
            self.view = View::MainList;
        }

        list.push(DrawInstr::Button {
            id: ButtonId::ToMainList,
            rect: self.layout.virus_info.back_button,
            visual: button_visual(regions, phase, RegionKind::ToMainList),
        });
    }

    fn update_assembly(
        &mut self,
        regions: &[Region],
        phase: PointerPhase,
        pointer: &PointerSnapshot,
        list: &mut DrawList,
    ) {
        let Some(selected) = self.selected else {
            return;
        };

        if let PointerPhase::Released(i) = phase {
            match regions[i].kind {
                RegionKind::ToMainList => {
                    info!("transitioning to main list view");
                    self.view = View::MainList;
                }
                RegionKind::Release => self.try_release(selected),
                RegionKind::Industry(industry) => {
                    debug!(industry = industry.label(), "industry selected");
                    self.viruses[selected].set_industry(industry);
                }
                RegionKind::InventoryCard(index) => {
                    match transfer(&mut self.inventory, self.viruses[selected].blocks_mut(), index)
                    {
                        Ok(id) => {
                            debug!(block = ?id, "block assigned to virus");
                            self.viruses[selected].recompute_stats();
                        }
                        Err(e) => error!(error = %e, "inventory transfer ignored"),
                    }
                }
                RegionKind::VirusBlockCard(index) => {
                    match transfer(self.viruses[selected].blocks_mut(), &mut self.inventory, index)
                    {
                        Ok(id) => {
                            debug!(block = ?id, "block returned to inventory");
                            self.viruses[selected].recompute_stats();
                        }
                        Err(e) => error!(error = %e, "virus transfer ignored"),
                    }
                }
                _ => {}
            }
        }

        // Validity is evaluated after the action so the release button's
        // state reflects this frame's industry or block changes.
        let validity = self.release_rule.validate(&self.viruses[selected]);
        let a = &self.layout.assembly;

        for (i, block) in self.inventory.iter().enumerate() {
            list.push(DrawInstr::Card {
                rect: a.inventory_card_rect(i),
                face: CardFace::new(&block.name, block.kind.label()),
            });
        }
        for (j, block) in self.viruses[selected].blocks().iter().enumerate() {
            list.push(DrawInstr::Card {
                rect: a.virus_card_rect(j),
                face: CardFace::new(&block.name, block.kind.label()),
            });
        }

        list.push(DrawInstr::Button {
            id: ButtonId::ToMainList,
            rect: a.back_button,
            visual: button_visual(regions, phase, RegionKind::ToMainList),
        });
        list.push(DrawInstr::Panel {
            rect: a.infobar,
            style: PanelStyle::InfoBar,
        });

        let release_visual = if validity.is_err() {
            ButtonVisual::Invalid
        } else {
            button_visual(regions, phase, RegionKind::Release)
        };
        list.push(DrawInstr::Button {
            id: ButtonId::Release,
            rect: a.release_button,
            visual: release_visual,
        });

        for industry in Industry::ALL {
            let visual = if self.viruses[selected].industry() == Some(industry) {
                ButtonVisual::Selected
            } else {
                button_visual(regions, phase, RegionKind::Industry(industry))
            };
            list.push(DrawInstr::Button {
                id: ButtonId::Industry(industry),
                rect: a.industry_buttons[industry],
                visual,
            });
        }

        // Hovering an invalid release button explains why, at the pointer
        if let (PointerPhase::Hover(i), Err(reason)) = (phase, &validity)
            && regions[i].kind == RegionKind::Release
            && let Some(pos) = pointer.pos
        {
            list.push(DrawInstr::Tooltip {
                anchor: pos,
                text: reason.clone(),
            });
        }
    }

    // Actions

    fn open_virus(&mut self, index: usize) {
        self.selected = Some(index);
        if self.viruses[index].released() {
            info!(index, "transitioning to virus info view");
            self.view = View::VirusInfo;
        } else {
            info!(index, "transitioning to virus assembly view");
            self.view = View::VirusAssembly;
        }
    }

    fn create_virus(&mut self) {
        info!("creating new virus");
        self.viruses.push(Virus::new());
        self.selected = Some(self.viruses.len() - 1);
        self.view = View::VirusAssembly;
    }

    fn try_release(&mut self, selected: usize) {
        match self.release_rule.validate(&self.viruses[selected]) {
            Ok(()) => {
                info!(index = selected, "releasing virus");
                self.viruses[selected].release();
                self.view = View::VirusInfo;
            }
            Err(reason) => {
                debug!(reason, "release blocked");
            }
        }
    }

    fn scroll_main_up(&mut self) {
        self.main_scroll = (self.main_scroll - self.layout.main_list.card_pitch)
            .max(self.scroll_floor());
    }

    fn scroll_main_down(&mut self) {
        self.main_scroll = (self.main_scroll + self.layout.main_list.card_pitch).min(0.0);
    }

    /// Lowest legal scroll offset; never above zero even when the card stack
    /// is shorter than the viewport
    fn scroll_floor(&self) -> f32 {
        let total = self
            .layout
            .main_list
            .total_content_height(self.viruses.len());
        (self.layout.resolution[1] - total).min(0.0)
    }

    fn selection_valid(&self) -> bool {
        self.selected.is_some_and(|s| s < self.viruses.len())
    }

    // Accessors

    pub fn view(&self) -> View {
        self.view
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn viruses(&self) -> &[Virus] {
        &self.viruses
    }

    pub fn inventory(&self) -> &[Block] {
        &self.inventory
    }

    pub fn market_stock(&self) -> &[Block] {
        &self.market_stock
    }

    pub fn scroll_offset(&self) -> f32 {
        self.main_scroll
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

/// Card face for a virus entry on the main list
fn virus_card_face(virus: &Virus) -> CardFace {
    let blocks = virus.blocks().len();
    let subtitle = match (virus.industry(), virus.released()) {
        (Some(industry), true) => format!("{} · released", industry.label()),
        (Some(industry), false) => format!("{} · {} blocks", industry.label(), blocks),
        (None, _) => format!("{} blocks", blocks),
    };
    CardFace::new(virus.name(), subtitle)
}

/// Phase-driven visual for the button behind `kind`
fn button_visual(regions: &[Region], phase: PointerPhase, kind: RegionKind) -> ButtonVisual {
    match phase {
        PointerPhase::Pressed(i) if regions[i].kind == kind => ButtonVisual::Pressed,
        PointerPhase::Hover(i) if regions[i].kind == kind => ButtonVisual::Hover,
        _ => ButtonVisual::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RES: [f32; 2] = [1920.0, 400.0];

    fn click(game: &mut Game, kind: RegionKind) {
        let pos = game
            .regions()
            .iter()
            .find(|r| r.kind == kind)
            .map(|r| r.rect.center())
            .expect("region present");
        game.update(&PointerSnapshot {
            pos: Some(pos),
            primary_down: true,
        });
        game.update(&PointerSnapshot {
            pos: Some(pos),
            primary_down: false,
        });
    }

    fn game_with_viruses(n: usize) -> Game {
        let mut game = Game::new(RES);
        for _ in 0..n {
            click(&mut game, RegionKind::NewVirusCard);
            click(&mut game, RegionKind::ToMainList);
        }
        game
    }

    #[test]
    fn test_scroll_down_stops_at_zero() {
        let mut game = game_with_viruses(3);
        for _ in 0..10 {
            click(&mut game, RegionKind::ScrollDown);
        }
        assert_eq!(game.scroll_offset(), 0.0);
    }

    #[test]
    fn test_scroll_up_stops_at_floor() {
        // 400px viewport, four cards (three viruses plus create-new) at
        // 1920/15 * 1.1 pitch: the stack is taller than the viewport.
        let mut game = game_with_viruses(3);
        let total = game.layout().main_list.total_content_height(3);
        assert!(total > RES[1]);

        for _ in 0..20 {
            click(&mut game, RegionKind::ScrollUp);
        }
        assert_eq!(game.scroll_offset(), RES[1] - total);

        // And back down to exactly zero
        for _ in 0..20 {
            click(&mut game, RegionKind::ScrollDown);
        }
        assert_eq!(game.scroll_offset(), 0.0);
    }

    #[test]
    fn test_scroll_never_positive_with_short_stack() {
        let mut game = Game::new([1920.0, 1080.0]);
        for _ in 0..5 {
            click(&mut game, RegionKind::ScrollUp);
            click(&mut game, RegionKind::ScrollDown);
        }
        assert_eq!(game.scroll_offset(), 0.0);
    }

    #[test]
    fn test_new_virus_is_selected_and_in_assembly() {
        let mut game = Game::new(RES);
        click(&mut game, RegionKind::NewVirusCard);

        assert_eq!(game.view(), View::VirusAssembly);
        assert_eq!(game.selected(), Some(0));
        assert_eq!(game.viruses().len(), 1);
        assert!(!game.viruses()[0].released());
        assert!(game.viruses()[0].blocks().is_empty());
        assert_eq!(game.viruses()[0].industry(), None);
    }

    #[test]
    fn test_invalid_selection_resets_to_main_list() {
        let mut game = Game::new(RES);
        game.view = View::VirusAssembly;
        game.selected = Some(7);

        game.update(&PointerSnapshot::default());
        assert_eq!(game.view(), View::MainList);
    }

    #[test]
    fn test_market_view_renders_background_only() {
        let mut game = Game::new(RES);
        game.view = View::Market;

        let list = game.update(&PointerSnapshot::default());
        assert_eq!(list, vec![DrawInstr::Clear]);
        assert!(game.regions().is_empty());
        assert_eq!(game.view(), View::Market);
    }

    #[test]
    fn test_resolution_change_reclamps_scroll() {
        let mut game = game_with_viruses(3);
        for _ in 0..20 {
            click(&mut game, RegionKind::ScrollUp);
        }
        assert!(game.scroll_offset() < 0.0);

        // A much taller viewport fits the whole stack: offset snaps to range
        game.resolution_change([1920.0, 4000.0]);
        assert_eq!(game.scroll_offset(), 0.0);
    }
}
