//! End-to-end interaction tests
//!
//! Drives the game controller with synthetic pointer snapshots, the same
//! way the app shell does, and checks state transitions and draw output.

use virion::game::{
    ButtonId, ButtonVisual, DrawInstr, Game, PointerSnapshot, RegionKind, View,
};
use virion::sim::Industry;

const RES: [f32; 2] = [1280.0, 720.0];

fn down(pos: [f32; 2]) -> PointerSnapshot {
    PointerSnapshot {
        pos: Some(pos),
        primary_down: true,
    }
}

fn up(pos: [f32; 2]) -> PointerSnapshot {
    PointerSnapshot {
        pos: Some(pos),
        primary_down: false,
    }
}

fn center_of(game: &Game, kind: RegionKind) -> [f32; 2] {
    game.regions()
        .iter()
        .find(|r| r.kind == kind)
        .map(|r| r.rect.center())
        .unwrap_or_else(|| panic!("no region {:?} in {}", kind, game.view().name()))
}

fn click(game: &mut Game, kind: RegionKind) {
    let pos = center_of(game, kind);
    game.update(&down(pos));
    game.update(&up(pos));
}

fn fresh_assembly() -> Game {
    let mut game = Game::new(RES);
    click(&mut game, RegionKind::NewVirusCard);
    assert_eq!(game.view(), View::VirusAssembly);
    game
}

#[test]
fn test_action_fires_on_release_not_press() {
    let mut game = Game::new(RES);
    let pos = center_of(&game, RegionKind::ToWorldMap);

    game.update(&down(pos));
    assert_eq!(game.view(), View::MainList, "press alone must not act");

    game.update(&up(pos));
    assert_eq!(game.view(), View::WorldMap);
}

#[test]
fn test_drag_off_region_cancels_click() {
    let mut game = Game::new(RES);
    let pos = center_of(&game, RegionKind::ToWorldMap);

    game.update(&down(pos));
    // Drag to empty space while held, then release there
    game.update(&down([RES[0] / 2.0, RES[1] / 2.0]));
    game.update(&up([RES[0] / 2.0, RES[1] / 2.0]));
    assert_eq!(game.view(), View::MainList);

    // Hovering the button afterwards must not replay the press
    game.update(&up(pos));
    assert_eq!(game.view(), View::MainList);
}

#[test]
fn test_pointer_leaving_window_clears_press() {
    let mut game = Game::new(RES);
    let pos = center_of(&game, RegionKind::ToWorldMap);

    game.update(&down(pos));
    game.update(&PointerSnapshot {
        pos: None,
        primary_down: true,
    });
    game.update(&up(pos));
    assert_eq!(game.view(), View::MainList);
}

#[test]
fn test_main_list_region_order() {
    let mut game = Game::new(RES);
    click(&mut game, RegionKind::NewVirusCard);
    click(&mut game, RegionKind::ToMainList);

    let kinds: Vec<RegionKind> = game.regions().iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            RegionKind::ScrollUp,
            RegionKind::ScrollDown,
            RegionKind::ToWorldMap,
            RegionKind::VirusCard(0),
            RegionKind::NewVirusCard,
        ]
    );
}

#[test]
fn test_world_map_round_trip() {
    let mut game = Game::new(RES);
    click(&mut game, RegionKind::ToWorldMap);
    assert_eq!(game.view(), View::WorldMap);
    click(&mut game, RegionKind::ToMainList);
    assert_eq!(game.view(), View::MainList);
}

#[test]
fn test_industry_selection_is_exclusive() {
    let mut game = fresh_assembly();

    click(&mut game, RegionKind::Industry(Industry::Chemical));
    assert_eq!(game.viruses()[0].industry(), Some(Industry::Chemical));

    // Selecting another industry replaces the first, no confirmation
    click(&mut game, RegionKind::Industry(Industry::Manufactory));
    assert_eq!(game.viruses()[0].industry(), Some(Industry::Manufactory));

    // The selected industry's button renders selected, the others normal
    let pos = [0.0, 0.0]; // pointer away from everything
    let list = game.update(&up(pos));
    for instr in &list {
        if let DrawInstr::Button {
            id: ButtonId::Industry(industry),
            visual,
            ..
        } = instr
        {
            let expected = if *industry == Industry::Manufactory {
                ButtonVisual::Selected
            } else {
                ButtonVisual::Normal
            };
            assert_eq!(*visual, expected, "wrong visual for {:?}", industry);
        }
    }
}

#[test]
fn test_block_transfer_round_trip() {
    let mut game = fresh_assembly();
    let pool = game.inventory().len();

    click(&mut game, RegionKind::InventoryCard(0));
    assert_eq!(game.inventory().len(), pool - 1);
    assert_eq!(game.viruses()[0].blocks().len(), 1);

    click(&mut game, RegionKind::VirusBlockCard(0));
    assert_eq!(game.inventory().len(), pool);
    assert!(game.viruses()[0].blocks().is_empty());
}

#[test]
fn test_transfer_updates_virus_stats() {
    let mut game = fresh_assembly();

    click(&mut game, RegionKind::InventoryCard(0));
    let with_block = game.viruses()[0].stats();
    assert!(
        with_block.infectivity > 0
            || with_block.resilience > 0
            || with_block.visibility > 0
    );

    click(&mut game, RegionKind::VirusBlockCard(0));
    let empty = game.viruses()[0].stats();
    assert_eq!(empty.infectivity, 0);
    assert_eq!(empty.resilience, 0);
    assert_eq!(empty.visibility, 0);
}

#[test]
fn test_release_refused_without_industry() {
    let mut game = fresh_assembly();
    click(&mut game, RegionKind::InventoryCard(0));

    click(&mut game, RegionKind::Release);
    assert_eq!(game.view(), View::VirusAssembly);
    assert!(!game.viruses()[0].released());
}

#[test]
fn test_release_refused_without_blocks() {
    let mut game = fresh_assembly();
    click(&mut game, RegionKind::Industry(Industry::PowerPlant));

    click(&mut game, RegionKind::Release);
    assert_eq!(game.view(), View::VirusAssembly);
    assert!(!game.viruses()[0].released());
}

#[test]
fn test_valid_release_transitions_to_info() {
    let mut game = fresh_assembly();
    click(&mut game, RegionKind::Industry(Industry::PowerPlant));
    click(&mut game, RegionKind::InventoryCard(0));

    click(&mut game, RegionKind::Release);
    assert_eq!(game.view(), View::VirusInfo);
    assert!(game.viruses()[0].released());
}

#[test]
fn test_released_virus_opens_info_not_assembly() {
    let mut game = fresh_assembly();
    click(&mut game, RegionKind::Industry(Industry::PowerPlant));
    click(&mut game, RegionKind::InventoryCard(0));
    click(&mut game, RegionKind::Release);
    click(&mut game, RegionKind::ToMainList);

    click(&mut game, RegionKind::VirusCard(0));
    assert_eq!(game.view(), View::VirusInfo);

    // No path back to assembly for a released virus
    click(&mut game, RegionKind::ToMainList);
    click(&mut game, RegionKind::VirusCard(0));
    assert_eq!(game.view(), View::VirusInfo);
}

#[test]
fn test_invalid_release_shows_tooltip_on_hover() {
    let mut game = fresh_assembly();
    let pos = center_of(&game, RegionKind::Release);

    let list = game.update(&up(pos));
    let tooltip = list.iter().find_map(|instr| match instr {
        DrawInstr::Tooltip { anchor, text } => Some((*anchor, text.clone())),
        _ => None,
    });

    let (anchor, text) = tooltip.expect("hovering an invalid release shows a tooltip");
    assert_eq!(anchor, pos);
    assert!(!text.is_empty());

    // The release button itself renders the invalid visual
    assert!(list.iter().any(|instr| matches!(
        instr,
        DrawInstr::Button {
            id: ButtonId::Release,
            visual: ButtonVisual::Invalid,
            ..
        }
    )));
}

#[test]
fn test_no_tooltip_away_from_release() {
    let mut game = fresh_assembly();
    let pos = center_of(&game, RegionKind::ToMainList);

    let list = game.update(&up(pos));
    assert!(
        !list
            .iter()
            .any(|instr| matches!(instr, DrawInstr::Tooltip { .. }))
    );
}

#[test]
fn test_draw_list_starts_with_clear() {
    let mut game = Game::new(RES);
    let list = game.update(&PointerSnapshot::default());
    assert_eq!(list.first(), Some(&DrawInstr::Clear));
}

#[test]
fn test_scroll_clamps_and_cards_track_offset() {
    let mut game = Game::new([1280.0, 300.0]);
    for _ in 0..4 {
        click(&mut game, RegionKind::NewVirusCard);
        click(&mut game, RegionKind::ToMainList);
    }

    let card_y = |game: &Game| {
        game.regions()
            .iter()
            .find(|r| r.kind == RegionKind::VirusCard(0))
            .map(|r| r.rect.y)
            .unwrap()
    };

    let before = card_y(&game);
    click(&mut game, RegionKind::ScrollUp);
    let after = card_y(&game);
    assert!(after < before, "cards move up when scrolling up");
    assert_eq!(before - after, game.layout().main_list.card_pitch);

    // Saturate both directions
    for _ in 0..30 {
        click(&mut game, RegionKind::ScrollUp);
    }
    let floor = 300.0 - game.layout().main_list.total_content_height(4);
    assert_eq!(game.scroll_offset(), floor);

    for _ in 0..30 {
        click(&mut game, RegionKind::ScrollDown);
    }
    assert_eq!(game.scroll_offset(), 0.0);
}

#[test]
fn test_resolution_change_rebuilds_hit_geometry() {
    let mut game = Game::new(RES);
    let old_pos = center_of(&game, RegionKind::NewVirusCard);

    game.resolution_change([640.0, 360.0]);

    // The old card position falls outside the rebuilt tray: no virus created
    game.update(&down(old_pos));
    game.update(&up(old_pos));
    assert_eq!(game.view(), View::MainList);
    assert!(game.viruses().is_empty());

    // The rebuilt position works
    click(&mut game, RegionKind::NewVirusCard);
    assert_eq!(game.view(), View::VirusAssembly);
    assert_eq!(game.viruses().len(), 1);
}
