//! Resolution-dependent geometry for every view
//!
//! All rectangles derive from the current resolution and are rebuilt from
//! scratch on every resolution change; there is no incremental relayout.
//! Region list order is fixed per view: chrome buttons first, then card
//! regions in collection order, with the create-new card appended last on
//! the main list.

use enum_map::{EnumMap, enum_map};

use super::region::{Rect, Region, RegionKind};
use crate::sim::Industry;

/// Sidebar button width as a fraction of screen width
const SIDEBAR_FRAC: f32 = 1.0 / 15.0;
/// Virus tray width as a fraction of screen width
const TRAY_FRAC: f32 = 1.0 / 5.0;
/// Scroll bar width as a fraction of screen width
const SCROLLBAR_FRAC: f32 = 1.0 / 40.0;
/// Vertical gap factor between stacked virus cards
const CARD_PITCH_FACTOR: f32 = 1.1;
/// Block row pitch as a fraction of screen width
const BLOCK_PITCH_FRAC: f32 = 0.016;
/// Block card size as fractions of screen width
const BLOCK_CARD_FRAC: [f32; 2] = [0.15, 0.014];
/// Info bar height as a fraction of screen height
const INFOBAR_FRAC: f32 = 0.1;
/// Button width to height ratios on the info bar, sized to their labels
const RELEASE_WIDTH_RATIO: f32 = 4.833;
const POWERPLANT_WIDTH_RATIO: f32 = 6.283;
const CHEMICAL_WIDTH_RATIO: f32 = 7.733;
const MANUFACTORY_WIDTH_RATIO: f32 = 8.216;

/// Main list geometry: tray, scroll arrows, world map button, card column
#[derive(Debug, Clone)]
pub struct MainListLayout {
    pub world_map_button: Rect,
    pub tray: Rect,
    pub scroll_track: Rect,
    pub scroll_up: Rect,
    pub scroll_down: Rect,
    pub card_x: f32,
    pub card_size: [f32; 2],
    /// Vertical distance between consecutive card tops
    pub card_pitch: f32,
}

impl MainListLayout {
    fn new(resolution: [f32; 2]) -> Self {
        let [w, h] = resolution;
        let tray_w = w * TRAY_FRAC;
        let scroll_w = w * SCROLLBAR_FRAC;
        let tray_x = w - tray_w - scroll_w;
        let card_size = [w / 5.0, w / 15.0];

        Self {
            world_map_button: Rect::new(0.0, 0.0, w * SIDEBAR_FRAC, h),
            tray: Rect::new(tray_x, 0.0, tray_w + scroll_w, h),
            scroll_track: Rect::new(tray_x, 0.0, scroll_w, h),
            scroll_up: Rect::new(tray_x, 0.0, scroll_w, scroll_w),
            scroll_down: Rect::new(tray_x, h - scroll_w, scroll_w, scroll_w),
            card_x: w - tray_w,
            card_size,
            card_pitch: card_size[1] * CARD_PITCH_FACTOR,
        }
    }

    /// Rectangle of the card at `index` under the given scroll offset.
    /// The create-new card sits at `index == virus count`.
    pub fn card_rect(&self, index: usize, scroll: f32) -> Rect {
        Rect::new(
            self.card_x,
            self.card_pitch * index as f32 + scroll,
            self.card_size[0],
            self.card_size[1],
        )
    }

    /// Height of the full card stack including the create-new card
    pub fn total_content_height(&self, n_viruses: usize) -> f32 {
        (n_viruses + 1) as f32 * self.card_pitch
    }
}

/// World map geometry: a single return button on the right edge
#[derive(Debug, Clone)]
pub struct WorldMapLayout {
    pub main_list_button: Rect,
}

impl WorldMapLayout {
    fn new(resolution: [f32; 2]) -> Self {
        let [w, h] = resolution;
        let button_w = w * SIDEBAR_FRAC;
        Self {
            main_list_button: Rect::new(w - button_w, 0.0, button_w, h),
        }
    }
}

/// Assembly screen geometry: sidebar, block columns, and the info bar
///
/// The virus info screen shares the sidebar button.
#[derive(Debug, Clone)]
pub struct AssemblyLayout {
    pub back_button: Rect,
    pub infobar: Rect,
    pub release_button: Rect,
    pub industry_buttons: EnumMap<Industry, Rect>,
    pub inventory_column_x: f32,
    pub virus_column_x: f32,
    pub block_top: f32,
    pub block_pitch: f32,
    pub block_size: [f32; 2],
}

impl AssemblyLayout {
    fn new(resolution: [f32; 2]) -> Self {
        let [w, h] = resolution;
        let sidebar_w = w * SIDEBAR_FRAC;
        let usable = w - sidebar_w;
        let block_pitch = w * BLOCK_PITCH_FRAC;

        let infobar = Rect::new(sidebar_w, h * (1.0 - INFOBAR_FRAC), usable, h * INFOBAR_FRAC);
        let btn_h = infobar.height / 3.0;

        // Buttons are anchored by their bottom-right corners, laid out right
        // to left along the info bar with btn_h-sized gaps.
        let release_w = btn_h * RELEASE_WIDTH_RATIO;
        let powerplant_w = btn_h * POWERPLANT_WIDTH_RATIO;
        let chemical_w = btn_h * CHEMICAL_WIDTH_RATIO;
        let manufactory_w = btn_h * MANUFACTORY_WIDTH_RATIO;
        let btn_y = h - 2.0 * btn_h;

        let release_right = w - btn_h;
        let powerplant_right = w - 4.0 * btn_h - release_w;
        let chemical_right = powerplant_right - btn_h - powerplant_w;
        let manufactory_right = chemical_right - btn_h - chemical_w;

        let powerplant = Rect::new(powerplant_right - powerplant_w, btn_y, powerplant_w, btn_h);
        let chemical = Rect::new(chemical_right - chemical_w, btn_y, chemical_w, btn_h);
        let manufactory = Rect::new(manufactory_right - manufactory_w, btn_y, manufactory_w, btn_h);

        Self {
            back_button: Rect::new(0.0, 0.0, sidebar_w, h),
            infobar,
            release_button: Rect::new(release_right - release_w, btn_y, release_w, btn_h),
            industry_buttons: enum_map! {
                Industry::PowerPlant => powerplant,
                Industry::Chemical => chemical,
                Industry::Manufactory => manufactory,
            },
            inventory_column_x: usable / 5.0 + sidebar_w,
            virus_column_x: usable * 3.0 / 5.0 + sidebar_w,
            block_top: block_pitch * 2.0,
            block_pitch,
            block_size: [w * BLOCK_CARD_FRAC[0], w * BLOCK_CARD_FRAC[1]],
        }
    }

    /// Rectangle of the inventory block card at `index`
    pub fn inventory_card_rect(&self, index: usize) -> Rect {
        self.block_card_rect(self.inventory_column_x, index)
    }

    /// Rectangle of the assigned block card at `index`
    pub fn virus_card_rect(&self, index: usize) -> Rect {
        self.block_card_rect(self.virus_column_x, index)
    }

    fn block_card_rect(&self, column_x: f32, index: usize) -> Rect {
        Rect::new(
            column_x,
            self.block_top + index as f32 * self.block_pitch,
            self.block_size[0],
            self.block_size[1],
        )
    }
}

/// Virus info geometry: a single return button on the left edge
#[derive(Debug, Clone)]
pub struct VirusInfoLayout {
    pub back_button: Rect,
}

impl VirusInfoLayout {
    fn new(resolution: [f32; 2]) -> Self {
        let [w, h] = resolution;
        Self {
            back_button: Rect::new(0.0, 0.0, w * SIDEBAR_FRAC, h),
        }
    }
}

/// All per-view geometry for one resolution
#[derive(Debug, Clone)]
pub struct Layout {
    pub resolution: [f32; 2],
    pub main_list: MainListLayout,
    pub world_map: WorldMapLayout,
    pub virus_info: VirusInfoLayout,
    pub assembly: AssemblyLayout,
}

impl Layout {
    /// Computes every view's geometry for the given resolution
    pub fn new(resolution: [f32; 2]) -> Self {
        Self {
            resolution,
            main_list: MainListLayout::new(resolution),
            world_map: WorldMapLayout::new(resolution),
            virus_info: VirusInfoLayout::new(resolution),
            assembly: AssemblyLayout::new(resolution),
        }
    }

    /// Main list regions: scroll arrows, world map button, then one region
    /// per virus card and the create-new card last
    pub fn main_list_regions(&self, n_viruses: usize, scroll: f32) -> Vec<Region> {
        let ml = &self.main_list;
        let mut regions = vec![
            Region::new(RegionKind::ScrollUp, ml.scroll_up),
            Region::new(RegionKind::ScrollDown, ml.scroll_down),
            Region::new(RegionKind::ToWorldMap, ml.world_map_button),
        ];
        for i in 0..n_viruses {
            regions.push(Region::new(RegionKind::VirusCard(i), ml.card_rect(i, scroll)));
        }
        regions.push(Region::new(
            RegionKind::NewVirusCard,
            ml.card_rect(n_viruses, scroll),
        ));
        regions
    }

    /// World map regions: the return button only
    pub fn world_map_regions(&self) -> Vec<Region> {
        vec![Region::new(
            RegionKind::ToMainList,
            self.world_map.main_list_button,
        )]
    }

    /// Virus info regions: the return button only
    pub fn virus_info_regions(&self) -> Vec<Region> {
        vec![Region::new(
            RegionKind::ToMainList,
            self.virus_info.back_button,
        )]
    }

    /// Assembly regions: chrome buttons in fixed order, then inventory cards,
    /// then the selected virus's block cards
    pub fn assembly_regions(&self, n_inventory: usize, n_virus_blocks: usize) -> Vec<Region> {
        let a = &self.assembly;
        let mut regions = vec![
            Region::new(RegionKind::ToMainList, a.back_button),
            Region::new(RegionKind::Release, a.release_button),
        ];
        for industry in Industry::ALL {
            regions.push(Region::new(
                RegionKind::Industry(industry),
                a.industry_buttons[industry],
            ));
        }
        for i in 0..n_inventory {
            regions.push(Region::new(
                RegionKind::InventoryCard(i),
                a.inventory_card_rect(i),
            ));
        }
        for j in 0..n_virus_blocks {
            regions.push(Region::new(
                RegionKind::VirusBlockCard(j),
                a.virus_card_rect(j),
            ));
        }
        regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RES: [f32; 2] = [1920.0, 1080.0];

    #[test]
    fn test_main_list_region_order_is_stable() {
        let layout = Layout::new(RES);
        let regions = layout.main_list_regions(2, 0.0);

        let kinds: Vec<_> = regions.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RegionKind::ScrollUp,
                RegionKind::ScrollDown,
                RegionKind::ToWorldMap,
                RegionKind::VirusCard(0),
                RegionKind::VirusCard(1),
                RegionKind::NewVirusCard,
            ]
        );

        // Identical state reproduces identical geometry
        assert_eq!(regions, layout.main_list_regions(2, 0.0));
    }

    #[test]
    fn test_assembly_region_order_is_stable() {
        let layout = Layout::new(RES);
        let regions = layout.assembly_regions(2, 1);

        let kinds: Vec<_> = regions.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RegionKind::ToMainList,
                RegionKind::Release,
                RegionKind::Industry(Industry::PowerPlant),
                RegionKind::Industry(Industry::Chemical),
                RegionKind::Industry(Industry::Manufactory),
                RegionKind::InventoryCard(0),
                RegionKind::InventoryCard(1),
                RegionKind::VirusBlockCard(0),
            ]
        );
    }

    #[test]
    fn test_card_rects_track_scroll_offset() {
        let layout = Layout::new(RES);
        let at_rest = layout.main_list.card_rect(1, 0.0);
        let scrolled = layout.main_list.card_rect(1, -50.0);
        assert_eq!(scrolled.y, at_rest.y - 50.0);
        assert_eq!(scrolled.x, at_rest.x);
    }

    #[test]
    fn test_info_bar_buttons_do_not_overlap() {
        let layout = Layout::new(RES);
        let a = &layout.assembly;

        let mut rects = vec![a.release_button];
        rects.extend(Industry::ALL.iter().map(|&i| a.industry_buttons[i]));

        // Right-to-left layout: each button ends left of the previous start
        for pair in rects.windows(2) {
            assert!(pair[1].x + pair[1].width < pair[0].x);
        }
    }

    #[test]
    fn test_resolution_change_rescales_everything() {
        let small = Layout::new([960.0, 540.0]);
        let large = Layout::new(RES);
        assert!(small.main_list.card_pitch < large.main_list.card_pitch);
        assert!(small.assembly.block_size[0] < large.assembly.block_size[0]);
        assert_eq!(small.main_list.world_map_button.width, 960.0 / 15.0);
    }
}
