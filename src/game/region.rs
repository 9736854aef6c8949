//! Hit-testable regions for pointer interaction

use crate::sim::Industry;

/// Rectangular screen area in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, pos: [f32; 2]) -> bool {
        pos[0] >= self.x
            && pos[0] <= self.x + self.width
            && pos[1] >= self.y
            && pos[1] <= self.y + self.height
    }

    /// Get the center point of the rectangle
    pub fn center(&self) -> [f32; 2] {
        [self.x + self.width / 2.0, self.y + self.height / 2.0]
    }
}

/// Semantic action attached to an interactive region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// Scroll the main list toward later entries
    ScrollUp,
    /// Scroll the main list back toward the first entry
    ScrollDown,
    /// Leave the main list for the world map
    ToWorldMap,
    /// Return to the main list
    ToMainList,
    /// Release the selected virus (validity-gated)
    Release,
    /// Select a target industry for the selected virus
    Industry(Industry),
    /// Open the virus at this index
    VirusCard(usize),
    /// Create a new virus and open its assembly screen
    NewVirusCard,
    /// Transfer this inventory block to the selected virus
    InventoryCard(usize),
    /// Transfer this assigned block back to the inventory
    VirusBlockCard(usize),
}

/// One interactive region: a rectangle plus what activating it means
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub kind: RegionKind,
    pub rect: Rect,
}

impl Region {
    pub fn new(kind: RegionKind, rect: Rect) -> Self {
        Self { kind, rect }
    }
}

/// Index of the first region containing the pointer, in list order.
///
/// List order is the hit contract: chrome buttons precede card regions, so a
/// card scrolled underneath a chrome button never steals its hit.
pub fn hit_test(regions: &[Region], pos: Option<[f32; 2]>) -> Option<usize> {
    let pos = pos?;
    regions.iter().position(|r| r.rect.contains(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges_inclusive() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains([10.0, 10.0]));
        assert!(rect.contains([30.0, 30.0]));
        assert!(!rect.contains([9.9, 15.0]));
        assert!(!rect.contains([15.0, 30.1]));
    }

    #[test]
    fn test_hit_test_prefers_earlier_regions() {
        let regions = [
            Region::new(RegionKind::ScrollUp, Rect::new(0.0, 0.0, 50.0, 50.0)),
            Region::new(RegionKind::VirusCard(0), Rect::new(25.0, 25.0, 50.0, 50.0)),
        ];
        assert_eq!(hit_test(&regions, Some([40.0, 40.0])), Some(0));
        assert_eq!(hit_test(&regions, Some([60.0, 60.0])), Some(1));
        assert_eq!(hit_test(&regions, Some([200.0, 200.0])), None);
        assert_eq!(hit_test(&regions, None), None);
    }
}
