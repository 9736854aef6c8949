//! The five mutually exclusive screens

/// Active screen of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Virus list with the tray, scroll arrows, and the create-new card
    #[default]
    MainList,
    /// World map overview
    WorldMap,
    /// Block market. Reserved: renders background and chrome only.
    Market,
    /// Read-only summary of a released virus
    VirusInfo,
    /// Assembly screen for an unreleased virus
    VirusAssembly,
}

impl View {
    /// Views that read the current virus selection
    pub fn requires_selection(self) -> bool {
        matches!(self, View::VirusInfo | View::VirusAssembly)
    }

    /// Name for log lines and the debug overlay
    pub fn name(self) -> &'static str {
        match self {
            View::MainList => "main list",
            View::WorldMap => "world map",
            View::Market => "market",
            View::VirusInfo => "virus info",
            View::VirusAssembly => "virus assembly",
        }
    }
}
