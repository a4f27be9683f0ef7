//! Anchor edge for a floating panel

use serde::{Deserialize, Serialize};

/// Screen edge a floating panel hangs from.
///
/// The anchor edge decides which on-screen direction "more expanded" moves:
/// a bottom-anchored panel grows upward as its state order increases, a
/// top-anchored one grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPosition {
    Top,
    Bottom,
}

impl PanelPosition {
    /// All anchor positions for iteration
    pub const ALL: [PanelPosition; 2] = [PanelPosition::Top, PanelPosition::Bottom];

    /// The opposite edge
    pub fn opposite(&self) -> PanelPosition {
        match self {
            PanelPosition::Top => PanelPosition::Bottom,
            PanelPosition::Bottom => PanelPosition::Top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(PanelPosition::Top.opposite(), PanelPosition::Bottom);
        assert_eq!(PanelPosition::Bottom.opposite(), PanelPosition::Top);
    }

    #[test]
    fn test_all_covers_both_edges() {
        assert_eq!(PanelPosition::ALL.len(), 2);
        assert!(PanelPosition::ALL.contains(&PanelPosition::Top));
        assert!(PanelPosition::ALL.contains(&PanelPosition::Bottom));
    }
}
