//! Tactical mechanics: movement intents and how each one ranks candidates.

use serde::{Deserialize, Serialize};

/// The tactical posture an agent asks cover for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CoverIntent {
    /// Hold position near the current location.
    #[default]
    Normal,
    /// Get behind the target.
    Flanking,
    /// Move forward towards the target without passing it.
    Advancing,
    /// Fall back behind the agent.
    Retreating,
}

impl CoverIntent {
    /// Every intent, in declaration order.
    pub const ALL: [CoverIntent; 4] = [
        CoverIntent::Normal,
        CoverIntent::Flanking,
        CoverIntent::Advancing,
        CoverIntent::Retreating,
    ];

    /// How competing candidates are ranked for this intent.
    ///
    /// Flanking prefers the farthest point; every other intent the nearest.
    pub fn tie_break(&self) -> TieBreak {
        match self {
            CoverIntent::Flanking => TieBreak::Farthest,
            CoverIntent::Normal | CoverIntent::Advancing | CoverIntent::Retreating => {
                TieBreak::Nearest
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CoverIntent::Normal => "normal",
            CoverIntent::Flanking => "flanking",
            CoverIntent::Advancing => "advancing",
            CoverIntent::Retreating => "retreating",
        }
    }
}

impl std::fmt::Display for CoverIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ranking rule applied to candidates by distance from the requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    Nearest,
    Farthest,
}

impl TieBreak {
    /// Whether `candidate` strictly beats `best`. Equal distances never win,
    /// so the first candidate seen keeps the slot.
    pub fn prefers(&self, candidate: f32, best: f32) -> bool {
        match self {
            TieBreak::Nearest => candidate < best,
            TieBreak::Farthest => candidate > best,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_break_per_intent() {
        assert_eq!(CoverIntent::Flanking.tie_break(), TieBreak::Farthest);
        assert_eq!(CoverIntent::Normal.tie_break(), TieBreak::Nearest);
        assert_eq!(CoverIntent::Advancing.tie_break(), TieBreak::Nearest);
        assert_eq!(CoverIntent::Retreating.tie_break(), TieBreak::Nearest);
    }

    #[test]
    fn test_prefers_is_strict() {
        assert!(TieBreak::Nearest.prefers(1.0, 2.0));
        assert!(!TieBreak::Nearest.prefers(2.0, 2.0));
        assert!(TieBreak::Farthest.prefers(3.0, 2.0));
        assert!(!TieBreak::Farthest.prefers(2.0, 2.0));
    }

    #[test]
    fn test_intent_display() {
        assert_eq!(CoverIntent::Retreating.to_string(), "retreating");
        assert_eq!(CoverIntent::default(), CoverIntent::Normal);
    }
}
