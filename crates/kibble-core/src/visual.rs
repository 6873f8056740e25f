//! Visual states the pet can display.

/// The single animation/sprite state shown for the pet.
///
/// Only one state is displayed at a time even when several conditions
/// hold at once; the pet picks the last matching state in its update
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    /// Idle, nothing wrong
    #[default]
    Default,
    /// Happiness ran out
    Angry,
    /// Hungry and unhappy about it
    Sad,
    /// Asleep and recovering
    Sleep,
    /// Health ran out
    Dead,
}

impl VisualState {
    /// Returns the lowercase state name used for display lookups.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Angry => "angry",
            Self::Sad => "sad",
            Self::Sleep => "sleep",
            Self::Dead => "dead",
        }
    }

    /// Returns all visual states.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Default,
            Self::Angry,
            Self::Sad,
            Self::Sleep,
            Self::Dead,
        ]
    }
}
