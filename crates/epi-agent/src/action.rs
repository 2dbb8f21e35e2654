//! The social action an agent performs in one hour.

use std::fmt;

/// Outcome of the hourly decision.
///
/// The discriminant is the position in a behavior probability vector:
/// `[SocializeLocal, SocializeGlobal, HangWithFriends, Shopping, Nothing]`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    SocializeLocal  = 0,
    SocializeGlobal = 1,
    HangWithFriends = 2,
    Shopping        = 3,
    #[default]
    Nothing         = 4,
}

impl Action {
    /// Number of outcomes in a behavior probability vector.
    pub const COUNT: usize = 5;

    pub const ALL: [Action; Action::COUNT] = [
        Action::SocializeLocal,
        Action::SocializeGlobal,
        Action::HangWithFriends,
        Action::Shopping,
        Action::Nothing,
    ];

    /// Map a sampler index back to its action.  Out-of-range maps to `Nothing`.
    pub fn from_index(idx: usize) -> Action {
        Action::ALL.get(idx).copied().unwrap_or(Action::Nothing)
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::SocializeLocal  => "socialize_local",
            Action::SocializeGlobal => "socialize_global",
            Action::HangWithFriends => "hang_with_friends",
            Action::Shopping        => "shopping",
            Action::Nothing         => "nothing",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
