//! Companion lifecycle state.
//!
//! ```text
//! egg → hatched
//! ```
//!
//! Serialized as the bare strings `"egg"` and `"hatched"`. Any other string
//! deserializes into [`LifecycleState::Unrecognized`] so that a hand-edited
//! record surfaces as a validation failure rather than a parse failure.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LifecycleState {
    Egg,
    Hatched,
    /// A state string read from storage that is not part of the lifecycle.
    Unrecognized(String),
}

impl LifecycleState {
    /// Parse a stored state string. Never fails; unknown input is kept verbatim.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::from(raw.to_string())
    }

    /// The state a successful transition leads to, if any.
    #[must_use]
    pub fn next_state(&self) -> Option<Self> {
        match self {
            Self::Egg => Some(Self::Hatched),
            Self::Hatched | Self::Unrecognized(_) => None,
        }
    }

    #[must_use]
    pub fn can_transition_to(&self, next: &Self) -> bool {
        self.next_state().as_ref() == Some(next)
    }

    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Egg => "egg",
            Self::Hatched => "hatched",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for LifecycleState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "egg" => Self::Egg,
            "hatched" => Self::Hatched,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<LifecycleState> for String {
    fn from(state: LifecycleState) -> Self {
        match state {
            LifecycleState::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
