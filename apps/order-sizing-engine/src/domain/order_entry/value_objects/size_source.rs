//! Which size field the user last edited.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source of truth for the base/quote size pair.
///
/// The source field holds what the user typed; the other field is always
/// derived from it under the active price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizeSource {
    /// Base-asset size was entered; quote size is derived.
    Base,
    /// Quote-asset size was entered; base size is derived.
    Quote,
}

impl fmt::Display for SizeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "BASE"),
            Self::Quote => write!(f, "QUOTE"),
        }
    }
}
