//! Post-Only / Immediate-Or-Cancel order modifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Execution modifiers attached to an order.
///
/// At most one flag may be set. The setters below keep that invariant;
/// [`OrderModifiers::is_consistent`] checks it for values built by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderModifiers {
    /// Reject any immediate match; the order may only add liquidity.
    pub post_only: bool,
    /// Cancel any unfilled remainder instead of resting.
    pub immediate_or_cancel: bool,
}

impl OrderModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        post_only: false,
        immediate_or_cancel: false,
    };

    /// Fixed modifiers of a market order.
    pub const MARKET: Self = Self {
        post_only: false,
        immediate_or_cancel: true,
    };

    /// Set Post-Only; turning it on clears IOC.
    #[must_use]
    pub const fn with_post_only(self, enabled: bool) -> Self {
        Self {
            post_only: enabled,
            immediate_or_cancel: self.immediate_or_cancel && !enabled,
        }
    }

    /// Set Immediate-Or-Cancel; turning it on clears Post-Only.
    #[must_use]
    pub const fn with_immediate_or_cancel(self, enabled: bool) -> Self {
        Self {
            post_only: self.post_only && !enabled,
            immediate_or_cancel: enabled,
        }
    }

    /// Returns false when both flags are set.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        !(self.post_only && self.immediate_or_cancel)
    }

    /// The venue order kind these modifiers map to.
    ///
    /// IOC wins over Post-Only; the pair is rejected before this is reached.
    #[must_use]
    pub const fn execution_instruction(&self) -> ExecutionInstruction {
        if self.immediate_or_cancel {
            ExecutionInstruction::Ioc
        } else if self.post_only {
            ExecutionInstruction::PostOnly
        } else {
            ExecutionInstruction::Limit
        }
    }
}

/// Order kind handed to the submission transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionInstruction {
    /// Plain resting limit order.
    Limit,
    /// Immediate-or-cancel.
    Ioc,
    /// Post-only (maker-only).
    PostOnly,
}

impl fmt::Display for ExecutionInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limit => write!(f, "LIMIT"),
            Self::Ioc => write!(f, "IOC"),
            Self::PostOnly => write!(f, "POST_ONLY"),
        }
    }
}
