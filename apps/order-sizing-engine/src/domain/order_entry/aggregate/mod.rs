//! Order Ticket Aggregate
//!
//! [`OrderSizingEngine`] is the root; it owns an [`OrderDraft`] and hands out
//! a [`SubmittableOrder`] once the draft passes validation.

mod order_draft;
mod order_sizing_engine;
mod submittable_order;

pub use order_draft::OrderDraft;
pub use order_sizing_engine::OrderSizingEngine;
pub use submittable_order::SubmittableOrder;
