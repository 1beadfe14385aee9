//! Order Sizing Engine Aggregate Root
//!
//! Owns one [`OrderDraft`] for one market and applies user edits to it as
//! explicit state transitions. Every setter works on a copy of the draft
//! and commits only when the whole recomputation succeeded, so a rejected
//! call leaves the ticket exactly as it was.
//!
//! # Size synchronization
//!
//! ```text
//! source = BASE : quote = round_dp(base  * active_price, size_decimals)
//! source = QUOTE: base  = round_step(quote / active_price, min_order_size)
//! active_price  : limit price (LIMIT with price set) else reference price
//! ```
//!
//! A zero or missing active price clears the derived field.
//!
//! # Order type state machine
//!
//! | Transition | Modifiers | Limit price |
//! |------------|-----------|-------------|
//! | -> MARKET | IOC forced on, Post-Only off | cleared |
//! | MARKET -> LIMIT | both off | best opposite book price, else reference |

use rust_decimal::Decimal;

use super::{OrderDraft, SubmittableOrder};
use crate::domain::market_data::OrderBookSnapshot;
use crate::domain::order_entry::errors::{DraftError, MarketPriceError, ValidationError};
use crate::domain::order_entry::services::{MarketPriceEstimate, resolve_market_execution_price};
use crate::domain::order_entry::value_objects::{
    OrderModifiers, OrderSide, OrderType, PrecisionSpec, SizeSource,
};
use crate::domain::shared::{Price, Quantity, Symbol};

/// Order ticket for a single market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSizingEngine {
    market: Symbol,
    precision: PrecisionSpec,
    draft: OrderDraft,
}

impl OrderSizingEngine {
    /// Open a fresh ticket for `market`.
    #[must_use]
    pub fn new(market: Symbol, precision: PrecisionSpec) -> Self {
        Self {
            market,
            precision,
            draft: OrderDraft::new(),
        }
    }

    /// Market this ticket trades.
    #[must_use]
    pub const fn market(&self) -> &Symbol {
        &self.market
    }

    /// Rounding granularity of the current market.
    #[must_use]
    pub const fn precision(&self) -> &PrecisionSpec {
        &self.precision
    }

    /// Current draft.
    #[must_use]
    pub const fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    // =========================================================================
    // Side and order type
    // =========================================================================

    /// Switch buy/sell.
    ///
    /// Sizes and prices are kept. A resolved market price came from the
    /// other side of the book and is dropped.
    pub fn set_side(&mut self, side: OrderSide) {
        if self.draft.side == side {
            return;
        }
        self.draft.side = side;
        self.draft.market_price = None;
        tracing::debug!(market = %self.market, side = %side, "Order side changed");
    }

    /// Transition between limit and market.
    ///
    /// `book` supplies the default limit price when leaving market; pass
    /// `None` when no snapshot is available and the reference price will be
    /// used instead.
    pub fn set_order_type(
        &mut self,
        order_type: OrderType,
        book: Option<&OrderBookSnapshot>,
    ) -> Result<(), DraftError> {
        if self.draft.order_type == order_type {
            return Ok(());
        }

        let mut next = self.draft.clone();
        next.order_type = order_type;
        next.market_price = None;
        match order_type {
            OrderType::Market => {
                next.modifiers = OrderModifiers::MARKET;
                next.limit_price = None;
            }
            OrderType::Limit => {
                next.modifiers = OrderModifiers::NONE;
                next.limit_price = self.default_limit_price(book);
            }
        }
        self.sync_sizes(&mut next)?;

        tracing::debug!(
            market = %self.market,
            order_type = %order_type,
            limit_price = ?next.limit_price,
            "Order type changed"
        );
        self.draft = next;
        Ok(())
    }

    /// Toggle Post-Only. Enabling it clears IOC.
    pub fn set_post_only(&mut self, enabled: bool) -> Result<(), DraftError> {
        self.ensure_modifiers_editable()?;
        self.draft.modifiers = self.draft.modifiers.with_post_only(enabled);
        tracing::debug!(market = %self.market, post_only = enabled, "Post-only toggled");
        Ok(())
    }

    /// Toggle Immediate-Or-Cancel. Enabling it clears Post-Only.
    pub fn set_immediate_or_cancel(&mut self, enabled: bool) -> Result<(), DraftError> {
        self.ensure_modifiers_editable()?;
        self.draft.modifiers = self.draft.modifiers.with_immediate_or_cancel(enabled);
        tracing::debug!(market = %self.market, ioc = enabled, "IOC toggled");
        Ok(())
    }

    // =========================================================================
    // Prices
    // =========================================================================

    /// Set the limit price, rounded half-up to the nearest tick.
    pub fn set_limit_price(&mut self, value: Decimal) -> Result<(), DraftError> {
        if self.draft.order_type.is_market() {
            return Err(DraftError::LimitPriceLocked {
                order_type: self.draft.order_type,
            });
        }
        let price = self.round_price("limit_price", value)?;

        let mut next = self.draft.clone();
        next.limit_price = Some(price);
        self.sync_sizes(&mut next)?;

        tracing::debug!(market = %self.market, price = %price, "Limit price set");
        self.draft = next;
        Ok(())
    }

    /// Replace the reference (mark) price from the price feed.
    ///
    /// A limit draft without a price is seeded with it, rounded to tick.
    pub fn set_reference_price(&mut self, value: Decimal) -> Result<(), DraftError> {
        let reference = Price::try_new(value).map_err(|_| DraftError::NegativeValue {
            field: "reference_price",
            value,
        })?;

        let mut next = self.draft.clone();
        next.reference_price = reference;
        self.seed_limit_price(&mut next);
        self.sync_sizes(&mut next)?;

        tracing::debug!(
            market = %self.market,
            reference_price = %reference,
            base_size = ?next.base_size,
            quote_size = ?next.quote_size,
            "Reference price updated"
        );
        self.draft = next;
        Ok(())
    }

    // =========================================================================
    // Sizes
    // =========================================================================

    /// Enter a base-asset size; the quote size follows.
    pub fn set_base_size(&mut self, value: Decimal) -> Result<(), DraftError> {
        let size = self.round_base_size("base_size", value)?;

        let mut next = self.draft.clone();
        next.base_size = Some(size);
        next.size_source = Some(SizeSource::Base);
        next.market_price = None;
        self.sync_sizes(&mut next)?;

        tracing::debug!(
            market = %self.market,
            base_size = %size,
            quote_size = ?next.quote_size,
            "Base size set"
        );
        self.draft = next;
        Ok(())
    }

    /// Enter a quote-asset size; the base size follows.
    pub fn set_quote_size(&mut self, value: Decimal) -> Result<(), DraftError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DraftError::NegativeValue {
                field: "quote_size",
                value,
            });
        }
        let size = Quantity::new(self.precision.round_quote_size(value));

        let mut next = self.draft.clone();
        next.quote_size = Some(size);
        next.size_source = Some(SizeSource::Quote);
        next.market_price = None;
        self.sync_sizes(&mut next)?;

        tracing::debug!(
            market = %self.market,
            quote_size = %size,
            base_size = ?next.base_size,
            "Quote size set"
        );
        self.draft = next;
        Ok(())
    }

    /// Empty both size fields.
    pub fn clear_sizes(&mut self) {
        self.draft.base_size = None;
        self.draft.quote_size = None;
        self.draft.size_source = None;
        self.draft.market_price = None;
        tracing::debug!(market = %self.market, "Sizes cleared");
    }

    /// Fill the ticket from a clicked order book row.
    ///
    /// The price is ignored on market orders; the size is always applied.
    pub fn apply_book_selection(
        &mut self,
        size: Option<Decimal>,
        price: Option<Decimal>,
    ) -> Result<(), DraftError> {
        let mut next = self.clone();
        if let Some(price) = price {
            if next.draft.order_type.is_market() {
                tracing::debug!(market = %self.market, "Ignoring book price on market order");
            } else {
                next.set_limit_price(price)?;
            }
        }
        if let Some(size) = size {
            next.set_base_size(size)?;
        }
        *self = next;
        Ok(())
    }

    // =========================================================================
    // Market price resolution and validation
    // =========================================================================

    /// Walk `book` for the draft's side and base size and remember the price.
    ///
    /// On failure any previously resolved price is dropped, so a market
    /// order cannot be submitted against a stale estimate.
    pub fn resolve_market_price(
        &mut self,
        book: &OrderBookSnapshot,
    ) -> Result<MarketPriceEstimate, MarketPriceError> {
        let target = self.draft.base_size.unwrap_or_default();
        match resolve_market_execution_price(book, self.draft.side, target) {
            Ok(estimate) => {
                self.draft.market_price = Some(estimate.average_price);
                Ok(estimate)
            }
            Err(err) => {
                self.draft.market_price = None;
                tracing::debug!(market = %self.market, error = %err, "Market price unresolved");
                Err(err)
            }
        }
    }

    /// Gate the current draft for submission.
    pub fn validate_for_submit(&self) -> Result<SubmittableOrder, ValidationError> {
        self.draft.validate_for_submit()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Discard the draft after a successful submission.
    ///
    /// The reference price survives and re-seeds the limit price.
    pub fn reset(&mut self) {
        let mut next = OrderDraft {
            reference_price: self.draft.reference_price,
            ..OrderDraft::new()
        };
        self.seed_limit_price(&mut next);
        tracing::debug!(
            market = %self.market,
            limit_price = ?next.limit_price,
            "Draft reset"
        );
        self.draft = next;
    }

    /// Move the ticket to another market with a fresh draft.
    pub fn switch_market(&mut self, market: Symbol, precision: PrecisionSpec) {
        tracing::debug!(from = %self.market, to = %market, "Switching market");
        self.market = market;
        self.precision = precision;
        self.draft = OrderDraft::new();
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn ensure_modifiers_editable(&self) -> Result<(), DraftError> {
        if self.draft.order_type.is_market() {
            return Err(DraftError::ModifiersLocked {
                order_type: self.draft.order_type,
            });
        }
        Ok(())
    }

    fn default_limit_price(&self, book: Option<&OrderBookSnapshot>) -> Option<Price> {
        let book_side = self.draft.side.opposing_book_side();
        book.and_then(|b| b.best_price(book_side))
            .and_then(Price::positive)
            .or_else(|| self.draft.reference_price.positive())
            .and_then(|p| self.precision.round_price(p.amount()))
            .map(Price::new)
    }

    fn seed_limit_price(&self, draft: &mut OrderDraft) {
        if draft.order_type == OrderType::Limit && draft.limit_price.is_none() {
            draft.limit_price = draft
                .reference_price
                .positive()
                .and_then(|p| self.precision.round_price(p.amount()))
                .map(Price::new);
        }
    }

    fn round_price(&self, field: &'static str, value: Decimal) -> Result<Price, DraftError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DraftError::NegativeValue { field, value });
        }
        self.precision
            .round_price(value)
            .map(Price::new)
            .ok_or(DraftError::OutOfRange { field, value })
    }

    fn round_base_size(&self, field: &'static str, value: Decimal) -> Result<Quantity, DraftError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DraftError::NegativeValue { field, value });
        }
        self.precision
            .round_base_size(value)
            .map(Quantity::new)
            .ok_or(DraftError::OutOfRange { field, value })
    }

    /// Recompute the derived size field of `draft` from its source field.
    fn sync_sizes(&self, draft: &mut OrderDraft) -> Result<(), DraftError> {
        let price = draft.active_price().map(|p| p.amount());
        match draft.size_source {
            Some(SizeSource::Base) => {
                draft.quote_size = match (draft.base_size, price) {
                    (Some(base), Some(price)) => {
                        let raw = base.amount().checked_mul(price).ok_or(
                            DraftError::OutOfRange {
                                field: "quote_size",
                                value: base.amount(),
                            },
                        )?;
                        Some(Quantity::new(self.precision.round_quote_size(raw)))
                    }
                    _ => None,
                };
            }
            Some(SizeSource::Quote) => {
                let base_size = match (draft.quote_size, price) {
                    (Some(quote), Some(price)) => {
                        let raw = quote.amount().checked_div(price).ok_or(
                            DraftError::OutOfRange {
                                field: "base_size",
                                value: quote.amount(),
                            },
                        )?;
                        Some(self.round_base_size("base_size", raw)?)
                    }
                    _ => None,
                };
                // An estimate only holds for the size it was walked with
                if base_size != draft.base_size {
                    draft.market_price = None;
                }
                draft.base_size = base_size;
            }
            None => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::PriceLevel;
    use rust_decimal_macros::dec;

    fn engine() -> OrderSizingEngine {
        OrderSizingEngine::new(
            Symbol::new("SOL/USDC"),
            PrecisionSpec::new(dec!(0.05), dec!(0.1)).unwrap(),
        )
    }

    fn book() -> OrderBookSnapshot {
        OrderBookSnapshot::new(
            vec![
                PriceLevel::from_pair(dec!(100), dec!(2)),
                PriceLevel::from_pair(dec!(99), dec!(3)),
            ],
            vec![
                PriceLevel::from_pair(dec!(101), dec!(1)),
                PriceLevel::from_pair(dec!(102), dec!(4)),
            ],
        )
    }

    fn quantity(value: Decimal) -> Option<Quantity> {
        Some(Quantity::new(value))
    }

    fn price(value: Decimal) -> Option<Price> {
        Some(Price::new(value))
    }

    // -------------------------------------------------------------------------
    // Size synchronization
    // -------------------------------------------------------------------------

    #[test]
    fn base_size_derives_quote_from_reference_price() {
        let mut engine = engine();
        engine.set_reference_price(dec!(20)).unwrap();
        engine.set_base_size(dec!(2.5)).unwrap();

        let draft = engine.draft();
        assert_eq!(draft.base_size, quantity(dec!(2.5)));
        assert_eq!(draft.quote_size, quantity(dec!(50)));
        assert_eq!(draft.size_source, Some(SizeSource::Base));
    }

    #[test]
    fn base_size_is_rounded_to_min_order_size() {
        let mut engine = engine();
        engine.set_reference_price(dec!(10)).unwrap();
        engine.set_base_size(dec!(1.26)).unwrap();

        assert_eq!(engine.draft().base_size, quantity(dec!(1.3)));
        assert_eq!(engine.draft().quote_size, quantity(dec!(13)));
    }

    #[test]
    fn quote_size_derives_base() {
        let mut engine = engine();
        engine.set_reference_price(dec!(20)).unwrap();
        engine.set_quote_size(dec!(55)).unwrap();

        let draft = engine.draft();
        assert_eq!(draft.quote_size, quantity(dec!(55)));
        // 55 / 20 = 2.75 -> 2.8
        assert_eq!(draft.base_size, quantity(dec!(2.8)));
        assert_eq!(draft.size_source, Some(SizeSource::Quote));
    }

    #[test]
    fn limit_price_takes_precedence_over_reference() {
        let mut engine = engine();
        engine.set_reference_price(dec!(20)).unwrap();
        engine.set_limit_price(dec!(25)).unwrap();
        engine.set_base_size(dec!(2)).unwrap();

        assert_eq!(engine.draft().quote_size, quantity(dec!(50)));
    }

    #[test]
    fn limit_price_change_rederives_non_source_field() {
        let mut engine = engine();
        engine.set_limit_price(dec!(10)).unwrap();
        engine.set_quote_size(dec!(100)).unwrap();
        assert_eq!(engine.draft().base_size, quantity(dec!(10)));

        engine.set_limit_price(dec!(20)).unwrap();
        assert_eq!(engine.draft().quote_size, quantity(dec!(100)));
        assert_eq!(engine.draft().base_size, quantity(dec!(5)));
    }

    #[test]
    fn zero_reference_price_clears_quote() {
        let mut engine = engine();
        engine.set_base_size(dec!(10)).unwrap();

        assert_eq!(engine.draft().base_size, quantity(dec!(10)));
        assert_eq!(engine.draft().quote_size, None);
    }

    #[test]
    fn zero_reference_price_clears_base() {
        let mut engine = engine();
        engine.set_quote_size(dec!(10)).unwrap();

        assert_eq!(engine.draft().quote_size, quantity(dec!(10)));
        assert_eq!(engine.draft().base_size, None);
    }

    #[test]
    fn zero_limit_price_clears_derived_field() {
        let mut engine = engine();
        engine.set_reference_price(dec!(20)).unwrap();
        engine.set_limit_price(dec!(0)).unwrap();
        engine.set_base_size(dec!(1)).unwrap();

        assert_eq!(engine.draft().quote_size, None);
    }

    #[test]
    fn negative_values_are_rejected_without_change() {
        let mut engine = engine();
        engine.set_reference_price(dec!(20)).unwrap();
        engine.set_base_size(dec!(1)).unwrap();
        let before = engine.clone();

        assert!(matches!(
            engine.set_base_size(dec!(-1)),
            Err(DraftError::NegativeValue { field: "base_size", .. })
        ));
        assert!(engine.set_quote_size(dec!(-1)).is_err());
        assert!(engine.set_limit_price(dec!(-1)).is_err());
        assert!(engine.set_reference_price(dec!(-1)).is_err());
        assert_eq!(engine, before);
    }

    #[test]
    fn clear_sizes_empties_both_fields() {
        let mut engine = engine();
        engine.set_reference_price(dec!(20)).unwrap();
        engine.set_base_size(dec!(1)).unwrap();
        engine.clear_sizes();

        assert_eq!(engine.draft().base_size, None);
        assert_eq!(engine.draft().quote_size, None);
        assert_eq!(engine.draft().size_source, None);
    }

    #[test]
    fn reference_price_update_rederives_when_no_limit_price() {
        let mut engine = engine();
        engine.set_order_type(OrderType::Market, None).unwrap();
        engine.set_reference_price(dec!(10)).unwrap();
        engine.set_base_size(dec!(2)).unwrap();
        assert_eq!(engine.draft().quote_size, quantity(dec!(20)));

        engine.set_reference_price(dec!(12)).unwrap();
        assert_eq!(engine.draft().quote_size, quantity(dec!(24)));
    }

    // -------------------------------------------------------------------------
    // Prices
    // -------------------------------------------------------------------------

    #[test]
    fn limit_price_rounds_to_tick() {
        let mut engine = engine();
        engine.set_limit_price(dec!(100.07)).unwrap();
        assert_eq!(engine.draft().limit_price, price(dec!(100.05)));
    }

    #[test]
    fn reference_price_seeds_empty_limit_price() {
        let mut engine = engine();
        engine.set_reference_price(dec!(100.03)).unwrap();
        assert_eq!(engine.draft().limit_price, price(dec!(100.05)));

        engine.set_reference_price(dec!(120)).unwrap();
        assert_eq!(engine.draft().limit_price, price(dec!(100.05)));
        assert_eq!(engine.draft().reference_price, Price::new(dec!(120)));
    }

    #[test]
    fn limit_price_rejected_on_market() {
        let mut engine = engine();
        engine.set_order_type(OrderType::Market, None).unwrap();

        assert_eq!(
            engine.set_limit_price(dec!(100)),
            Err(DraftError::LimitPriceLocked {
                order_type: OrderType::Market
            })
        );
        assert_eq!(engine.draft().limit_price, None);
    }

    // -------------------------------------------------------------------------
    // Order type and modifiers
    // -------------------------------------------------------------------------

    #[test]
    fn entering_market_forces_modifiers_and_clears_price() {
        let mut engine = engine();
        engine.set_limit_price(dec!(100)).unwrap();
        engine.set_post_only(true).unwrap();
        engine.set_order_type(OrderType::Market, None).unwrap();

        let draft = engine.draft();
        assert_eq!(draft.order_type, OrderType::Market);
        assert_eq!(draft.modifiers, OrderModifiers::MARKET);
        assert_eq!(draft.limit_price, None);
    }

    #[test]
    fn leaving_market_uses_best_opposite_price() {
        let mut engine = engine();
        engine.set_order_type(OrderType::Market, None).unwrap();
        engine.set_order_type(OrderType::Limit, Some(&book())).unwrap();
        assert_eq!(engine.draft().limit_price, price(dec!(101)));
        assert_eq!(engine.draft().modifiers, OrderModifiers::NONE);

        engine.set_side(OrderSide::Sell);
        engine.set_order_type(OrderType::Market, None).unwrap();
        engine.set_order_type(OrderType::Limit, Some(&book())).unwrap();
        assert_eq!(engine.draft().limit_price, price(dec!(100)));
    }

    #[test]
    fn leaving_market_falls_back_to_reference_price() {
        let mut engine = engine();
        engine.set_order_type(OrderType::Market, None).unwrap();
        engine.set_reference_price(dec!(42.02)).unwrap();
        engine
            .set_order_type(OrderType::Limit, Some(&OrderBookSnapshot::default()))
            .unwrap();

        assert_eq!(engine.draft().limit_price, price(dec!(42)));
    }

    #[test]
    fn leaving_market_without_any_price_leaves_it_empty() {
        let mut engine = engine();
        engine.set_order_type(OrderType::Market, None).unwrap();
        engine.set_order_type(OrderType::Limit, None).unwrap();

        assert_eq!(engine.draft().limit_price, None);
        assert_eq!(engine.draft().modifiers, OrderModifiers::NONE);
    }

    #[test]
    fn reselecting_same_type_is_noop() {
        let mut engine = engine();
        engine.set_limit_price(dec!(100)).unwrap();
        engine.set_post_only(true).unwrap();
        let before = engine.clone();

        engine.set_order_type(OrderType::Limit, Some(&book())).unwrap();
        assert_eq!(engine, before);
    }

    #[test]
    fn modifiers_are_mutually_exclusive() {
        let mut engine = engine();
        engine.set_post_only(true).unwrap();
        engine.set_immediate_or_cancel(true).unwrap();
        assert!(!engine.draft().modifiers.post_only);
        assert!(engine.draft().modifiers.immediate_or_cancel);

        engine.set_post_only(true).unwrap();
        assert!(engine.draft().modifiers.post_only);
        assert!(!engine.draft().modifiers.immediate_or_cancel);
    }

    #[test]
    fn modifiers_locked_on_market() {
        let mut engine = engine();
        engine.set_order_type(OrderType::Market, None).unwrap();

        assert!(engine.set_post_only(true).is_err());
        assert!(engine.set_immediate_or_cancel(false).is_err());
        assert_eq!(engine.draft().modifiers, OrderModifiers::MARKET);
    }

    // -------------------------------------------------------------------------
    // Market price resolution
    // -------------------------------------------------------------------------

    #[test]
    fn resolve_market_price_stores_estimate() {
        let mut engine = engine();
        engine.set_side(OrderSide::Sell);
        engine.set_order_type(OrderType::Market, None).unwrap();
        engine.set_base_size(dec!(4)).unwrap();

        let estimate = engine.resolve_market_price(&book()).unwrap();
        assert_eq!(estimate.average_price, Price::new(dec!(99.5)));
        assert_eq!(engine.draft().market_price, price(dec!(99.5)));

        let order = engine.validate_for_submit().unwrap();
        assert_eq!(order.effective_price(), Price::new(dec!(99.5)));
        assert_eq!(order.base_size(), Quantity::new(dec!(4)));
    }

    #[test]
    fn side_change_invalidates_estimate() {
        let mut engine = engine();
        engine.set_order_type(OrderType::Market, None).unwrap();
        engine.set_base_size(dec!(1)).unwrap();
        engine.resolve_market_price(&book()).unwrap();

        engine.set_side(OrderSide::Sell);
        assert_eq!(engine.draft().market_price, None);
        assert_eq!(
            engine.validate_for_submit(),
            Err(ValidationError::PriceNotResolved)
        );
    }

    #[test]
    fn size_change_invalidates_estimate() {
        let mut engine = engine();
        engine.set_order_type(OrderType::Market, None).unwrap();
        engine.set_base_size(dec!(1)).unwrap();
        engine.resolve_market_price(&book()).unwrap();

        engine.set_base_size(dec!(2)).unwrap();
        assert_eq!(engine.draft().market_price, None);
    }

    #[test]
    fn reference_price_rederiving_base_drops_estimate() {
        let mut engine = engine();
        engine.set_order_type(OrderType::Market, None).unwrap();
        engine.set_reference_price(dec!(10)).unwrap();
        engine.set_quote_size(dec!(100)).unwrap();
        assert_eq!(engine.draft().base_size, quantity(dec!(10)));

        let asks = OrderBookSnapshot::new(
            vec![],
            vec![
                PriceLevel::from_pair(dec!(10), dec!(5)),
                PriceLevel::from_pair(dec!(20), dec!(5)),
            ],
        );
        let estimate = engine.resolve_market_price(&asks).unwrap();
        assert_eq!(estimate.average_price, Price::new(dec!(15)));

        engine.set_reference_price(dec!(20)).unwrap();
        assert_eq!(engine.draft().base_size, quantity(dec!(5)));
        assert_eq!(engine.draft().market_price, None);
        assert_eq!(
            engine.validate_for_submit(),
            Err(ValidationError::PriceNotResolved)
        );

        let estimate = engine.resolve_market_price(&asks).unwrap();
        assert_eq!(estimate.average_price, Price::new(dec!(10)));
    }

    #[test]
    fn reference_price_keeping_base_keeps_estimate() {
        let mut engine = engine();
        engine.set_order_type(OrderType::Market, None).unwrap();
        engine.set_reference_price(dec!(10)).unwrap();
        engine.set_base_size(dec!(1)).unwrap();
        engine.resolve_market_price(&book()).unwrap();

        engine.set_reference_price(dec!(12)).unwrap();
        assert_eq!(engine.draft().market_price, price(dec!(101)));
    }

    #[test]
    fn failed_resolution_drops_previous_estimate() {
        let mut engine = engine();
        engine.set_order_type(OrderType::Market, None).unwrap();
        engine.set_base_size(dec!(1)).unwrap();
        engine.resolve_market_price(&book()).unwrap();

        let thin = OrderBookSnapshot::default();
        let err = engine.resolve_market_price(&thin).unwrap_err();
        assert!(matches!(err, MarketPriceError::InsufficientDepth { .. }));
        assert_eq!(engine.draft().market_price, None);
    }

    // -------------------------------------------------------------------------
    // Book selection and lifecycle
    // -------------------------------------------------------------------------

    #[test]
    fn book_selection_sets_price_and_size() {
        let mut engine = engine();
        engine
            .apply_book_selection(Some(dec!(1.26)), Some(dec!(99.98)))
            .unwrap();

        let draft = engine.draft();
        assert_eq!(draft.limit_price, price(dec!(100)));
        assert_eq!(draft.base_size, quantity(dec!(1.3)));
        assert_eq!(draft.quote_size, quantity(dec!(130)));
    }

    #[test]
    fn book_selection_ignores_price_on_market() {
        let mut engine = engine();
        engine.set_order_type(OrderType::Market, None).unwrap();
        engine
            .apply_book_selection(Some(dec!(2)), Some(dec!(100)))
            .unwrap();

        assert_eq!(engine.draft().limit_price, None);
        assert_eq!(engine.draft().base_size, quantity(dec!(2)));
    }

    #[test]
    fn book_selection_is_atomic() {
        let mut engine = engine();
        let before = engine.clone();

        assert!(
            engine
                .apply_book_selection(Some(dec!(-1)), Some(dec!(100)))
                .is_err()
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn reset_keeps_reference_price_and_reseeds_limit() {
        let mut engine = engine();
        engine.set_reference_price(dec!(50)).unwrap();
        engine.set_limit_price(dec!(55)).unwrap();
        engine.set_base_size(dec!(3)).unwrap();
        engine.set_side(OrderSide::Sell);

        engine.reset();

        let draft = engine.draft();
        assert_eq!(draft.side, OrderSide::Buy);
        assert_eq!(draft.base_size, None);
        assert_eq!(draft.quote_size, None);
        assert_eq!(draft.reference_price, Price::new(dec!(50)));
        assert_eq!(draft.limit_price, price(dec!(50)));
    }

    #[test]
    fn switch_market_starts_fresh() {
        let mut engine = engine();
        engine.set_reference_price(dec!(50)).unwrap();
        engine.set_base_size(dec!(3)).unwrap();

        let precision = PrecisionSpec::new(dec!(25), dec!(1)).unwrap();
        engine.switch_market(Symbol::new("BTC/USDC"), precision);

        assert_eq!(engine.market().as_str(), "BTC/USDC");
        assert_eq!(engine.precision().tick_size(), dec!(25));
        assert_eq!(engine.draft(), &OrderDraft::new());

        engine.set_limit_price(dec!(60037)).unwrap();
        assert_eq!(engine.draft().limit_price, price(dec!(60025)));
    }
}
