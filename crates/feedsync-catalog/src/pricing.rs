//! Sell price from supplier cost: tiered margin, 23% VAT and a flat 7.00
//! shipping fee, rounded half-up to cents.
//!
//! | cost        | margin |
//! |-------------|--------|
//! | ≤ 10        | 60%    |
//! | ≤ 20        | 50%    |
//! | ≤ 40        | 40%    |
//! | ≤ 80        | 30%    |
//! | > 80        | 25%    |
//!
//! Costs are not otherwise validated. A zero or negative cost falls in the
//! first tier and produces a small or negative price.

use feedsync_core::TaxOrder;
use rust_decimal::{Decimal, RoundingStrategy};

/// VAT multiplier (23%).
pub const VAT_RATE: Decimal = Decimal::from_parts(123, 0, 0, false, 2);

/// Flat shipping fee added to every item.
pub const SHIPPING_FEE: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// Upper bound (inclusive) of each tier and its margin.
const MARGIN_TIERS: [(Decimal, Decimal); 4] = [
    (Decimal::from_parts(10, 0, 0, false, 0), Decimal::from_parts(60, 0, 0, false, 2)),
    (Decimal::from_parts(20, 0, 0, false, 0), Decimal::from_parts(50, 0, 0, false, 2)),
    (Decimal::from_parts(40, 0, 0, false, 0), Decimal::from_parts(40, 0, 0, false, 2)),
    (Decimal::from_parts(80, 0, 0, false, 0), Decimal::from_parts(30, 0, 0, false, 2)),
];

const TOP_MARGIN: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Largest absolute cost the price formula accepts. The feed reader rejects
/// rows beyond it.
pub const MAX_COST: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Whether `cost` is inside `-MAX_COST..=MAX_COST`.
#[must_use]
pub fn is_priceable(cost: Decimal) -> bool {
    cost.abs() <= MAX_COST
}

/// Margin applied to a given cost price.
#[must_use]
pub fn margin_for(cost: Decimal) -> Decimal {
    MARGIN_TIERS
        .iter()
        .find(|(limit, _)| cost <= *limit)
        .map_or(TOP_MARGIN, |&(_, margin)| margin)
}

/// Computes the storefront price for a supplier cost.
///
/// `sell = cost * (1 + margin)`, then:
/// - [`TaxOrder::ShippingBeforeTax`]: `round((sell + 7) * 1.23, 2)`
/// - [`TaxOrder::ShippingAfterTax`]: `round(sell * 1.23 + 7, 2)`
///
/// # Panics
///
/// Panics on decimal overflow, which cannot happen for a cost accepted by
/// [`is_priceable`].
#[must_use]
pub fn compute_sell_price(cost: Decimal, tax_order: TaxOrder) -> Decimal {
    let sell_before_tax = cost * (Decimal::ONE + margin_for(cost));
    let gross = match tax_order {
        TaxOrder::ShippingBeforeTax => (sell_before_tax + SHIPPING_FEE) * VAT_RATE,
        TaxOrder::ShippingAfterTax => sell_before_tax * VAT_RATE + SHIPPING_FEE,
    };
    gross.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn margin_tiers_use_inclusive_upper_bounds() {
        assert_eq!(margin_for(dec!(10)), dec!(0.60));
        assert_eq!(margin_for(dec!(10.01)), dec!(0.50));
        assert_eq!(margin_for(dec!(20)), dec!(0.50));
        assert_eq!(margin_for(dec!(40)), dec!(0.40));
        assert_eq!(margin_for(dec!(80)), dec!(0.30));
        assert_eq!(margin_for(dec!(80.01)), dec!(0.25));
    }

    #[test]
    fn shipping_before_tax_at_ten() {
        // (10 * 1.6 + 7) * 1.23 = 23 * 1.23
        assert_eq!(
            compute_sell_price(dec!(10), TaxOrder::ShippingBeforeTax),
            dec!(28.29)
        );
    }

    #[test]
    fn shipping_after_tax_at_ten() {
        // 10 * 1.6 * 1.23 + 7 = 19.68 + 7
        assert_eq!(
            compute_sell_price(dec!(10), TaxOrder::ShippingAfterTax),
            dec!(26.68)
        );
    }

    #[test]
    fn top_tier_price() {
        // 100 * 1.25 = 125; (125 + 7) * 1.23 = 162.36
        assert_eq!(
            compute_sell_price(dec!(100), TaxOrder::ShippingBeforeTax),
            dec!(162.36)
        );
        // 125 * 1.23 + 7 = 160.75
        assert_eq!(
            compute_sell_price(dec!(100), TaxOrder::ShippingAfterTax),
            dec!(160.75)
        );
    }

    #[test]
    fn rounds_half_up() {
        // 12.5 * 1.5 = 18.75; (18.75 + 7) * 1.23 = 31.6725 → 31.67
        assert_eq!(
            compute_sell_price(dec!(12.5), TaxOrder::ShippingBeforeTax),
            dec!(31.67)
        );
        // 0.25 * 1.6 = 0.4; 0.4 * 1.23 + 7 = 7.492 → 7.49
        assert_eq!(
            compute_sell_price(dec!(0.25), TaxOrder::ShippingAfterTax),
            dec!(7.49)
        );
        // 2.5 * 1.6 = 4; (4 + 7) * 1.23 = 13.53 exactly
        assert_eq!(
            compute_sell_price(dec!(2.5), TaxOrder::ShippingBeforeTax),
            dec!(13.53)
        );
        // 0.3125 * 1.6 = 0.5; 0.5 * 1.23 + 7 = 7.615 → 7.62 (midpoint goes up)
        assert_eq!(
            compute_sell_price(dec!(0.3125), TaxOrder::ShippingAfterTax),
            dec!(7.62)
        );
    }

    #[test]
    fn price_drops_across_the_first_tier_boundary() {
        // Crossing into a lower margin tier makes the price non-monotonic.
        let at_limit = compute_sell_price(dec!(10), TaxOrder::ShippingBeforeTax);
        let just_over = compute_sell_price(dec!(10.01), TaxOrder::ShippingBeforeTax);
        assert_eq!(just_over, dec!(27.08));
        assert!(just_over < at_limit);
    }

    #[test]
    fn cost_range_bounds_the_formula() {
        assert!(is_priceable(MAX_COST));
        assert!(is_priceable(-MAX_COST));
        assert!(!is_priceable(MAX_COST + Decimal::ONE));
        assert!(!is_priceable(Decimal::MAX));

        // 1e9 * 1.25 = 1.25e9; (1.25e9 + 7) * 1.23
        assert_eq!(
            compute_sell_price(MAX_COST, TaxOrder::ShippingBeforeTax),
            dec!(1537500008.61)
        );
        assert_eq!(
            compute_sell_price(-MAX_COST, TaxOrder::ShippingAfterTax),
            dec!(-1967999993)
        );
    }

    #[test]
    fn non_positive_cost_passes_through() {
        // Zero cost still carries shipping and VAT.
        assert_eq!(
            compute_sell_price(Decimal::ZERO, TaxOrder::ShippingBeforeTax),
            dec!(8.61)
        );
        // Negative cost is not rejected: (-10 * 1.6 + 7) * 1.23 = -11.07.
        assert_eq!(
            compute_sell_price(dec!(-10), TaxOrder::ShippingBeforeTax),
            dec!(-11.07)
        );
        assert_eq!(
            compute_sell_price(dec!(-10), TaxOrder::ShippingAfterTax),
            dec!(-12.68)
        );
    }
}
