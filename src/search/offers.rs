//! Stackable offer combinations by backtracking.
//!
//! # Rules
//!
//! 1. An offer is applicable when its category scope, minimum spend and
//!    condition all match the basket.
//! 2. The total discount may not exceed half of the subtotal.
//! 3. At most [`MAX_STACKED_OFFERS`] offers may be stacked.
//! 4. No two stacked offers may share a condition other than `None`.
//!
//! The search walks applicable offers with an ascending start index, so
//! every subset is produced once and single offers appear before their
//! pair extensions.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, trace};

use crate::models::{Basket, CategoryScope, Offer};

/// Maximum number of offers in one combination.
pub const MAX_STACKED_OFFERS: usize = 2;

/// A valid set of stacked offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferCombination {
    /// Offer IDs in applicable-list order.
    pub offer_ids: Vec<String>,
    /// Offer labels, parallel to `offer_ids`.
    pub labels: Vec<String>,
    /// Sum of offer amounts.
    pub total_discount: i64,
    /// `total_discount / subtotal * 100`, rounded to one decimal.
    pub discount_pct: f64,
}

/// Result of [`find_combinations`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferSearch {
    /// Offers that passed the applicability filter, in input order.
    pub applicable: Vec<Offer>,
    /// Maximum total discount, `floor(subtotal * 0.5)`.
    pub cap: i64,
    /// Valid combinations in discovery order.
    pub combinations: Vec<OfferCombination>,
}

/// Whether `offer` can be used for `basket` on its own.
pub fn is_applicable(offer: &Offer, basket: &Basket) -> bool {
    let category_ok = match &offer.category {
        CategoryScope::Any => true,
        CategoryScope::Only(category) => basket.has_category(category),
    };

    category_ok
        && basket.subtotal >= offer.min_spend
        && offer.condition.is_met(basket.day_type, basket.user_status)
}

/// Maximum total discount for a subtotal: half of it, rounded down.
pub fn discount_cap(subtotal: i64) -> i64 {
    subtotal / 2
}

/// Enumerates every valid combination of one or two offers.
///
/// # Example
///
/// ```
/// use u_delivery::models::{Basket, Offer};
/// use u_delivery::search::find_combinations;
///
/// let offers = vec![Offer::new("A", 10), Offer::new("B", 30)];
/// let result = find_combinations(&offers, &Basket::new(60));
/// let ids: Vec<_> = result.combinations.iter().map(|c| c.offer_ids.join("+")).collect();
/// assert_eq!(ids, vec!["A", "A+B", "B"]);
/// ```
pub fn find_combinations(offers: &[Offer], basket: &Basket) -> OfferSearch {
    let applicable: Vec<&Offer> = offers
        .iter()
        .filter(|offer| is_applicable(offer, basket))
        .collect();
    let cap = discount_cap(basket.subtotal);

    let mut search = CombinationSearch {
        offers: &applicable,
        subtotal: basket.subtotal,
        cap,
        chosen: Vec::with_capacity(MAX_STACKED_OFFERS),
        combinations: Vec::new(),
    };
    search.explore(0, 0);
    let combinations = search.combinations;

    debug!(
        offers = offers.len(),
        applicable = applicable.len(),
        cap,
        combinations = combinations.len(),
        "offer search finished"
    );

    OfferSearch {
        applicable: applicable.into_iter().cloned().collect(),
        cap,
        combinations,
    }
}

struct CombinationSearch<'a> {
    offers: &'a [&'a Offer],
    subtotal: i64,
    cap: i64,
    /// Indices into `offers`.
    chosen: Vec<usize>,
    combinations: Vec<OfferCombination>,
}

impl CombinationSearch<'_> {
    fn explore(&mut self, start: usize, discount: i64) {
        if !self.chosen.is_empty() && discount <= self.cap {
            self.record(discount);
        }

        if self.chosen.len() >= MAX_STACKED_OFFERS {
            return;
        }

        for i in start..self.offers.len() {
            let offer = self.offers[i];
            let next = discount + offer.amount;

            if next > self.cap {
                trace!(offer = %offer.id, next, cap = self.cap, "over discount cap");
                continue;
            }
            if self.conflicts(offer) {
                trace!(offer = %offer.id, "condition already stacked");
                continue;
            }

            self.chosen.push(i);
            self.explore(i + 1, next);
            self.chosen.pop();
        }
    }

    fn conflicts(&self, candidate: &Offer) -> bool {
        self.chosen
            .iter()
            .any(|&i| self.offers[i].condition.conflicts_with(&candidate.condition))
    }

    fn record(&mut self, discount: i64) {
        let chosen: Vec<&Offer> = self.chosen.iter().map(|&i| self.offers[i]).collect();
        self.combinations.push(OfferCombination {
            offer_ids: chosen.iter().map(|o| o.id.clone()).collect(),
            labels: chosen.iter().map(|o| o.label.clone()).collect(),
            total_discount: discount,
            discount_pct: percent_one_decimal(discount, self.subtotal),
        });
    }
}

/// `part / whole * 100` rounded to one decimal, ties to the even tenth.
///
/// The rounding happens on exact integer tenths, so a value such as
/// 31.25 becomes 31.2 on every platform.
fn percent_one_decimal(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        return 0.0;
    }
    let scaled = i128::from(part) * 1000;
    let whole = i128::from(whole);
    let (quotient, remainder) = (scaled.div_euclid(whole), scaled.rem_euclid(whole));
    let tenths = match (2 * remainder).cmp(&whole) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => quotient + quotient.rem_euclid(2),
    };
    tenths as f64 / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo_data;
    use crate::models::{DayType, OfferCondition, UserStatus};
    use proptest::prelude::*;

    fn joined(search: &OfferSearch) -> Vec<String> {
        search
            .combinations
            .iter()
            .map(|c| c.offer_ids.join("+"))
            .collect()
    }

    #[test]
    fn test_demo_combinations() {
        let (offers, basket) = demo_data::offers_and_basket();
        let result = find_combinations(&offers, &basket);

        let applicable: Vec<&str> = result.applicable.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(applicable, vec!["PROMO1", "PROMO2", "PROMO3", "PROMO4"]);
        assert_eq!(result.cap, 40_000);

        assert_eq!(
            joined(&result),
            vec![
                "PROMO1",
                "PROMO1+PROMO2",
                "PROMO1+PROMO3",
                "PROMO2",
                "PROMO2+PROMO3",
                "PROMO2+PROMO4",
                "PROMO3",
                "PROMO3+PROMO4",
                "PROMO4",
            ]
        );

        let first = &result.combinations[0];
        assert_eq!(first.labels, vec!["Weekend Discount"]);
        assert_eq!(first.total_discount, 10_000);
        assert!((first.discount_pct - 12.5).abs() < 1e-10);

        // 25000 / 80000 = 31.25%, a tie that goes to the even tenth.
        let pair = &result.combinations[1];
        assert_eq!(pair.offer_ids, vec!["PROMO1", "PROMO2"]);
        assert_eq!(pair.total_discount, 25_000);
        assert_eq!(pair.discount_pct, 31.2);
    }

    #[test]
    fn test_weekday_member_basket() {
        let (offers, _) = demo_data::offers_and_basket();
        let basket = Basket::new(100_000)
            .with_category("fast_food")
            .with_day_type(DayType::Weekday)
            .with_user_status(UserStatus::Member);
        let result = find_combinations(&offers, &basket);

        // Weekend offers, the new-user offer and the drinks offer drop out.
        let applicable: Vec<&str> = result.applicable.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(applicable, vec!["PROMO5"]);
        assert_eq!(joined(&result), vec!["PROMO5"]);
    }

    #[test]
    fn test_applicability_rules() {
        let basket = Basket::new(50_000)
            .with_category("fast_food")
            .with_day_type(DayType::Weekend);

        assert!(is_applicable(&Offer::new("any", 1), &basket));
        assert!(is_applicable(&Offer::new("cat", 1).with_category("fast_food"), &basket));
        assert!(!is_applicable(&Offer::new("cat", 1).with_category("drinks"), &basket));
        assert!(is_applicable(&Offer::new("min", 1).with_min_spend(50_000), &basket));
        assert!(!is_applicable(&Offer::new("min", 1).with_min_spend(50_001), &basket));
        assert!(is_applicable(
            &Offer::new("wk", 1).with_condition(OfferCondition::Weekend),
            &basket
        ));
        assert!(!is_applicable(
            &Offer::new("nu", 1).with_condition(OfferCondition::NewUser),
            &basket
        ));
    }

    #[test]
    fn test_cap_rounds_down() {
        assert_eq!(discount_cap(80_001), 40_000);
        let offers = vec![Offer::new("A", 3)];
        // cap for subtotal 7 is 3
        assert_eq!(joined(&find_combinations(&offers, &Basket::new(7))), vec!["A"]);
        assert!(find_combinations(&offers, &Basket::new(5)).combinations.is_empty());
    }

    #[test]
    fn test_same_condition_not_stacked() {
        let offers = vec![
            Offer::new("W1", 1).with_condition(OfferCondition::Weekday),
            Offer::new("W2", 1).with_condition(OfferCondition::Weekday),
            Offer::new("N", 1),
            Offer::new("M", 1),
        ];
        let result = find_combinations(&offers, &Basket::new(100));
        let combos = joined(&result);
        assert!(!combos.contains(&"W1+W2".to_string()));
        // Unconditional offers stack with each other.
        assert!(combos.contains(&"N+M".to_string()));
    }

    #[test]
    fn test_size_ceiling() {
        let offers: Vec<Offer> = (0..4).map(|i| Offer::new(format!("O{i}"), 1)).collect();
        let result = find_combinations(&offers, &Basket::new(100));
        // 4 singles + 6 pairs
        assert_eq!(result.combinations.len(), 10);
        assert!(result.combinations.iter().all(|c| c.offer_ids.len() <= 2));
    }

    #[test]
    fn test_no_offers() {
        let result = find_combinations(&[], &Basket::new(100));
        assert!(result.applicable.is_empty());
        assert!(result.combinations.is_empty());
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent_one_decimal(25_000, 80_000), 31.2);
        assert_eq!(percent_one_decimal(3, 16), 18.8);
        assert_eq!(percent_one_decimal(10_000, 80_000), 12.5);
        assert_eq!(percent_one_decimal(26_000, 80_000), 32.5);
        assert_eq!(percent_one_decimal(25_100, 80_000), 31.4);
        assert_eq!(percent_one_decimal(1, 3), 33.3);
        assert_eq!(percent_one_decimal(0, 0), 0.0);
    }

    fn condition_strategy() -> impl Strategy<Value = OfferCondition> {
        prop_oneof![
            Just(OfferCondition::None),
            Just(OfferCondition::Weekend),
            Just(OfferCondition::Weekday),
            Just(OfferCondition::NewUser),
            Just(OfferCondition::Member),
        ]
    }

    proptest! {
        #[test]
        fn prop_combinations_are_sound(
            specs in prop::collection::vec(
                (1i64..60, 0i64..120, condition_strategy(), prop::bool::ANY),
                0..7,
            ),
            subtotal in 1i64..150,
            weekend in prop::bool::ANY,
        ) {
            let offers: Vec<Offer> = specs
                .iter()
                .enumerate()
                .map(|(i, &(amount, min_spend, condition, food_only))| {
                    let offer = Offer::new(format!("O{i}"), amount)
                        .with_min_spend(min_spend)
                        .with_condition(condition);
                    if food_only { offer.with_category("food") } else { offer }
                })
                .collect();
            let day = if weekend { DayType::Weekend } else { DayType::Weekday };
            let basket = Basket::new(subtotal)
                .with_category("drinks")
                .with_day_type(day)
                .with_user_status(UserStatus::Member);

            let result = find_combinations(&offers, &basket);
            for combo in &result.combinations {
                prop_assert!(!combo.offer_ids.is_empty() && combo.offer_ids.len() <= 2);
                prop_assert!(combo.total_discount <= subtotal / 2);

                let members: Vec<&Offer> = combo
                    .offer_ids
                    .iter()
                    .map(|id| offers.iter().find(|o| &o.id == id).unwrap())
                    .collect();
                prop_assert_eq!(
                    combo.total_discount,
                    members.iter().map(|o| o.amount).sum::<i64>()
                );
                for offer in &members {
                    prop_assert!(is_applicable(offer, &basket));
                }
                if let [a, b] = members.as_slice() {
                    prop_assert!(!a.condition.conflicts_with(&b.condition));
                }
            }
        }
    }
}
