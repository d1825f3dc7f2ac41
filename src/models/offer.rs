//! Discount offer and basket models.
//!
//! Offers carry a category scope, a minimum spend and an optional
//! condition tag. The basket is the checkout context offers are matched
//! against.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which basket categories an offer applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryScope {
    /// Applies to every basket.
    Any,
    /// Applies only when the basket contains this category.
    Only(String),
}

/// Special condition an offer is tied to.
///
/// Two offers with the same condition other than `None` may not be
/// stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferCondition {
    /// No special condition.
    #[default]
    None,
    /// Checkout must happen on a weekend.
    Weekend,
    /// Checkout must happen on a weekday.
    Weekday,
    /// Customer must be a new user.
    NewUser,
    /// Customer must be a member.
    Member,
}

/// Day type at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Weekday,
    Weekend,
}

/// Customer status at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Regular,
    NewUser,
    Member,
}

impl OfferCondition {
    /// Whether this condition holds for the given checkout context.
    pub fn is_met(&self, day_type: DayType, user_status: UserStatus) -> bool {
        match self {
            OfferCondition::None => true,
            OfferCondition::Weekend => day_type == DayType::Weekend,
            OfferCondition::Weekday => day_type == DayType::Weekday,
            OfferCondition::NewUser => user_status == UserStatus::NewUser,
            OfferCondition::Member => user_status == UserStatus::Member,
        }
    }

    /// Whether two offers with these conditions conflict when stacked.
    pub fn conflicts_with(&self, other: &OfferCondition) -> bool {
        *self != OfferCondition::None && self == other
    }
}

/// A discount offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    /// Unique offer identifier.
    pub id: String,
    /// Human-readable name.
    pub label: String,
    /// Discount amount (> 0).
    pub amount: i64,
    /// Category scope.
    pub category: CategoryScope,
    /// Minimum basket subtotal.
    pub min_spend: i64,
    /// Special condition.
    pub condition: OfferCondition,
}

impl Offer {
    /// Creates an unconditional offer valid for any basket.
    pub fn new(id: impl Into<String>, amount: i64) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            amount,
            category: CategoryScope::Any,
            min_spend: 0,
            condition: OfferCondition::None,
        }
    }

    /// Sets the human-readable name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Restricts the offer to baskets containing `category`.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = CategoryScope::Only(category.into());
        self
    }

    /// Sets the minimum spend.
    pub fn with_min_spend(mut self, min_spend: i64) -> Self {
        self.min_spend = min_spend;
        self
    }

    /// Sets the special condition.
    pub fn with_condition(mut self, condition: OfferCondition) -> Self {
        self.condition = condition;
        self
    }
}

/// Checkout context offers are matched against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basket {
    /// Basket subtotal (> 0).
    pub subtotal: i64,
    /// Item categories present in the basket.
    pub categories: BTreeSet<String>,
    /// Day type at checkout.
    pub day_type: DayType,
    /// Customer status.
    pub user_status: UserStatus,
}

impl Basket {
    /// Creates a weekday basket for a regular customer.
    pub fn new(subtotal: i64) -> Self {
        Self {
            subtotal,
            categories: BTreeSet::new(),
            day_type: DayType::Weekday,
            user_status: UserStatus::Regular,
        }
    }

    /// Adds an item category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    /// Sets the day type.
    pub fn with_day_type(mut self, day_type: DayType) -> Self {
        self.day_type = day_type;
        self
    }

    /// Sets the customer status.
    pub fn with_user_status(mut self, user_status: UserStatus) -> Self {
        self.user_status = user_status;
        self
    }

    /// Whether the basket contains the given category.
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_is_met() {
        use OfferCondition::*;
        assert!(None.is_met(DayType::Weekday, UserStatus::Regular));
        assert!(Weekend.is_met(DayType::Weekend, UserStatus::Regular));
        assert!(!Weekend.is_met(DayType::Weekday, UserStatus::Regular));
        assert!(Weekday.is_met(DayType::Weekday, UserStatus::Member));
        assert!(NewUser.is_met(DayType::Weekday, UserStatus::NewUser));
        assert!(!NewUser.is_met(DayType::Weekday, UserStatus::Member));
        assert!(Member.is_met(DayType::Weekend, UserStatus::Member));
    }

    #[test]
    fn test_condition_conflicts() {
        assert!(OfferCondition::Weekend.conflicts_with(&OfferCondition::Weekend));
        assert!(!OfferCondition::Weekend.conflicts_with(&OfferCondition::Member));
        assert!(!OfferCondition::None.conflicts_with(&OfferCondition::None));
    }

    #[test]
    fn test_offer_builder() {
        let offer = Offer::new("PROMO2", 15_000)
            .with_label("New User")
            .with_category("fast_food")
            .with_min_spend(30_000)
            .with_condition(OfferCondition::NewUser);
        assert_eq!(offer.category, CategoryScope::Only("fast_food".into()));
        assert_eq!(offer.min_spend, 30_000);
        assert_eq!(offer.condition, OfferCondition::NewUser);
    }

    #[test]
    fn test_basket_builder() {
        let basket = Basket::new(80_000)
            .with_category("fast_food")
            .with_category("drinks")
            .with_day_type(DayType::Weekend)
            .with_user_status(UserStatus::NewUser);
        assert!(basket.has_category("drinks"));
        assert!(!basket.has_category("dessert"));
        assert_eq!(basket.day_type, DayType::Weekend);
    }

    #[test]
    fn test_offer_serde_tags() {
        let offer = Offer::new("P", 1).with_condition(OfferCondition::NewUser);
        let json = serde_json::to_value(&offer).unwrap();
        assert_eq!(json["condition"], "new_user");
        assert_eq!(json["category"], "any");
    }
}
