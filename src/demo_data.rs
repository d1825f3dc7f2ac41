//! Small sample instances for every engine.
//!
//! Used by documentation and tests. Money is in rupiah, distances in km.

use crate::models::{
    Basket, CargoItem, CookTask, DayType, FuelStation, Offer, OfferCondition, Point, Stop, Task,
    UserStatus,
};

/// Five orders with pickup-ready times and delivery deadlines.
///
/// ```
/// use u_delivery::demo_data;
/// use u_delivery::scheduler::schedule;
///
/// let result = schedule(&demo_data::time_window_orders());
/// assert_eq!(result.late_count, 0);
/// ```
pub fn time_window_orders() -> Vec<Task> {
    vec![
        Task::new("P1", 5).with_ready_time(0),
        Task::new("P2", 8).with_ready_time(2),
        Task::new("P3", 4).with_ready_time(1),
        Task::new("P4", 7).with_ready_time(3),
        Task::new("P5", 10).with_ready_time(4),
    ]
}

/// Five orders with cooking times in minutes.
pub fn cooking_orders() -> Vec<CookTask> {
    vec![
        CookTask::new("P1", 12),
        CookTask::new("P2", 5),
        CookTask::new("P3", 8),
        CookTask::new("P4", 3),
        CookTask::new("P5", 15),
    ]
}

/// Driver position, customer position and nearby fuel stations.
pub fn fuel_stations() -> (Point, Point, Vec<FuelStation>) {
    let driver = Point::new(0.0, 0.0);
    let customer = Point::new(10.0, 8.0);
    let stations = vec![
        FuelStation::new("SPBU1", 3.0, 2.0)
            .with_label("Pertamina A")
            .with_price(13_000),
        FuelStation::new("SPBU2", 6.0, 5.0)
            .with_label("Shell B")
            .with_price(14_500),
        FuelStation::new("SPBU3", 2.0, 7.0)
            .with_label("Pertamina C")
            .with_price(13_000),
        FuelStation::new("SPBU4", 8.0, 3.0)
            .with_label("BP D")
            .with_price(14_000),
        FuelStation::new("SPBU5", -2.0, 4.0)
            .with_label("Vivo E")
            .with_price(12_500),
    ];
    (driver, customer, stations)
}

/// Four customer stops in two zones, with a distance cap of 20.
pub fn route_stops() -> (Vec<Stop>, i64) {
    let stops = vec![
        Stop::new("C1", "A", 5).with_label("Budi"),
        Stop::new("C2", "B", 3).with_label("Ani"),
        Stop::new("C3", "A", 4).with_label("Citra"),
        Stop::new("C4", "A", 6).with_label("Dodi"),
    ];
    (stops, 20)
}

/// Five offers and a weekend basket from a new user.
pub fn offers_and_basket() -> (Vec<Offer>, Basket) {
    let offers = vec![
        Offer::new("PROMO1", 10_000)
            .with_label("Weekend Discount")
            .with_min_spend(50_000)
            .with_condition(OfferCondition::Weekend),
        Offer::new("PROMO2", 15_000)
            .with_label("New User Fast Food")
            .with_category("fast_food")
            .with_min_spend(30_000)
            .with_condition(OfferCondition::NewUser),
        Offer::new("PROMO3", 5_000)
            .with_label("Drinks Deal")
            .with_category("drinks")
            .with_min_spend(20_000),
        Offer::new("PROMO4", 8_000)
            .with_label("Weekend Saver")
            .with_min_spend(40_000)
            .with_condition(OfferCondition::Weekend),
        Offer::new("PROMO5", 12_000)
            .with_label("Member Fast Food")
            .with_category("fast_food")
            .with_min_spend(60_000)
            .with_condition(OfferCondition::Member),
    ];
    let basket = Basket::new(80_000)
        .with_category("fast_food")
        .with_category("drinks")
        .with_day_type(DayType::Weekend)
        .with_user_status(UserStatus::NewUser);
    (offers, basket)
}

/// Five items (volume in cm³, value in rupiah) and a 6000 cm³ bag.
pub fn cargo_items() -> (Vec<CargoItem>, usize) {
    let items = vec![
        CargoItem::new("I1", 1_500, 15_000).with_label("Rice Box"),
        CargoItem::new("I2", 2_000, 20_000).with_label("Fried Chicken"),
        CargoItem::new("I3", 3_000, 25_000).with_label("Pizza"),
        CargoItem::new("I4", 1_000, 10_000).with_label("Iced Tea"),
        CargoItem::new("I5", 2_500, 18_000).with_label("Noodles"),
    ];
    (items, 6_000)
}

/// E-wallet top-up denominations and a target amount.
pub fn top_up() -> (Vec<u64>, u64) {
    (vec![10_000, 20_000, 25_000, 50_000, 100_000], 75_000)
}
