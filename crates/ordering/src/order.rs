//! Placed orders and the session's order history.

use chrono::{DateTime, Local};
use serde::Serialize;

use qr_menu_core::{CartLine, OrderId, Price};

/// Source of "now" for order timestamps.
pub trait Clock {
    /// The current local time.
    fn now(&self) -> DateTime<Local>;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Display format for [`OrderRecord::date`], e.g. `3:04:05 PM`.
pub const ORDER_TIME_FORMAT: &str = "%-I:%M:%S %p";

/// A completed checkout.
///
/// `items` is a copy of the cart taken at checkout, so nothing done to the
/// cart afterwards can change a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub items: Vec<CartLine>,
    pub total: Price,
    pub date: String,
}

impl OrderRecord {
    /// Number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity.get())).sum()
    }
}

/// Orders placed during the session, newest first.
#[derive(Debug, Clone, Default)]
pub struct OrderHistory {
    orders: Vec<OrderRecord>,
}

impl OrderHistory {
    /// Create an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Snapshot `lines` into a new record at the front of the history.
    ///
    /// The ID is `ORD-` plus the epoch milliseconds of `placed_at`. If the
    /// previous order already used that millisecond (or a later one, after a
    /// clock step back), the newest timestamp plus one is used instead so IDs
    /// stay unique within the session.
    pub fn record(
        &mut self,
        lines: &[CartLine],
        total: Price,
        placed_at: DateTime<Local>,
    ) -> OrderId {
        let mut millis = placed_at.timestamp_millis();
        if let Some(last) = self.latest().and_then(|o| o.id.timestamp_millis()) {
            if millis <= last {
                millis = last + 1;
            }
        }

        let id = OrderId::from_timestamp_millis(millis);
        let record = OrderRecord {
            id: id.clone(),
            items: lines.to_vec(),
            total,
            date: placed_at.format(ORDER_TIME_FORMAT).to_string(),
        };
        self.orders.insert(0, record);
        id
    }

    /// The most recent order.
    #[must_use]
    pub fn latest(&self) -> Option<&OrderRecord> {
        self.orders.first()
    }

    /// Look up an order by ID.
    #[must_use]
    pub fn find(&self, id: &OrderId) -> Option<&OrderRecord> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// All orders, newest first.
    #[must_use]
    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    /// Number of orders placed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no order has been placed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use qr_menu_core::{Category, MenuItem, MenuItemId, Quantity};

    use super::*;

    fn at(millis: i64) -> DateTime<Local> {
        Local.timestamp_millis_opt(millis).unwrap()
    }

    fn line(id: &str, cents: u32, n: u32) -> CartLine {
        CartLine::new(
            MenuItem {
                id: MenuItemId::new(id),
                name: id.to_owned(),
                description: String::new(),
                price: Price::from_cents(cents),
                category: Category::Coffee,
                vegetarian: false,
            },
            Quantity::new(n).unwrap(),
        )
    }

    #[test]
    fn test_record_prepends() {
        let mut history = OrderHistory::new();
        history.record(&[line("1", 250, 1)], Price::from_cents(250), at(1_000));
        history.record(&[line("2", 400, 1)], Price::from_cents(400), at(2_000));

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().unwrap().id.as_str(), "ORD-2000");
        assert_eq!(history.orders()[1].id.as_str(), "ORD-1000");
    }

    #[test]
    fn test_same_millisecond_gets_unique_id() {
        let mut history = OrderHistory::new();
        history.record(&[line("1", 250, 1)], Price::from_cents(250), at(5_000));
        history.record(&[line("1", 250, 1)], Price::from_cents(250), at(5_000));
        history.record(&[line("1", 250, 1)], Price::from_cents(250), at(4_000));

        let ids: Vec<_> = history.orders().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["ORD-5002", "ORD-5001", "ORD-5000"]);
    }

    #[test]
    fn test_record_copies_lines() {
        let mut history = OrderHistory::new();
        let mut lines = vec![line("7", 800, 2)];
        history.record(&lines, Price::from_cents(1600), at(1));
        lines.clear();

        assert_eq!(history.latest().unwrap().items.len(), 1);
        assert_eq!(history.latest().unwrap().item_count(), 2);
    }

    #[test]
    fn test_date_is_human_readable() {
        let placed = at(1_700_000_000_000);
        let mut history = OrderHistory::new();
        history.record(&[], Price::ZERO, placed);
        let record = history.latest().unwrap();
        assert_eq!(record.date, placed.format(ORDER_TIME_FORMAT).to_string());
        assert!(record.date.ends_with("AM") || record.date.ends_with("PM"));
    }

    #[test]
    fn test_find() {
        let mut history = OrderHistory::new();
        history.record(&[line("1", 250, 1)], Price::from_cents(250), at(10));
        assert!(history.find(&OrderId::new("ORD-10")).is_some());
        assert!(history.find(&OrderId::new("ORD-11")).is_none());
    }
}
