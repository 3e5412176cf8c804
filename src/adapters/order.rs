use crate::core::OrderContext;
use rust_decimal::Decimal;
use serde::Serialize;

/// In-memory order, used by the CLI and batch files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticOrder {
    pub order_id: String,
    pub country: Option<String>,
    pub subtotal: Decimal,
}

impl StaticOrder {
    pub fn new(order_id: impl Into<String>, country: Option<&str>, subtotal: Decimal) -> Self {
        Self {
            order_id: order_id.into(),
            country: country.map(str::to_string),
            subtotal,
        }
    }
}

impl OrderContext for StaticOrder {
    fn destination_country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    fn order_subtotal(&self) -> Decimal {
        self.subtotal
    }
}
