use crate::adapters::order::StaticOrder;
use crate::adapters::output::QuoteRow;
use crate::core::method::ShippingMethod;
use crate::core::ConfigProvider;
use crate::utils::error::{RatingError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
struct BatchRow {
    order_id: String,
    #[serde(default)]
    country: Option<String>,
    subtotal: String,
}

/// Reads `order_id,country,subtotal` rows. An empty country means no shipping address.
pub fn read_orders<R: Read>(reader: R) -> Result<Vec<StaticOrder>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut orders = Vec::new();
    for (index, row) in csv_reader.deserialize::<BatchRow>().enumerate() {
        let row = row?;
        // 第一列是標題，資料從第 2 列開始
        let line = index + 2;
        let subtotal = Decimal::from_str(&row.subtotal).map_err(|e| {
            RatingError::invalid_shipment(format!(
                "line {}: subtotal '{}' is not a decimal number ({})",
                line, row.subtotal, e
            ))
        })?;
        let country = row.country.filter(|c| !c.is_empty());
        orders.push(StaticOrder::new(row.order_id, country.as_deref(), subtotal));
    }

    tracing::debug!("Read {} orders from batch input", orders.len());
    Ok(orders)
}

pub fn read_orders_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<StaticOrder>> {
    let file = std::fs::File::open(path)?;
    read_orders(file)
}

#[derive(Debug)]
pub struct RejectedOrder {
    pub order_id: String,
    pub error: RatingError,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub rows: Vec<QuoteRow>,
    pub rejected: Vec<RejectedOrder>,
}

/// Rates every order; orders that cannot be rated are logged and skipped.
pub fn quote_orders<C: ConfigProvider>(
    method: &ShippingMethod<C>,
    orders: &[StaticOrder],
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for order in orders {
        match method.quote(order) {
            Ok(quotes) => {
                if quotes.is_empty() {
                    tracing::warn!("Order {} has no applicable shipping service", order.order_id);
                }
                outcome.rows.extend(
                    quotes
                        .iter()
                        .map(|q| QuoteRow::from_quote(&order.order_id, q)),
                );
            }
            Err(error) => {
                tracing::warn!("❌ Skipping order {}: {}", order.order_id, error);
                outcome.rejected.push(RejectedOrder {
                    order_id: order.order_id.clone(),
                    error,
                });
            }
        }
    }

    outcome
}
