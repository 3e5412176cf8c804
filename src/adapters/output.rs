use crate::core::RateQuote;
use crate::utils::error::{RatingError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Flat view of a quote for printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteRow {
    pub order_id: String,
    pub shipping_method_id: String,
    pub service_code: String,
    pub service_label: String,
    pub amount: String,
    pub currency: String,
}

impl QuoteRow {
    pub fn from_quote(order_id: &str, quote: &RateQuote) -> Self {
        Self {
            order_id: order_id.to_string(),
            shipping_method_id: quote.shipping_method_id.to_string(),
            service_code: quote.service.code.to_string(),
            service_label: quote.service.label.clone(),
            amount: format!("{:.2}", quote.amount.amount),
            currency: quote.amount.currency.clone(),
        }
    }
}

pub fn render(rows: &[QuoteRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => render_csv(rows),
    }
}

fn render_table(rows: &[QuoteRow]) -> String {
    if rows.is_empty() {
        return "No shipping services apply to this shipment.\n".to_string();
    }

    let show_order = rows.iter().any(|r| !r.order_id.is_empty());
    // Padding in format! counts chars, so widths must too.
    let order_width = column_width(rows.iter().map(|r| r.order_id.as_str()), 5);
    let code_width = column_width(rows.iter().map(|r| r.service_code.as_str()), 7);
    let label_width = column_width(rows.iter().map(|r| r.service_label.as_str()), 5);

    let mut out = String::new();
    if show_order {
        out.push_str(&format!("{:<order_width$}  ", "ORDER"));
    }
    out.push_str(&format!(
        "{:<code_width$}  {:<label_width$}  {:>10}\n",
        "SERVICE", "LABEL", "PRICE"
    ));

    for row in rows {
        if show_order {
            out.push_str(&format!("{:<order_width$}  ", row.order_id));
        }
        out.push_str(&format!(
            "{:<code_width$}  {:<label_width$}  {:>10}\n",
            row.service_code,
            row.service_label,
            format!("{} {}", row.amount, row.currency)
        ));
    }
    out
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, min: usize) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(0).max(min)
}

fn render_csv(rows: &[QuoteRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        writer.write_record([
            "order_id",
            "shipping_method_id",
            "service_code",
            "service_label",
            "amount",
            "currency",
        ])?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| RatingError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        RatingError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Money, ServiceCode, ShippingMethodId, ShippingService};
    use rust_decimal::Decimal;

    fn sample_rows() -> Vec<QuoteRow> {
        let quote = RateQuote {
            shipping_method_id: ShippingMethodId::new("canadapost"),
            service: ShippingService::from(ServiceCode::DomesticRegular),
            amount: Money::new(Decimal::from(12), "CAD"),
        };
        vec![QuoteRow::from_quote("A-1", &quote)]
    }

    #[test]
    fn test_render_csv() {
        let csv = render(&sample_rows(), OutputFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("order_id,shipping_method_id,service_code,service_label,amount,currency")
        );
        assert_eq!(
            lines.next(),
            Some("A-1,canadapost,DOM.RP,Regular Parcel - Canada,12.00,CAD")
        );
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample_rows(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["service_code"], "DOM.RP");
        assert_eq!(value[0]["amount"], "12.00");
    }

    #[test]
    fn test_render_table() {
        let table = render(&sample_rows(), OutputFormat::Table).unwrap();
        assert!(table.starts_with("ORDER"));
        assert!(table.contains("Regular Parcel - Canada"));
        assert!(table.contains("12.00 CAD"));

        let empty = render(&[], OutputFormat::Table).unwrap();
        assert!(empty.contains("No shipping services apply"));
    }

    #[test]
    fn test_table_aligns_non_ascii_order_ids() {
        let quote = RateQuote {
            shipping_method_id: ShippingMethodId::new("canadapost"),
            service: ShippingService::from(ServiceCode::DomesticRegular),
            amount: Money::new(Decimal::from(12), "CAD"),
        };
        let rows = vec![
            QuoteRow::from_quote("Québec-1", &quote),
            QuoteRow::from_quote("Q-22", &quote),
        ];

        let table = render(&rows, OutputFormat::Table).unwrap();
        let columns: Vec<usize> = table
            .lines()
            .map(|line| {
                let byte_pos = line
                    .find("SERVICE")
                    .or_else(|| line.find("DOM.RP"))
                    .unwrap();
                line[..byte_pos].chars().count()
            })
            .collect();

        assert_eq!(columns.len(), 3);
        assert!(columns.iter().all(|c| *c == columns[0]));
    }
}
