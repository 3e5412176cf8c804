use anyhow::Result;
use parcel_rates::adapters::{batch, output};
use parcel_rates::config::load_settings;
use parcel_rates::{ConfigProvider, ServiceCode, ShippingMethod, StaticOrder};
use rust_decimal::Decimal;
use tempfile::TempDir;

const SETTINGS: &str = r#"
[method]
id = "canadapost"
label = "Canada Post"

[services]
enabled = ["DOM.RP", "DOM.EP", "Free"]

[api]
customer_number = "0001234567"
username = "user"
password = "secret"
mode = "live"

[origin]
postal_code = "K1A0B1"
"#;

/// 從設定檔建立運送方式並計價
#[test]
fn test_method_from_settings_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings_path = temp_dir.path().join("rates.toml");
    std::fs::write(&settings_path, SETTINGS)?;

    let config = load_settings(Some(settings_path.as_path()))?;
    let method = ShippingMethod::new(config);

    assert_eq!(method.id().as_str(), "canadapost");
    assert_eq!(method.config().label(), "Canada Post");
    assert_eq!(method.config().origin_postal_code(), Some("K1A0B1"));
    assert_eq!(
        method.services().codes(),
        vec![
            ServiceCode::DomesticRegular,
            ServiceCode::DomesticExpedited,
            ServiceCode::Free,
        ]
    );

    // USA.XP is not enabled, so US parcels under the threshold get nothing.
    let quotes = method.quote(&StaticOrder::new("A-1", Some("US"), Decimal::from(40)))?;
    assert!(quotes.is_empty());

    let quotes = method.quote(&StaticOrder::new("A-2", Some("US"), Decimal::from(140)))?;
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].service.code, ServiceCode::Free);
    assert_eq!(quotes[0].shipping_method_id.as_str(), "canadapost");

    Ok(())
}

#[test]
fn test_invalid_settings_are_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings_path = temp_dir.path().join("rates.toml");
    std::fs::write(
        &settings_path,
        r#"
[method]
id = "canadapost"
currency = "cad"

[services]
enabled = ["DOM.RP"]
"#,
    )?;

    assert!(load_settings(Some(settings_path.as_path())).is_err());
    assert!(load_settings(Some(temp_dir.path().join("missing.toml").as_path())).is_err());
    Ok(())
}

#[test]
fn test_default_settings_offer_every_service() -> Result<()> {
    let method = ShippingMethod::new(load_settings(None)?);
    assert_eq!(method.id().as_str(), "flat_rate");
    assert_eq!(method.services().len(), 4);
    Ok(())
}

#[test]
fn test_batch_file_to_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("orders.csv");
    std::fs::write(
        &input_path,
        "order_id,country,subtotal\n\
         1001,CA,45.00\n\
         1002,US,100\n\
         1003,,30\n\
         1004,FR,100.01\n",
    )?;

    let method = ShippingMethod::new(load_settings(None)?);
    let orders = batch::read_orders_from_file(&input_path)?;
    assert_eq!(orders.len(), 4);

    let mut rows = Vec::new();
    for order in &orders {
        for quote in method.quote(order)? {
            rows.push(output::QuoteRow::from_quote(&order.order_id, &quote));
        }
    }

    let csv = output::render(&rows, output::OutputFormat::Csv)?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "order_id,shipping_method_id,service_code,service_label,amount,currency",
            "1001,flat_rate,DOM.EP,Expedited Parcel - Canada,18.00,CAD",
            "1001,flat_rate,DOM.RP,Regular Parcel - Canada,12.00,CAD",
            "1002,flat_rate,USA.XP,Xpresspost - USA,20.00,CAD",
            "1004,flat_rate,Free,Free shipping,0.00,CAD",
        ]
    );
    Ok(())
}
