use parcel_rates::{
    calculate_rates, RateQuote, ServiceCatalog, ServiceCode, ShipmentContext, ShippingMethodId,
};
use rust_decimal::Decimal;

fn method_id() -> ShippingMethodId {
    ShippingMethodId::new("canadapost")
}

fn rate(country: Option<&str>, subtotal: Decimal, services: &ServiceCatalog) -> Vec<RateQuote> {
    let context = ShipmentContext::new(country, subtotal).unwrap();
    calculate_rates(&method_id(), &context, services)
}

fn summary(quotes: &[RateQuote]) -> Vec<(&'static str, Decimal, String)> {
    quotes
        .iter()
        .map(|q| (q.service.code.as_str(), q.amount.amount, q.amount.currency.clone()))
        .collect()
}

#[test]
fn test_no_destination_yields_no_quotes() {
    let services = ServiceCatalog::standard();
    for subtotal in [Decimal::ZERO, Decimal::from(50), Decimal::from(1000)] {
        assert!(rate(None, subtotal, &services).is_empty());
    }
}

#[test]
fn test_canada_under_threshold() {
    let services = ServiceCatalog::new([
        ServiceCode::DomesticRegular,
        ServiceCode::DomesticExpedited,
        ServiceCode::UsaXpresspost,
        ServiceCode::Free,
    ]);
    let quotes = rate(Some("CA"), Decimal::from(50), &services);

    assert_eq!(
        summary(&quotes),
        vec![
            ("DOM.RP", Decimal::from(12), "CAD".to_string()),
            ("DOM.EP", Decimal::from(18), "CAD".to_string()),
        ]
    );
}

#[test]
fn test_united_states_under_threshold() {
    let quotes = rate(Some("US"), Decimal::from(50), &ServiceCatalog::standard());
    assert_eq!(
        summary(&quotes),
        vec![("USA.XP", Decimal::from(20), "CAD".to_string())]
    );
}

#[test]
fn test_threshold_is_inclusive_for_parcel_rates() {
    let quotes = rate(Some("CA"), Decimal::from(100), &ServiceCatalog::standard());
    let codes: Vec<ServiceCode> = quotes.iter().map(|q| q.service.code).collect();
    assert_eq!(
        codes,
        vec![ServiceCode::DomesticExpedited, ServiceCode::DomesticRegular]
    );
}

#[test]
fn test_just_over_threshold_is_free_only() {
    let quotes = rate(Some("CA"), Decimal::new(10001, 2), &ServiceCatalog::standard());
    assert_eq!(
        summary(&quotes),
        vec![("Free", Decimal::ZERO, "CAD".to_string())]
    );
    assert_eq!(quotes[0].service.label, "Free shipping");
}

#[test]
fn test_free_not_configured_yields_nothing_over_threshold() {
    let services = ServiceCatalog::new([
        ServiceCode::DomesticExpedited,
        ServiceCode::DomesticRegular,
        ServiceCode::UsaXpresspost,
    ]);
    assert!(rate(Some("CA"), Decimal::from(250), &services).is_empty());
    assert!(rate(Some("US"), Decimal::from(250), &services).is_empty());
}

#[test]
fn test_zero_subtotal_is_valid() {
    let quotes = rate(Some("US"), Decimal::ZERO, &ServiceCatalog::standard());
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].service.code, ServiceCode::UsaXpresspost);
}

#[test]
fn test_every_quote_carries_the_given_method_id() {
    let quotes = rate(Some("CA"), Decimal::from(10), &ServiceCatalog::standard());
    assert!(!quotes.is_empty());
    assert!(quotes.iter().all(|q| q.shipping_method_id == method_id()));
}

#[test]
fn test_repeated_calls_are_identical() {
    let services = ServiceCatalog::standard();
    let context = ShipmentContext::new(Some("CA"), Decimal::new(7550, 2)).unwrap();

    let first = calculate_rates(&method_id(), &context, &services);
    let second = calculate_rates(&method_id(), &context, &services);
    assert_eq!(first, second);
}

#[test]
fn test_quote_order_follows_service_order() {
    let services = ServiceCatalog::new([ServiceCode::DomesticExpedited, ServiceCode::DomesticRegular]);
    let codes: Vec<ServiceCode> = rate(Some("ca"), Decimal::from(5), &services)
        .iter()
        .map(|q| q.service.code)
        .collect();
    assert_eq!(
        codes,
        vec![ServiceCode::DomesticExpedited, ServiceCode::DomesticRegular]
    );
}
