use crate::domain::catalog::ServiceCatalog;
use crate::domain::model::{
    CountryCode, Money, RateQuote, ServiceCode, ShipmentContext, ShippingMethodId,
    DEFAULT_CURRENCY,
};
use rust_decimal::Decimal;

/// Subtotal at or below which parcel rates apply; above it shipping is free.
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationRule {
    Country(&'static str),
    Anywhere,
}

impl DestinationRule {
    fn matches(&self, destination: &CountryCode) -> bool {
        match self {
            DestinationRule::Country(code) => destination.as_str() == *code,
            DestinationRule::Anywhere => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubtotalBand {
    AtMost(Decimal),
    Above(Decimal),
}

impl SubtotalBand {
    fn contains(&self, subtotal: Decimal) -> bool {
        match self {
            SubtotalBand::AtMost(limit) => subtotal <= *limit,
            SubtotalBand::Above(limit) => subtotal > *limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRule {
    pub service: ServiceCode,
    pub destination: DestinationRule,
    pub subtotal: SubtotalBand,
    pub price: Decimal,
}

impl RateRule {
    fn applies(&self, destination: &CountryCode, subtotal: Decimal) -> bool {
        self.destination.matches(destination) && self.subtotal.contains(subtotal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    rules: Vec<RateRule>,
}

impl RateTable {
    pub fn standard() -> Self {
        let threshold = FREE_SHIPPING_THRESHOLD;
        Self {
            rules: vec![
                RateRule {
                    service: ServiceCode::DomesticRegular,
                    destination: DestinationRule::Country(CountryCode::CANADA),
                    subtotal: SubtotalBand::AtMost(threshold),
                    price: Decimal::from(12),
                },
                RateRule {
                    service: ServiceCode::DomesticExpedited,
                    destination: DestinationRule::Country(CountryCode::CANADA),
                    subtotal: SubtotalBand::AtMost(threshold),
                    price: Decimal::from(18),
                },
                RateRule {
                    service: ServiceCode::UsaXpresspost,
                    destination: DestinationRule::Country(CountryCode::UNITED_STATES),
                    subtotal: SubtotalBand::AtMost(threshold),
                    price: Decimal::from(20),
                },
                RateRule {
                    service: ServiceCode::Free,
                    destination: DestinationRule::Anywhere,
                    subtotal: SubtotalBand::Above(threshold),
                    price: Decimal::ZERO,
                },
            ],
        }
    }

    /// Price of `service` for this shipment, or `None` when no rule applies.
    pub fn price_for(
        &self,
        service: ServiceCode,
        destination: &CountryCode,
        subtotal: Decimal,
    ) -> Option<Decimal> {
        self.rules
            .iter()
            .find(|rule| rule.service == service && rule.applies(destination, subtotal))
            .map(|rule| rule.price)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Stateless rating over a fixed rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateCalculator {
    table: RateTable,
    currency: String,
}

impl RateCalculator {
    pub fn new(table: RateTable, currency: impl Into<String>) -> Self {
        Self {
            table,
            currency: currency.into(),
        }
    }

    pub fn with_currency(currency: impl Into<String>) -> Self {
        Self::new(RateTable::standard(), currency)
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn calculate(
        &self,
        method_id: &ShippingMethodId,
        context: &ShipmentContext,
        services: &ServiceCatalog,
    ) -> Vec<RateQuote> {
        let Some(destination) = context.destination() else {
            return Vec::new();
        };
        let subtotal = context.order_subtotal();

        services
            .iter()
            .filter_map(|service| {
                self.table
                    .price_for(service.code, destination, subtotal)
                    .map(|price| RateQuote {
                        shipping_method_id: method_id.clone(),
                        service: service.clone(),
                        amount: Money::new(price, self.currency.as_str()),
                    })
            })
            .collect()
    }
}

impl Default for RateCalculator {
    fn default() -> Self {
        Self::with_currency(DEFAULT_CURRENCY)
    }
}

/// Rates `context` against the standard table in CAD.
pub fn calculate_rates(
    method_id: &ShippingMethodId,
    context: &ShipmentContext,
    services: &ServiceCatalog,
) -> Vec<RateQuote> {
    RateCalculator::default().calculate(method_id, context, services)
}
