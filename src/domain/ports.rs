use crate::domain::catalog::ServiceCatalog;
use crate::domain::model::ShippingMethodId;
use rust_decimal::Decimal;

/// Read access to the host's order model.
pub trait OrderContext {
    fn destination_country(&self) -> Option<&str>;
    fn order_subtotal(&self) -> Decimal;

    fn has_destination(&self) -> bool {
        self.destination_country()
            .is_some_and(|country| !country.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiCredentials {
    pub customer_number: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub mode: Option<String>,
}

pub trait ConfigProvider: Send + Sync {
    fn shipping_method_id(&self) -> ShippingMethodId;
    fn services(&self) -> ServiceCatalog;
    fn currency(&self) -> &str;

    // Stored settings the rating rules never consult.
    fn origin_postal_code(&self) -> Option<&str>;
    fn api_credentials(&self) -> ApiCredentials;
}
