pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::order::StaticOrder;
pub use config::TomlConfig;
pub use crate::core::method::ShippingMethod;
pub use crate::core::rates::{calculate_rates, RateCalculator};
pub use domain::catalog::ServiceCatalog;
pub use domain::model::{
    CountryCode, Money, RateQuote, ServiceCode, ShipmentContext, ShippingMethodId,
    ShippingService,
};
pub use domain::ports::{ApiCredentials, ConfigProvider, OrderContext};
pub use utils::error::{RatingError, Result};
