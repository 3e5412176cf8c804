pub mod method;
pub mod rates;

pub use crate::domain::catalog::ServiceCatalog;
pub use crate::domain::model::{Money, RateQuote, ServiceCode, ShipmentContext, ShippingService};
pub use crate::domain::ports::{ConfigProvider, OrderContext};
pub use crate::utils::error::Result;
