use crate::core::rates::RateCalculator;
use crate::core::{ConfigProvider, OrderContext, RateQuote, ShipmentContext};
use crate::domain::catalog::ServiceCatalog;
use crate::domain::model::ShippingMethodId;
use crate::utils::error::Result;

/// A configured flat-rate shipping method, the unit a checkout embeds.
pub struct ShippingMethod<C: ConfigProvider> {
    config: C,
    id: ShippingMethodId,
    services: ServiceCatalog,
    calculator: RateCalculator,
}

impl<C: ConfigProvider> ShippingMethod<C> {
    pub fn new(config: C) -> Self {
        let id = config.shipping_method_id();
        let services = config.services();
        let calculator = RateCalculator::with_currency(config.currency());
        Self {
            config,
            id,
            services,
            calculator,
        }
    }

    pub fn id(&self) -> &ShippingMethodId {
        &self.id
    }

    pub fn services(&self) -> &ServiceCatalog {
        &self.services
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn calculate_rates(&self, context: &ShipmentContext) -> Vec<RateQuote> {
        let quotes = self.calculator.calculate(&self.id, context, &self.services);

        match context.destination() {
            Some(country) => tracing::debug!(
                method = %self.id,
                country = %country,
                subtotal = %context.order_subtotal(),
                quotes = quotes.len(),
                "Rated shipment"
            ),
            None => tracing::debug!(method = %self.id, "No destination address, skipping rating"),
        }

        quotes
    }

    /// Reads the shipment out of the host's order and rates it.
    pub fn quote<O: OrderContext + ?Sized>(&self, order: &O) -> Result<Vec<RateQuote>> {
        let country = if order.has_destination() {
            order.destination_country()
        } else {
            None
        };
        let context = ShipmentContext::new(country, order.order_subtotal())?;
        Ok(self.calculate_rates(&context))
    }
}
