use crate::utils::error::{RatingError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_CURRENCY: &str = "CAD";

/// Service codes offered by the flat-rate method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCode {
    #[serde(rename = "DOM.EP")]
    DomesticExpedited,
    #[serde(rename = "DOM.RP")]
    DomesticRegular,
    #[serde(rename = "USA.XP")]
    UsaXpresspost,
    #[serde(rename = "Free")]
    Free,
}

impl ServiceCode {
    pub const ALL: [ServiceCode; 4] = [
        ServiceCode::DomesticExpedited,
        ServiceCode::DomesticRegular,
        ServiceCode::UsaXpresspost,
        ServiceCode::Free,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCode::DomesticExpedited => "DOM.EP",
            ServiceCode::DomesticRegular => "DOM.RP",
            ServiceCode::UsaXpresspost => "USA.XP",
            ServiceCode::Free => "Free",
        }
    }

    pub fn default_label(&self) -> &'static str {
        match self {
            ServiceCode::DomesticExpedited => "Expedited Parcel - Canada",
            ServiceCode::DomesticRegular => "Regular Parcel - Canada",
            ServiceCode::UsaXpresspost => "Xpresspost - USA",
            ServiceCode::Free => "Free shipping",
        }
    }
}

impl fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceCode {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        ServiceCode::ALL
            .into_iter()
            .find(|c| c.as_str() == code)
            .ok_or_else(|| RatingError::UnknownServiceCode {
                code: code.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingService {
    pub code: ServiceCode,
    pub label: String,
}

impl From<ServiceCode> for ShippingService {
    fn from(code: ServiceCode) -> Self {
        Self {
            code,
            label: code.default_label().to_string(),
        }
    }
}

/// Opaque id of the rating method instance, supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShippingMethodId(String);

impl ShippingMethodId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShippingMethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency: String,
}

impl Money {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}

/// ISO 3166-1 alpha-2 country code, stored upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    pub const CANADA: &'static str = "CA";
    pub const UNITED_STATES: &'static str = "US";

    /// Blank input means the destination is unknown.
    pub fn parse(raw: &str) -> Result<Option<Self>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(RatingError::invalid_shipment(format!(
                "'{}' is not a two-letter country code",
                raw
            )));
        }
        Ok(Some(Self(trimmed.to_ascii_uppercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentContext {
    destination: Option<CountryCode>,
    order_subtotal: Decimal,
}

impl ShipmentContext {
    pub fn new(destination_country: Option<&str>, order_subtotal: Decimal) -> Result<Self> {
        if order_subtotal.is_sign_negative() && !order_subtotal.is_zero() {
            return Err(RatingError::invalid_shipment(format!(
                "order subtotal {} is negative",
                order_subtotal
            )));
        }
        let destination = match destination_country {
            Some(raw) => CountryCode::parse(raw)?,
            None => None,
        };
        Ok(Self {
            destination,
            order_subtotal,
        })
    }

    pub fn destination(&self) -> Option<&CountryCode> {
        self.destination.as_ref()
    }

    pub fn order_subtotal(&self) -> Decimal {
        self.order_subtotal
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateQuote {
    pub shipping_method_id: ShippingMethodId,
    pub service: ShippingService,
    pub amount: Money,
}
