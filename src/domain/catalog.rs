use crate::domain::model::{ServiceCode, ShippingService};

/// Ordered set of services a rating method offers. Quotes come out in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCatalog {
    services: Vec<ShippingService>,
}

impl ServiceCatalog {
    /// Duplicate codes keep their first position.
    pub fn new<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = ServiceCode>,
    {
        let mut services: Vec<ShippingService> = Vec::new();
        for code in codes {
            if !services.iter().any(|s| s.code == code) {
                services.push(ShippingService::from(code));
            }
        }
        Self { services }
    }

    /// Every known service, free shipping included.
    pub fn standard() -> Self {
        Self::new(ServiceCode::ALL)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShippingService> {
        self.services.iter()
    }

    pub fn contains(&self, code: ServiceCode) -> bool {
        self.services.iter().any(|s| s.code == code)
    }

    pub fn codes(&self) -> Vec<ServiceCode> {
        self.services.iter().map(|s| s.code).collect()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromIterator<ServiceCode> for ServiceCatalog {
    fn from_iter<T: IntoIterator<Item = ServiceCode>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a ServiceCatalog {
    type Item = &'a ShippingService;
    type IntoIter = std::slice::Iter<'a, ShippingService>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.iter()
    }
}
