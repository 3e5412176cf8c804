use crate::utils::error::{RatingError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn postal_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Canadian postal codes never use D, F, I, O, Q or U; W and Z are not valid first letters.
    RE.get_or_init(|| {
        Regex::new(r"^[ABCEGHJ-NPRSTVXY][0-9][ABCEGHJ-NPRSTV-Z] ?[0-9][ABCEGHJ-NPRSTV-Z][0-9]$")
            .expect("postal code pattern is valid")
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RatingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| RatingError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_currency_code(field_name: &str, value: &str) -> Result<()> {
    if value.len() != 3 || !value.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(RatingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Currency must be a three-letter ISO 4217 code such as CAD".to_string(),
        });
    }
    Ok(())
}

pub fn validate_postal_code(field_name: &str, value: &str) -> Result<()> {
    let normalized = value.trim().to_ascii_uppercase();
    if !postal_code_regex().is_match(&normalized) {
        return Err(RatingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected a Canadian postal code such as K1A 0B1".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(RatingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
