//! Invoice line item
//!
//! Line items are ephemeral: built up while an invoice is drafted, then
//! frozen into the invoice on submission. Numeric fields are parsed
//! explicitly at this boundary; nothing downstream coerces strings.

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{BizbookError, BizbookResult};

/// A single line on an invoice or quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// What is being billed
    pub description: String,

    /// Quantity (may be fractional, e.g. hours)
    pub quantity: f64,

    /// Price per unit
    pub unit_price: Money,
}

impl LineItem {
    /// Create a line item from already-parsed values
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: Money) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// Parse a line item from raw string fields
    ///
    /// Non-numeric quantity or price fails with an input error. Negative
    /// values are accepted here; whether they are allowed is the calling
    /// layer's decision.
    pub fn parse(description: &str, quantity: &str, unit_price: &str) -> BizbookResult<Self> {
        let quantity: f64 = quantity.trim().parse().map_err(|_| {
            BizbookError::input(format!("quantity '{}' is not a number", quantity))
        })?;
        if !quantity.is_finite() {
            return Err(BizbookError::input(format!(
                "quantity '{}' is not a finite number",
                quantity
            )));
        }

        let unit_price = Money::parse(unit_price)
            .map_err(|e| BizbookError::input(e.to_string()))?;

        Ok(Self::new(description, quantity, unit_price))
    }

    /// The line amount: quantity × unit price
    pub fn amount(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount() {
        let item = LineItem::new("Design work", 2.0, Money::from_rupees(100));
        assert_eq!(item.amount(), Money::from_rupees(200));
    }

    #[test]
    fn test_fractional_quantity() {
        let item = LineItem::new("Consulting hours", 1.5, Money::from_rupees(1000));
        assert_eq!(item.amount(), Money::from_rupees(1500));
    }

    #[test]
    fn test_parse_valid() {
        let item = LineItem::parse("Hosting", "2", "100.00").unwrap();
        assert_eq!(item.quantity, 2.0);
        assert_eq!(item.unit_price, Money::from_rupees(100));
    }

    #[test]
    fn test_parse_rejects_non_numeric_quantity() {
        let err = LineItem::parse("Hosting", "two", "100").unwrap_err();
        assert!(err.is_input());
    }

    #[test]
    fn test_parse_rejects_non_numeric_price() {
        let err = LineItem::parse("Hosting", "2", "lots").unwrap_err();
        assert!(err.is_input());
    }

    #[test]
    fn test_parse_accepts_negative_values() {
        // Validation of sign is the caller's job, not this boundary's
        let item = LineItem::parse("Adjustment", "-1", "50").unwrap();
        assert_eq!(item.amount(), Money::from_rupees(-50));
    }
}
