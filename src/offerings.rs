use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::ListError;
use crate::models::Offering;

/// Parses a positive amount typed by the user. Accepts `10.50` and `10,50`.
pub fn parse_amount(text: &str) -> Result<Decimal, ListError> {
    let text = text.trim();
    let normalized = if text.contains('.') {
        text.to_string()
    } else {
        text.replace(',', ".")
    };

    let amount = Decimal::from_str(&normalized)
        .map_err(|_| ListError::InvalidOffering("amount is not a number"))?;
    if amount <= Decimal::ZERO {
        return Err(ListError::InvalidOffering("amount must be greater than zero"));
    }
    if amount.normalize().scale() > 2 {
        return Err(ListError::InvalidOffering("amount has fractions of a cent"));
    }
    Ok(amount)
}

#[derive(Debug, Clone, Default)]
pub struct OfferingList {
    entries: Vec<Offering>,
}

impl OfferingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, description: &str, amount_text: &str) -> Result<&Offering, ListError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ListError::InvalidOffering("description is empty"));
        }
        let amount = parse_amount(amount_text)?;
        if self.checked_total().and_then(|t| t.checked_add(amount)).is_none() {
            return Err(ListError::InvalidOffering("amount too large"));
        }

        self.entries.push(Offering {
            description: description.to_string(),
            amount,
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    pub fn remove(&mut self, index: usize) -> Result<Offering, ListError> {
        if index >= self.entries.len() {
            return Err(ListError::OutOfBounds {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn clear(&mut self, confirm: impl FnOnce(&str) -> bool) -> bool {
        if !confirm("Remove every offering from the list?") {
            return false;
        }
        self.entries.clear();
        true
    }

    // `add` refuses entries that would overflow the sum.
    pub fn total(&self) -> Decimal {
        self.checked_total().unwrap_or(Decimal::MAX)
    }

    fn checked_total(&self) -> Option<Decimal> {
        self.entries
            .iter()
            .try_fold(Decimal::ZERO, |sum, o| sum.checked_add(o.amount))
    }

    pub fn entries(&self) -> &[Offering] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
