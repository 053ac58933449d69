//! Create-product form: field buffers and validation rules.
//!
//! The form owns raw text for each field and turns it into a [`NewProduct`]
//! only when every rule passes. Failed rules produce [`FieldError`]s that the
//! panel renders under the offending field; the store is never called with
//! invalid input.
//!
//! # Rules
//!
//! | Field    | Rules                                        |
//! |----------|----------------------------------------------|
//! | name     | required, at least 3 characters              |
//! | price    | required, whole number greater than 0        |
//! | quantity | required, whole number greater than 0        |

use super::modes::FormField;
use crate::domain::NewProduct;

/// Initial price buffer when the form opens.
const DEFAULT_PRICE: &str = "1000";

/// Initial quantity buffer when the form opens.
const DEFAULT_QUANTITY: &str = "1";

/// Minimum product name length, in characters.
const MIN_NAME_CHARS: usize = 3;

/// A failed validation rule for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    fn new(field: FormField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// State of the create-product side panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub quantity: String,

    /// Messages from the last failed submit, cleared per field on edit.
    pub errors: Vec<FieldError>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: DEFAULT_PRICE.to_string(),
            quantity: DEFAULT_QUANTITY.to_string(),
            errors: Vec::new(),
        }
    }
}

impl ProductForm {
    /// Restores the initial values and clears all messages.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Raw buffer for a field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Quantity => &self.quantity,
        }
    }

    /// First error recorded for a field, if any.
    #[must_use]
    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    fn buffer_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Price => &mut self.price,
            FormField::Quantity => &mut self.quantity,
        }
    }

    /// Appends a typed character to a field.
    ///
    /// Numeric fields only accept ASCII digits; anything else is dropped.
    /// Returns `true` if the buffer changed.
    pub fn push_char(&mut self, field: FormField, c: char) -> bool {
        let numeric = field != FormField::Name;
        if c.is_control() || (numeric && !c.is_ascii_digit()) {
            return false;
        }
        self.buffer_mut(field).push(c);
        self.errors.retain(|e| e.field != field);
        true
    }

    /// Removes the last character of a field. Returns `true` if it changed.
    pub fn pop_char(&mut self, field: FormField) -> bool {
        let changed = self.buffer_mut(field).pop().is_some();
        if changed {
            self.errors.retain(|e| e.field != field);
        }
        changed
    }

    /// Checks every rule and builds the add payload.
    ///
    /// # Errors
    ///
    /// Returns one [`FieldError`] per failing field, in tab order.
    pub fn validate(&self) -> Result<NewProduct, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push(FieldError::new(FormField::Name, "Product name is required"));
        } else if self.name.chars().count() < MIN_NAME_CHARS {
            errors.push(FieldError::new(
                FormField::Name,
                "Product name must be at least 3 characters",
            ));
        }

        let price = parse_positive::<u64>(&self.price, FormField::Price, "Price", &mut errors);
        let quantity =
            parse_positive::<u32>(&self.quantity, FormField::Quantity, "Quantity", &mut errors);

        match (price, quantity) {
            (Some(price), Some(quantity)) if errors.is_empty() => {
                Ok(NewProduct::new(self.name.clone(), price, quantity))
            }
            _ => Err(errors),
        }
    }
}

fn parse_positive<T>(raw: &str, field: FormField, label: &str, errors: &mut Vec<FieldError>) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + From<u8>,
{
    if raw.is_empty() {
        errors.push(FieldError::new(field, &format!("{label} is required")));
        return None;
    }

    match raw.parse::<T>() {
        Ok(value) if value > T::from(0) => Some(value),
        Ok(_) => {
            errors.push(FieldError::new(field, &format!("{label} must be greater than 0")));
            None
        }
        Err(_) => {
            errors.push(FieldError::new(field, &format!("{label} is too large")));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(errors: &[FieldError]) -> Vec<(FormField, &str)> {
        errors.iter().map(|e| (e.field, e.message.as_str())).collect()
    }

    #[test]
    fn opens_with_default_price_and_quantity() {
        let form = ProductForm::default();
        assert_eq!(form.name, "");
        assert_eq!(form.price, "1000");
        assert_eq!(form.quantity, "1");
    }

    #[test]
    fn valid_form_builds_payload() {
        let mut form = ProductForm::default();
        for c in "Test Product".chars() {
            form.push_char(FormField::Name, c);
        }

        let product = form.validate().unwrap();

        assert_eq!(product, NewProduct::new("Test Product", 1000, 1));
    }

    #[test]
    fn name_is_required_and_needs_three_characters() {
        let mut form = ProductForm::default();
        let errors = form.validate().unwrap_err();
        assert_eq!(messages(&errors), vec![(FormField::Name, "Product name is required")]);

        form.name = "TV".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            messages(&errors),
            vec![(FormField::Name, "Product name must be at least 3 characters")]
        );

        form.name = "Tủ".to_string() + "i";
        assert!(form.validate().is_ok());
    }

    #[test]
    fn numeric_fields_must_be_present_and_positive() {
        let mut form = ProductForm {
            name: "Router".to_string(),
            price: String::new(),
            quantity: "0".to_string(),
            errors: Vec::new(),
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(
            messages(&errors),
            vec![
                (FormField::Price, "Price is required"),
                (FormField::Quantity, "Quantity must be greater than 0"),
            ]
        );

        form.price = "99999999999999999999999".to_string();
        form.quantity = "3".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(messages(&errors), vec![(FormField::Price, "Price is too large")]);
    }

    #[test]
    fn numeric_fields_reject_non_digits() {
        let mut form = ProductForm::default();
        assert!(!form.push_char(FormField::Price, ','));
        assert!(!form.push_char(FormField::Quantity, '-'));
        assert!(form.push_char(FormField::Price, '5'));
        assert_eq!(form.price, "10005");
        assert_eq!(form.quantity, "1");
    }

    #[test]
    fn editing_a_field_clears_its_error_only() {
        let mut form = ProductForm {
            name: String::new(),
            price: String::new(),
            quantity: "1".to_string(),
            errors: Vec::new(),
        };
        form.errors = form.validate().unwrap_err();
        assert_eq!(form.errors.len(), 2);

        form.push_char(FormField::Name, 'X');

        assert_eq!(form.error_for(FormField::Name), None);
        assert_eq!(form.error_for(FormField::Price), Some("Price is required"));
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut form = ProductForm::default();
        form.push_char(FormField::Name, 'A');
        form.pop_char(FormField::Quantity);
        form.reset();
        assert_eq!(form, ProductForm::default());
    }
}
