//! Booking form payload and its validation rules.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::BookingError;

/// Contact and payment details posted to `/bookings`.
///
/// Payment fields are opaque strings forwarded verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone_number: String,
    #[validate(length(min = 1))]
    pub card_number: String,
    #[validate(length(min = 1))]
    pub expiration_date: String,
    #[validate(length(min = 1))]
    pub cvv: String,
    #[validate(length(min = 1))]
    pub billing_address: String,
}

/// Form fields in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    CardNumber,
    ExpirationDate,
    Cvv,
    BillingAddress,
}

impl BookingField {
    pub const ALL: [BookingField; 8] = [
        BookingField::FirstName,
        BookingField::LastName,
        BookingField::Email,
        BookingField::PhoneNumber,
        BookingField::CardNumber,
        BookingField::ExpirationDate,
        BookingField::Cvv,
        BookingField::BillingAddress,
    ];

    /// Rust field name, as reported by `validator`.
    pub fn field_name(self) -> &'static str {
        match self {
            BookingField::FirstName => "first_name",
            BookingField::LastName => "last_name",
            BookingField::Email => "email",
            BookingField::PhoneNumber => "phone_number",
            BookingField::CardNumber => "card_number",
            BookingField::ExpirationDate => "expiration_date",
            BookingField::Cvv => "cvv",
            BookingField::BillingAddress => "billing_address",
        }
    }

    /// Wire name, also used as the HTML input name.
    pub fn wire_name(self) -> &'static str {
        match self {
            BookingField::FirstName => "firstName",
            BookingField::LastName => "lastName",
            BookingField::Email => "email",
            BookingField::PhoneNumber => "phoneNumber",
            BookingField::CardNumber => "cardNumber",
            BookingField::ExpirationDate => "expirationDate",
            BookingField::Cvv => "cvv",
            BookingField::BillingAddress => "billingAddress",
        }
    }

    /// Lower-case label used in validation messages ("phone number").
    pub fn label(self) -> String {
        self.field_name().replace('_', " ")
    }

    /// Form label.
    pub fn title(self) -> &'static str {
        match self {
            BookingField::FirstName => "First Name",
            BookingField::LastName => "Last Name",
            BookingField::Email => "Email Address",
            BookingField::PhoneNumber => "Phone Number",
            BookingField::CardNumber => "Card Number",
            BookingField::ExpirationDate => "Expiration Date (MM/YY)",
            BookingField::Cvv => "CVV",
            BookingField::BillingAddress => "Billing Address",
        }
    }

    pub fn is_payment(self) -> bool {
        matches!(
            self,
            BookingField::CardNumber
                | BookingField::ExpirationDate
                | BookingField::Cvv
                | BookingField::BillingAddress
        )
    }
}

impl BookingRequest {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::FirstName => &self.first_name,
            BookingField::LastName => &self.last_name,
            BookingField::Email => &self.email,
            BookingField::PhoneNumber => &self.phone_number,
            BookingField::CardNumber => &self.card_number,
            BookingField::ExpirationDate => &self.expiration_date,
            BookingField::Cvv => &self.cvv,
            BookingField::BillingAddress => &self.billing_address,
        }
    }

    pub fn set(&mut self, field: BookingField, value: String) {
        let slot = match field {
            BookingField::FirstName => &mut self.first_name,
            BookingField::LastName => &mut self.last_name,
            BookingField::Email => &mut self.email,
            BookingField::PhoneNumber => &mut self.phone_number,
            BookingField::CardNumber => &mut self.card_number,
            BookingField::ExpirationDate => &mut self.expiration_date,
            BookingField::Cvv => &mut self.cvv,
            BookingField::BillingAddress => &mut self.billing_address,
        };
        *slot = value;
    }
}

/// A single check applied to a booking form before submission.
pub trait ValidationRule {
    fn check(&self, request: &BookingRequest) -> Result<(), BookingError>;
}

/// Every field must be non-empty. Whitespace counts as content.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredFields;

impl ValidationRule for RequiredFields {
    fn check(&self, request: &BookingRequest) -> Result<(), BookingError> {
        let Err(errors) = request.validate() else {
            return Ok(());
        };
        let failing = errors.field_errors();

        // HashMap order is arbitrary; report the first field in form order.
        let first = BookingField::ALL
            .into_iter()
            .find(|field| failing.contains_key(field.field_name()));

        match first {
            Some(field) => Err(BookingError::MissingField(field.label())),
            None => Err(BookingError::Rejected(errors.to_string())),
        }
    }
}

/// Ordered rule set; the first failing rule wins.
pub struct BookingValidator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Default for BookingValidator {
    fn default() -> Self {
        Self::new().with_rule(RequiredFields)
    }
}

impl BookingValidator {
    /// Validator with no rules at all.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn validate(&self, request: &BookingRequest) -> Result<(), BookingError> {
        self.rules.iter().try_for_each(|rule| rule.check(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> BookingRequest {
        BookingRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "+44 20 7946 0000".to_string(),
            card_number: "4111 1111 1111 1111".to_string(),
            expiration_date: "12/29".to_string(),
            cvv: "123".to_string(),
            billing_address: "12 St James's Square, London".to_string(),
        }
    }

    #[test]
    fn complete_form_passes_default_rules() {
        assert_eq!(BookingValidator::default().validate(&complete_request()), Ok(()));
    }

    #[test]
    fn empty_form_reports_first_field() {
        let err = BookingValidator::default()
            .validate(&BookingRequest::default())
            .unwrap_err();
        assert_eq!(err, BookingError::MissingField("first name".to_string()));
        assert_eq!(err.to_string(), "Please fill out the first name field.");
    }

    #[test]
    fn missing_field_is_reported_in_form_order() {
        let mut request = complete_request();
        request.billing_address.clear();
        request.phone_number.clear();

        let err = BookingValidator::default().validate(&request).unwrap_err();
        assert_eq!(err.to_string(), "Please fill out the phone number field.");
    }

    #[test]
    fn whitespace_is_not_treated_as_empty() {
        let mut request = complete_request();
        request.cvv = " ".to_string();
        assert!(BookingValidator::default().validate(&request).is_ok());
    }

    #[test]
    fn custom_rules_run_after_builtin_ones() {
        struct NoAmex;
        impl ValidationRule for NoAmex {
            fn check(&self, request: &BookingRequest) -> Result<(), BookingError> {
                if request.card_number.starts_with("34") || request.card_number.starts_with("37") {
                    return Err(BookingError::Rejected("American Express is not accepted.".into()));
                }
                Ok(())
            }
        }

        let validator = BookingValidator::default().with_rule(NoAmex);
        let mut request = complete_request();
        request.card_number = "3782 822463 10005".to_string();
        assert_eq!(
            validator.validate(&request),
            Err(BookingError::Rejected("American Express is not accepted.".into()))
        );

        request.first_name.clear();
        assert_eq!(
            validator.validate(&request),
            Err(BookingError::MissingField("first name".into()))
        );
    }

    #[test]
    fn empty_validator_accepts_anything() {
        assert!(BookingValidator::new().validate(&BookingRequest::default()).is_ok());
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(complete_request()).unwrap();
        for field in BookingField::ALL {
            assert!(json.get(field.wire_name()).is_some(), "missing {}", field.wire_name());
        }
        assert_eq!(json["cardNumber"], "4111 1111 1111 1111");
    }

    #[test]
    fn set_and_get_address_the_same_field() {
        let mut request = BookingRequest::default();
        for field in BookingField::ALL {
            request.set(field, field.wire_name().to_uppercase());
        }
        assert_eq!(request.get(BookingField::ExpirationDate), "EXPIRATIONDATE");
        assert_eq!(request.email, "EMAIL");
    }
}
