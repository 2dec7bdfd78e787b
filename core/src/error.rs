use thiserror::Error;

/// A user-correctable problem with submitted form data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("phone number has {digits} national digits, expected {expected}")]
    IncompletePhoneNumber { digits: usize, expected: usize },

    #[error("unknown tariff: {0}")]
    UnknownTariff(String),
}

impl ValidationError {
    /// Message shown to the visitor in the blocking notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::IncompletePhoneNumber { .. } => {
                "Пожалуйста, введите полный номер телефона (10 цифр)"
            }
            ValidationError::UnknownTariff(_) => "Пожалуйста, выберите тариф из списка",
        }
    }
}
