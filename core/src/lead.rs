use crate::error::ValidationError;
use crate::phone::{self, CanonicalPhone};
use crate::tariff::Tariff;
use crate::whatsapp;

/// Raw values of the contact form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    /// Phone as displayed by the masked input.
    pub phone: String,
    /// Value of the tariff select.
    pub tariff: String,
}

impl LeadForm {
    /// Validates the form. The name is taken as typed; the browser
    /// enforces that it is present.
    pub fn submit(&self) -> Result<Lead, ValidationError> {
        let phone = phone::to_canonical(&self.phone)?;
        let tariff = self.tariff.parse::<Tariff>()?;
        Ok(Lead {
            name: self.name.clone(),
            phone,
            tariff,
        })
    }
}

/// A contact request ready to be handed to WhatsApp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub name: String,
    pub phone: CanonicalPhone,
    pub tariff: Tariff,
}

impl Lead {
    pub fn message(&self) -> String {
        format!(
            "Заявка с сайта A2.\nИмя: {}\nТелефон: {}\nТариф: {}",
            self.name, self.phone, self.tariff
        )
    }

    pub fn deep_link(&self, business_number: &str) -> String {
        whatsapp::chat_url_with_text(business_number, &self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(phone: &str, tariff: &str) -> LeadForm {
        LeadForm {
            name: "Асхат".into(),
            phone: phone.into(),
            tariff: tariff.into(),
        }
    }

    #[test]
    fn complete_form_builds_message() {
        let lead = form("+7 (999) - 123 - 45 - 67", "Не выбрал").submit().unwrap();
        assert_eq!(lead.tariff, Tariff::Undecided);
        assert_eq!(
            lead.message(),
            "Заявка с сайта A2.\nИмя: Асхат\nТелефон: +79991234567\nТариф: Не выбрал"
        );
    }

    #[test]
    fn deep_link_encodes_whole_message() {
        let lead = form("+7 (999) - 123 - 45 - 67", "Не выбрал").submit().unwrap();
        assert_eq!(
            lead.deep_link("+77003608822"),
            "https://wa.me/+77003608822?text=\
             %D0%97%D0%B0%D1%8F%D0%B2%D0%BA%D0%B0%20%D1%81%20%D1%81%D0%B0%D0%B9%D1%82%D0%B0%20A2.\
             %0A%D0%98%D0%BC%D1%8F%3A%20%D0%90%D1%81%D1%85%D0%B0%D1%82\
             %0A%D0%A2%D0%B5%D0%BB%D0%B5%D1%84%D0%BE%D0%BD%3A%20%2B79991234567\
             %0A%D0%A2%D0%B0%D1%80%D0%B8%D1%84%3A%20%D0%9D%D0%B5%20%D0%B2%D1%8B%D0%B1%D1%80%D0%B0%D0%BB"
        );
    }

    #[test]
    fn incomplete_phone_blocks_submission() {
        let err = form("+7 (999) - 123", "Comfort").submit().unwrap_err();
        assert_eq!(
            err,
            ValidationError::IncompletePhoneNumber {
                digits: 6,
                expected: 10
            }
        );
        assert_eq!(
            err.user_message(),
            "Пожалуйста, введите полный номер телефона (10 цифр)"
        );
    }

    #[test]
    fn phone_is_checked_before_tariff() {
        let err = form("", "Economy").submit().unwrap_err();
        assert!(matches!(err, ValidationError::IncompletePhoneNumber { .. }));

        let err = form("+7 (999) - 123 - 45 - 67", "Economy").submit().unwrap_err();
        assert_eq!(err, ValidationError::UnknownTariff("Economy".into()));
    }

    #[test]
    fn empty_name_is_passed_through() {
        let mut raw = form(&phone::format("89991234567"), "Business");
        raw.name.clear();
        let lead = raw.submit().unwrap();
        assert!(lead.message().contains("Имя: \n"));
    }
}
