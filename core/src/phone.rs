use crate::error::ValidationError;
use std::fmt;

/// Literal country-code marker every non-empty display value starts with.
pub const PREFIX: &str = "+7";

/// Length of a national subscriber number.
pub const NATIONAL_DIGITS: usize = 10;

/// Placeholder shown in an empty phone field.
pub const PLACEHOLDER: &str = "+7 (777) - 777 - 77 - 77";

fn digits_of(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats arbitrary input as `+7 (ddd) - ddd - dd - dd`, revealing
/// segments as digits become available.
///
/// A leading `7` or `8` is taken as the country code and dropped, and
/// anything past ten national digits is ignored.
pub fn format(raw: &str) -> String {
    let mut digits = digits_of(raw);
    if digits.starts_with('7') || digits.starts_with('8') {
        digits.remove(0);
    }
    digits.truncate(NATIONAL_DIGITS);

    let d = digits.as_str();
    match d.len() {
        0 => PREFIX.to_string(),
        1..=3 => format!("{} ({}", PREFIX, d),
        4..=6 => format!("{} ({}) - {}", PREFIX, &d[..3], &d[3..]),
        7..=8 => format!("{} ({}) - {} - {}", PREFIX, &d[..3], &d[3..6], &d[6..]),
        _ => format!(
            "{} ({}) - {} - {} - {}",
            PREFIX,
            &d[..3],
            &d[3..6],
            &d[6..8],
            &d[8..]
        ),
    }
}

/// Value the field should hold after gaining focus.
pub fn on_focus(current: &str) -> String {
    if current.chars().count() < PREFIX.len() {
        PREFIX.to_string()
    } else {
        current.to_string()
    }
}

/// Whether a backspace/delete keystroke may go through.
///
/// The prefix can only disappear through a full reset, never one
/// character at a time.
pub fn allow_delete(current: &str) -> bool {
    current.chars().count() > PREFIX.len()
}

/// Validates a display value and returns its canonical `+7XXXXXXXXXX` form.
pub fn to_canonical(display: &str) -> Result<CanonicalPhone, ValidationError> {
    let mut digits = digits_of(display);
    if digits.starts_with('7') {
        digits.remove(0);
    }
    if digits.len() != NATIONAL_DIGITS {
        return Err(ValidationError::IncompletePhoneNumber {
            digits: digits.len(),
            expected: NATIONAL_DIGITS,
        });
    }
    Ok(CanonicalPhone(format!("{}{}", PREFIX, digits)))
}

/// A validated phone number: `+7` followed by exactly ten digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalPhone(String);

impl CanonicalPhone {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ten national digits without the country code.
    pub fn national(&self) -> &str {
        &self.0[PREFIX.len()..]
    }
}

impl fmt::Display for CanonicalPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// State of a masked phone input, owned by the form that renders it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneInput {
    display: String,
}

impl PhoneInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    /// Applies the raw value the browser reports after an edit.
    pub fn edit(&mut self, raw: &str) -> &str {
        self.display = if raw.chars().count() < PREFIX.len() {
            PREFIX.to_string()
        } else {
            format(raw)
        };
        &self.display
    }

    pub fn focus(&mut self) -> &str {
        self.display = on_focus(&self.display);
        &self.display
    }

    pub fn can_delete(&self) -> bool {
        allow_delete(&self.display)
    }

    pub fn canonical(&self) -> Result<CanonicalPhone, ValidationError> {
        to_canonical(&self.display)
    }

    pub fn reset(&mut self) {
        self.display.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_formats_to_prefix() {
        assert_eq!(format(""), "+7");
        assert_eq!(format("abc -()"), "+7");
    }

    #[test]
    fn leading_eight_is_treated_as_country_code() {
        assert_eq!(format("89991234567"), "+7 (999) - 123 - 45 - 67");
    }

    #[test]
    fn reformatting_own_output_is_stable() {
        let once = format("+7 999 123 45 67");
        assert_eq!(once, "+7 (999) - 123 - 45 - 67");
        assert_eq!(format(&once), once);

        for partial in ["9", "999", "9991", "999123", "9991234", "99912345", "999123456"] {
            let shown = format(partial);
            assert_eq!(format(&shown), shown, "unstable for {partial}");
        }
    }

    #[test]
    fn segments_are_revealed_progressively() {
        assert_eq!(format("9"), "+7 (9");
        assert_eq!(format("999"), "+7 (999");
        assert_eq!(format("9991"), "+7 (999) - 1");
        assert_eq!(format("999123"), "+7 (999) - 123");
        assert_eq!(format("9991234"), "+7 (999) - 123 - 4");
        assert_eq!(format("99912345"), "+7 (999) - 123 - 45");
        assert_eq!(format("999123456"), "+7 (999) - 123 - 45 - 6");
    }

    #[test]
    fn excess_digits_are_ignored() {
        assert_eq!(format("79991234567000"), format("79991234567999"));
        assert_eq!(format("99912345670"), "+7 (999) - 123 - 45 - 67");
        assert_eq!(format("7999123456"), "+7 (999) - 123 - 45 - 6");
    }

    #[test]
    fn letters_and_punctuation_are_stripped() {
        assert_eq!(format("tel: 8 (700) 360-88-22"), "+7 (700) - 360 - 88 - 22");
    }

    #[test]
    fn canonical_requires_ten_digits() {
        let phone = to_canonical(&format("89991234567")).unwrap();
        assert_eq!(phone.as_str(), "+79991234567");
        assert_eq!(phone.national(), "9991234567");

        assert_eq!(
            to_canonical(&format("999123")),
            Err(ValidationError::IncompletePhoneNumber {
                digits: 6,
                expected: NATIONAL_DIGITS
            })
        );
        assert_eq!(
            to_canonical("+7"),
            Err(ValidationError::IncompletePhoneNumber {
                digits: 0,
                expected: NATIONAL_DIGITS
            })
        );
    }

    #[test]
    fn incomplete_error_reports_expected_length() {
        let err = to_canonical("+7 (999) - 12").unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("phone number has 5 national digits, expected {}", NATIONAL_DIGITS)
        );
    }

    #[test]
    fn canonical_of_formatted_succeeds_only_for_full_numbers() {
        for (input, ok) in [
            ("9991234567", true),
            ("89991234567", true),
            ("79991234567", true),
            ("999123456", false),
            ("8999123456", false),
            ("", false),
        ] {
            assert_eq!(to_canonical(&format(input)).is_ok(), ok, "input {input}");
        }
    }

    #[test]
    fn prefix_cannot_be_deleted() {
        assert!(!allow_delete(""));
        assert!(!allow_delete("+"));
        assert!(!allow_delete("+7"));
        assert!(allow_delete("+7 (9"));
    }

    #[test]
    fn focus_fills_prefix_only_when_short() {
        assert_eq!(on_focus(""), "+7");
        assert_eq!(on_focus("+"), "+7");
        assert_eq!(on_focus("+7 (999"), "+7 (999");
    }

    #[test]
    fn input_lifecycle() {
        let mut input = PhoneInput::new();
        assert!(input.is_empty());
        assert_eq!(input.focus(), "+7");
        assert!(!input.can_delete());

        assert_eq!(input.edit("+79"), "+7 (9");
        assert_eq!(input.edit("+7 (999) - 123 - 45 - 678"), "+7 (999) - 123 - 45 - 67");
        assert!(input.can_delete());
        assert_eq!(input.canonical().unwrap().as_str(), "+79991234567");

        // Selecting everything and deleting leaves an empty raw value.
        assert_eq!(input.edit(""), "+7");
        assert_eq!(input.edit("+"), "+7");

        input.reset();
        assert!(input.is_empty());
    }
}
