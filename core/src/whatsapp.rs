//! Deep links into WhatsApp and the phone dialer.

const CHAT_BASE: &str = "https://wa.me/";

/// Link that opens a chat with `number` without a prefilled message.
pub fn chat_url(number: &str) -> String {
    format!("{}{}", CHAT_BASE, number)
}

/// Link that opens a chat with `number` and `text` typed into the composer.
pub fn chat_url_with_text(number: &str, text: &str) -> String {
    format!("{}{}?text={}", CHAT_BASE, number, urlencoding::encode(text))
}

pub fn tel_url(number: &str) -> String {
    format!("tel:{}", number)
}
