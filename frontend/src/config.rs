//! Build-time settings. Override with environment variables when running
//! `trunk build`, e.g. `A2_WHATSAPP_NUMBER=+77001234567 trunk build --release`.

const DEFAULT_WHATSAPP_NUMBER: &str = "+77003608822";
const DEFAULT_PHONE_DISPLAY: &str = "+7 700 360 88 22";

/// Business number used for WhatsApp chats and calls.
pub fn business_number() -> &'static str {
    option_env!("A2_WHATSAPP_NUMBER").unwrap_or(DEFAULT_WHATSAPP_NUMBER)
}

/// Business number as printed in the contacts block.
pub fn business_number_display() -> &'static str {
    option_env!("A2_PHONE_DISPLAY").unwrap_or(DEFAULT_PHONE_DISPLAY)
}
