//! Domain logic of the A2 landing page: the phone input mask, lead
//! messages and the WhatsApp links they are sent through.

pub mod count_up;
pub mod error;
pub mod lead;
pub mod phone;
pub mod quick_pick;
pub mod tariff;
pub mod whatsapp;

pub use error::ValidationError;
pub use lead::{Lead, LeadForm};
pub use phone::{CanonicalPhone, PhoneInput};
pub use quick_pick::QuickPick;
pub use tariff::Tariff;
