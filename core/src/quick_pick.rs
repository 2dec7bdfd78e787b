//! The three-question "quick pick" form.

use crate::tariff::Tariff;
use crate::whatsapp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Experience {
    None,
    UnderYear,
    OneToThree,
    OverThree,
}

impl Experience {
    pub const ALL: [Experience; 4] = [
        Experience::None,
        Experience::UnderYear,
        Experience::OneToThree,
        Experience::OverThree,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Experience::None => "Нет опыта",
            Experience::UnderYear => "До 1 года",
            Experience::OneToThree => "1–3 года",
            Experience::OverThree => "Более 3 лет",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkMode {
    FullDay,
    PartTime,
    SharedShift,
}

impl WorkMode {
    pub const ALL: [WorkMode; 3] = [WorkMode::FullDay, WorkMode::PartTime, WorkMode::SharedShift];

    pub fn label(&self) -> &'static str {
        match self {
            WorkMode::FullDay => "Полный день",
            WorkMode::PartTime => "Подработка",
            WorkMode::SharedShift => "Делим смену",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickPick {
    /// WhatsApp handle or phone number, free text.
    pub contact: String,
    pub experience: Option<Experience>,
    pub work_mode: Option<WorkMode>,
    pub class: Option<Tariff>,
}

impl QuickPick {
    pub fn message(&self) -> String {
        let mut text = format!(
            "Хочу подобрать авто в аренду. Мой контакт: {}",
            self.contact
        );
        if let Some(experience) = self.experience {
            text.push_str("\nОпыт: ");
            text.push_str(experience.label());
        }
        if let Some(mode) = self.work_mode {
            text.push_str("\nРежим работы: ");
            text.push_str(mode.label());
        }
        if let Some(class) = self.class {
            text.push_str("\nКласс: ");
            text.push_str(class.as_str());
        }
        text
    }

    pub fn deep_link(&self, business_number: &str) -> String {
        whatsapp::chat_url_with_text(business_number, &self.message())
    }
}

/// Toggles a chip selection: picking the selected chip again clears it.
pub fn toggle<T: PartialEq>(current: Option<T>, picked: T) -> Option<T> {
    match current {
        Some(value) if value == picked => None,
        _ => Some(picked),
    }
}
