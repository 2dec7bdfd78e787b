use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tariff {
    #[default]
    Comfort,
    ComfortPlus,
    Business,
    /// The visitor has not picked a class yet.
    Undecided,
}

/// A car shown on a tariff card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Car {
    pub name: &'static str,
    pub image: &'static str,
}

impl Tariff {
    /// Every value the lead form's select offers, in display order.
    pub const ALL: [Tariff; 4] = [
        Tariff::Comfort,
        Tariff::ComfortPlus,
        Tariff::Business,
        Tariff::Undecided,
    ];

    /// Tariffs that have a card with cars and a price.
    pub const OFFERED: [Tariff; 3] = [Tariff::Comfort, Tariff::ComfortPlus, Tariff::Business];

    /// Value submitted by the form and written into the lead message.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tariff::Comfort => "Comfort",
            Tariff::ComfortPlus => "Comfort+",
            Tariff::Business => "Business",
            Tariff::Undecided => "Не выбрал",
        }
    }

    /// Label of the select option.
    pub fn option_label(&self) -> &'static str {
        match self {
            Tariff::Undecided => "Пока не решил",
            other => other.as_str(),
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Tariff::Comfort => "Для стабильного заработка",
            Tariff::ComfortPlus => "Больше заказов и дохода",
            Tariff::Business => "Максимальный доход",
            Tariff::Undecided => "",
        }
    }

    pub fn cars(&self) -> &'static [Car] {
        match self {
            Tariff::Comfort => &[Car {
                name: "Hyundai Accent 2022",
                image: "/cars/hyundai-accent.jpg",
            }],
            Tariff::ComfortPlus => &[
                Car {
                    name: "Hyundai Elantra 2021–2024",
                    image: "/cars/elantra.jpg",
                },
                Car {
                    name: "BYD Qin Plus 2023 (Electric)",
                    image: "/cars/byd-qin-plus.webp",
                },
                Car {
                    name: "Hyundai Tucson 2022",
                    image: "/cars/tucson.webp",
                },
                Car {
                    name: "BYD Destroyer",
                    image: "/cars/byd-destroyer.png",
                },
                Car {
                    name: "Honchi",
                    image: "/cars/honchi.webp",
                },
            ],
            Tariff::Business => &[
                Car {
                    name: "Hyundai Sonata 2021–2023",
                    image: "/cars/sonata.jpg",
                },
                Car {
                    name: "Honchi",
                    image: "/cars/honchi-business.jpg",
                },
            ],
            Tariff::Undecided => &[],
        }
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            Tariff::Comfort => &[
                "Современные седаны на автомате",
                "Расход топлива — оптимальный для работы в городе",
                "Полное КАСКО и ОСАГО",
                "ТО и ремонт включены",
            ],
            Tariff::ComfortPlus => &[
                "Новые авто с улучшенной комплектацией",
                "Повышенный спрос и средний чек",
                "Приоритетные заказы в Яндекс.Такси",
                "Поддержка 24/7",
            ],
            Tariff::Business => &[
                "Бизнес-седаны и кроссоверы",
                "Высокий средний чек и чаевые",
                "Приоритетные корпоративные заказы",
                "Персональный куратор",
            ],
            Tariff::Undecided => &[],
        }
    }

    /// Minimum daily rent in tenge.
    pub fn price_per_day(&self) -> Option<u32> {
        match self {
            Tariff::Comfort => Some(13_000),
            Tariff::ComfortPlus => Some(15_000),
            Tariff::Business => Some(18_000),
            Tariff::Undecided => None,
        }
    }

    /// Prefilled chat text for the "choose this tariff" button.
    pub fn inquiry_message(&self) -> String {
        format!("Хочу арендовать авто в тарифе {}", self.as_str())
    }
}

impl fmt::Display for Tariff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tariff {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tariff::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownTariff(s.to_string()))
    }
}

/// Formats an amount grouped by thousands, e.g. `13 000 ₸`.
pub fn format_tenge(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    format!("{} ₸", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_values_parse_back() {
        for tariff in Tariff::ALL {
            assert_eq!(tariff.as_str().parse::<Tariff>(), Ok(tariff));
        }
        assert_eq!(
            "Economy".parse::<Tariff>(),
            Err(ValidationError::UnknownTariff("Economy".into()))
        );
    }

    #[test]
    fn undecided_has_its_own_label() {
        assert_eq!(Tariff::Undecided.as_str(), "Не выбрал");
        assert_eq!(Tariff::Undecided.option_label(), "Пока не решил");
        assert_eq!(Tariff::ComfortPlus.option_label(), "Comfort+");
        assert_eq!(Tariff::default(), Tariff::Comfort);
    }

    #[test]
    fn offered_tariffs_have_cards() {
        for tariff in Tariff::OFFERED {
            assert!(!tariff.cars().is_empty());
            assert_eq!(tariff.features().len(), 4);
            assert!(tariff.price_per_day().is_some());
        }
        assert!(Tariff::Undecided.price_per_day().is_none());
    }

    #[test]
    fn prices_are_grouped_by_thousands() {
        assert_eq!(format_tenge(13_000), "13 000 ₸");
        assert_eq!(format_tenge(300_000), "300 000 ₸");
        assert_eq!(format_tenge(1_250_000), "1 250 000 ₸");
        assert_eq!(format_tenge(950), "950 ₸");
    }

    #[test]
    fn inquiry_mentions_tariff() {
        assert_eq!(
            Tariff::ComfortPlus.inquiry_message(),
            "Хочу арендовать авто в тарифе Comfort+"
        );
    }
}
