use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, Weekday};
use regex::Regex;

// Fixed French vocabulary; the host locale is never consulted.
static WEEKDAYS: [(&str, Weekday); 7] = [
    ("lundi", Weekday::Mon),
    ("mardi", Weekday::Tue),
    ("mercredi", Weekday::Wed),
    ("jeudi", Weekday::Thu),
    ("vendredi", Weekday::Fri),
    ("samedi", Weekday::Sat),
    ("dimanche", Weekday::Sun),
];

static MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

static WEEKDAY_NAMES: [&str; 7] = [
    "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
];

static MONTH_NAMES: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

fn weekday_from_name(name: &str) -> Option<Weekday> {
    let name = name.to_lowercase();
    WEEKDAYS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, weekday)| *weekday)
}

/// 1-based month number.
fn month_from_name(name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    MONTHS
        .iter()
        .position(|candidate| *candidate == name)
        .and_then(|i| u32::try_from(i + 1).ok())
}

/// Capitalised French name of the weekday, e.g. `"Lundi"`.
#[must_use]
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Capitalised French name of a 1-based month, e.g. `"Avril"` for 4.
#[must_use]
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month.clamp(1, 12) - 1) as usize]
}

/// Reads a date out of a block title like `"Lundi 14 Avril"`.
///
/// The title has to carry a French weekday name, followed by a day number of
/// one or two digits (a comma may sit before it), followed by a French month
/// name, in any case. Names are
/// matched with their accents (`"fevrier"` is not `"février"`). Other words or
/// numbers around that triple are ignored. The page never states the year, so
/// `year` is used as is. Returns `None` when no triple resolves to a real date.
#[must_use]
pub fn normalize(text: &str, year: i32) -> Option<NaiveDate> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"\b(\w+)[\s,]+([0-9]{1,2})\s+(\w+)\b").expect("regex should be valid")
    });

    let mut start = 0;
    while let Some(caps) = re.captures_at(text, start) {
        let (weekday, day, month) = (&caps[1], &caps[2], &caps[3]);
        // the month word may be the weekday of a later triple
        start = caps.get(3).map_or(text.len(), |m| m.start());

        let Some(weekday) = weekday_from_name(weekday) else {
            continue;
        };
        let Some(month) = month_from_name(month) else {
            continue;
        };
        let Some(date) = day
            .parse::<u32>()
            .ok()
            .and_then(|day| NaiveDate::from_ymd_opt(year, month, day))
        else {
            continue;
        };
        if date.weekday() != weekday {
            log::debug!(
                "{text:?} names a {} but {date} is a {}",
                weekday_name(weekday),
                weekday_name(date.weekday())
            );
        }
        return Some(date);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize("Lundi 14 Avril", 2024),
            NaiveDate::from_ymd_opt(2024, 4, 14)
        );
        assert_eq!(normalize("Bla 99 Foo", 2024), None);
    }

    #[test]
    fn test_normalize_is_case_insensitive() {
        assert_eq!(
            normalize("MERCREDI 3 janvier", 2024),
            NaiveDate::from_ymd_opt(2024, 1, 3)
        );
        assert_eq!(
            normalize("vendredi 07 JUIN", 2024),
            NaiveDate::from_ymd_opt(2024, 6, 7)
        );
    }

    #[test]
    fn test_normalize_accented_months() {
        assert_eq!(
            normalize("Jeudi 1 Février", 2024),
            NaiveDate::from_ymd_opt(2024, 2, 1)
        );
        assert_eq!(
            normalize("Lundi 12 AOÛT", 2024),
            NaiveDate::from_ymd_opt(2024, 8, 12)
        );
        assert_eq!(
            normalize("Mardi 17 décembre", 2024),
            NaiveDate::from_ymd_opt(2024, 12, 17)
        );
        // accents are part of the name
        assert_eq!(normalize("Jeudi 1 Fevrier", 2024), None);
    }

    #[test]
    fn test_normalize_tolerates_noise() {
        assert_eq!(
            normalize("  Menu du Lundi 14 Avril - semaine 16 ", 2025),
            NaiveDate::from_ymd_opt(2025, 4, 14)
        );
        assert_eq!(
            normalize("Lundi\n14\u{a0}avril", 2025),
            NaiveDate::from_ymd_opt(2025, 4, 14)
        );
    }

    #[test]
    fn test_normalize_ignores_other_numbers() {
        assert_eq!(
            normalize("Semaine 16 - Lundi 14 Avril", 2025),
            NaiveDate::from_ymd_opt(2025, 4, 14)
        );
        assert_eq!(
            normalize("Menu 3 Lundi 14 Avril", 2025),
            NaiveDate::from_ymd_opt(2025, 4, 14)
        );
        assert_eq!(
            normalize("Service 2 Mardi 15 Avril 2025", 2025),
            NaiveDate::from_ymd_opt(2025, 4, 15)
        );
    }

    #[test]
    fn test_normalize_needs_weekday_day_month_in_order() {
        assert_eq!(normalize("14 Lundi Avril", 2025), None);
        assert_eq!(normalize("Avril 14 Lundi", 2025), None);
        assert_eq!(
            normalize("Lundi, 14 Avril", 2025),
            NaiveDate::from_ymd_opt(2025, 4, 14)
        );
    }

    #[test]
    fn test_normalize_missing_parts() {
        assert_eq!(normalize("14 Avril", 2024), None);
        assert_eq!(normalize("Lundi Avril", 2024), None);
        assert_eq!(normalize("Lundi 14", 2024), None);
        assert_eq!(normalize("Lundi 145 Avril", 2024), None);
        assert_eq!(normalize("", 2024), None);
    }

    #[test]
    fn test_normalize_impossible_date() {
        assert_eq!(normalize("Vendredi 30 Février", 2024), None);
        assert_eq!(normalize("Lundi 0 Mars", 2024), None);
        assert_eq!(
            normalize("Jeudi 29 Février", 2024),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(normalize("Jeudi 29 Février", 2025), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(weekday_name(Weekday::Mon), "Lundi");
        assert_eq!(weekday_name(Weekday::Sun), "Dimanche");
        assert_eq!(month_name(2), "Février");
        assert_eq!(month_name(12), "Décembre");
    }
}
