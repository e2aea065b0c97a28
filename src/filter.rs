use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::parse::WeekMenu;

const fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

/// Inclusive range of days to display, starting today.
///
/// When `today + days` lands on a weekend the end moves two days further, so
/// asking for one extra day on a Friday shows Monday. The weekend days that
/// caused the move are then skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    start: NaiveDate,
    end: NaiveDate,
    rolled: bool,
}

impl DayWindow {
    #[must_use]
    pub fn new(today: NaiveDate, days: u32) -> Self {
        let days = u64::from(days);
        let end = add_days(today, days).max(today);
        let rolled = is_weekend(end.weekday());
        let end = if rolled {
            add_days(today, days + 2).max(today)
        } else {
            end
        };
        Self {
            start: today,
            end,
            rolled,
        }
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        if date < self.start || date > self.end {
            return false;
        }
        !(self.rolled && date > self.start && is_weekend(date.weekday()))
    }
}

/// Keeps the days of `menu` that fall inside `window`, in page order.
#[must_use]
pub fn filter(menu: &WeekMenu, window: DayWindow) -> WeekMenu {
    let kept: WeekMenu = menu
        .iter()
        .filter(|day| window.contains(day.date()))
        .cloned()
        .collect();
    log::debug!(
        "{} of {} day(s) between {} and {}",
        kept.len(),
        menu.len(),
        window.start(),
        window.end()
    );
    kept
}
