use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use scraper::ElementRef;

use super::dish::{Dish, MenuItem};
use crate::parse::text_from_selection::text_from_selection;
use crate::parse::{date, Error};
use crate::static_selector;

/// Identifies a day of the published week. The page only spans a few days,
/// so weekday plus day of month is unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayKey {
    pub weekday: Weekday,
    pub day: u32,
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self {
            weekday: date.weekday(),
            day: date.day(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuDay {
    date: NaiveDate,
    dishes: Vec<Dish>,
    // shared by every dish of the day
    sides: BTreeSet<String>,
}

impl MenuDay {
    pub fn new(date: NaiveDate, dishes: Vec<Dish>, sides: BTreeSet<String>) -> Self {
        Self {
            date,
            dishes,
            sides,
        }
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn key(&self) -> DayKey {
        self.date.into()
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub const fn sides(&self) -> &BTreeSet<String> {
        &self.sides
    }

    /// Parses one `.menuCategory` block. Fails when the title holds no date or
    /// when the block lists a different number of names and prices.
    pub fn from_html_element(element: ElementRef<'_>, year: i32) -> Result<Self, Error> {
        // the site spells its own class "menuCategroyTitle"
        static_selector!(TITLE_SELECTOR <- ".menuCategroyTitle, .menuCategoryTitle");
        static_selector!(NAME_SELECTOR <- ".menuItemName");
        static_selector!(PRICE_SELECTOR <- ".menuItemPrice");
        static_selector!(ITEM_SELECTOR <- ".menuItemBox");

        let title = text_from_selection(&TITLE_SELECTOR, element)
            .ok_or_else(|| Error::html_parse_error("Every menu category should have a title."))?;
        let date = date::normalize(&title, year).ok_or_else(|| Error::date_parse_error(&title))?;

        let names = element.select(&NAME_SELECTOR).count();
        let prices = element.select(&PRICE_SELECTOR).count();
        if names != prices {
            return Err(Error::CountMismatch { names, prices });
        }

        let mut dishes = Vec::with_capacity(names);
        let mut sides = BTreeSet::new();
        for item in element.select(&ITEM_SELECTOR).map(MenuItem::from_html_element) {
            sides.extend(item.side_dishes());
            if let Some(dish) = item.into_dish() {
                dishes.push(dish);
            }
        }

        Ok(Self {
            date,
            dishes,
            sides,
        })
    }
}
