use scraper::{ElementRef, Html};
use tracing::{instrument, Level};

use super::menu_day::{DayKey, MenuDay};
use crate::static_selector;

/// The days found on the menu page, in page order, at most one per [`DayKey`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekMenu {
    days: Vec<MenuDay>,
}

impl WeekMenu {
    #[instrument(skip(html), level = Level::TRACE)]
    pub fn from_html(html: &str, year: i32) -> Self {
        let document = Html::parse_document(html);
        Self::from_html_element(document.root_element(), year)
    }

    /// Collects every `.menuCategory` block below `element`. Blocks that fail
    /// to parse are logged and left out.
    pub fn from_html_element(element: ElementRef<'_>, year: i32) -> Self {
        static_selector!(CATEGORY_SELECTOR <- ".menuCategory");
        let mut menu = Self::default();
        let mut blocks = 0;
        for (index, block) in element.select(&CATEGORY_SELECTOR).enumerate() {
            blocks += 1;
            match MenuDay::from_html_element(block, year) {
                Ok(day) => {
                    if let Some(old) = menu.insert(day) {
                        log::debug!("Menu category #{index} replaces the one for {}", old.date());
                    }
                }
                Err(e) => log::warn!("Skipping menu category #{index}: {e}"),
            }
        }
        if blocks == 0 {
            log::warn!("No menu category found on the page");
        }
        log::debug!("Kept {} of {blocks} menu categories", menu.len());
        menu
    }

    /// Adds `day`, replacing and returning any day with the same key.
    pub fn insert(&mut self, day: MenuDay) -> Option<MenuDay> {
        let key = day.key();
        match self.days.iter_mut().find(|d| d.key() == key) {
            Some(slot) => Some(std::mem::replace(slot, day)),
            None => {
                self.days.push(day);
                None
            }
        }
    }

    pub fn get(&self, key: DayKey) -> Option<&MenuDay> {
        self.days.iter().find(|d| d.key() == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuDay> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<MenuDay> for WeekMenu {
    fn from_iter<I: IntoIterator<Item = MenuDay>>(iter: I) -> Self {
        let mut menu = Self::default();
        for day in iter {
            menu.insert(day);
        }
        menu
    }
}

impl<'a> IntoIterator for &'a WeekMenu {
    type Item = &'a MenuDay;
    type IntoIter = std::slice::Iter<'a, MenuDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
