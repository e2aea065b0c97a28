use scraper::ElementRef;

use crate::parse::text_from_selection::text_from_selection;
use crate::parse::title_case;
use crate::static_selector;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dish {
    name: String,
    price: String,
}

impl Dish {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }
}

/// The three text fields of one `.menuItemBox`, empty when absent.
#[derive(Debug, Default)]
pub(super) struct MenuItem {
    name: String,
    price: String,
    description: String,
}

impl MenuItem {
    pub(super) fn from_html_element(element: ElementRef<'_>) -> Self {
        static_selector!(NAME_SELECTOR <- ".menuItemName");
        static_selector!(PRICE_SELECTOR <- ".menuItemPrice");
        static_selector!(DESCRIPTION_SELECTOR <- ".menuItemDesc");
        Self {
            name: text_from_selection(&NAME_SELECTOR, element).unwrap_or_default(),
            price: text_from_selection(&PRICE_SELECTOR, element).unwrap_or_default(),
            description: text_from_selection(&DESCRIPTION_SELECTOR, element).unwrap_or_default(),
        }
    }

    /// The description lists the day's side dishes separated by dashes.
    pub(super) fn side_dishes(&self) -> impl Iterator<Item = String> + '_ {
        self.description
            .split('-')
            .map(str::trim)
            .filter(|side| !side.is_empty())
            .map(|side| title_case(&side.to_lowercase()))
    }

    /// Only items with a name, a price and a description are real dishes.
    pub(super) fn into_dish(self) -> Option<Dish> {
        if self.name.is_empty() || self.price.is_empty() || self.description.is_empty() {
            return None;
        }
        Some(Dish::new(title_case(&self.name), self.price))
    }
}
