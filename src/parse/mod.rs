mod date;
mod error;
mod menu_page;
mod remove_excess_whitespace;
mod static_selector;
mod text_from_selection;
mod title_case;

pub use date::{month_name, normalize, weekday_name};
pub use error::Error;
pub use menu_page::{DayKey, Dish, MenuDay, WeekMenu};
pub use remove_excess_whitespace::remove_excess_whitespace;
pub use title_case::title_case;
