mod dish;
mod menu_day;
mod week_menu;

pub use dish::Dish;
pub use menu_day::{DayKey, MenuDay};
pub use week_menu::WeekMenu;
