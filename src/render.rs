use std::io::{self, Write};

use chrono::{Datelike, NaiveDate};

use crate::{
    config::Style,
    parse::{month_name, weekday_name, Dish, MenuDay, WeekMenu},
};

// "  - " before the name, one space and the price after it
const DISH_OVERHEAD: usize = 9;

pub struct Printer<'a> {
    style: &'a Style,
}

impl<'a> Printer<'a> {
    pub const fn new(style: &'a Style) -> Self {
        Self { style }
    }

    fn name_width(&self) -> usize {
        self.style.width.saturating_sub(DISH_OVERHEAD).max(1)
    }

    fn separator(&self) -> String {
        format!("+{}+", "-".repeat(self.style.width))
    }

    /// Lines for every day of `menu`, the day equal to `today` highlighted,
    /// closed by a separator.
    #[must_use]
    pub fn render(&self, menu: &WeekMenu, today: NaiveDate) -> Vec<String> {
        let mut lines = Vec::new();
        for day in menu {
            self.render_day(day, day.date() == today, &mut lines);
        }
        lines.push(self.separator());
        lines
    }

    pub fn print<W: Write>(&self, menu: &WeekMenu, today: NaiveDate, out: &mut W) -> io::Result<()> {
        for line in self.render(menu, today) {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }

    fn render_day(&self, day: &MenuDay, is_today: bool, lines: &mut Vec<String>) {
        let (start, end) = self.style.highlight(is_today);
        lines.push(self.separator());
        lines.push(format!("{start} {}{end}", date_header(day.date())));
        for dish in day.dishes() {
            self.render_dish(dish, (start, end), lines);
        }
        if !day.sides().is_empty() {
            lines.push(format!("{start} {}:{end}", self.style.sides_header));
            for side in day.sides() {
                lines.push(format!("{start}  - {side}{end}"));
            }
        }
    }

    /// Long names continue on the following lines; the price sits on the last one.
    fn render_dish(&self, dish: &Dish, (start, end): (&str, &str), lines: &mut Vec<String>) {
        let width = self.name_width();
        let wrapped = textwrap::wrap(dish.name(), width);
        let last = wrapped.len().saturating_sub(1);
        for (i, part) in wrapped.iter().enumerate() {
            let bullet = if i == 0 { "  - " } else { "    " };
            if i == last {
                lines.push(format!("{bullet}{start}{part:<width$} {}{end}", dish.price()));
            } else {
                lines.push(format!("{bullet}{start}{part}{end}"));
            }
        }
    }
}

/// e.g. "Lundi 14 Avril 2025"
fn date_header(date: NaiveDate) -> String {
    format!(
        "{} {:02} {} {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name(date.month()),
        date.year()
    )
}
