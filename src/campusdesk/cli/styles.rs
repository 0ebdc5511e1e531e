use console::Style;
use once_cell::sync::Lazy;

pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static DETAIL: Lazy<Style> = Lazy::new(|| Style::new().color256(246));
pub static TIME: Lazy<Style> = Lazy::new(|| Style::new().color256(246).italic());
pub static HEADING: Lazy<Style> = Lazy::new(|| Style::new().cyan().bold());
