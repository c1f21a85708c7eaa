use colored::Color;

pub const ISBN: Color = Color::BrightGreen;
pub const ERROR: Color = Color::Red;
