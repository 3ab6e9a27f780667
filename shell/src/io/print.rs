//! Console banners.

use crossterm::style::{Color, Stylize};

const ACCENT: Color = Color::Rgb {
    r: 255,
    g: 100,
    b: 10,
};

/// `*** <message>` styled in the accent color.
pub fn banner_line(message: &str) -> String {
    format!("*** {message}").with(ACCENT).to_string()
}

/// Print a banner line to stdout.
pub fn banner(message: &str) {
    println!("{}", banner_line(message));
}
