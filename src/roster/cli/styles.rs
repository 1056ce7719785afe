use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style names used by the templates.
pub mod names {
    pub const HEADER: &str = "header";
    pub const RULE: &str = "rule";
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const LABEL: &str = "label";
    pub const MUTED: &str = "muted";
    pub const STATUS_ACTIVE: &str = "status_active";
    pub const STATUS_INACTIVE: &str = "status_inactive";
    pub const STATUS_GRADUATED: &str = "status_graduated";
    pub const STATUS_OTHER: &str = "status_other";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

fn gray() -> Style {
    Style::new().color256(rgb_to_ansi256((154, 154, 154)))
}

pub static ROSTER_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        (names::HEADER, Style::new().bold()),
        (names::RULE, gray()),
        (names::ID, Style::new().yellow()),
        (names::TITLE, Style::new().bold()),
        (names::LABEL, Style::new().cyan()),
        (names::MUTED, gray().italic()),
        (names::STATUS_ACTIVE, Style::new().green()),
        (names::STATUS_INACTIVE, Style::new().yellow()),
        (names::STATUS_GRADUATED, Style::new().blue()),
        (names::STATUS_OTHER, Style::new()),
        (names::INFO, gray()),
        (names::SUCCESS, Style::new().green()),
        (names::WARNING, Style::new().yellow()),
        (names::ERROR, Style::new().red()),
    ])
});

/// Nearest ANSI 256-color palette index for an RGB triplet.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
