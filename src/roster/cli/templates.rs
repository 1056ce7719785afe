//! Terminal templates, kept as standalone files and embedded at build time.
//!
//! Templates are minijinja with a `style(name)` filter (see `render.rs`).
//! Widths, truncation and padding are computed in Rust and arrive as
//! ready-made strings; templates only pick styles and lay out lines. Every
//! line break is written explicitly so loops do not leak blank lines.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.jinja");
pub const STUDENT_TEMPLATE: &str = include_str!("templates/student.jinja");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.jinja");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");
