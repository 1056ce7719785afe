//! # Rendering Module
//!
//! Terminal output for the roster: the student table, the single-student
//! view, config listings and command messages.
//!
//! Layout (column widths, truncation, padding) is computed here with
//! `unicode-width`; the minijinja templates in `templates/` only arrange
//! lines and pick styles through the `style` filter. Every piece of student
//! text is stripped of control characters before it reaches a template, so a
//! stored value can never inject terminal escape sequences.

use super::styles::{names, ROSTER_THEME};
use super::templates::{CONFIG_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, STUDENT_TEMPLATE};
use chrono::NaiveDate;
use minijinja::{Environment, Value};
use roster::api::{CmdMessage, MessageLevel};
use roster::config::RosterConfig;
use roster::error::Result;
use roster::model::{Status, Student};
use serde::Serialize;
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const COLUMN_GAP: &str = "  ";
pub const NAME_WIDTH: usize = 24;
pub const EMAIL_WIDTH: usize = 30;
pub const LABEL_WIDTH: usize = 15;
const TABLE_HEADERS: [&str; 6] = ["ID", "Name", "Email", "Grade", "Date", "Status"];
const NOT_AVAILABLE: &str = "N/A";

#[derive(Serialize)]
struct RowData {
    id: String,
    name: String,
    email: String,
    grade: String,
    date: String,
    status: String,
    status_style: &'static str,
}

#[derive(Serialize)]
struct ListData {
    empty: bool,
    empty_message: &'static str,
    header: String,
    rule: String,
    gap: &'static str,
    rows: Vec<RowData>,
    summary: String,
}

#[derive(Serialize)]
struct FieldData {
    label: &'static str,
    padding: String,
    value: String,
}

#[derive(Serialize)]
struct StudentData {
    title: String,
    rule: String,
    fields: Vec<FieldData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Renders `template` with the roster theme. With `use_color` off the
/// `style` filter passes text through untouched.
fn render_template<T: Serialize>(template: &str, data: &T, use_color: bool) -> Result<String> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        match ROSTER_THEME.get(name.as_str()) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            _ => text,
        }
    });
    Ok(env.render_str(template, data)?)
}

/// The student table, followed by a "Showing X of Y students" line.
pub fn render_student_list(students: &[Student], total: usize, use_color: bool) -> Result<String> {
    let cells: Vec<[String; 6]> = students.iter().map(table_cells).collect();

    let mut widths = TABLE_HEADERS.map(|h| h.width());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header = join_row(&TABLE_HEADERS.map(String::from), &widths);
    let rule_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);

    let rows = students
        .iter()
        .zip(&cells)
        .map(|(student, row)| RowData {
            id: pad_to_width(&row[0], widths[0]),
            name: pad_to_width(&row[1], widths[1]),
            email: pad_to_width(&row[2], widths[2]),
            grade: pad_to_width(&row[3], widths[3]),
            date: pad_to_width(&row[4], widths[4]),
            status: row[5].clone(),
            status_style: status_style(&student.status),
        })
        .collect();

    let data = ListData {
        empty: students.is_empty(),
        empty_message: "No students found",
        header,
        rule: "-".repeat(rule_width),
        gap: COLUMN_GAP,
        rows,
        summary: format!("Showing {} of {} students", students.len(), total),
    };
    render_template(LIST_TEMPLATE, &data, use_color)
}

/// Every stored field of one student, blanks shown as `N/A`.
pub fn render_student(student: &Student, today: NaiveDate, use_color: bool) -> Result<String> {
    let enrolled = format!(
        "{} ({})",
        format_date(student.enrollment_date),
        format_enrollment_age(student.enrollment_date, today)
    );
    let fields = [
        ("ID", student.id.to_string()),
        ("Name", student.name.clone()),
        ("Email", student.email.clone()),
        ("Grade", student.grade.clone()),
        ("Status", student.status.to_string()),
        ("Phone", student.phone.clone()),
        ("Date of Birth", student.date_of_birth.clone()),
        ("Address", student.address.clone().unwrap_or_default()),
        ("Enrolled", enrolled),
    ]
    .into_iter()
    .map(|(label, value)| FieldData {
        label,
        padding: " ".repeat(LABEL_WIDTH.saturating_sub(label.width())),
        value: or_not_available(&sanitize(&value)),
    })
    .collect();

    let title = sanitize(&student.name);
    let data = StudentData {
        rule: "-".repeat(title.width().max(LABEL_WIDTH)),
        title,
        fields,
    };
    render_template(STUDENT_TEMPLATE, &data, use_color)
}

pub fn render_config(config: &RosterConfig, use_color: bool) -> Result<String> {
    let entries = config
        .entries()
        .into_iter()
        .map(|(key, value)| ConfigEntry { key, value })
        .collect();
    render_template(CONFIG_TEMPLATE, &ConfigData { entries }, use_color)
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> Result<String> {
    if messages.is_empty() {
        return Ok(String::new());
    }

    let messages = messages
        .iter()
        .map(|msg| MessageData {
            content: msg.content.clone(),
            style: match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            },
        })
        .collect();
    render_template(MESSAGES_TEMPLATE, &MessagesData { messages }, use_color)
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage], use_color: bool) -> Result<()> {
    let output = render_messages(messages, use_color)?;
    if !output.is_empty() {
        print!("{}", output);
    }
    Ok(())
}

fn table_cells(student: &Student) -> [String; 6] {
    [
        student.id.to_string(),
        truncate_to_width(&sanitize(&student.name), NAME_WIDTH),
        truncate_to_width(&sanitize(&student.email), EMAIL_WIDTH),
        sanitize(&student.grade),
        format_date(student.enrollment_date),
        sanitize(student.status.as_str()),
    ]
}

fn join_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    let last = cells.len() - 1;
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            if i == last {
                cell.clone()
            } else {
                pad_to_width(cell, *width)
            }
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

fn status_style(status: &Status) -> &'static str {
    match status {
        Status::Active => names::STATUS_ACTIVE,
        Status::Inactive => names::STATUS_INACTIVE,
        Status::Graduated => names::STATUS_GRADUATED,
        Status::Other(_) => names::STATUS_OTHER,
    }
}

/// Replaces control characters (escape sequences, newlines, tabs) with spaces.
pub(super) fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn or_not_available(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// `Sep 1, 2023`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn format_enrollment_age(enrolled: NaiveDate, today: NaiveDate) -> String {
    let days = (today - enrolled).num_days();
    if days <= 0 {
        return "today".to_string();
    }
    let formatter = timeago::Formatter::new();
    formatter.convert(Duration::from_secs(days as u64 * 86_400))
}
