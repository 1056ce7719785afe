//! CSV export and the printable HTML report.
//!
//! Both generators are pure: they take the roster and return text. Writing
//! files is the job of the `export` and `print` commands.

use crate::error::Result;
use crate::model::Student;
use chrono::{DateTime, Local};
use minijinja::{AutoEscape, Environment};
use serde::Serialize;

pub const CSV_HEADERS: [&str; 8] = [
    "ID",
    "Name",
    "Email",
    "Grade",
    "Enrollment Date",
    "Status",
    "Phone",
    "DOB",
];

const REPORT_TEMPLATE_NAME: &str = "students_report.html";

const REPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Students Report</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 20px; }
        h1 { color: #1e293b; }
        table { width: 100%; border-collapse: collapse; margin-top: 20px; }
        th, td { border: 1px solid #ddd; padding: 12px; text-align: left; }
        th { background-color: #f0f0f0; font-weight: bold; }
        tr:nth-child(even) { background-color: #f9f9f9; }
    </style>
</head>
<body onload="window.print()">
    <h1>{{ school_name }} - Students Report</h1>
    <p>Generated: {{ generated_at }}</p>
    <table>
        <thead>
            <tr>
{%- for header in headers %}
                <th>{{ header }}</th>
{%- endfor %}
            </tr>
        </thead>
        <tbody>
{%- for s in students %}
            <tr>
                <td>{{ s.id }}</td>
                <td>{{ s.name }}</td>
                <td>{{ s.email }}</td>
                <td>{{ s.grade }}</td>
                <td>{{ s.status }}</td>
            </tr>
{%- endfor %}
        </tbody>
    </table>
</body>
</html>
"#;

const REPORT_HEADERS: [&str; 5] = ["ID", "Name", "Email", "Grade", "Status"];

#[derive(Serialize)]
struct ReportData<'a> {
    school_name: &'a str,
    generated_at: String,
    headers: &'a [&'a str],
    students: &'a [Student],
}

/// Serializes the roster as CSV, one header row, records joined by `\n`.
///
/// Name, email and phone are always quoted; everything else is written bare
/// unless it contains a delimiter, quote or line break.
pub fn to_delimited_text(students: &[Student]) -> String {
    let mut lines = Vec::with_capacity(students.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for s in students {
        let row = [
            bare(&s.id.to_string()),
            quoted(&s.name),
            quoted(&s.email),
            bare(&s.grade),
            bare(&s.enrollment_date.to_string()),
            bare(s.status.as_str()),
            quoted(&s.phone),
            bare(&s.date_of_birth),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn bare(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        quoted(field)
    } else {
        field.to_string()
    }
}

/// Renders the print view: ID, name, email, grade and status for every
/// student, with all text HTML-escaped.
pub fn to_printable_document(
    students: &[Student],
    school_name: &str,
    generated_at: DateTime<Local>,
) -> Result<String> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE)?;

    let data = ReportData {
        school_name,
        generated_at: generated_at.format("%Y-%m-%d %H:%M").to_string(),
        headers: &REPORT_HEADERS,
        students,
    };
    let html = env.get_template(REPORT_TEMPLATE_NAME)?.render(&data)?;
    Ok(html)
}
