//! # CLI Layer
//!
//! This module is **one possible UI client** for roster. It is the only place
//! that parses arguments, touches stdout/stderr, prompts the user and turns
//! results into terminal output.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data dir, loads config, opens the roster
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{
    print_messages, render_config, render_student, render_student_list, sanitize,
};
use super::setup::{
    init_logging, print_grouped_help, print_subcommand_help, Cli, Commands, CoreCommands,
    DataCommands, MiscCommands, StudentCommands,
};
use chrono::Utc;
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use log::debug;
use roster::api::{self, ConfigAction, ReportTarget, RosterApi, StudentChanges};
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::filter::StudentFilter;
use roster::model::{NewStudent, Status, StudentId};
use roster::store::fs_backend::FsBackend;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const DELETE_PROMPT: &str =
    "Are you sure you want to delete this student? This action cannot be undone.";

struct AppContext {
    api: RosterApi<FsBackend>,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    debug!("data dir: {}", data_dir.display());

    // Config works on the settings file alone, before the roster is opened
    let command = match cli.command {
        Some(Commands::Misc(MiscCommands::Config { key, value })) => {
            return handle_config(&data_dir, key, value, use_color);
        }
        other => other,
    };

    let mut ctx = init_context(data_dir, use_color)?;

    match command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::List {
                search,
                grade,
                status,
            } => handle_list(&ctx, search, grade, status),
            CoreCommands::Add {
                name,
                email,
                grade,
                phone,
                date_of_birth,
                address,
            } => {
                let mut draft = NewStudent::new(name, email, grade)
                    .with_phone(phone)
                    .with_date_of_birth(date_of_birth);
                if let Some(address) = address {
                    draft = draft.with_address(address);
                }
                handle_add(&mut ctx, draft)
            }
        },
        Some(Commands::Student(cmd)) => match cmd {
            StudentCommands::View { id } => handle_view(&ctx, id),
            StudentCommands::Edit {
                id,
                name,
                email,
                grade,
                status,
            } => {
                let changes = StudentChanges {
                    name,
                    email,
                    grade,
                    status: status
                        .filter(|s| !s.trim().is_empty())
                        .map(Status::from),
                };
                handle_edit(&mut ctx, id, changes)
            }
            StudentCommands::Delete { id, yes } => handle_delete(&mut ctx, id, yes),
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Export { output } => handle_export(&ctx, output),
            DataCommands::Print { output, stdout } => {
                let target = match (output, stdout) {
                    (_, true) => ReportTarget::Inline,
                    (Some(path), false) => ReportTarget::File(path),
                    (None, false) => ReportTarget::Default,
                };
                handle_print(&ctx, target)
            }
        },
        Some(Commands::Misc(_)) => Ok(()),
        None => handle_list(&ctx, None, None, None),
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RosterError::Api("Could not determine a data directory; pass --data-dir".into()))
}

fn init_context(data_dir: PathBuf, use_color: bool) -> Result<AppContext> {
    let config = RosterConfig::load(&data_dir)?;
    let backend = FsBackend::new(&data_dir);
    let api = RosterApi::open(backend, config, data_dir)?;
    Ok(AppContext { api, use_color })
}

fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    grade: Option<String>,
    status: Option<String>,
) -> Result<()> {
    let mut filter = StudentFilter::new();
    if let Some(query) = search {
        filter = filter.with_query(query);
    }
    if let Some(grade) = grade {
        filter = filter.with_grade(grade);
    }
    if let Some(status) = status {
        filter = filter.with_status(status);
    }

    let result = ctx.api.list_students(&filter)?;
    print!(
        "{}",
        render_student_list(&result.listed_students, result.total_students, ctx.use_color)?
    );
    print_messages(&result.messages, ctx.use_color)
}

fn handle_add(ctx: &mut AppContext, draft: NewStudent) -> Result<()> {
    let result = ctx.api.add_student(draft)?;
    print_messages(&result.messages, ctx.use_color)?;
    if let Some(student) = result.affected_students.first() {
        println!("{} {}", student.id, student.name);
    }
    Ok(())
}

fn handle_view(ctx: &AppContext, id: StudentId) -> Result<()> {
    let result = ctx.api.view_student(id)?;
    let today = Utc::now().date_naive();
    for student in &result.listed_students {
        print!("{}", render_student(student, today, ctx.use_color)?);
    }
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: StudentId, changes: StudentChanges) -> Result<()> {
    if changes.is_empty() {
        return Err(RosterError::Api(
            "Nothing to change; pass --name, --email, --grade or --status".into(),
        ));
    }
    let result = ctx.api.edit_student(id, changes)?;
    print_messages(&result.messages, ctx.use_color)
}

fn handle_delete(ctx: &mut AppContext, id: StudentId, yes: bool) -> Result<()> {
    // Look the student up first so a bad id fails before the prompt
    let student = ctx
        .api
        .view_student(id)?
        .listed_students
        .into_iter()
        .next()
        .ok_or(RosterError::StudentNotFound(id))?;

    if !yes && !confirm(&format!(
        "{} ({}): {}",
        sanitize(&student.name),
        student.id,
        DELETE_PROMPT
    ))? {
        println!("Operation cancelled.");
        return Ok(());
    }

    let result = ctx.api.delete_student(id)?;
    print_messages(&result.messages, ctx.use_color)
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_students(output)?;
    print_messages(&result.messages, ctx.use_color)
}

fn handle_print(ctx: &AppContext, target: ReportTarget) -> Result<()> {
    let result = ctx.api.print_report(target)?;
    if let Some(document) = &result.document {
        print!("{}", document);
    }
    print_messages(&result.messages, ctx.use_color)
}

fn handle_config(
    data_dir: &Path,
    key: Option<String>,
    value: Option<String>,
    use_color: bool,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let showing_all = matches!(action, ConfigAction::ShowAll);

    let result = api::configure(data_dir, action)?;
    if showing_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, use_color)?);
        }
    }
    print_messages(&result.messages, use_color)
}

/// Asks a yes/no question on stdout and reads the answer from stdin.
fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N]: ", question);
    io::stdout().flush().map_err(RosterError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(RosterError::Io)?;
    Ok(matches!(
        input.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
