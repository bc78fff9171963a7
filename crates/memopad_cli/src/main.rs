//! Command-line front end for the memopad note store.
//!
//! # Responsibility
//! - Exercise the core create/list/delete use-cases end to end.
//! - Resolve "today" from the local clock once, keeping the core pure.

use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};
use memopad_core::db::open_db;
use memopad_core::{
    default_log_level, init_logging, Note, NoteKind, NoteQuery, NoteService, SqliteNoteRepository,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "memopad", version, about = "Local note store with keyword and date filtering")]
struct Cli {
    /// Path to the SQLite database file.
    #[arg(long, default_value = "memopad.db")]
    db: PathBuf,

    /// Enable file logging into this directory (absolute path).
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add one note.
    Add {
        /// Note body, or a base64 payload with `--image`.
        content: String,
        /// Store the content as an image payload.
        #[arg(long)]
        image: bool,
        /// Free-text caption, at most 500 characters.
        #[arg(long)]
        description: Option<String>,
    },
    /// List notes, optionally filtered by keyword and/or creation day.
    List {
        /// Case-insensitive substring matched against content or description.
        #[arg(long)]
        keyword: Option<String>,
        /// Date expression: `2023-05-20`, `2023-6`, `6月`, `6.1`, `6/1`.
        #[arg(long)]
        date: Option<String>,
        /// Maximum rows to return.
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Delete one note by id.
    Delete { id: i64 },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let log_dir = log_dir
            .to_str()
            .ok_or("log directory path is not valid UTF-8")?;
        init_logging(default_log_level(), log_dir)?;
    }

    let conn = open_db(&cli.db)?;
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    let today = Local::now().date_naive();

    match cli.command {
        Command::Add {
            content,
            image,
            description,
        } => {
            let kind = if image { NoteKind::Image } else { NoteKind::Text };
            let note = service.create_note(kind, content, description)?;
            println!("created note {}", note.id);
        }
        Command::List {
            keyword,
            date,
            limit,
        } => {
            let result = service.list_notes(&NoteQuery {
                keyword,
                date_input: date,
                today,
                limit,
                offset: 0,
            })?;

            if let Some(day) = result.resolved_day {
                println!("notes created on {day}:");
            }
            if result.items.is_empty() {
                println!("no notes found");
            }
            for note in &result.items {
                print_note(note);
            }
        }
        Command::Delete { id } => {
            service.delete_note(id)?;
            println!("deleted note {id}");
        }
    }

    Ok(())
}

fn print_note(note: &Note) {
    let kind = match note.kind {
        NoteKind::Text => "text",
        NoteKind::Image => "image",
    };
    let body = match note.kind {
        NoteKind::Text => note.content.as_str(),
        // Image payloads are base64 blobs; show the caption instead.
        NoteKind::Image => note.description.as_deref().unwrap_or("(image)"),
    };
    println!(
        "{:>4}  {}  {:5}  {}",
        note.id,
        format_timestamp(note.created_at),
        kind,
        body
    );
}

fn format_timestamp(epoch_millis: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_millis) {
        Some(instant) => instant
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        None => format!("epoch_ms={epoch_millis}"),
    }
}
