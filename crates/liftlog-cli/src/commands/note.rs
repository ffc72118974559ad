//! Note commands for CLI.

use clap::Subcommand;
use liftlog_core::{Database, ValidationError};

#[derive(Subcommand)]
pub enum NoteAction {
    /// Create a note, or overwrite one with --id
    Save {
        /// Note title
        title: String,
        /// Note body
        #[arg(long, short, default_value = "")]
        content: String,
        /// Existing note to overwrite
        #[arg(long)]
        id: Option<i64>,
    },
    /// List notes, newest first
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a note
    Show {
        /// Note id
        id: i64,
    },
    /// Delete a note
    Delete {
        /// Note id
        id: i64,
    },
}

pub fn run(action: NoteAction, db: &Database) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        NoteAction::Save { title, content, id } => {
            if title.trim().is_empty() {
                return Err(ValidationError::EmptyField("title".into()).into());
            }
            let id = db.save_note(&title, &content, id)?;
            println!("Saved note #{id}");
        }
        NoteAction::List { json } => {
            let notes = db.list_notes()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&notes)?);
            } else {
                for note in notes {
                    println!("#{} {}", note.id, note.title);
                }
            }
        }
        NoteAction::Show { id } => match db.get_note(id)? {
            Some(note) => {
                println!("{}", note.title);
                println!();
                println!("{}", note.content);
            }
            None => return Err(format!("no note #{id}").into()),
        },
        NoteAction::Delete { id } => {
            if db.delete_note(id)? {
                println!("Deleted note #{id}");
            } else {
                return Err(format!("no note #{id}").into());
            }
        }
    }
    Ok(())
}
