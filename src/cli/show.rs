//! `folio show`: resolve one note the way the detail page does.

use anyhow::{Context, Result, bail};
use serde::Serialize;

use super::common::{load_library, to_json};
use crate::config::SiteConfig;
use crate::content::{ContentResolver, FsFetcher, NoteBody, NoteView, ViewState};
use crate::log;
use crate::note::NoteRecord;

#[derive(Serialize)]
struct ShowOutput<'a> {
    #[serde(flatten)]
    note: &'a NoteRecord,
    body: &'a NoteBody,
}

pub fn show_note(config: &SiteConfig, id: &str, json: bool) -> Result<()> {
    let library = load_library(config)?;
    let resolver = ContentResolver::new(FsFetcher::new(&config.build.public));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let mut view = NoteView::new();
    let state = runtime.block_on(view.show(&library, &resolver, id));

    match state {
        ViewState::Ready { note, body } => {
            if json {
                println!("{}", to_json(&ShowOutput { note, body }, true)?);
            } else {
                print_body(note, body);
            }
            Ok(())
        }
        ViewState::NotFound { id } => {
            log!("show"; "entry `{}` not found, `folio query` lists all notes", id);
            bail!("note not found: {id}")
        }
        ViewState::Idle | ViewState::Loading { .. } => bail!("note `{id}` did not resolve"),
    }
}

fn print_body(note: &NoteRecord, body: &NoteBody) {
    match body {
        NoteBody::Markdown { text, degraded } => {
            if *degraded {
                log!("warning"; "showing fallback for {}", note.path);
            }
            println!("# {}\n", note.title);
            println!("{text}");
        }
        NoteBody::Embed { src } => {
            log!("show"; "{} is a pdf, embed from {}", note.id, src);
            println!("{src}");
        }
    }
}
