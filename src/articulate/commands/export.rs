use crate::commands::{CmdMessage, CmdResult, ExportSummary};
use crate::error::{ArticulateError, Result};
use crate::export::pdf::PdfBackend;
use crate::export::{draw_cards, export_filename, DrawingBackend};
use crate::store::fs_backend::write_atomic;
use crate::store::{CardStore, StorageBackend};
use chrono::NaiveDate;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use uuid::Uuid;

pub const MSG_NO_CARDS: &str = "No cards to generate PDF";
pub const MSG_FAILED: &str = "Error generating PDF. Please try again.";

pub fn run<B: StorageBackend>(
    store: &CardStore<B>,
    out_dir: &Path,
    date: NaiveDate,
) -> Result<CmdResult> {
    run_with(store, PdfBackend::new(), out_dir, date)
}

/// Export through an arbitrary drawing backend.
///
/// The document is built completely in memory and only then written, so a
/// failure at any point leaves no file behind.
pub fn run_with<B: StorageBackend, D: DrawingBackend>(
    store: &CardStore<B>,
    mut backend: D,
    out_dir: &Path,
    date: NaiveDate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let cards = store.list();

    if cards.is_empty() {
        result.add_message(CmdMessage::error(MSG_NO_CARDS));
        return Ok(result);
    }

    let path = out_dir.join(export_filename(date));
    let outcome = draw_cards(&mut backend, cards)
        .and_then(|pages| backend.finish().map(|bytes| (pages, bytes)))
        .and_then(|(pages, bytes)| write_document(&path, &bytes).map(|_| pages));

    match outcome {
        Ok(pages) => {
            info!(path = %path.display(), pages, cards = cards.len(), "exported cards");
            result.add_message(CmdMessage::success(format!(
                "PDF generated successfully! ({} cards)",
                cards.len()
            )));
            result.add_message(CmdMessage::info(format!("Saved to {}", path.display())));
            result.export = Some(ExportSummary {
                path,
                pages,
                cards: cards.len(),
            });
        }
        Err(e) => {
            error!(error = %e, "Error generating PDF");
            result.add_message(CmdMessage::error(MSG_FAILED));
        }
    }
    Ok(result)
}

fn write_document(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(ArticulateError::Io)?;
    }

    let tmp = dir.join(format!(".articulate-export-{}.tmp", Uuid::new_v4()));
    write_atomic(&tmp, path, |file| file.write_all(bytes))
}
