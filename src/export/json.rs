use std::path::Path;

use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::consts::EXPORT_FORMAT;
use crate::db::{DocumentStore, ItemFilter};
use crate::error::Result;

/// Export matching items to a portable JSON file, still encrypted.
///
/// Only the stored base64 fields leave the store; no key or plaintext is
/// involved, so the export is exactly as sensitive as the database rows.
/// Returns the number of items written.
pub fn export_items_to_json<S, P>(store: &S, filter: &ItemFilter, path: P) -> Result<usize>
where
    S: DocumentStore,
    P: AsRef<Path>,
{
    let items = store.query_records(filter)?;

    let export = json!({
        "export_format": EXPORT_FORMAT,
        "exported_at": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "exporter_version": env!("CARGO_PKG_VERSION"),
        "total_items": items.len(),
        "items": items,
    });

    std::fs::write(path.as_ref(), serde_json::to_string_pretty(&export)?)?;
    info!(count = items.len(), path = %path.as_ref().display(), "exported items");

    Ok(items.len())
}
