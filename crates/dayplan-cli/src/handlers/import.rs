use crate::context::ExecutionContext;
use anyhow::{Context, Result, anyhow};
use dayplan_store::{Error as StoreError, import_document};
use std::path::Path;

pub fn handle(ctx: &ExecutionContext, file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let mut store = ctx.open_store()?;
    match import_document(&mut store, &text) {
        Ok(days) => {
            tracing::info!(days, file = %file.display(), "import finished");
            println!("Import complete!");
            Ok(())
        }
        Err(StoreError::InvalidDocument(reason)) => {
            tracing::warn!(%reason, "rejected import document");
            Err(anyhow!("Import failed: invalid file."))
        }
        Err(err) => Err(err.into()),
    }
}
