use crate::context::ExecutionContext;
use anyhow::{Context, Result};
use dayplan_store::export_document;
use std::path::PathBuf;

pub fn handle(ctx: &ExecutionContext, output: Option<PathBuf>) -> Result<()> {
    let store = ctx.open_store()?;
    let document = export_document(&store)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Exported to {}", path.display());
        }
        None => println!("{}", document),
    }
    Ok(())
}
