use crate::config::Config;
use crate::context::ExecutionContext;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let config_path = ctx.config_path();

    if config_path.exists() && !force {
        println!("Config already exists: {}", config_path.display());
        println!("Use --force to overwrite it with defaults.");
        return Ok(());
    }

    Config::default().save_to(&config_path)?;
    tracing::info!(path = %config_path.display(), "wrote default config");

    println!("Wrote {}", config_path.display());
    println!("Records are stored in {}", ctx.data_dir().display());
    Ok(())
}
