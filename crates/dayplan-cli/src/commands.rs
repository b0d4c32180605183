use super::args::{Cli, Commands};
use super::handlers;
use crate::config::resolve_data_dir;
use crate::context::ExecutionContext;
use crate::logging::{self, LogTarget};
use anyhow::Result;
use is_terminal::IsTerminal;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir);

    let target = match cli.command {
        // The browser owns the screen; keep log lines off it
        Commands::Browse { .. } if std::io::stdout().is_terminal() => {
            LogTarget::File(ctx.log_path())
        }
        _ => LogTarget::Stderr,
    };
    logging::init(cli.log_level, target)?;
    tracing::debug!(data_dir = %ctx.data_dir().display(), "resolved data directory");

    match cli.command {
        Commands::Init { force } => handlers::init::handle(&ctx, force),

        Commands::Show { date } => handlers::show::handle(&ctx, date),

        Commands::Set { date, tasks, notes } => handlers::set::handle(&ctx, date, tasks, notes),

        Commands::Export { output } => handlers::export::handle(&ctx, output),

        Commands::Import { file } => handlers::import::handle(&ctx, &file),

        Commands::Window { today } => handlers::window::handle(&ctx, today),

        Commands::Browse { today } => handlers::browse::handle(&ctx, today),
    }
}
