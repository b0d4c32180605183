use crate::context::ExecutionContext;
use crate::presentation::ConsoleDayView;
use crate::presentation::tui::{BrowseApp, TileSource};
use crate::presentation::TILE_HEIGHT;
use anyhow::Result;
use dayplan_engine::{RangeController, RowStrip};
use dayplan_types::DateKey;
use is_terminal::IsTerminal;

pub fn handle(ctx: &ExecutionContext, today: Option<DateKey>) -> Result<()> {
    let config = ctx.config()?;
    let store = ctx.open_store()?;
    let today = ctx.today(today);

    // Auto-select TUI mode if stdout is a TTY
    if std::io::stdout().is_terminal() {
        tracing::info!(%today, min = %config.range.min_date, "starting browser");
        return BrowseApp::new(config.bounds(), config.growth(), today, store).run();
    }

    // Piped output gets the initial window as plain tiles
    let mut controller = RangeController::new(config.bounds(), config.growth(), today);
    let mut source = TileSource::new(store);
    let mut strip = RowStrip::new(TILE_HEIGHT);
    controller.seed(&mut source, &mut strip)?;

    let view = ConsoleDayView::new(false);
    for (_, tile) in strip.rows() {
        view.print_tile(tile);
        println!();
    }
    Ok(())
}
