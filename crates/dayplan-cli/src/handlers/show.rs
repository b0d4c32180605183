use crate::context::ExecutionContext;
use crate::presentation::ConsoleDayView;
use anyhow::Result;
use dayplan_store::DayStore;
use dayplan_types::DateKey;
use is_terminal::IsTerminal;

pub fn handle(ctx: &ExecutionContext, date: Option<DateKey>) -> Result<()> {
    let date = ctx.today(date);
    let store = ctx.open_store()?;
    let record = store.get(date)?;

    ConsoleDayView::new(std::io::stdout().is_terminal()).print_detail(date, &record);
    Ok(())
}
