use crate::context::ExecutionContext;
use crate::presentation::ConsoleDayView;
use anyhow::{Result, bail};
use dayplan_store::DayStore;
use dayplan_types::{DateKey, DayRecord, TASK_SLOTS};
use is_terminal::IsTerminal;

pub fn handle(
    ctx: &ExecutionContext,
    date: DateKey,
    tasks: Vec<String>,
    notes: Option<String>,
) -> Result<()> {
    if tasks.len() > TASK_SLOTS {
        bail!(
            "A day holds at most {} tasks, got {}",
            TASK_SLOTS,
            tasks.len()
        );
    }

    let mut store = ctx.open_store()?;
    let current = store.get(date)?;
    let record = merge(current, tasks, notes);
    store.set(date, record)?;

    tracing::info!(%date, "saved day");

    let saved = store.get(date)?;
    ConsoleDayView::new(std::io::stdout().is_terminal()).print_detail(date, &saved);
    Ok(())
}

/// Given tasks replace all three slots; omitted fields keep the stored value
fn merge(current: DayRecord, tasks: Vec<String>, notes: Option<String>) -> DayRecord {
    let tasks = if tasks.is_empty() {
        current.tasks.to_vec()
    } else {
        tasks
    };
    DayRecord::new(tasks, notes.unwrap_or(current.notes))
}
