use crate::context::ExecutionContext;
use anyhow::Result;
use dayplan_engine::seed_span;
use dayplan_types::DateKey;

pub fn handle(ctx: &ExecutionContext, today: Option<DateKey>) -> Result<()> {
    let config = ctx.config()?;
    let bounds = config.bounds();
    let growth = config.growth();
    let anchor = bounds.clamp(ctx.today(today));

    let max = bounds
        .max()
        .map(|date| date.to_string())
        .unwrap_or_else(|| "(unbounded)".to_string());
    println!("Bounds: {} .. {}", bounds.min(), max);
    println!("Anchor: {}", anchor);

    match seed_span(&bounds, &growth, anchor) {
        Some(span) => println!("Window: {} ({} days)", span, span.len()),
        None => println!("Window: (empty)"),
    }
    println!(
        "Growth: +{} days within {} lines of the end, +{} days within {} lines of the start",
        growth.append_batch,
        growth.append_threshold,
        growth.prepend_batch,
        growth.prepend_threshold
    );
    Ok(())
}
