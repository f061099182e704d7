use plan_core::responses::SubtaskBreakdown;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BreakdownArgs;
use crate::output::output;

/// Handle `dayplan breakdown`.
pub fn handle(args: &BreakdownArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let breakdown = breakdown(&args.reply);
    if breakdown.subtasks.is_empty() {
        tracing::warn!("breakdown reply held no usable subtasks");
    }
    output(&breakdown, flags.format)
}

fn breakdown(reply: &str) -> SubtaskBreakdown {
    SubtaskBreakdown {
        subtasks: plan_intent::parse_subtasks(reply),
    }
}
