use anyhow::Context;
use plan_core::responses::NormalizedTimeResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NormalizeTimeArgs;
use crate::output::output;

/// Handle `dayplan normalize-time`.
pub fn handle(args: &NormalizeTimeArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let time = plan_intent::normalize_time(&args.time)
        .with_context(|| format!("cannot normalize '{}'", args.time))?;
    output(
        &NormalizedTimeResponse {
            input: args.time.clone(),
            time,
        },
        flags.format,
    )
}
