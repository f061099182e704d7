use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::TextArgs;
use crate::output::output;

/// Handle `dayplan extract`.
///
/// Extraction runs regardless of intent; use `dayplan intent` to gate.
pub fn handle(args: &TextArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = args.joined();
    let candidate = ctx.extractor.extract(&text, ctx.now());
    output(&candidate, flags.format)
}
