use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReconcileArgs;
use crate::output::output;

/// Handle `dayplan reconcile`.
pub fn handle(args: &ReconcileArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let original = args.message.joined();
    let candidate = ctx.extractor.reconcile(&args.reply, &original, ctx.now());
    output(&candidate, flags.format)
}
