use plan_core::entities::NewRoutine;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::RoutineArgs;
use crate::commands::shared::parse::repeat_or_default;
use crate::output::output;

/// Handle `dayplan routine`.
pub fn handle(args: &RoutineArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let repeat = repeat_or_default(args.repeat.as_deref(), ctx.default_repeat)?;
    let candidate = ctx.extractor.extract(&args.message.joined(), ctx.now());
    output(&NewRoutine::from_candidate(&candidate, repeat), flags.format)
}
