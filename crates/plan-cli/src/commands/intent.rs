use plan_core::responses::IntentResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TextArgs;
use crate::output::output;

/// Handle `dayplan intent`.
pub fn handle(args: &TextArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&respond(&args.joined()), flags.format)
}

fn respond(text: &str) -> IntentResponse {
    IntentResponse {
        text: text.to_string(),
        is_task_intent: plan_intent::is_task_intent(text),
    }
}

#[cfg(test)]
mod tests {
    use super::respond;

    #[test]
    fn echoes_text_with_verdict() {
        let response = respond("Schedule a call");
        assert_eq!(response.text, "Schedule a call");
        assert!(response.is_task_intent);
        assert!(!respond("hello there").is_task_intent);
    }
}
