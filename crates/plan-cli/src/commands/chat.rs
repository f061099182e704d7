use std::io::{BufRead, Write};

use plan_core::entities::NewRoutine;
use plan_core::enums::{ConfirmationState, RepeatType};
use plan_core::responses::ChatEvent;
use plan_intent::ChatSession;

use crate::bootstrap::AppContext;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::ChatArgs;
use crate::commands::shared::parse::repeat_or_default;
use crate::output::write_to;

const CONFIRM_WORDS: &[&str] = &["yes", "y", "confirm"];
const CANCEL_WORDS: &[&str] = &["no", "n", "cancel"];
const QUIT_WORDS: &[&str] = &["quit", "exit"];

/// Handle `dayplan chat`: one message per stdin line, one event per reply.
pub fn handle(args: &ChatArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let repeat = repeat_or_default(args.repeat.as_deref(), ctx.default_repeat)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_chat(
        stdin.lock(),
        &mut stdout.lock(),
        ctx,
        repeat,
        flags.format,
    )
}

/// Drive a [`ChatSession`] over line input until EOF or a quit word.
pub fn run_chat<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    ctx: &AppContext,
    repeat: RepeatType,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut session = ChatSession::new(ctx.extractor.clone());

    for line in input.lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let word = text.to_lowercase();
        if QUIT_WORDS.contains(&word.as_str()) {
            tracing::debug!("chat ended by user");
            break;
        }

        let event = respond(&mut session, text, &word, ctx, repeat)?;
        write_to(out, &event, format)?;
    }
    Ok(())
}

fn respond(
    session: &mut ChatSession,
    text: &str,
    word: &str,
    ctx: &AppContext,
    repeat: RepeatType,
) -> anyhow::Result<ChatEvent> {
    let awaiting = session.state() == ConfirmationState::AwaitingConfirmation;

    if CONFIRM_WORDS.contains(&word) {
        if !awaiting {
            return Ok(ChatEvent::NothingPending);
        }
        let candidate = session.confirm()?;
        let routine = NewRoutine::from_candidate(&candidate, repeat);
        return Ok(ChatEvent::Confirmed { candidate, routine });
    }

    if CANCEL_WORDS.contains(&word) {
        if !awaiting {
            return Ok(ChatEvent::NothingPending);
        }
        session.cancel()?;
        return Ok(ChatEvent::Cancelled);
    }

    Ok(match session.handle_message(text, ctx.now()) {
        Some(candidate) => ChatEvent::Offered {
            candidate: candidate.clone(),
        },
        None => ChatEvent::Ignored {
            text: text.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::NaiveDate;
    use plan_config::PlanConfig;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::shared::now::NowSource;

    fn ctx() -> AppContext {
        let fixed = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        AppContext::from_config(&PlanConfig::default(), NowSource::Fixed(fixed)).unwrap()
    }

    fn transcript(input: &str, repeat: RepeatType) -> Vec<ChatEvent> {
        let mut out = Vec::new();
        run_chat(Cursor::new(input), &mut out, &ctx(), repeat, OutputFormat::Raw).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn offer_then_confirm_builds_routine() {
        let events = transcript("Meeting at 3pm tomorrow\nyes\n", RepeatType::Weekly);
        assert_eq!(events.len(), 2);

        let ChatEvent::Offered { candidate: offered } = &events[0] else {
            panic!("expected offer, got {:?}", events[0]);
        };
        assert_eq!(offered.title, "Meeting");

        let ChatEvent::Confirmed { candidate, routine } = &events[1] else {
            panic!("expected confirmation, got {:?}", events[1]);
        };
        assert_eq!(candidate, offered);
        assert_eq!(routine.title, "Meeting");
        assert_eq!(routine.repeat_type, RepeatType::Weekly);
        assert!(routine.is_active);
        assert!(!routine.is_completed);
    }

    #[test]
    fn chatter_and_stray_replies() {
        let events = transcript("hello\nyes\n\nno\n", RepeatType::Once);
        assert_eq!(
            events,
            vec![
                ChatEvent::Ignored {
                    text: "hello".into()
                },
                ChatEvent::NothingPending,
                ChatEvent::NothingPending,
            ]
        );
    }

    #[test]
    fn cancel_then_offer_again() {
        let events = transcript("buy milk\nCancel\nbuy bread\nY\n", RepeatType::Once);
        assert!(matches!(events[0], ChatEvent::Offered { .. }));
        assert_eq!(events[1], ChatEvent::Cancelled);
        assert!(matches!(events[2], ChatEvent::Offered { .. }));
        let ChatEvent::Confirmed { routine, .. } = &events[3] else {
            panic!("expected confirmation");
        };
        assert_eq!(routine.title, "Buy bread");
    }

    #[test]
    fn quit_stops_reading() {
        let events = transcript("buy milk\nquit\nyes\n", RepeatType::Once);
        assert_eq!(events.len(), 1);
    }
}
