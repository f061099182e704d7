//! Serde roundtrip and JsonSchema validation tests for entity and response types.

use chrono::{NaiveDate, NaiveTime};
use plan_core::entities::*;
use plan_core::enums::*;
use plan_core::responses::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn meeting() -> TaskCandidate {
    TaskCandidate {
        title: "Meeting".into(),
        time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        priority: Priority::Medium,
        category: Category::Work,
    }
}

roundtrip_and_validate!(task_candidate_roundtrip, TaskCandidate, meeting());

roundtrip_and_validate!(
    new_routine_roundtrip,
    NewRoutine,
    NewRoutine::from_candidate(&meeting(), RepeatType::Weekly)
);

roundtrip_and_validate!(
    intent_response_roundtrip,
    IntentResponse,
    IntentResponse {
        text: "remind me to call mom".into(),
        is_task_intent: true,
    }
);

roundtrip_and_validate!(
    normalized_time_roundtrip,
    NormalizedTimeResponse,
    NormalizedTimeResponse {
        input: "6:40 PM".into(),
        time: NaiveTime::from_hms_opt(18, 40, 0).unwrap(),
    }
);

roundtrip_and_validate!(
    subtask_breakdown_roundtrip,
    SubtaskBreakdown,
    SubtaskBreakdown {
        subtasks: vec!["Draft outline".into(), "Collect sources".into()],
    }
);

roundtrip_and_validate!(
    chat_event_offered_roundtrip,
    ChatEvent,
    ChatEvent::Offered {
        candidate: meeting(),
    }
);

roundtrip_and_validate!(
    chat_event_confirmed_roundtrip,
    ChatEvent,
    ChatEvent::Confirmed {
        candidate: meeting(),
        routine: NewRoutine::from_candidate(&meeting(), RepeatType::Once),
    }
);

roundtrip_and_validate!(chat_event_cancelled_roundtrip, ChatEvent, ChatEvent::Cancelled);

#[test]
fn chat_event_is_tagged_by_event() {
    let value = serde_json::to_value(ChatEvent::Ignored {
        text: "let's grab lunch".into(),
    })
    .unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "event": "ignored", "text": "let's grab lunch" })
    );

    let value = serde_json::to_value(ChatEvent::NothingPending).unwrap();
    assert_eq!(value, serde_json::json!({ "event": "nothing_pending" }));
}

#[test]
fn candidate_rejects_malformed_payload() {
    let bad_time = serde_json::json!({
        "title": "Meeting",
        "time": "3pm",
        "date": "2024-01-02",
        "priority": "medium",
        "category": "work",
    });
    assert!(serde_json::from_value::<TaskCandidate>(bad_time).is_err());

    let bad_category = serde_json::json!({
        "title": "Meeting",
        "time": "15:00",
        "date": "2024-01-02",
        "priority": "medium",
        "category": "errands",
    });
    assert!(serde_json::from_value::<TaskCandidate>(bad_category).is_err());
}
