use anyhow::bail;
use plan_core::entities::{NewRoutine, TaskCandidate};
use plan_core::responses::ChatEvent;
use schemars::Schema;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

pub const SCHEMA_TYPES: &[&str] = &["task_candidate", "new_routine", "chat_event"];

/// Handle `dayplan schema`. Needs no config or clock.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_for_type(&args.type_name)?, flags.format)
}

fn schema_for_type(type_name: &str) -> anyhow::Result<Schema> {
    let schema = match type_name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "task_candidate" => schemars::schema_for!(TaskCandidate),
        "new_routine" => schemars::schema_for!(NewRoutine),
        "chat_event" => schemars::schema_for!(ChatEvent),
        _ => bail!(
            "unknown schema type '{type_name}' (expected one of: {})",
            SCHEMA_TYPES.join(", ")
        ),
    };
    Ok(schema)
}
