use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Check whether a message reads as a task request.
    Intent(TextArgs),
    /// Extract a task candidate from a message.
    Extract(TextArgs),
    /// Validate a structured model reply against the original message.
    Reconcile(ReconcileArgs),
    /// Read subtask titles from a task-breakdown model reply.
    Breakdown(BreakdownArgs),
    /// Normalize a free-form clock time to HH:MM.
    NormalizeTime(NormalizeTimeArgs),
    /// Extract a message straight into a routine payload.
    Routine(RoutineArgs),
    /// Interactive offer/confirm loop over stdin.
    Chat(ChatArgs),
    /// Print the JSON Schema of an output record.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TextArgs {
    /// Message text. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl TextArgs {
    #[must_use]
    pub fn joined(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Clone, Debug, Args)]
pub struct ReconcileArgs {
    /// Raw model reply, possibly wrapping a JSON object in prose.
    #[arg(long)]
    pub reply: String,
    #[command(flatten)]
    pub message: TextArgs,
}

#[derive(Clone, Debug, Args)]
pub struct BreakdownArgs {
    /// Raw model reply holding a JSON array of subtask titles.
    #[arg(long)]
    pub reply: String,
}

#[derive(Clone, Debug, Args)]
pub struct NormalizeTimeArgs {
    /// Clock time such as "6:40 PM", "6 40 pm", or "1840".
    pub time: String,
}

#[derive(Clone, Debug, Args)]
pub struct RoutineArgs {
    /// Repeat type: once, daily, weekly (defaults to config general.default_repeat).
    #[arg(long)]
    pub repeat: Option<String>,
    #[command(flatten)]
    pub message: TextArgs,
}

#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// Repeat type for confirmed routines (defaults to config general.default_repeat).
    #[arg(long)]
    pub repeat: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Record type: task_candidate, new_routine, chat_event.
    pub type_name: String,
}
