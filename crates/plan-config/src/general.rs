//! General application configuration.

use plan_core::enums::RepeatType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Repeat type for routines created from confirmed chat tasks.
    #[serde(default)]
    pub default_repeat: RepeatType,
}
