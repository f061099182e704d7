use anyhow::Context;
use chrono::NaiveDateTime;
use plan_config::PlanConfig;
use plan_core::enums::RepeatType;
use plan_intent::{Extractor, ExtractorDefaults};

use crate::cli::GlobalFlags;
use crate::commands::shared::now::NowSource;

/// Everything a command handler needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub extractor: Extractor,
    pub default_repeat: RepeatType,
    pub now: NowSource,
}

impl AppContext {
    /// Load config and build the extractor and reference clock.
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = PlanConfig::load_with_dotenv().context("failed to load dayplan config")?;
        let now = NowSource::from_flag(flags.now.as_deref())?;
        Self::from_config(&config, now)
    }

    pub fn from_config(config: &PlanConfig, now: NowSource) -> anyhow::Result<Self> {
        let defaults = ExtractorDefaults {
            time: config.extractor.default_time()?,
            title: config.extractor.default_title().to_string(),
        };
        tracing::debug!(
            default_time = %config.extractor.default_time,
            default_title = %defaults.title,
            default_repeat = %config.general.default_repeat,
            "configured extractor"
        );

        Ok(Self {
            extractor: Extractor::new(defaults),
            default_repeat: config.general.default_repeat,
            now,
        })
    }

    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        self.now.now()
    }
}
