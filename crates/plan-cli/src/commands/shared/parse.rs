use anyhow::Context;
use plan_core::enums::RepeatType;

/// `--repeat` if given, else the configured default.
pub fn repeat_or_default(raw: Option<&str>, default: RepeatType) -> anyhow::Result<RepeatType> {
    raw.map_or(Ok(default), |raw| {
        raw.parse::<RepeatType>()
            .context("expected --repeat once, daily, or weekly")
    })
}

#[cfg(test)]
mod tests {
    use plan_core::enums::RepeatType;

    use super::repeat_or_default;

    #[test]
    fn repeat_falls_back_to_default() {
        assert_eq!(
            repeat_or_default(None, RepeatType::Daily).unwrap(),
            RepeatType::Daily
        );
    }

    #[test]
    fn repeat_flag_ignores_case() {
        assert_eq!(
            repeat_or_default(Some(" Weekly "), RepeatType::Once).unwrap(),
            RepeatType::Weekly
        );
        assert_eq!(
            repeat_or_default(Some("once"), RepeatType::Daily).unwrap(),
            RepeatType::Once
        );
    }

    #[test]
    fn unknown_repeat_is_rejected() {
        let err = repeat_or_default(Some("hourly"), RepeatType::Once).unwrap_err();
        assert!(format!("{err:#}").contains("invalid repeat type 'hourly'"));
        assert!(err.to_string().contains("expected --repeat once, daily, or weekly"));
    }
}
