use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::InteractionError;

pub const MIN_VISIBLE_DURATION: Duration = Duration::from_millis(500);
pub const RIPPLE_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebounceOptions {
    /// The forward animation stays on screen at least this long before reverse.
    #[serde(rename = "minVisibleMs", with = "millis")]
    pub min_visible: Duration,
    /// Length of one ripple animation cycle.
    #[serde(rename = "durationMs", with = "millis")]
    pub duration: Duration,
    /// Drops a pending reverse animation when the pointer enters again.
    pub cancel_on_reenter: bool,
}

impl Default for DebounceOptions {
    fn default() -> Self {
        Self {
            min_visible: MIN_VISIBLE_DURATION,
            duration: RIPPLE_DURATION,
            cancel_on_reenter: false,
        }
    }
}

impl DebounceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_visible(mut self, min_visible: Duration) -> Self {
        self.min_visible = min_visible;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn cancel_on_reenter(mut self, cancel_on_reenter: bool) -> Self {
        self.cancel_on_reenter = cancel_on_reenter;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, InteractionError> {
        let options: DebounceOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), InteractionError> {
        if self.duration.is_zero() {
            return Err(InteractionError::InvalidOptions(
                "animation duration must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
