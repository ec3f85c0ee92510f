use std::time::Duration;

use serde::Deserialize;

use crate::error::ValidationError;

use super::parse::{parse_duration_value, parse_wait_value};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(alias = "base_url")]
    pub host: Option<String>,
    pub users: Option<usize>,
    pub spawn_rate: Option<u64>,
    pub run_time: Option<DurationValue>,
    pub wait_min: Option<DurationValue>,
    pub wait_max: Option<DurationValue>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}

/// Either a bare number of seconds or a suffixed string such as `"250ms"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_value(text),
        }
    }

    pub(crate) fn to_wait(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_wait_value(text),
        }
    }
}
