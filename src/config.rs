use crate::tools::email::EmailConfig;
use crate::tools::world_bank::WorldBankConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: String,
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    #[serde(default, deserialize_with = "deserialize_option_u64")]
    pub model_timeout_secs: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_option_usize")]
    pub max_words: Option<usize>,
    #[serde(default, deserialize_with = "deserialize_option_usize")]
    pub max_facts: Option<usize>,
    pub prompt_path: Option<String>,
    /// Overrides "today" (UTC) for the focus rotation, as `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "deserialize_option_date")]
    pub run_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_option_bool")]
    pub dry_run: Option<bool>,

    #[serde(flatten)]
    pub world_bank: WorldBankConfig,
    #[serde(flatten)]
    pub email: EmailConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(envy::prefixed("STATE_ANCHOR_").from_env::<AppConfig>()?)
    }
}

fn default_gemini_model() -> String {
    "gemini-2.5-pro".to_string()
}

// envy hands every value over as a string once `flatten` is involved, so
// non-string options are parsed here.
fn deserialize_option_parsed<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.parse::<T>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

pub(crate) fn deserialize_option_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_option_parsed(deserializer)
}

pub(crate) fn deserialize_option_u16<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_option_parsed(deserializer)
}

pub(crate) fn deserialize_option_usize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_option_parsed(deserializer)
}

fn deserialize_option_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(None),
        Some(v) if v.is_empty() => Ok(None),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "invalid boolean '{}'",
                other
            ))),
        },
    }
}

fn deserialize_option_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_option_parsed(deserializer)
}
