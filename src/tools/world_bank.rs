use anyhow::Context;
use reqwest::Client;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use url::Url;

use crate::config::deserialize_option_u64;

pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org";

#[derive(Debug, thiserror::Error)]
pub enum WorldBankError {
    #[error("Invalid World Bank base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("World Bank API error (status {status}): {body}")]
    ApiStatus { status: u16, body: String },
    #[error("Unexpected World Bank response shape for {0}")]
    UnexpectedShape(String),
    #[error("Missing latest values for {code}: {countries:?}")]
    MissingCountries { code: String, countries: Vec<String> },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct WorldBankConfig {
    #[serde(rename = "world_bank_base_url")]
    pub base_url: Option<String>,
    #[serde(
        rename = "world_bank_timeout_secs",
        default,
        deserialize_with = "deserialize_option_u64"
    )]
    pub timeout_secs: Option<u64>,
}

/// Latest non-null value of an indicator for one country.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub country_code: String,
    pub year: String,
    pub value: f64,
}

/// Source of live indicator values.
pub trait IndicatorSource {
    /// Latest observation for each of `countries`. Fails unless every country
    /// has a value.
    fn latest(
        &self,
        code: &str,
        countries: &[&str],
    ) -> impl Future<Output = Result<Vec<Observation>, WorldBankError>>;
}

#[derive(Debug, Clone)]
pub struct WorldBankClient {
    base_url: Url,
    client: Client,
}

#[derive(Deserialize, Debug)]
struct Row {
    country: Option<CountryRef>,
    date: Option<String>,
    value: Option<f64>,
}

#[derive(Deserialize, Debug)]
struct CountryRef {
    id: Option<String>,
}

impl WorldBankClient {
    pub fn new(config: WorldBankConfig) -> Result<Self, WorldBankError> {
        let raw = config
            .base_url
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url =
            Url::parse(raw.trim()).map_err(|_| WorldBankError::InvalidBaseUrl(raw.clone()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.unwrap_or(8)))
            .user_agent("state-anchor/0.1")
            .build()
            .context("Failed to build World Bank HTTP client")?;

        Ok(Self { base_url, client })
    }

    fn endpoint(&self, code: &str, countries: &[&str]) -> String {
        format!(
            "{}/v2/country/{}/indicator/{}",
            self.base_url.as_str().trim_end_matches('/'),
            countries.join(";"),
            code
        )
    }
}

impl IndicatorSource for WorldBankClient {
    async fn latest(
        &self,
        code: &str,
        countries: &[&str],
    ) -> Result<Vec<Observation>, WorldBankError> {
        let url = self.endpoint(code, countries);
        log::debug!("fetching {}...", url);

        let response = self
            .client
            .get(&url)
            .query(&[("format", "json"), ("per_page", "400")])
            .send()
            .await
            .context("World Bank request failed")?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(WorldBankError::ApiStatus { status, body });
        }

        let body = response.text().await.context("World Bank response body")?;
        parse_latest(code, countries, &body)
    }
}

/// Picks the first non-null row per requested country. The API lists rows
/// newest first.
pub fn parse_latest(
    code: &str,
    countries: &[&str],
    body: &str,
) -> Result<Vec<Observation>, WorldBankError> {
    let payload: serde_json::Value =
        serde_json::from_str(body).map_err(|_| WorldBankError::UnexpectedShape(code.to_string()))?;
    let rows = payload
        .as_array()
        .filter(|parts| parts.len() >= 2)
        .and_then(|parts| parts[1].as_array())
        .ok_or_else(|| WorldBankError::UnexpectedShape(code.to_string()))?;

    let mut latest: Vec<Observation> = Vec::new();
    for row in rows {
        let Ok(row) = serde_json::from_value::<Row>(row.clone()) else {
            continue;
        };
        let (Some(id), Some(year), Some(value)) =
            (row.country.and_then(|c| c.id), row.date, row.value)
        else {
            continue;
        };
        if !countries.contains(&id.as_str()) || latest.iter().any(|o| o.country_code == id) {
            continue;
        }
        latest.push(Observation {
            country_code: id,
            year,
            value,
        });
        if latest.len() == countries.len() {
            break;
        }
    }

    let missing = countries
        .iter()
        .filter(|c| !latest.iter().any(|o| o.country_code == **c))
        .map(|c| c.to_string())
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(WorldBankError::MissingCountries {
            code: code.to_string(),
            countries: missing,
        });
    }

    latest.sort_by_key(|o| countries.iter().position(|c| *c == o.country_code));
    Ok(latest)
}

/// Human-facing data page for an indicator, used as the verification link.
pub fn public_indicator_url(code: &str, countries: &[&str]) -> String {
    format!(
        "https://data.worldbank.org/indicator/{}?locations={}",
        code,
        countries.join("-")
    )
}
