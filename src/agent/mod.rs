pub mod model;
pub mod prompt;
pub mod reflection;

use chrono::NaiveDate;
use std::time::Duration;

use model::ReflectionModel;
use prompt::render_prompt;
use reflection::{append_verification_links, cited_fact_ids, truncate_by_words, DEFAULT_MAX_WORDS};

use crate::config::AppConfig;
use crate::facts::{Category, EvidencePack, FactBank};
use crate::tools::email::{Mailer, MailerError, OutgoingEmail};
use crate::tools::html::email_document;
use crate::tools::world_bank::IndicatorSource;

const MIN_CITED_FACTS: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Model request failed: {0}")]
    Model(anyhow::Error),
    #[error("Model did not answer within {0} seconds")]
    ModelTimeout(u64),
    #[error("Model returned empty reflection content")]
    EmptyReflection,
    #[error("Sending email failed: {0}")]
    Email(#[from] MailerError),
}

#[derive(Debug, Clone)]
pub struct RunSettings {
    pub recipient: String,
    pub subject: String,
    pub max_words: usize,
    pub model_timeout: Duration,
}

impl RunSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            recipient: config.email.recipient.clone().unwrap_or_default(),
            subject: config.email.subject(),
            max_words: config.max_words.unwrap_or(DEFAULT_MAX_WORDS).max(1),
            model_timeout: Duration::from_secs(config.model_timeout_secs.unwrap_or(90)),
        }
    }
}

/// The finished text of one run, plus what it was built from.
#[derive(Debug, Clone)]
pub struct Reflection {
    pub category: Category,
    pub prompt: String,
    pub cited: Vec<String>,
    pub text: String,
}

pub struct Agent<S, M, E> {
    facts: FactBank<S>,
    model: M,
    mailer: E,
    template: String,
    settings: RunSettings,
}

impl<S, M, E> Agent<S, M, E>
where
    S: IndicatorSource,
    M: ReflectionModel,
    E: Mailer,
{
    pub fn new(
        facts: FactBank<S>,
        model: M,
        mailer: E,
        template: String,
        settings: RunSettings,
    ) -> Self {
        Self {
            facts,
            model,
            mailer,
            template,
            settings,
        }
    }

    pub async fn generate_reflection(&self, prompt: &str) -> Result<String, RunError> {
        let timeout = self.settings.model_timeout;
        let text = tokio::time::timeout(timeout, self.model.complete(prompt))
            .await
            .map_err(|_| RunError::ModelTimeout(timeout.as_secs()))?
            .map_err(RunError::Model)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(RunError::EmptyReflection);
        }
        Ok(text.to_string())
    }

    /// Everything up to, but not including, sending the email.
    pub async fn compose(&self, date: NaiveDate) -> Result<Reflection, RunError> {
        let pack: EvidencePack = self.facts.build_evidence_pack(date).await;
        let prompt = render_prompt(&self.template, &pack);

        let raw = self.generate_reflection(&prompt).await?;
        let body = truncate_by_words(&raw, self.settings.max_words);
        if body.trim().is_empty() {
            return Err(RunError::EmptyReflection);
        }

        let cited = cited_fact_ids(&body, &pack);
        let expected = MIN_CITED_FACTS.min(pack.fact_ids().len());
        if cited.len() < expected {
            log::warn!(
                "reflection cites {} fact ids, expected at least {}",
                cited.len(),
                expected
            );
        }

        Ok(Reflection {
            category: pack.category,
            text: append_verification_links(&body, &pack),
            prompt,
            cited,
        })
    }

    /// Composes the reflection and emails it. Nothing is sent unless every
    /// earlier stage succeeded.
    pub async fn run(&self, date: NaiveDate) -> Result<Reflection, RunError> {
        let reflection = self.compose(date).await?;
        let email = OutgoingEmail {
            to: self.settings.recipient.clone(),
            subject: self.settings.subject.clone(),
            text: reflection.text.clone(),
            html: email_document(&reflection.text),
        };
        self.mailer.send(&email).await?;
        log::info!(
            "sent {} reflection ({} fact ids cited)",
            reflection.category.slug(),
            reflection.cited.len()
        );
        Ok(reflection)
    }
}
