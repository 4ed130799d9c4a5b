use anyhow::Context;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

use crate::config::{deserialize_option_u16, deserialize_option_u64};

pub const DEFAULT_SUBJECT: &str = "state-anchor: Daily Baseline State Primer";

#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("STATE_ANCHOR_{0} environment variable must be set")]
    MissingSetting(&'static str),
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EmailConfig {
    #[serde(rename = "email_smtp_server")]
    pub smtp_server: Option<String>,
    #[serde(
        rename = "email_smtp_port",
        default,
        deserialize_with = "deserialize_option_u16"
    )]
    pub smtp_port: Option<u16>,
    #[serde(rename = "email_sender")]
    pub sender: Option<String>,
    #[serde(rename = "email_password")]
    pub password: Option<String>,
    #[serde(rename = "email_recipient")]
    pub recipient: Option<String>,
    #[serde(rename = "email_subject")]
    pub subject: Option<String>,
    #[serde(
        rename = "email_timeout_secs",
        default,
        deserialize_with = "deserialize_option_u64"
    )]
    pub timeout_secs: Option<u64>,
}

impl EmailConfig {
    pub fn subject(&self) -> String {
        self.subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SUBJECT)
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

pub trait Mailer {
    fn send(&self, email: &OutgoingEmail) -> impl Future<Output = Result<(), MailerError>>;
}

pub struct SmtpMailer {
    sender: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

fn required(value: &Option<String>, key: &'static str) -> Result<String, MailerError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(MailerError::MissingSetting(key))
}

impl SmtpMailer {
    pub fn new(config: EmailConfig) -> Result<Self, MailerError> {
        let server = required(&config.smtp_server, "EMAIL_SMTP_SERVER")?;
        let sender = required(&config.sender, "EMAIL_SENDER")?;
        let password = required(&config.password, "EMAIL_PASSWORD")?;

        let mailbox = sender
            .parse::<Mailbox>()
            .map_err(|_| MailerError::InvalidAddress(sender.clone()))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&server)
            .with_context(|| format!("Invalid SMTP relay {}", server))?
            .port(config.smtp_port.unwrap_or(587))
            .credentials(Credentials::new(sender, password))
            .timeout(Some(Duration::from_secs(config.timeout_secs.unwrap_or(30))))
            .build();

        Ok(Self {
            sender: mailbox,
            transport,
        })
    }
}

pub fn build_message(sender: &Mailbox, email: &OutgoingEmail) -> Result<Message, MailerError> {
    let to = email
        .to
        .parse::<Mailbox>()
        .map_err(|_| MailerError::InvalidAddress(email.to.clone()))?;

    let message = Message::builder()
        .from(sender.clone())
        .to(to)
        .subject(email.subject.clone())
        .multipart(MultiPart::alternative_plain_html(
            email.text.clone(),
            email.html.clone(),
        ))
        .context("Building email message")?;
    Ok(message)
}

impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError> {
        let message = build_message(&self.sender, email)?;
        log::info!("sending email to {}...", email.to);
        self.transport
            .send(message)
            .await
            .context("SMTP send failed")?;
        Ok(())
    }
}

/// Prints the plain-text body instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct StdoutMailer;

impl Mailer for StdoutMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError> {
        log::info!("dry run, not emailing {}", email.to);
        println!("Subject: {}\n\n{}", email.subject, email.text);
        Ok(())
    }
}
