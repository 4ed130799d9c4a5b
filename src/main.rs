use anyhow::Context;
use env_logger::Env;
use state_anchor::agent::model::GeminiModel;
use state_anchor::agent::prompt::load_template;
use state_anchor::agent::{Agent, RunSettings};
use state_anchor::config::AppConfig;
use state_anchor::facts::{FactBank, DEFAULT_MAX_FACTS};
use state_anchor::tools::email::{SmtpMailer, StdoutMailer};
use state_anchor::tools::world_bank::WorldBankClient;
use std::env;
use std::path::Path;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Parse the specified (or default) .env file
    let dotenv_path =
        env::var("STATE_ANCHOR_DOTENV_PATH").unwrap_or_else(|_| ".env".to_string());
    let dotenv_result = dotenvy::from_path(&dotenv_path);

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match dotenv_result {
        Ok(()) => log::info!("Loaded env from {}", dotenv_path),
        Err(err) => log::debug!("No .env loaded from {}: {}", dotenv_path, err),
    }

    let config = AppConfig::from_env().context("Reading configuration")?;
    let date = config
        .run_date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    let source = WorldBankClient::new(config.world_bank.clone())?;
    let facts = FactBank::new(source, config.max_facts.unwrap_or(DEFAULT_MAX_FACTS));
    let model = GeminiModel::new(&config.gemini_api_key, &config.gemini_model)?;
    let template = load_template(config.prompt_path.as_deref().map(Path::new))?;
    let settings = RunSettings::from_config(&config);

    if config.dry_run.unwrap_or(false) {
        let agent = Agent::new(facts, model, StdoutMailer, template, settings);
        agent.run(date).await?;
    } else {
        let mailer = SmtpMailer::new(config.email.clone())?;
        if settings.recipient.is_empty() {
            anyhow::bail!("STATE_ANCHOR_EMAIL_RECIPIENT environment variable must be set");
        }
        let agent = Agent::new(facts, model, mailer, template, settings);
        agent.run(date).await?;
    }

    Ok(())
}
