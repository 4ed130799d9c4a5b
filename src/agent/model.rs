use anyhow::Error;
use std::future::Future;

use rig::agent::Agent as RigAgent;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::gemini;
use rig::providers::gemini::completion::CompletionModel;

const PREAMBLE: &str =
    "You are a calm, factual assistant. Never invent numbers, rankings, or policies.";

/// A language model that turns a prompt into text.
pub trait ReflectionModel {
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String, Error>>;
}

pub struct GeminiModel {
    agent: RigAgent<CompletionModel>,
}

impl GeminiModel {
    pub fn new(api_key: &str, model: &str) -> Result<Self, Error> {
        let client = gemini::Client::new(api_key)?;
        let agent = client
            .agent(model)
            .preamble(PREAMBLE)
            .temperature(0.35)
            .max_tokens(1100)
            .build();
        Ok(Self { agent })
    }
}

impl ReflectionModel for GeminiModel {
    async fn complete(&self, prompt: &str) -> Result<String, Error> {
        log::info!("sending prompt to model ({} chars)", prompt.len());
        self.agent.prompt(prompt).await.map_err(Error::from)
    }
}
