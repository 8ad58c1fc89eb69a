//! Shared test infrastructure: scripted language models and store setup.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use hostelhub::assistant::{AiError, Assistant, LanguageModel};
use hostelhub::store::Store;

pub const INSTITUTE: &str = "NITJ";

/// A recorded call to the model.
#[derive(Debug, Clone)]
pub struct Call {
    pub prompt: String,
    pub system_instruction: Option<String>,
}

/// Replies from a queue; once the queue is empty every call fails with
/// `EmptyResponse`. Each reply may wait first, to simulate a slow upstream.
pub struct ScriptedModel {
    replies: Mutex<VecDeque<(Result<String, AiError>, Duration)>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Result<String, AiError>>) -> Arc<Self> {
        Self::build(replies.into_iter().map(|r| (r, Duration::ZERO)).collect())
    }

    pub fn replying(texts: &[&str]) -> Arc<Self> {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub fn slow(texts: &[&str], delay: Duration) -> Arc<Self> {
        Self::timed(&texts.iter().map(|t| (*t, delay)).collect::<Vec<_>>())
    }

    pub fn timed(replies: &[(&str, Duration)]) -> Arc<Self> {
        Self::build(replies.iter().map(|(t, d)| (Ok(t.to_string()), *d)).collect())
    }

    fn build(replies: VecDeque<(Result<String, AiError>, Duration)>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn generate(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<String, AiError> {
        self.calls.lock().unwrap().push(Call {
            prompt: prompt.to_string(),
            system_instruction: system_instruction.map(str::to_string),
        });
        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some((reply, delay)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                reply
            }
            None => Err(AiError::EmptyResponse),
        }
    }
}

pub fn seeded_store(model: Arc<ScriptedModel>) -> Store {
    Store::seeded(Assistant::new(model, INSTITUTE))
}

pub fn empty_store(model: Arc<ScriptedModel>) -> Store {
    Store::new(Assistant::new(model, INSTITUTE))
}

/// Base URL of a port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

/// A genuine connection failure, as reqwest reports it.
pub async fn network_error() -> AiError {
    let err = reqwest::Client::new()
        .get(closed_port_url())
        .send()
        .await
        .expect_err("closed port should refuse connections");
    AiError::Network(err)
}
