// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The AI side of the chat screen. The assistant itself is a black box
//! behind a capability trait; this module owns persisting both sides of
//! the exchange, not prompt construction or model selection.

use anyhow::{Context, Result};
use chrono::Local;
use serde::Deserialize;
use tracing::info;

use crate::models::ChatMessage;
use crate::store::Store;
use crate::summary::{self, SummaryBundle};
use crate::utils;

/// Answers a user message given a read-only snapshot of the financial
/// summary. The returned text is persisted verbatim.
pub trait Assistant {
    fn reply(&self, context: &SummaryBundle, user_text: &str) -> Result<String>;
}

/// Posts `{message, context}` as JSON to a configured HTTP endpoint and
/// expects `{"reply": "..."}` back.
pub struct HttpAssistant {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpAssistant {
    pub fn new(endpoint: String) -> Result<Self> {
        Ok(Self {
            endpoint,
            client: utils::http_client()?,
        })
    }

    pub fn from_settings(store: &Store) -> Result<Self> {
        let endpoint = utils::get_assistant_endpoint(store)?.context(
            "Assistant endpoint not configured; run `fintrack assistant set-endpoint --url <URL>`",
        )?;
        Self::new(endpoint)
    }
}

#[derive(Debug, Deserialize)]
struct AssistantReply {
    reply: String,
}

impl Assistant for HttpAssistant {
    fn reply(&self, context: &SummaryBundle, user_text: &str) -> Result<String> {
        let payload = serde_json::json!({
            "message": user_text,
            "context": context,
        });
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()?
            .error_for_status()?;
        let r: AssistantReply = resp.json()?;
        Ok(r.reply)
    }
}

/// Persists the user's message, asks the assistant with a fresh summary
/// snapshot, and persists the reply as a non-user message. A failed
/// assistant call leaves the user message in history and stores no reply.
pub fn converse(
    store: &mut Store,
    assistant: &dyn Assistant,
    user_text: &str,
) -> Result<(ChatMessage, ChatMessage)> {
    let user_msg = store.create_chat_message(user_text, true)?;
    let context = summary::bundle(store, Local::now().naive_local())?;
    info!("requesting assistant reply");
    let reply = assistant.reply(&context, user_text)?;
    let assistant_msg = store.create_chat_message(&reply, false)?;
    Ok((user_msg, assistant_msg))
}
