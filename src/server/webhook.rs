//! Webhook callback payloads. The gateway collaborator verifies the
//! platform signature and performs the authenticated reply-send; this layer
//! only resolves text-message events and hands the reply batches back in
//! the callback response.

use serde::{Deserialize, Serialize};

use crate::data::ReferenceData;
use crate::resolver::{BotConfig, Resolver};

#[derive(Debug, Deserialize)]
pub struct CallbackRequest {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, rename = "replyToken")]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub message: Option<MessageContent>,
}

#[derive(Debug, Deserialize)]
pub struct MessageContent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextMessage {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplyBatch {
    #[serde(rename = "replyToken")]
    pub reply_token: String,
    pub messages: Vec<TextMessage>,
}

/// Resolve every text-message event in the callback. Events of other kinds,
/// and events whose resolution produced nothing, contribute no batch.
pub fn callback_payload(
    body: &str,
    data: &ReferenceData,
    config: &BotConfig,
) -> Result<String, serde_json::Error> {
    let request: CallbackRequest = serde_json::from_str(body)?;
    let resolver = Resolver::new(data, config);

    let mut batches = Vec::new();
    for event in &request.events {
        if event.kind != "message" {
            continue;
        }
        let Some(message) = &event.message else {
            continue;
        };
        if message.kind != "text" {
            continue;
        }
        let Some(text) = &message.text else {
            continue;
        };

        let replies = resolver.resolve(text);
        if replies.is_empty() {
            continue;
        }
        batches.push(ReplyBatch {
            reply_token: event.reply_token.clone().unwrap_or_default(),
            messages: replies
                .into_iter()
                .map(|reply| TextMessage {
                    kind: "text",
                    text: reply.text,
                })
                .collect(),
        });
    }

    serde_json::to_string_pretty(&serde_json::json!({ "replies": batches }))
}
