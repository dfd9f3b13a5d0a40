//! Travel chat and POI description features.
//!
//! Both build a prompt, ask the [`TextGenerator`], and fall back to the
//! rule-based answers in [`super::fallback`] when the backend is not ready,
//! fails, times out, or returns something too short to show.

use super::fallback;
use super::generator::TextGenerator;
use super::providers::GenerationParams;
use crate::extract::{capitalize, extract_highlights, extract_suggestions};
use std::sync::Arc;

/// Generated chat replies shorter than this are discarded.
const MIN_CHAT_REPLY_CHARS: usize = 10;

/// Generated descriptions shorter than this are discarded.
const MIN_DESCRIPTION_CHARS: usize = 20;

/// Conversation turns included in the chat prompt.
const CONTEXT_TURNS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoiDescription {
    pub description: String,
    pub highlights: Vec<String>,
}

pub struct Assistant {
    generator: Arc<TextGenerator>,
}

impl Assistant {
    pub fn new(generator: Arc<TextGenerator>) -> Self {
        Self { generator }
    }

    fn chat_params() -> GenerationParams {
        GenerationParams {
            max_new_tokens: 150,
            temperature: 0.7,
            top_p: Some(0.9),
            do_sample: true,
        }
    }

    fn description_params() -> GenerationParams {
        GenerationParams {
            max_new_tokens: 100,
            temperature: 0.8,
            top_p: None,
            do_sample: true,
        }
    }

    pub async fn chat(
        &self,
        message: &str,
        history: &[ConversationTurn],
        location_name: Option<&str>,
    ) -> ChatReply {
        let prompt = chat_prompt(message, history, location_name);

        let reply = match self
            .generator
            .generate("chat", &prompt, &Self::chat_params())
            .await
        {
            Ok(text) if text.chars().count() >= MIN_CHAT_REPLY_CHARS => text,
            Ok(text) => {
                tracing::warn!(reply_len = text.len(), "Generated chat reply too short, using fallback");
                fallback::chat_reply(message, location_name)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Chat generation failed, using fallback");
                fallback::chat_reply(message, location_name)
            }
        };

        let suggestions = extract_suggestions(&reply);
        ChatReply { reply, suggestions }
    }

    pub async fn describe(
        &self,
        poi_name: &str,
        poi_type: &str,
        location: Option<&str>,
    ) -> PoiDescription {
        let prompt = description_prompt(poi_name, poi_type, location);

        match self
            .generator
            .generate("describe", &prompt, &Self::description_params())
            .await
        {
            Ok(description) if description.chars().count() >= MIN_DESCRIPTION_CHARS => {
                let highlights = extract_highlights(poi_type, &description);
                PoiDescription {
                    description,
                    highlights,
                }
            }
            Ok(description) => {
                tracing::warn!(
                    description_len = description.len(),
                    poi_type,
                    "Generated description too short, using fallback"
                );
                fallback::poi_description(poi_name, poi_type)
            }
            Err(e) => {
                tracing::warn!(error = %e, poi_type, "Description generation failed, using fallback");
                fallback::poi_description(poi_name, poi_type)
            }
        }
    }
}

fn conversation_context(history: &[ConversationTurn]) -> String {
    if history.is_empty() {
        return "No previous conversation.".to_string();
    }

    let start = history.len().saturating_sub(CONTEXT_TURNS);
    history[start..]
        .iter()
        .map(|turn| format!("{}: {}\n", capitalize(&turn.role), turn.content))
        .collect()
}

fn chat_prompt(message: &str, history: &[ConversationTurn], location_name: Option<&str>) -> String {
    format!(
        "You are a helpful travel assistant for Vietnam.\n\
         User location: {}\n\
         \n\
         Previous conversation:\n\
         {}\n\
         \n\
         User: {}\n\
         Assistant:",
        location_name.unwrap_or("Unknown"),
        conversation_context(history),
        message
    )
}

fn description_prompt(poi_name: &str, poi_type: &str, location: Option<&str>) -> String {
    format!(
        "Generate a short travel description for this place in Vietnam:\n\
         Name: {}\n\
         Type: {}\n\
         Location: {}\n\
         \n\
         Description (2-3 sentences):",
        poi_name,
        poi_type,
        location.unwrap_or("Vietnam")
    )
}
