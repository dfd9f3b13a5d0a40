//! HTTP request and response bodies.

use crate::recommendation::{Preferences, Recommendation};
use crate::services::{ChatReply, ConversationTurn, PoiDescription};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    #[validate(nested)]
    pub location: Option<ChatLocation>,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    pub role: Option<String>,
    pub content: Option<String>,
}

impl From<ChatMessage> for ConversationTurn {
    fn from(msg: ChatMessage) -> Self {
        Self {
            role: msg.role.unwrap_or_else(|| "user".to_string()),
            content: msg.content.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChatLocation {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: Option<f64>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub suggestions: Vec<String>,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            reply: reply.reply,
            suggestions: reply.suggestions,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RecommendRequest {
    pub user_history: Vec<String>,
    #[validate(nested)]
    pub current_location: Coordinates,
    #[serde(default)]
    pub preferences: Option<Preferences>,
}

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct Coordinates {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DescribeRequest {
    pub poi_name: String,
    pub poi_type: String,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DescribeResponse {
    pub description: String,
    pub highlights: Vec<String>,
}

impl From<PoiDescription> for DescribeResponse {
    fn from(d: PoiDescription) -> Self {
        Self {
            description: d.description,
            highlights: d.highlights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_minimal() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert!(req.history.is_empty());
        assert!(req.location.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_chat_message_defaults_role() {
        let msg: ChatMessage = serde_json::from_str(r#"{"content": "xin chào"}"#).unwrap();
        let turn = ConversationTurn::from(msg);
        assert_eq!(turn.role, "user");
        assert_eq!(turn.content, "xin chào");
    }

    #[test]
    fn test_out_of_range_coordinates_fail_validation() {
        let req: RecommendRequest = serde_json::from_str(
            r#"{"user_history": [], "current_location": {"lat": 95.0, "lon": 105.8}}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_recommend_request_with_preferences() {
        let req: RecommendRequest = serde_json::from_str(
            r#"{"user_history": ["cafe"], "current_location": {"lat": 21.03, "lon": 105.85}, "preferences": {"budget": "high"}}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(
            req.preferences.unwrap().budget,
            crate::recommendation::Budget::High
        );
    }

    #[test]
    fn test_chat_location_range_is_checked() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"message": "hi", "location": {"lat": 10.0, "lon": 200.0, "name": "?"}}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }
}
