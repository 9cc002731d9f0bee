//! Wire types for the chat service

use crate::session::{Context, QuestionTag};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub session_id: Option<String>,
    pub message: String,
    pub current_question: Option<QuestionTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

/// Structured reply from `POST /chat`.
///
/// Only `message` is required; everything else tolerates being absent or
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub current_question: Option<QuestionTag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub registration_complete: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggestions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requires_selection: bool,
    #[serde(default)]
    pub event_link: Option<String>,
    #[serde(default)]
    pub context: Option<Context>,
}

impl ChatReply {
    /// Plain reply carrying only assistant text
    #[cfg(test)]
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            session_id: None,
            current_question: None,
            registration_complete: false,
            suggestions: Vec::new(),
            requires_selection: false,
            event_link: None,
            context: None,
        }
    }

    /// Link to the registered event, ignoring blank values
    pub fn event_link(&self) -> Option<&str> {
        self.event_link
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_omits_context_when_absent() {
        let request = ChatRequest {
            session_id: None,
            message: String::new(),
            current_question: None,
            context: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({ "session_id": null, "message": "", "current_question": null })
        );
    }

    #[test]
    fn test_request_serializes_question_tag() {
        let request = ChatRequest {
            session_id: Some("abc".to_string()),
            message: "WORKSHOP".to_string(),
            current_question: Some(QuestionTag::EventType),
            context: Some(Context::new(json!({ "step": 1 }))),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["current_question"], "drillSubCategory");
        assert_eq!(value["context"], json!({ "step": 1 }));
    }

    #[test]
    fn test_full_reply_parses() {
        let reply: ChatReply = serde_json::from_value(json!({
            "session_id": "s-1",
            "message": "Pick a name",
            "current_question": "drillName_selection",
            "registration_complete": false,
            "suggestions": ["Hack Night", "Code Sprint"],
            "requires_selection": true,
            "event_link": null,
            "context": { "original_name": "hack" }
        }))
        .unwrap();

        assert_eq!(reply.session_id.as_deref(), Some("s-1"));
        assert_eq!(reply.current_question, Some(QuestionTag::DrillNameSelection));
        assert_eq!(reply.suggestions.len(), 2);
        assert!(reply.requires_selection);
        assert!(reply.event_link().is_none());
    }

    #[test]
    fn test_nulls_fall_back_to_defaults() {
        let reply: ChatReply = serde_json::from_value(json!({
            "message": "ok",
            "registration_complete": null,
            "suggestions": null,
            "requires_selection": null
        }))
        .unwrap();

        assert!(!reply.registration_complete);
        assert!(reply.suggestions.is_empty());
        assert!(!reply.requires_selection);
        assert!(reply.session_id.is_none());
    }

    #[test]
    fn test_missing_message_is_rejected() {
        let result = serde_json::from_value::<ChatReply>(json!({
            "session_id": "s-1",
            "current_question": "drillName"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_event_link_is_absent() {
        let mut reply = ChatReply::text("done");
        reply.event_link = Some("  ".to_string());
        assert!(reply.event_link().is_none());
    }
}
