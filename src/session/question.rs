//! Question tags and the quick-reply event types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag naming the field the server expects next.
///
/// The server owns this vocabulary and may introduce tags at any time, so
/// anything unrecognised is carried through as [`QuestionTag::Other`] and
/// handled as plain free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionTag {
    /// `drillSubCategory`: pick the kind of event
    EventType,
    /// `drillName`
    DrillName,
    /// `drillName_selection`: pick one of the suggested names
    DrillNameSelection,
    /// `hasPartner`
    HasPartner,
    /// `partnerUrl`
    PartnerUrl,
    Other(String),
}

impl QuestionTag {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionTag::EventType => "drillSubCategory",
            QuestionTag::DrillName => "drillName",
            QuestionTag::DrillNameSelection => "drillName_selection",
            QuestionTag::HasPartner => "hasPartner",
            QuestionTag::PartnerUrl => "partnerUrl",
            QuestionTag::Other(tag) => tag,
        }
    }

    pub fn is_event_type(&self) -> bool {
        matches!(self, QuestionTag::EventType)
    }
}

impl From<&str> for QuestionTag {
    fn from(tag: &str) -> Self {
        match tag {
            "drillSubCategory" => QuestionTag::EventType,
            "drillName" => QuestionTag::DrillName,
            "drillName_selection" => QuestionTag::DrillNameSelection,
            "hasPartner" => QuestionTag::HasPartner,
            "partnerUrl" => QuestionTag::PartnerUrl,
            other => QuestionTag::Other(other.to_string()),
        }
    }
}

impl From<String> for QuestionTag {
    fn from(tag: String) -> Self {
        match QuestionTag::from(tag.as_str()) {
            QuestionTag::Other(_) => QuestionTag::Other(tag),
            known => known,
        }
    }
}

impl From<QuestionTag> for String {
    fn from(tag: QuestionTag) -> Self {
        match tag {
            QuestionTag::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for QuestionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed set of event types offered as quick replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Workshop,
    Webinar,
    Masterclass,
    Hackathon,
    Bootcamp,
    Conference,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::Workshop,
        EventType::Webinar,
        EventType::Masterclass,
        EventType::Hackathon,
        EventType::Bootcamp,
        EventType::Conference,
    ];

    /// Label shown on the button and sent verbatim as the user message
    pub fn label(self) -> &'static str {
        match self {
            EventType::Workshop => "WORKSHOP",
            EventType::Webinar => "WEBINAR",
            EventType::Masterclass => "MASTERCLASS",
            EventType::Hackathon => "HACKATHON",
            EventType::Bootcamp => "BOOTCAMP",
            EventType::Conference => "CONFERENCE",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|event_type| event_type.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
