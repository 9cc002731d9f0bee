//! Opaque registration progress echoed between client and server

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-owned progress blob.
///
/// The client never interprets it beyond the display helpers below; it is
/// stored as received and sent back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context(Value);

impl Context {
    #[cfg(test)]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    #[cfg(test)]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Name the user originally typed before suggestions were offered
    pub fn original_name(&self) -> Option<&str> {
        non_empty(self.0.get("original_name"))
    }

    /// Partner organisation recorded for the event, if any
    pub fn partner_name(&self) -> Option<&str> {
        non_empty(
            self.0
                .get("hackathon_details")
                .and_then(|details| details.get("drillPartnerName")),
        )
    }
}

fn non_empty(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partner_name_reads_nested_details() {
        let ctx = Context::new(json!({
            "hackathon_details": { "drillPartnerName": "Acme Labs" }
        }));
        assert_eq!(ctx.partner_name(), Some("Acme Labs"));
        assert_eq!(ctx.original_name(), None);
    }

    #[test]
    fn test_blank_fields_are_absent() {
        let ctx = Context::new(json!({
            "original_name": "  ",
            "hackathon_details": { "drillPartnerName": null }
        }));
        assert_eq!(ctx.original_name(), None);
        assert_eq!(ctx.partner_name(), None);
    }

    #[test]
    fn test_round_trips_unmodified() {
        let raw = json!({ "original_name": "Hack Day", "step": 3, "extra": [1, 2] });
        let ctx: Context = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&ctx).unwrap(), raw);
    }
}
