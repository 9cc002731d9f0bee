//! Property-based tests for the router and reducer
//!
//! These tests verify key invariants hold across arbitrary reply sequences.

use super::*;
use crate::session::{Context, EventType, QuestionTag, SessionStore};
use crate::transport::ChatReply;
use proptest::prelude::*;
use serde_json::json;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_question() -> impl Strategy<Value = Option<QuestionTag>> {
    prop_oneof![
        Just(None),
        Just(Some(QuestionTag::EventType)),
        Just(Some(QuestionTag::DrillName)),
        Just(Some(QuestionTag::DrillNameSelection)),
        Just(Some(QuestionTag::HasPartner)),
        Just(Some(QuestionTag::PartnerUrl)),
        "[a-z][a-zA-Z_]{2,12}".prop_map(|tag| Some(QuestionTag::from(tag))),
    ]
}

fn arb_context() -> impl Strategy<Value = Option<Context>> {
    prop_oneof![
        Just(None),
        "[A-Za-z ]{0,12}".prop_map(|name| Some(Context::new(json!({ "original_name": name })))),
        "[A-Za-z ]{0,12}".prop_map(|partner| Some(Context::new(json!({
            "hackathon_details": { "drillPartnerName": partner }
        })))),
    ]
}

fn arb_link() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "https://[a-z]{1,8}\\.example/[a-z0-9]{1,8}".prop_map(Some),
    ]
}

prop_compose! {
    fn arb_reply()(
        message in "[A-Za-z0-9 ?!.]{0,40}",
        session_id in proptest::option::of("[a-z0-9]{6}"),
        current_question in arb_question(),
        registration_complete in any::<bool>(),
        suggestions in proptest::collection::vec("[A-Za-z ]{1,12}", 0..4),
        requires_selection in any::<bool>(),
        event_link in arb_link(),
        context in arb_context(),
    ) -> ChatReply {
        ChatReply {
            message,
            session_id,
            current_question,
            registration_complete,
            suggestions,
            requires_selection,
            event_link,
            context,
        }
    }
}

proptest! {
    #[test]
    fn prop_transcript_is_append_only(replies in proptest::collection::vec(arb_reply(), 1..12)) {
        let mut store = SessionStore::fresh(None, true);

        for reply in replies {
            let before = store.transcript().to_vec();
            let outcome = apply(&mut store, reply);

            prop_assert!(!outcome.appended.is_empty());
            prop_assert_eq!(store.transcript().len(), before.len() + outcome.appended.len());
            prop_assert_eq!(&store.transcript()[..before.len()], before.as_slice());
            prop_assert_eq!(&store.transcript()[before.len()..], outcome.appended.as_slice());
        }
    }

    #[test]
    fn prop_no_register_another_prompt_unless_complete(reply in arb_reply()) {
        let complete = reply.registration_complete;
        let mut store = SessionStore::fresh(None, true);
        let outcome = apply(&mut store, reply);

        let prompted = outcome
            .appended
            .iter()
            .any(|m| m.content == reducer::REGISTER_ANOTHER_PROMPT);
        prop_assert_eq!(prompted, complete);
        if complete {
            let last = outcome.appended.last().map(|m| m.content.as_str());
            prop_assert_eq!(last, Some(reducer::REGISTER_ANOTHER_PROMPT));
        }
    }

    #[test]
    fn prop_event_link_always_echoed(reply in arb_reply()) {
        let link = reply.event_link.clone();
        let mut store = SessionStore::fresh(None, true);
        let outcome = apply(&mut store, reply);

        if let Some(link) = link {
            let success = &outcome.appended[1];
            prop_assert!(success.content.starts_with(reducer::SUCCESS_MESSAGE));
            prop_assert!(success.content.contains(&link));
        } else {
            prop_assert!(outcome
                .appended
                .iter()
                .all(|m| !m.content.starts_with(reducer::SUCCESS_MESSAGE)));
        }
    }

    #[test]
    fn prop_quick_replies_never_come_back(
        replies in proptest::collection::vec(arb_reply(), 1..12),
        clicks in proptest::collection::vec(any::<bool>(), 12),
    ) {
        let mut store = SessionStore::fresh(None, true);
        let mut hidden = false;

        for (reply, click) in replies.into_iter().zip(clicks) {
            if click {
                if let Ok(result) = route(&store, Event::quick_reply(EventType::Workshop)) {
                    if result.effects.contains(&Effect::HideQuickReplies) {
                        store.hide_quick_replies();
                    }
                }
            }
            apply(&mut store, reply);

            if hidden {
                prop_assert!(!store.quick_replies_enabled());
                prop_assert!(!store.quick_replies_visible());
            }
            hidden = !store.quick_replies_enabled();
        }
    }

    #[test]
    fn prop_routing_never_mutates_or_sends_on_negative(reply in arb_reply(), answer in "[nN]|[nN][oO]") {
        let mut reply = reply;
        reply.registration_complete = true;
        let mut store = SessionStore::fresh(None, true);
        apply(&mut store, reply);
        let snapshot = store.clone();

        let result = route(&store, Event::text(answer)).unwrap();

        prop_assert!(!result.needs_network());
        prop_assert_eq!(store, snapshot);
    }

    #[test]
    fn prop_session_id_sticks_once_assigned(replies in proptest::collection::vec(arb_reply(), 1..12)) {
        let mut store = SessionStore::fresh(None, true);
        let mut last_seen: Option<String> = None;

        for reply in replies {
            if let Some(id) = &reply.session_id {
                last_seen = Some(id.clone());
            }
            apply(&mut store, reply);
            prop_assert_eq!(store.session_id(), last_seen.as_deref());
        }
    }
}
