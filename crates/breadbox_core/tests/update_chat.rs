use std::sync::Once;

use breadbox_core::{update, AppState, ChatEntry, Effect, EntryKind, Msg, ReplyFailure};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(widget_logging::initialize_for_tests);
}

fn send(state: AppState, text: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::DraftChanged(text.to_string()));
    update(state, Msg::SendClicked)
}

fn bot_texts(transcript: &[ChatEntry]) -> Vec<&str> {
    transcript
        .iter()
        .filter(|entry| matches!(entry.kind, EntryKind::Bot { .. }))
        .map(|entry| entry.text.as_str())
        .collect()
}

#[test]
fn send_trims_clears_draft_and_emits_one_effect() {
    init_logging();
    let state = AppState::new();

    let (mut next, effects) = send(state, "  what can I make with apples?  ");
    let view = next.view();

    assert_eq!(view.draft, "");
    assert_eq!(view.transcript.len(), 2);
    assert_eq!(
        view.transcript[0],
        ChatEntry {
            text: "what can I make with apples?".to_string(),
            kind: EntryKind::User { is_new: true },
        }
    );
    assert_eq!(
        view.transcript[1].kind,
        EntryKind::TypingIndicator { request_id: 1 }
    );
    assert_eq!(view.pending_replies, 1);
    assert!(view.stick_to_latest);
    assert!(next.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::SendChat {
            request_id: 1,
            message: "what can I make with apples?".to_string(),
        }]
    );
}

#[test]
fn whitespace_only_send_is_noop() {
    init_logging();
    let state = AppState::new();

    let (mut next, effects) = send(state, "   \t ");

    assert!(next.view().transcript.is_empty());
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn success_removes_indicator_before_appending_bot_entry() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = send(state, "hello");

    let (next, effects) = update(
        state,
        Msg::ReplyArrived {
            request_id: 1,
            result: Ok("Hi! Ask me about a recipe.".to_string()),
        },
    );
    let view = next.view();

    assert!(effects.is_empty());
    assert_eq!(view.pending_replies, 0);
    assert_eq!(view.transcript.len(), 2);
    assert!(matches!(view.transcript[0].kind, EntryKind::User { .. }));
    assert_eq!(
        view.transcript[1],
        ChatEntry {
            text: "Hi! Ask me about a recipe.".to_string(),
            kind: EntryKind::Bot { is_new: true },
        }
    );
}

#[test]
fn failure_turns_indicator_into_error_entry() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = send(state, "hello");

    let (mut next, _effects) = update(
        state,
        Msg::ReplyArrived {
            request_id: 1,
            result: Err(ReplyFailure::Timeout),
        },
    );
    let view = next.view();

    assert_eq!(view.pending_replies, 0);
    assert_eq!(view.transcript.len(), 2);
    assert_eq!(
        view.transcript[1],
        ChatEntry {
            text: "request timed out".to_string(),
            kind: EntryKind::Error { request_id: 1 },
        }
    );
    assert!(next.consume_dirty());
}

#[test]
fn settlement_for_unknown_request_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (mut state, _effects) = send(state, "hello");
    assert!(state.consume_dirty());

    let (mut next, effects) = update(
        state,
        Msg::ReplyArrived {
            request_id: 99,
            result: Ok("stray".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert!(bot_texts(&next.view().transcript).is_empty());
}

#[test]
fn duplicate_settlement_does_not_duplicate_reply() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = send(state, "hello");

    let settle = Msg::ReplyArrived {
        request_id: 1,
        result: Ok("once".to_string()),
    };
    let (state, _effects) = update(state, settle.clone());
    let (next, _effects) = update(state, settle);

    assert_eq!(bot_texts(&next.view().transcript), vec!["once"]);
}

#[test]
fn interleaved_sends_each_settle_exactly_once() {
    init_logging();
    let state = AppState::new();
    let (state, first) = send(state, "first question");
    let (state, second) = send(state, "second question");
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(state.view().pending_replies, 2);

    // Second reply lands before the first: standard network race.
    let (state, _effects) = update(
        state,
        Msg::ReplyArrived {
            request_id: 2,
            result: Ok("second answer".to_string()),
        },
    );
    assert_eq!(state.view().pending_replies, 1);

    let (next, _effects) = update(
        state,
        Msg::ReplyArrived {
            request_id: 1,
            result: Ok("first answer".to_string()),
        },
    );
    let view = next.view();

    assert_eq!(view.pending_replies, 0);
    assert_eq!(
        bot_texts(&view.transcript),
        vec!["second answer", "first answer"]
    );
}

#[test]
fn tick_ages_out_new_markers_without_render() {
    init_logging();
    let state = AppState::new();
    let (mut state, _effects) = send(state, "hello");
    assert!(state.consume_dirty());

    let (mut next, effects) = update(state, Msg::Tick);

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    let view = next.view();
    assert!(!view.stick_to_latest);
    assert_eq!(view.transcript[0].kind, EntryKind::User { is_new: false });
}
