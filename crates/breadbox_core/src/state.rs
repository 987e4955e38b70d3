use std::fmt;

use crate::filter::{matches_query, CardSpec};
use crate::view_model::{AppViewModel, CardRowView};

pub type RequestId = u64;

/// Why a chat request failed to produce a reply.
///
/// Core-owned mirror of the gateway's failure taxonomy; the platform maps
/// transport errors into this before dispatching `Msg::ReplyArrived`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyFailure {
    Network,
    Timeout,
    HttpStatus(u16),
    MalformedReply,
}

impl fmt::Display for ReplyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyFailure::Network => write!(f, "network error"),
            ReplyFailure::Timeout => write!(f, "request timed out"),
            ReplyFailure::HttpStatus(code) => write!(f, "server returned status {code}"),
            ReplyFailure::MalformedReply => write!(f, "server reply was malformed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    User { is_new: bool },
    Bot { is_new: bool },
    /// Transient, removed when the correlated request settles.
    TypingIndicator { request_id: RequestId },
    Error { request_id: RequestId },
}

/// One rendered node of the transcript. Append-only; user/bot entries are
/// never mutated after append except aging out the `is_new` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub text: String,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub title: String,
    pub keywords: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    draft: String,
    transcript: Vec<ChatEntry>,
    next_request_id: RequestId,
    cards: Vec<RecipeCard>,
    query: String,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            draft: self.draft.clone(),
            transcript: self.transcript.clone(),
            pending_replies: self
                .transcript
                .iter()
                .filter(|entry| matches!(entry.kind, EntryKind::TypingIndicator { .. }))
                .count(),
            stick_to_latest: self.transcript.iter().any(|entry| {
                matches!(
                    entry.kind,
                    EntryKind::User { is_new: true } | EntryKind::Bot { is_new: true }
                )
            }),
            cards: self
                .cards
                .iter()
                .map(|card| CardRowView {
                    title: card.title.clone(),
                    visible: card.visible,
                })
                .collect(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due, resetting the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub(crate) fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Starts the send choreography for the current draft.
    ///
    /// A draft that trims to empty is a strict no-op and yields `None`.
    /// Otherwise the draft is cleared, a user entry and a typing indicator
    /// are appended in that order, and the allocated request id is returned.
    pub(crate) fn begin_send(&mut self) -> Option<(RequestId, String)> {
        let message = self.draft.trim().to_owned();
        if message.is_empty() {
            return None;
        }
        self.draft.clear();

        self.next_request_id += 1;
        let request_id = self.next_request_id;

        self.transcript.push(ChatEntry {
            text: message.clone(),
            kind: EntryKind::User { is_new: true },
        });
        self.transcript.push(ChatEntry {
            text: String::new(),
            kind: EntryKind::TypingIndicator { request_id },
        });
        self.dirty = true;
        Some((request_id, message))
    }

    /// Settles an in-flight request: drops its typing indicator, then appends
    /// the bot entry (or turns the indicator slot into an error entry).
    ///
    /// A request id with no live indicator (already settled, never issued) is
    /// ignored so a duplicate settlement can neither duplicate nor lose a
    /// reply.
    pub(crate) fn settle_reply(&mut self, request_id: RequestId, result: Result<String, ReplyFailure>) {
        let Some(slot) = self.transcript.iter().position(|entry| {
            entry.kind == EntryKind::TypingIndicator { request_id }
        }) else {
            return;
        };

        match result {
            Ok(reply) => {
                // Indicator out first, bot entry appended after, never the
                // other way around.
                self.transcript.remove(slot);
                self.transcript.push(ChatEntry {
                    text: reply,
                    kind: EntryKind::Bot { is_new: true },
                });
            }
            Err(failure) => {
                self.transcript[slot] = ChatEntry {
                    text: failure.to_string(),
                    kind: EntryKind::Error { request_id },
                };
            }
        }
        self.dirty = true;
    }

    /// Installs the card set, applying the current query to the new cards.
    pub(crate) fn load_cards(&mut self, specs: Vec<CardSpec>) {
        self.cards = specs
            .into_iter()
            .map(|spec| {
                let visible = matches_query(&self.query, &spec.title, &spec.keywords);
                RecipeCard {
                    title: spec.title,
                    keywords: spec.keywords,
                    visible,
                }
            })
            .collect();
        self.dirty = true;
    }

    /// Recomputes every card's visibility for the new query. With no cards
    /// installed this is a benign no-op.
    pub(crate) fn apply_filter(&mut self, query: &str) {
        self.query = query.to_owned();
        let mut changed = false;
        for card in &mut self.cards {
            let visible = matches_query(query, &card.title, &card.keywords);
            if card.visible != visible {
                card.visible = visible;
                changed = true;
            }
        }
        if changed {
            self.dirty = true;
        }
    }

    /// Ages out `is_new` markers. Deliberately does not mark the state dirty:
    /// the markers describe the render that already happened.
    pub(crate) fn clear_new_flags(&mut self) {
        for entry in &mut self.transcript {
            match &mut entry.kind {
                EntryKind::User { is_new } | EntryKind::Bot { is_new } => *is_new = false,
                EntryKind::TypingIndicator { .. } | EntryKind::Error { .. } => {}
            }
        }
    }
}
