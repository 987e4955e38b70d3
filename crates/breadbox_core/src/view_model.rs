use crate::ChatEntry;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub draft: String,
    pub transcript: Vec<ChatEntry>,
    /// Live typing indicators, one per in-flight request.
    pub pending_replies: usize,
    /// True when an entry was appended since the last tick; a scrolling
    /// surface pins the transcript to its tail when set.
    pub stick_to_latest: bool,
    pub cards: Vec<CardRowView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRowView {
    pub title: String,
    pub visible: bool,
}
