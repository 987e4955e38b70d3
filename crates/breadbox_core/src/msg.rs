#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the chat input box.
    DraftChanged(String),
    /// User submitted the current draft for sending.
    SendClicked,
    /// Gateway settled an in-flight chat request.
    ReplyArrived {
        request_id: crate::RequestId,
        result: Result<String, crate::ReplyFailure>,
    },
    /// Platform installed the recipe-card set (absent search surface never sends this).
    CardsLoaded(Vec<crate::CardSpec>),
    /// User edited the recipe search box.
    FilterChanged(String),
    /// UI/render tick to age out `is_new` markers.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
