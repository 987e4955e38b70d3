use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DraftChanged(text) => {
            state.set_draft(text);
            Vec::new()
        }
        Msg::SendClicked => match state.begin_send() {
            Some((request_id, message)) => vec![Effect::SendChat {
                request_id,
                message,
            }],
            None => Vec::new(),
        },
        Msg::ReplyArrived { request_id, result } => {
            state.settle_reply(request_id, result);
            Vec::new()
        }
        Msg::CardsLoaded(specs) => {
            state.load_cards(specs);
            Vec::new()
        }
        Msg::FilterChanged(query) => {
            state.apply_filter(&query);
            Vec::new()
        }
        Msg::Tick => {
            state.clear_new_flags();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
