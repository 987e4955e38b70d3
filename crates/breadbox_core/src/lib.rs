//! Breadbox core: pure state machine and view-model helpers.
mod effect;
mod filter;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{matches_query, CardSpec};
pub use msg::Msg;
pub use state::{AppState, ChatEntry, EntryKind, RecipeCard, ReplyFailure, RequestId};
pub use update::update;
pub use view_model::{AppViewModel, CardRowView};
