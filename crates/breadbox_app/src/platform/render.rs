use std::fmt::Write as _;

use breadbox_core::{AppViewModel, EntryKind};

/// Renders the view model to a text block, transcript first, recipe list
/// after. The terminal surface always shows the transcript tail, which
/// satisfies `stick_to_latest` without any scrolling work.
pub(crate) fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    for entry in &view.transcript {
        match entry.kind {
            EntryKind::User { .. } => {
                let _ = writeln!(out, "You: {}", entry.text);
            }
            EntryKind::Bot { .. } => {
                let _ = writeln!(out, "Bot: {}", entry.text);
            }
            EntryKind::TypingIndicator { .. } => {
                let _ = writeln!(out, "Bot is typing . . .");
            }
            EntryKind::Error { .. } => {
                let _ = writeln!(out, "[error] {} - try sending again", entry.text);
            }
        }
    }

    if !view.cards.is_empty() {
        let _ = writeln!(out, "Recipes:");
        let mut any_visible = false;
        for card in &view.cards {
            if card.visible {
                any_visible = true;
                let _ = writeln!(out, "  - {}", card.title);
            }
        }
        if !any_visible {
            let _ = writeln!(out, "  (no recipes match)");
        }
    }

    out
}
