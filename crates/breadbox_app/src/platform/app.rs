use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use breadbox_core::{update, AppState, AppViewModel, Msg};
use widget_logging::widget_info;

use super::effects::EffectRunner;
use super::{catalog, config, logging, render};

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let settings = config::transport_settings_from_env()?;
    widget_info!("Chat endpoint: {}", settings.endpoint);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(settings, msg_tx.clone());

    let quit = Arc::new(AtomicBool::new(false));
    spawn_input_reader(msg_tx, quit.clone());

    let mut state = AppState::new();
    // The recipes page ships its own card set; a page without the search
    // surface simply never sends this.
    if let Some(view) = dispatch(&mut state, Msg::CardsLoaded(catalog::demo_cards()), &runner) {
        present(&view)?;
    }

    while let Ok(msg) = msg_rx.recv() {
        if quit.load(Ordering::Relaxed) {
            break;
        }
        if let Some(view) = dispatch(&mut state, msg, &runner) {
            present(&view)?;
            // Age out the new-entry markers that render just consumed.
            let _ = dispatch(&mut state, Msg::Tick, &runner);
        }
    }

    Ok(())
}

fn dispatch(state_slot: &mut AppState, msg: Msg, runner: &EffectRunner) -> Option<AppViewModel> {
    let state = std::mem::take(state_slot);
    let (mut state, effects) = update(state, msg);
    runner.enqueue(effects);
    let view = state.view();
    let was_dirty = state.consume_dirty();
    *state_slot = state;
    was_dirty.then_some(view)
}

fn present(view: &AppViewModel) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", render::render(view))?;
    stdout.flush()
}

fn spawn_input_reader(msg_tx: mpsc::Sender<Msg>, quit: Arc<AtomicBool>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_line(&line) {
                LineCommand::Quit => break,
                LineCommand::Filter(query) => {
                    if msg_tx.send(Msg::FilterChanged(query)).is_err() {
                        break;
                    }
                }
                LineCommand::Chat(text) => {
                    // Typing then submitting, as the input box would.
                    if msg_tx.send(Msg::DraftChanged(text)).is_err() {
                        break;
                    }
                    if msg_tx.send(Msg::SendClicked).is_err() {
                        break;
                    }
                }
            }
        }
        quit.store(true, Ordering::Relaxed);
        // Wake the main loop so it can observe the quit flag.
        let _ = msg_tx.send(Msg::NoOp);
    });
}

enum LineCommand {
    /// Send the line as a chat message (the core no-ops on blank input).
    Chat(String),
    /// `/find <query>` drives the recipe filter.
    Filter(String),
    /// `/quit` or EOF.
    Quit,
}

fn parse_line(line: &str) -> LineCommand {
    let trimmed = line.trim();
    if trimmed == "/quit" {
        return LineCommand::Quit;
    }
    if let Some(rest) = trimmed.strip_prefix("/find") {
        if rest.is_empty() || rest.starts_with(' ') {
            return LineCommand::Filter(rest.trim().to_string());
        }
    }
    LineCommand::Chat(line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_prefix_yields_filter_query() {
        assert!(matches!(
            parse_line("/find apple pie"),
            LineCommand::Filter(query) if query == "apple pie"
        ));
    }

    #[test]
    fn bare_find_clears_the_filter() {
        assert!(matches!(
            parse_line("/find"),
            LineCommand::Filter(query) if query.is_empty()
        ));
    }

    #[test]
    fn plain_line_is_chat_input() {
        assert!(matches!(
            parse_line("what can I bake today?"),
            LineCommand::Chat(text) if text == "what can I bake today?"
        ));
    }

    #[test]
    fn quit_command_is_recognized() {
        assert!(matches!(parse_line("  /quit  "), LineCommand::Quit));
    }
}
