//! Event loop: crossterm key events and submission completions flow over one
//! mpsc channel as [`Msg`] values; the state machine decides what happens and
//! hands back a [`Command`] when a request should go out.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::client::MatchClient;
use crate::state::{Command, Msg, Panel, SubmitOutcome, UiState};
use crate::ui;

pub struct App {
    state: UiState,
    client: Arc<MatchClient>,
    tx: UnboundedSender<Msg>,
}

impl App {
    pub fn new(client: Arc<MatchClient>, tx: UnboundedSender<Msg>) -> Self {
        Self {
            state: UiState::default(),
            client,
            tx,
        }
    }

    pub async fn run(
        mut self,
        terminal: &mut Terminal<impl Backend>,
        mut rx: UnboundedReceiver<Msg>,
    ) -> Result<()> {
        while self.state.running {
            terminal.draw(|frame| ui::draw(frame, &self.state))?;
            let Some(msg) = rx.recv().await else { break };
            if let Some(command) = self.state.apply(msg) {
                self.dispatch(command);
            }
        }
        Ok(())
    }

    /// Spawns the request as a task tagged with its generation. Overlapping
    /// submissions are allowed; the state machine drops stale completions.
    fn dispatch(&self, command: Command) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let (generation, result) = match command {
                Command::SubmitText {
                    generation,
                    resume_text,
                    jd_text,
                } => (generation, client.submit_text(&resume_text, &jd_text).await),
                Command::SubmitPdf {
                    generation,
                    resume_path,
                    jd_path,
                } => (
                    generation,
                    client
                        .submit_pdf(Path::new(&resume_path), Path::new(&jd_path))
                        .await,
                ),
            };
            let outcome = match result {
                Ok(value) => SubmitOutcome::Success(value),
                Err(e) => SubmitOutcome::Error(e.to_string()),
            };
            // Receiver gone means the UI already shut down.
            let _ = tx.send(Msg::Completed { generation, outcome });
        });
    }
}

/// Blocking crossterm reader on its own thread, forwarding mapped keys onto
/// the message bus. Exits when the receiver side is dropped.
pub fn spawn_input_thread(tx: UnboundedSender<Msg>) {
    std::thread::spawn(move || loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(_) => break,
        };
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(msg) = map_key(key) {
                if tx.send(msg).is_err() {
                    break;
                }
            }
        }
    });
}

pub fn map_key(key: KeyEvent) -> Option<Msg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Msg::Quit),
            KeyCode::Char('s') => Some(Msg::Submit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::F(1) => Some(Msg::SwitchPanel(Panel::Text)),
        KeyCode::F(2) => Some(Msg::SwitchPanel(Panel::Pdf)),
        KeyCode::Tab => Some(Msg::FocusNext),
        KeyCode::Enter => Some(Msg::Enter),
        KeyCode::Backspace => Some(Msg::Backspace),
        KeyCode::Esc => Some(Msg::Quit),
        KeyCode::Char(c) => Some(Msg::Insert(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_and_esc_quit() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Msg::Quit)
        );
        assert_eq!(map_key(plain(KeyCode::Esc)), Some(Msg::Quit));
    }

    #[test]
    fn ctrl_s_submits() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(Msg::Submit)
        );
    }

    #[test]
    fn function_keys_switch_panels() {
        assert_eq!(map_key(plain(KeyCode::F(1))), Some(Msg::SwitchPanel(Panel::Text)));
        assert_eq!(map_key(plain(KeyCode::F(2))), Some(Msg::SwitchPanel(Panel::Pdf)));
    }

    #[test]
    fn plain_characters_become_inserts() {
        assert_eq!(map_key(plain(KeyCode::Char('s'))), Some(Msg::Insert('s')));
        assert_eq!(map_key(plain(KeyCode::Char(' '))), Some(Msg::Insert(' ')));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(map_key(plain(KeyCode::F(12))), None);
        assert_eq!(map_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)), None);
    }
}
