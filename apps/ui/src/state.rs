//! UI state machine — every piece of interaction state lives in one value and
//! mutates only through [`Msg`] transitions. Transitions are pure except for
//! logging; anything that needs the network comes back out as a [`Command`]
//! for the event loop to execute.

use serde_json::Value;
use tracing::debug;

/// Which input panel is active. Exactly one is active at any time — the enum
/// makes the exclusivity invariant structural rather than something to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Text,
    Pdf,
}

/// The focused input within the active panel. `Resume`/`Jd` mean the text
/// areas on the text panel and the path fields on the PDF panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Resume,
    Jd,
}

/// The typed outcome of one submission. The renderer must handle both
/// variants — there is no silent failure path.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Success(Value),
    Error(String),
}

#[derive(Debug, PartialEq)]
pub enum Msg {
    SwitchPanel(Panel),
    FocusNext,
    Insert(char),
    Enter,
    Backspace,
    Submit,
    Completed { generation: u64, outcome: SubmitOutcome },
    Quit,
}

/// A side effect the state machine asks the event loop to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SubmitText {
        generation: u64,
        resume_text: String,
        jd_text: String,
    },
    SubmitPdf {
        generation: u64,
        resume_path: String,
        jd_path: String,
    },
}

#[derive(Debug)]
pub struct UiState {
    pub panel: Panel,
    pub focus: Field,
    pub resume_text: String,
    pub jd_text: String,
    pub resume_path: String,
    pub jd_path: String,
    /// Monotonic submission counter. Only the completion carrying the latest
    /// generation may update the display; overlapping submissions are allowed
    /// but stale responses are dropped.
    pub generation: u64,
    pub in_flight: bool,
    /// Last displayed outcome. `None` until the first submission completes —
    /// the result pane stays hidden until then.
    pub outcome: Option<SubmitOutcome>,
    /// Transient status line (submission progress, validation warnings).
    pub status: Option<String>,
    pub running: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            panel: Panel::Text,
            focus: Field::Resume,
            resume_text: String::new(),
            jd_text: String::new(),
            resume_path: String::new(),
            jd_path: String::new(),
            generation: 0,
            in_flight: false,
            outcome: None,
            status: None,
            running: true,
        }
    }
}

impl UiState {
    pub fn apply(&mut self, msg: Msg) -> Option<Command> {
        match msg {
            Msg::SwitchPanel(panel) => {
                self.panel = panel;
                self.focus = Field::Resume;
                None
            }
            Msg::FocusNext => {
                self.focus = match self.focus {
                    Field::Resume => Field::Jd,
                    Field::Jd => Field::Resume,
                };
                None
            }
            Msg::Insert(c) => {
                self.focused_buffer_mut().push(c);
                None
            }
            Msg::Backspace => {
                self.focused_buffer_mut().pop();
                None
            }
            Msg::Enter => match self.panel {
                // Multi-line text entry; Enter only submits on the PDF panel,
                // where the fields are single-line paths.
                Panel::Text => {
                    self.focused_buffer_mut().push('\n');
                    None
                }
                Panel::Pdf => self.apply(Msg::Submit),
            },
            Msg::Submit => self.submit(),
            Msg::Completed { generation, outcome } => {
                self.complete(generation, outcome);
                None
            }
            Msg::Quit => {
                self.running = false;
                None
            }
        }
    }

    fn submit(&mut self) -> Option<Command> {
        match self.panel {
            // No client-side emptiness validation for text — the backend
            // owns that check.
            Panel::Text => {
                let generation = self.begin("/match");
                Some(Command::SubmitText {
                    generation,
                    resume_text: self.resume_text.clone(),
                    jd_text: self.jd_text.clone(),
                })
            }
            Panel::Pdf => {
                if self.resume_path.trim().is_empty() || self.jd_path.trim().is_empty() {
                    self.status = Some("Please select both PDF files".to_string());
                    return None;
                }
                let generation = self.begin("/match-pdf");
                Some(Command::SubmitPdf {
                    generation,
                    resume_path: self.resume_path.clone(),
                    jd_path: self.jd_path.clone(),
                })
            }
        }
    }

    fn begin(&mut self, endpoint: &str) -> u64 {
        self.generation += 1;
        self.in_flight = true;
        self.status = Some(format!("Submitting to {endpoint}..."));
        self.generation
    }

    fn complete(&mut self, generation: u64, outcome: SubmitOutcome) {
        if generation != self.generation {
            debug!(generation, latest = self.generation, "dropping stale submission result");
            return;
        }
        self.outcome = Some(outcome);
        self.in_flight = false;
        self.status = None;
    }

    fn focused_buffer_mut(&mut self) -> &mut String {
        match (self.panel, self.focus) {
            (Panel::Text, Field::Resume) => &mut self.resume_text,
            (Panel::Text, Field::Jd) => &mut self.jd_text,
            (Panel::Pdf, Field::Resume) => &mut self.resume_path,
            (Panel::Pdf, Field::Jd) => &mut self.jd_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn type_str(state: &mut UiState, s: &str) {
        for c in s.chars() {
            state.apply(Msg::Insert(c));
        }
    }

    #[test]
    fn starts_on_text_panel_with_resume_focused() {
        let state = UiState::default();
        assert_eq!(state.panel, Panel::Text);
        assert_eq!(state.focus, Field::Resume);
        assert!(state.outcome.is_none());
    }

    #[test]
    fn panel_switch_is_exclusive_and_resets_focus() {
        let mut state = UiState::default();
        state.apply(Msg::FocusNext);
        assert_eq!(state.focus, Field::Jd);

        state.apply(Msg::SwitchPanel(Panel::Pdf));
        assert_eq!(state.panel, Panel::Pdf);
        assert_eq!(state.focus, Field::Resume);

        state.apply(Msg::SwitchPanel(Panel::Text));
        state.apply(Msg::SwitchPanel(Panel::Pdf));
        state.apply(Msg::SwitchPanel(Panel::Pdf));
        assert_eq!(state.panel, Panel::Pdf);
    }

    #[test]
    fn typing_targets_the_focused_buffer() {
        let mut state = UiState::default();
        type_str(&mut state, "rust");
        state.apply(Msg::FocusNext);
        type_str(&mut state, "jd");
        state.apply(Msg::Backspace);

        assert_eq!(state.resume_text, "rust");
        assert_eq!(state.jd_text, "j");

        state.apply(Msg::SwitchPanel(Panel::Pdf));
        type_str(&mut state, "/tmp/resume.pdf");
        assert_eq!(state.resume_path, "/tmp/resume.pdf");
        assert_eq!(state.resume_text, "rust"); // buffers survive panel switches
    }

    #[test]
    fn enter_is_newline_on_text_panel() {
        let mut state = UiState::default();
        type_str(&mut state, "line one");
        let cmd = state.apply(Msg::Enter);
        assert_eq!(cmd, None);
        assert_eq!(state.resume_text, "line one\n");
    }

    #[test]
    fn text_submit_snapshots_both_fields() {
        let mut state = UiState::default();
        type_str(&mut state, "R");
        state.apply(Msg::FocusNext);
        type_str(&mut state, "J");

        let cmd = state.apply(Msg::Submit);
        assert_eq!(
            cmd,
            Some(Command::SubmitText {
                generation: 1,
                resume_text: "R".to_string(),
                jd_text: "J".to_string(),
            })
        );
        assert!(state.in_flight);
    }

    #[test]
    fn text_submit_allows_empty_fields() {
        let mut state = UiState::default();
        let cmd = state.apply(Msg::Submit);
        assert!(matches!(cmd, Some(Command::SubmitText { .. })));
    }

    #[test]
    fn pdf_submit_without_both_files_warns_and_sends_nothing() {
        let mut state = UiState::default();
        state.apply(Msg::SwitchPanel(Panel::Pdf));
        type_str(&mut state, "/tmp/resume.pdf"); // jd path left empty

        let cmd = state.apply(Msg::Submit);
        assert_eq!(cmd, None);
        assert_eq!(state.generation, 0);
        assert!(!state.in_flight);
        assert_eq!(state.status.as_deref(), Some("Please select both PDF files"));
    }

    #[test]
    fn pdf_enter_submits_when_both_paths_present() {
        let mut state = UiState::default();
        state.apply(Msg::SwitchPanel(Panel::Pdf));
        type_str(&mut state, "/tmp/resume.pdf");
        state.apply(Msg::FocusNext);
        type_str(&mut state, "/tmp/jd.pdf");

        let cmd = state.apply(Msg::Enter);
        assert_eq!(
            cmd,
            Some(Command::SubmitPdf {
                generation: 1,
                resume_path: "/tmp/resume.pdf".to_string(),
                jd_path: "/tmp/jd.pdf".to_string(),
            })
        );
    }

    #[test]
    fn completion_updates_display_and_clears_in_flight() {
        let mut state = UiState::default();
        state.apply(Msg::Submit);

        state.apply(Msg::Completed {
            generation: 1,
            outcome: SubmitOutcome::Success(json!({"score": 0.87})),
        });
        assert_eq!(
            state.outcome,
            Some(SubmitOutcome::Success(json!({"score": 0.87})))
        );
        assert!(!state.in_flight);
        assert_eq!(state.status, None);
    }

    #[test]
    fn only_the_latest_generation_updates_the_display() {
        let mut state = UiState::default();
        state.apply(Msg::Submit); // generation 1
        state.apply(Msg::Submit); // generation 2

        // First response arrives while a newer request is pending: dropped.
        state.apply(Msg::Completed {
            generation: 1,
            outcome: SubmitOutcome::Success(json!({"from": "first"})),
        });
        assert_eq!(state.outcome, None);
        assert!(state.in_flight);

        state.apply(Msg::Completed {
            generation: 2,
            outcome: SubmitOutcome::Success(json!({"from": "second"})),
        });
        assert_eq!(
            state.outcome,
            Some(SubmitOutcome::Success(json!({"from": "second"})))
        );

        // A straggler from generation 1 after the fact is also dropped.
        state.apply(Msg::Completed {
            generation: 1,
            outcome: SubmitOutcome::Error("late failure".to_string()),
        });
        assert_eq!(
            state.outcome,
            Some(SubmitOutcome::Success(json!({"from": "second"})))
        );
    }

    #[test]
    fn error_outcome_is_displayed_not_swallowed() {
        let mut state = UiState::default();
        state.apply(Msg::Submit);
        state.apply(Msg::Completed {
            generation: 1,
            outcome: SubmitOutcome::Error("connection refused".to_string()),
        });
        assert_eq!(
            state.outcome,
            Some(SubmitOutcome::Error("connection refused".to_string()))
        );
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut state = UiState::default();
        state.apply(Msg::Quit);
        assert!(!state.running);
    }
}
