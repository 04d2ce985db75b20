//! Ratatui layout: tabs row, the active input panel, the result pane, and a
//! one-line status footer.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};

use crate::render::render_outcome;
use crate::state::{Field, Panel, UiState};

pub fn draw(frame: &mut Frame, state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Percentage(40),
            Constraint::Length(1),
        ])
        .split(frame.size());

    draw_tabs(frame, state, chunks[0]);
    draw_inputs(frame, state, chunks[1]);
    draw_result(frame, state, chunks[2]);
    draw_footer(frame, state, chunks[3]);
}

fn draw_tabs(frame: &mut Frame, state: &UiState, area: Rect) {
    let selected = match state.panel {
        Panel::Text => 0,
        Panel::Pdf => 1,
    };
    let tabs = Tabs::new(vec!["Text [F1]", "PDF [F2]"])
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Resume / JD Matcher"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_inputs(frame: &mut Frame, state: &UiState, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (resume_title, jd_title, resume_value, jd_value) = match state.panel {
        Panel::Text => (
            "Resume text",
            "Job description text",
            &state.resume_text,
            &state.jd_text,
        ),
        Panel::Pdf => (
            "Resume PDF path",
            "Job description PDF path",
            &state.resume_path,
            &state.jd_path,
        ),
    };

    frame.render_widget(
        input_field(resume_title, resume_value, state.focus == Field::Resume),
        halves[0],
    );
    frame.render_widget(
        input_field(jd_title, jd_value, state.focus == Field::Jd),
        halves[1],
    );
}

fn input_field<'a>(title: &'a str, value: &'a str, focused: bool) -> Paragraph<'a> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Paragraph::new(value).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style),
    )
}

fn draw_result(frame: &mut Frame, state: &UiState, area: Rect) {
    // Hidden until the first submission completes.
    let Some(outcome) = &state.outcome else {
        return;
    };
    let title = if state.in_flight {
        "Result (updating...)"
    } else {
        "Result"
    };
    let paragraph = Paragraph::new(render_outcome(outcome))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, state: &UiState, area: Rect) {
    let paragraph = match &state.status {
        Some(status) => {
            Paragraph::new(status.as_str()).style(Style::default().fg(Color::Yellow))
        }
        None => Paragraph::new("Tab: switch field | Ctrl+S: submit | Ctrl+C: quit"),
    };
    frame.render_widget(paragraph, area);
}
