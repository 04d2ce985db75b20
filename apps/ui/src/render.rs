//! Result rendering — turns a submit outcome into displayable text.
//! Pure pretty-printing; the shape of the backend's JSON is never interpreted.

use crate::state::SubmitOutcome;

pub fn render_outcome(outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::Success(value) => {
            let pretty =
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            sanitize(&pretty)
        }
        SubmitOutcome::Error(message) => sanitize(&format!("Request failed: {message}")),
    }
}

/// Replaces control characters (newline excepted) so a hostile response body
/// cannot smuggle terminal escape sequences into the result pane.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() && c != '\n' { '\u{FFFD}' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn score_response_pretty_prints_with_two_space_indent() {
        let outcome = SubmitOutcome::Success(json!({"score": 0.87}));
        assert_eq!(render_outcome(&outcome), "{\n  \"score\": 0.87\n}");
    }

    #[test]
    fn error_outcome_renders_as_marked_failure() {
        let outcome = SubmitOutcome::Error("connection refused".to_string());
        assert_eq!(
            render_outcome(&outcome),
            "Request failed: connection refused"
        );
    }

    #[test]
    fn nested_values_render_verbatim_without_interpretation() {
        let outcome = SubmitOutcome::Success(json!({
            "match_percentage": 72.5,
            "explanation": "strong overlap",
        }));
        let text = render_outcome(&outcome);
        assert!(text.contains("\"match_percentage\": 72.5"));
        assert!(text.contains("\"explanation\": \"strong overlap\""));
    }

    #[test]
    fn control_characters_are_neutralized() {
        let outcome = SubmitOutcome::Error("\x1b[2Jwiped".to_string());
        let text = render_outcome(&outcome);
        assert!(!text.contains('\x1b'));
        assert!(text.contains("wiped"));
    }

    #[test]
    fn newlines_survive_sanitization() {
        assert_eq!(sanitize("a\nb"), "a\nb");
    }
}
