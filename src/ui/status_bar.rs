//! Status line: timeline position, source file and the last message.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR};
use crate::app::App;

const KEY_HINTS: &str = "[ ] step · Home/End · r reload · q quit";

pub fn status_line(app: &App) -> Line<'static> {
    let position = if app.timeline.is_empty() {
        "No snapshots loaded".to_string()
    } else {
        format!(
            "Snapshot {}/{}",
            app.timeline.cursor() + 1,
            app.timeline.len()
        )
    };

    let mut spans = vec![Span::styled(
        format!(" {}", position),
        Style::default().fg(COLOR_ACCENT),
    )];
    if let Some(path) = &app.snapshot_path {
        spans.push(Span::styled(
            format!(" · {}", path.display()),
            Style::default().fg(COLOR_DIM),
        ));
    }

    let (message, style) = match &app.status {
        Some(status) if status.is_error() => {
            (status.text().to_string(), Style::default().fg(COLOR_ERROR))
        }
        Some(status) => (status.text().to_string(), Style::default()),
        None => (KEY_HINTS.to_string(), Style::default().fg(COLOR_DIM)),
    };
    spans.push(Span::raw("  "));
    spans.push(Span::styled(message, style));
    Line::from(spans)
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Paragraph::new(status_line(app)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::StatusMessage;
    use crate::models::Snapshot;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_empty_history() {
        let app = App::new(Vec::new(), None);
        assert_eq!(
            text(&status_line(&app)),
            format!(" No snapshots loaded  {}", KEY_HINTS)
        );
    }

    #[test]
    fn test_position_and_error() {
        let mut app = App::new(
            vec![Snapshot::default(), Snapshot::default()],
            Some("snaps.jsonl".into()),
        );
        app.status = Some(StatusMessage::Error("bad file".into()));
        let line = status_line(&app);
        assert_eq!(text(&line), " Snapshot 2/2 · snaps.jsonl  bad file");
        assert_eq!(line.spans.last().unwrap().style.fg, Some(COLOR_ERROR));
    }
}
