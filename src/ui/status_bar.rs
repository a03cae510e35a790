use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::app::{FormState, field_name};

/// Bottom status bar showing the focused field and the last status message.
pub struct StatusBar<'a> {
    pub form: &'a FormState,
}

impl<'a> StatusBar<'a> {
    pub fn new(form: &'a FormState) -> Self {
        Self { form }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        // Background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_style(bg_style);
        }

        let mut spans = Vec::new();

        let focus_style = Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        spans.push(Span::styled(
            format!(" {} ", field_name(self.form.focus).to_uppercase()),
            focus_style,
        ));
        spans.push(Span::styled(" F1 help ", bg_style));

        // Status message (right-aligned)
        if let Some(ref msg) = self.form.status_message {
            let left_width: usize = spans.iter().map(|s| s.width()).sum();
            let msg_width = Span::raw(msg.as_str()).width().min(area.width as usize);
            let padding = (area.width as usize).saturating_sub(left_width + msg_width);
            if padding > 0 {
                spans.push(Span::styled(" ".repeat(padding), bg_style));
            }
            spans.push(Span::styled(
                msg.as_str(),
                Style::default().bg(Color::DarkGray).fg(Color::Yellow),
            ));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn shows_focus_and_right_aligned_message() {
        let mut form = FormState::new(&AppConfig::default());
        form.status_message = Some("done".into());

        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(&form).render(area, &mut buf);

        let row: String = (0..30).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.starts_with(" SEARCH "));
        assert!(row.ends_with("done"));
    }
}
