use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{Block, Widget};

use crate::document::Document;
use crate::ui::input::TextInput;
use crate::ui::metrics::FontMetrics;
use crate::ui::theme::Theme;

/// A [`TextInput`] that shows hint text while its content is empty.
///
/// The placeholder is drawn after the base input, left-aligned at the left
/// inset, vertically centered, in the disabled-text style. It is shown only
/// when the content is empty and the placeholder is set and non-empty.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderField {
    input: TextInput,
    placeholder: Option<String>,
}

impl PlaceholderField {
    /// Field with no content and no placeholder.
    pub fn new() -> Self {
        Self::with_placeholder(None)
    }

    pub fn with_placeholder(placeholder: Option<String>) -> Self {
        Self::with_text(None, placeholder)
    }

    pub fn with_text(text: Option<&str>, placeholder: Option<String>) -> Self {
        Self::with_document(None, text, placeholder)
    }

    /// Wraps `document` (or a fresh one). A given `text` replaces the
    /// document's content.
    pub fn with_document(
        document: Option<Document>,
        text: Option<&str>,
        placeholder: Option<String>,
    ) -> Self {
        let mut document = document.unwrap_or_default();
        if let Some(text) = text {
            document.set_text(text);
        }
        Self {
            input: TextInput::with_document(document),
            placeholder,
        }
    }

    pub fn block(mut self, block: Block<'static>) -> Self {
        self.input = self.input.block(block);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.input = self.input.theme(theme);
        self
    }

    pub fn metrics(mut self, metrics: FontMetrics) -> Self {
        self.input = self.input.metrics(metrics);
        self
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Replaces the placeholder (`None` clears it) and requests a redraw.
    pub fn set_placeholder(&mut self, placeholder: Option<String>) {
        self.placeholder = placeholder;
        self.input.request_redraw();
    }

    pub fn shows_placeholder(&self) -> bool {
        self.input.text().is_empty() && self.placeholder.as_deref().is_some_and(|p| !p.is_empty())
    }

    // -- Base input -----------------------------------------------------------

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.input.set_text(text);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.input.handle_key(key)
    }

    pub fn is_focused(&self) -> bool {
        self.input.is_focused()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.input.set_focused(focused);
    }

    pub fn pending_redraws(&self) -> usize {
        self.input.pending_redraws()
    }

    pub fn take_redraw_requests(&mut self) -> usize {
        self.input.take_redraw_requests()
    }

    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        self.input.cursor_position(area)
    }
}

impl Widget for &PlaceholderField {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self.input).render(area, buf);

        if !self.shows_placeholder() {
            return;
        }
        let Some(placeholder) = self.placeholder.as_deref() else {
            return;
        };
        let Some(row) = self.input.text_row(area) else {
            return;
        };

        let insets = self.input.insets(area);
        let max_width = area.width.saturating_sub(insets.left + insets.right);
        buf.set_stringn(
            area.x + insets.left,
            row,
            placeholder,
            max_width as usize,
            self.input.disabled_text_color_style(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::style::Color;
    use ratatui::widgets::Borders;

    fn render(field: &PlaceholderField, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        field.render(area, &mut buf);
        buf
    }

    fn rows(buf: &Buffer) -> Vec<String> {
        (buf.area.y..buf.area.bottom())
            .map(|y| {
                (buf.area.x..buf.area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    fn occurrences(buf: &Buffer, needle: &str) -> usize {
        rows(buf).iter().map(|r| r.matches(needle).count()).sum()
    }

    #[test]
    fn new_field_has_no_placeholder_and_draws_nothing() {
        let field = PlaceholderField::new();
        assert_eq!(field.placeholder(), None);
        assert_eq!(field.pending_redraws(), 0);

        let buf = render(&field, 12, 3);
        assert!(rows(&buf).iter().all(|r| r.trim().is_empty()));
    }

    #[test]
    fn draws_placeholder_once_on_centered_row_in_disabled_style() {
        let field = PlaceholderField::with_placeholder(Some("Search...".into()));
        let buf = render(&field, 12, 3);

        assert_eq!(occurrences(&buf, "Search..."), 1);
        assert_eq!(rows(&buf)[1], "Search...   ");
        assert_eq!(buf[(0, 1)].fg, Color::DarkGray);
        assert!(rows(&buf)[0].trim().is_empty());
        assert!(rows(&buf)[2].trim().is_empty());
    }

    #[test]
    fn placeholder_starts_at_left_inset_and_stays_inside_border() {
        let field = PlaceholderField::with_placeholder(Some("Type a long hint".into()))
            .block(Block::default().borders(Borders::ALL));
        let buf = render(&field, 8, 3);

        assert_eq!(rows(&buf)[1], "│Type a│");
    }

    #[test]
    fn content_hides_placeholder() {
        for placeholder in [None, Some(""), Some("x"), Some("Search...")] {
            let mut field = PlaceholderField::with_placeholder(placeholder.map(String::from));
            field.set_text("abc");
            assert!(!field.shows_placeholder());

            let buf = render(&field, 12, 3);
            assert_eq!(occurrences(&buf, "Search"), 0);
            assert_eq!(rows(&buf)[1], "abc         ");
            assert_eq!(buf[(0, 1)].fg, Color::White);
            assert!(rows(&buf)[0].trim().is_empty());
            assert!(rows(&buf)[2].trim().is_empty());
        }
    }

    #[test]
    fn empty_or_missing_placeholder_draws_nothing_extra() {
        for placeholder in [None, Some(String::new())] {
            let field = PlaceholderField::with_placeholder(placeholder);
            assert!(!field.shows_placeholder());
            let buf = render(&field, 6, 1);
            assert_eq!(rows(&buf), vec!["      ".to_string()]);
        }
    }

    #[test]
    fn set_placeholder_round_trips_and_requests_one_redraw_each() {
        let mut field = PlaceholderField::new();
        for value in [Some("hint"), Some(""), None, Some("again")] {
            field.set_placeholder(value.map(String::from));
            assert_eq!(field.placeholder(), value);
            assert_eq!(field.take_redraw_requests(), 1);
        }
    }

    #[test]
    fn clearing_placeholder_stops_drawing_it() {
        let mut field = PlaceholderField::with_placeholder(Some("Search...".into()));
        assert_eq!(occurrences(&render(&field, 12, 1), "Search..."), 1);

        field.set_placeholder(None);
        assert_eq!(occurrences(&render(&field, 12, 1), "Search..."), 0);
    }

    #[test]
    fn constructors_chain_document_and_text() {
        let field = PlaceholderField::with_text(Some("init"), None);
        assert_eq!(field.text(), "init");

        let doc = Document::from_text("from doc");
        let field = PlaceholderField::with_document(Some(doc.clone()), None, Some("p".into()));
        assert_eq!(field.text(), "from doc");
        assert_eq!(field.placeholder(), Some("p"));

        let field = PlaceholderField::with_document(Some(doc), Some("override"), None);
        assert_eq!(field.text(), "override");
    }

    #[test]
    fn placeholder_returns_after_content_is_deleted() {
        let mut field = PlaceholderField::with_text(Some("a"), Some("hint".into()));
        assert!(!field.shows_placeholder());

        field.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert!(field.shows_placeholder());
        assert_eq!(field.take_redraw_requests(), 1);
        assert_eq!(occurrences(&render(&field, 8, 1), "hint"), 1);
    }

    #[test]
    fn taller_metrics_move_the_row() {
        let field = PlaceholderField::with_placeholder(Some("x".into()))
            .metrics(FontMetrics::new(2, 1));
        // baseline = (6 + 2 - 1) / 2 = 3, glyph top = 1
        let buf = render(&field, 3, 6);
        assert_eq!(rows(&buf)[1], "x  ");
    }
}
