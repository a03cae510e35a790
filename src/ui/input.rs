use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};
use unicode_width::UnicodeWidthChar;

use crate::document::Document;
use crate::ui::metrics::FontMetrics;
use crate::ui::theme::Theme;

/// Space taken by a widget's chrome on each side of its area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

/// A single-line text input.
///
/// Owns the [`Document`] being edited and renders it inside an optional
/// [`Block`], vertically centered with [`FontMetrics`] and horizontally
/// scrolled so the cursor stays visible. State changes that affect the
/// rendered output are counted as redraw requests, which the host drains
/// with [`TextInput::take_redraw_requests`].
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    document: Document,
    block: Option<Block<'static>>,
    theme: Theme,
    metrics: FontMetrics,
    focused: bool,
    redraw_requests: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            ..Self::default()
        }
    }

    pub fn block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.theme.text = style;
        self
    }

    pub fn disabled_text_style(mut self, style: Style) -> Self {
        self.theme.disabled_text = style;
        self
    }

    pub fn metrics(mut self, metrics: FontMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    // -- Content ------------------------------------------------------------

    pub fn text(&self) -> &str {
        self.document.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        if self.document.set_text(text) {
            self.request_redraw();
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Direct access to the model. Edits made here do not request a redraw.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn replace_document(&mut self, document: Document) -> Document {
        self.request_redraw();
        std::mem::replace(&mut self.document, document)
    }

    // -- Focus & appearance ---------------------------------------------------

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.request_redraw();
        }
    }

    pub fn font_metrics(&self) -> FontMetrics {
        self.metrics
    }

    pub fn disabled_text_color_style(&self) -> Style {
        self.theme.disabled_text
    }

    /// Chrome thickness around the text for a widget laid out in `area`.
    pub fn insets(&self, area: Rect) -> Insets {
        let inner = self.inner_area(area);
        Insets {
            left: inner.x.saturating_sub(area.x),
            right: area.right().saturating_sub(inner.right()),
            top: inner.y.saturating_sub(area.y),
            bottom: area.bottom().saturating_sub(inner.bottom()),
        }
    }

    pub fn inner_area(&self, area: Rect) -> Rect {
        match &self.block {
            Some(block) => block.inner(area),
            None => area,
        }
    }

    // -- Redraw scheduling ----------------------------------------------------

    pub fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }

    pub fn pending_redraws(&self) -> usize {
        self.redraw_requests
    }

    /// Returns the number of redraws requested since the last call.
    pub fn take_redraw_requests(&mut self) -> usize {
        std::mem::take(&mut self.redraw_requests)
    }

    // -- Editing --------------------------------------------------------------

    /// Applies an editing key. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        let changed = match key.code {
            KeyCode::Char('a') if ctrl => self.document.move_home(),
            KeyCode::Char('e') if ctrl => self.document.move_end(),
            KeyCode::Char('u') if ctrl => self.document.clear(),
            KeyCode::Char(_) if ctrl || alt => return false,
            KeyCode::Char(c) => self.document.insert_char(c),
            KeyCode::Backspace => self.document.delete_backward(),
            KeyCode::Delete => self.document.delete_forward(),
            KeyCode::Left => self.document.move_left(),
            KeyCode::Right => self.document.move_right(),
            KeyCode::Home => self.document.move_home(),
            KeyCode::End => self.document.move_end(),
            _ => return false,
        };

        if changed {
            self.request_redraw();
        }
        true
    }

    // -- Geometry -------------------------------------------------------------

    /// Row the text line is drawn on: the glyph envelope centered in the
    /// full widget height, kept inside the chrome.
    pub fn text_row(&self, area: Rect) -> Option<u16> {
        let inner = self.inner_area(area);
        if inner.is_empty() {
            return None;
        }
        let row = area.y + self.metrics.glyph_top(area.height);
        Some(row.clamp(inner.y, inner.bottom() - 1))
    }

    /// Terminal cursor position when focused.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused {
            return None;
        }
        let inner = self.inner_area(area);
        let row = self.text_row(area)?;
        let start = scroll_start(self.text(), self.document.cursor(), inner.width as usize);
        let col: usize = self
            .text()
            .chars()
            .skip(start)
            .take(self.document.cursor() - start)
            .map(|c| c.width().unwrap_or(0))
            .sum();
        let col = (col as u16).min(inner.width - 1);
        Some(Position::new(inner.x + col, row))
    }
}

/// Index of the first visible char such that the text before the cursor,
/// plus one column for the cursor itself, fits in `width`.
pub(crate) fn scroll_start(text: &str, cursor: usize, width: usize) -> usize {
    let widths: Vec<usize> = text
        .chars()
        .take(cursor)
        .map(|c| c.width().unwrap_or(0))
        .collect();
    let mut used: usize = widths.iter().sum();
    let mut start = 0;
    while used + 1 > width && start < widths.len() {
        used -= widths[start];
        start += 1;
    }
    start
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let inner = self.inner_area(area);
        if let Some(block) = &self.block {
            let border_style = if self.focused {
                self.theme.focused_border
            } else {
                self.theme.border
            };
            block.clone().border_style(border_style).render(area, buf);
        }

        let Some(row) = self.text_row(area) else {
            return;
        };
        if self.document.is_empty() {
            return;
        }

        let start = scroll_start(self.text(), self.document.cursor(), inner.width as usize);
        let visible = &self.text()[self.document.byte_offset(start)..];
        buf.set_stringn(inner.x, row, visible, inner.width as usize, self.theme.text);
    }
}
