use ratatui::style::{Color, Style};

/// Styles shared by the input widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub text: Style,
    /// Used for placeholder text, like a disabled field's foreground.
    pub disabled_text: Style,
    pub border: Style,
    pub focused_border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Style::default().fg(Color::White),
            disabled_text: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::DarkGray),
            focused_border: Style::default().fg(Color::Cyan),
        }
    }
}
