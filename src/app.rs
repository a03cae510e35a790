use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use ratatui::widgets::{Block, Borders};

use crate::config::AppConfig;
use crate::event::{AppEvent, Event, EventHandler, FieldId};
use crate::ui;
use crate::ui::placeholder::PlaceholderField;

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

/// Everything the demo screen renders, independent of the terminal and the
/// event task.
pub struct FormState {
    pub search: PlaceholderField,
    pub note: PlaceholderField,
    pub focus: FieldId,
    pub show_help: bool,
    pub status_message: Option<String>,

    // Placeholders restored by `TogglePlaceholder`.
    search_placeholder: Option<String>,
    note_placeholder: Option<String>,

    dirty: bool,
}

impl FormState {
    pub fn new(config: &AppConfig) -> Self {
        let theme = config.theme();
        let field = |title: &'static str, placeholder: Option<String>| {
            PlaceholderField::with_placeholder(placeholder)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!(" {title} ")),
                )
                .theme(theme)
                .metrics(config.metrics)
        };

        let mut search = field("Search", config.search_placeholder.clone());
        search.set_focused(true);

        Self {
            search,
            note: field("Note", config.note_placeholder.clone()),
            focus: FieldId::Search,
            show_help: false,
            status_message: None,
            search_placeholder: config.search_placeholder.clone(),
            note_placeholder: config.note_placeholder.clone(),
            dirty: true,
        }
    }

    pub fn field(&self, id: FieldId) -> &PlaceholderField {
        match id {
            FieldId::Search => &self.search,
            FieldId::Note => &self.note,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut PlaceholderField {
        match id {
            FieldId::Search => &mut self.search,
            FieldId::Note => &mut self.note,
        }
    }

    pub fn focus_next(&mut self) {
        let next = match self.focus {
            FieldId::Search => FieldId::Note,
            FieldId::Note => FieldId::Search,
        };
        self.field_mut(self.focus).set_focused(false);
        self.field_mut(next).set_focused(true);
        self.focus = next;
    }

    /// Routes a key press. Returns an app event when the key triggers one.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppEvent> {
        // Ctrl-C always quits.
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c' | 'C'))
        {
            return Some(AppEvent::Quit);
        }

        match key.code {
            KeyCode::Esc if self.show_help => {
                self.show_help = false;
                self.dirty = true;
                None
            }
            KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::F(1) => {
                self.show_help = !self.show_help;
                self.dirty = true;
                None
            }
            KeyCode::F(2) => Some(AppEvent::TogglePlaceholder(self.focus)),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus_next();
                None
            }
            KeyCode::Enter => Some(AppEvent::Submit {
                field: self.focus,
                text: self.field(self.focus).text().to_string(),
            }),
            _ => {
                self.field_mut(self.focus).handle_key(key);
                None
            }
        }
    }

    /// Applies an app event that changes form state. `Quit` is handled by [`App`].
    pub fn apply(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Quit => {}
            AppEvent::Submit { field, text } => {
                tracing::info!(?field, len = text.len(), "field submitted");
                self.status_message = Some(if text.is_empty() {
                    format!("{} is empty", field_name(*field))
                } else {
                    format!("{}: {text}", field_name(*field))
                });
                self.field_mut(*field).set_text("");
                self.dirty = true;
            }
            AppEvent::TogglePlaceholder(field) => {
                let restored = match field {
                    FieldId::Search => self.search_placeholder.clone(),
                    FieldId::Note => self.note_placeholder.clone(),
                };
                let target = self.field_mut(*field);
                let next = if target.placeholder().is_some() {
                    None
                } else {
                    restored
                };
                tracing::debug!(?field, placeholder = ?next, "placeholder changed");
                target.set_placeholder(next);
            }
        }
    }

    /// Drains pending redraw requests. Returns whether a frame is needed.
    pub fn take_redraw(&mut self) -> bool {
        let requests = self.search.take_redraw_requests() + self.note.take_redraw_requests();
        std::mem::take(&mut self.dirty) || requests > 0
    }
}

pub fn field_name(id: FieldId) -> &'static str {
    match id {
        FieldId::Search => "Search",
        FieldId::Note => "Note",
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub running: bool,
    pub events: EventHandler,
    pub form: FormState,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            running: true,
            events: EventHandler::new(config.tick_rate_fps),
            form: FormState::new(&config),
        }
    }

    // -- Main event loop ----------------------------------------------------

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let mut resized = false;
        while self.running {
            if self.form.take_redraw() || std::mem::take(&mut resized) {
                terminal.draw(|frame| ui::draw(frame, &self.form))?;
            }
            match self.events.next().await? {
                Event::Tick => {}
                Event::Crossterm(event) => match event {
                    crossterm::event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(app_event) = self.form.handle_key(key) {
                            self.events.send(app_event);
                        }
                    }
                    crossterm::event::Event::Resize(..) => resized = true,
                    _ => {}
                },
                Event::App(app_event) => self.handle_app_event(app_event),
            }
        }
        Ok(())
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.running = false,
            other => self.form.apply(&other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn form() -> FormState {
        let mut form = FormState::new(&AppConfig::default());
        form.take_redraw();
        form
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = form();
        assert_eq!(form.handle_key(press(KeyCode::Char('r'))), None);
        assert_eq!(form.search.text(), "r");
        assert!(form.take_redraw());
        assert!(!form.take_redraw());

        form.handle_key(press(KeyCode::Tab));
        assert_eq!(form.focus, FieldId::Note);
        assert!(form.note.is_focused());
        assert!(!form.search.is_focused());
        form.handle_key(press(KeyCode::Char('n')));
        assert_eq!(form.note.text(), "n");
    }

    #[test]
    fn enter_submits_and_clears() {
        let mut form = form();
        form.search.set_text("rust");
        let event = form.handle_key(press(KeyCode::Enter)).unwrap();
        assert_eq!(
            event,
            AppEvent::Submit {
                field: FieldId::Search,
                text: "rust".into()
            }
        );

        form.apply(&event);
        assert_eq!(form.search.text(), "");
        assert!(form.search.shows_placeholder());
        assert_eq!(form.status_message.as_deref(), Some("Search: rust"));
    }

    #[test]
    fn toggle_clears_then_restores_placeholder() {
        let mut form = form();
        let event = form.handle_key(press(KeyCode::F(2))).unwrap();
        assert_eq!(event, AppEvent::TogglePlaceholder(FieldId::Search));

        form.apply(&event);
        assert_eq!(form.search.placeholder(), None);
        assert!(form.take_redraw());

        form.apply(&event);
        assert_eq!(form.search.placeholder(), Some("Search..."));
    }

    #[test]
    fn escape_closes_help_before_quitting() {
        let mut form = form();
        form.handle_key(press(KeyCode::F(1)));
        assert!(form.show_help);
        assert_eq!(form.handle_key(press(KeyCode::Esc)), None);
        assert!(!form.show_help);
        assert_eq!(form.handle_key(press(KeyCode::Esc)), Some(AppEvent::Quit));
        assert_eq!(
            form.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppEvent::Quit)
        );
    }
}
