pub mod help;
pub mod input;
pub mod metrics;
pub mod placeholder;
pub mod status_bar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

use crate::app::FormState;
use crate::event::FieldId;

use help::HelpView;
use status_bar::StatusBar;

pub fn draw(frame: &mut Frame, form: &FormState) {
    let area = frame.area();

    // Layout: header + two fields + filler + status bar
    let [header_area, search_area, note_area, _, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let header = Line::styled(
        " placeholder-field demo",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(header, header_area);

    frame.render_widget(&form.search, search_area);
    frame.render_widget(&form.note, note_area);
    frame.render_widget(StatusBar::new(form), status_area);

    if form.show_help {
        frame.render_widget(HelpView::new(), area);
        return;
    }

    let focused_area = match form.focus {
        FieldId::Search => search_area,
        FieldId::Note => note_area,
    };
    if let Some(position) = form.field(form.focus).cursor_position(focused_area) {
        frame.set_cursor_position(position);
    }
}
