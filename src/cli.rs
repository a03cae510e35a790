use clap::{Parser, Subcommand};
use color_eyre::eyre::{self, eyre};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Widget};
use unicode_width::UnicodeWidthStr;

use crate::config::AppConfig;
use crate::ui::placeholder::PlaceholderField;

/// Largest width or height accepted by `render`.
const MAX_RENDER_SIZE: u16 = 1000;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(
    name = "placeholder-field",
    about = "Text input with placeholder text for ratatui"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand)]
pub enum CliCommand {
    /// Launch the interactive demo (default)
    Tui {
        /// Placeholder for the search field, overriding the config
        #[arg(long)]
        placeholder: Option<String>,
    },
    /// Render a single field to stdout
    Render {
        /// Initial content of the field
        #[arg(long)]
        text: Option<String>,
        /// Placeholder shown while the content is empty
        #[arg(long)]
        placeholder: Option<String>,
        /// Width in columns
        #[arg(long, default_value_t = 30)]
        width: u16,
        /// Height in rows
        #[arg(long, default_value_t = 3)]
        height: u16,
        /// Draw the field without a border
        #[arg(long)]
        no_border: bool,
    },
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Run a non-interactive subcommand.
pub fn run_command(cmd: CliCommand, config: &AppConfig) -> eyre::Result<()> {
    match cmd {
        CliCommand::Tui { .. } => Err(eyre!("`tui` is interactive; run it from main")),
        CliCommand::Render {
            text,
            placeholder,
            width,
            height,
            no_border,
        } => {
            let lines = render_lines(
                text.as_deref(),
                placeholder,
                width,
                height,
                !no_border,
                config,
            )?;
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
    }
}

/// Render one field into an off-screen buffer and return its rows as text.
pub fn render_lines(
    text: Option<&str>,
    placeholder: Option<String>,
    width: u16,
    height: u16,
    border: bool,
    config: &AppConfig,
) -> eyre::Result<Vec<String>> {
    if width == 0 || height == 0 {
        return Err(eyre!("width and height must be at least 1 (got {width}x{height})"));
    }
    if width > MAX_RENDER_SIZE || height > MAX_RENDER_SIZE {
        return Err(eyre!(
            "width and height must be at most {MAX_RENDER_SIZE} (got {width}x{height})"
        ));
    }

    let mut field = PlaceholderField::with_text(text, placeholder)
        .theme(config.theme())
        .metrics(config.metrics);
    if border {
        field = field.block(Block::default().borders(Borders::ALL));
    }

    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    (&field).render(area, &mut buf);

    Ok((0..height).map(|y| row_text(&buf, y)).collect())
}

/// Text of one buffer row, skipping the cells hidden behind wide glyphs.
fn row_text(buf: &Buffer, y: u16) -> String {
    let mut row = String::new();
    let mut x = buf.area.x;
    while x < buf.area.right() {
        let symbol = buf[(x, y)].symbol();
        row.push_str(symbol);
        x += symbol.width().max(1) as u16;
    }
    row.trim_end().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
