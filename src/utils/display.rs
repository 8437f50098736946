//! Display and output formatting utilities

use crate::game_of_life::Board;

/// Format boards for terminal display
pub struct BoardFormatter;

impl BoardFormatter {
    /// Format a board with block glyphs
    pub fn format_compact(board: &Board) -> String {
        let mut output = String::new();
        for row in board.grid().rows() {
            for cell in row {
                output.push(if cell.is_live() { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a board with row and column numbers
    pub fn format_with_coords(board: &Board) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..board.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for (y, row) in board.grid().rows().enumerate() {
            output.push_str(&format!("{:2} ", y));
            for cell in row {
                output.push_str(if cell.is_live() { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One-line description of a board's size and population
    pub fn summary(board: &Board) -> String {
        let total = board.width() * board.height();
        let density = if total > 0 {
            board.living_count() as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        format!(
            "{}x{} board, {} living ({:.1}%)",
            board.height(),
            board.width(),
            board.living_count(),
            density
        )
    }
}

/// Styling for status lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn ansi_code(self) -> u8 {
        match self {
            Tone::Error => 31,
            Tone::Success => 32,
            Tone::Warning => 33,
            Tone::Info => 34,
        }
    }

    /// Wrap `text` in this tone's escape sequence when `enabled`
    pub fn paint(self, text: &str, enabled: bool) -> String {
        if enabled {
            format!("\x1b[{}m{}\x1b[0m", self.ansi_code(), text)
        } else {
            text.to_string()
        }
    }
}

/// Colors status lines unless `NO_COLOR` is set or the terminal is dumb
pub struct ColorOutput;

impl ColorOutput {
    pub fn enabled() -> bool {
        std::env::var_os("NO_COLOR").is_none()
            && std::env::var("TERM").map_or(true, |term| term != "dumb")
    }

    pub fn info(text: &str) -> String {
        Tone::Info.paint(text, Self::enabled())
    }

    pub fn success(text: &str) -> String {
        Tone::Success.paint(text, Self::enabled())
    }

    pub fn warning(text: &str) -> String {
        Tone::Warning.paint(text, Self::enabled())
    }

    pub fn error(text: &str) -> String {
        Tone::Error.paint(text, Self::enabled())
    }
}
