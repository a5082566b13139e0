//! Terminal frames for playback.

use console::{style, Color, Term};
use sortscope_core::Highlight;
use sortscope_replay::ViewSnapshot;
use std::io;

/// Value units per bar cell
const BAR_SCALE: u32 = 10;

const BAR_CELL: &str = "█";

/// Foreground color for a highlight set
#[must_use]
pub fn highlight_color(highlight: Option<Highlight>) -> Color {
    match highlight {
        Some(Highlight::Sorted) => Color::Green,
        Some(Highlight::Comparing | Highlight::Current) => Color::Yellow,
        Some(Highlight::Swapping | Highlight::Extracting) => Color::Red,
        Some(Highlight::Shifting | Highlight::Pivot) => Color::Magenta,
        Some(Highlight::Heapifying | Highlight::Merging) => Color::Cyan,
        Some(Highlight::Dividing | Highlight::CurrentMinimum) => Color::Blue,
        Some(Highlight::Inserting) => Color::Color256(208),
        None => Color::White,
    }
}

/// Render one frame as lines of styled text
#[must_use]
pub fn render_frame(view: &ViewSnapshot) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.values.len() + 3);

    lines.push(format!(
        "{}  {}  step {}/{} ({:.0}%)",
        style(view.algorithm.display_name()).bold(),
        style(view.status).dim(),
        view.cursor,
        view.total_steps,
        view.progress * 100.0
    ));
    lines.push(format!(
        "comparisons: {}  {}: {}  speed: {}",
        view.comparisons, view.mutation_label, view.mutations, view.speed
    ));
    lines.push(String::new());

    for (index, value) in view.values.iter().enumerate() {
        let highlight = view.highlight_at(index);
        let width = (value / BAR_SCALE).max(1) as usize;
        let bar = style(BAR_CELL.repeat(width)).fg(highlight_color(highlight));
        let label = highlight.map(|h| h.as_str()).unwrap_or_default();
        lines.push(format!("{value:>4} {bar} {}", style(label).dim()));
    }

    lines
}

/// Redraws frames in place
pub struct Screen {
    term: Term,
    drawn: usize,
}

impl Screen {
    /// Draw to stdout
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
            drawn: 0,
        }
    }

    /// Write a line that stays above every frame
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written
    pub fn header(&self, text: &str) -> io::Result<()> {
        self.term.write_line(&style(text).dim().to_string())
    }

    /// Replace the previous frame with a new one
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written
    pub fn draw(&mut self, view: &ViewSnapshot) -> io::Result<()> {
        if self.drawn > 0 {
            self.term.clear_last_lines(self.drawn)?;
        }
        let lines = render_frame(view);
        for line in &lines {
            // the key reader may leave the terminal in raw mode
            self.term.write_line(&format!("\r{line}"))?;
        }
        self.drawn = lines.len();
        Ok(())
    }
}
