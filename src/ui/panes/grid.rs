//! Grid pane rendering

use crate::config::Glyphs;
use crate::grid::{Buffer, Cell, Grid};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the `current` buffer, one terminal row per grid row
pub fn render_grid_pane(frame: &mut Frame, area: Rect, grid: &Grid, glyphs: Glyphs) {
    let paragraph = Paragraph::new(grid_lines(grid, glyphs));
    frame.render_widget(paragraph, area);
}

/// Build one styled line per grid row.
///
/// Consecutive cells in the same state share a span so a mostly-empty row
/// stays a handful of spans.
pub fn grid_lines(grid: &Grid, glyphs: Glyphs) -> Vec<Line<'static>> {
    grid.rows(Buffer::Current)
        .map(|row| {
            let mut spans = Vec::new();
            let mut run = String::new();
            let mut run_state = None;

            for &cell in row {
                if run_state.is_some_and(|state| state != cell) {
                    spans.push(cell_span(std::mem::take(&mut run), run_state));
                }
                run_state = Some(cell);
                run.push(cell.glyph(glyphs.alive, glyphs.dead));
            }
            if !run.is_empty() {
                spans.push(cell_span(run, run_state));
            }

            Line::from(spans)
        })
        .collect()
}

fn cell_span(text: String, state: Option<Cell>) -> Span<'static> {
    let style = match state {
        Some(Cell::Alive) => Style::default()
            .fg(DEFAULT_THEME.alive)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(DEFAULT_THEME.dead),
    };
    Span::styled(text, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_grid_lines_text() {
        let grid = Grid::from_rows(&["x..x", "....", "xx.."]);
        let glyphs = Glyphs { alive: '#', dead: '.' };
        let lines = grid_lines(&grid, glyphs);

        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(text, vec!["#..#", "....", "##.."]);
    }

    #[test]
    fn test_runs_share_spans() {
        let grid = Grid::from_rows(&["xx...x"]);
        let lines = grid_lines(&grid, Glyphs::default());
        assert_eq!(lines[0].spans.len(), 3);
        assert_eq!(lines[0].spans[1].content.as_ref(), "   ");
    }
}
