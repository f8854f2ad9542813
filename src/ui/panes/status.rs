//! Status bar rendering with generation counter and key hints

use crate::rules::RuleSet;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows for one frame
#[derive(Debug, Clone)]
pub struct StatusRenderData<'a> {
    pub generation: u64,
    pub generation_limit: Option<u64>,
    pub population: usize,
    pub rules: RuleSet,
    pub seed: u64,
    pub message: &'a str,
}

impl StatusRenderData<'_> {
    /// Left-hand generation badge, e.g. ` Gen 12 ` or ` Gen 12/100 `
    pub fn generation_text(&self) -> String {
        match self.generation_limit {
            Some(limit) => format!(" Gen {}/{} ", self.generation, limit),
            None => format!(" Gen {} ", self.generation),
        }
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bar_style = Style::default().bg(DEFAULT_THEME.status_bg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);
    let text_style = bar_style.fg(DEFAULT_THEME.fg);

    // Left side: generation and run info
    let left_spans = vec![
        Span::styled(
            data.generation_text(),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", sep_style),
        Span::styled(format!("pop {} ", data.population), text_style),
        Span::styled("| ", sep_style),
        Span::styled(
            format!("{} ", data.rules),
            bar_style.fg(DEFAULT_THEME.secondary),
        ),
        Span::styled("| ", sep_style),
        Span::styled(format!("seed {} ", data.seed), sep_style),
        Span::styled("| ", sep_style),
        Span::styled(format!("{} ", data.message), text_style),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_style)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds and liveness badge
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);

    let mut right_spans = vec![
        Span::styled(" ⎵ ", key_style),
        Span::styled(" reset ", text_style),
        Span::styled("│", sep_style),
        Span::styled(" ", text_style),
        Span::styled(" ^C ", key_style),
        Span::styled(" quit ", text_style),
        Span::styled("│", sep_style),
    ];

    let (badge, badge_bg) = if data.population == 0 {
        (" ALL DEAD ", DEFAULT_THEME.error)
    } else {
        (" ● ALIVE ", DEFAULT_THEME.success)
    };
    right_spans.push(Span::styled(
        badge,
        Style::default()
            .bg(badge_bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_style)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
