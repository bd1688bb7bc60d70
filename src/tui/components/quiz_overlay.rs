//! # Quiz Overlay Component
//!
//! The counting quiz, drawn over the numbers grid. Opened with `c`.
//!
//! ```text
//! ┌──────────── Practice Counting ─────────────┐
//! │        How many objects do you see?        │
//! │                                            │
//! │        🦆 🦆 🦆 🦆 🦆 🦆 🦆                │
//! │                                            │
//! │                    7                       │  ← only once revealed
//! │   ╭─────────────╮       ╭─────────────╮    │
//! │   │    Next     │       │    Close    │    │
//! │   ╰─────────────╯       ╰─────────────╯    │
//! └────── Space Show Answer/Next  Esc Close ───┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::quiz::{MAX_COUNT, QUIZ_GLYPH, QuizState};
use crate::tui::component::Component;

const BUTTON_WIDTH: u16 = 15;

/// Clickable regions of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizTarget {
    Primary,
    Close,
}

struct QuizLayout {
    overlay: Rect,
    question: Rect,
    glyphs: Rect,
    answer: Rect,
    primary: Rect,
    close: Rect,
}

fn layout(area: Rect) -> QuizLayout {
    let overlay = centered_rect(70, 80, area);
    let inner = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .inner(overlay);

    let [question, _, glyphs, _, answer, _, buttons] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(glyph_rows(inner.width, MAX_COUNT)),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .flex(Flex::Center)
    .areas(inner);

    let [primary, close] = Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(BUTTON_WIDTH),
    ])
    .flex(Flex::Center)
    .spacing(4)
    .areas(buttons);

    QuizLayout {
        overlay,
        question,
        glyphs,
        answer,
        primary,
        close,
    }
}

/// Which overlay button, if any, was clicked.
pub fn hit_test(area: Rect, col: u16, row: u16) -> Option<QuizTarget> {
    let l = layout(area);
    let pos = Position::new(col, row);
    if l.primary.contains(pos) {
        Some(QuizTarget::Primary)
    } else if l.close.contains(pos) {
        Some(QuizTarget::Close)
    } else {
        None
    }
}

/// Glyphs that fit on one line of `width` columns, one space between.
fn glyphs_per_row(width: u16) -> usize {
    let glyph_width = QUIZ_GLYPH.width() + 1;
    ((width as usize + 1) / glyph_width).max(1)
}

fn glyph_rows(width: u16, count: u8) -> u16 {
    (count as usize).div_ceil(glyphs_per_row(width)) as u16
}

/// `count` glyphs wrapped into lines no wider than `width`.
pub fn wrap_glyphs(count: u8, width: u16) -> Vec<String> {
    let per_row = glyphs_per_row(width);
    let glyphs = vec![QUIZ_GLYPH; count as usize];
    glyphs.chunks(per_row).map(|row| row.join(" ")).collect()
}

pub struct QuizOverlay {
    state: QuizState,
}

impl QuizOverlay {
    pub fn new(state: QuizState) -> Self {
        Self { state }
    }
}

impl Component for QuizOverlay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let l = layout(area);
        frame.render_widget(Clear, l.overlay);

        let primary_label = if self.state.is_revealed() {
            "Next"
        } else {
            "Show Answer"
        };
        let help_text = format!(" Space {primary_label}  Esc Close ");
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(Line::from(" Practice Counting ").centered())
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));
        frame.render_widget(block, l.overlay);

        frame.render_widget(
            Paragraph::new("How many objects do you see?")
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD)),
            l.question,
        );

        let rows: Vec<Line> = wrap_glyphs(self.state.count(), l.glyphs.width)
            .into_iter()
            .map(Line::from)
            .collect();
        frame.render_widget(Paragraph::new(rows).alignment(Alignment::Center), l.glyphs);

        if self.state.is_revealed() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    self.state.count().to_string(),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
                l.answer,
            );
        }

        frame.render_widget(button(primary_label, true), l.primary);
        frame.render_widget(button("Close", false), l.close);
    }
}

fn button(label: &'static str, primary: bool) -> Paragraph<'static> {
    let style = if primary {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue)
    };
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::bordered().border_type(BorderType::Rounded))
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
