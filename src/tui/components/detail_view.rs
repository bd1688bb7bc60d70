//! # DetailView Component
//!
//! One item, large, with its annotation and the previous/next controls.
//!
//! ```text
//!            ╭───────╮
//!            │   B   │     ← click/Space: say "b"
//!            │   b   │
//!            ╰───────╯
//!          Example Word:
//!              Ball         ← click/w: say "Ball"
//!
//!   ╭─ Previous ─╮  ╭─── Next ───╮
//!   │     A      │  │     C      │
//!   ╰────────────╯  ╰────────────╯
//! ```
//!
//! The glyph and annotation slide in from the edge given by the last
//! navigation's transition; the control row stays put.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::navigator::NavControls;
use crate::core::sequence::Item;
use crate::tui::component::Component;

const GLYPH_BOX_WIDTH: u16 = 13;
const BUTTON_WIDTH: u16 = 16;
const BUTTON_GAP: u16 = 4;

/// Clickable regions of the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTarget {
    Glyph,
    Annotation,
    Previous,
    Next,
}

struct DetailLayout {
    glyph: Rect,
    label: Rect,
    annotation: Rect,
    previous: Rect,
    next: Rect,
}

fn layout(area: Rect) -> DetailLayout {
    let [glyph_row, _, label, annotation, _, controls] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .flex(Flex::Center)
    .areas(area);

    let [glyph] = Layout::horizontal([Constraint::Length(GLYPH_BOX_WIDTH)])
        .flex(Flex::Center)
        .areas(glyph_row);
    let [previous, next] = Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(BUTTON_WIDTH),
    ])
    .flex(Flex::Center)
    .spacing(BUTTON_GAP)
    .areas(controls);

    DetailLayout {
        glyph,
        label,
        annotation,
        previous,
        next,
    }
}

/// Shifts `area` horizontally by `offset` columns, clipped to `bounds`.
/// Positive moves right (toward the trailing edge).
pub fn slide_area(area: Rect, offset: i16, bounds: Rect) -> Rect {
    let x = (area.x as i32 + offset as i32).clamp(bounds.x as i32, bounds.right() as i32) as u16;
    let width = area.width.min(bounds.right() - x);
    Rect::new(x, area.y, width, area.height)
}

/// What was clicked, if anything, on a detail view drawn in `area`.
pub fn hit_test(area: Rect, controls: &NavControls, col: u16, row: u16) -> Option<DetailTarget> {
    let l = layout(area);
    let pos = Position::new(col, row);
    if l.glyph.contains(pos) {
        Some(DetailTarget::Glyph)
    } else if l.annotation.contains(pos) {
        Some(DetailTarget::Annotation)
    } else if controls.previous.is_some() && l.previous.contains(pos) {
        Some(DetailTarget::Previous)
    } else if controls.next.is_some() && l.next.contains(pos) {
        Some(DetailTarget::Next)
    } else {
        None
    }
}

pub struct DetailView {
    pub item: Item,
    pub annotation: String,
    pub controls: NavControls,
    /// Horizontal slide offset for the entering content, in columns.
    pub slide_offset: i16,
}

impl DetailView {
    pub fn new(item: Item, annotation: String, controls: NavControls, slide_offset: i16) -> Self {
        Self {
            item,
            annotation,
            controls,
            slide_offset,
        }
    }
}

impl Component for DetailView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let l = layout(area);
        let accent = Style::default().fg(Color::Blue);

        // Glyph box
        let mut glyph_lines = vec![Line::from(Span::styled(
            self.item.glyph(),
            accent.add_modifier(Modifier::BOLD),
        ))];
        let secondary = self.item.secondary();
        if !secondary.is_empty() {
            glyph_lines.push(Line::from(Span::styled(secondary, Style::default().fg(Color::LightBlue))));
        }
        frame.render_widget(
            Paragraph::new(glyph_lines)
                .alignment(Alignment::Center)
                .block(Block::bordered().border_type(BorderType::Rounded).border_style(accent)),
            slide_area(l.glyph, self.slide_offset, area),
        );

        // Annotation
        if matches!(self.item, Item::Letter(_)) {
            frame.render_widget(
                Paragraph::new("Example Word:")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Gray)),
                slide_area(l.label, self.slide_offset, area),
            );
        }
        frame.render_widget(
            Paragraph::new(Span::styled(
                self.annotation.clone(),
                accent.add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            slide_area(l.annotation, self.slide_offset, area),
        );

        // Control row
        let row_style = if self.controls.dimmed {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default()
        };
        if let Some(previous) = self.controls.previous {
            frame.render_widget(nav_button("Previous", previous, row_style), l.previous);
        }
        if let Some(next) = self.controls.next {
            frame.render_widget(nav_button("Next", next, row_style), l.next);
        }
    }
}

fn nav_button(label: &str, item: Item, row_style: Style) -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        item.glyph(),
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .title(Line::from(format!(" {label} ")).centered())
            .border_style(Style::default().fg(Color::Gray)),
    )
    .style(row_style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn controls(previous: Option<Item>, next: Option<Item>, dimmed: bool) -> NavControls {
        NavControls {
            previous,
            next,
            dimmed,
        }
    }

    fn render_text(view: &mut DetailView) -> String {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| view.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_letter_with_both_controls() {
        let mut view = DetailView::new(
            Item::Letter('B'),
            "Ball".to_string(),
            controls(Some(Item::Letter('A')), Some(Item::Letter('C')), false),
            0,
        );
        let text = render_text(&mut view);
        assert!(text.contains("Example Word:"));
        assert!(text.contains("Ball"));
        assert!(text.contains("Previous"));
        assert!(text.contains("Next"));
    }

    #[test]
    fn test_hidden_previous_at_first_item() {
        let mut view = DetailView::new(
            Item::Number(1),
            "one".to_string(),
            controls(None, Some(Item::Number(2)), false),
            0,
        );
        let text = render_text(&mut view);
        assert!(!text.contains("Previous"));
        assert!(!text.contains("Example Word:"));
        assert!(text.contains("Next"));
    }

    #[test]
    fn test_slide_area() {
        let bounds = Rect::new(0, 0, 40, 10);
        let area = Rect::new(10, 2, 20, 1);
        assert_eq!(slide_area(area, 0, bounds), area);
        assert_eq!(slide_area(area, 4, bounds), Rect::new(14, 2, 20, 1));
        assert_eq!(slide_area(area, -4, bounds), Rect::new(6, 2, 20, 1));
        // Clipped at the right edge
        assert_eq!(slide_area(area, 15, bounds), Rect::new(25, 2, 15, 1));
        assert_eq!(slide_area(area, -30, bounds).x, 0);
        assert_eq!(slide_area(area, 100, bounds).width, 0);
    }

    #[test]
    fn test_hit_test_targets() {
        let area = Rect::new(0, 0, 60, 16);
        let l = layout(area);
        let both = controls(Some(Item::Letter('A')), Some(Item::Letter('C')), false);

        assert_eq!(hit_test(area, &both, l.glyph.x + 1, l.glyph.y + 1), Some(DetailTarget::Glyph));
        assert_eq!(
            hit_test(area, &both, l.annotation.x + 1, l.annotation.y),
            Some(DetailTarget::Annotation)
        );
        assert_eq!(hit_test(area, &both, l.previous.x + 1, l.previous.y + 1), Some(DetailTarget::Previous));
        assert_eq!(hit_test(area, &both, l.next.x + 1, l.next.y + 1), Some(DetailTarget::Next));

        // Hidden controls can't be clicked
        let no_previous = controls(None, Some(Item::Letter('B')), false);
        assert_eq!(hit_test(area, &no_previous, l.previous.x + 1, l.previous.y + 1), None);
    }
}
