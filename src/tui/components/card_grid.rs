//! # CardGrid Component
//!
//! Every item of a sequence as a fixed-size card, laid out in as many
//! columns as fit and scrolled vertically.
//!
//! ## Architecture
//!
//! `CardGrid` is a transient component (created each frame) that wraps
//! `&'a mut CardGridState` (persistent state) and the cards (props).
//! Rendering records the column count and viewport height in the state so
//! key handling and hit testing between frames agree with what was drawn.
//!
//! ```text
//! ┌──────────┐┌──────────┐┌──────────┐
//! │    A     ││    B     ││    C     │
//! │    a     ││    b     ││    c     │
//! │  Apple   ││   Ball   ││   Cat    │
//! └──────────┘└──────────┘└──────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::grid::Card;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const CARD_WIDTH: u16 = 18;
pub const CARD_HEIGHT: u16 = 5;

/// Scroll and layout state for the grid. Persisted in `TuiState`.
pub struct CardGridState {
    pub scroll_state: ScrollViewState,
    /// Columns in the last rendered frame
    pub columns: u16,
    /// Last known viewport height
    pub viewport_height: u16,
}

impl Default for CardGridState {
    fn default() -> Self {
        Self::new()
    }
}

impl CardGridState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            columns: 1,
            viewport_height: 0,
        }
    }

    /// Scroll so the card at `index` is fully visible. No-op before the
    /// first render, when the viewport is still unknown.
    pub fn scroll_to(&mut self, index: usize) {
        if self.viewport_height == 0 {
            return;
        }
        let columns = self.columns.max(1) as usize;
        let top = (index / columns) as u16 * CARD_HEIGHT;
        let bottom = top + CARD_HEIGHT;
        let offset_y = self.scroll_state.offset().y;

        if top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset_y + self.viewport_height {
            let new_y = bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Card index under a screen position, given the grid's area.
    pub fn hit_test(&self, area: Rect, col: u16, row: u16, card_count: usize) -> Option<usize> {
        if !area.contains(Position::new(col, row)) {
            return None;
        }
        let column = (col - area.x) / CARD_WIDTH;
        if column >= self.columns {
            return None;
        }
        let content_y = (row - area.y) + self.scroll_state.offset().y;
        let index = (content_y / CARD_HEIGHT) as usize * self.columns as usize + column as usize;
        (index < card_count).then_some(index)
    }
}

/// Columns that fit in `width`, leaving one cell for the scrollbar.
pub fn columns_for_width(width: u16) -> u16 {
    (width.saturating_sub(1) / CARD_WIDTH).max(1)
}

impl EventHandler for CardGridState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            _ => {}
        }
        None
    }
}

pub struct CardGrid<'a> {
    state: &'a mut CardGridState,
    cards: &'a [Card],
    selected: usize,
}

impl<'a> CardGrid<'a> {
    pub fn new(state: &'a mut CardGridState, cards: &'a [Card], selected: usize) -> Self {
        Self {
            state,
            cards,
            selected,
        }
    }
}

impl Component for CardGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let columns = columns_for_width(area.width);
        self.state.columns = columns;
        self.state.viewport_height = area.height;

        let rows = self.cards.len().div_ceil(columns as usize) as u16;
        let content_width = area.width.saturating_sub(1);
        let mut scroll_view = ScrollView::new(Size::new(content_width, rows * CARD_HEIGHT))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, card) in self.cards.iter().enumerate() {
            let x = (index % columns as usize) as u16 * CARD_WIDTH;
            let y = (index / columns as usize) as u16 * CARD_HEIGHT;
            let rect = Rect::new(x, y, CARD_WIDTH, CARD_HEIGHT);
            scroll_view.render_widget(card_widget(card, index == self.selected), rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

fn card_widget(card: &Card, selected: bool) -> Paragraph<'static> {
    let inner_width = CARD_WIDTH.saturating_sub(2) as usize;
    let border_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue)
    };

    let mut lines = vec![Line::from(Span::styled(
        card.glyph.clone(),
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    ))];
    if !card.secondary.is_empty() {
        lines.push(Line::from(Span::styled(
            card.secondary.clone(),
            Style::default().fg(Color::LightBlue),
        )));
    }
    lines.push(Line::from(Span::styled(
        truncate_to_width(&card.annotation, inner_width),
        Style::default().fg(Color::Gray),
    )));

    let mut block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    if selected {
        block = block.style(Style::default().bg(Color::DarkGray));
    }

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
}

/// Truncate to fit `max_width` display columns, adding "…" if needed.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::Item;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn number_cards(n: u32) -> Vec<Card> {
        (1..=n)
            .map(|i| Card {
                item: Item::Number(i),
                glyph: i.to_string(),
                secondary: String::new(),
                annotation: format!("n{i}"),
            })
            .collect()
    }

    #[test]
    fn test_columns_for_width() {
        assert_eq!(columns_for_width(0), 1);
        assert_eq!(columns_for_width(CARD_WIDTH), 1);
        assert_eq!(columns_for_width(CARD_WIDTH * 4 + 1), 4);
    }

    #[test]
    fn test_render_records_layout() {
        let backend = TestBackend::new(CARD_WIDTH * 3 + 1, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let cards = number_cards(10);
        let mut state = CardGridState::new();
        terminal
            .draw(|f| CardGrid::new(&mut state, &cards, 0).render(f, f.area()))
            .unwrap();

        assert_eq!(state.columns, 3);
        assert_eq!(state.viewport_height, 12);
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("n1"));
    }

    #[test]
    fn test_hit_test_maps_to_index() {
        let mut state = CardGridState::new();
        state.columns = 3;
        state.viewport_height = 10;
        let area = Rect::new(0, 2, 60, 10);

        assert_eq!(state.hit_test(area, 1, 3, 10), Some(0));
        assert_eq!(state.hit_test(area, CARD_WIDTH + 1, 3, 10), Some(1));
        assert_eq!(state.hit_test(area, 1, 2 + CARD_HEIGHT, 10), Some(3));
        // Right of the last column
        assert_eq!(state.hit_test(area, CARD_WIDTH * 3 + 1, 3, 10), None);
        // Outside the area
        assert_eq!(state.hit_test(area, 1, 0, 10), None);
    }

    #[test]
    fn test_hit_test_accounts_for_scroll() {
        let mut state = CardGridState::new();
        state.columns = 2;
        state.viewport_height = 10;
        state.scroll_state.set_offset(Position { x: 0, y: CARD_HEIGHT * 2 });
        let area = Rect::new(0, 0, 40, 10);

        assert_eq!(state.hit_test(area, 1, 0, 20), Some(4));
        assert_eq!(state.hit_test(area, 1, 0, 4), None);
    }

    #[test]
    fn test_scroll_to_brings_card_into_view() {
        let mut state = CardGridState::new();
        state.columns = 2;
        state.viewport_height = CARD_HEIGHT * 2;

        state.scroll_to(9); // row 4
        assert_eq!(state.scroll_state.offset().y, CARD_HEIGHT * 3);

        state.scroll_to(0);
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_scroll_to_before_first_render_is_noop() {
        let mut state = CardGridState::new();
        state.scroll_to(5);
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Zebra", 16), "Zebra");
        assert_eq!(truncate_to_width("seventy-seven", 8), "seventy…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
