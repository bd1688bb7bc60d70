//! # Home Menu Component
//!
//! The top-level screen: a heading and one big button per learning mode.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::sequence::Domain;
use crate::core::state::HOME_ENTRIES;
use crate::tui::component::Component;

const BUTTON_WIDTH: u16 = 32;
const BUTTON_HEIGHT: u16 = 3;

pub struct HomeMenu {
    selected: usize,
}

impl HomeMenu {
    pub fn new(selected: usize) -> Self {
        Self { selected }
    }
}

fn button_label(domain: Domain) -> &'static str {
    match domain {
        Domain::Letters => "ABC  Learn Alphabet",
        Domain::Numbers => "123  Learn Numbers",
    }
}

/// Heading row followed by one row per button, centered in `area`.
fn layout(area: Rect) -> (Rect, Vec<Rect>) {
    let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
    for _ in HOME_ENTRIES {
        constraints.push(Constraint::Length(BUTTON_HEIGHT));
    }
    let rows = Layout::vertical(constraints).flex(Flex::Center).split(area);

    let buttons = rows[2..]
        .iter()
        .map(|row| {
            let [button] = Layout::horizontal([Constraint::Length(BUTTON_WIDTH)])
                .flex(Flex::Center)
                .areas(*row);
            button
        })
        .collect();
    (rows[0], buttons)
}

/// Which home entry, if any, was clicked.
pub fn hit_test(area: Rect, col: u16, row: u16) -> Option<usize> {
    let (_, buttons) = layout(area);
    buttons
        .iter()
        .position(|b| b.contains(ratatui::layout::Position::new(col, row)))
}

impl Component for HomeMenu {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (heading_area, buttons) = layout(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Kids Learning",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            heading_area,
        );

        for (i, (domain, button_area)) in HOME_ENTRIES.iter().zip(buttons).enumerate() {
            let style = if i == self.selected {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Blue)
            };
            let button = Paragraph::new(button_label(*domain))
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::bordered().border_type(BorderType::Rounded));
            frame.render_widget(button, button_area);
        }
    }
}
