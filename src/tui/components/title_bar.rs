//! # TitleBar Component
//!
//! Top bar: screen title on the left, the Home control on the right.
//!
//! Purely presentational. Every screen except Home itself shows the
//! `⌂ Home` control so there is always one key away from the menu.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct TitleBar {
    pub title: String,
    pub show_home: bool,
}

impl TitleBar {
    pub fn new(title: String, show_home: bool) -> Self {
        Self { title, show_home }
    }
}

/// Label of the Home control; also used for click hit testing.
pub const HOME_LABEL: &str = "⌂ Home [g] ";

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let home_width = if self.show_home {
            unicode_width::UnicodeWidthStr::width(HOME_LABEL) as u16
        } else {
            0
        };
        let [title_area, home_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(home_width)]).areas(area);

        let title = Line::from(Span::styled(
            format!(" {}", self.title),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(title), title_area);

        if self.show_home {
            frame.render_widget(
                Paragraph::new(Span::styled(HOME_LABEL, Style::default().fg(Color::Blue))),
                home_area,
            );
        }
    }
}

/// True if a click at (`col`, `row`) lands on the Home control of a title
/// bar drawn in `area`.
pub fn hits_home(area: Rect, col: u16, row: u16) -> bool {
    let home_width = unicode_width::UnicodeWidthStr::width(HOME_LABEL) as u16;
    row == area.y && col >= area.right().saturating_sub(home_width) && col < area.right()
}
