use crate::core::sequence::Domain;
use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CardGrid, DetailView, HomeMenu, QuizOverlay, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

/// Label of the quiz button in the Numbers grid footer.
pub const PRACTICE_LABEL: &str = " 🦆 Practice Counting [c] ";

/// Title bar, main content and a one-line key hint footer.
pub struct ScreenAreas {
    pub title: Rect,
    pub main: Rect,
    pub footer: Rect,
}

pub fn screen_areas(frame_area: Rect) -> ScreenAreas {
    use Constraint::{Length, Min};
    let [title, main, footer] = Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame_area);
    ScreenAreas {
        title,
        main,
        footer,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, slide_offset: i16) {
    let areas = screen_areas(frame.area());

    TitleBar::new(app.title(), !matches!(app.screen, Screen::Home { .. }))
        .render(frame, areas.title);

    match &app.screen {
        Screen::Home { selected } => HomeMenu::new(*selected).render(frame, areas.main),
        Screen::Grid { domain, selected } => {
            let cards = app.grid(*domain).cards();
            CardGrid::new(&mut tui.grid, &cards, *selected).render(frame, areas.main);
        }
        Screen::Detail { navigator, .. } => {
            DetailView::new(
                navigator.current(),
                navigator.annotation(),
                navigator.controls(app.boundary_style),
                slide_offset,
            )
            .render(frame, areas.main);
        }
    }

    draw_footer(frame, areas.footer, app);

    if let Some(quiz) = &app.quiz {
        QuizOverlay::new(quiz.state()).render(frame, frame.area());
    }
}

fn footer_hints(app: &App) -> &'static [(&'static str, &'static str)] {
    if app.quiz.is_some() {
        return &[("Space", "Answer/Next"), ("Esc", "Close"), ("q", "Quit")];
    }
    match app.screen {
        Screen::Home { .. } => &[("↑↓", "Choose"), ("Enter", "Open"), ("q", "Quit")],
        Screen::Grid { .. } => &[("Arrows", "Move"), ("Enter", "Open"), ("Esc", "Back")],
        Screen::Detail { domain: Domain::Letters, .. } => &[
            ("←→", "Previous/Next"),
            ("Space", "Say letter"),
            ("w", "Say word"),
            ("Esc", "Back"),
        ],
        Screen::Detail { .. } => &[
            ("←→", "Previous/Next"),
            ("Space", "Say number"),
            ("Esc", "Back"),
        ],
    }
}

fn shows_practice(app: &App) -> bool {
    app.quiz.is_none() && matches!(app.screen, Screen::Grid { domain: Domain::Numbers, .. })
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let practice_width = if shows_practice(app) {
        PRACTICE_LABEL.width() as u16
    } else {
        0
    };
    let [hints_area, practice_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(practice_width)]).areas(area);

    let key_style = Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::DarkGray);
    let mut spans = vec![Span::raw(" ")];
    for (key, label) in footer_hints(app) {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {label}  "), label_style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), hints_area);

    if practice_width > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(
                PRACTICE_LABEL,
                Style::default().fg(Color::White).bg(Color::Blue),
            )),
            practice_area,
        );
    }
}

/// True if a click lands on the Practice Counting button of the footer.
pub fn hits_practice(app: &App, footer: Rect, col: u16, row: u16) -> bool {
    if !shows_practice(app) {
        return false;
    }
    let width = PRACTICE_LABEL.width() as u16;
    let button = Rect::new(
        footer.right().saturating_sub(width),
        footer.y,
        width.min(footer.width),
        footer.height,
    );
    button.contains(Position::new(col, row))
}
