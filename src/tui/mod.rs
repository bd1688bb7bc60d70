//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. It also
//! owns the single `Playback` handle, so `Effect::Pronounce` from the reducer
//! becomes sound here and nowhere else.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Sliding** (a detail item just changed): draws every ~16ms until the
//!   entering content has reached its resting place.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigator::Edge;
use crate::core::sequence::{Domain, Item};
use crate::core::state::{App, HOME_ENTRIES, Screen};
use crate::pronounce::{ClipSink, Playback, PronunciationSink, SilentSink, SinkKind, SpeechSink};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CardGridState, DetailTarget, QuizTarget, detail_view, home_menu, quiz_overlay, title_bar,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const SLIDE_DURATION: Duration = Duration::from_millis(180);
/// Columns the entering content starts away from its resting place.
const SLIDE_DISTANCE: i16 = 16;

/// An in-progress entry animation on the detail screen.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slide {
    pub enter_from: Edge,
    pub started: Instant,
}

impl Slide {
    /// Horizontal offset at `now`, or `None` once the slide has finished.
    pub fn offset(&self, now: Instant) -> Option<i16> {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= SLIDE_DURATION {
            return None;
        }
        let remaining = 1.0 - elapsed.as_secs_f32() / SLIDE_DURATION.as_secs_f32();
        let distance = (remaining * SLIDE_DISTANCE as f32).round() as i16;
        Some(match self.enter_from {
            Edge::Trailing => distance,
            Edge::Leading => -distance,
        })
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub(crate) struct TuiState {
    // Persistent component states
    pub grid: CardGridState,
    // Animation state
    pub slide: Option<Slide>,
    /// Detail item on screen when last synced
    shown_item: Option<Item>,
    /// Grid selection on screen when last synced
    shown_selection: Option<(Domain, usize)>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            grid: CardGridState::new(),
            slide: None,
            shown_item: None,
            shown_selection: None,
        }
    }

    /// Brings presentation state in line with `app` before a frame is drawn:
    /// starts a slide when the detail item changed and keeps the grid
    /// selection scrolled into view.
    pub fn sync(&mut self, app: &App, now: Instant) {
        match &app.screen {
            Screen::Detail { navigator, .. } => {
                let item = navigator.current();
                if self.shown_item != Some(item) {
                    self.slide = Some(Slide {
                        enter_from: navigator.transition().enter_from,
                        started: now,
                    });
                    self.shown_item = Some(item);
                }
            }
            Screen::Grid { domain, selected } => {
                self.shown_item = None;
                self.slide = None;
                if self.shown_selection.map(|(d, _)| d) != Some(*domain) {
                    self.grid.scroll_state.scroll_to_top();
                }
                if self.shown_selection != Some((*domain, *selected)) {
                    self.grid.scroll_to(*selected);
                    self.shown_selection = Some((*domain, *selected));
                }
            }
            Screen::Home { .. } => {
                self.shown_item = None;
                self.slide = None;
                self.shown_selection = None;
            }
        }
    }

    /// Current slide offset. The frame after a slide ends yields `Some(0)`
    /// once so the content is drawn at rest.
    pub fn slide_offset(&mut self, now: Instant) -> Option<i16> {
        let slide = self.slide?;
        match slide.offset(now) {
            Some(offset) => Some(offset),
            None => {
                self.slide = None;
                Some(0)
            }
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the pronunciation sink a resolved config asks for.
pub fn build_sink(config: &ResolvedConfig) -> Arc<dyn PronunciationSink> {
    match config.pronunciation {
        SinkKind::Speech => Arc::new(SpeechSink::new(
            config.speech_command.clone(),
            config.speech.clone(),
        )),
        SinkKind::Clip => Arc::new(ClipSink::new(
            config.clip_dir.clone(),
            config.clip_extension.clone(),
            config.clip_player.clone(),
        )),
        SinkKind::Silent => Arc::new(SilentSink),
    }
}

/// Translate one terminal event into an action for the current screen.
///
/// Scroll events are handled by the grid directly and produce no action.
pub(crate) fn map_event(
    app: &App,
    tui: &mut TuiState,
    event: TuiEvent,
    frame_area: Rect,
) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Resize => None,
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            if app.quiz.is_none() && matches!(app.screen, Screen::Grid { .. }) {
                tui.grid.handle_event(&event);
            }
            None
        }
        TuiEvent::MouseClick(col, row) => map_click(app, tui, col, row, frame_area),
        _ => map_key(app, tui.grid.columns, event),
    }
}

fn map_key(app: &App, columns: u16, event: TuiEvent) -> Option<Action> {
    // The quiz overlay is modal
    if app.quiz.is_some() {
        return match event {
            TuiEvent::Activate => Some(Action::Activate),
            TuiEvent::InputChar('r') => Some(Action::QuizReveal),
            TuiEvent::InputChar('n') => Some(Action::QuizAdvance),
            TuiEvent::InputChar('x') | TuiEvent::Back => Some(Action::CloseQuiz),
            TuiEvent::Home | TuiEvent::InputChar('g') => Some(Action::Home),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match event {
        TuiEvent::InputChar('q') => return Some(Action::Quit),
        TuiEvent::Home | TuiEvent::InputChar('g') => return Some(Action::Home),
        TuiEvent::Back => return Some(Action::Back),
        TuiEvent::Activate => return Some(Action::Activate),
        _ => {}
    }

    let row = columns.max(1) as isize;
    match (&app.screen, event) {
        (Screen::Home { .. }, TuiEvent::Up | TuiEvent::Left) => Some(Action::MoveSelection(-1)),
        (Screen::Home { .. }, TuiEvent::Down | TuiEvent::Right) => Some(Action::MoveSelection(1)),
        (Screen::Grid { .. }, TuiEvent::Left) => Some(Action::MoveSelection(-1)),
        (Screen::Grid { .. }, TuiEvent::Right) => Some(Action::MoveSelection(1)),
        (Screen::Grid { .. }, TuiEvent::Up) => Some(Action::MoveSelection(-row)),
        (Screen::Grid { .. }, TuiEvent::Down) => Some(Action::MoveSelection(row)),
        (
            Screen::Grid {
                domain: Domain::Numbers,
                ..
            },
            TuiEvent::InputChar('c'),
        ) => Some(Action::OpenQuiz),
        (Screen::Detail { .. }, TuiEvent::Left) => Some(Action::GoPrevious),
        (Screen::Detail { .. }, TuiEvent::Right) => Some(Action::GoNext),
        (Screen::Detail { .. }, TuiEvent::InputChar('w')) => Some(Action::PronounceAnnotation),
        _ => None,
    }
}

fn map_click(app: &App, tui: &TuiState, col: u16, row: u16, frame_area: Rect) -> Option<Action> {
    if app.quiz.is_some() {
        return quiz_overlay::hit_test(frame_area, col, row).map(|target| match target {
            QuizTarget::Primary => Action::Activate,
            QuizTarget::Close => Action::CloseQuiz,
        });
    }

    let areas = ui::screen_areas(frame_area);
    let on_home = matches!(app.screen, Screen::Home { .. });
    if !on_home && title_bar::hits_home(areas.title, col, row) {
        return Some(Action::Home);
    }
    if ui::hits_practice(app, areas.footer, col, row) {
        return Some(Action::OpenQuiz);
    }

    match &app.screen {
        Screen::Home { .. } => home_menu::hit_test(areas.main, col, row)
            .and_then(|index| HOME_ENTRIES.get(index).copied())
            .map(Action::OpenDomain),
        Screen::Grid { domain, .. } => tui
            .grid
            .hit_test(areas.main, col, row, app.sequence(*domain).len())
            .map(Action::SelectItem),
        Screen::Detail { navigator, .. } => {
            let controls = navigator.controls(app.boundary_style);
            detail_view::hit_test(areas.main, &controls, col, row).map(|target| match target {
                DetailTarget::Glyph => Action::Pronounce,
                DetailTarget::Annotation => Action::PronounceAnnotation,
                DetailTarget::Previous => Action::GoPrevious,
                DetailTarget::Next => Action::GoNext,
            })
        }
    }
}

/// Run one event through the reducer and carry out its effect.
/// Returns true when the app should quit.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    playback: &mut Playback,
    event: TuiEvent,
    frame_area: Rect,
) -> bool {
    let Some(action) = map_event(app, tui, event, frame_area) else {
        return false;
    };
    let was_detail = matches!(app.screen, Screen::Detail { .. });
    let effect = update(app, action);

    // Sound belongs to the detail page it was started on
    if was_detail && !matches!(app.screen, Screen::Detail { .. }) && playback.is_playing() {
        debug!("Left the detail screen, stopping playback");
        playback.stop();
    }

    match effect {
        Effect::None => false,
        Effect::Pronounce(utterance) => {
            playback.start(utterance);
            false
        }
        Effect::Quit => true,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut playback = Playback::new(build_sink(&config));
    info!("Pronouncing through the {} sink", playback.sink_name());
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Mouse capture unavailable: {}", e);
            None
        }
    };

    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        tui.sync(&app, now);
        let slide_offset = tui.slide_offset(now);
        let animating = slide_offset.is_some();

        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, slide_offset.unwrap_or(0)))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while sliding, long when idle
        let timeout = if animating {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let frame_area = terminal.get_frame().area();
            if dispatch(&mut app, &mut tui, &mut playback, event, frame_area) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            debug!("Quit requested");
            break;
        }
    }

    info!("Kidlearn shutting down");
    playback.stop();
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingSink, test_app};
    use crate::tui::components::card_grid::CARD_WIDTH;

    const FRAME: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn key(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
        map_event(app, tui, event, FRAME)
    }

    fn detail_app(domain: Domain, index: usize) -> App {
        let mut app = test_app();
        update(&mut app, Action::OpenDomain(domain));
        update(&mut app, Action::SelectItem(index));
        app
    }

    #[test]
    fn test_global_keys() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(key(&app, &mut tui, TuiEvent::ForceQuit), Some(Action::Quit));
        assert_eq!(key(&app, &mut tui, TuiEvent::InputChar('q')), Some(Action::Quit));
        assert_eq!(key(&app, &mut tui, TuiEvent::InputChar('g')), Some(Action::Home));
        assert_eq!(key(&app, &mut tui, TuiEvent::Home), Some(Action::Home));
        assert_eq!(key(&app, &mut tui, TuiEvent::Back), Some(Action::Back));
        assert_eq!(key(&app, &mut tui, TuiEvent::Resize), None);
    }

    #[test]
    fn test_home_keys_move_selection() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(key(&app, &mut tui, TuiEvent::Down), Some(Action::MoveSelection(1)));
        assert_eq!(key(&app, &mut tui, TuiEvent::Up), Some(Action::MoveSelection(-1)));
        assert_eq!(key(&app, &mut tui, TuiEvent::Activate), Some(Action::Activate));
    }

    #[test]
    fn test_grid_keys_move_by_row() {
        let mut app = test_app();
        update(&mut app, Action::OpenDomain(Domain::Numbers));
        let mut tui = TuiState::new();
        tui.grid.columns = 4;

        assert_eq!(key(&app, &mut tui, TuiEvent::Right), Some(Action::MoveSelection(1)));
        assert_eq!(key(&app, &mut tui, TuiEvent::Down), Some(Action::MoveSelection(4)));
        assert_eq!(key(&app, &mut tui, TuiEvent::Up), Some(Action::MoveSelection(-4)));
        assert_eq!(key(&app, &mut tui, TuiEvent::InputChar('c')), Some(Action::OpenQuiz));
    }

    #[test]
    fn test_quiz_key_only_on_numbers_grid() {
        let mut app = test_app();
        update(&mut app, Action::OpenDomain(Domain::Letters));
        let mut tui = TuiState::new();
        assert_eq!(key(&app, &mut tui, TuiEvent::InputChar('c')), None);
    }

    #[test]
    fn test_detail_keys() {
        let app = detail_app(Domain::Letters, 1);
        let mut tui = TuiState::new();
        assert_eq!(key(&app, &mut tui, TuiEvent::Left), Some(Action::GoPrevious));
        assert_eq!(key(&app, &mut tui, TuiEvent::Right), Some(Action::GoNext));
        assert_eq!(key(&app, &mut tui, TuiEvent::InputChar('w')), Some(Action::PronounceAnnotation));
    }

    #[test]
    fn test_quiz_keys_are_modal() {
        let mut app = test_app();
        update(&mut app, Action::OpenDomain(Domain::Numbers));
        update(&mut app, Action::OpenQuiz);
        let mut tui = TuiState::new();

        assert_eq!(key(&app, &mut tui, TuiEvent::InputChar('r')), Some(Action::QuizReveal));
        assert_eq!(key(&app, &mut tui, TuiEvent::InputChar('n')), Some(Action::QuizAdvance));
        assert_eq!(key(&app, &mut tui, TuiEvent::Back), Some(Action::CloseQuiz));
        assert_eq!(key(&app, &mut tui, TuiEvent::InputChar('x')), Some(Action::CloseQuiz));
        // Grid movement is blocked while the overlay is up
        assert_eq!(key(&app, &mut tui, TuiEvent::Right), None);
    }

    #[test]
    fn test_clicks() {
        let mut app = test_app();
        update(&mut app, Action::OpenDomain(Domain::Numbers));
        let mut tui = TuiState::new();
        tui.grid.columns = 4;

        // Home control at the right end of the title bar
        assert_eq!(key(&app, &mut tui, TuiEvent::MouseClick(79, 0)), Some(Action::Home));
        // Practice Counting at the right end of the footer
        assert_eq!(key(&app, &mut tui, TuiEvent::MouseClick(79, 23)), Some(Action::OpenQuiz));
        // Second card of the first row; the grid starts under the title bar
        assert_eq!(
            key(&app, &mut tui, TuiEvent::MouseClick(CARD_WIDTH + 1, 2)),
            Some(Action::SelectItem(1))
        );
    }

    #[test]
    fn test_home_click_opens_domain() {
        let app = test_app();
        let mut tui = TuiState::new();
        let main = ui::screen_areas(FRAME).main;
        let hit = (main.y..main.bottom())
            .find_map(|row| key(&app, &mut tui, TuiEvent::MouseClick(FRAME.width / 2, row)));
        assert_eq!(hit, Some(Action::OpenDomain(Domain::Letters)));
    }

    #[test]
    fn test_sync_starts_slide_from_transition_edge() {
        let mut app = detail_app(Domain::Numbers, 19);
        let mut tui = TuiState::new();
        let now = Instant::now();

        tui.sync(&app, now);
        assert_eq!(tui.slide.map(|s| s.enter_from), Some(Edge::Trailing));

        update(&mut app, Action::GoPrevious);
        tui.sync(&app, now);
        assert_eq!(tui.slide.map(|s| s.enter_from), Some(Edge::Leading));

        // Unchanged item: no new slide
        let later = now + Duration::from_millis(50);
        tui.sync(&app, later);
        assert_eq!(tui.slide.map(|s| s.started), Some(now));
    }

    #[test]
    fn test_slide_offset_settles_then_stops() {
        let app = detail_app(Domain::Letters, 0);
        let mut tui = TuiState::new();
        let now = Instant::now();
        tui.sync(&app, now);

        assert_eq!(tui.slide_offset(now), Some(SLIDE_DISTANCE));
        let done = now + SLIDE_DURATION;
        assert_eq!(tui.slide_offset(done), Some(0));
        assert_eq!(tui.slide_offset(done), None);
    }

    #[test]
    fn test_leading_slide_is_negative() {
        let now = Instant::now();
        let slide = Slide {
            enter_from: Edge::Leading,
            started: now,
        };
        assert_eq!(slide.offset(now), Some(-SLIDE_DISTANCE));
        assert_eq!(slide.offset(now + SLIDE_DURATION), None);
    }

    #[test]
    fn test_build_sink_follows_config() {
        let config = ResolvedConfig {
            pronunciation: SinkKind::Silent,
            ..ResolvedConfig::default()
        };
        assert_eq!(build_sink(&config).name(), "silent");
    }

    #[tokio::test]
    async fn test_dispatch_pronounces_through_playback() {
        let sink = Arc::new(RecordingSink::default());
        let mut playback = Playback::new(sink.clone());
        let mut app = detail_app(Domain::Letters, 1);
        let mut tui = TuiState::new();

        assert!(!dispatch(&mut app, &mut tui, &mut playback, TuiEvent::Activate, FRAME));
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(sink.started(), vec!["b".to_string()]);

        dispatch(&mut app, &mut tui, &mut playback, TuiEvent::Right, FRAME);
        dispatch(&mut app, &mut tui, &mut playback, TuiEvent::InputChar('w'), FRAME);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(sink.started(), vec!["b".to_string(), "Cat".to_string()]);

        let current = match &app.screen {
            Screen::Detail { navigator, .. } => Some(navigator.current()),
            _ => None,
        };
        assert_eq!(current, Some(Item::Letter('C')));
        assert!(dispatch(&mut app, &mut tui, &mut playback, TuiEvent::InputChar('q'), FRAME));
    }

    #[tokio::test]
    async fn test_leaving_detail_stops_playback() {
        let sink = Arc::new(RecordingSink::with_delay(Duration::from_millis(100)));
        let mut playback = Playback::new(sink.clone());
        let mut app = detail_app(Domain::Letters, 1);
        let mut tui = TuiState::new();

        dispatch(&mut app, &mut tui, &mut playback, TuiEvent::Activate, FRAME);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(playback.is_playing());

        dispatch(&mut app, &mut tui, &mut playback, TuiEvent::Back, FRAME);
        assert!(matches!(app.screen, Screen::Grid { .. }));
        assert!(!playback.is_playing());

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(sink.started(), vec!["b".to_string()]);
        assert!(sink.finished().is_empty());
    }

    #[tokio::test]
    async fn test_going_home_from_detail_stops_playback() {
        let sink = Arc::new(RecordingSink::with_delay(Duration::from_millis(100)));
        let mut playback = Playback::new(sink.clone());
        let mut app = detail_app(Domain::Numbers, 6);
        let mut tui = TuiState::new();

        dispatch(&mut app, &mut tui, &mut playback, TuiEvent::Activate, FRAME);
        tokio::time::sleep(Duration::from_millis(20)).await;
        dispatch(&mut app, &mut tui, &mut playback, TuiEvent::InputChar('g'), FRAME);
        assert!(matches!(app.screen, Screen::Home { .. }));

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(sink.started().len(), 1);
        assert!(sink.finished().is_empty());
    }

    #[tokio::test]
    async fn test_paging_within_detail_lets_playback_finish() {
        let sink = Arc::new(RecordingSink::with_delay(Duration::from_millis(30)));
        let mut playback = Playback::new(sink.clone());
        let mut app = detail_app(Domain::Letters, 1);
        let mut tui = TuiState::new();

        dispatch(&mut app, &mut tui, &mut playback, TuiEvent::Activate, FRAME);
        tokio::time::sleep(Duration::from_millis(10)).await;
        dispatch(&mut app, &mut tui, &mut playback, TuiEvent::Right, FRAME);
        assert!(playback.is_playing());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(sink.finished(), vec!["b".to_string()]);
    }
}
