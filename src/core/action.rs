//! # Actions
//!
//! Everything that can happen in Kidlearn becomes an `Action`.
//! Child presses → on a letter? That's `Action::GoNext`.
//! Taps the big glyph? That's `Action::Pronounce`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` for the adapter to carry out. No I/O
//! here: speaking is an effect, not something `update` does.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Screen flow:
//!
//! ```text
//! Home ──Activate──► Grid ──Activate/SelectItem──► Detail
//!  ▲                  │ ▲                            │
//!  └──────Back────────┘ └───────────Back─────────────┘
//!  ▲                                                 │
//!  └───────────────────────Home──────────────────────┘
//! ```

use log::{debug, info};

use crate::core::quiz::CountingQuiz;
use crate::core::sequence::Domain;
use crate::core::state::{App, HOME_ENTRIES, Screen};
use crate::pronounce::Utterance;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Move the highlighted entry on Home or the Grid by `delta` positions.
    MoveSelection(isize),
    /// The primary button for whatever is on screen.
    Activate,
    OpenDomain(Domain),
    /// Open the detail view at this position of the current grid.
    SelectItem(usize),
    GoPrevious,
    GoNext,
    Pronounce,
    PronounceAnnotation,
    OpenQuiz,
    QuizReveal,
    QuizAdvance,
    CloseQuiz,
    Back,
    Home,
    Quit,
}

/// Side effects `update` asks the adapter to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Pronounce(Utterance),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);

    if app.quiz.is_some() {
        return update_quiz(app, action);
    }

    match action {
        Action::MoveSelection(delta) => {
            let len = match &app.screen {
                Screen::Home { .. } => HOME_ENTRIES.len(),
                Screen::Grid { domain, .. } => app.sequence(*domain).len(),
                Screen::Detail { .. } => return Effect::None,
            };
            if let Screen::Home { selected } | Screen::Grid { selected, .. } = &mut app.screen {
                *selected = offset_clamped(*selected, delta, len);
            }
            Effect::None
        }
        Action::Activate => match &app.screen {
            Screen::Home { selected } => {
                let domain = HOME_ENTRIES[(*selected).min(HOME_ENTRIES.len() - 1)];
                open_domain(app, domain);
                Effect::None
            }
            Screen::Grid { selected, .. } => {
                let index = *selected;
                select_item(app, index)
            }
            Screen::Detail { .. } => update(app, Action::Pronounce),
        },
        Action::OpenDomain(domain) => {
            open_domain(app, domain);
            Effect::None
        }
        Action::SelectItem(index) => select_item(app, index),
        Action::GoPrevious => {
            if let Screen::Detail { navigator, .. } = &mut app.screen {
                navigator.go_previous();
            }
            Effect::None
        }
        Action::GoNext => {
            if let Screen::Detail { navigator, .. } = &mut app.screen {
                navigator.go_next();
            }
            Effect::None
        }
        Action::Pronounce => match &app.screen {
            Screen::Detail { navigator, .. } => Effect::Pronounce(navigator.pronounce()),
            _ => Effect::None,
        },
        Action::PronounceAnnotation => match &app.screen {
            Screen::Detail { navigator, .. } => {
                Effect::Pronounce(navigator.pronounce_annotation())
            }
            _ => Effect::None,
        },
        Action::OpenQuiz => {
            if matches!(app.screen, Screen::Grid { domain: Domain::Numbers, .. }) {
                info!("Opening counting quiz");
                app.quiz = Some(CountingQuiz::start());
            }
            Effect::None
        }
        Action::QuizReveal | Action::QuizAdvance | Action::CloseQuiz => Effect::None,
        Action::Back => {
            back(app);
            Effect::None
        }
        Action::Home => {
            go_home(app);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// While the quiz overlay is up it takes every action except Home and Quit.
fn update_quiz(app: &mut App, action: Action) -> Effect {
    let Some(quiz) = app.quiz.as_mut() else {
        return Effect::None;
    };
    match action {
        Action::Activate => {
            quiz.press();
        }
        Action::QuizReveal => {
            quiz.reveal();
        }
        Action::QuizAdvance => {
            quiz.advance();
        }
        Action::CloseQuiz | Action::Back => close_quiz(app),
        Action::Home => go_home(app),
        Action::Quit => return Effect::Quit,
        _ => {}
    }
    Effect::None
}

fn close_quiz(app: &mut App) {
    if let Some(quiz) = app.quiz.take() {
        quiz.close();
    }
}

fn open_domain(app: &mut App, domain: Domain) {
    info!("Opening {} grid", domain.title());
    app.screen = Screen::Grid {
        domain,
        selected: 0,
    };
}

fn select_item(app: &mut App, index: usize) -> Effect {
    let Screen::Grid { domain, .. } = app.screen else {
        return Effect::None;
    };
    let Some(navigator) = app.grid(domain).select_index(index) else {
        return Effect::None;
    };

    let effect = if app.pronounce_on_select {
        Effect::Pronounce(navigator.pronounce())
    } else {
        Effect::None
    };
    app.screen = Screen::Detail { domain, navigator };
    effect
}

fn back(app: &mut App) {
    app.screen = match &app.screen {
        Screen::Home { selected } => Screen::Home {
            selected: *selected,
        },
        Screen::Grid { domain, .. } => Screen::Home {
            selected: HOME_ENTRIES.iter().position(|d| d == domain).unwrap_or(0),
        },
        Screen::Detail { domain, navigator } => Screen::Grid {
            domain: *domain,
            selected: navigator.current_index(),
        },
    };
}

fn go_home(app: &mut App) {
    close_quiz(app);
    let selected = app
        .screen
        .domain()
        .and_then(|domain| HOME_ENTRIES.iter().position(|d| *d == domain))
        .unwrap_or(0);
    app.screen = Screen::Home { selected };
}

fn offset_clamped(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let target = current as isize + delta;
    target.clamp(0, len as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigator::Direction;
    use crate::core::sequence::Item;
    use crate::test_support::test_app;

    fn detail_item(app: &App) -> Option<Item> {
        match &app.screen {
            Screen::Detail { navigator, .. } => Some(navigator.current()),
            _ => None,
        }
    }

    #[test]
    fn test_home_to_letters_to_detail() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Activate), Effect::None);
        assert!(matches!(
            app.screen,
            Screen::Grid {
                domain: Domain::Letters,
                selected: 0
            }
        ));

        update(&mut app, Action::MoveSelection(2));
        update(&mut app, Action::Activate);
        assert_eq!(detail_item(&app), Some(Item::Letter('C')));
        assert_eq!(app.title(), "Letter C");
    }

    #[test]
    fn test_select_item_opens_forward() {
        let mut app = test_app();
        update(&mut app, Action::OpenDomain(Domain::Numbers));
        update(&mut app, Action::SelectItem(19));
        match &app.screen {
            Screen::Detail { navigator, .. } => {
                assert_eq!(navigator.current(), Item::Number(20));
                assert_eq!(navigator.direction(), Direction::Forward);
            }
            _ => panic!("expected detail screen"),
        }
    }

    #[test]
    fn test_select_item_out_of_range_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::OpenDomain(Domain::Numbers));
        update(&mut app, Action::SelectItem(500));
        assert!(matches!(app.screen, Screen::Grid { .. }));
    }

    #[test]
    fn test_pronounce_on_select_switch() {
        let mut app = test_app();
        update(&mut app, Action::OpenDomain(Domain::Letters));
        assert_eq!(update(&mut app, Action::SelectItem(0)), Effect::None);

        let mut app = test_app();
        app.pronounce_on_select = true;
        update(&mut app, Action::OpenDomain(Domain::Letters));
        assert_eq!(
            update(&mut app, Action::SelectItem(0)),
            Effect::Pronounce(Utterance::for_item(&Item::Letter('A')))
        );
    }

    #[test]
    fn test_detail_navigation_and_pronounce() {
        let mut app = test_app();
        update(&mut app, Action::OpenDomain(Domain::Letters));
        update(&mut app, Action::SelectItem(0));

        update(&mut app, Action::GoPrevious);
        assert_eq!(detail_item(&app), Some(Item::Letter('A')));
        update(&mut app, Action::GoNext);
        assert_eq!(detail_item(&app), Some(Item::Letter('B')));

        match update(&mut app, Action::Pronounce) {
            Effect::Pronounce(u) => assert_eq!(u.text, "b"),
            other => panic!("expected pronounce, got {other:?}"),
        }
        match update(&mut app, Action::PronounceAnnotation) {
            Effect::Pronounce(u) => assert_eq!(u.text, "Ball"),
            other => panic!("expected pronounce, got {other:?}"),
        }
        assert!(matches!(update(&mut app, Action::Activate), Effect::Pronounce(_)));
    }

    #[test]
    fn test_back_returns_to_grid_at_current_item() {
        let mut app = test_app();
        update(&mut app, Action::OpenDomain(Domain::Numbers));
        update(&mut app, Action::SelectItem(4));
        update(&mut app, Action::GoNext);
        update(&mut app, Action::Back);
        assert!(matches!(
            app.screen,
            Screen::Grid {
                domain: Domain::Numbers,
                selected: 5
            }
        ));
        update(&mut app, Action::Back);
        assert!(matches!(app.screen, Screen::Home { selected: 1 }));
    }

    #[test]
    fn test_home_from_detail() {
        let mut app = test_app();
        update(&mut app, Action::OpenDomain(Domain::Letters));
        update(&mut app, Action::SelectItem(3));
        update(&mut app, Action::Home);
        assert!(matches!(app.screen, Screen::Home { selected: 0 }));
    }

    #[test]
    fn test_move_selection_clamps() {
        let mut app = test_app();
        update(&mut app, Action::MoveSelection(-5));
        assert!(matches!(app.screen, Screen::Home { selected: 0 }));
        update(&mut app, Action::MoveSelection(5));
        assert!(matches!(app.screen, Screen::Home { selected: 1 }));

        update(&mut app, Action::Activate);
        update(&mut app, Action::MoveSelection(1_000));
        assert!(matches!(app.screen, Screen::Grid { selected: 19, .. }));
    }

    #[test]
    fn test_quiz_only_opens_from_numbers_grid() {
        let mut app = test_app();
        update(&mut app, Action::OpenQuiz);
        assert!(app.quiz.is_none());

        update(&mut app, Action::OpenDomain(Domain::Letters));
        update(&mut app, Action::OpenQuiz);
        assert!(app.quiz.is_none());

        update(&mut app, Action::Back);
        update(&mut app, Action::OpenDomain(Domain::Numbers));
        update(&mut app, Action::OpenQuiz);
        assert!(app.quiz.is_some());
    }

    #[test]
    fn test_quiz_captures_actions_until_closed() {
        let mut app = test_app();
        update(&mut app, Action::OpenDomain(Domain::Numbers));
        update(&mut app, Action::OpenQuiz);

        let start = app.quiz.as_ref().map(|q| q.state().count());
        update(&mut app, Action::Activate);
        assert!(app.quiz.as_ref().is_some_and(|q| q.state().is_revealed()));
        update(&mut app, Action::Activate);
        let next = app.quiz.as_ref().map(|q| q.state().count());
        assert_ne!(start, next);

        // Grid selection is blocked while the overlay is up
        update(&mut app, Action::SelectItem(0));
        assert!(matches!(app.screen, Screen::Grid { .. }));

        update(&mut app, Action::CloseQuiz);
        assert!(app.quiz.is_none());
        assert!(matches!(app.screen, Screen::Grid { domain: Domain::Numbers, .. }));
    }

    #[test]
    fn test_home_closes_quiz() {
        let mut app = test_app();
        update(&mut app, Action::OpenDomain(Domain::Numbers));
        update(&mut app, Action::OpenQuiz);
        update(&mut app, Action::Home);
        assert!(app.quiz.is_none());
        assert!(matches!(app.screen, Screen::Home { selected: 1 }));
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
