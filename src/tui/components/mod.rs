//! # TUI Components
//!
//! Every screen of the app is assembled from the components in this module.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Built fresh each frame from plain data:
//! - `TitleBar`: screen title and the Home control
//! - `HomeMenu`: the two learning-mode buttons
//! - `DetailView`: one item with its annotation and prev/next controls
//! - `QuizOverlay`: the counting quiz, drawn over the numbers grid
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! - `CardGrid` borrows `CardGridState`, which lives in `TuiState` and keeps
//!   the scroll offset and last rendered column count between frames.
//!
//! ## Hit Testing
//!
//! Each component that takes clicks exposes a free `hit_test` function that
//! recomputes the same layout it renders with. Mouse handling never needs
//! the last frame's buffer, only the area the component was given.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top bar with Home control)
//! ├── home_menu.rs     (Mode selection)
//! ├── card_grid.rs     (Scrollable card grid)
//! ├── detail_view.rs   (Single item with navigation)
//! └── quiz_overlay.rs  (Counting quiz)
//! ```

pub mod card_grid;
pub mod detail_view;
pub mod home_menu;
pub mod quiz_overlay;
pub mod title_bar;

pub use card_grid::{CardGrid, CardGridState};
pub use detail_view::{DetailTarget, DetailView};
pub use home_menu::HomeMenu;
pub use quiz_overlay::{QuizOverlay, QuizTarget};
pub use title_bar::TitleBar;
