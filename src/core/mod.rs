//! # Core Application Logic
//!
//! This module contains Kidlearn's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. No audio.       │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │ Pronounce  │
//!             │  Adapter   │          │   sinks    │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`sequence`]: the ordered domains (letters, numbers) and their labels
//! - [`annotation`]: example words and number spelling
//! - [`grid`]: every item as a card; selecting one opens the navigator
//! - [`navigator`]: one item at a time, previous/next with clamping
//! - [`quiz`]: the counting quiz state machine
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings file, env vars and CLI overrides

pub mod action;
pub mod annotation;
pub mod config;
pub mod grid;
pub mod navigator;
pub mod quiz;
pub mod sequence;
pub mod state;
