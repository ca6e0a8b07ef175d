//! # Core Simulation Logic
//!
//! The cellular automaton and everything that mutates it.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Grid (cells, cursor) │
//!                    │  • engine (B3/S23)      │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`grid`]: The `Grid` struct: cell matrix and cursor
//! - [`engine`]: Neighbor counting and the generational update
//! - [`cursor`]: Clamped cursor movement and selected-cell writes
//! - [`state`]: The `Simulation` struct: grid, pause flag, generation, RNG
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings resolution (defaults → file → env → CLI)

pub mod action;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod grid;
pub mod state;
