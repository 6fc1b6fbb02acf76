//! # workout-parser
//!
//! A compiler for the compact workout step notation used to author structured bike, run
//! and swim sessions.
//!
//! File Layout
//!
//! The pipeline runs strictly forward, one module per stage:
//! src/workout
//!   ├── lexing        Line splitting, step tokenization (logos) and line classification
//!   ├── parsing       Block structuring (repeat blocks) and target resolution
//!   ├── assembling    Document assembly and derived totals
//!   ├── transforms    Composable stage pipeline (Runnable / Transform)
//!   └── ast           The immutable workout model and diagnostics
//!
//! Most callers only need [`parse`] or the [`DocumentLoader`](workout::loader::DocumentLoader).
//!
//! For testing helpers, see the [testing module](workout::testing).

pub mod workout;

pub use workout::ast::{Document, Sport};
pub use workout::{parse, parse_with_options, ParseOptions, ParseOutput};
