//! # Sortscope Core
//!
//! Toolkit-independent pieces of the Sortscope sorting visualizer.
//!
//! ## Components
//!
//! - **Array**: [`ArrayModel`] holds the integers being sorted;
//!   [`SharedArray`] lets one sort worker mutate it while the UI takes
//!   consistent snapshots.
//! - **Runner**: [`SortRunner`] executes one algorithm at a time on a
//!   blocking worker, publishing a [`SortEvent`] per step and honouring a
//!   cancellation token between steps.
//! - **Algorithms**: bubble, selection and top-down merge sort, written
//!   against [`SortContext`].
//! - **Widgets**: [`BarChart`] draws a snapshot as vertical bars.
//!
//! ## Architecture
//!
//! ```text
//!  ┌────────────┐  start/stop   ┌────────────┐  spawn_blocking  ┌──────────┐
//!  │ Controller │──────────────▶│ SortRunner │─────────────────▶│ SortTask │
//!  └─────┬──────┘               └─────┬──────┘                  └────┬─────┘
//!        │ snapshot()                 │ SortEvent (mpsc)             │ swap/set
//!        ▼                            ▼                              ▼
//!  ┌────────────┐               ┌────────────┐               ┌─────────────┐
//!  │  BarChart  │◀──────────────│ event loop │               │ SharedArray │
//!  └────────────┘               └────────────┘               └─────────────┘
//! ```

pub mod algorithms;
pub mod array;
pub mod error;
pub mod order;
pub mod runner;
pub mod settings;
pub mod style;
pub mod widgets;

pub use array::{ArrayModel, MAX_ARRAY_LEN, SharedArray};
pub use error::{ArrayError, ParseNameError, Result, SettingsError, SortError};
pub use order::{Algorithm, SortOrder};
pub use runner::{
    Completion, EventSink, NullSink, Pacer, RecordingSink, RunId, RunnerStatus, SortContext,
    SortEvent, SortOutcome, SortRequest, SortRunner, SortStats, StartPolicy, Step, StepKind,
};
pub use settings::Settings;
pub use style::SortscopeStyle;
pub use widgets::{BarChart, BarScale, bar_width};
