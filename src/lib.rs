//! chartflow: the reactive state-management core of a declarative
//! charting component library.
//!
//! Every chart kind (area, bar, candlestick, gauge, line, pie, radar,
//! scatter) is driven by the same unidirectional loop:
//!
//! ```text
//! Intent ──→ Store ──→ Reducer ──→ State ──→ View
//!    ↑          │
//!    │          └────→ Effect (one-shot)
//!    └──────────────────────────────────────┘
//! ```
//!
//! A caller dispatches an [`mvi::Intent`]; the generic [`mvi::Store`]
//! delegates to the kind's [`mvi::Reducer`], publishes the new state on
//! a replay-latest stream, and delivers the optional effect on a
//! no-replay stream. Reductions are pure and synchronous; the store
//! serializes concurrent dispatches.
//!
//! Chart bodies themselves are placeholders ([`render`]): the drawing
//! pipeline belongs to the host UI toolkit, not this crate.
//!
//! # Example
//!
//! ```
//! use chartflow::charts::bar::{BarChartStore, BarIntent};
//! use chartflow::data::{BarChartData, BarEntry};
//!
//! let store = BarChartStore::default();
//! store.dispatch(BarIntent::LoadData(BarChartData {
//!     bars: vec![BarEntry { label: "mon".into(), value: 3.0 }],
//! }));
//! store.dispatch(BarIntent::SelectBar(0));
//! assert_eq!(store.state().selected_bar, Some(0));
//! ```

pub mod charts;
pub mod data;
pub mod mvi;
pub mod render;
pub mod telemetry;

pub use mvi::{Effect, Intent, Reducer, Store, ViewState};
