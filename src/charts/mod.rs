//! Per-kind chart contracts.
//!
//! Each chart kind is a feature module following the MVI layout:
//! `state.rs`, `intent.rs`, `effect.rs`, `reducer.rs`.
//! The shared data/loading/error/animating transitions live once in
//! [`common::ChartFrame`]; per-kind reducers only add their own fields
//! and effects on top.

pub mod common;

pub mod area;
pub mod bar;
pub mod candlestick;
pub mod gauge;
pub mod line;
pub mod pie;
pub mod radar;
pub mod scatter;
