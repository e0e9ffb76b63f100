#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod core;
pub mod prelude;
pub mod quantity;

pub use crate::core::{
    curve::{CalibrationPoint, TaperCurve},
    estimator::{Estimator, IncrementPolicy},
    result::{ChargingDuration, ChargingResult},
    session::ChargingSession,
};
