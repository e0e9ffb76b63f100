pub mod curve;
pub mod estimator;
pub mod result;
pub mod session;
