//! Shared core of the order form: client registry, product catalog,
//! order aggregation, document contracts and the form controller.
//!
//! Everything here is target-independent and compiles both for the
//! wasm frontend and for the native backend.

pub mod domain;
pub mod shared;
pub mod usecases;
