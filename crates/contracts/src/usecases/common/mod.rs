//! Common types for all use cases

pub mod usecase_result;

// Re-exports
pub use usecase_result::UseCaseError;
