// ============================================================================
// Product Domain - Create Product Workflow
// ============================================================================
//
// Same shape as the order domain: entity, request, errors, repository port
// and use case.
//
// ============================================================================

pub mod entity;
pub mod commands;
pub mod errors;
pub mod repository;
pub mod use_case;

pub use entity::*;
pub use commands::*;
pub use errors::*;
pub use repository::*;
pub use use_case::*;
