// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each business object has its own subdirectory with:
// - Value objects
// - Entity
// - Commands
// - Errors
// - Repository port
// - Use case
//
// This layer knows nothing about HTTP or SQL.
//
// ============================================================================

pub mod storage;
pub mod order;
pub mod product;

pub use storage::StorageError;
