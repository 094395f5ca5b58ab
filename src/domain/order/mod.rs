// ============================================================================
// Order Domain - Create Order Workflow
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (OrderId, OrderStatus)
// - Entity (Order)
// - Commands (CreateOrderRequest)
// - Errors (OrderValidationError, CreateOrderError)
// - Repository port (CreateOrderRepository)
// - Use case (CreateOrderUseCase)
//
// Storage adapters live in crate::persistence and depend on this module,
// never the other way round.
//
// ============================================================================

pub mod value_objects;
pub mod entity;
pub mod commands;
pub mod errors;
pub mod repository;
pub mod use_case;

// Re-export for convenience
pub use value_objects::*;
pub use entity::*;
pub use commands::*;
pub use errors::*;
pub use repository::*;
pub use use_case::*;
