//! Aggregate builder traits
//!
//! [`Aggregate`] is implemented by every builder. The capability traits add
//! setters on top of it and are implemented only by the builders whose SQL
//! function supports the behaviour.

pub mod base;
pub mod distinctable;
pub mod null_handling;
pub mod orderable;
pub mod statistical;

// Re-export all public items for convenience
pub use base::Aggregate;
pub use distinctable::Distinctable;
pub use null_handling::NullHandling;
pub use orderable::Orderable;
pub use statistical::Statistical;
