pub mod ids;
pub mod person;
pub mod email;
pub mod graph;

// Re-exports for convenience
pub use ids::Id;
pub use person::{Alias, Person};
pub use email::EmailRecord;
pub use graph::{CommunicationGraph, Edge};
