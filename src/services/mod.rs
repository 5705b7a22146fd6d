//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on repository traits, never on
//! a concrete store.

mod registration_service;

pub use registration_service::{RegistrationService, Registrar, SuccessInfo};
