//! Domain layer - Core entities and value objects
//!
//! Contains the registered account entity, the transient
//! registration request and the password value object.

pub mod password;
pub mod registration;
pub mod user;

pub use password::Password;
pub use registration::RegistrationRequest;
pub use user::UserAccount;
