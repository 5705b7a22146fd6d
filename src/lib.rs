//! SkillX Accounts - user registration service
//!
//! Registers new user accounts over HTTP: validates that credentials are
//! present, enforces username uniqueness and stores an Argon2 password hash.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities and the password value object
//! - **services**: The registration use case
//! - **infra**: Database, migrations and user repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Start the server without a database
//! cargo run -- serve --in-memory
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Seed an account
//! cargo run -- accounts create --username admin --password secret
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, RegistrationRequest, UserAccount};
pub use errors::{AppError, AppResult};
pub use services::{RegistrationService, Registrar, SuccessInfo};
