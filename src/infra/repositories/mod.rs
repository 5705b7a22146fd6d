//! Repository layer - Data access abstraction
//!
//! Repositories own persistence of user accounts, including password
//! hashing and enforcement of the username uniqueness invariant.

pub(crate) mod entities;
mod memory;
mod user_repository;

pub use memory::MemoryUserStore;
pub use user_repository::{UserRepository, UserStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
