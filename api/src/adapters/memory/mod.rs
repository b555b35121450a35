//! In-memory adapters
//!
//! State lives for the lifetime of the process, which is one test run.

pub mod order_repo;
pub mod session_repo;
pub mod user_repo;

pub use order_repo::InMemoryOrderRepository;
pub use session_repo::InMemorySessionRepository;
pub use user_repo::InMemoryUserRepository;
