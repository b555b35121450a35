//! Request authentication helpers

pub mod bearer;

pub use bearer::BearerToken;
