//! Shared foundational types for the ZED dashboard.

pub mod user;

pub use user::UserId;
