//! Domain entities
//!
//! Plain data models for the storefront. Serialization matches the JSON the
//! storefront UI expects.

pub mod franchise;
pub mod order;
pub mod user;

pub use franchise::{Franchise, FranchiseAdmin, FranchiseList, Store};
#[allow(unused_imports)]
pub use order::{EntityRef, MenuItem, NewOrder, Order, OrderHistory, OrderItem};
pub use user::{NewUser, Role, RoleAssignment, SanitizedUser, User, UserId, UserUpdate};
