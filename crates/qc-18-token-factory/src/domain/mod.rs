//! # Domain Module
//!
//! Denomination model, authority records, errors, events and the
//! Authority Store.

pub mod denom;
pub mod entities;
pub mod errors;
pub mod events;
pub mod store;
pub mod value_objects;

pub use denom::*;
pub use entities::*;
pub use errors::*;
pub use events::*;
pub use store::AuthorityStore;
pub use value_objects::*;
