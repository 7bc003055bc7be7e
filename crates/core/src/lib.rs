//! Core contracts for typedstore
//!
//! This crate defines the pieces every backend shares:
//!
//! - [`Value`] - the canonical transport representation
//! - [`Convertible`] - how a domain type maps to/from transport and names
//!   its slot
//! - [`Store`] - get/set/remove over exactly one convertible type
//! - [`AnyStore`] - type-erasing handle over any concrete store
//! - [`KeySpace`] - reverse-DNS key derivation
//!
//! Concrete backends live in `typedstore-backends`.

#![warn(missing_docs)]

pub mod convert;
pub mod error;
pub mod keyspace;
pub mod store;
pub mod value;

pub use convert::Convertible;
pub use error::{Error, Result};
pub use keyspace::KeySpace;
pub use store::{AnyStore, Store};
pub use value::Value;
