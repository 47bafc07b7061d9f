//! # Postboard Core
//!
//! The domain layer of the Postboard service.
//! Records, drafts, errors and the ports the infrastructure implements.
//! No I/O happens in this crate.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::StoreError;
