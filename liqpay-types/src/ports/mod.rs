//! Port traits for the collaborators that move payloads.
//!
//! The client crate depends on these traits, not on concrete implementations.
//! Signing and transport are supplied by the embedding application.

mod signer;
mod transport;

pub use signer::Signer;
pub use transport::{Transport, TransportError};
