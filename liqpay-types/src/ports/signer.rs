//! Signer port.

/// Port trait that turns a plain payload into an authenticated one.
///
/// The output is whatever the transport should put on the wire (for example
/// an encoded body carrying both the data and its signature).
pub trait Signer: Send + Sync {
    fn sign(&self, payload: &[u8]) -> Vec<u8>;
}
