use std::fmt::{Debug, Display};

use crate::error::DigestError;

#[macro_use]
pub mod macros;
pub mod chunked;
pub mod sha2;

pub use self::sha2::{sha256, sha256_hex, SHA256Digest, SHA256};

pub trait Digest: Copy + Clone + AsRef<[u8]> + Into<Box<[u8]>> + Debug + Display + Eq {
    /// Lowercase hex rendering, two digits per byte.
    fn to_hex(&self) -> String {
        hex::encode(self.as_ref())
    }
}

/// Incremental init/update/finalize lifecycle.
///
/// `new` yields an engine in the ready state. Once `finalize` has produced a
/// digest the instance stays finalized: further `update` or `finalize` calls
/// fail with [`DigestError::AlreadyFinalized`] until `reset` is called.
pub trait DigestAlgorithm {
    type Digest: Digest;

    fn new() -> Self;
    fn update(&mut self, input: &[u8]) -> Result<(), DigestError>;
    fn finalize(&mut self) -> Result<Self::Digest, DigestError>;
    fn reset(&mut self);

    fn compute(input: &[u8]) -> Result<Self::Digest, DigestError> where Self: Sized {
        let mut state = Self::new();
        state.update(input)?;
        state.finalize()
    }
}
