//! Incremental SHA-256 (FIPS 180-4) with the tooling built around it.
//!
//! - [`digest`]: the engine. `SHA256::new()`, any number of `update` calls,
//!   then one `finalize`; or the one-shot [`digest::sha256`].
//! - [`cipher`]: the letter-shift / digit-reflection substitution cipher.
//! - [`fileops`]: copy, encrypt, decrypt, compare and hash files.
//! - [`timer`]: marks and `HH:MM:SS:mmm` formatting.
//! - [`bench`]: sequential and parallel runs of the copy/encrypt/hash/verify workload.
//!
//! ```
//! use shabench::digest::{DigestAlgorithm, Digest, SHA256};
//!
//! let mut engine = SHA256::new();
//! engine.update(b"ab").unwrap();
//! engine.update(b"c").unwrap();
//! assert_eq!(
//!     engine.finalize().unwrap().to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

pub mod bench;
pub mod cipher;
pub mod digest;
pub mod error;
pub mod fileops;
pub mod timer;

pub use digest::{sha256, sha256_hex, SHA256Digest, SHA256};
pub use error::{DigestError, Error, Result};
