use std::path::Path;

use tracing::debug;

use super::config::ORIGINAL_NAME;
use crate::digest::SHA256Digest;
use crate::error::Result;
use crate::fileops::{compare_files, copy_file, decrypt_file, encrypt_file, hash_file};

/// Outcome of one copy/encrypt/hash/decrypt/verify cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReport {
    pub id: usize,
    pub digest: SHA256Digest,
    /// Both hashes of the plain copy agreed
    pub hashes_match: bool,
    /// The decrypted file equals the original
    pub roundtrip_ok: bool,
}

impl ProcessReport {
    pub fn ok(&self) -> bool {
        self.hashes_match && self.roundtrip_ok
    }
}

/// Run the workload for copy `id` inside `dir`, which must already hold
/// `original.txt`.
///
/// Produces `<id>.txt` (plain copy), `<id>.sha` (encrypted) and `<id>.des`
/// (decrypted). Every hash uses a fresh engine, so concurrent calls with
/// distinct ids share nothing but the read-only original.
pub fn run_process(dir: &Path, id: usize) -> Result<ProcessReport> {
    let original = dir.join(ORIGINAL_NAME);
    let copy = dir.join(format!("{}.txt", id));
    let encrypted = dir.join(format!("{}.sha", id));
    let decrypted = dir.join(format!("{}.des", id));

    copy_file(&original, &copy)?;
    encrypt_file(&copy, &encrypted)?;

    let first = hash_file(&copy)?;
    let second = hash_file(&copy)?;
    let hashes_match = first == second;

    decrypt_file(&encrypted, &decrypted)?;
    let roundtrip_ok = compare_files(&decrypted, &original)?;

    debug!(id, %first, hashes_match, roundtrip_ok, "process finished");
    Ok(ProcessReport {
        id,
        digest: first,
        hashes_match,
        roundtrip_ok,
    })
}
