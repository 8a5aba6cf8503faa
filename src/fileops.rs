use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::cipher;
use crate::digest::{DigestAlgorithm, SHA256Digest, SHA256};
use crate::error::{Error, Result};

/// Read granularity for streaming helpers
const READ_CHUNK: usize = 8 * 1024;

/// Copy `src` to `dst` byte for byte, overwriting `dst`
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    let copied = fs::copy(src, dst).map_err(|e| Error::io(src, e))?;
    debug!(src = %src.display(), dst = %dst.display(), bytes = copied, "copied file");
    Ok(copied)
}

/// Encrypt `src` into `dst` with the substitution cipher
pub fn encrypt_file(src: &Path, dst: &Path) -> Result<u64> {
    transform_file(src, dst, cipher::encrypt_in_place)
}

/// Decrypt `src` into `dst`
pub fn decrypt_file(src: &Path, dst: &Path) -> Result<u64> {
    transform_file(src, dst, cipher::decrypt_in_place)
}

fn transform_file(src: &Path, dst: &Path, apply: fn(&mut [u8])) -> Result<u64> {
    let mut reader = BufReader::new(File::open(src).map_err(|e| Error::io(src, e))?);
    let mut writer = BufWriter::new(File::create(dst).map_err(|e| Error::io(dst, e))?);

    let mut buf = [0u8; READ_CHUNK];
    let mut total = 0u64;
    loop {
        let n = reader.read(&mut buf).map_err(|e| Error::io(src, e))?;
        if n == 0 {
            break;
        }
        apply(&mut buf[..n]);
        writer.write_all(&buf[..n]).map_err(|e| Error::io(dst, e))?;
        total += n as u64;
    }
    writer.flush().map_err(|e| Error::io(dst, e))?;

    debug!(src = %src.display(), dst = %dst.display(), bytes = total, "transformed file");
    Ok(total)
}

/// Byte-exact comparison of two files
pub fn compare_files(a: &Path, b: &Path) -> Result<bool> {
    let len_a = fs::metadata(a).map_err(|e| Error::io(a, e))?.len();
    let len_b = fs::metadata(b).map_err(|e| Error::io(b, e))?.len();
    if len_a != len_b {
        return Ok(false);
    }

    let mut reader_a = BufReader::new(File::open(a).map_err(|e| Error::io(a, e))?);
    let mut reader_b = BufReader::new(File::open(b).map_err(|e| Error::io(b, e))?);
    let mut buf_a = [0u8; READ_CHUNK];
    let mut buf_b = [0u8; READ_CHUNK];

    loop {
        let n = read_full(&mut reader_a, &mut buf_a).map_err(|e| Error::io(a, e))?;
        let m = read_full(&mut reader_b, &mut buf_b).map_err(|e| Error::io(b, e))?;
        if n != m || buf_a[..n] != buf_b[..m] {
            return Ok(false);
        }
        if n == 0 {
            return Ok(true);
        }
    }
}

// Fill `buf` as far as the reader allows; short only at EOF
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Read the whole file into memory
pub fn read_contents(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// SHA-256 of everything `reader` yields, fed to one engine in fixed reads.
///
/// Read failures are reported against `source`; engine failures come back
/// as [`Error::Digest`].
pub fn hash_reader<R: Read>(reader: R, source: &Path) -> Result<SHA256Digest> {
    feed(&mut SHA256::new(), reader, source)
}

fn feed<A: DigestAlgorithm, R: Read>(engine: &mut A, mut reader: R, source: &Path) -> Result<A::Digest> {
    let mut buf = [0u8; READ_CHUNK];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::io(source, e)),
        };
        engine.update(&buf[..n])?;
    }
    Ok(engine.finalize()?)
}

/// SHA-256 of a file's contents. An empty file yields the empty-input digest.
pub fn hash_file(path: &Path) -> Result<SHA256Digest> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let digest = hash_reader(BufReader::new(file), path)?;
    debug!(path = %path.display(), %digest, "hashed file");
    Ok(digest)
}
