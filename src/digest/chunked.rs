use std::fmt::Debug;

use byteorder::{BigEndian, ByteOrder};

use super::{Digest, DigestAlgorithm};
use crate::error::DigestError;

pub trait Chunk: AsMut<[u8]> + AsRef<[u8]> + Debug + Clone {
    const LEN: usize;

    fn new() -> Self;
}

/// A compression function over fixed-size chunks.
///
/// `update_chunk` is only ever called with exactly `Self::Chunk::LEN` bytes.
pub trait ChunkedDigestAlgorithm {
    type Chunk: Chunk;
    type Digest: Digest;

    fn new() -> Self;
    fn update_chunk(&mut self, chunk: &[u8]);
    fn digest(&self) -> Self::Digest;
}

/// Buffers arbitrary input into whole chunks and applies Merkle-Damgard
/// padding (0x80, zero fill, 64-bit big-endian bit length) on finalize.
#[derive(Debug, Clone)]
pub struct ChunkedDigestWrapper<Inner: ChunkedDigestAlgorithm> {
    // Hash state
    inner: Inner,
    // Message length (in bits)
    ml: u64,
    // In-progress chunk
    buffer_len: usize,
    buffer: Inner::Chunk,
    finalized: bool,
}

impl<Inner: ChunkedDigestAlgorithm> ChunkedDigestWrapper<Inner> {
    /// Bytes currently waiting for a full chunk. Always below the chunk length.
    pub fn buffer_len(&self) -> usize {
        self.buffer_len
    }

    /// Total number of bits passed to `update` so far.
    pub fn bit_len(&self) -> u64 {
        self.ml
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
}

impl<Inner: ChunkedDigestAlgorithm> DigestAlgorithm for ChunkedDigestWrapper<Inner> {
    type Digest = Inner::Digest;

    fn new() -> Self {
        ChunkedDigestWrapper {
            inner: Inner::new(),
            ml: 0,
            buffer_len: 0,
            buffer: Inner::Chunk::new(),
            finalized: false,
        }
    }

    fn update(&mut self, mut input: &[u8]) -> Result<(), DigestError> {
        if self.finalized {
            return Err(DigestError::AlreadyFinalized);
        }

        // Update message length (in bits), refusing to wrap the counter
        self.ml = (input.len() as u64)
            .checked_mul(8)
            .and_then(|bits| self.ml.checked_add(bits))
            .ok_or(DigestError::InputTooLarge)?;

        let buffer_len = self.buffer_len;
        let chunk_len = Inner::Chunk::LEN;
        let buffer = self.buffer.as_mut();

        // If buffer is already partially filled
        if buffer_len > 0 {
            let remaining = chunk_len - buffer_len;
            // If input is not long enough to fill remaining space in buffer
            if input.len() < remaining {
                // Copy the whole input into the buffer and return
                buffer[buffer_len..buffer_len + input.len()].copy_from_slice(input);
                self.buffer_len += input.len();
                return Ok(());
            } else {
                // Fill the remaining space with input data and process the chunk
                buffer[buffer_len..].copy_from_slice(&input[..remaining]);
                input = &input[remaining..];
                self.inner.update_chunk(buffer);
            }
        }

        // Buffer is empty at this point, so can directly read chunks from input
        let mut blocks = input.chunks_exact(chunk_len);
        for block in &mut blocks {
            self.inner.update_chunk(block);
        }
        let rest = blocks.remainder();

        // Partially fill the buffer with any left-over input
        buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
        Ok(())
    }

    fn finalize(&mut self) -> Result<Self::Digest, DigestError> {
        if self.finalized {
            return Err(DigestError::AlreadyFinalized);
        }

        let chunk_len = Inner::Chunk::LEN;
        let buffer = self.buffer.as_mut();

        // Append 1 bit
        buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // Ensure there's room to write the message length
        if self.buffer_len + 8 > chunk_len {
            buffer[self.buffer_len..].fill(0);
            self.buffer_len = 0;
            self.inner.update_chunk(buffer);
        }

        // Fill remaining space with zeros followed by the message length
        buffer[self.buffer_len..chunk_len - 8].fill(0);
        BigEndian::write_u64(&mut buffer[chunk_len - 8..], self.ml);
        // Final chunk computation
        self.inner.update_chunk(buffer);
        self.buffer_len = 0;
        self.finalized = true;
        Ok(self.inner.digest())
    }

    fn reset(&mut self) {
        *self = <Self as DigestAlgorithm>::new();
    }
}
