use core::fmt;

use byteorder::{BigEndian, ByteOrder};

use crate::compress::compress_block;
use crate::consts::{
    State256, BLOCK_LEN, BLOCK_WORDS, DIGEST_LEN, H256_256, LENGTH_FIELD_LEN, PADDING_MARKER,
};
use crate::digest::Digest;
use crate::errors::HasherError;

/// Incremental SHA-256 hasher.
///
/// Bytes are absorbed with [`update`](Self::update) in chunks of any size and
/// the digest is produced by [`finalize`](Self::finalize). Once finalized the
/// hasher is closed: the digest can be read again, but no more data can be
/// added.
#[derive(Clone)]
pub struct Sha256Hasher {
    state: State256,
    /// Input bytes that do not yet form a whole block.
    pending: [u8; BLOCK_LEN],
    pending_off: usize,
    /// Message length in bits, excluding padding, modulo 2^64.
    bits_processed: u64,
    bytes_processed: u64,
    closed: bool,
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self {
            state: H256_256,
            pending: [0u8; BLOCK_LEN],
            pending_off: 0,
            bits_processed: 0,
            bytes_processed: 0,
            closed: false,
        }
    }
}

impl Sha256Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes a complete message in one call.
    pub fn digest(data: &[u8]) -> Digest {
        let mut hasher = Self::new();
        hasher.ingest(data);
        hasher.finalize()
    }

    /// Absorbs `data` into the running hash.
    ///
    /// Fails with [`HasherError::InvalidState`] once the hasher has been
    /// finalized. Empty input is accepted and changes nothing.
    pub fn update(&mut self, data: &[u8]) -> Result<(), HasherError> {
        if self.closed {
            return Err(HasherError::InvalidState);
        }
        self.ingest(data);
        Ok(())
    }

    /// Closes the hasher and returns the digest.
    ///
    /// Calling this again returns the same digest without recomputing it.
    pub fn finalize(&mut self) -> Digest {
        let words = self.finalize_words();
        let mut out = [0u8; DIGEST_LEN];
        BigEndian::write_u32_into(&words, &mut out);
        Digest::from(out)
    }

    /// Like [`finalize`](Self::finalize), but returns the eight state words.
    pub fn finalize_words(&mut self) -> State256 {
        if !self.closed {
            self.pad();
            self.closed = true;
        }
        self.state
    }

    /// Copy of the chaining state.
    ///
    /// While the hasher is open this only reflects the blocks compressed so
    /// far, not the bytes still pending; it is not a digest of the input seen.
    pub fn peek(&self) -> State256 {
        self.state
    }

    /// Number of message bytes passed to `update`.
    ///
    /// Kept apart from the bit count, which wraps eight times sooner.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_processed
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ingest(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        let len = data.len() as u64;
        self.bytes_processed = self.bytes_processed.wrapping_add(len);
        self.bits_processed = self.bits_processed.wrapping_add(len.wrapping_mul(8));
        self.absorb(data);
    }

    fn absorb(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let take = (BLOCK_LEN - self.pending_off).min(data.len());
            let (head, rest) = data.split_at(take);
            self.pending[self.pending_off..self.pending_off + take].copy_from_slice(head);
            self.pending_off += take;
            data = rest;

            if self.pending_off == BLOCK_LEN {
                let mut words = [0u32; BLOCK_WORDS];
                BigEndian::read_u32_into(&self.pending, &mut words);
                compress_block(&mut self.state, &words);
                self.pending_off = 0;
            }
        }
    }

    fn pad(&mut self) {
        let bit_len = self.bits_processed;

        self.absorb(&[PADDING_MARKER]);

        // The length field must close a block. If it does not fit behind the
        // marker, the zeros run on through one more block.
        let mut space = BLOCK_LEN - self.pending_off;
        if space < LENGTH_FIELD_LEN {
            space += BLOCK_LEN;
        }

        let mut padding = [0u8; BLOCK_LEN + LENGTH_FIELD_LEN];
        let padding = &mut padding[..space];
        BigEndian::write_u64(&mut padding[space - LENGTH_FIELD_LEN..], bit_len);
        self.absorb(padding);

        assert_eq!(self.pending_off, 0, "padding did not end on a block boundary");
        log::trace!("finalized {} bits with {} padding bytes", bit_len, space + 1);
    }
}

impl fmt::Debug for Sha256Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha256Hasher")
            .field("bytes_processed", &self.bytes_processed())
            .field("pending", &self.pending_off)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}
