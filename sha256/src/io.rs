//! One-shot and streaming helpers over [`Sha256Hasher`].

use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;

use crate::digest::Digest;
use crate::hasher::Sha256Hasher;

/// Default read size for streaming input, used by [`hash_file`].
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

impl Write for Sha256Hasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn hash(data: &[u8]) -> Digest {
    Sha256Hasher::digest(data)
}

/// Hashes the UTF-8 encoding of `s`.
pub fn hash_str(s: &str) -> Digest {
    Sha256Hasher::digest(s.as_bytes())
}

/// Hashes everything `reader` yields, reading at most `chunk_size` bytes at a
/// time.
///
/// Reading stops at the first `Ok(0)`. A read error aborts hashing and is
/// returned unchanged; the partial state is discarded.
pub fn hash_reader<R: Read>(mut reader: R, chunk_size: usize) -> io::Result<Digest> {
    if chunk_size == 0 {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            "chunk size must be non-zero",
        ));
    }

    let mut hasher = Sha256Hasher::new();
    let mut buf = vec![0u8; chunk_size];
    let mut chunks = 0usize;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n])?;
        chunks += 1;
    }

    log::debug!(
        "hashed {} bytes in {} chunks",
        hasher.bytes_processed(),
        chunks
    );
    Ok(hasher.finalize())
}

pub fn hash_file<P: AsRef<Path>>(path: P) -> io::Result<Digest> {
    let path = path.as_ref();
    log::trace!("hash file: {:?}", path);
    let file = File::open(path)?;
    hash_reader(file, DEFAULT_CHUNK_SIZE)
}

/// Lowercase hex, two characters per byte, no separators.
pub fn hex_encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
