//! Incremental SHA-256 (FIPS 180-4).
//!
//! Data can be fed in pieces of any size, so large inputs such as network
//! buffers or files are hashed without holding the whole message in memory.
//!
//! # Example (using state explicitly to hash data piece by piece)
//!
//! ```
//! use sha256_stream::Sha256Hasher;
//!
//! let mut hasher = Sha256Hasher::new();
//! hasher.update(b"some ").unwrap();
//! hasher.update(b"data!").unwrap();
//! let digest: [u8; 32] = hasher.finalize().into();
//! let expected: [u8; 32] = sha256_stream::hash(b"some data!").into();
//! assert_eq!(digest, expected);
//! ```
//!
//! # Example (one-shot)
//!
//! ```
//! let digest = sha256_stream::hash(b"abc");
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! # Example (using as an `std::io::Write`)
//!
//! ```
//! use sha256_stream::Sha256Hasher;
//!
//! let mut reader: &[u8] = b"some data";
//! let mut hasher = Sha256Hasher::new();
//!
//! std::io::copy(&mut reader, &mut hasher).unwrap();
//! assert_eq!(hasher.finalize(), sha256_stream::hash(b"some data"));
//! ```

#![forbid(unsafe_code)]

mod compress;
#[rustfmt::skip]
pub mod consts;
mod digest;
mod errors;
mod hasher;
pub mod io;

mod tests;

pub use compress::{compress256, compress_block};
pub use consts::State256;
pub use digest::Digest;
pub use errors::HasherError;
pub use hasher::Sha256Hasher;
pub use io::{hash, hash_file, hash_reader, hash_str, hex_encode, DEFAULT_CHUNK_SIZE};
