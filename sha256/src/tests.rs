#[allow(clippy::module_inception)]
#[cfg(test)]
mod tests {
    use crate::consts::{BLOCK_LEN, H256_256};
    use crate::{hash, Digest, HasherError, Sha256Hasher};

    /// SHA-256 of `n` repetitions of `'a'`, covering both padding branches.
    const REPEATED_A: [(usize, &str); 12] = [
        (0, "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
        (1, "ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb"),
        (55, "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318"),
        (56, "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a"),
        (57, "f13b2d724659eb3bf47f2dd6af1accc87b81f09f59f2b75e5c0bed6589dfe8c6"),
        (63, "7d3e74a05d7db15bce4ad9ec0658ea98e3f06eeecf16b4c6fff2da457ddc2f34"),
        (64, "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb"),
        (65, "635361c48bb9eab14198e76ea8ab7f1a41685d6ad62aa9146d301d4f17eb0ae0"),
        (119, "31eba51c313a5c08226adf18d4a359cfdfd8d2e816b13f4af952f7ea6584dcfb"),
        (120, "2f3d335432c70b580af0e8e1b3674a7c020d683aa5f73aaaedfdc55af904c21c"),
        (127, "c57e9278af78fa3cab38667bef4ce29d783787a2f731d4e12200270f0c32320a"),
        (128, "6836cf13bac400e9105071cd6af47084dfacad4e5e302c94bfed24e013afb73e"),
    ];

    #[test]
    fn test_padding_boundaries() {
        for (n, expected) in REPEATED_A {
            let input = vec![b'a'; n];
            assert_eq!(hash(&input).to_hex(), expected, "length {}", n);
        }
    }

    #[test]
    fn test_padding_boundaries_byte_at_a_time() {
        for (n, expected) in REPEATED_A {
            let mut hasher = Sha256Hasher::new();
            for _ in 0..n {
                hasher.update(b"a").unwrap();
            }
            assert_eq!(hasher.finalize().to_hex(), expected, "length {}", n);
        }
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut hasher = Sha256Hasher::new();
        hasher.update(b"abc").unwrap();
        let first = hasher.finalize();
        let second = hasher.finalize();
        let third = hasher.finalize();
        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(hasher.bytes_processed(), 3);
    }

    #[test]
    fn test_update_after_finalize_fails() {
        let mut hasher = Sha256Hasher::new();
        hasher.update(b"abc").unwrap();
        let digest = hasher.finalize();

        assert_eq!(hasher.update(b"more"), Err(HasherError::InvalidState));
        // Empty input is rejected too: the hasher is closed, not merely full.
        assert_eq!(hasher.update(&[]), Err(HasherError::InvalidState));
        assert_eq!(hasher.finalize(), digest);
        assert_eq!(hasher.bytes_processed(), 3);
    }

    #[test]
    fn test_empty_updates_change_nothing() {
        let mut hasher = Sha256Hasher::new();
        hasher.update(&[]).unwrap();
        hasher.update(b"ab").unwrap();
        hasher.update(&[]).unwrap();
        hasher.update(b"c").unwrap();
        hasher.update(&[]).unwrap();
        assert_eq!(hasher.bytes_processed(), 3);
        assert_eq!(hasher.finalize(), hash(b"abc"));
    }

    #[test]
    fn test_peek_tracks_compressed_blocks() {
        let mut hasher = Sha256Hasher::new();
        assert_eq!(hasher.peek(), H256_256);

        hasher.update(&[0u8; BLOCK_LEN - 1]).unwrap();
        assert_eq!(hasher.peek(), H256_256, "no block compressed yet");

        hasher.update(&[0u8]).unwrap();
        let after_one_block = hasher.peek();
        assert_ne!(after_one_block, H256_256);

        // The snapshot is an owned copy.
        let mut snapshot = hasher.peek();
        snapshot[0] = 0;
        assert_eq!(hasher.peek(), after_one_block);

        let words = hasher.finalize_words();
        assert_eq!(hasher.peek(), words);
        assert!(hasher.is_closed());
    }

    #[test]
    fn test_finalize_words_matches_bytes() {
        let mut by_words = Sha256Hasher::new();
        by_words.update(b"abc").unwrap();
        let words = by_words.finalize_words();

        let mut by_bytes = Sha256Hasher::new();
        by_bytes.update(b"abc").unwrap();
        let digest = by_bytes.finalize();

        assert_eq!(words[0], 0xba7816bf);
        assert_eq!(words[7], 0xf20015ad);
        assert_eq!(by_words.finalize(), digest);
    }

    #[test]
    fn test_clones_are_independent() {
        let mut a = Sha256Hasher::new();
        a.update(b"The quick brown fox ").unwrap();
        let mut b = a.clone();

        a.update(b"jumps over the lazy dog").unwrap();
        b.update(b"jumps over the lazy dog.").unwrap();

        assert_eq!(
            a.finalize(),
            Digest::from_hex("d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592")
                .unwrap()
        );
        assert_eq!(
            b.finalize(),
            Digest::from_hex("ef537f25c895bfa782526529a9b63d97aa631564d5d789c2b765448c8635fb6c")
                .unwrap()
        );
    }

    #[test]
    fn test_debug_hides_message_bytes() {
        let mut hasher = Sha256Hasher::new();
        hasher.update(b"secret").unwrap();
        let text = format!("{:?}", hasher);
        assert!(text.contains("bytes_processed: 6"));
        assert!(!text.contains("secret"));
    }
}
