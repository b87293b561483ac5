use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::consts::DIGEST_LEN;
use crate::errors::HasherError;

/// A finished SHA-256 digest.
///
/// The text form is 64 lowercase hex characters, first byte first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, HasherError> {
        if s.len() != DIGEST_LEN * 2 {
            return Err(HasherError::InvalidDigestHex {
                reason: format!("expected {} characters, got {}", DIGEST_LEN * 2, s.len()),
            });
        }
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| HasherError::InvalidDigestHex {
            reason: e.to_string(),
        })?;
        Ok(Self(bytes))
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = HasherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({:x})", self)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn test_hex_text_form() {
        let digest: Digest = ABC.parse().unwrap();
        assert_eq!(digest.to_hex(), ABC);
        assert_eq!(digest.to_string(), ABC);
        assert_eq!(format!("{:x}", digest), ABC);
        assert_eq!(digest.as_bytes()[0], 0xba);
        assert_eq!(digest.as_bytes()[31], 0xad);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        // One extra byte pair.
        let long = format!("{ABC}00");
        assert!(matches!(
            Digest::from_hex(&long),
            Err(HasherError::InvalidDigestHex { .. })
        ));
        assert!(Digest::from_hex(&ABC[..62]).is_err());
        assert!(Digest::from_hex(&ABC.replace('b', "g")).is_err());
    }

    #[test]
    fn test_accepts_uppercase_hex() {
        let digest = Digest::from_hex(&ABC.to_uppercase()).unwrap();
        assert_eq!(digest.to_hex(), ABC);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let digest = Digest::from_hex(ABC).unwrap();
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{ABC}\""));
        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
        assert!(serde_json::from_str::<Digest>("\"abcd\"").is_err());
    }
}
