use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IdError;

/// Hex characters in the external identifier representation.
pub const HEX_LEN: usize = 24;

/// The store's native document identifier.
///
/// A `DocumentId` is 12 bytes: a 4-byte big-endian creation timestamp
/// (seconds since the Unix epoch) followed by 8 random bytes. Externally it
/// travels as a 24-character lowercase hex string; every operation that
/// addresses a single document decodes that string through [`from_hex`]
/// before the store is consulted.
///
/// [`from_hex`]: DocumentId::from_hex
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId([u8; 12]);

impl DocumentId {
    /// Generate a fresh identifier stamped with the current time.
    pub fn generate() -> Self {
        Self::generate_at(Utc::now())
    }

    /// Generate a fresh identifier stamped with the given instant.
    pub fn generate_at(instant: DateTime<Utc>) -> Self {
        let mut bytes = [0u8; 12];
        let secs = instant.timestamp().clamp(0, u32::MAX as i64) as u32;
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        rand::thread_rng().fill_bytes(&mut bytes[4..]);
        Self(bytes)
    }

    /// Create an identifier from raw bytes (stored form).
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// The raw 12 bytes.
    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// Decode the external 24-character hex representation.
    ///
    /// Fails with [`IdError`] on any malformed input; a malformed external
    /// id never reaches the store layer.
    pub fn from_hex(s: &str) -> Result<Self, IdError> {
        if s.len() != HEX_LEN {
            return Err(IdError::InvalidLength {
                expected: HEX_LEN,
                actual: s.len(),
            });
        }
        let bytes = hex::decode(s).map_err(|e| IdError::InvalidHex(e.to_string()))?;
        let mut arr = [0u8; 12];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// The external 24-character hex representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// The creation instant recovered from the leading 4 bytes.
    pub fn timestamp(&self) -> DateTime<Utc> {
        let mut secs = [0u8; 4];
        secs.copy_from_slice(&self.0[..4]);
        Utc.timestamp_opt(u32::from_be_bytes(secs) as i64, 0)
            .single()
            .unwrap_or_else(|| Utc.timestamp_opt(0, 0).unwrap())
    }
}

impl fmt::Debug for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentId({})", self.short_hex())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for DocumentId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// Documents are JSON values, so identifiers serialize as their hex string.
impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn generate_produces_distinct_ids() {
        let a = DocumentId::generate();
        let b = DocumentId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn hex_roundtrip() {
        let id = DocumentId::generate();
        let hex = id.to_hex();
        assert_eq!(hex.len(), HEX_LEN);
        let parsed = DocumentId::from_hex(&hex).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn empty_string_is_rejected() {
        assert_eq!(
            DocumentId::from_hex(""),
            Err(IdError::InvalidLength {
                expected: HEX_LEN,
                actual: 0
            })
        );
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = DocumentId::from_hex("abc123").unwrap_err();
        assert!(matches!(err, IdError::InvalidLength { actual: 6, .. }));
    }

    #[test]
    fn bad_charset_is_rejected() {
        let err = DocumentId::from_hex("zzzzzzzzzzzzzzzzzzzzzzzz").unwrap_err();
        assert!(matches!(err, IdError::InvalidHex(_)));
    }

    #[test]
    fn timestamp_is_recovered() {
        let instant = Utc.with_ymd_and_hms(2023, 8, 31, 12, 30, 45).unwrap();
        let id = DocumentId::generate_at(instant);
        assert_eq!(id.timestamp(), instant);
    }

    #[test]
    fn display_is_full_hex() {
        let id = DocumentId::generate();
        assert_eq!(format!("{id}"), id.to_hex());
    }

    #[test]
    fn debug_is_short() {
        let id = DocumentId::from_bytes([0xab; 12]);
        assert_eq!(format!("{id:?}"), "DocumentId(abababab)");
    }

    #[test]
    fn serde_is_hex_string() {
        let id = DocumentId::from_bytes([0x01; 12]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"010101010101010101010101\"");
        let parsed: DocumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn from_str_parses() {
        let id: DocumentId = "0123456789abcdef01234567".parse().unwrap();
        assert_eq!(id.to_hex(), "0123456789abcdef01234567");
    }

    proptest! {
        #[test]
        fn roundtrip_any_bytes(bytes in prop::array::uniform12(any::<u8>())) {
            let id = DocumentId::from_bytes(bytes);
            prop_assert_eq!(DocumentId::from_hex(&id.to_hex()).unwrap(), id);
        }

        #[test]
        fn arbitrary_strings_never_panic(s in ".*") {
            // Must fail cleanly, never panic, for any input shape.
            let _ = DocumentId::from_hex(&s);
        }
    }
}
