//! Core data types for cidfmt

use crate::core::error::{CidError, Result};
use crate::core::multihash::{read_varint, write_varint, Multihash, SHA2_256, SHA2_256_LEN};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Multicodec code of dag-pb, the only codec a CIDv0 can carry
pub const DAG_PB: u64 = 0x70;

/// CID versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Version {
    /// Legacy form: bare sha2-256 multihash, implicitly dag-pb
    V0,
    /// Version-tagged form carrying an explicit codec
    V1,
}

impl Version {
    pub fn as_u64(self) -> u64 {
        match self {
            Version::V0 => 0,
            Version::V1 => 1,
        }
    }
}

impl TryFrom<u64> for Version {
    type Error = CidError;

    fn try_from(version: u64) -> Result<Self> {
        match version {
            0 => Ok(Version::V0),
            1 => Ok(Version::V1),
            other => Err(CidError::invalid_version(other)),
        }
    }
}

impl From<Version> for u64 {
    fn from(version: Version) -> Self {
        version.as_u64()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cidv{}", self.as_u64())
    }
}

/// All the metadata of a CID, without the digest itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix {
    pub version: Version,
    pub codec: u64,
    pub hash_code: u64,
    pub hash_len: usize,
}

impl Prefix {
    /// Varint form of the prefix; V0 omits version and codec
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8);
        if self.version == Version::V1 {
            write_varint(&mut out, self.version.as_u64());
            write_varint(&mut out, self.codec);
        }
        write_varint(&mut out, self.hash_code);
        write_varint(&mut out, self.hash_len as u64);
        out
    }
}

/// A decoded content identifier
///
/// Values are immutable; version conversion always produces a new value.
/// A `Cid` with `Version::V0` always carries dag-pb and a 32-byte sha2-256
/// digest, which every constructor enforces.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cid {
    version: Version,
    codec: u64,
    hash: Multihash,
}

impl Cid {
    /// Create a legacy CIDv0 from a sha2-256 multihash
    pub fn new_v0(hash: Multihash) -> Result<Self> {
        if !hash.is_legacy_sha256() {
            return Err(CidError::IncompatibleVersionDowngrade {
                codec: DAG_PB,
                hash: hash.code(),
            });
        }
        Ok(Self {
            version: Version::V0,
            codec: DAG_PB,
            hash,
        })
    }

    /// Create a CIDv1
    pub fn new_v1(codec: u64, hash: Multihash) -> Self {
        Self {
            version: Version::V1,
            codec,
            hash,
        }
    }

    /// Create a CID of the given version, enforcing the V0 invariant
    pub fn new(version: Version, codec: u64, hash: Multihash) -> Result<Self> {
        match version {
            Version::V0 if codec != DAG_PB => Err(CidError::IncompatibleVersionDowngrade {
                codec,
                hash: hash.code(),
            }),
            Version::V0 => Self::new_v0(hash),
            Version::V1 => Ok(Self::new_v1(codec, hash)),
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn codec(&self) -> u64 {
        self.codec
    }

    pub fn hash(&self) -> &Multihash {
        &self.hash
    }

    pub fn prefix(&self) -> Prefix {
        Prefix {
            version: self.version,
            codec: self.codec,
            hash_code: self.hash.code(),
            hash_len: self.hash.size(),
        }
    }

    /// Canonical binary form
    ///
    /// V0 is the bare multihash; V1 is `varint(1) varint(codec) multihash`.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.version {
            Version::V0 => self.hash.to_bytes(),
            Version::V1 => {
                let mut out = Vec::with_capacity(self.hash.size() + 8);
                write_varint(&mut out, self.version.as_u64());
                write_varint(&mut out, self.codec);
                self.hash.write_bytes(&mut out);
                out
            }
        }
    }

    /// Parse the binary form, dispatching on legacy vs version-tagged layout
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if Self::looks_legacy(bytes) {
            let hash = Multihash::from_bytes(bytes)?;
            return Self::new_v0(hash);
        }

        let (version, rest) = read_varint(bytes, "version")?;
        match version {
            1 => {}
            0 => {
                return Err(CidError::malformed(
                    "explicit version tag 0 is not a valid CIDv0 encoding",
                ))
            }
            other => return Err(CidError::invalid_version(other)),
        }
        let (codec, rest) = read_varint(rest, "codec")?;
        let hash = Multihash::from_bytes(rest)?;
        Ok(Self::new_v1(codec, hash))
    }

    /// A legacy multihash starts with the sha2-256 code and a 32-byte length
    pub(crate) fn looks_legacy(bytes: &[u8]) -> bool {
        bytes.len() >= 2 && bytes[0] == SHA2_256 as u8 && bytes[1] == SHA2_256_LEN as u8
    }

    /// Convert to CIDv0, failing unless this is dag-pb over sha2-256
    pub fn to_v0(&self) -> Result<Self> {
        if self.version == Version::V0 {
            return Ok(self.clone());
        }
        if self.codec != DAG_PB || !self.hash.is_legacy_sha256() {
            return Err(CidError::IncompatibleVersionDowngrade {
                codec: self.codec,
                hash: self.hash.code(),
            });
        }
        Self::new_v0(self.hash.clone())
    }

    /// Convert to CIDv1, preserving codec and multihash
    pub fn to_v1(&self) -> Self {
        Self::new_v1(self.codec, self.hash.clone())
    }

    /// Convert to the requested version
    pub fn to_version(&self, version: Version) -> Result<Self> {
        match version {
            Version::V0 => self.to_v0(),
            Version::V1 => Ok(self.to_v1()),
        }
    }
}

impl fmt::Display for Cid {
    /// Default string form: bare base58btc for V0, base32 (`b`) for V1
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        match self.version {
            Version::V0 => f.write_str(&crate::multibase::encode_base58btc(&bytes)),
            Version::V1 => write!(f, "b{}", crate::multibase::encode_base32_lower(&bytes)),
        }
    }
}

impl fmt::Debug for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cid({})", self)
    }
}

impl FromStr for Cid {
    type Err = CidError;

    /// Parse against the process-wide default registry
    fn from_str(s: &str) -> Result<Self> {
        let (cid, _) = crate::resolve::resolve_identifier(
            crate::registry::global(),
            s,
            &crate::resolve::ResolveOptions::default(),
        )?;
        Ok(cid)
    }
}

// Serialize as the default string form rather than raw bytes
impl Serialize for Cid {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cid {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sha256_hash() -> Multihash {
        Multihash::wrap(SHA2_256, (0u8..32).collect::<Vec<_>>())
    }

    #[test]
    fn test_v0_bytes_are_bare_multihash() {
        let cid = Cid::new_v0(sha256_hash()).unwrap();
        assert_eq!(cid.to_bytes(), sha256_hash().to_bytes());
        assert_eq!(cid.codec(), DAG_PB);
    }

    #[test]
    fn test_v1_bytes_layout() {
        let cid = Cid::new_v1(0x55, sha256_hash());
        let bytes = cid.to_bytes();
        assert_eq!(&bytes[..4], &[0x01, 0x55, 0x12, 0x20]);
        assert_eq!(Cid::from_bytes(&bytes).unwrap(), cid);
    }

    #[test]
    fn test_from_bytes_dispatch() {
        let v0 = Cid::new_v0(sha256_hash()).unwrap();
        let parsed = Cid::from_bytes(&v0.to_bytes()).unwrap();
        assert_eq!(parsed.version(), Version::V0);

        let v1 = v0.to_v1();
        let parsed = Cid::from_bytes(&v1.to_bytes()).unwrap();
        assert_eq!(parsed.version(), Version::V1);
        assert_eq!(parsed.codec(), DAG_PB);
    }

    #[test]
    fn test_unknown_version_tag() {
        let result = Cid::from_bytes(&[0x02, 0x55, 0x00, 0x00]);
        assert!(matches!(
            result,
            Err(CidError::InvalidCidVersion { version: 2 })
        ));
    }

    #[test]
    fn test_explicit_zero_tag_rejected() {
        let result = Cid::from_bytes(&[0x00, 0x70, 0x00, 0x00]);
        assert!(matches!(
            result,
            Err(CidError::MalformedIdentifierBytes { .. })
        ));
    }

    #[test]
    fn test_v0_constructor_enforces_invariant() {
        let blake3 = Multihash::wrap(0x1e, vec![0; 32]);
        assert!(Cid::new_v0(blake3.clone()).is_err());
        assert!(Cid::new(Version::V0, 0x55, sha256_hash()).is_err());
        assert!(Cid::new(Version::V0, DAG_PB, blake3).is_err());
        assert!(Cid::new(Version::V0, DAG_PB, sha256_hash()).is_ok());
    }

    #[test]
    fn test_downgrade_raw_fails() {
        let cid = Cid::new_v1(0x55, sha256_hash());
        assert!(matches!(
            cid.to_v0(),
            Err(CidError::IncompatibleVersionDowngrade { codec: 0x55, .. })
        ));
    }

    #[test]
    fn test_conversion_idempotent() {
        let v1 = Cid::new_v1(DAG_PB, sha256_hash());
        assert_eq!(v1.to_v1(), v1);

        let v0 = v1.to_v0().unwrap();
        assert_eq!(v0.to_v0().unwrap(), v0);
        assert_eq!(v0.to_v1(), v1);
    }

    #[test]
    fn test_version_try_from() {
        assert_eq!(Version::try_from(0).unwrap(), Version::V0);
        assert_eq!(Version::try_from(1).unwrap(), Version::V1);
        assert!(matches!(
            Version::try_from(7),
            Err(CidError::InvalidCidVersion { version: 7 })
        ));
    }

    #[test]
    fn test_prefix_bytes() {
        let v1 = Cid::new_v1(0x71, sha256_hash());
        assert_eq!(v1.prefix().to_bytes(), vec![0x01, 0x71, 0x12, 0x20]);

        let v0 = Cid::new_v0(sha256_hash()).unwrap();
        assert_eq!(v0.prefix().to_bytes(), vec![0x12, 0x20]);
    }
}
