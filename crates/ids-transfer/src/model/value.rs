//! Value objects composed inside a transfer.
//!
//! All three types are immutable with value equality: byte-content equality
//! for digests, string equality for tokens.

use std::fmt;

/// Hash functions recognized by the data-transfer vocabulary.
///
/// Encoded in RDF as canonical string tokens (e.g. `"SHA-512"`); unknown
/// tokens are rejected on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFunction {
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashFunction {
    /// All recognized hash functions.
    pub const ALL: [HashFunction; 5] = [
        HashFunction::Md5,
        HashFunction::Sha1,
        HashFunction::Sha256,
        HashFunction::Sha384,
        HashFunction::Sha512,
    ];

    /// Returns the canonical vocabulary token for this function.
    pub fn token(self) -> &'static str {
        match self {
            HashFunction::Md5 => "MD5",
            HashFunction::Sha1 => "SHA-1",
            HashFunction::Sha256 => "SHA-256",
            HashFunction::Sha384 => "SHA-384",
            HashFunction::Sha512 => "SHA-512",
        }
    }

    /// Resolves a canonical token back to its constant.
    pub fn from_token(token: &str) -> Option<HashFunction> {
        match token {
            "MD5" => Some(HashFunction::Md5),
            "SHA-1" => Some(HashFunction::Sha1),
            "SHA-256" => Some(HashFunction::Sha256),
            "SHA-384" => Some(HashFunction::Sha384),
            "SHA-512" => Some(HashFunction::Sha512),
            _ => None,
        }
    }

    /// Returns the digest size in bytes this function produces.
    pub fn digest_len(self) -> usize {
        match self {
            HashFunction::Md5 => 16,
            HashFunction::Sha1 => 20,
            HashFunction::Sha256 => 32,
            HashFunction::Sha384 => 48,
            HashFunction::Sha512 => 64,
        }
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A binary payload digest.
///
/// Serialized as an uppercase hex literal typed `xsd:hexBinary` so the exact
/// byte sequence survives the round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PayloadDigest(Vec<u8>);

impl PayloadDigest {
    /// Wraps raw digest bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the digest size in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the empty digest.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encodes the digest as uppercase hex (the XSD canonical form).
    pub fn to_hex(&self) -> String {
        hex::encode_upper(&self.0)
    }

    /// Decodes a hex literal (either case) back to the exact byte sequence.
    pub fn from_hex(lexical: &str) -> Result<Self, hex::FromHexError> {
        hex::decode(lexical).map(Self)
    }
}

impl From<Vec<u8>> for PayloadDigest {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for PayloadDigest {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

/// Bearer token attached to a transfer.
///
/// No independent identity: two tokens are equal when their values are equal.
/// Built via [`AuthTokenBuilder`](crate::model::AuthTokenBuilder), which
/// rejects empty values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthToken {
    token_value: String,
}

impl AuthToken {
    pub(crate) fn new(token_value: String) -> Self {
        Self { token_value }
    }

    /// The wrapped token string.
    pub fn token_value(&self) -> &str {
        &self.token_value
    }
}
