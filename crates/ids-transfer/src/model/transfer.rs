//! The DataTransfer entity.

use chrono::{DateTime, FixedOffset};
use sophia::iri::Iri;

use crate::codec::{decode_transfer, encode_transfer};
use crate::error::{DecodeError, EncodeError};
use crate::model::{AuthToken, HashFunction, PayloadDigest};
use crate::vocab;

/// A data transfer record: who sent what to whom, when, and under which
/// integrity proof.
///
/// Instances only exist fully populated. Construction goes through
/// [`DataTransferBuilder`](crate::model::DataTransferBuilder) (directly or via
/// the decoder), which enforces that every field is present and that the
/// digest length matches the declared hash function. Once built, a transfer is
/// immutable; encoding and decoding never mutate an existing instance.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTransfer {
    pub(crate) id: Iri<String>,
    pub(crate) sender: Iri<String>,
    pub(crate) receiver: Iri<String>,
    pub(crate) created_at: DateTime<FixedOffset>,
    pub(crate) hash_function: HashFunction,
    pub(crate) payload_digest: PayloadDigest,
    pub(crate) auth_token: AuthToken,
}

impl DataTransfer {
    /// The entity's identifying IRI.
    pub fn id(&self) -> &Iri<String> {
        &self.id
    }

    /// The sending party's IRI.
    pub fn sender(&self) -> &Iri<String> {
        &self.sender
    }

    /// The receiving party's IRI.
    pub fn receiver(&self) -> &Iri<String> {
        &self.receiver
    }

    /// When the transfer was created, offset-preserving.
    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.created_at
    }

    /// The hash function that produced [`payload_digest`](Self::payload_digest).
    pub fn hash_function(&self) -> HashFunction {
        self.hash_function
    }

    /// The payload's integrity digest.
    pub fn payload_digest(&self) -> &PayloadDigest {
        &self.payload_digest
    }

    /// The authorization token accompanying the transfer.
    pub fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Serializes this transfer to a self-contained Turtle document under the
    /// default vocabulary.
    pub fn to_rdf(&self) -> Result<String, EncodeError> {
        encode_transfer(self, &vocab::IDS)
    }

    /// Parses a transfer from a Turtle document under the default vocabulary.
    pub fn from_rdf(document: &str) -> Result<Self, DecodeError> {
        decode_transfer(document, &vocab::IDS)
    }
}
