//! Error types for building, encoding, and decoding transfers.

use thiserror::Error;

use crate::model::HashFunction;

/// Error raised when an entity fails validated construction.
///
/// Builders return this for missing or inconsistent fields. The decoder feeds
/// recovered fields through the same builder, so incomplete documents surface
/// the identical violation as direct construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("required field {field} is not set")]
    MissingField { field: &'static str },

    #[error("payload digest is {actual} bytes but {function} produces {expected}")]
    DigestLengthMismatch {
        function: HashFunction,
        expected: usize,
        actual: usize,
    },

    #[error("auth token value is empty")]
    EmptyTokenValue,
}

/// Error during RDF encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("failed to build RDF graph: {message}")]
    Graph { message: String },

    #[error("failed to serialize Turtle: {message}")]
    Serialize { message: String },
}

/// Error during RDF decoding.
///
/// Every variant except [`DecodeError::Constraint`] is a malformed-input
/// failure: the document does not denote a well-formed transfer graph.
/// `Constraint` carries the builder's own violation when the graph is valid
/// RDF but incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("failed to parse Turtle: {message}")]
    Turtle { message: String },

    #[error("failed to read RDF graph: {message}")]
    Graph { message: String },

    #[error("no <{class}> resource found in document")]
    SubjectNotFound { class: String },

    #[error("document contains {count} <{class}> resources, expected exactly one")]
    AmbiguousSubject { class: String, count: usize },

    #[error("subject <{iri}> not found in document")]
    ResourceNotFound { iri: String },

    #[error("object of <{predicate}> is not {expected}")]
    UnexpectedTermKind {
        predicate: &'static str,
        expected: &'static str,
    },

    #[error("object of <{predicate}> has datatype <{found}>, expected <{expected}>")]
    WrongDatatype {
        predicate: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("invalid {field} IRI: {value}")]
    InvalidIri { field: &'static str, value: String },

    #[error("invalid timestamp literal: {value}")]
    InvalidTimestamp { value: String },

    #[error("invalid hex digest literal: {value}")]
    InvalidDigest { value: String },

    #[error("unknown hash function token: {token}")]
    UnknownHashFunction { token: String },

    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),
}
