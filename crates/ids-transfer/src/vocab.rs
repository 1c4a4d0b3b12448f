//! RDF vocabulary for the data-transfer namespace.
//!
//! Maps each logical entity field to its predicate IRI. The registry is a
//! plain immutable table; encoder and decoder take it as an explicit argument
//! so tests can substitute their own namespace without touching global state.

/// The `rdf:type` predicate.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// XSD datatype for plain string literals.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// XSD datatype for timezone-aware timestamps.
pub const XSD_DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

/// XSD datatype for hex-encoded binary literals.
pub const XSD_HEX_BINARY: &str = "http://www.w3.org/2001/XMLSchema#hexBinary";

/// Predicate table for one entity type.
///
/// Each field of [`DataTransfer`](crate::model::DataTransfer) maps to exactly
/// one predicate IRI under a stable vocabulary namespace, plus the two class
/// IRIs used for `rdf:type` triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredicateRegistry {
    /// Class IRI asserted on the transfer subject.
    pub transfer_class: &'static str,
    /// Class IRI asserted on the auth-token node.
    pub auth_token_class: &'static str,
    pub sender: &'static str,
    pub receiver: &'static str,
    pub created_at: &'static str,
    pub hash_function: &'static str,
    pub payload_digest: &'static str,
    pub auth_token: &'static str,
    pub token_value: &'static str,
}

/// The industrial-dataspace vocabulary, used as the process-wide default.
pub const IDS: PredicateRegistry = PredicateRegistry {
    transfer_class: "https://schema.industrialdataspace.org/DataTransfer",
    auth_token_class: "https://schema.industrialdataspace.org/AuthToken",
    sender: "https://schema.industrialdataspace.org/dataTransfer/sender",
    receiver: "https://schema.industrialdataspace.org/dataTransfer/receiver",
    created_at: "https://schema.industrialdataspace.org/dataTransfer/transferCreatedAt",
    hash_function: "https://schema.industrialdataspace.org/dataTransfer/hashFunction",
    payload_digest: "https://schema.industrialdataspace.org/dataTransfer/payloadDigest",
    auth_token: "https://schema.industrialdataspace.org/dataTransfer/authToken",
    token_value: "https://schema.industrialdataspace.org/authToken/tokenValue",
};

impl Default for PredicateRegistry {
    fn default() -> Self {
        IDS
    }
}

impl PredicateRegistry {
    /// Returns every predicate in the registry (excluding class IRIs).
    pub fn predicates(&self) -> [&'static str; 7] {
        [
            self.sender,
            self.receiver,
            self.created_at,
            self.hash_function,
            self.payload_digest,
            self.auth_token,
            self.token_value,
        ]
    }
}
