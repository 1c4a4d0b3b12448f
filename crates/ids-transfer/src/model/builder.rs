//! Builder API for validated transfer construction.
//!
//! Setters are fluent and infallible; all validation happens in `build()`,
//! which either returns a frozen entity or a [`ConstraintViolation`] naming
//! the offending field. `build()` snapshots the builder's current state, so a
//! reused builder never aliases an already-built entity.

use chrono::{DateTime, FixedOffset};
use sophia::iri::Iri;

use crate::error::ConstraintViolation;
use crate::model::{AuthToken, DataTransfer, HashFunction, PayloadDigest};

/// Builder for [`DataTransfer`].
#[derive(Debug, Clone, Default)]
pub struct DataTransferBuilder {
    id: Option<Iri<String>>,
    sender: Option<Iri<String>>,
    receiver: Option<Iri<String>>,
    created_at: Option<DateTime<FixedOffset>>,
    hash_function: Option<HashFunction>,
    payload_digest: Option<PayloadDigest>,
    auth_token: Option<AuthToken>,
}

impl DataTransferBuilder {
    /// Creates an empty builder. `build()` will fail until every required
    /// field is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with the identifying IRI already set.
    pub fn with_id(id: Iri<String>) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Sets the identifying IRI.
    pub fn id(mut self, id: Iri<String>) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the sending party.
    pub fn sender(mut self, sender: Iri<String>) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Sets the receiving party.
    pub fn receiver(mut self, receiver: Iri<String>) -> Self {
        self.receiver = Some(receiver);
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<FixedOffset>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the hash function declared for the payload digest.
    pub fn hash_function(mut self, hash_function: HashFunction) -> Self {
        self.hash_function = Some(hash_function);
        self
    }

    /// Sets the payload digest.
    pub fn payload_digest(mut self, payload_digest: PayloadDigest) -> Self {
        self.payload_digest = Some(payload_digest);
        self
    }

    /// Sets the authorization token.
    pub fn auth_token(mut self, auth_token: AuthToken) -> Self {
        self.auth_token = Some(auth_token);
        self
    }

    /// Validates all required fields and returns a frozen entity.
    ///
    /// Construction is all-or-nothing: any missing field, or a digest whose
    /// length does not match the declared hash function, fails without
    /// producing an entity. The builder itself is left untouched and can be
    /// amended and built again.
    pub fn build(&self) -> Result<DataTransfer, ConstraintViolation> {
        let id = require(&self.id, "id")?;
        let sender = require(&self.sender, "sender")?;
        let receiver = require(&self.receiver, "receiver")?;
        let created_at = require(&self.created_at, "transferCreatedAt")?;
        let hash_function = require(&self.hash_function, "hashFunction")?;
        let payload_digest = require(&self.payload_digest, "payloadDigest")?;
        let auth_token = require(&self.auth_token, "authToken")?;

        if payload_digest.len() != hash_function.digest_len() {
            return Err(ConstraintViolation::DigestLengthMismatch {
                function: hash_function,
                expected: hash_function.digest_len(),
                actual: payload_digest.len(),
            });
        }

        Ok(DataTransfer {
            id,
            sender,
            receiver,
            created_at,
            hash_function,
            payload_digest,
            auth_token,
        })
    }
}

fn require<T: Clone>(field: &Option<T>, name: &'static str) -> Result<T, ConstraintViolation> {
    field
        .clone()
        .ok_or(ConstraintViolation::MissingField { field: name })
}

/// Builder for [`AuthToken`].
#[derive(Debug, Clone, Default)]
pub struct AuthTokenBuilder {
    token_value: Option<String>,
}

impl AuthTokenBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token string.
    pub fn token_value(mut self, token_value: impl Into<String>) -> Self {
        self.token_value = Some(token_value.into());
        self
    }

    /// Validates and returns the token value object.
    pub fn build(&self) -> Result<AuthToken, ConstraintViolation> {
        let token_value = self
            .token_value
            .clone()
            .ok_or(ConstraintViolation::MissingField {
                field: "tokenValue",
            })?;
        if token_value.is_empty() {
            return Err(ConstraintViolation::EmptyTokenValue);
        }
        Ok(AuthToken::new(token_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(value: &str) -> Iri<String> {
        Iri::new(value.to_owned()).unwrap()
    }

    fn full_builder() -> DataTransferBuilder {
        DataTransferBuilder::with_id(iri("http://example.org/transfer/1"))
            .sender(iri("http://example.org/sender"))
            .receiver(iri("http://example.org/receiver"))
            .created_at(
                DateTime::parse_from_rfc3339("2017-05-22T09:30:00+02:00").unwrap(),
            )
            .hash_function(HashFunction::Sha256)
            .payload_digest(PayloadDigest::new(vec![0u8; 32]))
            .auth_token(AuthTokenBuilder::new().token_value("token").build().unwrap())
    }

    #[test]
    fn test_build_full() {
        let transfer = full_builder().build().unwrap();
        assert_eq!(transfer.id().as_str(), "http://example.org/transfer/1");
        assert_eq!(transfer.sender().as_str(), "http://example.org/sender");
        assert_eq!(transfer.receiver().as_str(), "http://example.org/receiver");
        assert_eq!(transfer.hash_function(), HashFunction::Sha256);
        assert_eq!(transfer.payload_digest().len(), 32);
        assert_eq!(transfer.auth_token().token_value(), "token");
    }

    #[test]
    fn test_empty_builder_rejected() {
        let result = DataTransferBuilder::new().build();
        assert_eq!(
            result.unwrap_err(),
            ConstraintViolation::MissingField { field: "id" }
        );
    }

    #[test]
    fn test_each_missing_field_rejected() {
        // Knock out one field at a time; every variant must fail.
        let mut builder = full_builder();
        builder.sender = None;
        assert_eq!(
            builder.build().unwrap_err(),
            ConstraintViolation::MissingField { field: "sender" }
        );

        let mut builder = full_builder();
        builder.auth_token = None;
        assert_eq!(
            builder.build().unwrap_err(),
            ConstraintViolation::MissingField { field: "authToken" }
        );

        let mut builder = full_builder();
        builder.created_at = None;
        assert_eq!(
            builder.build().unwrap_err(),
            ConstraintViolation::MissingField {
                field: "transferCreatedAt"
            }
        );
    }

    #[test]
    fn test_digest_length_mismatch_rejected() {
        let result = full_builder()
            .payload_digest(PayloadDigest::new(vec![0u8; 20]))
            .build();
        assert_eq!(
            result.unwrap_err(),
            ConstraintViolation::DigestLengthMismatch {
                function: HashFunction::Sha256,
                expected: 32,
                actual: 20,
            }
        );
    }

    #[test]
    fn test_copy_on_build() {
        let builder = full_builder();
        let first = builder.build().unwrap();

        // Amending the builder afterwards must not affect the built entity.
        let second = builder
            .sender(iri("http://example.org/other"))
            .build()
            .unwrap();
        assert_eq!(first.sender().as_str(), "http://example.org/sender");
        assert_eq!(second.sender().as_str(), "http://example.org/other");
        assert_ne!(first, second);
    }

    #[test]
    fn test_auth_token_builder() {
        let token = AuthTokenBuilder::new().token_value("abc").build().unwrap();
        assert_eq!(token.token_value(), "abc");
    }

    #[test]
    fn test_auth_token_missing_value_rejected() {
        assert_eq!(
            AuthTokenBuilder::new().build().unwrap_err(),
            ConstraintViolation::MissingField {
                field: "tokenValue"
            }
        );
    }

    #[test]
    fn test_auth_token_empty_value_rejected() {
        assert_eq!(
            AuthTokenBuilder::new().token_value("").build().unwrap_err(),
            ConstraintViolation::EmptyTokenValue
        );
    }
}
