//! Round-trip-safe, validated RDF codec for data-transfer vocabulary entities.
//!
//! This crate provides strongly-typed construction, Turtle serialization, and
//! Turtle deserialization for the `DataTransfer` entity of the
//! industrial-dataspace vocabulary.
//!
//! # Overview
//!
//! The codec is designed around three guarantees:
//! - **All-or-nothing construction**: entities only exist fully populated;
//!   builders reject any missing field, and the decoder funnels recovered
//!   fields through the same builder so both routes enforce identical
//!   invariants.
//! - **Round-trip safety**: `decode(encode(e))` equals `e` field-by-field,
//!   and the two encodings denote isomorphic graphs regardless of triple
//!   order or blank-node naming.
//! - **Statelessness**: encoder and decoder are pure functions; the only
//!   shared structure is the read-only predicate registry, safe for
//!   unsynchronized concurrent reads.
//!
//! # Quick Start
//!
//! ```rust
//! use ids_transfer::{
//!     decode_transfer, encode_transfer, vocab, AuthTokenBuilder, DataTransferBuilder,
//!     HashFunction, Iri, PayloadDigest,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let transfer = DataTransferBuilder::new()
//!     .id(Iri::new("http://example.org/transfer/1".to_owned())?)
//!     .sender(Iri::new("http://example.org/broker".to_owned())?)
//!     .receiver(Iri::new("http://example.org/broker".to_owned())?)
//!     .created_at(chrono::Utc::now().fixed_offset())
//!     .hash_function(HashFunction::Sha256)
//!     .payload_digest(PayloadDigest::new(vec![0u8; 32]))
//!     .auth_token(AuthTokenBuilder::new().token_value("token").build()?)
//!     .build()?;
//!
//! // Serialize to Turtle and parse it back.
//! let document = encode_transfer(&transfer, &vocab::IDS)?;
//! let decoded = decode_transfer(&document, &vocab::IDS)?;
//! assert_eq!(transfer, decoded);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`model`]: the entity, its value objects, and their builders
//! - [`codec`]: Turtle encoding/decoding
//! - [`vocab`]: the predicate registry
//! - [`error`]: error types
//!
//! # Errors
//!
//! Two failure kinds cover everything: [`ConstraintViolation`] for invalid
//! construction (missing fields, digest/hash-function mismatch) and
//! [`DecodeError`] for malformed input (unparseable documents, absent
//! subjects, corrupt literals, unknown enum tokens). Both are terminal for
//! the operation; no partially-populated entity is ever returned.

pub mod codec;
pub mod error;
pub mod model;
pub mod util;
pub mod vocab;

// Re-export commonly used types at crate root
pub use codec::{decode_transfer, decode_transfer_at, encode_transfer, transfer_graph};
pub use error::{ConstraintViolation, DecodeError, EncodeError};
pub use model::{
    AuthToken, AuthTokenBuilder, DataTransfer, DataTransferBuilder, HashFunction, PayloadDigest,
};
pub use vocab::PredicateRegistry;

// The IRI type entities are identified by, re-exported for callers.
pub use sophia::iri::Iri;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
