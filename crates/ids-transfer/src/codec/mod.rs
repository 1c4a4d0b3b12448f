//! RDF/Turtle encoding and decoding for transfers.
//!
//! Both directions are stateless pure functions: the encoder walks an
//! entity's fields per the predicate registry and emits triples, the decoder
//! reads them back and funnels everything through the builder so both
//! construction routes enforce identical invariants.

use sophia::api::MownStr;
use sophia::api::term::{IriRef, SimpleTerm};

pub mod decode;
pub mod encode;

pub use decode::{decode_transfer, decode_transfer_at};
pub use encode::{encode_transfer, transfer_graph};

/// Wraps a registry IRI as a predicate term.
pub(crate) fn pred(value: &'static str) -> IriRef<&'static str> {
    IriRef::new_unchecked(value)
}

/// Builds an owned IRI term from a validated IRI string.
pub(crate) fn iri_term(value: &str) -> SimpleTerm<'static> {
    SimpleTerm::Iri(IriRef::new_unchecked(MownStr::from(value.to_owned())))
}

/// Builds an owned typed literal term.
pub(crate) fn typed_literal(lexical: String, datatype: &'static str) -> SimpleTerm<'static> {
    SimpleTerm::LiteralDatatype(
        MownStr::from(lexical),
        IriRef::new_unchecked(MownStr::from(datatype)),
    )
}
