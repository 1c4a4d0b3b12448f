//! Turtle decoding for transfers.
//!
//! Resilient to any valid serialization of the expected graph shape: triple
//! order, prefix choices, and blank-node naming are irrelevant. All recovered
//! fields flow through [`DataTransferBuilder`], so an incomplete document
//! fails with the same [`ConstraintViolation`](crate::error::ConstraintViolation)
//! as direct construction.

use sophia::api::graph::Graph;
use sophia::api::source::TripleSource;
use sophia::api::term::matcher::Any;
use sophia::api::term::{SimpleTerm, Term, TermKind};
use sophia::api::triple::Triple;
use sophia::inmem::graph::FastGraph;
use sophia::iri::Iri;
use sophia::turtle::parser::turtle;

use crate::codec::{iri_term, pred};
use crate::error::DecodeError;
use crate::model::{
    AuthToken, AuthTokenBuilder, DataTransfer, DataTransferBuilder, HashFunction, PayloadDigest,
};
use crate::util::datetime::parse_xsd_datetime;
use crate::vocab::{PredicateRegistry, RDF_TYPE, XSD_DATE_TIME, XSD_HEX_BINARY, XSD_STRING};

/// Decodes a transfer from a Turtle document.
///
/// The subject is located by its `rdf:type` assertion: the document must
/// contain exactly one resource typed as the registry's transfer class.
pub fn decode_transfer(
    document: &str,
    registry: &PredicateRegistry,
) -> Result<DataTransfer, DecodeError> {
    let graph = parse_graph(document)?;
    let subject = find_subject(&graph, registry)?;
    transfer_from_graph(&graph, &subject, registry)
}

/// Decodes a transfer rooted at a known subject IRI.
///
/// Fails with [`DecodeError::ResourceNotFound`] when the document contains no
/// triples about that exact IRI.
pub fn decode_transfer_at(
    document: &str,
    subject: &Iri<String>,
    registry: &PredicateRegistry,
) -> Result<DataTransfer, DecodeError> {
    let graph = parse_graph(document)?;
    let subject_term = iri_term(subject.as_str());

    let known = graph
        .triples_matching([subject_term.clone()], Any, Any)
        .next()
        .transpose()
        .map_err(graph_error)?
        .is_some();
    if !known {
        return Err(DecodeError::ResourceNotFound {
            iri: subject.as_str().to_owned(),
        });
    }
    transfer_from_graph(&graph, &subject_term, registry)
}

/// Parses a Turtle document into an in-memory graph.
pub(crate) fn parse_graph(document: &str) -> Result<FastGraph, DecodeError> {
    turtle::parse_str(document)
        .collect_triples()
        .map_err(|e| DecodeError::Turtle {
            message: e.to_string(),
        })
}

/// Locates the unique subject carrying the transfer class.
fn find_subject(
    graph: &FastGraph,
    registry: &PredicateRegistry,
) -> Result<SimpleTerm<'static>, DecodeError> {
    let mut subjects: Vec<SimpleTerm<'static>> = Vec::new();
    for triple in graph.triples_matching(Any, [pred(RDF_TYPE)], [pred(registry.transfer_class)]) {
        let triple = triple.map_err(graph_error)?;
        subjects.push(triple.s().into_term());
    }
    if subjects.len() > 1 {
        return Err(DecodeError::AmbiguousSubject {
            class: registry.transfer_class.to_owned(),
            count: subjects.len(),
        });
    }
    subjects.pop().ok_or(DecodeError::SubjectNotFound {
        class: registry.transfer_class.to_owned(),
    })
}

/// Reconstructs the entity from the graph, via the builder.
fn transfer_from_graph(
    graph: &FastGraph,
    subject: &SimpleTerm,
    registry: &PredicateRegistry,
) -> Result<DataTransfer, DecodeError> {
    let id = expect_iri(subject, RDF_TYPE, "id")?;
    let mut builder = DataTransferBuilder::with_id(id);

    if let Some(term) = object_of(graph, subject, registry.sender)? {
        builder = builder.sender(expect_iri(&term, registry.sender, "sender")?);
    }
    if let Some(term) = object_of(graph, subject, registry.receiver)? {
        builder = builder.receiver(expect_iri(&term, registry.receiver, "receiver")?);
    }
    if let Some(term) = object_of(graph, subject, registry.created_at)? {
        let lexical = expect_literal(&term, registry.created_at, XSD_DATE_TIME)?;
        let created_at = parse_xsd_datetime(&lexical)
            .map_err(|_| DecodeError::InvalidTimestamp { value: lexical })?;
        builder = builder.created_at(created_at);
    }
    if let Some(term) = object_of(graph, subject, registry.hash_function)? {
        let token = expect_literal(&term, registry.hash_function, XSD_STRING)?;
        let hash_function = HashFunction::from_token(&token)
            .ok_or(DecodeError::UnknownHashFunction { token })?;
        builder = builder.hash_function(hash_function);
    }
    if let Some(term) = object_of(graph, subject, registry.payload_digest)? {
        let lexical = expect_literal(&term, registry.payload_digest, XSD_HEX_BINARY)?;
        let digest = PayloadDigest::from_hex(&lexical)
            .map_err(|_| DecodeError::InvalidDigest { value: lexical })?;
        builder = builder.payload_digest(digest);
    }
    if let Some(node) = object_of(graph, subject, registry.auth_token)? {
        builder = builder.auth_token(auth_token_from_graph(graph, &node, registry)?);
    }

    Ok(builder.build()?)
}

/// Reconstructs the auth token value object from its own node.
fn auth_token_from_graph(
    graph: &FastGraph,
    node: &SimpleTerm,
    registry: &PredicateRegistry,
) -> Result<AuthToken, DecodeError> {
    if node.kind() == TermKind::Literal {
        return Err(DecodeError::UnexpectedTermKind {
            predicate: registry.auth_token,
            expected: "a resource",
        });
    }
    let mut builder = AuthTokenBuilder::new();
    if let Some(term) = object_of(graph, node, registry.token_value)? {
        builder = builder.token_value(expect_literal(&term, registry.token_value, XSD_STRING)?);
    }
    Ok(builder.build()?)
}

/// Reads the first object of `(subject, predicate, ?)`, if any.
fn object_of(
    graph: &FastGraph,
    subject: &SimpleTerm,
    predicate: &'static str,
) -> Result<Option<SimpleTerm<'static>>, DecodeError> {
    graph
        .triples_matching([subject.clone()], [pred(predicate)], Any)
        .next()
        .transpose()
        .map_err(graph_error)
        .map(|triple| triple.map(|t| t.o().into_term()))
}

fn expect_iri(
    term: &SimpleTerm,
    predicate: &'static str,
    field: &'static str,
) -> Result<Iri<String>, DecodeError> {
    let Some(iri) = term.iri() else {
        return Err(DecodeError::UnexpectedTermKind {
            predicate,
            expected: "an IRI",
        });
    };
    Iri::new(iri.as_str().to_owned()).map_err(|_| DecodeError::InvalidIri {
        field,
        value: iri.as_str().to_owned(),
    })
}

fn expect_literal(
    term: &SimpleTerm,
    predicate: &'static str,
    datatype: &'static str,
) -> Result<String, DecodeError> {
    let Some(lexical) = term.lexical_form() else {
        return Err(DecodeError::UnexpectedTermKind {
            predicate,
            expected: "a literal",
        });
    };
    if let Some(found) = term.datatype() {
        if found.as_str() != datatype {
            return Err(DecodeError::WrongDatatype {
                predicate,
                expected: datatype,
                found: found.as_str().to_owned(),
            });
        }
    }
    Ok(lexical.to_string())
}

fn graph_error<E: std::fmt::Display>(e: E) -> DecodeError {
    DecodeError::Graph {
        message: e.to_string(),
    }
}
