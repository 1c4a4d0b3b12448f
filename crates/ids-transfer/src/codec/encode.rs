//! Turtle encoding for transfers.

use sophia::api::graph::MutableGraph;
use sophia::api::serializer::{Stringifier, TripleSerializer};
use sophia::api::term::{BnodeId, SimpleTerm, Term};
use sophia::api::MownStr;
use sophia::inmem::graph::FastGraph;
use sophia::turtle::serializer::turtle::{TurtleConfig, TurtleSerializer};

use crate::codec::{iri_term, pred, typed_literal};
use crate::error::EncodeError;
use crate::model::DataTransfer;
use crate::util::datetime::format_xsd_datetime;
use crate::vocab::{PredicateRegistry, RDF_TYPE, XSD_DATE_TIME, XSD_HEX_BINARY, XSD_STRING};

/// Builds the RDF graph denoted by one transfer.
///
/// Emits exactly one triple per field rooted at the entity's IRI, plus
/// `rdf:type` assertions and the auth token's own triples on a blank node.
/// Pure function of the entity; the entity is never mutated.
pub fn transfer_graph(
    transfer: &DataTransfer,
    registry: &PredicateRegistry,
) -> Result<FastGraph, EncodeError> {
    let mut graph = FastGraph::new();
    let subject = iri_term(transfer.id().as_str());
    let token_node = SimpleTerm::BlankNode(BnodeId::new_unchecked(MownStr::from("authToken")));

    insert(
        &mut graph,
        subject.clone(),
        pred(RDF_TYPE),
        pred(registry.transfer_class),
    )?;
    insert(
        &mut graph,
        subject.clone(),
        pred(registry.sender),
        iri_term(transfer.sender().as_str()),
    )?;
    insert(
        &mut graph,
        subject.clone(),
        pred(registry.receiver),
        iri_term(transfer.receiver().as_str()),
    )?;
    insert(
        &mut graph,
        subject.clone(),
        pred(registry.created_at),
        typed_literal(format_xsd_datetime(transfer.created_at()), XSD_DATE_TIME),
    )?;
    insert(
        &mut graph,
        subject.clone(),
        pred(registry.hash_function),
        typed_literal(transfer.hash_function().token().to_owned(), XSD_STRING),
    )?;
    insert(
        &mut graph,
        subject.clone(),
        pred(registry.payload_digest),
        typed_literal(transfer.payload_digest().to_hex(), XSD_HEX_BINARY),
    )?;
    insert(
        &mut graph,
        subject,
        pred(registry.auth_token),
        token_node.clone(),
    )?;
    insert(
        &mut graph,
        token_node.clone(),
        pred(RDF_TYPE),
        pred(registry.auth_token_class),
    )?;
    insert(
        &mut graph,
        token_node,
        pred(registry.token_value),
        typed_literal(transfer.auth_token().token_value().to_owned(), XSD_STRING),
    )?;

    Ok(graph)
}

/// Serializes one transfer to a self-contained Turtle document.
///
/// Byte-for-byte output is not contractual; the denoted graph is. Any valid
/// serialization of the same graph decodes to an equal entity.
pub fn encode_transfer(
    transfer: &DataTransfer,
    registry: &PredicateRegistry,
) -> Result<String, EncodeError> {
    let graph = transfer_graph(transfer, registry)?;
    serialize_graph(&graph)
}

/// Serializes a graph to pretty-printed Turtle.
pub(crate) fn serialize_graph(graph: &FastGraph) -> Result<String, EncodeError> {
    let config = TurtleConfig::new().with_pretty(true);
    let mut serializer = TurtleSerializer::new_stringifier_with_config(config);
    let document = serializer
        .serialize_graph(graph)
        .map_err(|e| EncodeError::Serialize {
            message: e.to_string(),
        })?
        .as_str()
        .to_owned();
    Ok(document)
}

fn insert<TS, TP, TO>(graph: &mut FastGraph, s: TS, p: TP, o: TO) -> Result<(), EncodeError>
where
    TS: Term,
    TP: Term,
    TO: Term,
{
    graph.insert(s, p, o).map_err(|e| EncodeError::Graph {
        message: e.to_string(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use sophia::api::graph::Graph;
    use sophia::api::term::matcher::Any;
    use sophia::api::triple::Triple;
    use sophia::iri::Iri;

    use super::*;
    use crate::codec::decode::parse_graph;
    use crate::model::{AuthTokenBuilder, DataTransferBuilder, HashFunction, PayloadDigest};
    use crate::vocab::IDS;

    fn sample_transfer() -> DataTransfer {
        DataTransferBuilder::with_id(Iri::new("http://example.org/transfer/1".to_owned()).unwrap())
            .sender(Iri::new("http://example.org/broker".to_owned()).unwrap())
            .receiver(Iri::new("http://example.org/broker".to_owned()).unwrap())
            .created_at(DateTime::parse_from_rfc3339("2017-05-22T09:30:00.250+02:00").unwrap())
            .hash_function(HashFunction::Sha512)
            .payload_digest(PayloadDigest::new(vec![0xA5; 64]))
            .auth_token(AuthTokenBuilder::new().token_value("token").build().unwrap())
            .build()
            .unwrap()
    }

    fn count_objects(graph: &FastGraph, subject: &SimpleTerm, predicate: &'static str) -> usize {
        graph
            .triples_matching([subject.clone()], [pred(predicate)], Any)
            .count()
    }

    #[test]
    fn test_all_registered_predicates_present() {
        let transfer = sample_transfer();
        let document = encode_transfer(&transfer, &IDS).unwrap();
        let graph = parse_graph(&document).unwrap();
        let subject = iri_term("http://example.org/transfer/1");

        for predicate in [
            IDS.sender,
            IDS.receiver,
            IDS.created_at,
            IDS.hash_function,
            IDS.payload_digest,
            IDS.auth_token,
        ] {
            assert_eq!(
                count_objects(&graph, &subject, predicate),
                1,
                "missing predicate {predicate}"
            );
        }
    }

    #[test]
    fn test_digest_encoded_as_uppercase_hex() {
        let transfer = sample_transfer();
        let graph = transfer_graph(&transfer, &IDS).unwrap();
        let subject = iri_term("http://example.org/transfer/1");

        let triple = graph
            .triples_matching([subject], [pred(IDS.payload_digest)], Any)
            .next()
            .unwrap()
            .unwrap();
        let lexical = triple.o().lexical_form().unwrap().to_string();
        assert_eq!(lexical, "A5".repeat(64));
        assert_eq!(
            triple.o().datatype().unwrap().as_str(),
            XSD_HEX_BINARY
        );
    }

    #[test]
    fn test_timestamp_keeps_offset_and_fraction() {
        let transfer = sample_transfer();
        let graph = transfer_graph(&transfer, &IDS).unwrap();
        let subject = iri_term("http://example.org/transfer/1");

        let triple = graph
            .triples_matching([subject], [pred(IDS.created_at)], Any)
            .next()
            .unwrap()
            .unwrap();
        let lexical = triple.o().lexical_form().unwrap().to_string();
        assert_eq!(lexical, "2017-05-22T09:30:00.250+02:00");
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let transfer = sample_transfer();
        let first = encode_transfer(&transfer, &IDS).unwrap();
        let second = encode_transfer(&transfer, &IDS).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_token_value_on_auth_token_node() {
        let transfer = sample_transfer();
        let graph = transfer_graph(&transfer, &IDS).unwrap();
        let subject = iri_term("http://example.org/transfer/1");

        let token_node = graph
            .triples_matching([subject], [pred(IDS.auth_token)], Any)
            .next()
            .unwrap()
            .unwrap()
            .o()
            .clone();
        assert!(token_node.bnode_id().is_some());

        let value = graph
            .triples_matching([token_node], [pred(IDS.token_value)], Any)
            .next()
            .unwrap()
            .unwrap()
            .o()
            .lexical_form()
            .unwrap()
            .to_string();
        assert_eq!(value, "token");
    }
}
