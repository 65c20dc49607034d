//! RDF vocabulary constants for the valdom restriction model
//!
//! This crate is the single source of vocabulary IRIs used across the valdom
//! workspace, together with the local-name extraction utility that default
//! restriction labels are derived from.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `owl` - OWL vocabulary (http://www.w3.org/2002/07/owl#)
//!
//! The `owl` module also carries the class-expression markers
//! (`owl:oneOf`, `owl:unionOf`, `owl:intersectionOf`, `owl:Restriction`)
//! that restriction nodes report as their synthetic type tag.

/// RDF vocabulary constants
pub mod rdf {
    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

    /// rdf:Property IRI
    pub const PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// rdfs:Literal IRI - the generic literal type
    ///
    /// An atomic restriction on this type places no constraint on literal
    /// values and is reported as unrestricted.
    pub const LITERAL: &str = "http://www.w3.org/2000/01/rdf-schema#Literal";

    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:comment IRI
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

    /// rdfs:range IRI
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
}

/// XSD vocabulary constants
pub mod xsd {
    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:dateTime IRI
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// xsd:anyURI IRI
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}

/// OWL vocabulary constants
pub mod owl {
    /// owl:Thing IRI - the universal top type
    ///
    /// An atomic restriction on this type accepts any individual and is
    /// reported as unrestricted.
    pub const THING: &str = "http://www.w3.org/2002/07/owl#Thing";

    /// owl:Nothing IRI
    pub const NOTHING: &str = "http://www.w3.org/2002/07/owl#Nothing";

    /// owl:Restriction IRI - synthetic type tag for property restrictions
    pub const RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";

    /// owl:onProperty IRI
    pub const ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";

    /// owl:oneOf IRI - synthetic type tag for enumerated restrictions
    pub const ONE_OF: &str = "http://www.w3.org/2002/07/owl#oneOf";

    /// owl:unionOf IRI - synthetic type tag for union restrictions
    pub const UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";

    /// owl:intersectionOf IRI - synthetic type tag for intersection restrictions
    pub const INTERSECTION_OF: &str = "http://www.w3.org/2002/07/owl#intersectionOf";

    /// owl:someValuesFrom IRI
    pub const SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";

    /// owl:allValuesFrom IRI
    pub const ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";

    /// owl:hasValue IRI
    pub const HAS_VALUE: &str = "http://www.w3.org/2002/07/owl#hasValue";

    /// owl:minCardinality IRI
    pub const MIN_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#minCardinality";

    /// owl:maxCardinality IRI
    pub const MAX_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#maxCardinality";
}

/// Extract the local name of an IRI
///
/// The local name is the fragment after `#` when one is present, otherwise
/// the segment after the last `/`. An IRI with neither separator is its own
/// local name.
///
/// ```
/// use valdom_vocab::local_name;
///
/// assert_eq!(local_name("http://example.org/onto#Gene"), "Gene");
/// assert_eq!(local_name("http://example.org/onto/Gene"), "Gene");
/// assert_eq!(local_name("Gene"), "Gene");
/// ```
pub fn local_name(iri: &str) -> &str {
    if let Some(pos) = iri.rfind('#') {
        &iri[pos + 1..]
    } else if let Some(pos) = iri.rfind('/') {
        &iri[pos + 1..]
    } else {
        iri
    }
}
