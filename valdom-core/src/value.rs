//! Parameter value types: URI reference, literal, and blank node
//!
//! Values are the leaves a restriction tree ranges over. A value can be:
//! - A URI reference (identifies the value by name)
//! - A literal (lexical form with an optional language tag or datatype)
//! - A blank node (opaque local identifier, no global identity)
//!
//! Comparison is purely lexical: two literals are equal exactly when their
//! lexical forms, language tags, and datatypes agree field by field. There
//! is no numeric coercion and a language tag is never compared against a
//! datatype.

use crate::error::{RestrictionError, Result};
use crate::visitor::ValueVisitor;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;

/// Blank node identifier
///
/// Blank node IDs are stable within one parameter description but have no
/// global meaning. The label is stored without the `_:` prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlankId(Arc<str>);

impl BlankId {
    /// Create a blank node ID from a label (without the `_:` prefix)
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Get the label (without `_:` prefix)
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// A literal value: lexical form plus at most one qualifier
///
/// `language` and `datatype` are both optional and mutually exclusive. A
/// plain literal carries neither. The exclusivity is enforced at
/// construction; the fields are immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    lexical: Arc<str>,
    language: Option<Arc<str>>,
    datatype: Option<Arc<str>>,
}

impl Literal {
    /// Create a literal, rejecting the combination of language and datatype
    pub fn new(
        lexical: impl AsRef<str>,
        language: Option<&str>,
        datatype: Option<&str>,
    ) -> Result<Self> {
        if language.is_some() && datatype.is_some() {
            return Err(RestrictionError::ConflictingLiteralQualifiers {
                lexical: lexical.as_ref().to_string(),
            });
        }
        Ok(Self {
            lexical: Arc::from(lexical.as_ref()),
            language: language.map(Arc::from),
            datatype: datatype.map(Arc::from),
        })
    }

    /// Create a plain literal (no language, no datatype)
    pub fn plain(lexical: impl AsRef<str>) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            language: None,
            datatype: None,
        }
    }

    /// Create a language-tagged literal
    pub fn lang_tagged(lexical: impl AsRef<str>, language: impl AsRef<str>) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            language: Some(Arc::from(language.as_ref())),
            datatype: None,
        }
    }

    /// Create a datatyped literal
    pub fn typed(lexical: impl AsRef<str>, datatype: impl AsRef<str>) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            language: None,
            datatype: Some(Arc::from(datatype.as_ref())),
        }
    }

    /// Get the lexical form
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// Get the language tag, if any
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Get the datatype IRI, if any
    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }

    /// Check if this is a plain literal (neither qualifier present)
    pub fn is_plain(&self) -> bool {
        self.language.is_none() && self.datatype.is_none()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.lexical)?;
        if let Some(lang) = &self.language {
            write!(f, "@{}", lang)
        } else if let Some(dt) = &self.datatype {
            write!(f, "^^<{}>", dt)
        } else {
            Ok(())
        }
    }
}

/// A concrete parameter value
///
/// Closed variant set. Each variant is immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// Value identified by reference
    Uri(Arc<str>),

    /// Blank node with a local identifier
    Blank(BlankId),

    /// Literal value
    Literal(Literal),
}

impl Value {
    /// Create a URI value
    pub fn uri(uri: impl AsRef<str>) -> Self {
        Value::Uri(Arc::from(uri.as_ref()))
    }

    /// Create a blank node value
    pub fn blank(label: impl AsRef<str>) -> Self {
        Value::Blank(BlankId::new(label))
    }

    /// Create a plain literal value
    pub fn plain(lexical: impl AsRef<str>) -> Self {
        Value::Literal(Literal::plain(lexical))
    }

    /// Create a language-tagged literal value
    pub fn lang_tagged(lexical: impl AsRef<str>, language: impl AsRef<str>) -> Self {
        Value::Literal(Literal::lang_tagged(lexical, language))
    }

    /// Create a datatyped literal value
    pub fn typed(lexical: impl AsRef<str>, datatype: impl AsRef<str>) -> Self {
        Value::Literal(Literal::typed(lexical, datatype))
    }

    /// Check if this is a URI value
    pub fn is_uri(&self) -> bool {
        matches!(self, Value::Uri(_))
    }

    /// Check if this is a blank node
    pub fn is_blank(&self) -> bool {
        matches!(self, Value::Blank(_))
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Value::Literal(_))
    }

    /// Try to get as URI string
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            Value::Uri(uri) => Some(uri),
            _ => None,
        }
    }

    /// Try to get as blank node ID
    pub fn as_blank(&self) -> Option<&BlankId> {
        match self {
            Value::Blank(id) => Some(id),
            _ => None,
        }
    }

    /// Try to get as literal
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Value::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Dispatch to the visitor method matching this variant
    ///
    /// Performs exactly one call; visiting nested structure (there is none
    /// for values) is the visitor's concern.
    pub fn accept<V: ValueVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Value::Uri(uri) => visitor.visit_uri(uri),
            Value::Blank(id) => visitor.visit_blank(id),
            Value::Literal(lit) => visitor.visit_literal(lit),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        // Type ordering: Blank < Uri < Literal
        let type_ord = |v: &Value| -> u8 {
            match v {
                Value::Blank(_) => 0,
                Value::Uri(_) => 1,
                Value::Literal(_) => 2,
            }
        };

        match type_ord(self).cmp(&type_ord(other)) {
            Ordering::Equal => {}
            ord => return ord,
        }

        match (self, other) {
            (Value::Uri(a), Value::Uri(b)) => a.cmp(b),
            (Value::Blank(a), Value::Blank(b)) => a.cmp(b),
            (Value::Literal(a), Value::Literal(b)) => (&a.lexical, &a.language, &a.datatype)
                .cmp(&(&b.lexical, &b.language, &b.datatype)),
            _ => Ordering::Equal, // Unreachable: type_ord already differs
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Uri(uri) => write!(f, "<{}>", uri),
            Value::Blank(id) => write!(f, "{}", id),
            Value::Literal(lit) => write!(f, "{}", lit),
        }
    }
}
