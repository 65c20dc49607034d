//! Restriction-tree variants describing a parameter's legal value domain
//!
//! A restriction tree is built once from a parameter description, traversed
//! read-only by any number of visitor-based consumers, and mutated only in
//! narrow, documented ways: the common metadata fields, a union's
//! resolution state, and a property restriction's range and cardinality
//! bounds. Variant identity and member collections never change after
//! construction.
//!
//! The five variants share one [`Meta`] payload (assigned value, label,
//! description, owner-property handle) embedded in each variant struct.

use crate::error::{RestrictionError, Result};
use crate::value::Value;
use crate::visitor::InputVisitor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::trace;
use valdom_vocab::{local_name, owl, rdfs};

/// Common fields shared by every restriction variant
///
/// `owner_property` is a non-owning handle: the IRI of the property
/// restriction that adopted this node as its range. It is assigned at most
/// once (the first write wins) and is excluded from equality.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Meta {
    assigned_value: Option<Value>,
    label: String,
    description: Option<String>,
    owner_property: Option<Arc<str>>,
}

impl Meta {
    fn labeled(label: String) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    fn adopt(&mut self, property: Arc<str>) {
        if self.owner_property.is_none() {
            self.owner_property = Some(property);
        }
    }
}

// Equality over the mutable commons only; the owner back-reference carries
// no structural information and is excluded.
impl PartialEq for Meta {
    fn eq(&self, other: &Self) -> bool {
        self.assigned_value == other.assigned_value
            && self.label == other.label
            && self.description == other.description
    }
}

impl Eq for Meta {}

/// A single named type restriction
///
/// Construction from a type IRI is the sole source of unrestrictedness and
/// default labeling: the universal top type (`owl:Thing`) and the generic
/// literal type (`rdfs:Literal`) are unrestricted and labeled
/// `"Unrestricted"`; any other type is labeled with its local name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atomic {
    meta: Meta,
    type_iri: Arc<str>,
}

impl Atomic {
    /// Create an atomic restriction on the given type IRI
    pub fn new(type_iri: impl AsRef<str>) -> Self {
        let type_iri: Arc<str> = Arc::from(type_iri.as_ref());
        let label = if Self::iri_is_unrestricted(&type_iri) {
            "Unrestricted".to_string()
        } else {
            local_name(&type_iri).to_string()
        };
        Self {
            meta: Meta::labeled(label),
            type_iri,
        }
    }

    /// Shorthand for an atomic restriction on the universal top type
    pub fn unrestricted() -> Self {
        Self::new(owl::THING)
    }

    /// Get the restricting type IRI
    pub fn type_iri(&self) -> &str {
        &self.type_iri
    }

    /// Check whether this restriction accepts any value
    pub fn is_unrestricted(&self) -> bool {
        Self::iri_is_unrestricted(&self.type_iri)
    }

    fn iri_is_unrestricted(iri: &str) -> bool {
        iri == owl::THING || iri == rdfs::LITERAL
    }
}

impl Default for Atomic {
    fn default() -> Self {
        Self::unrestricted()
    }
}

/// An enumerated value-set restriction
///
/// Legal values are exactly the members of the set; membership only, no
/// ordering semantics. Duplicates in the source collection collapse.
///
/// An empty enumeration admits no value at all. It is NOT equivalent to an
/// unrestricted input; callers must not treat it as one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enumerated {
    meta: Meta,
    values: BTreeSet<Value>,
}

impl Enumerated {
    /// Create an enumeration from any collection of values
    ///
    /// The collection is copied, never aliased.
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            meta: Meta::default(),
            values: values.into_iter().collect(),
        }
    }

    /// Get the legal value set
    pub fn values(&self) -> &BTreeSet<Value> {
        &self.values
    }

    /// Check membership of a candidate value
    pub fn contains(&self, value: &Value) -> bool {
        self.values.contains(value)
    }

    /// Number of distinct legal values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the enumeration is empty (admits nothing)
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A union restriction: the value must satisfy at least one alternative
///
/// Alternatives are an ordered sequence; two unions over the same
/// alternatives in different orders are different restrictions.
///
/// # Resolution state
///
/// After a candidate value is validated against the union, the matching
/// alternative is recorded in `resolved_index` (`None` = unresolved) and
/// the concrete leaf type satisfied within alternative `i` in
/// `resolved_types[i]`. Both are mutable bookkeeping with no internal
/// synchronization; concurrent resolvers of one shared union must be
/// serialized by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Union {
    meta: Meta,
    alternatives: Vec<Input>,
    resolved_index: Option<usize>,
    resolved_types: Vec<Option<Arc<str>>>,
}

impl Union {
    /// Create a union over an ordered sequence of alternatives
    pub fn new(alternatives: Vec<Input>) -> Self {
        let resolved_types = vec![None; alternatives.len()];
        Self {
            meta: Meta::default(),
            alternatives,
            resolved_index: None,
            resolved_types,
        }
    }

    /// Get the alternatives in order
    pub fn alternatives(&self) -> &[Input] {
        &self.alternatives
    }

    /// Number of alternatives
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Check if the union has no alternatives
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Get the resolved alternative index, `None` when unresolved
    pub fn resolved_index(&self) -> Option<usize> {
        self.resolved_index
    }

    /// Record which alternative a validated value satisfied
    ///
    /// `None` marks the union unresolved and always succeeds. `Some(i)`
    /// fails with [`RestrictionError::ResolvedIndexOutOfRange`] when `i` is
    /// not a valid alternative index; the state is untouched on failure.
    pub fn set_resolved_index(&mut self, index: Option<usize>) -> Result<()> {
        if let Some(i) = index {
            if i >= self.alternatives.len() {
                return Err(RestrictionError::ResolvedIndexOutOfRange {
                    index: i,
                    len: self.alternatives.len(),
                });
            }
        }
        trace!(?index, "union branch resolved");
        self.resolved_index = index;
        Ok(())
    }

    /// Get the concrete type recorded for alternative `index`
    pub fn resolved_type(&self, index: usize) -> Option<&str> {
        self.resolved_types.get(index).and_then(|t| t.as_deref())
    }

    /// Get the per-alternative resolved types, one slot per alternative
    pub fn resolved_types(&self) -> &[Option<Arc<str>>] {
        &self.resolved_types
    }

    /// Record the concrete leaf type satisfied within alternative `index`
    ///
    /// Independent of [`set_resolved_index`]: slots for unresolved
    /// alternatives may be written too.
    ///
    /// # Panics
    ///
    /// Unlike `set_resolved_index`, this mutator performs no range check and
    /// panics when `index >= alternatives().len()`. Known-unguarded; callers
    /// validate the index themselves.
    ///
    /// [`set_resolved_index`]: Union::set_resolved_index
    pub fn set_resolved_type(&mut self, index: usize, type_iri: impl AsRef<str>) {
        self.resolved_types[index] = Some(Arc::from(type_iri.as_ref()));
    }

    /// Reset the union to unresolved and clear every recorded type
    pub fn clear_resolution(&mut self) {
        self.resolved_index = None;
        self.resolved_types.iter_mut().for_each(|t| *t = None);
    }
}

/// An intersection restriction: the value must satisfy every member
///
/// Members are an ordered sequence; no lower bound on the member count is
/// enforced (an empty intersection vacuously accepts).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intersection {
    meta: Meta,
    members: Vec<Input>,
}

impl Intersection {
    /// Create an intersection over an ordered sequence of members
    pub fn new(members: Vec<Input>) -> Self {
        Self {
            meta: Meta::default(),
            members,
        }
    }

    /// Get the members in order
    pub fn members(&self) -> &[Input] {
        &self.members
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the intersection has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// A property restriction: bounds how many values of `range` a property takes
///
/// The default range is an unrestricted [`Atomic`]; the default cardinality
/// bounds are `0` and unbounded. `has_min_cardinality`/`has_max_cardinality`
/// report whether a bound differs from its unconstrained default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRestriction {
    meta: Meta,
    property: Arc<str>,
    range: Box<Input>,
    min_cardinality: u32,
    max_cardinality: Option<u32>,
}

impl PropertyRestriction {
    /// Create a restriction on `property` with an unrestricted range
    pub fn new(property: impl AsRef<str>) -> Self {
        let property: Arc<str> = Arc::from(property.as_ref());
        let mut range = Input::from(Atomic::unrestricted());
        range.meta_mut().adopt(property.clone());
        Self {
            meta: Meta::default(),
            property,
            range: Box::new(range),
            min_cardinality: 0,
            max_cardinality: None,
        }
    }

    /// Create a restriction on `property` with an explicit range
    pub fn with_range(property: impl AsRef<str>, range: Input) -> Self {
        let mut restriction = Self::new(property);
        restriction.set_range(range);
        restriction
    }

    /// Get the restricted property IRI
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Get the range restriction
    pub fn range(&self) -> &Input {
        &self.range
    }

    /// Get the range restriction mutably
    pub fn range_mut(&mut self) -> &mut Input {
        &mut self.range
    }

    /// Replace the range, adopting the new node as this property's range
    pub fn set_range(&mut self, mut range: Input) {
        range.meta_mut().adopt(self.property.clone());
        trace!(property = %self.property, "property range adopted");
        self.range = Box::new(range);
    }

    /// Get the minimum cardinality bound (default `0`)
    pub fn min_cardinality(&self) -> u32 {
        self.min_cardinality
    }

    /// Set the minimum cardinality bound
    pub fn set_min_cardinality(&mut self, min: u32) {
        self.min_cardinality = min;
    }

    /// Check whether the minimum bound differs from the unconstrained `0`
    pub fn has_min_cardinality(&self) -> bool {
        self.min_cardinality != 0
    }

    /// Get the maximum cardinality bound, `None` meaning unbounded
    pub fn max_cardinality(&self) -> Option<u32> {
        self.max_cardinality
    }

    /// Set the maximum cardinality bound
    pub fn set_max_cardinality(&mut self, max: u32) {
        self.max_cardinality = Some(max);
    }

    /// Remove the maximum cardinality bound
    pub fn clear_max_cardinality(&mut self) {
        self.max_cardinality = None;
    }

    /// Check whether a maximum bound has been set
    pub fn has_max_cardinality(&self) -> bool {
        self.max_cardinality.is_some()
    }
}

/// A node in a restriction tree
///
/// Closed variant set over the five restriction kinds. The embedded
/// [`Meta`] commons are reachable through the accessors below regardless of
/// variant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Input {
    /// A single named type
    Atomic(Atomic),
    /// A finite set of legal values
    Enumerated(Enumerated),
    /// At least one alternative must be satisfied
    Union(Union),
    /// Every member must be satisfied
    Intersection(Intersection),
    /// A cardinality-bounded property restriction
    Property(PropertyRestriction),
}

impl Input {
    /// Convenience factory for an unrestricted atomic input
    pub fn unrestricted() -> Self {
        Input::Atomic(Atomic::unrestricted())
    }

    fn meta(&self) -> &Meta {
        match self {
            Input::Atomic(a) => &a.meta,
            Input::Enumerated(e) => &e.meta,
            Input::Union(u) => &u.meta,
            Input::Intersection(i) => &i.meta,
            Input::Property(p) => &p.meta,
        }
    }

    fn meta_mut(&mut self) -> &mut Meta {
        match self {
            Input::Atomic(a) => &mut a.meta,
            Input::Enumerated(e) => &mut e.meta,
            Input::Union(u) => &mut u.meta,
            Input::Intersection(i) => &mut i.meta,
            Input::Property(p) => &mut p.meta,
        }
    }

    /// Get the human-readable label
    pub fn label(&self) -> &str {
        &self.meta().label
    }

    /// Set the human-readable label
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.meta_mut().label = label.into();
    }

    /// Get the description, if any
    pub fn description(&self) -> Option<&str> {
        self.meta().description.as_deref()
    }

    /// Set or clear the description
    pub fn set_description(&mut self, description: Option<String>) {
        self.meta_mut().description = description;
    }

    /// Get the value assigned during a bind/validate pass, if any
    pub fn assigned_value(&self) -> Option<&Value> {
        self.meta().assigned_value.as_ref()
    }

    /// Set or clear the assigned value
    pub fn set_assigned_value(&mut self, value: Option<Value>) {
        self.meta_mut().assigned_value = value;
    }

    /// Get the IRI of the property restriction that owns this node as its range
    pub fn owner_property(&self) -> Option<&str> {
        self.meta().owner_property.as_deref()
    }

    /// Record the owning property; only the first write takes effect
    pub fn set_owner_property(&mut self, property: impl AsRef<str>) {
        self.meta_mut().adopt(Arc::from(property.as_ref()));
    }

    /// Check whether this input accepts any value
    ///
    /// True only for an [`Atomic`] on the universal top type or the generic
    /// literal type. An empty enumeration is NOT unrestricted.
    pub fn is_unrestricted(&self) -> bool {
        match self {
            Input::Atomic(a) => a.is_unrestricted(),
            _ => false,
        }
    }

    /// Get the type IRI this node reports
    ///
    /// The atomic type for [`Atomic`]; a synthetic per-kind marker for the
    /// composite variants, so every union reports `owl:unionOf` regardless
    /// of its alternatives, and likewise for the other kinds.
    pub fn type_iri(&self) -> &str {
        match self {
            Input::Atomic(a) => a.type_iri(),
            Input::Enumerated(_) => owl::ONE_OF,
            Input::Union(_) => owl::UNION_OF,
            Input::Intersection(_) => owl::INTERSECTION_OF,
            Input::Property(_) => owl::RESTRICTION,
        }
    }

    /// Dispatch to the visitor method matching this variant
    ///
    /// Performs exactly one call; recursion into children is the visitor's
    /// concern.
    pub fn accept<V: InputVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Input::Atomic(a) => visitor.visit_atomic(a),
            Input::Enumerated(e) => visitor.visit_enumerated(e),
            Input::Union(u) => visitor.visit_union(u),
            Input::Intersection(i) => visitor.visit_intersection(i),
            Input::Property(p) => visitor.visit_property_restriction(p),
        }
    }

    /// Try to get as an atomic restriction
    pub fn as_atomic(&self) -> Option<&Atomic> {
        match self {
            Input::Atomic(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as an enumerated restriction
    pub fn as_enumerated(&self) -> Option<&Enumerated> {
        match self {
            Input::Enumerated(e) => Some(e),
            _ => None,
        }
    }

    /// Try to get as a union restriction
    pub fn as_union(&self) -> Option<&Union> {
        match self {
            Input::Union(u) => Some(u),
            _ => None,
        }
    }

    /// Try to get as a union restriction, mutably (for resolution)
    pub fn as_union_mut(&mut self) -> Option<&mut Union> {
        match self {
            Input::Union(u) => Some(u),
            _ => None,
        }
    }

    /// Try to get as an intersection restriction
    pub fn as_intersection(&self) -> Option<&Intersection> {
        match self {
            Input::Intersection(i) => Some(i),
            _ => None,
        }
    }

    /// Try to get as a property restriction
    pub fn as_property_restriction(&self) -> Option<&PropertyRestriction> {
        match self {
            Input::Property(p) => Some(p),
            _ => None,
        }
    }

    /// Try to get as a property restriction, mutably
    pub fn as_property_restriction_mut(&mut self) -> Option<&mut PropertyRestriction> {
        match self {
            Input::Property(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Atomic> for Input {
    fn from(atomic: Atomic) -> Self {
        Input::Atomic(atomic)
    }
}

impl From<Enumerated> for Input {
    fn from(enumerated: Enumerated) -> Self {
        Input::Enumerated(enumerated)
    }
}

impl From<Union> for Input {
    fn from(union: Union) -> Self {
        Input::Union(union)
    }
}

impl From<Intersection> for Input {
    fn from(intersection: Intersection) -> Self {
        Input::Intersection(intersection)
    }
}

impl From<PropertyRestriction> for Input {
    fn from(property: PropertyRestriction) -> Self {
        Input::Property(property)
    }
}

// Structural equality: same variant, equal commons, then the per-variant
// rule. Enumerated compares as a set; Union and Intersection compare
// pairwise in order; Union additionally compares its resolution state;
// PropertyRestriction compares property, both cardinality bounds, and the
// range recursively.
impl PartialEq for Input {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Input::Atomic(a), Input::Atomic(b)) => a.meta == b.meta && a.type_iri == b.type_iri,
            (Input::Enumerated(a), Input::Enumerated(b)) => {
                a.meta == b.meta && a.values == b.values
            }
            (Input::Union(a), Input::Union(b)) => {
                a.meta == b.meta
                    && a.alternatives == b.alternatives
                    && a.resolved_index == b.resolved_index
                    && a.resolved_types == b.resolved_types
            }
            (Input::Intersection(a), Input::Intersection(b)) => {
                a.meta == b.meta && a.members == b.members
            }
            (Input::Property(a), Input::Property(b)) => {
                a.meta == b.meta
                    && a.property == b.property
                    && a.min_cardinality == b.min_cardinality
                    && a.max_cardinality == b.max_cardinality
                    && a.range == b.range
            }
            _ => false,
        }
    }
}

impl Eq for Input {}

// Hashing keys off a single primary field per variant: the atomic type, the
// member collection, or the property plus range. Union resolution state and
// cardinality bounds are NOT hashed even though equality compares them, so
// two unequal unions differing only in resolution collide. Known weakness,
// kept as-is; hashed-collection users may depend on today's collisions.
impl Hash for Input {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Input::Atomic(a) => a.type_iri.hash(state),
            Input::Enumerated(e) => e.values.hash(state),
            Input::Union(u) => u.alternatives.hash(state),
            Input::Intersection(i) => i.members.hash(state),
            Input::Property(p) => {
                p.property.hash(state);
                p.range.hash(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valdom_vocab::xsd;

    const GENE: &str = "http://example.org/onto#Gene";
    const PART_OF: &str = "http://example.org/onto#partOf";

    #[test]
    fn test_atomic_unrestricted_labeling() {
        let top = Atomic::new(owl::THING);
        assert!(top.is_unrestricted());
        assert_eq!(Input::from(top).label(), "Unrestricted");

        let lit = Atomic::new(rdfs::LITERAL);
        assert!(lit.is_unrestricted());
        assert_eq!(Input::from(lit).label(), "Unrestricted");

        assert!(Input::unrestricted().is_unrestricted());
        assert_eq!(Atomic::default(), Atomic::unrestricted());
    }

    #[test]
    fn test_atomic_custom_type_labeling() {
        let gene = Atomic::new(GENE);
        assert!(!gene.is_unrestricted());
        assert_eq!(gene.type_iri(), GENE);
        assert_eq!(Input::from(gene).label(), "Gene");
    }

    #[test]
    fn test_enumerated_collapses_duplicates() {
        let e = Enumerated::new(vec![
            Value::plain("red"),
            Value::plain("green"),
            Value::plain("red"),
        ]);
        assert_eq!(e.len(), 2);
        assert!(e.contains(&Value::plain("red")));
        assert!(!e.contains(&Value::plain("blue")));
    }

    #[test]
    fn test_empty_enumeration_is_not_unrestricted() {
        let e = Input::from(Enumerated::new(std::iter::empty()));
        assert!(e.as_enumerated().is_some_and(Enumerated::is_empty));
        assert!(!e.is_unrestricted());
    }

    #[test]
    fn test_union_resolution_bounds() {
        let mut u = Union::new(vec![
            Atomic::new(GENE).into(),
            Atomic::new(xsd::STRING).into(),
            Atomic::unrestricted().into(),
        ]);

        assert_eq!(u.resolved_index(), None);
        assert_eq!(
            u.set_resolved_index(Some(3)),
            Err(RestrictionError::ResolvedIndexOutOfRange { index: 3, len: 3 })
        );
        // Failed write left the state untouched
        assert_eq!(u.resolved_index(), None);

        u.set_resolved_index(Some(1)).unwrap();
        assert_eq!(u.resolved_index(), Some(1));

        // None is the always-valid "unresolved" marker
        u.set_resolved_index(None).unwrap();
        assert_eq!(u.resolved_index(), None);
    }

    #[test]
    fn test_union_resolved_types_independent_of_index() {
        let mut u = Union::new(vec![Atomic::new(GENE).into(), Atomic::unrestricted().into()]);
        u.set_resolved_type(1, xsd::STRING);
        assert_eq!(u.resolved_index(), None);
        assert_eq!(u.resolved_type(1), Some(xsd::STRING));
        assert_eq!(u.resolved_type(0), None);

        u.clear_resolution();
        assert_eq!(u.resolved_type(1), None);
    }

    #[test]
    #[should_panic]
    fn test_union_set_resolved_type_unguarded() {
        let mut u = Union::new(vec![Atomic::new(GENE).into()]);
        u.set_resolved_type(5, xsd::STRING);
    }

    #[test]
    fn test_property_restriction_defaults() {
        let p = PropertyRestriction::new(PART_OF);
        assert_eq!(p.property(), PART_OF);
        assert!(!p.has_min_cardinality());
        assert!(!p.has_max_cardinality());
        assert_eq!(p.range(), &Input::unrestricted());
        // The default range was adopted on construction
        assert_eq!(p.range().owner_property(), Some(PART_OF));
    }

    #[test]
    fn test_property_restriction_cardinalities() {
        let mut p = PropertyRestriction::new(PART_OF);
        p.set_min_cardinality(2);
        assert!(p.has_min_cardinality());
        assert_eq!(p.min_cardinality(), 2);

        p.set_max_cardinality(5);
        assert!(p.has_max_cardinality());
        assert_eq!(p.max_cardinality(), Some(5));

        p.clear_max_cardinality();
        assert!(!p.has_max_cardinality());

        // Min explicitly set back to the default reads as unconstrained
        p.set_min_cardinality(0);
        assert!(!p.has_min_cardinality());
    }

    #[test]
    fn test_set_range_adopts_once() {
        let mut p = PropertyRestriction::new(PART_OF);
        p.set_range(Atomic::new(GENE).into());
        assert_eq!(p.range().owner_property(), Some(PART_OF));

        // A node already owned elsewhere keeps its first owner
        let other = PropertyRestriction::with_range("http://example.org/onto#encodes", {
            let mut range = Input::from(Atomic::new(GENE));
            range.set_owner_property(PART_OF);
            range
        });
        assert_eq!(other.range().owner_property(), Some(PART_OF));
    }

    #[test]
    fn test_synthetic_type_tags() {
        assert_eq!(Input::from(Atomic::new(GENE)).type_iri(), GENE);
        assert_eq!(
            Input::from(Enumerated::new(std::iter::empty())).type_iri(),
            owl::ONE_OF
        );
        assert_eq!(Input::from(Union::new(vec![])).type_iri(), owl::UNION_OF);
        assert_eq!(
            Input::from(Intersection::new(vec![])).type_iri(),
            owl::INTERSECTION_OF
        );
        assert_eq!(
            Input::from(PropertyRestriction::new(PART_OF)).type_iri(),
            owl::RESTRICTION
        );
    }

    #[test]
    fn test_common_fields_participate_in_equality() {
        let mut a = Input::from(Atomic::new(GENE));
        let b = Input::from(Atomic::new(GENE));
        assert_eq!(a, b);

        a.set_description(Some("a gene".to_string()));
        assert_ne!(a, b);

        let mut c = Input::from(Atomic::new(GENE));
        c.set_assigned_value(Some(Value::uri("http://example.org/genes/BRCA1")));
        assert_ne!(b, c);
    }

    #[test]
    fn test_owner_property_excluded_from_equality() {
        let mut owned = Input::from(Atomic::new(GENE));
        owned.set_owner_property(PART_OF);
        assert_eq!(owned, Input::from(Atomic::new(GENE)));
    }
}
