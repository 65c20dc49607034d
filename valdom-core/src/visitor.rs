//! Visitor traits for restriction trees and values
//!
//! Two closed dispatch surfaces: one over the five restriction variants,
//! one over the three value variants. Each node's `accept` performs exactly
//! one call into the method matching its runtime variant, so cross-cutting
//! consumers (renderers, validators, UI drivers, diagnostics) add operations
//! without touching the variant types. The trade-off is deliberate: adding a
//! variant means updating every visitor, and the variant sets are closed.
//!
//! Recursion into child restrictions is the visitor's responsibility;
//! `accept` never walks the tree on its own.

use crate::restriction::{Atomic, Enumerated, Intersection, PropertyRestriction, Union};
use crate::value::{BlankId, Literal};

/// Visitor over the five restriction-tree variants
///
/// Implementations typically recurse via [`Input::accept`] on the children
/// they care about (union alternatives, intersection members, a property
/// restriction's range).
///
/// [`Input::accept`]: crate::Input::accept
pub trait InputVisitor {
    /// Visit an atomic type restriction
    fn visit_atomic(&mut self, input: &Atomic);

    /// Visit an enumerated value-set restriction
    fn visit_enumerated(&mut self, input: &Enumerated);

    /// Visit a union restriction
    fn visit_union(&mut self, input: &Union);

    /// Visit an intersection restriction
    fn visit_intersection(&mut self, input: &Intersection);

    /// Visit a property-with-cardinality restriction
    fn visit_property_restriction(&mut self, input: &PropertyRestriction);
}

/// Visitor over the three value variants
pub trait ValueVisitor {
    /// Visit a URI reference
    fn visit_uri(&mut self, uri: &str);

    /// Visit a literal
    fn visit_literal(&mut self, literal: &Literal);

    /// Visit a blank node identifier
    fn visit_blank(&mut self, id: &BlankId);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restriction::Input;
    use crate::value::Value;
    use valdom_vocab::owl;

    /// Counts one dispatch per accept call, without recursing
    #[derive(Default)]
    struct DispatchCounter {
        atomic: usize,
        enumerated: usize,
        union: usize,
        intersection: usize,
        property: usize,
    }

    impl InputVisitor for DispatchCounter {
        fn visit_atomic(&mut self, _: &Atomic) {
            self.atomic += 1;
        }
        fn visit_enumerated(&mut self, _: &Enumerated) {
            self.enumerated += 1;
        }
        fn visit_union(&mut self, _: &Union) {
            self.union += 1;
        }
        fn visit_intersection(&mut self, _: &Intersection) {
            self.intersection += 1;
        }
        fn visit_property_restriction(&mut self, _: &PropertyRestriction) {
            self.property += 1;
        }
    }

    #[test]
    fn test_accept_dispatches_once_per_variant() {
        let atomic = Input::from(Atomic::new("http://example.org/onto#Gene"));
        let union = Input::from(Union::new(vec![
            Atomic::unrestricted().into(),
            Atomic::new(owl::NOTHING).into(),
        ]));

        let mut counter = DispatchCounter::default();
        atomic.accept(&mut counter);
        union.accept(&mut counter);

        assert_eq!(counter.atomic, 1);
        assert_eq!(counter.union, 1);
        // accept does not recurse: the union's atomic alternatives were not visited
        assert_eq!(counter.enumerated + counter.intersection + counter.property, 0);
    }

    #[derive(Default)]
    struct ValueKinds(Vec<&'static str>);

    impl ValueVisitor for ValueKinds {
        fn visit_uri(&mut self, _: &str) {
            self.0.push("uri");
        }
        fn visit_literal(&mut self, _: &Literal) {
            self.0.push("literal");
        }
        fn visit_blank(&mut self, _: &BlankId) {
            self.0.push("blank");
        }
    }

    #[test]
    fn test_value_accept_matches_variant() {
        let mut kinds = ValueKinds::default();
        Value::uri("http://example.org/x").accept(&mut kinds);
        Value::plain("red").accept(&mut kinds);
        Value::blank("b0").accept(&mut kinds);
        assert_eq!(kinds.0, vec!["uri", "literal", "blank"]);
    }
}
