//! Canonical text rendering of restriction trees
//!
//! [`TreeRenderer`] walks a tree through the visitor protocol and produces a
//! deterministic functional-syntax form: `<iri>` for atomics,
//! `oneOf { ... }` for enumerations, `unionOf(...)` / `intersectionOf(...)`
//! for the composites, and `restriction(<property>, range, ...)` for
//! property restrictions. It backs [`Display`] for [`Input`].
//!
//! [`Display`]: std::fmt::Display

use crate::restriction::{Atomic, Enumerated, Input, Intersection, PropertyRestriction, Union};
use crate::value::{BlankId, Literal};
use crate::visitor::{InputVisitor, ValueVisitor};

/// Visitor-driven renderer producing the canonical text form of a tree
#[derive(Default)]
pub struct TreeRenderer {
    out: String,
}

impl TreeRenderer {
    /// Create an empty renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a whole tree to its canonical text form
    pub fn render(input: &Input) -> String {
        let mut renderer = Self::new();
        input.accept(&mut renderer);
        renderer.finish()
    }

    /// Consume the renderer, returning the accumulated text
    pub fn finish(self) -> String {
        self.out
    }

    fn join_children(&mut self, children: impl IntoIterator<Item = impl FnOnce(&mut Self)>) {
        let mut first = true;
        for child in children {
            if !first {
                self.out.push_str(", ");
            }
            first = false;
            child(self);
        }
    }
}

impl InputVisitor for TreeRenderer {
    fn visit_atomic(&mut self, input: &Atomic) {
        self.out.push('<');
        self.out.push_str(input.type_iri());
        self.out.push('>');
    }

    fn visit_enumerated(&mut self, input: &Enumerated) {
        self.out.push_str("oneOf { ");
        self.join_children(
            input
                .values()
                .iter()
                .map(|value| move |r: &mut Self| value.accept(r)),
        );
        self.out.push_str(" }");
    }

    fn visit_union(&mut self, input: &Union) {
        self.out.push_str("unionOf(");
        self.join_children(
            input
                .alternatives()
                .iter()
                .map(|alt| move |r: &mut Self| alt.accept(r)),
        );
        self.out.push(')');
    }

    fn visit_intersection(&mut self, input: &Intersection) {
        self.out.push_str("intersectionOf(");
        self.join_children(
            input
                .members()
                .iter()
                .map(|member| move |r: &mut Self| member.accept(r)),
        );
        self.out.push(')');
    }

    fn visit_property_restriction(&mut self, input: &PropertyRestriction) {
        self.out.push_str("restriction(<");
        self.out.push_str(input.property());
        self.out.push_str(">, ");
        input.range().accept(self);
        if input.has_min_cardinality() {
            self.out.push_str(&format!(", min={}", input.min_cardinality()));
        }
        if let Some(max) = input.max_cardinality() {
            self.out.push_str(&format!(", max={}", max));
        }
        self.out.push(')');
    }
}

impl ValueVisitor for TreeRenderer {
    fn visit_uri(&mut self, uri: &str) {
        self.out.push('<');
        self.out.push_str(uri);
        self.out.push('>');
    }

    fn visit_literal(&mut self, literal: &Literal) {
        self.out.push_str(&literal.to_string());
    }

    fn visit_blank(&mut self, id: &BlankId) {
        self.out.push_str(&id.to_string());
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", TreeRenderer::render(self))
    }
}
