//! Restriction-tree model for service-parameter value domains
//!
//! This crate describes, for a single parameter of a service invocation,
//! the legal domain of values that parameter may take: a restriction tree
//! of class-expression-style constraints over a small value algebra.
//!
//! # Overview
//!
//! - [`Value`] - the value algebra: URI reference, literal (optional
//!   language tag or datatype, mutually exclusive), blank node.
//! - [`Input`] - the restriction tree: [`Atomic`], [`Enumerated`],
//!   [`Union`], [`Intersection`], and [`PropertyRestriction`] nodes, each
//!   carrying the common assigned-value/label/description fields and an
//!   owner-property back-handle.
//! - [`InputVisitor`] / [`ValueVisitor`] - the closed dispatch surfaces
//!   consumers traverse trees through, without the tree knowing about them.
//! - [`TreeRenderer`] - the canonical text rendering, one such consumer.
//!
//! A tree is built once from a parameter description, shared read-only
//! across consumers, and mutated only in narrow ways while a candidate
//! value is bound: the common fields, a union's resolution state, and a
//! property restriction's range and cardinality bounds. The mutators take
//! `&mut self`, so concurrent resolution of one shared tree must be
//! serialized by the caller; read-only traversal is safe for any number of
//! concurrent readers.
//!
//! # Example
//!
//! ```
//! use valdom_core::{Atomic, Enumerated, PropertyRestriction, Union, Value};
//!
//! // partOf must take exactly one of two named anatomy terms
//! let mut restriction = PropertyRestriction::with_range(
//!     "http://example.org/onto#partOf",
//!     Enumerated::new(vec![
//!         Value::uri("http://example.org/anatomy#Liver"),
//!         Value::uri("http://example.org/anatomy#Kidney"),
//!     ])
//!     .into(),
//! );
//! restriction.set_min_cardinality(1);
//! restriction.set_max_cardinality(1);
//!
//! // A union remembers which alternative a validated value satisfied
//! let mut domain = Union::new(vec![
//!     Atomic::new("http://example.org/onto#Gene").into(),
//!     restriction.into(),
//! ]);
//! domain.set_resolved_index(Some(0))?;
//! domain.set_resolved_type(0, "http://example.org/onto#Gene");
//! # Ok::<(), valdom_core::RestrictionError>(())
//! ```

pub mod error;
pub mod render;
pub mod restriction;
pub mod value;
pub mod visitor;

pub use error::{RestrictionError, Result};
pub use render::TreeRenderer;
pub use restriction::{Atomic, Enumerated, Input, Intersection, PropertyRestriction, Union};
pub use value::{BlankId, Literal, Value};
pub use visitor::{InputVisitor, ValueVisitor};
