//! Canonical forms of bigraphs.
//!
//! A canonical form is a string that depends only on the structure of a bigraph and not on the
//! identities of its nodes and edges (nor, in open-links mode, on the names of its interfaces),
//! so that isomorphic states collapse to one key during state space exploration.
//!
//! Each root is encoded breadth first:
//!
//! ```text
//! <root>$<level 1>$<level 2>...#
//! ```
//!
//! where a level lists, for every place emitted on the level above, the labels of its children
//! separated by `,`, and groups of different parents are separated by `|`. A node prints as
//! `Control(l1,l2,...)` with the labels of the links on its ports sorted, a site as `[i]`.
//! After all roots comes `inner-via-edge;inner-via-outer;idle-outer;idle-inner`.
//!
//! Siblings are ordered by invariant subtree signatures computed from a colour refinement of
//! the whole bigraph, with greedy tie-breaking on the link labels assigned so far. Siblings
//! which still tie are individualised one at a time and the smallest resulting encoding is
//! kept. The search is bounded; only past that bound can the order of siblings show through.
//!
//! ```rust
//! use bigraphs::prelude::*;
//!
//! let sig = Signature::new([Control::active("Room", 1)]);
//! let a = Bigraph::ion(&sig, "Room", &["x"]).unwrap();
//! let b = Bigraph::ion(&sig, "Room", &["y"]).unwrap();
//!
//! assert_eq!(a.canonical_form().unwrap(), b.canonical_form().unwrap());
//! assert_ne!(
//!     CanonicalForm::interface_sensitive().compute(&a).unwrap(),
//!     CanonicalForm::interface_sensitive().compute(&b).unwrap(),
//! );
//! ```
mod encoder;
pub mod label;
mod refine;

pub use label::LinkLabel;

use crate::bigraph::Bigraph;
use crate::error::{BigraphError, Result};
use encoder::Encoder;

use log::debug;

/// Configuration of the encoder. All working state lives in a value created per call, so one
/// configuration can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanonicalForm {
    /// Print outer names as sequence numbers (`:0`, `:1`, ...) and omit inner names. When false
    /// the interface is part of the identity of the bigraph and names are printed verbatim.
    pub rewrite_open_links: bool,
}

impl Default for CanonicalForm {
    fn default() -> Self {
        CanonicalForm::open_links()
    }
}

impl CanonicalForm {
    pub fn open_links() -> Self {
        CanonicalForm {
            rewrite_open_links: true,
        }
    }

    pub fn interface_sensitive() -> Self {
        CanonicalForm {
            rewrite_open_links: false,
        }
    }

    /// Compute the canonical form of `graph`.
    ///
    /// # Errors
    ///
    /// [`BigraphError::NoRoots`] if `graph` has no roots, and
    /// [`BigraphError::AtomicNodeHasChildren`] if a node with an atomic control has children.
    pub fn compute(&self, graph: &Bigraph) -> Result<String> {
        if graph.num_roots() == 0 {
            return Err(BigraphError::NoRoots);
        }
        for n in graph.nodes() {
            let node = graph.node(n);
            if node.control().is_atomic() && !node.children().is_empty() {
                return Err(BigraphError::AtomicNodeHasChildren {
                    node: node.name().to_string(),
                    control: node.control().name.clone(),
                });
            }
        }

        let form = Encoder::new(graph, *self).run();
        debug!("canonical form of {}: {}", graph, form);
        Ok(form)
    }
}
