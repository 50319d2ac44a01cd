//! # Bigraphs
//!
//! A [Bigraph](crate::bigraph::Bigraph) pairs two structures over one set of nodes:
//!
//! * a **place graph**, a forest describing which node is nested inside which, with *roots*
//!   at the top and *sites* (holes) at the leaves, and
//! * a **link graph**, a hypergraph connecting the *ports* of nodes (and the *inner names* of
//!   the bigraph) to *edges* (closed links) or *outer names* (open links).
//!
//! ```text
//!    0 ┌──────────────────────┐        x
//!      │ Room ●───────────────┼────────┤
//!      │  ┌──────────┐        │        │
//!      │  │ Agent ●──┼────────┼────────┘
//!      │  └──────────┘  [0]   │
//!      └──────────────────────┘
//! ```
//!
//! Every node has a *control* drawn from a [Signature](crate::signature::Signature), which
//! fixes its arity (number of ports) and whether it is active, passive or atomic.
//!
//! # Algebra
//!
//! Bigraphs are the arrows of a category whose objects are
//! [interfaces](crate::bigraph::Interface) `<width, names>`. The inner face of a bigraph
//! counts its sites and lists its inner names; the outer face counts its roots and lists its
//! outer names. The [algebra](crate::algebra) builds new bigraphs from old ones:
//!
//! ```rust
//! use bigraphs::prelude::*;
//!
//! let sig = Signature::new([Control::active("Room", 1), Control::atomic("Agent", 1)]);
//!
//! // Room_x and Agent_x, as one-node bigraphs
//! let room = Bigraph::ion(&sig, "Room", &["x"]).unwrap();
//! let agent = Bigraph::atom(&sig, "Agent", &["x"]).unwrap();
//!
//! // put the agent next to a hole, share the name x, and plug the result into the room
//! let content = (&agent & &Bigraph::merge(1)).unwrap();
//! let content = (&content >> &Bigraph::join()).unwrap();
//! let g = room.nest(&content).unwrap();
//!
//! assert_eq!(g.num_nodes(), 2);
//! assert_eq!(g.outer_face(), Interface::new(1, ["x"]));
//! assert_eq!(g.inner_face(), Interface::new(1, Vec::<String>::new()));
//! ```
//!
//! # Canonical forms
//!
//! [CanonicalForm](crate::canonical::CanonicalForm) turns a bigraph into a string which only
//! depends on its structure, so that isomorphic states can be recognised by string equality.

pub mod algebra;
pub mod bigraph;
pub mod canonical;
pub mod category;
pub mod elementary;
pub mod error;
pub mod signature;

pub(crate) mod union_find;

pub use error::{BigraphError, Result};

pub mod prelude {
    //! The types needed to build, combine and encode bigraphs.
    pub use crate::bigraph::{
        Bigraph, BigraphBuilder, BigraphEntity, Child, EdgeId, InnerId, Interface, Link, NodeId,
        OuterId, Place, Point, PortId, RootId, SiteId,
    };
    pub use crate::canonical::CanonicalForm;
    pub use crate::category::*;
    pub use crate::error::{BigraphError, InterfaceMismatch, Result};
    pub use crate::signature::{Control, ControlKind, Signature};
}
