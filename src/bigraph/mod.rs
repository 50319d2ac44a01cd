//! The entity model: place graph, link graph and the read-only projections used by the
//! algebra and the canonical form encoder.
//!
//! A [`Bigraph`] is a flat arena. Parent/child, port/link and link/point relations are stored
//! as ids on both ends so every navigation step is O(1). Bigraphs are immutable once built;
//! they are constructed with a [`BigraphBuilder`].
pub mod builder;
pub mod entity;
pub mod face;
pub mod predicates;

pub use builder::BigraphBuilder;
pub use entity::*;
pub use face::Interface;

use crate::signature::{Control, Signature};

use core::fmt;

/// A node of the place graph.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub(crate) name: String,
    pub(crate) control: Control,
    pub(crate) parent: Place,
    pub(crate) children: Vec<Child>,
    pub(crate) ports: Vec<Option<Link>>,
}

impl Node {
    /// The identity of this node. Identities are not semantically meaningful.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn parent(&self) -> Place {
        self.parent
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn arity(&self) -> usize {
        self.ports.len()
    }
}

/// An edge or an outer name together with the points attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct LinkData {
    pub(crate) name: String,
    pub(crate) points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct InnerData {
    pub(crate) name: String,
    pub(crate) link: Option<Link>,
}

/// A bigraph over a [`Signature`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bigraph {
    pub(crate) signature: Signature,
    /// Children of each root, indexed by [`RootId`].
    pub(crate) roots: Vec<Vec<Child>>,
    /// Parent of each site, indexed by [`SiteId`].
    pub(crate) sites: Vec<Place>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<LinkData>,
    pub(crate) outer_names: Vec<LinkData>,
    pub(crate) inner_names: Vec<InnerData>,
}

impl Bigraph {
    /// The empty bigraph `ε : <0, {}> → <0, {}>` over the empty signature.
    pub fn empty() -> Self {
        Bigraph {
            signature: Signature::empty(),
            roots: vec![],
            sites: vec![],
            nodes: vec![],
            edges: vec![],
            outer_names: vec![],
            inner_names: vec![],
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn num_roots(&self) -> usize {
        self.roots.len()
    }

    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn num_outer_names(&self) -> usize {
        self.outer_names.len()
    }

    pub fn num_inner_names(&self) -> usize {
        self.inner_names.len()
    }

    pub fn roots(&self) -> impl Iterator<Item = RootId> {
        (0..self.roots.len()).map(RootId)
    }

    pub fn sites(&self) -> impl Iterator<Item = SiteId> {
        (0..self.sites.len()).map(SiteId)
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId)
    }

    pub fn outer_names(&self) -> impl Iterator<Item = OuterId> {
        (0..self.outer_names.len()).map(OuterId)
    }

    pub fn inner_names(&self) -> impl Iterator<Item = InnerId> {
        (0..self.inner_names.len()).map(InnerId)
    }

    /// All links: edges first, then outer names.
    pub fn links(&self) -> impl Iterator<Item = Link> {
        self.edges()
            .map(Link::Edge)
            .chain(self.outer_names().map(Link::Outer))
    }

    /// Panics if `id` is out of bounds.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn control_of(&self, id: NodeId) -> &Control {
        &self.nodes[id.0].control
    }

    pub fn edge_name(&self, id: EdgeId) -> &str {
        &self.edges[id.0].name
    }

    pub fn outer_name(&self, id: OuterId) -> &str {
        &self.outer_names[id.0].name
    }

    pub fn inner_name(&self, id: InnerId) -> &str {
        &self.inner_names[id.0].name
    }

    pub fn find_outer_name(&self, name: &str) -> Option<OuterId> {
        self.outer_names
            .iter()
            .position(|o| o.name == name)
            .map(OuterId)
    }

    pub fn find_inner_name(&self, name: &str) -> Option<InnerId> {
        self.inner_names
            .iter()
            .position(|i| i.name == name)
            .map(InnerId)
    }

    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    pub fn parent_of(&self, child: Child) -> Place {
        match child {
            Child::Node(n) => self.nodes[n.0].parent,
            Child::Site(s) => self.sites[s.0],
        }
    }

    pub fn children_of(&self, place: Place) -> &[Child] {
        match place {
            Place::Root(r) => &self.roots[r.0],
            Place::Node(n) => &self.nodes[n.0].children,
        }
    }

    /// Strict ancestors of `child`, nearest first; the last entry is always a root.
    pub fn ancestors(&self, child: Child) -> Vec<Place> {
        let mut result = vec![];
        let mut current = self.parent_of(child);
        result.push(current);
        while let Place::Node(n) = current {
            current = self.nodes[n.0].parent;
            result.push(current);
        }
        result
    }

    pub fn ports_of(&self, node: NodeId) -> impl Iterator<Item = PortId> {
        (0..self.nodes[node.0].ports.len()).map(move |index| PortId { node, index })
    }

    pub fn link_of(&self, point: Point) -> Option<Link> {
        match point {
            Point::Port(p) => self.nodes[p.node.0].ports[p.index],
            Point::Inner(i) => self.inner_names[i.0].link,
        }
    }

    pub fn points_of(&self, link: Link) -> &[Point] {
        match link {
            Link::Edge(e) => &self.edges[e.0].points,
            Link::Outer(o) => &self.outer_names[o.0].points,
        }
    }

    pub fn is_idle(&self, link: Link) -> bool {
        self.points_of(link).is_empty()
    }

    /// `<number of sites, inner names>`
    pub fn inner_face(&self) -> Interface {
        Interface::new(
            self.sites.len(),
            self.inner_names.iter().map(|i| i.name.clone()),
        )
    }

    /// `<number of roots, outer names>`
    pub fn outer_face(&self) -> Interface {
        Interface::new(
            self.roots.len(),
            self.outer_names.iter().map(|o| o.name.clone()),
        )
    }

    /// True for the empty bigraph `ε`, up to its signature.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
            && self.sites.is_empty()
            && self.nodes.is_empty()
            && self.edges.is_empty()
            && self.outer_names.is_empty()
            && self.inner_names.is_empty()
    }

    /// An elementary bigraph has no nodes: it is a placing, a linking, or a product of those.
    pub fn is_elementary(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Compute the canonical form of this bigraph in open-links mode.
    /// See [`crate::canonical::CanonicalForm`].
    pub fn canonical_form(&self) -> crate::Result<String> {
        crate::canonical::CanonicalForm::default().compute(self)
    }
}

impl fmt::Display for Bigraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({} nodes, {} edges)",
            self.inner_face(),
            self.outer_face(),
            self.nodes.len(),
            self.edges.len()
        )
    }
}
