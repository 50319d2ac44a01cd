//! Identifiers for the entities of a bigraph.
//!
//! Every entity lives in an arena owned by its [`crate::bigraph::Bigraph`] and is referred to
//! by a small copyable id. Root and site ids are the semantic root/site *index*; all other ids
//! are arena positions and carry no meaning beyond a single bigraph.
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiteId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OuterId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InnerId(pub usize);

/// The `index`th port of `node`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortId {
    pub node: NodeId,
    pub index: usize,
}

/// Anything that can be a parent in the place graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Place {
    Root(RootId),
    Node(NodeId),
}

/// Anything that has a parent in the place graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Child {
    Node(NodeId),
    Site(SiteId),
}

/// Links of the link graph: anonymous edges and named outer names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Link {
    Edge(EdgeId),
    Outer(OuterId),
}

/// Points of the link graph: node ports and inner names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Point {
    Port(PortId),
    Inner(InnerId),
}

/// The closed set of entity kinds making up a bigraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BigraphEntity {
    Root(RootId),
    Site(SiteId),
    Node(NodeId),
    Port(PortId),
    Edge(EdgeId),
    OuterName(OuterId),
    InnerName(InnerId),
}

impl From<Place> for BigraphEntity {
    fn from(p: Place) -> Self {
        match p {
            Place::Root(r) => BigraphEntity::Root(r),
            Place::Node(n) => BigraphEntity::Node(n),
        }
    }
}

impl From<Child> for BigraphEntity {
    fn from(c: Child) -> Self {
        match c {
            Child::Node(n) => BigraphEntity::Node(n),
            Child::Site(s) => BigraphEntity::Site(s),
        }
    }
}

impl From<Link> for BigraphEntity {
    fn from(l: Link) -> Self {
        match l {
            Link::Edge(e) => BigraphEntity::Edge(e),
            Link::Outer(o) => BigraphEntity::OuterName(o),
        }
    }
}

impl From<Point> for BigraphEntity {
    fn from(p: Point) -> Self {
        match p {
            Point::Port(p) => BigraphEntity::Port(p),
            Point::Inner(i) => BigraphEntity::InnerName(i),
        }
    }
}

impl fmt::Display for BigraphEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigraphEntity::Root(r) => write!(f, "root {}", r.0),
            BigraphEntity::Site(s) => write!(f, "site {}", s.0),
            BigraphEntity::Node(n) => write!(f, "node #{}", n.0),
            BigraphEntity::Port(p) => write!(f, "port {} of node #{}", p.index, p.node.0),
            BigraphEntity::Edge(e) => write!(f, "edge #{}", e.0),
            BigraphEntity::OuterName(o) => write!(f, "outer name #{}", o.0),
            BigraphEntity::InnerName(i) => write!(f, "inner name #{}", i.0),
        }
    }
}

impl Place {
    pub fn node(self) -> Option<NodeId> {
        match self {
            Place::Node(n) => Some(n),
            Place::Root(_) => None,
        }
    }
}

impl Child {
    pub fn node(self) -> Option<NodeId> {
        match self {
            Child::Node(n) => Some(n),
            Child::Site(_) => None,
        }
    }

    pub fn site(self) -> Option<SiteId> {
        match self {
            Child::Site(s) => Some(s),
            Child::Node(_) => None,
        }
    }
}
