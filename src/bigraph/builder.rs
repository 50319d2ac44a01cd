//! A stateful, validating builder for [`Bigraph`]s.
//!
//! The builder is the only way to mutate a bigraph. Every primitive checks its arguments so
//! that a built bigraph always satisfies the structural invariants: the place graph is a
//! forest, atomic nodes are childless, and every point is attached to at most one link.
//!
//! ```rust
//! use bigraphs::prelude::*;
//!
//! let sig = Signature::new([Control::active("Room", 1), Control::atomic("Agent", 1)]);
//! let mut b = BigraphBuilder::new(sig);
//! let root = b.new_root();
//! let room = b.new_node("Room", Place::Root(root)).unwrap();
//! let agent = b.new_node("Agent", Place::Node(room)).unwrap();
//! let wifi = b.new_outer_name("wifi").unwrap();
//! b.connect_port(room, 0, Link::Outer(wifi)).unwrap();
//! b.connect_port(agent, 0, Link::Outer(wifi)).unwrap();
//!
//! let g = b.build();
//! assert_eq!(g.num_nodes(), 2);
//! ```
use super::*;
use crate::error::{BigraphError, Result};

use std::collections::HashSet;

pub struct BigraphBuilder {
    graph: Bigraph,
    node_names: HashSet<String>,
    edge_names: HashSet<String>,
    next_node: usize,
    next_edge: usize,
}

impl BigraphBuilder {
    pub fn new(signature: Signature) -> Self {
        let mut graph = Bigraph::empty();
        graph.signature = signature;
        BigraphBuilder {
            graph,
            node_names: HashSet::new(),
            edge_names: HashSet::new(),
            next_node: 0,
            next_edge: 0,
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.graph.signature
    }

    /// Read-only view of the bigraph built so far.
    pub fn current(&self) -> &Bigraph {
        &self.graph
    }

    /// Finish construction.
    pub fn build(self) -> Bigraph {
        self.graph
    }

    /// Add a new root; its index is the number of roots added before it.
    pub fn new_root(&mut self) -> RootId {
        self.graph.roots.push(vec![]);
        RootId(self.graph.roots.len() - 1)
    }

    /// Add a new site below `parent`; its index is the number of sites added before it.
    pub fn new_site(&mut self, parent: Place) -> Result<SiteId> {
        self.check_parent(parent)?;
        let id = SiteId(self.graph.sites.len());
        self.graph.sites.push(parent);
        self.children_mut(parent).push(Child::Site(id));
        Ok(id)
    }

    /// Add a node of control `control` below `parent`, with a generated identity.
    pub fn new_node(&mut self, control: &str, parent: Place) -> Result<NodeId> {
        let name = self.fresh_node_name();
        self.new_named_node(control, name, parent)
    }

    /// Add a node with an explicit identity.
    pub fn new_named_node(
        &mut self,
        control: &str,
        name: impl Into<String>,
        parent: Place,
    ) -> Result<NodeId> {
        let control = self
            .graph
            .signature
            .get(control)
            .cloned()
            .ok_or_else(|| BigraphError::UnknownControl(control.to_string()))?;
        self.check_parent(parent)?;

        let name = name.into();
        if !self.node_names.insert(name.clone()) {
            return Err(BigraphError::DuplicateName(name));
        }

        let id = NodeId(self.graph.nodes.len());
        self.graph.nodes.push(Node {
            name,
            ports: vec![None; control.arity],
            control,
            parent,
            children: vec![],
        });
        self.children_mut(parent).push(Child::Node(id));
        Ok(id)
    }

    /// Add an edge with a generated identity.
    pub fn new_edge(&mut self) -> EdgeId {
        let name = loop {
            let candidate = format!("e{}", self.next_edge);
            self.next_edge += 1;
            if !self.edge_names.contains(&candidate) {
                break candidate;
            }
        };
        self.edge_names.insert(name.clone());
        self.graph.edges.push(LinkData {
            name,
            points: vec![],
        });
        EdgeId(self.graph.edges.len() - 1)
    }

    pub fn new_named_edge(&mut self, name: impl Into<String>) -> Result<EdgeId> {
        let name = name.into();
        if !self.edge_names.insert(name.clone()) {
            return Err(BigraphError::DuplicateName(name));
        }
        self.graph.edges.push(LinkData {
            name,
            points: vec![],
        });
        Ok(EdgeId(self.graph.edges.len() - 1))
    }

    pub fn new_outer_name(&mut self, name: impl Into<String>) -> Result<OuterId> {
        let name = name.into();
        if self.graph.find_outer_name(&name).is_some() {
            return Err(BigraphError::DuplicateName(name));
        }
        self.graph.outer_names.push(LinkData {
            name,
            points: vec![],
        });
        Ok(OuterId(self.graph.outer_names.len() - 1))
    }

    pub fn new_inner_name(&mut self, name: impl Into<String>) -> Result<InnerId> {
        let name = name.into();
        if self.graph.find_inner_name(&name).is_some() {
            return Err(BigraphError::DuplicateName(name));
        }
        self.graph.inner_names.push(InnerData { name, link: None });
        Ok(InnerId(self.graph.inner_names.len() - 1))
    }

    /// Attach `point` to `link`. A point may be attached at most once.
    pub fn connect(&mut self, point: Point, link: Link) -> Result<()> {
        self.check_link(link)?;
        let slot = match point {
            Point::Port(p) => {
                let node = self
                    .graph
                    .nodes
                    .get_mut(p.node.0)
                    .ok_or(BigraphError::NoSuchEntity(BigraphEntity::Node(p.node)))?;
                let arity = node.ports.len();
                match node.ports.get_mut(p.index) {
                    Some(slot) => slot,
                    None => {
                        return Err(BigraphError::PortOutOfRange {
                            node: node.name.clone(),
                            index: p.index,
                            arity,
                        })
                    }
                }
            }
            Point::Inner(i) => {
                &mut self
                    .graph
                    .inner_names
                    .get_mut(i.0)
                    .ok_or(BigraphError::NoSuchEntity(BigraphEntity::InnerName(i)))?
                    .link
            }
        };

        if slot.is_some() {
            return Err(BigraphError::PointAlreadyConnected(point.into()));
        }
        *slot = Some(link);

        match link {
            Link::Edge(e) => self.graph.edges[e.0].points.push(point),
            Link::Outer(o) => self.graph.outer_names[o.0].points.push(point),
        }
        Ok(())
    }

    /// Attach port `index` of `node` to `link`.
    pub fn connect_port(&mut self, node: NodeId, index: usize, link: Link) -> Result<()> {
        self.connect(Point::Port(PortId { node, index }), link)
    }

    /// Move `child` (and everything below it) under `parent`.
    pub fn set_parent(&mut self, child: Child, parent: Place) -> Result<()> {
        self.check_child(child)?;
        self.check_parent(parent)?;

        if let Child::Node(n) = child {
            let mut current = parent;
            while let Place::Node(m) = current {
                if m == n {
                    return Err(BigraphError::PlaceCycle {
                        child: child.into(),
                        parent: parent.into(),
                    });
                }
                current = self.graph.nodes[m.0].parent;
            }
        }

        let old = self.graph.parent_of(child);
        self.children_mut(old).retain(|c| *c != child);
        match child {
            Child::Node(n) => self.graph.nodes[n.0].parent = parent,
            Child::Site(s) => self.graph.sites[s.0] = parent,
        }
        self.children_mut(parent).push(child);
        Ok(())
    }

    fn fresh_node_name(&mut self) -> String {
        loop {
            let candidate = format!("v{}", self.next_node);
            self.next_node += 1;
            if !self.node_names.contains(&candidate) {
                return candidate;
            }
        }
    }

    fn children_mut(&mut self, place: Place) -> &mut Vec<Child> {
        match place {
            Place::Root(r) => &mut self.graph.roots[r.0],
            Place::Node(n) => &mut self.graph.nodes[n.0].children,
        }
    }

    fn check_parent(&self, parent: Place) -> Result<()> {
        match parent {
            Place::Root(r) if r.0 < self.graph.roots.len() => Ok(()),
            Place::Node(n) => match self.graph.nodes.get(n.0) {
                Some(node) if node.control.is_atomic() => Err(BigraphError::ControlIsAtomic {
                    control: node.control.name.clone(),
                }),
                Some(_) => Ok(()),
                None => Err(BigraphError::NoSuchEntity(parent.into())),
            },
            Place::Root(_) => Err(BigraphError::NoSuchEntity(parent.into())),
        }
    }

    fn check_child(&self, child: Child) -> Result<()> {
        let exists = match child {
            Child::Node(n) => n.0 < self.graph.nodes.len(),
            Child::Site(s) => s.0 < self.graph.sites.len(),
        };
        if exists {
            Ok(())
        } else {
            Err(BigraphError::NoSuchEntity(child.into()))
        }
    }

    fn check_link(&self, link: Link) -> Result<()> {
        let exists = match link {
            Link::Edge(e) => e.0 < self.graph.edges.len(),
            Link::Outer(o) => o.0 < self.graph.outer_names.len(),
        };
        if exists {
            Ok(())
        } else {
            Err(BigraphError::NoSuchEntity(link.into()))
        }
    }
}
