//! The construction context used by every operator.
//!
//! An [`Assembly`] owns a fresh [`BigraphBuilder`] for the duration of a single operator call.
//! Operands are copied into it through forward maps (operand id → result id); nothing is ever
//! shared between calls.
use crate::bigraph::*;
use crate::error::Result;
use crate::signature::Signature;

/// Where the place graph of one operand ended up.
pub(crate) struct PlaceMap {
    /// Result node for each operand node.
    pub nodes: Vec<Option<NodeId>>,
    /// Result parent for each operand site. Sites are not created by [`Assembly::copy_places`]
    /// because the caller decides whether (and in which order) they survive.
    pub site_parents: Vec<Place>,
}

/// Result link for each operand link, or `None` when the link is dropped.
pub(crate) struct LinkMap {
    pub edges: Vec<Option<Link>>,
    pub outers: Vec<Option<Link>>,
}

impl LinkMap {
    pub fn get(&self, link: Link) -> Option<Link> {
        match link {
            Link::Edge(e) => self.edges[e.0],
            Link::Outer(o) => self.outers[o.0],
        }
    }
}

pub(crate) struct Assembly {
    pub builder: BigraphBuilder,
}

impl Assembly {
    pub fn new(signature: Signature) -> Self {
        Assembly {
            builder: BigraphBuilder::new(signature),
        }
    }

    pub fn finish(self) -> Bigraph {
        self.builder.build()
    }

    /// Add `n` roots, returning them as places.
    pub fn new_roots(&mut self, n: usize) -> Vec<Place> {
        (0..n).map(|_| Place::Root(self.builder.new_root())).collect()
    }

    /// Copy every node of `src` with fresh identities. The children of root `r` of `src` are
    /// placed below `root_targets[r]`; all other nodes keep their position relative to their
    /// copied parent.
    pub fn copy_places(&mut self, src: &Bigraph, root_targets: &[Place]) -> Result<PlaceMap> {
        let mut nodes = vec![None; src.num_nodes()];
        let mut site_parents = vec![Place::Root(RootId(0)); src.num_sites()];

        // (operand child, result parent), popped in pre-order; roots are pushed last to first
        // so that roots sharing a target keep their relative order
        let mut stack: Vec<(Child, Place)> = Vec::new();
        for (r, target) in src.roots().zip(root_targets.iter()).collect::<Vec<_>>().into_iter().rev() {
            for child in src.children_of(Place::Root(r)).iter().rev() {
                stack.push((*child, *target));
            }
        }

        while let Some((child, parent)) = stack.pop() {
            match child {
                Child::Site(s) => site_parents[s.0] = parent,
                Child::Node(n) => {
                    let control = &src.node(n).control().name;
                    let copy = self.builder.new_node(control, parent)?;
                    nodes[n.0] = Some(copy);
                    for grandchild in src.children_of(Place::Node(n)).iter().rev() {
                        stack.push((*grandchild, Place::Node(copy)));
                    }
                }
            }
        }

        Ok(PlaceMap {
            nodes,
            site_parents,
        })
    }

    /// Create the sites of the result, in order, below the given parents.
    pub fn new_sites(&mut self, parents: &[Place]) -> Result<()> {
        for parent in parents {
            self.builder.new_site(*parent)?;
        }
        Ok(())
    }

    /// Reattach every linked port of `src` to the image of its link.
    pub fn connect_ports(&mut self, src: &Bigraph, places: &PlaceMap, links: &LinkMap) -> Result<()> {
        for n in src.nodes() {
            let Some(copy) = places.nodes[n.0] else {
                continue;
            };
            for port in src.ports_of(n) {
                let target = src.link_of(Point::Port(port)).and_then(|l| links.get(l));
                if let Some(link) = target {
                    self.builder.connect_port(copy, port.index, link)?;
                }
            }
        }
        Ok(())
    }

    /// Add an inner name called `name`, attached to `link` if given.
    pub fn new_inner_name(&mut self, name: &str, link: Option<Link>) -> Result<InnerId> {
        let id = self.builder.new_inner_name(name)?;
        if let Some(link) = link {
            self.builder.connect(Point::Inner(id), link)?;
        }
        Ok(id)
    }
}
