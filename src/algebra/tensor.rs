//! Juxtaposition (tensor product) and parallel product.
//!
//! Both place the operands side by side: roots and sites of the left operand come first and
//! the right operand's indices are shifted past them. They differ only in how names are
//! treated: juxtaposition demands disjoint names, while the parallel product merges every
//! shared name into a single link.
use super::compatible_signature;
use super::embed::{Assembly, LinkMap};
use crate::bigraph::*;
use crate::error::{BigraphError, InterfaceMismatch, Result};
use crate::union_find::UnionFind;

use log::debug;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameSharing {
    Disjoint,
    Shared,
}

impl Bigraph {
    /// The juxtaposition `self ⊗ other`.
    ///
    /// # Errors
    ///
    /// [`BigraphError::IncompatibleInterface`] if the operands share an outer name or an inner
    /// name, and [`BigraphError::IncompatibleSignature`] as for [`Bigraph::compose`].
    pub fn juxtapose(&self, other: &Bigraph) -> Result<Bigraph> {
        tensor(self, other, NameSharing::Disjoint)
    }

    /// The parallel product `self ∥ other`: like [`Bigraph::juxtapose`], but an outer (or
    /// inner) name present in both operands denotes one shared link in the result.
    ///
    /// # Errors
    ///
    /// [`BigraphError::IncompatibleInterface`] if sharing would identify two different outer
    /// names, e.g. when the same inner name is linked to outer name `x` on one side and `y` on
    /// the other.
    pub fn parallel_product(&self, other: &Bigraph) -> Result<Bigraph> {
        tensor(self, other, NameSharing::Shared)
    }
}

/// Position of one operand's links in the joint index space `edges ++ outer names`.
struct Side<'a> {
    graph: &'a Bigraph,
    offset: usize,
}

impl Side<'_> {
    fn index(&self, link: Link) -> usize {
        match link {
            Link::Edge(e) => self.offset + e.0,
            Link::Outer(o) => self.offset + self.graph.num_edges() + o.0,
        }
    }

    fn len(&self) -> usize {
        self.graph.num_edges() + self.graph.num_outer_names()
    }

    /// The outer name at joint index `i`, if `i` belongs to this side and is an outer name.
    fn outer_name_at(&self, i: usize) -> Option<&str> {
        let local = i.checked_sub(self.offset + self.graph.num_edges())?;
        (local < self.graph.num_outer_names()).then(|| self.graph.outer_name(OuterId(local)))
    }
}

fn shared_names<'a>(
    left: impl Iterator<Item = &'a str>,
    right: impl Iterator<Item = &'a str>,
) -> Vec<String> {
    let left: BTreeSet<&str> = left.collect();
    let right: BTreeSet<&str> = right.collect();
    left.intersection(&right).map(|s| s.to_string()).collect()
}

fn tensor(left: &Bigraph, right: &Bigraph, sharing: NameSharing) -> Result<Bigraph> {
    let signature = compatible_signature(left, right)?;

    let l = Side {
        graph: left,
        offset: 0,
    };
    let r = Side {
        graph: right,
        offset: l.len(),
    };
    let mut classes = UnionFind::new(l.len() + r.len());

    // An operand with an empty interface has no names to clash, so it is the identity
    // for the name checks below.
    let outer_shared = shared_names(
        left.outer_names().map(|o| left.outer_name(o)),
        right.outer_names().map(|o| right.outer_name(o)),
    );
    let inner_shared = shared_names(
        left.inner_names().map(|i| left.inner_name(i)),
        right.inner_names().map(|i| right.inner_name(i)),
    );

    match sharing {
        NameSharing::Disjoint => {
            let mut names: Vec<String> = outer_shared.into_iter().chain(inner_shared).collect();
            if !names.is_empty() {
                names.sort();
                names.dedup();
                return Err(BigraphError::IncompatibleInterface(
                    InterfaceMismatch::NameOverlap { names },
                ));
            }
        }
        NameSharing::Shared => {
            for name in &outer_shared {
                if let (Some(a), Some(b)) = (left.find_outer_name(name), right.find_outer_name(name)) {
                    classes.union(l.index(Link::Outer(a)), r.index(Link::Outer(b)));
                }
            }
            // group inner names by name across both operands before wiring anything
            for name in &inner_shared {
                let a = left
                    .find_inner_name(name)
                    .and_then(|i| left.link_of(Point::Inner(i)));
                let b = right
                    .find_inner_name(name)
                    .and_then(|i| right.link_of(Point::Inner(i)));
                if let (Some(a), Some(b)) = (a, b) {
                    classes.union(l.index(a), r.index(b));
                }
            }

            for class in classes.classes() {
                let mut names: Vec<&str> = class
                    .iter()
                    .filter_map(|&i| l.outer_name_at(i).or_else(|| r.outer_name_at(i)))
                    .collect();
                names.sort_unstable();
                names.dedup();
                if let [first, second, ..] = names.as_slice() {
                    return Err(BigraphError::IncompatibleInterface(
                        InterfaceMismatch::LinkConflict {
                            left: first.to_string(),
                            right: second.to_string(),
                        },
                    ));
                }
            }
        }
    }

    debug!("tensor ({:?}) {} with {}", sharing, left, right);

    let mut asm = Assembly::new(signature);

    let roots = asm.new_roots(left.num_roots() + right.num_roots());
    let (left_roots, right_roots) = roots.split_at(left.num_roots());
    let left_places = asm.copy_places(left, left_roots)?;
    let right_places = asm.copy_places(right, right_roots)?;
    asm.new_sites(&left_places.site_parents)?;
    asm.new_sites(&right_places.site_parents)?;

    // one result link per class: the outer name it contains, otherwise a fresh edge
    let mut images: Vec<Option<Link>> = vec![None; l.len() + r.len()];
    for side in [&l, &r] {
        for o in side.graph.outer_names() {
            let root = classes.find(side.index(Link::Outer(o)));
            if images[root].is_none() {
                let copy = asm.builder.new_outer_name(side.graph.outer_name(o))?;
                images[root] = Some(Link::Outer(copy));
            }
        }
    }
    for side in [&l, &r] {
        for e in side.graph.edges() {
            let root = classes.find(side.index(Link::Edge(e)));
            if images[root].is_none() {
                images[root] = Some(Link::Edge(asm.builder.new_edge()));
            }
        }
    }

    let left_links = link_map(&l, &mut classes, &images);
    let right_links = link_map(&r, &mut classes, &images);

    asm.connect_ports(left, &left_places, &left_links)?;
    asm.connect_ports(right, &right_places, &right_links)?;

    for i in left.inner_names() {
        let link = left
            .link_of(Point::Inner(i))
            .and_then(|link| left_links.get(link));
        // a shared inner name that is idle on the left takes the right operand's link
        let link = link.or_else(|| {
            right
                .find_inner_name(left.inner_name(i))
                .and_then(|j| right.link_of(Point::Inner(j)))
                .and_then(|link| right_links.get(link))
        });
        asm.new_inner_name(left.inner_name(i), link)?;
    }
    for i in right.inner_names() {
        if left.find_inner_name(right.inner_name(i)).is_some() {
            continue;
        }
        let link = right
            .link_of(Point::Inner(i))
            .and_then(|link| right_links.get(link));
        asm.new_inner_name(right.inner_name(i), link)?;
    }

    let result = asm.finish();
    debug!("tensor result {}", result);
    Ok(result)
}

fn link_map(side: &Side<'_>, classes: &mut UnionFind, images: &[Option<Link>]) -> LinkMap {
    LinkMap {
        edges: side
            .graph
            .edges()
            .map(|e| images[classes.find(side.index(Link::Edge(e)))])
            .collect(),
        outers: side
            .graph
            .outer_names()
            .map(|o| images[classes.find(side.index(Link::Outer(o)))])
            .collect(),
    }
}
