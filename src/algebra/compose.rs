//! Sequential composition `G ∘ F`: plug `F` into the holes of `G`.
use super::embed::{Assembly, LinkMap};
use super::compatible_signature;
use crate::bigraph::*;
use crate::error::{BigraphError, InterfaceMismatch, Result};

use log::debug;

impl Bigraph {
    /// Compose `self ∘ inner`.
    ///
    /// Root `j` of `inner` replaces site `j` of `self`. An outer name of `inner` that is also an
    /// inner name of `self` is glued to the link of that inner name and disappears from the
    /// result; the remaining outer names of `inner` are carried through as outer names. Points
    /// of `inner` glued to an idle inner name of `self` end up unattached.
    /// The result has the roots and outer names of `self`, and the sites and inner names of
    /// `inner`.
    ///
    /// # Errors
    ///
    /// * [`BigraphError::IncompatibleSignature`] if the signatures differ and neither operand is
    ///   elementary.
    /// * [`BigraphError::IncompatibleInterface`] if `self` has a different number of sites than
    ///   `inner` has roots, or if a carried-through outer name of `inner` clashes with an outer
    ///   name of `self` (unless either operand is elementary, in which case both denote the
    ///   same link).
    pub fn compose(&self, inner: &Bigraph) -> Result<Bigraph> {
        let outer = self;
        let signature = compatible_signature(outer, inner)?;

        if outer.num_sites() != inner.num_roots() {
            return Err(BigraphError::IncompatibleInterface(
                InterfaceMismatch::SiteRootMismatch {
                    sites: outer.num_sites(),
                    roots: inner.num_roots(),
                },
            ));
        }

        let relaxed = outer.is_elementary() || inner.is_elementary();
        let clashes: Vec<String> = inner
            .outer_names()
            .map(|o| inner.outer_name(o))
            .filter(|name| outer.find_inner_name(name).is_none())
            .filter(|name| outer.find_outer_name(name).is_some())
            .map(str::to_string)
            .collect();
        if !clashes.is_empty() && !relaxed {
            return Err(BigraphError::IncompatibleInterface(
                InterfaceMismatch::NameOverlap { names: clashes },
            ));
        }

        debug!("compose {} with {}", outer, inner);

        let mut asm = Assembly::new(signature);

        // place graph: roots of G, then F grafted into the parents of G's sites
        let roots = asm.new_roots(outer.num_roots());
        let g_places = asm.copy_places(outer, &roots)?;
        let f_places = asm.copy_places(inner, &g_places.site_parents)?;
        asm.new_sites(&f_places.site_parents)?;

        // link graph of G is kept as is
        let mut g_outers = Vec::with_capacity(outer.num_outer_names());
        for o in outer.outer_names() {
            let copy = asm.builder.new_outer_name(outer.outer_name(o))?;
            g_outers.push(Some(Link::Outer(copy)));
        }
        let g_links = LinkMap {
            edges: outer
                .edges()
                .map(|_| Some(Link::Edge(asm.builder.new_edge())))
                .collect(),
            outers: g_outers,
        };

        // link graph of F: outer names meeting an inner name of G take over its link
        let f_edges = inner
            .edges()
            .map(|_| Some(Link::Edge(asm.builder.new_edge())))
            .collect();
        let mut f_outers = Vec::with_capacity(inner.num_outer_names());
        for o in inner.outer_names() {
            let name = inner.outer_name(o);
            let image = match outer.find_inner_name(name) {
                // an idle inner name of G leaves the points of F on it unattached
                Some(y) => outer
                    .link_of(Point::Inner(y))
                    .and_then(|link| g_links.get(link)),
                None => match outer.find_outer_name(name) {
                    Some(x) => g_links.get(Link::Outer(x)),
                    None => Some(Link::Outer(asm.builder.new_outer_name(name)?)),
                },
            };
            f_outers.push(image);
        }
        let f_links = LinkMap {
            edges: f_edges,
            outers: f_outers,
        };

        asm.connect_ports(outer, &g_places, &g_links)?;
        asm.connect_ports(inner, &f_places, &f_links)?;
        for i in inner.inner_names() {
            let link = inner.link_of(Point::Inner(i)).and_then(|l| f_links.get(l));
            asm.new_inner_name(inner.inner_name(i), link)?;
        }

        let result = asm.finish();
        debug!("composite {}", result);
        Ok(result)
    }
}
