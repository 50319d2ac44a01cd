//! Elementary bigraphs.
//!
//! Placings (no links) and linkings (no places) carry no nodes and the empty signature; by
//! [`crate::algebra`]'s compatibility rule they compose with bigraphs over any signature.
//! Ions and atoms are the one-node bigraphs every other bigraph is assembled from.
use crate::bigraph::*;
use crate::error::{BigraphError, Result};
use crate::signature::Signature;

use std::collections::BTreeSet;

/// A placing with `roots` roots whose site `i` lies directly under root `site_roots[i]`.
fn placing(roots: usize, site_roots: &[usize]) -> Bigraph {
    let mut g = Bigraph::empty();
    g.roots = vec![vec![]; roots];
    for (i, &r) in site_roots.iter().enumerate() {
        g.roots[r].push(Child::Site(SiteId(i)));
        g.sites.push(Place::Root(RootId(r)));
    }
    g
}

/// Append a link called `name` holding the given inner names.
fn push_link(g: &mut Bigraph, link: Link, name: String, inners: Vec<String>) {
    let mut points = Vec::with_capacity(inners.len());
    for inner in inners {
        let id = InnerId(g.inner_names.len());
        g.inner_names.push(InnerData {
            name: inner,
            link: Some(link),
        });
        points.push(Point::Inner(id));
    }
    let data = LinkData { name, points };
    match link {
        Link::Edge(_) => g.edges.push(data),
        Link::Outer(_) => g.outer_names.push(data),
    }
}

impl Bigraph {
    /// `1 : 0 → 1`, a single root containing nothing.
    pub fn barren() -> Self {
        Bigraph::merge(0)
    }

    /// `merge_m : m → 1`, one root containing `m` sites.
    pub fn merge(m: usize) -> Self {
        placing(1, &vec![0; m])
    }

    /// `join : 2 → 1`
    pub fn join() -> Self {
        Bigraph::merge(2)
    }

    /// `id_n : n → n`, site `i` under root `i`.
    pub fn identity_places(n: usize) -> Self {
        placing(n, &(0..n).collect::<Vec<_>>())
    }

    /// The placing `π : n → n` putting site `i` directly under root `pi[i]`.
    pub fn permutation(pi: &[usize]) -> Result<Self> {
        let mut seen = vec![false; pi.len()];
        for &r in pi {
            match seen.get_mut(r) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(BigraphError::InvalidPermutation(pi.to_vec())),
            }
        }
        Ok(placing(pi.len(), pi))
    }

    /// The symmetry `γ_{m,n} : m + n → n + m`: the first `m` sites move past the last `n`.
    pub fn swap(m: usize, n: usize) -> Self {
        let pi: Vec<usize> = (0..m).map(|i| n + i).chain(0..n).collect();
        placing(m + n, &pi)
    }

    /// `id_X : X → X`, every inner name `x` linked to the outer name `x`.
    pub fn identity_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        let mut g = Bigraph::empty();
        for (i, name) in names.into_iter().enumerate() {
            push_link(&mut g, Link::Outer(OuterId(i)), name.clone(), vec![name]);
        }
        g
    }

    /// `/X : X → ε`, every inner name closed by its own edge.
    pub fn closure<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        let mut g = Bigraph::empty();
        for (i, name) in names.into_iter().enumerate() {
            push_link(&mut g, Link::Edge(EdgeId(i)), format!("e{}", i), vec![name]);
        }
        g
    }

    /// The substitution `y/X : X → {y}`. With `X` empty this is the idle name `y/`.
    pub fn substitution<S: Into<String>>(
        outer: impl Into<String>,
        inners: impl IntoIterator<Item = S>,
    ) -> Self {
        let inners: BTreeSet<String> = inners.into_iter().map(Into::into).collect();
        let mut g = Bigraph::empty();
        push_link(
            &mut g,
            Link::Outer(OuterId(0)),
            outer.into(),
            inners.into_iter().collect(),
        );
        g
    }

    /// A bijective renaming; each pair is `(inner, outer)`.
    pub fn renaming(pairs: &[(&str, &str)]) -> Result<Self> {
        let mut inners = BTreeSet::new();
        let mut outers = BTreeSet::new();
        for (inner, outer) in pairs {
            if !inners.insert(*inner) {
                return Err(BigraphError::DuplicateName(inner.to_string()));
            }
            if !outers.insert(*outer) {
                return Err(BigraphError::DuplicateName(outer.to_string()));
            }
        }

        let mut g = Bigraph::empty();
        for (i, (inner, outer)) in pairs.iter().enumerate() {
            push_link(
                &mut g,
                Link::Outer(OuterId(i)),
                outer.to_string(),
                vec![inner.to_string()],
            );
        }
        Ok(g)
    }

    /// `id_I : I → I`, the identity placing next to the identity linking.
    pub fn identity(face: &Interface) -> Self {
        let mut g = Bigraph::identity_names(face.names.iter().cloned());
        let places = Bigraph::identity_places(face.width);
        g.roots = places.roots;
        g.sites = places.sites;
        g
    }

    /// The discrete ion `K_x⃗ : 1 → <1, x⃗>`: one `control` node holding a site, port `i`
    /// linked to outer name `names[i]`.
    pub fn ion(signature: &Signature, control: &str, names: &[&str]) -> Result<Self> {
        single_node(signature, control, names, true)
    }

    /// Like [`Bigraph::ion`] but without a site, so it may use an atomic control.
    pub fn atom(signature: &Signature, control: &str, names: &[&str]) -> Result<Self> {
        single_node(signature, control, names, false)
    }
}

fn single_node(signature: &Signature, control: &str, names: &[&str], site: bool) -> Result<Bigraph> {
    let arity = signature
        .arity(control)
        .ok_or_else(|| BigraphError::UnknownControl(control.to_string()))?;
    if arity != names.len() {
        return Err(BigraphError::ArityMismatch {
            control: control.to_string(),
            arity,
            names: names.len(),
        });
    }

    let mut b = BigraphBuilder::new(signature.clone());
    let root = b.new_root();
    let node = b.new_node(control, Place::Root(root))?;
    if site {
        b.new_site(Place::Node(node))?;
    }
    for (index, name) in names.iter().enumerate() {
        let outer = match b.current().find_outer_name(name) {
            Some(o) => o,
            None => b.new_outer_name(*name)?,
        };
        b.connect_port(node, index, Link::Outer(outer))?;
    }
    Ok(b.build())
}
