//! The composition algebra.
//!
//! Every operator borrows its operands, validates them, and only then builds a brand new
//! bigraph in a call-local [`embed::Assembly`]. Operands are never mutated and stay usable;
//! fresh node and edge identities are generated for the result.
//!
//! | operator | method | sugar |
//! |---|---|---|
//! | composition `G ∘ F` | [`Bigraph::compose`] | `&f >> &g` |
//! | juxtaposition `G ⊗ F` | [`Bigraph::juxtapose`] | `&g \| &f` |
//! | parallel product `G ∥ F` | [`Bigraph::parallel_product`] | `&g & &f` |
//! | nesting `G . F` | [`Bigraph::nest`] | |
pub mod compose;
pub(crate) mod embed;
pub mod nest;
pub mod tensor;

use crate::bigraph::{Bigraph, Interface};
use crate::category::*;
use crate::error::{BigraphError, Result};
use crate::signature::Signature;

/// The signature of a combination of `a` and `b`.
///
/// Equal signatures are always compatible. Otherwise an elementary operand (one without nodes)
/// adopts the signature of the other operand.
pub(crate) fn compatible_signature(a: &Bigraph, b: &Bigraph) -> Result<Signature> {
    if a.signature() == b.signature() {
        return Ok(a.signature().clone());
    }

    let merged = match (a.is_elementary(), b.is_elementary()) {
        (false, false) => None,
        (true, false) => Some(b.signature().clone()),
        (false, true) => Some(a.signature().clone()),
        (true, true) => a.signature().union(b.signature()),
    };

    merged.ok_or_else(|| BigraphError::IncompatibleSignature {
        left: a.signature().to_string(),
        right: b.signature().to_string(),
    })
}

impl Arrow for Bigraph {
    type Object = Interface;

    fn source(&self) -> Interface {
        self.inner_face()
    }

    fn target(&self) -> Interface {
        self.outer_face()
    }

    fn identity(a: &Interface) -> Self {
        Bigraph::identity(a)
    }

    fn compose(&self, inner: &Self) -> Result<Self> {
        Bigraph::compose(self, inner)
    }
}

impl Monoidal for Bigraph {
    fn unit() -> Self {
        Bigraph::empty()
    }

    fn tensor(&self, other: &Self) -> Result<Self> {
        self.juxtapose(other)
    }
}

impl SymmetricMonoidal for Bigraph {
    fn twist(a: &Interface, b: &Interface) -> Self {
        let mut g = Bigraph::identity_names(a.names.iter().chain(&b.names).cloned());
        let places = Bigraph::swap(a.width, b.width);
        g.roots = places.roots;
        g.sites = places.sites;
        g
    }
}

use core::ops::{BitAnd, BitOr, Shr};

/// Diagrammatic composition: `&f >> &g` is `g ∘ f`.
impl Shr<&Bigraph> for &Bigraph {
    type Output = Result<Bigraph>;

    fn shr(self, rhs: &Bigraph) -> Self::Output {
        rhs.compose(self)
    }
}

impl BitOr<&Bigraph> for &Bigraph {
    type Output = Result<Bigraph>;

    fn bitor(self, rhs: &Bigraph) -> Self::Output {
        self.juxtapose(rhs)
    }
}

impl BitAnd<&Bigraph> for &Bigraph {
    type Output = Result<Bigraph>;

    fn bitand(self, rhs: &Bigraph) -> Self::Output {
        self.parallel_product(rhs)
    }
}
