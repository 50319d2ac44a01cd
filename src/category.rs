//! Categorical structure of bigraphs.
//!
//! Objects are [`Interface`](crate::bigraph::Interface)s and arrows are bigraphs. Composition
//! and tensor are partial, so both return a [`Result`].
use crate::error::Result;

pub trait Arrow: Sized {
    type Object;

    fn source(&self) -> Self::Object;
    fn target(&self) -> Self::Object;

    /// the identity morphism on `a`
    fn identity(a: &Self::Object) -> Self;

    /// Compose morphisms in applicative order: `self ∘ inner`
    ///
    /// # Errors
    ///
    /// Returns an error if `inner.target()` cannot be glued to `self.source()`.
    fn compose(&self, inner: &Self) -> Result<Self>;
}

pub trait Monoidal: Arrow {
    /// the monoidal unit
    fn unit() -> Self;

    /// `f \otimes g` of two morphisms
    fn tensor(&self, other: &Self) -> Result<Self>;
}

pub trait SymmetricMonoidal: Monoidal {
    /// Construct the symmetry `\sigma_{a,b} : a \otimes b → b \otimes a`.
    fn twist(a: &Self::Object, b: &Self::Object) -> Self;
}
