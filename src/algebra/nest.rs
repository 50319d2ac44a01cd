use crate::bigraph::Bigraph;
use crate::error::{BigraphError, InterfaceMismatch, Result};

impl Bigraph {
    /// Nesting `self . inner = (id_X ∥ self) ∘ inner`, where `X` are the outer names of `inner`.
    ///
    /// Unlike [`Bigraph::compose`], the outer names of `inner` are exported through the result
    /// and shared with those of `self`. `self` must have an unnamed inner face.
    pub fn nest(&self, inner: &Bigraph) -> Result<Bigraph> {
        if self.num_inner_names() > 0 {
            let names = self.inner_face().names.into_iter().collect();
            return Err(BigraphError::IncompatibleInterface(
                InterfaceMismatch::NamedInnerFace { names },
            ));
        }

        let id = Bigraph::identity_names(inner.outer_face().names);
        id.parallel_product(self)?.compose(inner)
    }
}
