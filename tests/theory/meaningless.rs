// A meaningless signature with no given interpretation.
// Controls differ only by name and arity.

use bigraphs::prelude::*;

/// `(name, arity)` of every control, all active.
pub const CONTROLS: [(&str, usize); 3] = [("A", 0), ("B", 1), ("C", 2)];

pub fn signature() -> Signature {
    Signature::new(CONTROLS.iter().map(|(name, arity)| Control::active(*name, *arity)))
}

/// The same controls plus an atomic one, `D` of arity 1.
pub fn signature_with_atom() -> Signature {
    signature().with(Control::atomic("D", 1))
}
