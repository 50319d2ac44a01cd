use bigraphs::prelude::*;

use crate::bigraph::strategy::arb_bigraph;
use proptest::{prop_assert_eq, proptest};

proptest! {
    #[test]
    fn test_identity_type(g in arb_bigraph(8)) {
        let id = <Bigraph as Arrow>::identity(&g.target());
        prop_assert_eq!(id.source(), id.target());
        prop_assert_eq!(id.source(), g.target());
    }

    #[test]
    fn test_identity_law(g in arb_bigraph(8)) {
        let id_a = Bigraph::identity(&g.source());
        let id_b = Bigraph::identity(&g.target());

        let left = Arrow::compose(&id_b, &g).unwrap();
        let right = Arrow::compose(&g, &id_a).unwrap();

        prop_assert_eq!(left.source(), g.source());
        prop_assert_eq!(left.target(), g.target());
        for form in [CanonicalForm::open_links(), CanonicalForm::interface_sensitive()] {
            let expected = form.compute(&g).unwrap();
            prop_assert_eq!(form.compute(&left).unwrap(), expected.clone());
            prop_assert_eq!(form.compute(&right).unwrap(), expected);
        }
    }

    #[test]
    fn test_tensor_unit(g in arb_bigraph(8)) {
        let unit = <Bigraph as Monoidal>::unit();
        prop_assert_eq!(unit.source(), Interface::origin());
        let form = CanonicalForm::interface_sensitive();
        prop_assert_eq!(form.compute(&g.tensor(&unit).unwrap()).unwrap(), form.compute(&g).unwrap());
        prop_assert_eq!(form.compute(&unit.tensor(&g).unwrap()).unwrap(), form.compute(&g).unwrap());
    }
}

#[test]
fn test_twist_is_self_inverse() {
    let a = Interface::new(1, ["x"]);
    let b = Interface::new(2, ["y"]);
    let ab = <Bigraph as SymmetricMonoidal>::twist(&a, &b);
    let ba = <Bigraph as SymmetricMonoidal>::twist(&b, &a);

    assert_eq!(ab.source(), Interface::new(3, ["x", "y"]));
    assert_eq!(
        ab.parent_of(Child::Site(SiteId(0))),
        Place::Root(RootId(2))
    );

    let round_trip = ba.compose(&ab).unwrap();
    let id = Bigraph::identity(&Interface::new(3, ["x", "y"]));
    let form = CanonicalForm::interface_sensitive();
    assert_eq!(form.compute(&round_trip).unwrap(), form.compute(&id).unwrap());
}
