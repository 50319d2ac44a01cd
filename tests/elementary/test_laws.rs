use bigraphs::prelude::*;

fn same(left: &Bigraph, right: &Bigraph) {
    let form = CanonicalForm::interface_sensitive();
    assert_eq!(form.compute(left).unwrap(), form.compute(right).unwrap());
}

#[test]
fn swaps_undo_each_other() {
    for m in 0..4 {
        for n in 0..4 {
            if m + n == 0 {
                continue;
            }
            let there = Bigraph::swap(m, n);
            let back = Bigraph::swap(n, m);
            assert_eq!(there.outer_face().width, m + n);
            same(
                &back.compose(&there).unwrap(),
                &Bigraph::identity_places(m + n),
            );
        }
    }
}

#[test]
fn join_is_associative() {
    let id = Bigraph::identity_places(1);
    let left = Bigraph::join()
        .compose(&Bigraph::join().juxtapose(&id).unwrap())
        .unwrap();
    let right = Bigraph::join()
        .compose(&id.juxtapose(&Bigraph::join()).unwrap())
        .unwrap();
    same(&left, &right);
    same(&left, &Bigraph::merge(3));
}

#[test]
fn join_is_commutative_up_to_swap() {
    let swapped = Bigraph::join().compose(&Bigraph::swap(1, 1)).unwrap();
    same(&swapped, &Bigraph::join());
}

#[test]
fn permutations_compose() {
    let cycle = Bigraph::permutation(&[1, 2, 0]).unwrap();
    let twice = cycle.compose(&cycle).unwrap();
    same(&twice, &Bigraph::permutation(&[2, 0, 1]).unwrap());
    same(&twice.compose(&cycle).unwrap(), &Bigraph::identity_places(3));
}

#[test]
fn closing_a_substitution_makes_one_edge() {
    let closed = Bigraph::closure(["y"])
        .compose(&Bigraph::substitution("y", ["a", "b"]))
        .unwrap();
    assert_eq!(closed.num_edges(), 1);
    assert_eq!(closed.inner_face(), Interface::new(0, ["a", "b"]));
    assert!(closed.outer_face().is_origin());

    let g = Bigraph::barren().juxtapose(&closed).unwrap();
    assert_eq!(
        CanonicalForm::interface_sensitive().compute(&g).unwrap(),
        "0#a=0,b=0;;;"
    );
    assert_eq!(g.canonical_form().unwrap(), "0#0,0;;;");
}

#[test]
fn renamings_invert() {
    let there = Bigraph::renaming(&[("a", "x"), ("b", "y")]).unwrap();
    let back = Bigraph::renaming(&[("x", "a"), ("y", "b")]).unwrap();
    let round_trip = back.compose(&there).unwrap();

    assert_eq!(round_trip.inner_face(), Interface::new(0, ["a", "b"]));
    let barren = Bigraph::barren();
    same(
        &barren.juxtapose(&round_trip).unwrap(),
        &barren.juxtapose(&Bigraph::identity_names(["a", "b"])).unwrap(),
    );
}
