//! Property tests for the seeded lattice using proptest.
//!
//! These stress invariants that must hold for ANY operand drawn from the
//! machine-type lattice, not just hand-picked examples:
//!
//! 1. Casting a type to itself is exact, at distance zero.
//! 2. Post-seed, every distinct pair is connected (never `False`).
//! 3. Convert distance equals the rank delta.
//! 4. Singleton and uniform operand sets coerce safely to themselves.
//! 5. A coercion target is reachable from every operand; a safe target is
//!    reachable without conversion.
//! 6. The symmetric filter returns in-range, duplicate-free indices, and
//!    the asymmetric winner is always drawn from them.

use proptest::prelude::*;

use crate::cast::Tcc;
use crate::context::TypeContext;
use crate::machine::MACHINE_TYPES;
use crate::overload::BestOverload;

static POOL: &[&str] = &MACHINE_TYPES;

fn arb_machine_type() -> impl Strategy<Value = &'static str> {
    prop::sample::select(POOL)
}

fn arb_typeset() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(arb_machine_type(), 1..6)
}

proptest! {
    #[test]
    fn cast_to_self_is_exact(name in arb_machine_type()) {
        let mut ctx = TypeContext::seeded();
        let ty = ctx.get_type(name);
        let cd = ctx.cast(ty, ty);
        prop_assert_eq!(cd.tcc, Tcc::Exact);
        prop_assert_eq!(cd.distance, 0);
    }

    #[test]
    fn seeded_pairs_are_connected(a in arb_machine_type(), b in arb_machine_type()) {
        let mut ctx = TypeContext::seeded();
        let from = ctx.get_type(a);
        let to = ctx.get_type(b);
        let cd = ctx.cast(from, to);
        prop_assert_ne!(cd.tcc, Tcc::False);
        if cd.tcc == Tcc::Convert {
            prop_assert_eq!(cd.distance, ctx.get_rank(to) - ctx.get_rank(from));
        } else {
            prop_assert_eq!(cd.distance, 0);
        }
    }

    #[test]
    fn singleton_coerces_to_itself(name in arb_machine_type()) {
        let mut ctx = TypeContext::seeded();
        let ty = ctx.get_type(name);
        let coerced = ctx.coerce(&[ty]).unwrap().unwrap();
        prop_assert_eq!(coerced.ty, ty);
        prop_assert!(coerced.safe);
    }

    #[test]
    fn uniform_typeset_coerces_to_itself(name in arb_machine_type(), n in 1usize..8) {
        let mut ctx = TypeContext::seeded();
        let ty = ctx.get_type(name);
        let typeset = vec![ty; n];
        let coerced = ctx.coerce(&typeset).unwrap().unwrap();
        prop_assert_eq!(coerced.ty, ty);
        prop_assert!(coerced.safe);
    }

    #[test]
    fn coerce_target_is_reachable(names in arb_typeset()) {
        let mut ctx = TypeContext::seeded();
        let typeset: Vec<_> = names.iter().map(|n| ctx.get_type(n)).collect();
        // Machine types are fully connected, so coercion always succeeds.
        let coerced = ctx.coerce(&typeset).unwrap().unwrap();
        prop_assert!(typeset.contains(&coerced.ty));
        for &member in &typeset {
            let tcc = ctx.cast(member, coerced.ty).tcc;
            prop_assert_ne!(tcc, Tcc::False);
            if coerced.safe {
                prop_assert!(tcc == Tcc::Exact || tcc == Tcc::Promote);
            }
        }
    }

    #[test]
    fn best_overload_comes_from_the_symmetric_set(
        sig_names in prop::collection::vec(arb_machine_type(), 1..4),
        nvers in 1usize..6,
        seed_names in prop::collection::vec(arb_machine_type(), 24),
    ) {
        let mut ctx = TypeContext::seeded();
        let nargs = sig_names.len();
        let sig: Vec<_> = sig_names.iter().map(|n| ctx.get_type(n)).collect();
        let overloads: Vec<_> = seed_names[..nvers * nargs]
            .iter()
            .map(|n| ctx.get_type(n))
            .collect();

        let selected = ctx.select_overload(&sig, &overloads).unwrap();
        // Fully connected lattice: some version always survives.
        prop_assert!(!selected.is_empty());
        let mut sorted = selected.clone();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), selected.len());
        for &v in &selected {
            prop_assert!(v < nvers);
        }

        match ctx.select_best_overload(&sig, &overloads).unwrap() {
            BestOverload::Unique(i) => prop_assert!(selected.contains(&i)),
            BestOverload::Ambiguous(n) => {
                prop_assert!(n >= 2);
                prop_assert!(n <= selected.len());
            }
            BestOverload::NoMatch => prop_assert!(selected.is_empty()),
        }
    }
}
