#![cfg(test)]

// Property tests for ChainHashMap kept inside the crate so they can assert
// on internals (capacity/bound) alongside the public surface.

use crate::chain_hash_map::{ChainHashMap, NotFound};
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Set(usize, i32),
    Get(usize),
    Delete(usize),
    Contains(String),
}

fn key_from(pool: &[String], i: usize) -> String {
    pool[i].clone()
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Set(i, v)),
            idx.clone().prop_map(OpI::Get),
            idx.clone().prop_map(OpI::Delete),
            prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `set` inserts or overwrites exactly like the model's `insert`.
// - `get` returns the model's value for present keys and NotFound for
//   absent ones; `contains_key` parity.
// - `delete` returns the model's removed value or NotFound.
// - `len`/`is_empty` parity with the model after every op; the table never
//   exceeds its bound and `bound == floor(capacity * load_factor)` holds
//   throughout.
fn run_state_machine(
    mut sut: ChainHashMap<String, i32>,
    load_factor: f64,
    pool: Vec<String>,
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        match op {
            OpI::Set(i, v) => {
                let k = key_from(&pool, i);
                sut.set(k.clone(), v);
                model.insert(k, v);
            }
            OpI::Get(i) => {
                let k = key_from(&pool, i);
                prop_assert_eq!(sut.get(k.as_str()).ok(), model.get(&k));
            }
            OpI::Delete(i) => {
                let k = key_from(&pool, i);
                match model.remove(&k) {
                    Some(mv) => prop_assert_eq!(sut.delete(k.as_str()), Ok(mv)),
                    None => prop_assert_eq!(sut.delete(k.as_str()), Err(NotFound)),
                }
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(s.as_str()), model.contains_key(&s));
            }
        }

        // Post-conditions after each op
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert!(sut.len() <= sut.bound());
        prop_assert_eq!(
            sut.bound(),
            (sut.capacity() as f64 * load_factor) as usize
        );
    }

    // Every surviving key must still resolve to the model's value.
    for (k, v) in &model {
        prop_assert_eq!(sut.get(k.as_str()), Ok(v));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        // Small capacity and fractional load factor so scenarios cross the
        // bound and exercise the doubling rehash.
        run_state_machine(ChainHashMap::new(2, 0.75), 0.75, pool, ops)?;
    }
}

// Collision variant: a capacity-1 table with a huge load factor funnels
// every key into a single chain (the hash function is fixed, so a
// degenerate table stands in for the degenerate hasher). This stresses
// head promotion and mid-chain splicing on delete.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_single_chain((pool, ops) in arb_scenario()) {
        run_state_machine(ChainHashMap::new(1, 1e6), 1e6, pool, ops)?;
    }
}
