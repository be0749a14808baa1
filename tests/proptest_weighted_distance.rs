//! Property-based tests for the weighted distance.
//!
//! Costs used here are small multiples of 1/4 so every sum is exact in `f64`
//! and results can be compared with `==`.
//!
//! 1. **Empty sides**: d("", b) = Σ insert(b), d(a, "") = Σ delete(a)
//! 2. **Identity**: d(a, a) = 0 when equal characters are free to replace
//! 3. **Symmetry**: d(a, b) = d(b, a) when insert = delete and replace is symmetric
//! 4. **Unit costs**: matches the classic full-matrix Levenshtein distance
//! 5. **Bounds**: d(a, b) ≤ Σ delete(a) + Σ insert(b)
//! 6. **Triangle inequality** for symmetric costs
//! 7. **Composition**: a single composed function behaves like the original

use proptest::prelude::*;
use weighted_levenshtein::prelude::*;

fn arb_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{0,12}").unwrap()
}

fn arb_unicode_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..12).prop_map(|chars| chars.into_iter().collect())
}

fn quarter() -> impl Strategy<Value = f64> {
    (0u8..=12).prop_map(|q| f64::from(q) / 4.0)
}

/// Per-character cost derived from the code point, in quarters.
fn char_weight(c: char, salt: u32) -> f64 {
    f64::from((c as u32).wrapping_add(salt) % 9) / 4.0
}

fn reference_unit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        matrix[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let substitution = matrix[i - 1][j - 1] + usize::from(a[i - 1] != b[j - 1]);
            matrix[i][j] = substitution
                .min(matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1);
        }
    }
    matrix[a.len()][b.len()]
}

fn symmetric_engine(salt: u32, mismatch: f64) -> WeightedLevenshtein {
    let unary = move |c: char| char_weight(c, salt) + 0.25;
    WeightedLevenshtein::builder()
        .insert_cost(InsertCost::new(unary))
        .delete_cost(DeleteCost::new(unary))
        .replace_cost(ReplaceCost::new(move |s, t| {
            if s == t {
                0.0
            } else {
                // Symmetric and satisfies the triangle inequality
                mismatch + char_weight(s, salt).max(char_weight(t, salt))
            }
        }))
        .build()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn empty_source_sums_insert_costs(b in arb_unicode_string(), salt in any::<u32>()) {
        let lev = WeightedLevenshtein::builder()
            .insert_cost(InsertCost::new(move |c| char_weight(c, salt)))
            .build();
        let expected: f64 = b.chars().map(|c| char_weight(c, salt)).sum();
        prop_assert_eq!(lev.distance("", &b), expected);
    }

    #[test]
    fn empty_target_sums_delete_costs(a in arb_unicode_string(), salt in any::<u32>()) {
        let lev = WeightedLevenshtein::builder()
            .delete_cost(DeleteCost::new(move |c| char_weight(c, salt)))
            .build();
        let expected: f64 = a.chars().map(|c| char_weight(c, salt)).sum();
        prop_assert_eq!(lev.distance(&a, ""), expected);
    }

    #[test]
    fn identity_is_free(a in arb_unicode_string(), salt in any::<u32>(), mismatch in quarter()) {
        let lev = symmetric_engine(salt, mismatch);
        prop_assert_eq!(lev.distance(&a, &a), 0.0);
    }

    #[test]
    fn symmetric_costs_give_symmetric_distance(
        a in arb_string(),
        b in arb_string(),
        salt in any::<u32>(),
        mismatch in quarter(),
    ) {
        let lev = symmetric_engine(salt, mismatch);
        prop_assert_eq!(lev.distance(&a, &b), lev.distance(&b, &a));
    }

    #[test]
    fn unit_costs_match_reference(a in arb_string(), b in arb_string()) {
        let lev = WeightedLevenshtein::new();
        prop_assert_eq!(lev.distance(&a, &b), reference_unit_distance(&a, &b) as f64);
    }

    #[test]
    fn unit_costs_match_reference_unicode(a in arb_unicode_string(), b in arb_unicode_string()) {
        let lev = WeightedLevenshtein::new();
        prop_assert_eq!(lev.distance(&a, &b), reference_unit_distance(&a, &b) as f64);
    }

    #[test]
    fn bounded_by_delete_all_insert_all(
        a in arb_string(),
        b in arb_string(),
        insert in quarter(),
        delete in quarter(),
        replace in quarter(),
    ) {
        let lev = WeightedLevenshtein::builder()
            .insert_cost(InsertCost::constant(insert))
            .delete_cost(DeleteCost::constant(delete))
            .replace_cost(ReplaceCost::mismatch(replace))
            .build();

        let upper = delete * a.chars().count() as f64 + insert * b.chars().count() as f64;
        let d = lev.distance(&a, &b);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= upper, "{} > {}", d, upper);
    }

    #[test]
    fn triangle_inequality(
        a in arb_string(),
        b in arb_string(),
        c in arb_string(),
        salt in any::<u32>(),
        mismatch in quarter(),
    ) {
        let lev = symmetric_engine(salt, mismatch);
        let ab = lev.distance(&a, &b);
        let bc = lev.distance(&b, &c);
        let ac = lev.distance(&a, &c);
        prop_assert!(ac <= ab + bc, "d(a,c)={} > d(a,b)+d(b,c)={}", ac, ab + bc);
    }

    #[test]
    fn longer_target_matches_longer_source(
        a in arb_string(),
        b in arb_string(),
        insert in quarter(),
        delete in quarter(),
    ) {
        // Swapping roles of insert and delete mirrors the problem
        let forward = WeightedLevenshtein::builder()
            .insert_cost(InsertCost::constant(insert))
            .delete_cost(DeleteCost::constant(delete))
            .build();
        let mirrored = WeightedLevenshtein::builder()
            .insert_cost(InsertCost::constant(delete))
            .delete_cost(DeleteCost::constant(insert))
            .build();
        prop_assert_eq!(forward.distance(&a, &b), mirrored.distance(&b, &a));
    }

    #[test]
    fn single_composition_is_identity(
        chars in prop::collection::vec(any::<char>(), 1..20),
        salt in any::<u32>(),
        weight in 0.25f64..100.0,
    ) {
        let insert = InsertCost::new(move |c| char_weight(c, salt));

        for strategy in [ComposeStrategy::Min, ComposeStrategy::Max, ComposeStrategy::Avg] {
            let composed = compose_insert_cost(strategy, [insert.clone()]).unwrap();
            for &c in &chars {
                prop_assert_eq!(composed.cost(c), insert.cost(c));
            }
        }

        let weighted =
            compose_weighted_insert_cost([WeightedEntry::new(insert.clone(), weight)]).unwrap();
        for &c in &chars {
            prop_assert_eq!(weighted.cost(c), insert.cost(c));
        }
    }

    #[test]
    fn composition_is_bounded(
        chars in prop::collection::vec(any::<char>(), 1..20),
        salts in prop::collection::vec(any::<u32>(), 2..5),
    ) {
        let funcs: Vec<DeleteCost> = salts
            .iter()
            .map(|&salt| DeleteCost::new(move |c| char_weight(c, salt)))
            .collect();

        let min = compose_delete_cost(ComposeStrategy::Min, funcs.clone()).unwrap();
        let max = compose_delete_cost(ComposeStrategy::Max, funcs.clone()).unwrap();
        let avg = compose_delete_cost(ComposeStrategy::Avg, funcs.clone()).unwrap();

        for &c in &chars {
            let values: Vec<f64> = funcs.iter().map(|f| f.cost(c)).collect();
            let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            prop_assert_eq!(min.cost(c), lo);
            prop_assert_eq!(max.cost(c), hi);
            prop_assert!(avg.cost(c) >= lo && avg.cost(c) <= hi);
        }
    }
}

#[test]
fn asymmetric_costs_break_symmetry() {
    let lev = WeightedLevenshtein::builder()
        .insert_cost(InsertCost::constant(1.0))
        .delete_cost(DeleteCost::constant(3.0))
        .build();
    assert_ne!(lev.distance("abc", "a"), lev.distance("a", "abc"));
}

#[test]
fn custom_replace_may_break_identity() {
    let lev = WeightedLevenshtein::builder()
        .replace_cost(ReplaceCost::constant(0.5))
        .build();
    assert_eq!(lev.distance("abc", "abc"), 1.5);
}
