// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! These tests check that the nine solver variants agree with one another
//! and with a brute force enumeration on small instances, and that the
//! boundary behaviors (empty instance, zero capacity, expired deadline,
//! ties) hold for every variant.

use std::time::Instant;

use subknap::*;

/// The optimum computed by enumerating every subset of the ground set.
fn brute_force<O: Objective>(instance: &Instance<O>, capacity: usize) -> f32 {
    let n = instance.nb_items();
    let mut best = 0.0_f32;
    for mask in 0u32..(1 << n) {
        let subset: Vec<usize> = (0..n).filter(|i| mask & (1 << i) != 0).collect();
        let weight: usize = subset.iter().map(|&i| instance.weight(i)).sum();
        if weight <= capacity {
            best = best.max(instance.eval(&subset));
        }
    }
    best
}

/// Solves the instance with every variant and checks they all report the
/// expected optimum.
fn check_all_variants<O: Objective>(instance: &Instance<O>, capacity: usize, expected: f32) {
    for variant in Variant::ALL {
        let (completion, explored) = solve(variant, instance, capacity, &NoCutoff);
        assert!(completion.is_exact, "{variant:?} aborted");
        assert_eq!(Some(expected), completion.best_value, "{variant:?} at capacity {capacity}");
        assert!(explored >= 1, "{variant:?} counted no node");
    }
}

fn coverage_toy() -> Instance<Coverage> {
    Instance::new(
        vec![2, 2, 2],
        Coverage {
            values: vec![10.0, 5.0, 5.0],
            districts: vec![vec![0, 1], vec![1, 2], vec![0, 2]],
        },
    )
}

#[test]
fn an_empty_instance_has_optimum_zero() {
    let instance = Instance::new(vec![], Coverage { values: vec![], districts: vec![] });
    check_all_variants(&instance, 10, 0.0);
}

#[test]
fn a_zero_capacity_has_optimum_zero() {
    check_all_variants(&coverage_toy(), 0, 0.0);
    let facility = Instance::new(
        vec![3, 5],
        FacilityLocation { benefits: vec![vec![1.0, 2.0], vec![4.0, 0.5]] },
    );
    check_all_variants(&facility, 0, 0.0);
}

#[test]
fn the_facility_location_toy_takes_the_single_best_item() {
    // two items of weights 3 and 5 under capacity 5: both together exceed
    // the capacity, and item 1 alone is worth 4.5
    let instance = Instance::new(
        vec![3, 5],
        FacilityLocation { benefits: vec![vec![1.0, 2.0], vec![4.0, 0.5]] },
    );
    check_all_variants(&instance, 5, 4.5);
}

#[test]
fn the_coverage_toy_covers_everything_with_two_items() {
    // any two items cover all three districts
    check_all_variants(&coverage_toy(), 4, 20.0);
}

#[test]
fn the_coverage_toy_takes_the_best_single_item_when_only_one_fits() {
    check_all_variants(&coverage_toy(), 2, 15.0);
}

#[test]
fn the_influence_toy_adds_both_spreaders_when_they_fit() {
    let instance = Instance::new(
        vec![1, 1],
        Influence {
            probability: vec![0.5, 0.5],
            connections: vec![vec![true, false], vec![false, true]],
            nb_targets: 2,
        },
    );
    check_all_variants(&instance, 2, 1.0);
    check_all_variants(&instance, 1, 0.5);
}

#[test]
fn ties_do_not_split_the_variants() {
    // four items with identical weights and identical gains: two disjoint
    // districts of equal value each
    let instance = Instance::new(
        vec![2, 2, 2, 2],
        Coverage {
            values: vec![4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0],
            districts: vec![vec![0, 1], vec![2, 3], vec![4, 5], vec![6, 7]],
        },
    );
    check_all_variants(&instance, 4, 16.0);
}

#[test]
fn every_variant_matches_brute_force_on_a_coverage_instance() {
    let instance = Instance::new(
        vec![2, 3, 1, 4, 2, 3, 1],
        Coverage {
            values: vec![6.0, 3.0, 8.0, 2.0, 5.0, 4.0, 7.0, 1.0],
            districts: vec![
                vec![0, 2],
                vec![1, 3, 4],
                vec![2],
                vec![0, 1, 5, 6],
                vec![4, 7],
                vec![5, 2],
                vec![6],
            ],
        },
    );
    for capacity in [0, 3, 5, 7, 12] {
        let expected = brute_force(&instance, capacity);
        check_all_variants(&instance, capacity, expected);
    }
}

#[test]
fn every_variant_matches_brute_force_on_a_facility_location_instance() {
    let instance = Instance::new(
        vec![2, 3, 1, 4, 2, 3],
        FacilityLocation {
            benefits: vec![
                vec![3.0, 0.0, 1.0, 2.0],
                vec![1.0, 4.0, 0.0, 0.0],
                vec![0.0, 1.0, 2.0, 0.0],
                vec![5.0, 1.0, 1.0, 1.0],
                vec![2.0, 2.0, 2.0, 2.0],
                vec![0.0, 0.0, 4.0, 1.0],
            ],
        },
    );
    for capacity in [2, 4, 6, 9] {
        let expected = brute_force(&instance, capacity);
        check_all_variants(&instance, capacity, expected);
    }
}

#[test]
fn every_variant_matches_brute_force_on_an_influence_instance() {
    let instance = Instance::new(
        vec![1, 2, 1, 2, 4],
        Influence {
            probability: vec![0.5, 0.25, 0.5, 0.75, 0.5],
            connections: vec![
                vec![true, true, false, false],
                vec![false, true, true, false],
                vec![false, false, true, true],
                vec![true, false, false, true],
                vec![true, true, true, true],
            ],
            nb_targets: 4,
        },
    );
    for capacity in [1, 2, 3, 5] {
        let expected = brute_force(&instance, capacity);
        check_all_variants(&instance, capacity, expected);
    }
}

#[test]
fn the_optimum_is_monotone_in_the_capacity() {
    let instance = coverage_toy();
    let mut previous = 0.0;
    for capacity in 0..=7 {
        let (completion, _) = solve(Variant::DcoSub, &instance, capacity, &NoCutoff);
        let value = completion.best_value.unwrap();
        assert!(value >= previous, "optimum shrank at capacity {capacity}");
        previous = value;
    }
}

#[test]
fn an_expired_deadline_reports_an_abort_after_one_node() {
    let instance = coverage_toy();
    for variant in Variant::ALL {
        let cutoff = Deadline::at(Instant::now());
        let (completion, explored) = solve(variant, &instance, 4, &cutoff);
        assert!(!completion.is_exact, "{variant:?}");
        assert_eq!(None, completion.best_value, "{variant:?}");
        assert_eq!(1, explored, "{variant:?}");
    }
}
