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

//! This module provides the family of fractional upper bounds used to prune
//! search nodes. All of them run the same greedy fractional knapsack over an
//! ordered candidate list; they only differ in which value they read for an
//! item (the absolute gain attached by the eager orderings, or the per-unit
//! gain attached by the lazy ones) and in whether they also report the
//! integrally packed prefix for the candidate reduction step.
//!
//! Because the candidate list is sorted by decreasing relative gain, the
//! greedy pack is the exact optimum of the corresponding fractional modular
//! knapsack, hence an upper bound on the best increment attainable over the
//! current solution.

use crate::{Bound, Bounder, Candidate, Instance, Objective};

/// Greedy fractional pack reading absolute gains.
pub(crate) fn eager_fractional<O: Objective>(
    instance: &Instance<O>,
    candidates: &[Candidate],
    mut capacity: usize,
) -> f32 {
    let total_weight: usize = candidates.iter().map(|c| instance.weight(c.item)).sum();
    if total_weight <= capacity {
        return candidates.iter().map(|c| c.gain).sum();
    }
    let mut total_value = 0.0;
    for c in candidates {
        let weight = instance.weight(c.item);
        if weight <= capacity {
            capacity -= weight;
            total_value += c.gain;
        } else {
            total_value += c.gain / weight as f32 * capacity as f32;
            break;
        }
    }
    total_value
}

/// Same pack as [`eager_fractional`], additionally reporting the items that
/// were packed integrally. The fractional tail item is not part of the
/// reported prefix.
pub(crate) fn eager_fractional_with_prefix<O: Objective>(
    instance: &Instance<O>,
    candidates: &[Candidate],
    mut capacity: usize,
) -> (f32, Vec<usize>) {
    let total_weight: usize = candidates.iter().map(|c| instance.weight(c.item)).sum();
    if total_weight <= capacity {
        let value = candidates.iter().map(|c| c.gain).sum();
        return (value, candidates.iter().map(|c| c.item).collect());
    }
    let mut total_value = 0.0;
    let mut packed = vec![];
    for c in candidates {
        let weight = instance.weight(c.item);
        if weight <= capacity {
            capacity -= weight;
            total_value += c.gain;
            packed.push(c.item);
        } else {
            total_value += c.gain / weight as f32 * capacity as f32;
            break;
        }
    }
    (total_value, packed)
}

/// Greedy fractional pack reading per-unit gains: a whole item contributes
/// `gain * weight`, the fractional tail contributes `gain * remaining`.
///
/// The full-weight short-circuit deliberately sums `gain * weight` rather
/// than recomputing absolute marginal gains: when the gains were inherited
/// from an ancestor, submodularity makes them overestimates, which keeps the
/// result a valid upper bound on the attainable increment.
pub(crate) fn lazy_fractional<O: Objective>(
    instance: &Instance<O>,
    candidates: &[Candidate],
    mut capacity: usize,
) -> f32 {
    let total_weight: usize = candidates.iter().map(|c| instance.weight(c.item)).sum();
    if total_weight <= capacity {
        return candidates
            .iter()
            .map(|c| c.gain * instance.weight(c.item) as f32)
            .sum();
    }
    let mut total_value = 0.0;
    for c in candidates {
        let weight = instance.weight(c.item);
        if weight <= capacity {
            capacity -= weight;
            total_value += c.gain * weight as f32;
        } else {
            total_value += c.gain * capacity as f32;
            break;
        }
    }
    total_value
}

/// Same pack as [`lazy_fractional`], additionally reporting the integrally
/// packed prefix.
pub(crate) fn lazy_fractional_with_prefix<O: Objective>(
    instance: &Instance<O>,
    candidates: &[Candidate],
    mut capacity: usize,
) -> (f32, Vec<usize>) {
    let total_weight: usize = candidates.iter().map(|c| instance.weight(c.item)).sum();
    if total_weight <= capacity {
        let value = candidates
            .iter()
            .map(|c| c.gain * instance.weight(c.item) as f32)
            .sum();
        return (value, candidates.iter().map(|c| c.item).collect());
    }
    let mut total_value = 0.0;
    let mut packed = vec![];
    for c in candidates {
        let weight = instance.weight(c.item);
        if weight <= capacity {
            capacity -= weight;
            total_value += c.gain * weight as f32;
            packed.push(c.item);
        } else {
            total_value += c.gain * capacity as f32;
            break;
        }
    }
    (total_value, packed)
}

/// The bound used with the eager orderings: fractional pack over absolute
/// gains, no packed prefix.
#[derive(Debug, Default, Copy, Clone)]
pub struct FractionalBound;
impl<O: Objective> Bounder<O> for FractionalBound {
    fn bound(&self, instance: &Instance<O>, candidates: &[Candidate], capacity: usize) -> Bound {
        Bound { upper: eager_fractional(instance, candidates, capacity), packed: None }
    }
}

/// Same as [`FractionalBound`] but it reports the integrally packed prefix
/// for the candidate reduction step that follows it.
#[derive(Debug, Default, Copy, Clone)]
pub struct FractionalBoundWithPrefix;
impl<O: Objective> Bounder<O> for FractionalBoundWithPrefix {
    fn bound(&self, instance: &Instance<O>, candidates: &[Candidate], capacity: usize) -> Bound {
        let (upper, packed) = eager_fractional_with_prefix(instance, candidates, capacity);
        Bound { upper, packed: Some(packed) }
    }
}

/// The bound used with the lazy orderings: fractional pack over per-unit
/// gains, no packed prefix.
#[derive(Debug, Default, Copy, Clone)]
pub struct LazyFractionalBound;
impl<O: Objective> Bounder<O> for LazyFractionalBound {
    fn bound(&self, instance: &Instance<O>, candidates: &[Candidate], capacity: usize) -> Bound {
        Bound { upper: lazy_fractional(instance, candidates, capacity), packed: None }
    }
}

/// Same as [`LazyFractionalBound`] but it reports the integrally packed
/// prefix for the candidate reduction step that follows it.
#[derive(Debug, Default, Copy, Clone)]
pub struct LazyFractionalBoundWithPrefix;
impl<O: Objective> Bounder<O> for LazyFractionalBoundWithPrefix {
    fn bound(&self, instance: &Instance<O>, candidates: &[Candidate], capacity: usize) -> Bound {
        let (upper, packed) = lazy_fractional_with_prefix(instance, candidates, capacity);
        Bound { upper, packed: Some(packed) }
    }
}

/// The bound used with the early pruning orderings, which fuse their pruning
/// test into the ordering traversal: it never prunes anything on its own.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoBound;
impl<O: Objective> Bounder<O> for NoBound {
    fn bound(&self, _: &Instance<O>, _: &[Candidate], _: usize) -> Bound {
        Bound { upper: f32::INFINITY, packed: None }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use crate::*;
    use super::*;

    struct Zero;
    impl Objective for Zero {
        fn eval(&self, _: &[usize]) -> f32 {
            0.0
        }
    }

    fn instance(weights: Vec<usize>) -> Instance<Zero> {
        Instance::new(weights, Zero)
    }

    fn cand(item: usize, gain: f32) -> Candidate {
        Candidate { item, gain }
    }

    #[test]
    fn when_everything_fits_the_eager_bound_is_the_plain_sum() {
        let inst = instance(vec![1, 2]);
        let c = vec![cand(0, 3.0), cand(1, 4.0)];
        assert_eq!(7.0, eager_fractional(&inst, &c, 10));
        let (value, packed) = eager_fractional_with_prefix(&inst, &c, 10);
        assert_eq!(7.0, value);
        assert_eq!(vec![0, 1], packed);
    }

    #[test]
    fn the_eager_bound_packs_the_tail_fractionally() {
        let inst = instance(vec![4, 4]);
        let c = vec![cand(0, 8.0), cand(1, 6.0)];
        // item 0 packs whole, item 1 contributes 6/4 * 2 = 3
        assert_eq!(11.0, eager_fractional(&inst, &c, 6));
        let (value, packed) = eager_fractional_with_prefix(&inst, &c, 6);
        assert_eq!(11.0, value);
        assert_eq!(vec![0], packed);
    }

    #[test]
    fn the_lazy_bound_scales_per_unit_gains_by_weight() {
        let inst = instance(vec![4, 4]);
        let c = vec![cand(0, 2.0), cand(1, 1.5)];
        // full fit: 2*4 + 1.5*4
        assert_eq!(14.0, lazy_fractional(&inst, &c, 10));
        // saturated: 2*4 whole + 1.5*2 fractional
        assert_eq!(11.0, lazy_fractional(&inst, &c, 6));
        let (value, packed) = lazy_fractional_with_prefix(&inst, &c, 6);
        assert_eq!(11.0, value);
        assert_eq!(vec![0], packed);
    }

    #[test]
    fn a_zero_capacity_yields_a_zero_bound() {
        let inst = instance(vec![2]);
        let c = vec![cand(0, 5.0)];
        assert_eq!(0.0, eager_fractional(&inst, &c, 0));
        assert_eq!(0.0, lazy_fractional(&inst, &c, 0));
    }

    #[test]
    fn bounds_are_idempotent() {
        let inst = instance(vec![3, 5, 2]);
        let c = vec![cand(0, 6.0), cand(1, 5.0), cand(2, 1.0)];
        let once = eager_fractional(&inst, &c, 7);
        let twice = eager_fractional(&inst, &c, 7);
        assert_eq!(once, twice);
    }

    #[test]
    fn the_no_bound_never_prunes() {
        let inst = instance(vec![1]);
        let bound = NoBound.bound(&inst, &[cand(0, 1.0)], 1);
        assert_eq!(f32::INFINITY, bound.upper);
        assert!(bound.packed.is_none());
    }
}
