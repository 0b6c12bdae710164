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

//! This module provides the candidate reduction step: a per-candidate
//! dominance test which removes items from the candidate set of a node
//! altogether.
//!
//! The rationale goes as follows: an item left out of the fractional packing
//! is dominated. Forcing it into the solution can raise the objective by at
//! most its own gain plus the fractional bound recomputed with the capacity
//! reduced by its weight. If that total still does not beat the incumbent,
//! the item can be dropped from the candidate set of the whole subtree.
//!
//! Only the candidates outside the packed prefix are tested, in candidate
//! order. Removals shrink the list as the loop goes, and the bound is
//! recomputed on the current list at each iteration.

use fxhash::FxHashSet;

use crate::{Candidate, Instance, Objective, Reducer};

use super::bounds::{eager_fractional, lazy_fractional, lazy_fractional_with_prefix};

/// The no-op reduction used by the variants that skip this step entirely.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoReduction;
impl<O: Objective> Reducer<O> for NoReduction {
    fn reduce(
        &self,
        _: &Instance<O>,
        _: &mut Vec<Candidate>,
        _: f32,
        _: f32,
        _: usize,
        _: Option<&[usize]>,
    ) {
    }
}

/// Candidate reduction over absolute gains, fed by the packed prefix of the
/// eager fractional bound.
#[derive(Debug, Default, Copy, Clone)]
pub struct CandidateReduction;
impl<O: Objective> Reducer<O> for CandidateReduction {
    fn reduce(
        &self,
        instance: &Instance<O>,
        candidates: &mut Vec<Candidate>,
        s_value: f32,
        s_best: f32,
        capacity: usize,
        packed: Option<&[usize]>,
    ) {
        let Some(packed) = packed else { return };
        if packed.is_empty() {
            return;
        }
        let packed: FxHashSet<usize> = packed.iter().copied().collect();
        let to_test: Vec<Candidate> = candidates
            .iter()
            .filter(|c| !packed.contains(&c.item))
            .copied()
            .collect();
        for tested in to_test {
            let reduced = capacity - instance.weight(tested.item);
            let upper = eager_fractional(instance, candidates, reduced);
            if s_value + upper + tested.gain <= s_best {
                candidates.retain(|c| c.item != tested.item);
            }
        }
    }
}

/// Candidate reduction over per-unit gains. When the bounding step supplied
/// no packed prefix (the early pruning variants fuse their bound into the
/// ordering and report none), the prefix is recomputed here from the ordered
/// candidates.
#[derive(Debug, Default, Copy, Clone)]
pub struct LazyCandidateReduction;
impl<O: Objective> Reducer<O> for LazyCandidateReduction {
    fn reduce(
        &self,
        instance: &Instance<O>,
        candidates: &mut Vec<Candidate>,
        s_value: f32,
        s_best: f32,
        capacity: usize,
        packed: Option<&[usize]>,
    ) {
        let repacked;
        let packed: &[usize] = match packed {
            Some(packed) => packed,
            None => {
                repacked = lazy_fractional_with_prefix(instance, candidates, capacity).1;
                repacked.as_slice()
            }
        };
        if packed.is_empty() {
            return;
        }
        let packed: FxHashSet<usize> = packed.iter().copied().collect();
        let to_test: Vec<Candidate> = candidates
            .iter()
            .filter(|c| !packed.contains(&c.item))
            .copied()
            .collect();
        for tested in to_test {
            let reduced = capacity - instance.weight(tested.item);
            let upper = lazy_fractional(instance, candidates, reduced);
            let own = tested.gain * instance.weight(tested.item) as f32;
            if s_value + upper + own <= s_best {
                candidates.retain(|c| c.item != tested.item);
            }
        }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use crate::*;

    struct Zero;
    impl Objective for Zero {
        fn eval(&self, _: &[usize]) -> f32 {
            0.0
        }
    }

    fn cand(item: usize, gain: f32) -> Candidate {
        Candidate { item, gain }
    }

    #[test]
    fn a_dominated_candidate_is_removed() {
        let instance = Instance::new(vec![2, 2, 2], Zero);
        let mut candidates = vec![cand(0, 10.0), cand(1, 9.0), cand(2, 1.0)];
        // with capacity 4, the pack holds items 0 and 1; forcing item 2 in
        // leaves room for item 0 only: 10 + 1 cannot beat an incumbent of 20
        CandidateReduction.reduce(&instance, &mut candidates, 0.0, 20.0, 4, Some(&[0, 1]));
        assert_eq!(vec![cand(0, 10.0), cand(1, 9.0)], candidates);
    }

    #[test]
    fn a_candidate_that_may_still_improve_is_kept() {
        let instance = Instance::new(vec![2, 2, 2], Zero);
        let mut candidates = vec![cand(0, 10.0), cand(1, 9.0), cand(2, 1.0)];
        // same test against a weak incumbent: 10 + 1 > 10.5 keeps item 2
        CandidateReduction.reduce(&instance, &mut candidates, 0.0, 10.5, 4, Some(&[0, 1]));
        assert_eq!(3, candidates.len());
    }

    #[test]
    fn without_a_prefix_nothing_is_tested_eagerly() {
        let instance = Instance::new(vec![2, 2], Zero);
        let mut candidates = vec![cand(0, 1.0), cand(1, 0.1)];
        CandidateReduction.reduce(&instance, &mut candidates, 0.0, 100.0, 2, None);
        assert_eq!(2, candidates.len());
    }

    #[test]
    fn the_lazy_reduction_recomputes_its_prefix_when_none_is_given() {
        let instance = Instance::new(vec![2, 2, 2], Zero);
        // per-unit gains: item 0 at 5.0, item 1 at 4.5, item 2 at 0.5
        let mut candidates = vec![cand(0, 5.0), cand(1, 4.5), cand(2, 0.5)];
        // recomputed prefix under capacity 4 is {0, 1}; forcing item 2 in
        // yields at most 5*2 + 0.5*2 = 11 which cannot beat 20
        LazyCandidateReduction.reduce(&instance, &mut candidates, 0.0, 20.0, 4, None);
        assert_eq!(vec![cand(0, 5.0), cand(1, 4.5)], candidates);
    }

    #[test]
    fn the_no_reduction_keeps_everything() {
        let instance = Instance::new(vec![1], Zero);
        let mut candidates = vec![cand(0, 0.0)];
        NoReduction.reduce(&instance, &mut candidates, 0.0, 100.0, 1, Some(&[]));
        assert_eq!(1, candidates.len());
    }
}
