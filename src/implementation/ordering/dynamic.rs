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

//! This module provides the dynamic candidate ordering: the eager ordering
//! strategy which re-evaluates the marginal gain of every candidate at every
//! node.

use binary_heap_plus::BinaryHeap;
use ordered_float::OrderedFloat;

use crate::{Candidate, Instance, NodeInput, Objective, Ordered, Orderer};

use super::drain_descending;

/// The dynamic candidate ordering. At each node it drops the candidates that
/// cannot fit the remaining capacity, refreshes the marginal gain of every
/// survivor with one oracle call, and orders them by decreasing relative
/// gain (gain per unit of weight) with a max-heap.
///
/// The gains it attaches to the candidates are absolute marginal gains; this
/// is the value source the eager fractional bounds read. One full oracle
/// call per surviving candidate makes this the dominant cost of the eager
/// variants.
#[derive(Debug, Default, Copy, Clone)]
pub struct DynamicOrdering;
impl<O: Objective> Orderer<O> for DynamicOrdering {
    fn order(&self, instance: &Instance<O>, node: &NodeInput) -> Ordered {
        let mut heap = BinaryHeap::new_by_key(|c: &Candidate| {
            OrderedFloat(c.gain / instance.weight(c.item) as f32)
        });
        for candidate in node.candidates {
            let weight = instance.weight(candidate.item);
            if weight > node.capacity {
                continue;
            }
            let gain = instance.gain(node.solution, candidate.item, node.s_value);
            heap.push(Candidate { item: candidate.item, gain });
        }
        Ordered { terminate: false, candidates: drain_descending(heap) }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use crate::*;

    /// A modular objective: the value of a set is the sum of the item values.
    struct Additive(Vec<f32>);
    impl Objective for Additive {
        fn eval(&self, set: &[usize]) -> f32 {
            set.iter().map(|&i| self.0[i]).sum()
        }
    }

    fn all_candidates(n: usize) -> Vec<Candidate> {
        (0..n).map(|item| Candidate { item, gain: 0.0 }).collect()
    }

    #[test]
    fn candidates_are_ordered_by_decreasing_relative_gain() {
        // values 6, 5, 2 and weights 4, 2, 1: relative gains 1.5, 2.5, 2.0
        let instance = Instance::new(vec![4, 2, 1], Additive(vec![6.0, 5.0, 2.0]));
        let node = NodeInput {
            solution: &[],
            candidates: &all_candidates(3),
            s_value: 0.0,
            s_best: 0.0,
            capacity: 10,
            inherited: false,
        };
        let ordered = DynamicOrdering.order(&instance, &node);
        let items: Vec<usize> = ordered.candidates.iter().map(|c| c.item).collect();
        assert_eq!(vec![1, 2, 0], items);
        assert_eq!(5.0, ordered.candidates[0].gain);
        assert!(!ordered.terminate);
    }

    #[test]
    fn candidates_too_heavy_for_the_remaining_capacity_are_dropped() {
        let instance = Instance::new(vec![4, 2, 1], Additive(vec![6.0, 5.0, 2.0]));
        let node = NodeInput {
            solution: &[],
            candidates: &all_candidates(3),
            s_value: 0.0,
            s_best: 0.0,
            capacity: 2,
            inherited: false,
        };
        let ordered = DynamicOrdering.order(&instance, &node);
        let items: Vec<usize> = ordered.candidates.iter().map(|c| c.item).collect();
        assert_eq!(vec![1, 2], items);
    }

    #[test]
    fn an_empty_result_is_legal() {
        let instance = Instance::new(vec![4], Additive(vec![6.0]));
        let node = NodeInput {
            solution: &[],
            candidates: &all_candidates(1),
            s_value: 0.0,
            s_best: 0.0,
            capacity: 3,
            inherited: false,
        };
        let ordered = DynamicOrdering.order(&instance, &node);
        assert!(ordered.candidates.is_empty());
        assert!(!ordered.terminate);
    }
}
