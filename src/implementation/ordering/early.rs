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

//! This module provides the early pruning orderings, which fuse the pruning
//! test into the ordering traversal: the point is to detect that a node can
//! be pruned before paying the oracle calls for the full candidate list.
//!
//! The traversal follows the inherited candidate order and grows a max-heap
//! of refreshed gains. After each insertion, a trial greedy fractional pack
//! of the heap is compared against the next inherited gain: once the last
//! packed per-unit gain exceeds it, no remaining candidate can make it into
//! the fractional pack (inherited gains are upper bounds on the true ones),
//! so the packed value already bounds the whole node and the pruning test
//! can run right away. If the node survives, the remaining gains are
//! completed and the fully ordered list is handed back.

use binary_heap_plus::BinaryHeap;
use compare::Compare;
use ordered_float::OrderedFloat;

use crate::{Candidate, Instance, NodeInput, Objective, Ordered, Orderer};

use super::drain_descending;
use crate::implementation::bounds::lazy_fractional;

/// Early pruning over fully refreshed gains: unless the node gets pruned
/// mid-traversal, every surviving candidate ends up with a fresh per-unit
/// gain from the oracle.
#[derive(Debug, Default, Copy, Clone)]
pub struct EarlyPruning;
impl<O: Objective> Orderer<O> for EarlyPruning {
    fn order(&self, instance: &Instance<O>, node: &NodeInput) -> Ordered {
        order_early(instance, node, false)
    }
}

/// Early pruning combined with the lazy average decision rule: gains are
/// refreshed only while the inherited value clears the benchmark
/// `(s_best - s_value) / capacity`, the stale tail keeps its inherited
/// (over-estimated) gains, and the early termination gate of the eager
/// variant is retained. Over-estimates in the heap only loosen the trial
/// pack upwards, which is the safe direction for a pruning test.
#[derive(Debug, Default, Copy, Clone)]
pub struct LazyEarlyPruning;
impl<O: Objective> Orderer<O> for LazyEarlyPruning {
    fn order(&self, instance: &Instance<O>, node: &NodeInput) -> Ordered {
        order_early(instance, node, true)
    }
}

fn terminated() -> Ordered {
    Ordered { terminate: true, candidates: vec![] }
}

fn order_early<O: Objective>(instance: &Instance<O>, node: &NodeInput, lazy: bool) -> Ordered {
    let fit: Vec<Candidate> = node
        .candidates
        .iter()
        .filter(|c| instance.weight(c.item) <= node.capacity)
        .copied()
        .collect();
    if fit.is_empty() {
        return terminated();
    }

    let mut heap = BinaryHeap::new_by_key(|c: &Candidate| OrderedFloat(c.gain));

    // With nothing inherited there is no order to exploit: refresh all the
    // gains, then run the one pruning test on the sorted list.
    if !node.inherited {
        for candidate in &fit {
            let weight = instance.weight(candidate.item) as f32;
            let gain = instance.gain(node.solution, candidate.item, node.s_value) / weight;
            heap.push(Candidate { item: candidate.item, gain });
        }
        let ordered = drain_descending(heap);
        let upper = lazy_fractional(instance, &ordered, node.capacity);
        if node.s_value + upper <= node.s_best {
            return terminated();
        }
        return Ordered { terminate: false, candidates: ordered };
    }

    let benchmark = (node.s_best - node.s_value) / node.capacity as f32;
    let mut stale = false;
    let mut gate_fired = false;
    let mut index = 0;
    while index < fit.len() {
        let candidate = fit[index];
        let weight = instance.weight(candidate.item) as f32;
        let gain = if lazy && (stale || candidate.gain < benchmark) {
            stale = true;
            candidate.gain
        } else {
            instance.gain(node.solution, candidate.item, node.s_value) / weight
        };
        heap.push(Candidate { item: candidate.item, gain });

        if index + 1 < fit.len() {
            if let Some((packed_value, last_gain)) = trial_pack(instance, &heap, node.capacity) {
                if last_gain > fit[index + 1].gain {
                    // the fractional pack of the remaining tail cannot
                    // improve on the trial pack: test the node right away
                    if node.s_value + packed_value <= node.s_best {
                        return terminated();
                    }
                    for later in &fit[index + 1..] {
                        let later_weight = instance.weight(later.item) as f32;
                        let later_gain = if lazy && (stale || later.gain < benchmark) {
                            stale = true;
                            later.gain
                        } else {
                            instance.gain(node.solution, later.item, node.s_value) / later_weight
                        };
                        heap.push(Candidate { item: later.item, gain: later_gain });
                    }
                    gate_fired = true;
                    break;
                }
            }
        }
        index += 1;
    }

    let ordered = drain_descending(heap);
    if !gate_fired {
        let upper = lazy_fractional(instance, &ordered, node.capacity);
        if node.s_value + upper <= node.s_best {
            return terminated();
        }
    }
    Ordered { terminate: false, candidates: ordered }
}

/// Greedy fractional pack of the heap contents under the given capacity.
/// Returns the packed value and the per-unit gain of the last (fractionally)
/// packed item, or `None` when every item fits integrally -- in which case
/// the pack is not saturated and its value bounds nothing yet.
fn trial_pack<O: Objective, C: Compare<Candidate> + Clone>(
    instance: &Instance<O>,
    heap: &BinaryHeap<Candidate, C>,
    capacity: usize,
) -> Option<(f32, f32)> {
    let mut remaining = capacity;
    let mut value = 0.0;
    let mut pending = heap.clone();
    while let Some(candidate) = pending.pop() {
        let weight = instance.weight(candidate.item);
        if weight <= remaining {
            remaining -= weight;
            value += candidate.gain * weight as f32;
        } else {
            value += candidate.gain * remaining as f32;
            return Some((value, candidate.gain));
        }
    }
    None
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
