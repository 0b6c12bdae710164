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

//! This module provides the lazy orderings. They exploit submodularity: as
//! the solution grows, the per-unit gain of any other item can only shrink,
//! so a gain computed at the parent node is a valid upper bound on the gain
//! at the child. Whenever that inherited bound is already good enough to
//! decide, the oracle call is skipped.
//!
//! Both orderings attach per-unit gains (gain divided by weight) to the
//! candidates they keep; this is the value source the lazy fractional bounds
//! read.

use crate::{Candidate, Instance, NodeInput, Objective, Ordered, Orderer};

/// Lazy evaluations with the average decision rule.
///
/// With no inherited gains (at the root of the search) every candidate gain
/// is refreshed through the oracle. Otherwise the rule computes the
/// benchmark `R = (s_best - s_value) / capacity` -- the per-unit gain that,
/// if achievable uniformly over the remaining capacity, would just close the
/// gap to the incumbent -- and walks the candidates in inherited order.
/// Gains are refreshed as long as the inherited value clears the benchmark;
/// from the first inherited gain below it onwards, every remaining candidate
/// keeps its inherited gain: the inherited order is sorted, so none of them
/// can clear the benchmark either, and refreshing them would be wasted
/// oracle calls.
#[derive(Debug, Default, Copy, Clone)]
pub struct LazyOrdering;
impl<O: Objective> Orderer<O> for LazyOrdering {
    fn order(&self, instance: &Instance<O>, node: &NodeInput) -> Ordered {
        let mut kept = Vec::with_capacity(node.candidates.len());
        if !node.inherited {
            for candidate in node.candidates {
                let weight = instance.weight(candidate.item);
                if weight > node.capacity {
                    continue;
                }
                let gain =
                    instance.gain(node.solution, candidate.item, node.s_value) / weight as f32;
                kept.push(Candidate { item: candidate.item, gain });
            }
        } else {
            let benchmark = (node.s_best - node.s_value) / node.capacity as f32;
            let mut stale = false;
            for candidate in node.candidates {
                let weight = instance.weight(candidate.item);
                if weight > node.capacity {
                    continue;
                }
                let gain = if !stale && candidate.gain >= benchmark {
                    instance.gain(node.solution, candidate.item, node.s_value) / weight as f32
                } else {
                    stale = true;
                    candidate.gain
                };
                kept.push(Candidate { item: candidate.item, gain });
            }
        }
        kept.sort_unstable_by(|a, b| b.gain.total_cmp(&a.gain));
        Ordered { terminate: false, candidates: kept }
    }
}

/// Lazy evaluations with the greedy decision rule.
///
/// Same shape as the average rule, but the comparison target is the minimum
/// per-unit gain refreshed so far at this node rather than a benchmark
/// derived from the incumbent: the walk keeps refreshing while the inherited
/// gain is at least that minimum (the first candidate always refreshes), and
/// inherits everything from the first candidate below it. Since inherited
/// gains only shrink when refreshed, such a candidate would sort behind all
/// the refreshed ones no matter what the oracle answered.
#[derive(Debug, Default, Copy, Clone)]
pub struct GreedyLazyOrdering;
impl<O: Objective> Orderer<O> for GreedyLazyOrdering {
    fn order(&self, instance: &Instance<O>, node: &NodeInput) -> Ordered {
        let mut kept = Vec::with_capacity(node.candidates.len());
        if !node.inherited {
            for candidate in node.candidates {
                let weight = instance.weight(candidate.item);
                if weight > node.capacity {
                    continue;
                }
                let gain =
                    instance.gain(node.solution, candidate.item, node.s_value) / weight as f32;
                kept.push(Candidate { item: candidate.item, gain });
            }
        } else {
            let mut freshest: Option<f32> = None;
            let mut stale = false;
            for candidate in node.candidates {
                let weight = instance.weight(candidate.item);
                if weight > node.capacity {
                    continue;
                }
                let refresh = !stale && freshest.map_or(true, |m| candidate.gain >= m);
                let gain = if refresh {
                    let fresh =
                        instance.gain(node.solution, candidate.item, node.s_value) / weight as f32;
                    freshest = Some(freshest.map_or(fresh, |m| m.min(fresh)));
                    fresh
                } else {
                    stale = true;
                    candidate.gain
                };
                kept.push(Candidate { item: candidate.item, gain });
            }
        }
        kept.sort_unstable_by(|a, b| b.gain.total_cmp(&a.gain));
        Ordered { terminate: false, candidates: kept }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
