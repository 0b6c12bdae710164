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

//! This module defines the three component seams of the branch and bound
//! driver. Every solver variant is an assembly of one `Orderer`, one
//! `Bounder` and one `Reducer` over the same recursive skeleton.

use crate::{Candidate, Instance, Objective};

/// Everything an ordering step may want to know about the node it is
/// invoked at. The candidate slice is a suffix of the parent node's ordered
/// candidate vector; it is never mutated after its creation in the parent.
pub struct NodeInput<'a> {
    /// The items selected along the current search path, in selection order.
    pub solution: &'a [usize],
    /// The candidate items still available at this node, disjoint from the
    /// solution. The `gain` fields hold whatever the parent's ordering step
    /// attached to them.
    pub candidates: &'a [Candidate],
    /// The objective value of `solution`.
    pub s_value: f32,
    /// The value of the best solution found anywhere in the search so far.
    pub s_best: f32,
    /// The capacity remaining once the solution weight is accounted for.
    pub capacity: usize,
    /// Whether the gain fields of `candidates` were produced by a parent
    /// node's ordering step. This is false at the root of the search, where
    /// the gains are meaningless and every ordering must refresh from the
    /// oracle.
    pub inherited: bool,
}

/// The outcome of an ordering step.
pub struct Ordered {
    /// When true, the ordering step established that expanding this node
    /// cannot improve on the incumbent (or that no candidate fits) and the
    /// driver must return right away.
    pub terminate: bool,
    /// The filtered candidates, sorted by decreasing relative gain. Every
    /// item in there fits the remaining capacity.
    pub candidates: Vec<Candidate>,
}

/// The outcome of a bounding step.
pub struct Bound {
    /// An upper bound on the objective increment attainable by packing
    /// candidates into the remaining capacity.
    pub upper: f32,
    /// The items the greedy fractional pack included integrally (the
    /// fractional tail item is not part of it). Only the bounders feeding a
    /// candidate reduction step report it.
    pub packed: Option<Vec<usize>>,
}

/// The ordering step of a solver variant: filter out the candidates that
/// cannot fit, attach a gain to each survivor and sort them by decreasing
/// relative gain. Variants differ in how much of this work goes back to the
/// oracle and in whether a pruning test is fused into the traversal.
pub trait Orderer<O: Objective> {
    fn order(&self, instance: &Instance<O>, node: &NodeInput) -> Ordered;
}

/// The bounding step of a solver variant: given the ordered candidates of a
/// node and the remaining capacity, compute an upper bound on the value that
/// can still be gained. The driver prunes the node whenever
/// `s_value + upper <= s_best`.
pub trait Bounder<O: Objective> {
    fn bound(&self, instance: &Instance<O>, candidates: &[Candidate], capacity: usize) -> Bound;
}

/// The candidate reduction step of a solver variant: remove from the ordered
/// candidates the items that provably cannot be part of an improving
/// solution. `packed` is the integrally packed prefix reported by the
/// bounding step, when there is one.
pub trait Reducer<O: Objective> {
    #[allow(clippy::too_many_arguments)]
    fn reduce(
        &self,
        instance: &Instance<O>,
        candidates: &mut Vec<Candidate>,
        s_value: f32,
        s_best: f32,
        capacity: usize,
        packed: Option<&[usize]>,
    );
}
