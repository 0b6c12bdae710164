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

//! This module provides the nine predefined solver variants as assemblies of
//! one ordering, one bound and one reduction over the shared driver. All of
//! them return the same optimal value on any instance they are given enough
//! time for; they only differ in how many nodes and oracle calls they spend
//! getting there.

use crate::{
    BranchAndBound, CandidateReduction, Completion, Cutoff, DynamicOrdering, EarlyPruning,
    FractionalBound, FractionalBoundWithPrefix, GreedyLazyOrdering, Instance,
    LazyCandidateReduction, LazyEarlyPruning, LazyFractionalBound, LazyFractionalBoundWithPrefix,
    LazyOrdering, NoBound, NoReduction, Objective, Solver,
};

/// Dynamic candidate ordering with the eager fractional bound.
pub type DcoSubSolver<'a, O> =
    BranchAndBound<'a, O, DynamicOrdering, FractionalBound, NoReduction>;
/// Dynamic candidate ordering with candidate reduction.
pub type AcrSolver<'a, O> =
    BranchAndBound<'a, O, DynamicOrdering, FractionalBoundWithPrefix, CandidateReduction>;
/// Lazy evaluations with the average decision rule.
pub type LeSolver<'a, O> = BranchAndBound<'a, O, LazyOrdering, LazyFractionalBound, NoReduction>;
/// Lazy evaluations with the average decision rule and candidate reduction.
pub type LecrSolver<'a, O> =
    BranchAndBound<'a, O, LazyOrdering, LazyFractionalBoundWithPrefix, LazyCandidateReduction>;
/// Lazy evaluations with the greedy decision rule.
pub type LegSolver<'a, O> =
    BranchAndBound<'a, O, GreedyLazyOrdering, LazyFractionalBound, NoReduction>;
/// Early pruning.
pub type EpSolver<'a, O> = BranchAndBound<'a, O, EarlyPruning, NoBound, NoReduction>;
/// Early pruning with candidate reduction.
pub type EpcrSolver<'a, O> =
    BranchAndBound<'a, O, EarlyPruning, NoBound, LazyCandidateReduction>;
/// Lazy evaluations combined with early pruning.
pub type LeepSolver<'a, O> = BranchAndBound<'a, O, LazyEarlyPruning, NoBound, NoReduction>;
/// Lazy evaluations combined with early pruning and candidate reduction.
pub type LeepcrSolver<'a, O> =
    BranchAndBound<'a, O, LazyEarlyPruning, NoBound, LazyCandidateReduction>;

/// The nine solver variants. The discriminants follow the selector values
/// accepted by the command line front end.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Variant {
    /// Dynamic candidate ordering + fractional bound
    DcoSub,
    /// Dynamic candidate ordering + candidate reduction
    Acr,
    /// Lazy evaluations, average decision rule
    Le,
    /// Early pruning
    Ep,
    /// Lazy evaluations + candidate reduction
    Lecr,
    /// Early pruning + candidate reduction
    Epcr,
    /// Lazy evaluations + early pruning
    Leep,
    /// Lazy evaluations + early pruning + candidate reduction
    Leepcr,
    /// Lazy evaluations, greedy decision rule
    Leg,
}

impl Variant {
    /// All nine variants, in selector order.
    pub const ALL: [Variant; 9] = [
        Variant::DcoSub,
        Variant::Acr,
        Variant::Le,
        Variant::Ep,
        Variant::Lecr,
        Variant::Epcr,
        Variant::Leep,
        Variant::Leepcr,
        Variant::Leg,
    ];

    /// Maps a command line selector (0..=8) onto a variant.
    pub fn from_selector(selector: usize) -> Option<Variant> {
        Variant::ALL.get(selector).copied()
    }
}

/// Builds the requested variant for the given instance and maximizes it.
/// Returns the completion along with the number of considered nodes.
pub fn solve<O: Objective>(
    variant: Variant,
    instance: &Instance<O>,
    capacity: usize,
    cutoff: &dyn Cutoff,
) -> (Completion, usize) {
    fn run<S: Solver>(mut solver: S) -> (Completion, usize) {
        let completion = solver.maximize();
        let explored = solver.explored();
        (completion, explored)
    }

    match variant {
        Variant::DcoSub => run(BranchAndBound::new(
            instance, capacity, DynamicOrdering, FractionalBound, NoReduction, cutoff,
        )),
        Variant::Acr => run(BranchAndBound::new(
            instance,
            capacity,
            DynamicOrdering,
            FractionalBoundWithPrefix,
            CandidateReduction,
            cutoff,
        )),
        Variant::Le => run(BranchAndBound::new(
            instance, capacity, LazyOrdering, LazyFractionalBound, NoReduction, cutoff,
        )),
        Variant::Ep => run(BranchAndBound::new(
            instance, capacity, EarlyPruning, NoBound, NoReduction, cutoff,
        )),
        Variant::Lecr => run(BranchAndBound::new(
            instance,
            capacity,
            LazyOrdering,
            LazyFractionalBoundWithPrefix,
            LazyCandidateReduction,
            cutoff,
        )),
        Variant::Epcr => run(BranchAndBound::new(
            instance, capacity, EarlyPruning, NoBound, LazyCandidateReduction, cutoff,
        )),
        Variant::Leep => run(BranchAndBound::new(
            instance, capacity, LazyEarlyPruning, NoBound, NoReduction, cutoff,
        )),
        Variant::Leepcr => run(BranchAndBound::new(
            instance, capacity, LazyEarlyPruning, NoBound, LazyCandidateReduction, cutoff,
        )),
        Variant::Leg => run(BranchAndBound::new(
            instance, capacity, GreedyLazyOrdering, LazyFractionalBound, NoReduction, cutoff,
        )),
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn selectors_map_onto_the_documented_variants() {
        assert_eq!(Some(Variant::DcoSub), Variant::from_selector(0));
        assert_eq!(Some(Variant::Acr), Variant::from_selector(1));
        assert_eq!(Some(Variant::Le), Variant::from_selector(2));
        assert_eq!(Some(Variant::Ep), Variant::from_selector(3));
        assert_eq!(Some(Variant::Lecr), Variant::from_selector(4));
        assert_eq!(Some(Variant::Epcr), Variant::from_selector(5));
        assert_eq!(Some(Variant::Leep), Variant::from_selector(6));
        assert_eq!(Some(Variant::Leepcr), Variant::from_selector(7));
        assert_eq!(Some(Variant::Leg), Variant::from_selector(8));
        assert_eq!(None, Variant::from_selector(9));
    }

    #[test]
    fn every_variant_solves_the_facility_location_toy() {
        let instance = Instance::new(
            vec![3, 5],
            FacilityLocation { benefits: vec![vec![1.0, 2.0], vec![4.0, 0.5]] },
        );
        for variant in Variant::ALL {
            let (completion, explored) = solve(variant, &instance, 5, &NoCutoff);
            assert!(completion.is_exact, "{variant:?}");
            assert_eq!(Some(4.5), completion.best_value, "{variant:?}");
            assert!(explored >= 1, "{variant:?}");
        }
    }
}
