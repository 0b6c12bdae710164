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

//! This module provides the recursive branch and bound driver shared by all
//! solver variants. A node of the search owns a solution set (the items
//! picked along the path from the root) and an ordered candidate set; its
//! children each force one candidate into the solution and recurse on the
//! strict suffix of candidates behind it, which enumerates every subset of
//! the candidate set exactly once.

use crate::{
    Bound, Bounder, Candidate, Completion, Cutoff, Instance, NodeInput, Objective, Ordered,
    Orderer, Reason, Reducer, Solver,
};

/// The depth-first branch and bound driver. All nine solver variants are
/// instances of this one skeleton; they only differ in the ordering,
/// bounding and reduction components they plug into it.
///
/// At every node the driver checks the cutoff, evaluates the objective on
/// the current solution set, updates the incumbent, and stops if no
/// candidate is left or no capacity remains. Otherwise the ordering step
/// filters and sorts the candidates (possibly deciding the node is hopeless
/// by itself), the bounding step prunes the node when even the fractional
/// relaxation cannot beat the incumbent, and the reduction step drops the
/// candidates that provably lead nowhere before the children are expanded.
pub struct BranchAndBound<'a, O, ORD, BND, RED>
where
    O: Objective,
    ORD: Orderer<O>,
    BND: Bounder<O>,
    RED: Reducer<O>,
{
    /// The instance being maximized
    instance: &'a Instance<O>,
    /// The knapsack capacity
    capacity: usize,
    /// The ordering step applied to the candidates of every node
    orderer: ORD,
    /// The bound used to prune nodes that cannot beat the incumbent
    bounder: BND,
    /// The candidate reduction applied before expanding the children
    reducer: RED,
    /// A cutoff criterion meant to decide when to give up on the proof
    cutoff: &'a dyn Cutoff,
    /// This is a counter that tracks the number of nodes that have
    /// effectively been considered during the search
    explored: usize,
    /// The value of the best solution visited so far
    best_value: Option<f32>,
    /// The items of the best solution visited so far, in selection order
    best_solution: Vec<usize>,
}

impl<'a, O, ORD, BND, RED> BranchAndBound<'a, O, ORD, BND, RED>
where
    O: Objective,
    ORD: Orderer<O>,
    BND: Bounder<O>,
    RED: Reducer<O>,
{
    pub fn new(
        instance: &'a Instance<O>,
        capacity: usize,
        orderer: ORD,
        bounder: BND,
        reducer: RED,
        cutoff: &'a dyn Cutoff,
    ) -> Self {
        BranchAndBound {
            instance,
            capacity,
            orderer,
            bounder,
            reducer,
            cutoff,
            explored: 0,
            best_value: None,
            best_solution: vec![],
        }
    }

    fn search(
        &mut self,
        solution: &mut Vec<usize>,
        candidates: &[Candidate],
        s_best: f32,
        s_weight: usize,
        depth: usize,
    ) -> Result<f32, Reason> {
        self.explored += 1;
        if self.cutoff.must_stop() {
            return Err(Reason::CutoffOccurred);
        }

        let s_value = self.instance.eval(solution);
        if self.best_value.map_or(true, |best| s_value > best) {
            self.best_value = Some(s_value);
            self.best_solution = solution.clone();
        }
        let mut s_best = s_best.max(s_value);

        if candidates.is_empty() {
            return Ok(s_best);
        }
        let capacity = self.capacity - s_weight;
        if capacity == 0 {
            return Ok(s_best);
        }

        let node = NodeInput {
            solution,
            candidates,
            s_value,
            s_best,
            capacity,
            inherited: depth > 0,
        };
        let Ordered { terminate, candidates: mut remaining } =
            self.orderer.order(self.instance, &node);
        if terminate {
            return Ok(s_best);
        }

        let Bound { upper, packed } = self.bounder.bound(self.instance, &remaining, capacity);
        if s_value + upper <= s_best {
            return Ok(s_best);
        }

        self.reducer.reduce(
            self.instance,
            &mut remaining,
            s_value,
            s_best,
            capacity,
            packed.as_deref(),
        );

        for position in 0..remaining.len() {
            let item = remaining[position].item;
            solution.push(item);
            let below = self.search(
                solution,
                &remaining[position + 1..],
                s_best,
                s_weight + self.instance.weight(item),
                depth + 1,
            );
            solution.pop();
            s_best = below?;
        }
        Ok(s_best)
    }
}

impl<O, ORD, BND, RED> Solver for BranchAndBound<'_, O, ORD, BND, RED>
where
    O: Objective,
    ORD: Orderer<O>,
    BND: Bounder<O>,
    RED: Reducer<O>,
{
    fn maximize(&mut self) -> Completion {
        self.explored = 0;
        self.best_value = None;
        self.best_solution.clear();

        let root: Vec<Candidate> = (0..self.instance.nb_items())
            .map(|item| Candidate { item, gain: 0.0 })
            .collect();
        let mut solution = vec![];
        match self.search(&mut solution, &root, 0.0, 0, 0) {
            Ok(value) => Completion { is_exact: true, best_value: Some(value) },
            Err(Reason::CutoffOccurred) => Completion { is_exact: false, best_value: None },
        }
    }

    fn best_value(&self) -> Option<f32> {
        self.best_value
    }

    fn best_solution(&self) -> Option<Vec<usize>> {
        self.best_value.map(|_| self.best_solution.clone())
    }

    fn explored(&self) -> usize {
        self.explored
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::*;

    /// A modular objective: the value of a set is the sum of the item values.
    struct Additive(Vec<f32>);
    impl Objective for Additive {
        fn eval(&self, set: &[usize]) -> f32 {
            set.iter().map(|&i| self.0[i]).sum()
        }
    }

    #[test]
    fn an_empty_instance_is_solved_at_the_root() {
        let instance = Instance::new(vec![], Additive(vec![]));
        let mut solver = BranchAndBound::new(
            &instance,
            10,
            DynamicOrdering,
            FractionalBound,
            NoReduction,
            &NoCutoff,
        );
        let outcome = solver.maximize();
        assert!(outcome.is_exact);
        assert_eq!(Some(0.0), outcome.best_value);
        assert_eq!(1, solver.explored());
    }

    #[test]
    fn the_driver_finds_the_optimal_subset() {
        // weights 3 and 5 under capacity 5: only one item fits, the second
        // one is worth more
        let instance = Instance::new(vec![3, 5], Additive(vec![3.0, 4.5]));
        let mut solver = BranchAndBound::new(
            &instance,
            5,
            DynamicOrdering,
            FractionalBound,
            NoReduction,
            &NoCutoff,
        );
        let outcome = solver.maximize();
        assert_eq!(Some(4.5), outcome.best_value);
        assert_eq!(Some(4.5), solver.best_value());
        assert_eq!(Some(vec![1]), solver.best_solution());
    }

    #[test]
    fn a_zero_capacity_keeps_the_sack_empty() {
        let instance = Instance::new(vec![1, 1], Additive(vec![1.0, 2.0]));
        let mut solver = BranchAndBound::new(
            &instance,
            0,
            DynamicOrdering,
            FractionalBound,
            NoReduction,
            &NoCutoff,
        );
        let outcome = solver.maximize();
        assert_eq!(Some(0.0), outcome.best_value);
        assert_eq!(Some(vec![]), solver.best_solution());
    }

    #[test]
    fn an_expired_deadline_aborts_after_one_node() {
        let instance = Instance::new(vec![1, 1, 1], Additive(vec![1.0, 2.0, 3.0]));
        let cutoff = Deadline::at(Instant::now());
        let mut solver = BranchAndBound::new(
            &instance,
            3,
            DynamicOrdering,
            FractionalBound,
            NoReduction,
            &cutoff,
        );
        let outcome = solver.maximize();
        assert!(!outcome.is_exact);
        assert_eq!(None, outcome.best_value);
        assert_eq!(1, solver.explored());
    }
}
