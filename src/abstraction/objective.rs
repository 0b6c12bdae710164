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

//! This module defines the objective oracle abstraction and the problem
//! instance which binds an oracle to the item weights.

/// The objective function which the solver maximizes. It is treated as an
/// opaque, expensive, pure oracle: the solver never looks inside, it only
/// asks for the value of item sets -- and it goes to great lengths to ask
/// as rarely as possible.
///
/// # Contract
/// The correctness of the pruning rules rests on `eval` being non-negative,
/// monotone and submodular (adding an item to a larger set never yields a
/// larger marginal gain than adding it to a subset). The solver does not
/// validate any of this.
pub trait Objective {
    /// Evaluates the objective on the given set of item indices.
    fn eval(&self, set: &[usize]) -> f32;
}

/// A submodular knapsack instance: one integer weight per item of the ground
/// set, plus the objective oracle. Item identity is the dense index into the
/// weight vector; the structure is immutable for the whole duration of a
/// solve.
pub struct Instance<O> {
    weights: Vec<usize>,
    objective: O,
}

impl<O: Objective> Instance<O> {
    pub fn new(weights: Vec<usize>, objective: O) -> Self {
        Instance { weights, objective }
    }

    /// The size of the ground set.
    pub fn nb_items(&self) -> usize {
        self.weights.len()
    }

    /// The weight of the given item.
    pub fn weight(&self, item: usize) -> usize {
        self.weights[item]
    }

    /// Evaluates the objective on the given set of items (one oracle call).
    pub fn eval(&self, set: &[usize]) -> f32 {
        self.objective.eval(set)
    }

    /// The marginal gain of adding `item` to `solution`, that is
    /// `f(solution + item) - f(solution)`. The caller supplies `s_value`,
    /// the known objective value of `solution`, so this costs a single
    /// oracle call.
    pub fn gain(&self, solution: &[usize], item: usize, s_value: f32) -> f32 {
        let mut extended = Vec::with_capacity(solution.len() + 1);
        extended.extend_from_slice(solution);
        extended.push(item);
        self.objective.eval(&extended) - s_value
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_instance {
    use crate::*;

    /// A modular objective: the value of a set is the sum of the item values.
    struct Additive(Vec<f32>);
    impl Objective for Additive {
        fn eval(&self, set: &[usize]) -> f32 {
            set.iter().map(|&i| self.0[i]).sum()
        }
    }

    #[test]
    fn gain_is_the_value_increment_of_one_item() {
        let instance = Instance::new(vec![1, 2, 3], Additive(vec![1.0, 5.0, 2.0]));
        let s_value = instance.eval(&[0]);
        assert_eq!(1.0, s_value);
        assert_eq!(5.0, instance.gain(&[0], 1, s_value));
        assert_eq!(2.0, instance.gain(&[0], 2, s_value));
    }

    #[test]
    fn weights_are_indexed_by_item() {
        let instance = Instance::new(vec![4, 7], Additive(vec![0.0, 0.0]));
        assert_eq!(2, instance.nb_items());
        assert_eq!(4, instance.weight(0));
        assert_eq!(7, instance.weight(1));
    }
}
