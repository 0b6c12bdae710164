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

//! This module defines the solver abstraction.

use crate::Completion;

/// This is the solver abstraction: something able to search for the subset
/// of items which maximizes the objective under the capacity constraint.
pub trait Solver {
    /// This method orders the solver to search for the optimal solution
    /// among all possibilities. The returned `Completion` is marked exact
    /// when the maximization was carried out until optimality was proved;
    /// it is inexact when the search was stopped by the cutoff criterion,
    /// in which case no value is reported.
    fn maximize(&mut self) -> Completion;
    /// The value of the objective function for the best solution visited so
    /// far, or `None` when no node was visited yet.
    fn best_value(&self) -> Option<f32>;
    /// The best set of items visited so far (in selection order), or `None`
    /// when no node was visited yet.
    fn best_solution(&self) -> Option<Vec<usize>>;
    /// The number of search nodes considered by the last maximization.
    fn explored(&self) -> usize;
}
