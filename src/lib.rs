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

//! # SUBKNAP
//! Subknap is an exact solver for submodular knapsack problems: given a set
//! of weighted items and a non-negative monotone submodular objective `f`,
//! it finds a subset whose total weight fits a given capacity and whose
//! objective value is maximal.
//!
//! The solver is a depth-first branch and bound. Submodularity (diminishing
//! returns) makes a greedy fractional knapsack over the current marginal
//! gains a valid upper bound on anything reachable below a search node, which
//! allows aggressive pruning. Because evaluating `f` is by far the dominant
//! cost, the interesting knobs are all about how candidate items get
//! ordered, re-evaluated and discarded. Those knobs are exposed as three
//! small traits:
//!
//! * an [`Orderer`] filters and sorts the candidate items of a node (and may
//!   decide the node is not worth expanding at all),
//! * a [`Bounder`] computes a fractional upper bound on the value that can
//!   still be added to the sack,
//! * a [`Reducer`] eliminates candidates that provably cannot lead to an
//!   improving solution.
//!
//! The nine solver variants from the literature (dynamic candidate ordering,
//! candidate reduction, lazy evaluations with the average or greedy decision
//! rule, early pruning, and their combinations) are assemblies of these three
//! components over one shared recursive driver ([`BranchAndBound`]). The
//! [`Variant`] enumeration builds any of them for you.
//!
//! ## Quick Example
//! The following solves a tiny facility location instance to optimality:
//! two items with weights 3 and 5, a capacity of 5, and per-client benefit
//! rows. Only one of the two items fits; taking the second one is optimal.
//!
//! ```
//! use subknap::*;
//!
//! let objective = FacilityLocation {
//!     benefits: vec![vec![1.0, 2.0], vec![4.0, 0.5]],
//! };
//! let instance = Instance::new(vec![3, 5], objective);
//!
//! let mut solver = BranchAndBound::new(
//!     &instance,
//!     5,
//!     DynamicOrdering,
//!     FractionalBound,
//!     NoReduction,
//!     &NoCutoff,
//! );
//! let outcome = solver.maximize();
//!
//! assert!(outcome.is_exact);
//! assert_eq!(Some(4.5), outcome.best_value);
//! assert_eq!(Some(vec![1]), solver.best_solution());
//! ```
//!
//! Objectives are anything implementing the [`Objective`] oracle trait; the
//! coverage, facility location and influence objectives used by the command
//! line front end live in the [`objectives`] module together with their data
//! loaders.

mod common;
mod abstraction;
mod implementation;
pub mod objectives;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
pub use objectives::{Coverage, FacilityLocation, Influence};
