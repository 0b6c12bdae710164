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

//! This module provides the ordering strategies of the solver variants:
//! the eager dynamic candidate ordering which refreshes every gain through
//! the oracle, the lazy orderings which recycle the gains inherited from the
//! parent node whenever they can, and the early pruning orderings which fuse
//! a pruning test into the traversal itself.

mod dynamic;
mod lazy;
mod early;

pub use dynamic::*;
pub use lazy::*;
pub use early::*;

use binary_heap_plus::BinaryHeap;
use compare::Compare;

use crate::Candidate;

/// Empties a max-heap of candidates into a vector sorted by decreasing key.
pub(crate) fn drain_descending<C: Compare<Candidate>>(
    mut heap: BinaryHeap<Candidate, C>,
) -> Vec<Candidate> {
    let mut ordered = Vec::with_capacity(heap.len());
    while let Some(candidate) = heap.pop() {
        ordered.push(candidate);
    }
    ordered
}
