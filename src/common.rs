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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation
//! levels). These are also the types your client code is likely to work with.

// ----------------------------------------------------------------------------
// --- CANDIDATE --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A candidate item at some node of the search, together with the gain the
/// ordering step attached to it.
///
/// Items are identified by their dense index in the instance (`0..nb_items`).
/// The meaning of the `gain` field depends on the ordering component that
/// produced the candidate list: the eager orderings store the absolute
/// marginal gain of the item relative to the node's solution set, while the
/// lazy and early-pruning orderings store the gain per unit of weight. Either
/// way, a child node receives a suffix of its parent's ordered candidate
/// vector and the gains it carries are the ones inherited from the parent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    /// The index of the item in the instance.
    pub item: usize,
    /// The gain attached to the item by the ordering step that produced
    /// this candidate list.
    pub gain: f32,
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A reason explaining why the search stopped before proving optimality.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Reason {
    /// It stopped because the configured cutoff criterion was met
    CutoffOccurred,
}

/// The outcome of a maximization.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// is the given solution exact (proved optimal for the given problem)?
    /// or was the search aborted by the cutoff before the proof completed ?
    pub is_exact: bool,
    /// if present, the value of the best solution: this is only ever filled
    /// in when the search ran to completion
    pub best_value: Option<f32>,
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_candidate {
    use crate::Candidate;

    #[test]
    fn candidates_are_plain_pairs() {
        let c = Candidate { item: 3, gain: 1.5 };
        assert_eq!(3, c.item);
        assert_eq!(1.5, c.gain);
    }
}
