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

//! This module provides the influence objective.

use crate::Objective;

/// The influence objective: item `v` reaches target `j` whenever they are
/// connected, independently with probability `p[v]`. The value of an item
/// set is the expected number of targets reached by at least one selected
/// item: per target, one minus the probability that every connected selected
/// item fails.
pub struct Influence {
    /// The activation probability of each item
    pub probability: Vec<f32>,
    /// For each item, which targets it is connected to
    pub connections: Vec<Vec<bool>>,
    /// The number of targets
    pub nb_targets: usize,
}

impl Objective for Influence {
    fn eval(&self, set: &[usize]) -> f32 {
        if set.is_empty() {
            return 0.0;
        }
        let mut missed = vec![1.0_f32; self.nb_targets];
        for &item in set {
            for (target, failure) in missed.iter_mut().enumerate() {
                if self.connections[item][target] {
                    *failure *= 1.0 - self.probability[item];
                }
            }
        }
        missed.iter().map(|&m| if m < 1.0 { 1.0 - m } else { 0.0 }).sum()
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
