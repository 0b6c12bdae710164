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

//! This module provides the coverage objective.

use crate::Objective;

/// The coverage objective: each item covers a set of districts and each
/// district has a value. The value of an item set is the total value of the
/// districts covered by at least one of its items. Covering a district twice
/// earns nothing, which is where the diminishing returns come from.
pub struct Coverage {
    /// The value of each district
    pub values: Vec<f32>,
    /// For each item, the indices of the districts it covers
    pub districts: Vec<Vec<usize>>,
}

impl Objective for Coverage {
    fn eval(&self, set: &[usize]) -> f32 {
        let mut covered = vec![false; self.values.len()];
        let mut total = 0.0;
        for &item in set {
            for &district in &self.districts[item] {
                if !covered[district] {
                    covered[district] = true;
                    total += self.values[district];
                }
            }
        }
        total
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use crate::*;

    fn toy() -> Coverage {
        Coverage {
            values: vec![10.0, 5.0, 5.0],
            districts: vec![vec![0, 1], vec![1, 2], vec![0, 2]],
        }
    }

    #[test]
    fn the_empty_set_covers_nothing() {
        assert_eq!(0.0, toy().eval(&[]));
    }

    #[test]
    fn each_district_counts_once() {
        let objective = toy();
        assert_eq!(15.0, objective.eval(&[0]));
        // items 0 and 1 both cover district 1
        assert_eq!(20.0, objective.eval(&[0, 1]));
        assert_eq!(20.0, objective.eval(&[0, 1, 2]));
    }

    #[test]
    fn coverage_is_monotone() {
        let objective = toy();
        assert!(objective.eval(&[1]) <= objective.eval(&[1, 2]));
    }
}
