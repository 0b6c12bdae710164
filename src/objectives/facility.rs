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

//! This module provides the facility location objective.

use crate::Objective;

/// The facility location objective: opening an item (facility) brings each
/// client the benefit listed in the item's row, and every client is served
/// by the best open facility only. The value of an item set is the sum over
/// clients of the best available benefit; it is zero for the empty set.
pub struct FacilityLocation {
    /// For each item, the benefit it brings to each client
    pub benefits: Vec<Vec<f32>>,
}

impl Objective for FacilityLocation {
    fn eval(&self, set: &[usize]) -> f32 {
        if set.is_empty() {
            return 0.0;
        }
        let nb_clients = self.benefits[0].len();
        let mut best = vec![f32::MIN; nb_clients];
        for &item in set {
            for (client, benefit) in self.benefits[item].iter().enumerate() {
                best[client] = best[client].max(*benefit);
            }
        }
        best.iter().sum()
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use crate::*;

    fn toy() -> FacilityLocation {
        FacilityLocation { benefits: vec![vec![1.0, 2.0], vec![4.0, 0.5]] }
    }

    #[test]
    fn the_empty_set_serves_nobody() {
        assert_eq!(0.0, toy().eval(&[]));
    }

    #[test]
    fn each_client_takes_the_best_open_facility() {
        let objective = toy();
        assert_eq!(3.0, objective.eval(&[0]));
        assert_eq!(4.5, objective.eval(&[1]));
        // client 0 served by item 1, client 1 by item 0
        assert_eq!(6.0, objective.eval(&[0, 1]));
    }
}
