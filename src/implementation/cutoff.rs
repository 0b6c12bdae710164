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

//! This module provides the implementation of the cutoff criteria that can
//! be used to bound the time spent searching.

use std::time::{Duration, Instant};

use crate::Cutoff;

/// _This is the default cutoff._ It imposes that the search goes on until
/// optimality is proved: the solver never stops early.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCutoff;
impl Cutoff for NoCutoff {
    fn must_stop(&self) -> bool {
        false
    }
}

/// This cutoff stops the search as soon as the wall clock passes a fixed
/// timestamp. The timestamp is set once, before the solve starts; every
/// search node compares the current time against it before doing any work.
///
/// # Example
/// ```
/// # use std::time::Duration;
/// # use subknap::*;
/// // allow the solver to run for one hour
/// let cutoff = Deadline::after(Duration::from_secs(3600));
/// assert!(!cutoff.must_stop());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Deadline {
    instant: Instant,
}
impl Deadline {
    /// A deadline at the given absolute timestamp. The timestamp may already
    /// have passed, in which case the search aborts at its very first node.
    pub fn at(instant: Instant) -> Self {
        Deadline { instant }
    }
    /// A deadline `budget` from now.
    pub fn after(budget: Duration) -> Self {
        Deadline { instant: Instant::now() + budget }
    }
}
impl Cutoff for Deadline {
    fn must_stop(&self) -> bool {
        Instant::now() >= self.instant
    }
}
