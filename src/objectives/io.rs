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

//! This module contains everything that is necessary to read the data tables
//! of the three objectives from the JSON files in the working directory and
//! turn them into structs usable in Rust. Chances are high that this module
//! will be of little to no interest to you.
//!
//! The weight tables store floats; they are truncated to integers on read.

use std::{fs::File, io::BufReader, path::Path};

use serde::de::DeserializeOwned;

use super::{Coverage, FacilityLocation, Influence};

/// This enumeration simply groups the kind of errors that might occur when
/// loading the data tables of an objective. There can be io errors (file
/// unavailable ?) or format errors (the file does not hold the table the
/// loader expected).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The file did not parse as the expected JSON table
    #[error("malformed data table {0}")]
    Json(#[from] serde_json::Error),
}

fn read_table<T: DeserializeOwned, P: AsRef<Path>>(fname: P) -> Result<T, Error> {
    let file = File::open(fname)?;
    let file = BufReader::new(file);
    Ok(serde_json::from_reader(file)?)
}

fn truncate_weights(raw: &[f32]) -> Vec<usize> {
    raw.iter().map(|&w| w as usize).collect()
}

/// Loads the item weights and the coverage tables
/// (`COV_Groundsetvalues.json`, `COV_Items.json`, `COV_Itemsweights.json`).
pub fn read_coverage() -> Result<(Vec<usize>, Coverage), Error> {
    let values: Vec<f32> = read_table("COV_Groundsetvalues.json")?;
    let districts: Vec<Vec<usize>> = read_table("COV_Items.json")?;
    let weights: Vec<f32> = read_table("COV_Itemsweights.json")?;
    Ok((truncate_weights(&weights), Coverage { values, districts }))
}

/// Loads the item weights and the facility location benefit matrix
/// (`LOC_benefits.json`, `LOC_weights.json`).
pub fn read_facility_location() -> Result<(Vec<usize>, FacilityLocation), Error> {
    let benefits: Vec<Vec<f32>> = read_table("LOC_benefits.json")?;
    let weights: Vec<f32> = read_table("LOC_weights.json")?;
    Ok((truncate_weights(&weights), FacilityLocation { benefits }))
}

/// Loads the item weights and the influence tables
/// (`INF_connections.json`, `INF_weights.json`, `INF_probability.json`).
pub fn read_influence() -> Result<(Vec<usize>, Influence), Error> {
    let connections: Vec<Vec<f32>> = read_table("INF_connections.json")?;
    let weights: Vec<f32> = read_table("INF_weights.json")?;
    let probability: Vec<f32> = read_table("INF_probability.json")?;

    let nb_targets = connections.first().map_or(0, |row| row.len());
    let connections = connections
        .iter()
        .map(|row| row.iter().map(|&c| c == 1.0).collect())
        .collect();
    Ok((
        truncate_weights(&weights),
        Influence { probability, connections, nb_targets },
    ))
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use super::truncate_weights;

    #[test]
    fn weights_are_truncated_to_integers() {
        assert_eq!(vec![3, 5, 2], truncate_weights(&[3.0, 5.9, 2.1]));
    }
}
