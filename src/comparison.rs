// License: MIT
// Copyright © 2026 Flow Network Partition contributors

//! Information-theoretic comparison of two partitions, given as per-node
//! label sequences over the same canonical node order.
//!
//! All estimators use the natural logarithm over empirical label counts.

use std::collections::HashMap;

use ndarray::Array2;

use crate::Error;

/// Shannon entropy of the empirical label distribution.
///
/// An empty input returns `1.0` by convention — a deliberate sentinel for the
/// degenerate case, not a true entropy value; callers aggregating entropies
/// must treat it as "undefined, neutral placeholder".
pub fn entropy(labels: &[usize]) -> f64 {
    if labels.is_empty() {
        return 1.0;
    }

    let n = labels.len() as f64;
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for &label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    counts
        .values()
        .map(|&count| {
            let p = count as f64 / n;
            -p * p.ln()
        })
        .sum()
}

/// Variation of information between two labelings:
/// `H(x) + H(y) − 2·I(x, y)`.
///
/// Symmetric, non-negative, and zero for identical labelings.  Index `i` in
/// `x` and `y` must refer to the same underlying node.
///
/// Returns an error if the labelings have different lengths.
pub fn variation_of_information(x: &[usize], y: &[usize]) -> Result<f64, Error> {
    check_lengths(x, y)?;

    Ok(entropy(x) + entropy(y) - 2.0 * mutual_information(x, y))
}

/// Variation of information normalised to `[0, 1]`:
/// `VI(x, y) / (H(x) + H(y) − I(x, y))`.
///
/// Returns `Ok(None)` when the denominator is zero, which happens exactly
/// when both labelings are single-label — similarity is undefined there.
/// Returns an error if the labelings have different lengths.
pub fn normalised_variation_of_information(
    x: &[usize],
    y: &[usize],
) -> Result<Option<f64>, Error> {
    check_lengths(x, y)?;

    let h_x = entropy(x);
    let h_y = entropy(y);
    let mi = mutual_information(x, y);

    let denominator = h_x + h_y - mi;
    if denominator == 0.0 {
        return Ok(None);
    }
    Ok(Some((h_x + h_y - 2.0 * mi) / denominator))
}

/// Conditional entropy of `x` given `y`, normalised by `ln(N)`:
/// `(H(x) − I(x, y)) / ln(N)`.
///
/// Returns an error if the labelings have different lengths or label fewer
/// than two nodes.
pub fn normalised_conditional_entropy(x: &[usize], y: &[usize]) -> Result<f64, Error> {
    check_lengths(x, y)?;
    if x.len() <= 1 {
        return Err(Error::invalid_labeling(format!(
            "Need at least two labeled nodes, got {}.",
            x.len()
        )));
    }

    Ok((entropy(x) - mutual_information(x, y)) / (x.len() as f64).ln())
}

/// Pairwise normalised variation of information over a sequence of
/// labelings, e.g. the partitions found across a range of scales.
///
/// The result is symmetric with a zero diagonal.  Pairs with undefined
/// similarity (both labelings single-label) are `f64::NAN` — the one place
/// where the undefined-ratio sentinel is carried as a not-a-number value, so
/// the matrix stays plain numeric for plotting.
///
/// Returns an error if any two labelings have different lengths.
pub fn normalised_variation_of_information_matrix(
    labelings: &[Vec<usize>],
) -> Result<Array2<f64>, Error> {
    let mut matrix = Array2::zeros((labelings.len(), labelings.len()));
    for i in 0..labelings.len() {
        for j in (i + 1)..labelings.len() {
            let nvi = normalised_variation_of_information(&labelings[i], &labelings[j])?
                .unwrap_or(f64::NAN);
            matrix[[i, j]] = nvi;
            matrix[[j, i]] = nvi;
        }
    }
    Ok(matrix)
}

/// Mutual information between two same-length labelings, from the joint
/// label counts.
fn mutual_information(x: &[usize], y: &[usize]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }

    let n = x.len() as f64;
    let mut joint: HashMap<(usize, usize), usize> = HashMap::new();
    let mut counts_x: HashMap<usize, usize> = HashMap::new();
    let mut counts_y: HashMap<usize, usize> = HashMap::new();
    for (&a, &b) in x.iter().zip(y.iter()) {
        *joint.entry((a, b)).or_insert(0) += 1;
        *counts_x.entry(a).or_insert(0) += 1;
        *counts_y.entry(b).or_insert(0) += 1;
    }

    let mut mi = 0.0;
    for (&(a, b), &count) in &joint {
        let p_joint = count as f64 / n;
        let p_a = counts_x[&a] as f64 / n;
        let p_b = counts_y[&b] as f64 / n;
        mi += p_joint * (p_joint / (p_a * p_b)).ln();
    }
    mi
}

fn check_lengths(x: &[usize], y: &[usize]) -> Result<(), Error> {
    if x.len() != y.len() {
        return Err(Error::invalid_labeling(format!(
            "Labelings have different lengths: {} and {}.",
            x.len(),
            y.len()
        )));
    }
    Ok(())
}
