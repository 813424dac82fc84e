// License: MIT
// Copyright © 2026 Flow Network Partition contributors

//! A sparse view of the adjacency matrix of a [`FlowGraph`].

use ndarray::Array2;

use crate::{Flow, FlowGraph, Node};

/// A sparse `N × N` adjacency matrix in canonical node order.
///
/// Entries are stored as `(row, column, weight)` triplets; absent entries are
/// zero.  Diagonal entries are self-loop weights.  All operations work on the
/// stored entries only, so large graphs with few flows never pay for an
/// `N × N` materialization — [`to_dense`][Adjacency::to_dense] is the single,
/// explicit exception.
#[derive(Clone, Debug, PartialEq)]
pub struct Adjacency {
    dim: usize,
    entries: Vec<(usize, usize, f64)>,
}

impl<N, E> FlowGraph<N, E>
where
    N: Node,
    E: Flow<Key = N::Key>,
{
    /// Returns the sparse adjacency matrix of this graph, in canonical node
    /// order.
    pub fn adjacency(&self) -> Adjacency {
        Adjacency {
            dim: self.graph.node_count(),
            entries: self
                .graph
                .raw_edges()
                .iter()
                .map(|e| (e.source().index(), e.target().index(), e.weight))
                .collect(),
        }
    }
}

impl Adjacency {
    /// Returns the number of rows (and columns) of the matrix.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns an iterator over the stored `(row, column, weight)` entries.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the sum of all entries.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, _, w)| w).sum()
    }

    /// Returns the sum of the diagonal entries, i.e. the total self-loop
    /// weight.
    pub fn trace(&self) -> f64 {
        self.entries
            .iter()
            .filter(|(r, c, _)| r == c)
            .map(|(_, _, w)| w)
            .sum()
    }

    /// Returns the row sums, i.e. the out-weight of every node.
    pub fn row_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.dim];
        for &(r, _, w) in &self.entries {
            sums[r] += w;
        }
        sums
    }

    /// Returns the column sums, i.e. the in-weight of every node.
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.dim];
        for &(_, c, w) in &self.entries {
            sums[c] += w;
        }
        sums
    }

    /// Returns a copy of the matrix with the diagonal zeroed.  Idempotent.
    pub fn without_self_loops(&self) -> Self {
        Self {
            dim: self.dim,
            entries: self
                .entries
                .iter()
                .filter(|(r, c, _)| r != c)
                .copied()
                .collect(),
        }
    }

    /// Returns the binarised matrix: strictly positive entries become `1`,
    /// everything else becomes zero.  Shape and sparsity are preserved, and
    /// the operation is idempotent.
    pub fn to_binary(&self) -> Self {
        Self {
            dim: self.dim,
            entries: self
                .entries
                .iter()
                .filter(|(_, _, w)| *w > 0.0)
                .map(|&(r, c, _)| (r, c, 1.0))
                .collect(),
        }
    }

    /// Materializes the matrix densely.
    ///
    /// This is the only operation that allocates `N × N` storage; callers
    /// analysing large sparse graphs should prefer the sparse accessors.
    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense = Array2::zeros((self.dim, self.dim));
        for &(r, c, w) in &self.entries {
            dense[[r, c]] += w;
        }
        dense
    }
}
