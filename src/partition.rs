// License: MIT
// Copyright © 2026 Flow Network Partition contributors

//! A labeling of the nodes of a graph into communities, and its indicator
//! matrix form.

use std::collections::{BTreeMap, BTreeSet};

use ndarray::Array2;

use crate::{Error, Flow, FlowGraph, Node};

/// A partition of nodes into communities.
///
/// `labels[i]` is the community label of the node at position `i` in the
/// canonical node order of the graph the partition is scored against.
/// Labels need not be contiguous: any label in `[0, max(labels)]` without
/// members is legal and shows up as an all-zero indicator column.
#[derive(Clone, Debug, PartialEq)]
pub struct Partition {
    labels: Vec<usize>,
    community_count: usize,
}

impl Partition {
    /// Creates a new [`Partition`] from the given per-node community labels.
    ///
    /// Returns an error if the label vector is empty.
    pub fn try_new(labels: Vec<usize>) -> Result<Self, Error> {
        let Some(max_label) = labels.iter().max() else {
            return Err(Error::invalid_partition("Partition has no labels."));
        };

        Ok(Self {
            community_count: max_label + 1,
            labels,
        })
    }

    /// Returns the community label of every node, in canonical order.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Returns the number of labeled nodes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns whether the partition labels no nodes.  Always `false` for a
    /// successfully constructed partition.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the number of communities, i.e. `max(labels) + 1`.
    pub fn community_count(&self) -> usize {
        self.community_count
    }

    /// Returns the number of members of every community index.
    pub fn member_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.community_count];
        for &label in &self.labels {
            counts[label] += 1;
        }
        counts
    }

    /// Computes the `N × C` indicator matrix of the partition.
    pub fn indicator_matrix(&self) -> IndicatorMatrix {
        let mut matrix = Array2::zeros((self.labels.len(), self.community_count));
        for (position, &label) in self.labels.iter().enumerate() {
            matrix[[position, label]] = 1;
        }
        IndicatorMatrix { matrix }
    }
}

/// The binary node-by-community membership matrix of a [`Partition`].
///
/// Every row has exactly one `1`, in the column of the node's community.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorMatrix {
    matrix: Array2<u8>,
}

impl IndicatorMatrix {
    /// Returns the `(nodes, communities)` shape of the matrix.
    pub fn shape(&self) -> (usize, usize) {
        self.matrix.dim()
    }

    /// Returns the column holding the `1` of the given row.
    pub fn row_argmax(&self, row: usize) -> usize {
        self.matrix
            .row(row)
            .iter()
            .enumerate()
            .max_by_key(|(_, &v)| v)
            .map(|(column, _)| column)
            .unwrap_or(0)
    }

    /// Returns the member count of the given column.  All-zero columns are
    /// legal and sum to `0`.
    pub fn column_sum(&self, column: usize) -> usize {
        self.matrix.column(column).iter().map(|&v| v as usize).sum()
    }

    /// Returns the backing array.
    pub fn as_array(&self) -> &Array2<u8> {
        &self.matrix
    }
}

/// Community membership by node key.
impl<N, E> FlowGraph<N, E>
where
    N: Node,
    E: Flow<Key = N::Key>,
{
    /// Maps every community with at least one member to the set of node keys
    /// assigned to it.
    ///
    /// Iterates community indices from `0` to `C - 1`, collects the canonical
    /// positions labeled with each index and translates them to node keys;
    /// member-less indices are omitted.  The map is keyed by the community
    /// index, never by a label value read from the per-node vector.
    pub fn communities(
        &self,
        partition: &Partition,
    ) -> Result<BTreeMap<usize, BTreeSet<N::Key>>, Error> {
        self.check_partition(partition)?;
        let keys = self.node_keys();

        let mut communities = BTreeMap::new();
        for community in 0..partition.community_count() {
            let members: BTreeSet<N::Key> = partition
                .labels()
                .iter()
                .enumerate()
                .filter(|&(_, &label)| label == community)
                .map(|(position, _)| keys[position].clone())
                .collect();
            if !members.is_empty() {
                communities.insert(community, members);
            }
        }

        Ok(communities)
    }
}
