// License: MIT
// Copyright © 2026 Flow Network Partition contributors

//! Flow coverage of a partition: how much of the weight of a [`FlowGraph`]
//! stays inside the communities of a [`Partition`].
//!
//! All ratios in this module are undefined when their denominator is zero
//! (an empty graph, a member-less community, an isolated node).  Undefined
//! ratios are returned as `None` so that downstream aggregation can filter
//! them; they are never silently clamped.

use crate::{Error, Flow, FlowGraph, Node, Partition};

/// Coverage scoring.
impl<N, E> FlowGraph<N, E>
where
    N: Node,
    E: Flow<Key = N::Key>,
{
    /// Computes the fraction of the total flow that stays within a community
    /// of the given partition.
    ///
    /// With `include_self_loops` set, self-loop weight counts both as flow
    /// within a community and towards the total (the total flow coverage);
    /// otherwise the diagonal is excluded from both sums (the
    /// inter-community flow coverage).
    ///
    /// Returns `Ok(None)` when the graph carries no flow at all.
    pub fn coverage(
        &self,
        partition: &Partition,
        include_self_loops: bool,
    ) -> Result<Option<f64>, Error> {
        self.check_partition(partition)?;
        let labels = partition.labels();

        let mut flow_within = 0.0;
        let mut total_flow = 0.0;
        for edge in self.graph.raw_edges() {
            let (source, target) = (edge.source().index(), edge.target().index());
            if source == target && !include_self_loops {
                continue;
            }
            total_flow += edge.weight;
            if labels[source] == labels[target] {
                flow_within += edge.weight;
            }
        }

        if total_flow == 0.0 {
            tracing::warn!("graph carries no flow, coverage is undefined");
            return Ok(None);
        }
        Ok(Some(flow_within / total_flow))
    }

    /// Computes, for every community of the given partition, the fraction of
    /// the flow leaving its nodes that stays within the community.
    ///
    /// Self-loop handling follows `include_self_loops` as in
    /// [`coverage`][FlowGraph::coverage].  Communities without members or
    /// without outgoing flow get `None`.
    pub fn community_coverage(
        &self,
        partition: &Partition,
        include_self_loops: bool,
    ) -> Result<Vec<Option<f64>>, Error> {
        self.check_partition(partition)?;
        let labels = partition.labels();

        let mut within = vec![0.0; partition.community_count()];
        let mut outgoing = vec![0.0; partition.community_count()];
        for edge in self.graph.raw_edges() {
            let (source, target) = (edge.source().index(), edge.target().index());
            if source == target && !include_self_loops {
                continue;
            }
            outgoing[labels[source]] += edge.weight;
            if labels[source] == labels[target] {
                within[labels[source]] += edge.weight;
            }
        }

        Ok((0..partition.community_count())
            .map(|k| (outgoing[k] != 0.0).then(|| within[k] / outgoing[k]))
            .collect())
    }

    /// Computes, for every node, the fraction of its outgoing weight that it
    /// sends into its own community.
    ///
    /// Self-loops are always excluded here.  Nodes without outgoing weight
    /// get `None`.
    pub fn nodal_containment(&self, partition: &Partition) -> Result<Vec<Option<f64>>, Error> {
        self.check_partition(partition)?;
        let labels = partition.labels();

        let mut within = vec![0.0; self.graph.node_count()];
        let mut out_degree = vec![0.0; self.graph.node_count()];
        for edge in self.graph.raw_edges() {
            let (source, target) = (edge.source().index(), edge.target().index());
            if source == target {
                continue;
            }
            out_degree[source] += edge.weight;
            if labels[source] == labels[target] {
                within[source] += edge.weight;
            }
        }

        Ok((0..self.graph.node_count())
            .map(|i| (out_degree[i] != 0.0).then(|| within[i] / out_degree[i]))
            .collect())
    }

    pub(crate) fn check_partition(&self, partition: &Partition) -> Result<(), Error> {
        if partition.len() != self.graph.node_count() {
            return Err(Error::invalid_partition(format!(
                "Partition labels {} nodes but the graph has {}.",
                partition.len(),
                self.graph.node_count()
            )));
        }
        Ok(())
    }
}
