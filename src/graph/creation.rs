// License: MIT
// Copyright © 2026 Flow Network Partition contributors

//! Methods for creating [`FlowGraph`] instances from given nodes and flows.

use petgraph::graph::DiGraph;

use crate::{Error, Flow, FlowGraphConfig, Node};

use super::{FlowGraph, FlowMap, NodeIndexMap};

/// `FlowGraph` instantiation.
impl<N, E> FlowGraph<N, E>
where
    N: Node,
    E: Flow<Key = N::Key>,
{
    /// Creates a new [`FlowGraph`] from the given nodes and flows.
    ///
    /// The order in which nodes are passed is the canonical node order: every
    /// vector or matrix the graph produces is indexed by it.
    ///
    /// Returns an error if a node key occurs twice, if a flow references an
    /// unknown node, if a flow weight is not finite, if a weight is negative
    /// while [`FlowGraphConfig::allow_negative_weights`] is unset, or if two
    /// flows share endpoints while [`FlowGraphConfig::merge_parallel_flows`]
    /// is unset.
    pub fn try_new<NodeIterator: IntoIterator<Item = N>, FlowIterator: IntoIterator<Item = E>>(
        nodes: NodeIterator,
        flows: FlowIterator,
        config: FlowGraphConfig,
    ) -> Result<Self, Error> {
        let (graph, indices) = Self::create_graph(nodes)?;

        let mut fg = Self {
            graph,
            node_indices: indices,
            flows: FlowMap::new(),
            config,
        };
        fg.add_flows(flows)?;

        Ok(fg)
    }

    /// Returns a new graph identical to this one, except that all self-loops
    /// are removed.
    ///
    /// The node set, the canonical node order and all weights between
    /// distinct nodes are unchanged.  Applying this to a graph without
    /// self-loops returns an identical graph.
    pub fn without_self_loops(&self) -> Self
    where
        N: Clone,
        E: Clone,
    {
        let mut graph = DiGraph::new();
        let mut indices = NodeIndexMap::new();
        for node in self.graph.raw_nodes() {
            let key = node.weight.key();
            let index = graph.add_node(node.weight.clone());
            indices.insert(key, index);
        }

        let mut flows = FlowMap::new();
        for edge in self.graph.raw_edges() {
            if edge.source() == edge.target() {
                continue;
            }
            graph.add_edge(edge.source(), edge.target(), edge.weight);
            if let Some(flow) = self.flows.get(&(edge.source(), edge.target())) {
                flows.insert((edge.source(), edge.target()), flow.clone());
            }
        }

        Self {
            graph,
            node_indices: indices,
            flows,
            config: self.config.clone(),
        }
    }

    fn create_graph(
        nodes: impl IntoIterator<Item = N>,
    ) -> Result<(DiGraph<N, f64>, NodeIndexMap<N::Key>), Error> {
        let mut graph = DiGraph::new();
        let mut indices = NodeIndexMap::new();

        for node in nodes {
            let key = node.key();

            if indices.contains_key(&key) {
                return Err(Error::invalid_graph(format!(
                    "Duplicate node key found: {key}"
                )));
            }

            let index = graph.add_node(node);
            indices.insert(key, index);
        }

        Ok((graph, indices))
    }

    fn add_flows(&mut self, flows: impl IntoIterator<Item = E>) -> Result<(), Error> {
        for flow in flows {
            let source = flow.source();
            let target = flow.target();
            let weight = flow.weight();

            if !weight.is_finite() {
                return Err(Error::invalid_flow(format!(
                    "Flow:({source}, {target}) Weight {weight} is not finite."
                )));
            }
            if weight < 0.0 && !self.config.allow_negative_weights {
                return Err(Error::invalid_flow(format!(
                    "Flow:({source}, {target}) Negative weight {weight} is not allowed."
                )));
            }
            for key in [&source, &target] {
                if !self.node_indices.contains_key(key) {
                    return Err(Error::invalid_flow(format!(
                        "Flow:({source}, {target}) Can't find a node with key {key}"
                    )));
                }
            }

            let source_index = self.node_indices[&source];
            let target_index = self.node_indices[&target];

            if let Some(edge) = self.graph.find_edge(source_index, target_index) {
                if !self.config.merge_parallel_flows {
                    return Err(Error::invalid_flow(format!(
                        "Flow:({source}, {target}) Duplicate flow for this pair."
                    )));
                }
                self.graph[edge] += weight;
            } else {
                self.graph.add_edge(source_index, target_index, weight);
                self.flows.insert((source_index, target_index), flow);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_utils::{TestFlow, TestNode};

    fn nodes_and_flows() -> (Vec<TestNode>, Vec<TestFlow>) {
        let nodes = vec![
            TestNode("ber"),
            TestNode("ham"),
            TestNode("muc"),
            TestNode("cgn"),
        ];
        let flows = vec![
            TestFlow("ber", "ham", 4.0),
            TestFlow("ham", "ber", 2.0),
            TestFlow("ber", "muc", 1.5),
            TestFlow("muc", "cgn", 3.0),
            TestFlow("muc", "muc", 0.5),
        ];

        (nodes, flows)
    }

    #[test]
    fn test_node_validation() {
        let config = FlowGraphConfig::default();
        let (mut nodes, flows) = nodes_and_flows();

        assert!(FlowGraph::try_new(nodes.clone(), flows.clone(), config.clone()).is_ok());

        nodes.push(TestNode("ham"));
        assert!(
            FlowGraph::try_new(nodes.clone(), flows.clone(), config.clone())
                .is_err_and(|e| e == Error::invalid_graph("Duplicate node key found: ham"))
        );

        nodes.pop();
        assert!(FlowGraph::try_new(nodes, flows, config).is_ok());
    }

    #[test]
    fn test_flow_validation() {
        let config = FlowGraphConfig::default();
        let (nodes, mut flows) = nodes_and_flows();

        flows.push(TestFlow("ber", "sxf", 1.0));
        assert!(
            FlowGraph::try_new(nodes.clone(), flows.clone(), config.clone()).is_err_and(|e| e
                == Error::invalid_flow("Flow:(ber, sxf) Can't find a node with key sxf"))
        );

        flows.pop();
        flows.push(TestFlow("ber", "ham", 1.0));
        assert!(
            FlowGraph::try_new(nodes.clone(), flows.clone(), config.clone()).is_err_and(
                |e| e == Error::invalid_flow("Flow:(ber, ham) Duplicate flow for this pair.")
            )
        );

        flows.pop();
        flows.push(TestFlow("ham", "muc", f64::NAN));
        assert!(
            FlowGraph::try_new(nodes.clone(), flows.clone(), config.clone()).is_err_and(
                |e| e == Error::invalid_flow("Flow:(ham, muc) Weight NaN is not finite.")
            )
        );

        flows.pop();
        flows.push(TestFlow("ham", "muc", -1.0));
        assert!(
            FlowGraph::try_new(nodes.clone(), flows.clone(), config.clone()).is_err_and(
                |e| e == Error::invalid_flow("Flow:(ham, muc) Negative weight -1 is not allowed.")
            )
        );

        flows.pop();
        assert!(FlowGraph::try_new(nodes, flows, config).is_ok());
    }

    #[test]
    fn test_negative_weights_config() {
        let config = FlowGraphConfig {
            allow_negative_weights: true,
            ..Default::default()
        };
        let (nodes, mut flows) = nodes_and_flows();
        flows.push(TestFlow("ham", "muc", -1.0));

        let graph = FlowGraph::try_new(nodes, flows, config).unwrap();
        assert_eq!(graph.flow_weight("ham", "muc"), Ok(-1.0));
    }

    #[test]
    fn test_parallel_flow_merging() {
        let config = FlowGraphConfig {
            merge_parallel_flows: true,
            ..Default::default()
        };
        let (nodes, mut flows) = nodes_and_flows();
        flows.push(TestFlow("ber", "ham", 6.0));

        let graph = FlowGraph::try_new(nodes, flows, config).unwrap();
        assert_eq!(graph.flow_weight("ber", "ham"), Ok(10.0));
        // The first flow value is kept for retrieval.
        assert_eq!(
            graph.flow("ber", "ham"),
            Ok(Some(&TestFlow("ber", "ham", 4.0)))
        );
    }

    #[test]
    fn test_without_self_loops() {
        let config = FlowGraphConfig::default();
        let (nodes, flows) = nodes_and_flows();

        let graph = FlowGraph::try_new(nodes, flows, config).unwrap();
        assert_eq!(graph.flow_weight("muc", "muc"), Ok(0.5));

        let stripped = graph.without_self_loops();
        assert_eq!(stripped.node_count(), graph.node_count());
        assert_eq!(stripped.flow_count(), graph.flow_count() - 1);
        assert_eq!(stripped.flow_weight("muc", "muc"), Ok(0.0));
        assert_eq!(stripped.flow_weight("ber", "ham"), Ok(4.0));
        assert_eq!(stripped.node_position("cgn"), graph.node_position("cgn"));

        // Stripping twice changes nothing further.
        let stripped_twice = stripped.without_self_loops();
        assert_eq!(stripped_twice.flow_count(), stripped.flow_count());
        assert_eq!(stripped_twice.flow_weight("muc", "cgn"), Ok(3.0));
    }
}
