// License: MIT
// Copyright © 2026 Flow Network Partition contributors

//! This module contains the configuration options for the `FlowGraph`.

/// Configuration options for the `FlowGraph`.
#[derive(Clone, Default, Debug)]
pub struct FlowGraphConfig {
    /// Whether to allow flows with negative weights in the graph.  When this
    /// is `false`, a flow with a negative weight is rejected at construction
    /// time.  Negative weights never count as edges for binarization.
    pub allow_negative_weights: bool,

    /// Whether to merge flows that share the same source and target.  When
    /// this is `true`, the weights of such flows are summed; otherwise a
    /// second flow for the same pair is rejected at construction time.
    pub merge_parallel_flows: bool,
}
