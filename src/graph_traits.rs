// License: MIT
// Copyright © 2026 Flow Network Partition contributors

//! This module contains the traits that need to be implemented by the types
//! that represent a node and a flow.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// The bounds required of a node key.
///
/// Keys can be arbitrary values (station codes, region names, numeric ids),
/// as long as they are hashable, ordered and cheaply cloneable.  The ordering
/// bound is only used for producing deterministic error messages and sorted
/// community listings; it does not affect the canonical node order, which is
/// always insertion order.
pub trait NodeKey: Clone + Eq + Hash + Ord + Debug + Display {}

impl<T> NodeKey for T where T: Clone + Eq + Hash + Ord + Debug + Display {}

/**
This trait needs to be implemented by the type that represents a node.

Read more about why this is necessary [here][crate#the-node-and-flow-traits].

<details>
<summary>Example implementation for a mobility dataset:</summary>

```ignore
impl flow_network_partition::Node for mobility::Station {
    type Key = String;

    fn key(&self) -> String {
        self.station_code.clone()
    }
}
```

</details>
*/
pub trait Node {
    /// The key type identifying nodes of this graph.
    type Key: NodeKey;

    /// Returns the key of the node.
    fn key(&self) -> Self::Key;
}

/**
This trait needs to be implemented by the type that represents a flow between
two nodes.

Read more about why this is necessary [here][crate#the-node-and-flow-traits].

<details>
<summary>Example implementation for a mobility dataset:</summary>

```ignore
impl flow_network_partition::Flow for mobility::TripCount {
    type Key = String;

    fn source(&self) -> String {
        self.origin.clone()
    }

    fn target(&self) -> String {
        self.destination.clone()
    }

    fn weight(&self) -> f64 {
        self.trips as f64
    }
}
```

</details>
*/
pub trait Flow {
    /// The key type identifying the endpoints of the flow.
    type Key: NodeKey;

    /// Returns the key of the source node of the flow.
    fn source(&self) -> Self::Key;

    /// Returns the key of the target node of the flow.
    fn target(&self) -> Self::Key;

    /// Returns the weight carried by the flow.
    fn weight(&self) -> f64;
}
