//! Collaboration graph
//!
//! Undirected petgraph graph built from a collaboration map. The calculator
//! only ever asks it one question: what is a collaborator's degree?
//!
//! Two shapes are supported:
//!
//! - `coauthor`: authors are nodes, every pair of co-authors on the same
//!   publication is joined by an edge. Degree = number of distinct people a
//!   collaborator has co-authored with across the map.
//! - `publication`: publications and authors are both nodes, each author is
//!   joined to the publications listing them. Degree = number of papers in
//!   the map a collaborator appears on.

mod builder;

pub use builder::{build, build_graph, build_publication_graph};

use crate::models::Author;
use anyhow::anyhow;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;
use std::str::FromStr;

/// How the degree graph is wired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphShape {
    #[default]
    Coauthor,
    Publication,
}

impl FromStr for GraphShape {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coauthor" | "co-author" => Ok(GraphShape::Coauthor),
            "publication" | "paper" => Ok(GraphShape::Publication),
            _ => Err(anyhow!(
                "Unknown graph shape '{}'. Valid shapes: coauthor, publication",
                s
            )),
        }
    }
}

impl std::fmt::Display for GraphShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphShape::Coauthor => write!(f, "coauthor"),
            GraphShape::Publication => write!(f, "publication"),
        }
    }
}

/// A node in the collaboration graph
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GraphNode {
    Author(Author),
    /// Raw publication id (publication shape only)
    Publication(String),
}

/// Undirected collaboration graph with an author -> node lookup
#[derive(Debug, Clone)]
pub struct CollaborationGraph {
    graph: UnGraph<GraphNode, ()>,
    index: HashMap<GraphNode, NodeIndex>,
    shape: GraphShape,
}

impl CollaborationGraph {
    pub fn new(shape: GraphShape) -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            index: HashMap::new(),
            shape,
        }
    }

    pub fn shape(&self) -> GraphShape {
        self.shape
    }

    /// Insert a node once; returns the existing index on repeats
    fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.graph.add_node(node.clone());
        self.index.insert(node, idx);
        idx
    }

    pub fn add_author(&mut self, author: &Author) -> NodeIndex {
        self.add_node(GraphNode::Author(author.clone()))
    }

    pub fn add_publication(&mut self, raw_id: &str) -> NodeIndex {
        self.add_node(GraphNode::Publication(raw_id.to_string()))
    }

    /// Join two nodes. Repeated edges collapse and self-loops are skipped.
    pub fn connect(&mut self, a: NodeIndex, b: NodeIndex) {
        if a != b {
            self.graph.update_edge(a, b, ());
        }
    }

    /// Number of distinct neighbours, or `None` if the author is not a node
    pub fn degree(&self, author: &Author) -> Option<usize> {
        let idx = self.index.get(&GraphNode::Author(author.clone()))?;
        Some(self.graph.neighbors(*idx).count())
    }

    pub fn contains(&self, author: &Author) -> bool {
        self.index.contains_key(&GraphNode::Author(author.clone()))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Author nodes, in insertion order
    pub fn authors(&self) -> impl Iterator<Item = &Author> {
        self.graph.node_weights().filter_map(|node| match node {
            GraphNode::Author(author) => Some(author),
            GraphNode::Publication(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_parsing() {
        assert_eq!(GraphShape::from_str("coauthor").unwrap(), GraphShape::Coauthor);
        assert_eq!(
            GraphShape::from_str("Publication").unwrap(),
            GraphShape::Publication
        );
        assert!(GraphShape::from_str("bipartite").is_err());
        assert_eq!(GraphShape::default().to_string(), "coauthor");
    }

    #[test]
    fn test_connect_collapses_multi_edges() {
        let mut graph = CollaborationGraph::new(GraphShape::Coauthor);
        let a = graph.add_author(&Author::named("A", "One"));
        let b = graph.add_author(&Author::named("B", "Two"));
        graph.connect(a, b);
        graph.connect(b, a);
        graph.connect(a, a);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(&Author::named("A", "One")), Some(1));
    }

    #[test]
    fn test_degree_of_missing_author() {
        let graph = CollaborationGraph::new(GraphShape::Coauthor);
        assert_eq!(graph.degree(&Author::named("No", "Body")), None);
    }

    #[test]
    fn test_namesakes_are_distinct_nodes() {
        let mut graph = CollaborationGraph::new(GraphShape::Coauthor);
        graph.add_author(&Author::named("Jean", "Martin").with_gender("M"));
        graph.add_author(&Author::named("Jean", "Martin").with_gender("F"));
        graph.add_author(&Author::named("Jean", "Martin").with_gender("M").with_city("Lyon"));
        assert_eq!(graph.node_count(), 2);
    }
}
