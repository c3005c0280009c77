//! Builds collaboration graphs from a collaboration map

use super::{CollaborationGraph, GraphShape};
use crate::models::Author;
use crate::records::CollaborationMap;
use tracing::debug;

/// Build a graph of the requested shape
pub fn build(
    map: &CollaborationMap,
    shape: GraphShape,
    subject: Option<&Author>,
) -> CollaborationGraph {
    match shape {
        GraphShape::Coauthor => build_graph(map, subject),
        GraphShape::Publication => build_publication_graph(map, subject),
    }
}

/// Co-author graph: one node per distinct author, an edge per co-author pair.
///
/// When `subject` is given it becomes a node linked to every collaborator.
/// Leave it out for the new-collaborator check so degrees only reflect links
/// between collaborators.
pub fn build_graph(map: &CollaborationMap, subject: Option<&Author>) -> CollaborationGraph {
    let mut graph = CollaborationGraph::new(GraphShape::Coauthor);
    let subject_idx = subject.map(|s| graph.add_author(s));

    for collaborators in map.values() {
        let nodes: Vec<_> = collaborators.iter().map(|a| graph.add_author(a)).collect();

        for (i, &a) in nodes.iter().enumerate() {
            for &b in &nodes[i + 1..] {
                graph.connect(a, b);
            }
            if let Some(s) = subject_idx {
                graph.connect(s, a);
            }
        }
    }

    debug!(
        "Co-author graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}

/// Publication graph: publications and authors as nodes, author-paper edges
pub fn build_publication_graph(
    map: &CollaborationMap,
    subject: Option<&Author>,
) -> CollaborationGraph {
    let mut graph = CollaborationGraph::new(GraphShape::Publication);

    for (publication, collaborators) in map {
        let paper = graph.add_publication(publication.raw());
        for author in collaborators.iter().chain(subject) {
            let node = graph.add_author(author);
            graph.connect(paper, node);
        }
    }

    debug!(
        "Publication graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}
