use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::catalog::Catalog;

/// Arista prerequisito -> curso, tal como la dibuja el adaptador de renderizado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Grafo dirigido de prerequisitos: un nodo por curso del catálogo, una
/// arista `prereq -> course` por cada prerequisito presente en el catálogo.
#[derive(Debug, Clone)]
pub struct PrerequisiteGraph {
    graph: DiGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
}

impl PrerequisiteGraph {
    pub fn build(catalog: &Catalog) -> Self {
        let mut graph: DiGraph<String, ()> = DiGraph::new();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();

        for course in catalog.iter() {
            let idx = graph.add_node(course.id.clone());
            node_map.insert(course.id.clone(), idx);
        }

        for course in catalog.iter() {
            let Some(&to) = node_map.get(&course.id) else { continue };
            for prereq in course.prerequisites.iter() {
                match node_map.get(prereq) {
                    Some(&from) => {
                        if graph.find_edge(from, to).is_none() {
                            graph.add_edge(from, to, ());
                        }
                    }
                    None => debug!(course = %course.id, prerequisite = %prereq, "skipping edge to unknown course"),
                }
            }
        }

        PrerequisiteGraph { graph, node_map }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Courses listing `id` as a direct prerequisite, sorted.
    pub fn dependents(&self, id: &str) -> Vec<String> {
        let Some(&idx) = self.node_map.get(id) else {
            return Vec::new();
        };
        let mut out: Vec<String> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| self.graph[n].clone())
            .collect();
        out.sort();
        out
    }

    /// Edges sorted by (source, target), ids "{source}-{target}".
    pub fn edges(&self) -> Vec<GraphEdge> {
        let mut out: Vec<GraphEdge> = self
            .graph
            .edge_references()
            .map(|e| {
                let source = self.graph[e.source()].clone();
                let target = self.graph[e.target()].clone();
                GraphEdge {
                    id: format!("{}-{}", source, target),
                    source,
                    target,
                }
            })
            .collect();
        out.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));
        out
    }

    /// Graphviz DOT rendering.
    pub fn to_dot(&self) -> String {
        format!("{:?}", Dot::with_config(&self.graph, &[Config::EdgeNoLabel]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use crate::models::Course;

    #[test]
    fn test_aristas_del_catalogo_de_referencia() {
        let g = PrerequisiteGraph::build(&builtin_catalog().unwrap());
        assert_eq!(g.node_count(), 4);
        let ids: Vec<String> = g.edges().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["CS1428-CS2308", "CS2308-CS2318"]);
    }

    #[test]
    fn test_dependents() {
        let g = PrerequisiteGraph::build(&builtin_catalog().unwrap());
        assert_eq!(g.dependents("CS1428"), vec!["CS2308"]);
        assert!(g.dependents("CS2318").is_empty());
        assert!(g.dependents("NOPE").is_empty());
    }

    #[test]
    fn test_prerequisito_desconocido_sin_arista() {
        let cat = Catalog::from_courses(vec![
            Course::new("A1", "A 1", "A", 3, "D").with_prerequisites(&["Z9", "Z9"]),
        ])
        .unwrap();
        let g = PrerequisiteGraph::build(&cat);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_dot() {
        let g = PrerequisiteGraph::build(&builtin_catalog().unwrap());
        let dot = g.to_dot();
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("CS1428"));
        assert!(dot.contains("->"));
    }
}
