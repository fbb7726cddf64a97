//! Devolution graph module.
//!
//! Provides the `DevolutionGraph` type, which records which species each
//! species evolves from. Used to find the base form a bred egg hatches into.
//!
//! The data comes from outside this crate, so the graph may contain cycles.
//! Lookups walk it iteratively and stop at the first revisited species.

use crate::species::SpeciesData;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashMap, HashSet};

/// Directed graph of `evolved -> previous form` edges.
///
/// # Examples
///
/// ```rust
/// use eggworks::graph::DevolutionGraph;
///
/// let mut graph = DevolutionGraph::new();
/// graph.add_devolution("Raichu", "Pikachu");
/// graph.add_devolution("Pikachu", "Pichu");
///
/// assert_eq!(graph.devolution_of("Raichu"), Some("Pikachu"));
/// assert_eq!(graph.devolution_of("Pichu"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DevolutionGraph {
    graph: DiGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
}

impl DevolutionGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(evolved, previous)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut graph = Self::new();
        for (evolved, previous) in pairs {
            graph.add_devolution(evolved, previous);
        }
        graph
    }

    /// Add a node if it doesn't exist, returning its index.
    fn add_node(&mut self, species: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(species) {
            idx
        } else {
            let idx = self.graph.add_node(species.to_string());
            self.node_map.insert(species.to_string(), idx);
            idx
        }
    }

    /// Record that `evolved` evolves from `previous`.
    ///
    /// A species has at most one previous form; a second call replaces it.
    pub fn add_devolution(&mut self, evolved: &str, previous: &str) {
        let from = self.add_node(evolved);
        let to = self.add_node(previous);
        let existing: Vec<_> = self
            .graph
            .edges_directed(from, Direction::Outgoing)
            .map(|edge| edge.id())
            .collect();
        for edge in existing {
            self.graph.remove_edge(edge);
        }
        self.graph.add_edge(from, to, ());
    }

    /// The species `species` evolves from, if any.
    pub fn devolution_of(&self, species: &str) -> Option<&str> {
        let idx = *self.node_map.get(species)?;
        self.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .next()
            .map(|prev| self.graph[prev].as_str())
    }

    /// Whether the recorded data loops back on itself anywhere.
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Number of species known to the graph.
    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }

    /// Walk back to the earliest form available in unlocked regions.
    ///
    /// Steps to the previous form only while that form's native region is
    /// known and `<= highest_region`. Stops on a cycle and logs it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eggworks::graph::DevolutionGraph;
    /// use eggworks::species::MapSpeciesData;
    ///
    /// let graph = DevolutionGraph::from_pairs([("Raichu", "Pikachu"), ("Pikachu", "Pichu")]);
    /// let data = MapSpeciesData::new()
    ///     .with("Raichu", Some(10), 0)
    ///     .with("Pikachu", Some(10), 0)
    ///     .with("Pichu", Some(10), 1);
    ///
    /// assert_eq!(graph.base_form("Raichu", 0, &data), "Pikachu");
    /// assert_eq!(graph.base_form("Raichu", 1, &data), "Pichu");
    /// ```
    pub fn base_form(&self, species: &str, highest_region: u32, data: &dyn SpeciesData) -> String {
        let mut current = species;
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(current);

        while let Some(previous) = self.devolution_of(current) {
            let unlocked = data
                .native_region(previous)
                .is_some_and(|region| region <= highest_region);
            if !unlocked {
                break;
            }
            if !visited.insert(previous) {
                tracing::error!(species, at = previous, "Devolution data contains a cycle");
                break;
            }
            current = previous;
        }

        current.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::MapSpeciesData;

    fn kanto_johto() -> MapSpeciesData {
        MapSpeciesData::new()
            .with("Charizard", Some(20), 0)
            .with("Charmeleon", Some(20), 0)
            .with("Charmander", Some(20), 0)
            .with("Electabuzz", Some(25), 0)
            .with("Elekid", Some(25), 1)
    }

    #[test]
    fn test_base_form_walks_full_chain() {
        let graph = DevolutionGraph::from_pairs([
            ("Charizard", "Charmeleon"),
            ("Charmeleon", "Charmander"),
        ]);
        assert_eq!(graph.base_form("Charizard", 0, &kanto_johto()), "Charmander");
    }

    #[test]
    fn test_base_form_respects_region_lock() {
        let graph = DevolutionGraph::from_pairs([("Electabuzz", "Elekid")]);
        let data = kanto_johto();
        assert_eq!(graph.base_form("Electabuzz", 0, &data), "Electabuzz");
        assert_eq!(graph.base_form("Electabuzz", 1, &data), "Elekid");
    }

    #[test]
    fn test_base_form_without_devolution() {
        let graph = DevolutionGraph::new();
        assert_eq!(graph.base_form("Lapras", 3, &kanto_johto()), "Lapras");
    }

    #[test]
    fn test_unknown_native_region_stops_walk() {
        let graph = DevolutionGraph::from_pairs([("Charizard", "Mystery")]);
        assert_eq!(graph.base_form("Charizard", 9, &kanto_johto()), "Charizard");
    }

    #[test]
    fn test_cycle_terminates() {
        let graph = DevolutionGraph::from_pairs([("A", "B"), ("B", "C"), ("C", "A")]);
        assert!(graph.has_cycles());
        let data = MapSpeciesData::new()
            .with("A", None, 0)
            .with("B", None, 0)
            .with("C", None, 0);
        assert_eq!(graph.base_form("A", 0, &data), "C");
    }

    #[test]
    fn test_self_loop_terminates() {
        let graph = DevolutionGraph::from_pairs([("Ditto", "Ditto")]);
        let data = MapSpeciesData::new().with("Ditto", None, 0);
        assert_eq!(graph.base_form("Ditto", 0, &data), "Ditto");
    }

    #[test]
    fn test_add_devolution_replaces_previous_form() {
        let mut graph = DevolutionGraph::new();
        graph.add_devolution("Marill", "Azurill");
        graph.add_devolution("Marill", "Pichu");
        assert_eq!(graph.devolution_of("Marill"), Some("Pichu"));
        assert_eq!(graph.len(), 3);
        assert!(!graph.has_cycles());
    }
}
