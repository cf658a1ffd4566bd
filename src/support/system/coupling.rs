use std::collections::BTreeMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::support::{submodels::PhysicalDomain, system::VariableId};

/// The explicit produce/consume graph between physical domains.
///
/// Nodes are physical domains and each edge runs from a producer to a
/// consumer, labelled with the variable that couples them. The graph is
/// built by the assembler and consumed, not evaluated: coupling order is
/// resolved downstream, while the well-posedness checker only needs the
/// produce/consume bookkeeping kept alongside the graph.
///
/// Consumptions that cannot be resolved to exactly one producer get no
/// edge; they stay visible through [`consumptions`](Self::consumptions) and
/// [`producers_of`](Self::producers_of) so the checker can report them.
#[derive(Debug, Clone)]
pub struct CouplingGraph {
    graph: DiGraph<PhysicalDomain, VariableId>,
    nodes: BTreeMap<PhysicalDomain, NodeIndex>,
    producers: BTreeMap<VariableId, Vec<PhysicalDomain>>,
    consumptions: Vec<(PhysicalDomain, VariableId)>,
}

impl CouplingGraph {
    pub(crate) fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            nodes: BTreeMap::new(),
            producers: BTreeMap::new(),
            consumptions: Vec::new(),
        }
    }

    fn node(&mut self, domain: PhysicalDomain) -> NodeIndex {
        let graph = &mut self.graph;
        *self
            .nodes
            .entry(domain)
            .or_insert_with(|| graph.add_node(domain))
    }

    /// Records that `domain` makes `variable` available to other domains.
    pub(crate) fn add_producer(&mut self, domain: PhysicalDomain, variable: VariableId) {
        self.node(domain);
        let producers = self.producers.entry(variable).or_default();
        // A domain governing an unknown and listing it as derived output
        // counts once.
        if !producers.contains(&domain) {
            producers.push(domain);
        }
    }

    /// Records that `domain` needs `variable` from some other domain.
    pub(crate) fn add_consumption(&mut self, domain: PhysicalDomain, variable: VariableId) {
        self.node(domain);
        self.consumptions.push((domain, variable));
    }

    /// Adds the edges for every consumption with exactly one producer.
    pub(crate) fn connect(&mut self) {
        for (consumer, variable) in self.consumptions.clone() {
            if let [producer] = self.producers_of(&variable) {
                let producer = *producer;
                let from = self.node(producer);
                let to = self.node(consumer);
                self.graph.add_edge(from, to, variable);
            }
        }
    }

    /// The domains that produce `variable`; empty if nothing does.
    pub fn producers_of(&self, variable: &VariableId) -> &[PhysicalDomain] {
        self.producers
            .get(variable)
            .map_or(&[], Vec::as_slice)
    }

    /// Every recorded consumption, as `(consumer, variable)` pairs.
    pub fn consumptions(&self) -> impl Iterator<Item = &(PhysicalDomain, VariableId)> {
        self.consumptions.iter()
    }

    /// Whether `consumer` consumes `variable`.
    pub fn consumes(&self, consumer: PhysicalDomain, variable: &VariableId) -> bool {
        self.consumptions
            .iter()
            .any(|(domain, v)| *domain == consumer && v == variable)
    }

    /// The underlying domain graph.
    pub fn graph(&self) -> &DiGraph<PhysicalDomain, VariableId> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::system::Region;

    const COUPLED: VariableId = VariableId::new("coupling variable", Region::Cell);

    #[test]
    fn resolved_consumption_becomes_an_edge() {
        let mut coupling = CouplingGraph::new();
        coupling.add_producer(PhysicalDomain::Sei, COUPLED);
        coupling.add_consumption(PhysicalDomain::ElectrolyteConductivity, COUPLED);
        coupling.connect();

        assert_eq!(coupling.producers_of(&COUPLED), &[PhysicalDomain::Sei]);
        assert!(coupling.consumes(PhysicalDomain::ElectrolyteConductivity, &COUPLED));
        assert_eq!(coupling.graph().edge_count(), 1);
    }

    #[test]
    fn unresolved_consumption_gets_no_edge_but_stays_visible() {
        let mut coupling = CouplingGraph::new();
        coupling.add_consumption(PhysicalDomain::Thermal, COUPLED);
        coupling.connect();

        assert!(coupling.producers_of(&COUPLED).is_empty());
        assert_eq!(coupling.graph().edge_count(), 0);
        assert_eq!(coupling.consumptions().count(), 1);
    }

    #[test]
    fn duplicate_production_by_one_domain_counts_once() {
        let mut coupling = CouplingGraph::new();
        coupling.add_producer(PhysicalDomain::Particle, COUPLED);
        coupling.add_producer(PhysicalDomain::Particle, COUPLED);

        assert_eq!(coupling.producers_of(&COUPLED).len(), 1);
    }
}
