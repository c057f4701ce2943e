use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use super::nfa::NFA;

#[derive(PartialEq, Eq)]
struct VertexSet {
    inner: HashSet<u32>,
}

impl Hash for VertexSet {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let mut vec: Vec<u32> = self.inner.iter().copied().collect();
        vec.sort_unstable();
        vec.hash(state);
    }
}

impl From<HashSet<u32>> for VertexSet {
    fn from(inner: HashSet<u32>) -> Self {
        Self { inner }
    }
}

#[derive(Debug, Clone, Copy)]
struct DFAEdge(u32, u32, char);

/// Deterministic automaton built from an [`NFA`] by subset construction.
/// Vertex `0` is the start.
#[derive(Debug)]
pub struct DFA<AcceptEnum> {
    edges: Vec<DFAEdge>,
    states: HashMap<u32, AcceptEnum>,
}

impl<Ac: Copy> DFA<Ac> {
    /// Runs the whole of `words` through the automaton and reports the class it ends in.
    pub fn match_one(&self, words: &str) -> Option<Ac> {
        let mut current_vertex = 0;
        for symbol in words.chars() {
            current_vertex = self
                .edges
                .iter()
                .find(|DFAEdge(start, _, s)| *start == current_vertex && *s == symbol)
                .map(|DFAEdge(_, end, _)| *end)?;
        }
        self.states.get(&current_vertex).copied()
    }

    pub fn subset_construct(nfa: &NFA<Ac>) -> Self {
        let mut dfa_edges = Vec::new();
        let mut dfa_states = HashMap::new();

        let init = nfa.e_closure_with_vertex(0);
        if let Some(state) = nfa.get_state(&init) {
            dfa_states.insert(0, state);
        }
        // the DFA vertex of a set is its position in `nfa_vertex_sets`
        let mut nfa_vertex_sets = vec![init.clone()];
        let mut table = HashMap::new();
        table.insert(VertexSet::from(init), 0_u32);

        let mut symbols: Vec<char> = nfa.symbol_set().iter().copied().collect();
        symbols.sort_unstable();

        let mut unmarked_pos = 0;
        while unmarked_pos < nfa_vertex_sets.len() {
            let start = unmarked_pos as u32;
            for &symbol in &symbols {
                let nfa_vertex_set = nfa.move_set(&nfa_vertex_sets[unmarked_pos], symbol);
                if nfa_vertex_set.is_empty() {
                    continue;
                }
                let set_warp = VertexSet::from(nfa_vertex_set);
                let end = match table.get(&set_warp) {
                    Some(&dfa_vertex) => dfa_vertex,
                    None => {
                        let dfa_vertex = nfa_vertex_sets.len() as u32;
                        if let Some(state) = nfa.get_state(&set_warp.inner) {
                            dfa_states.insert(dfa_vertex, state);
                        }
                        nfa_vertex_sets.push(set_warp.inner.clone());
                        table.insert(set_warp, dfa_vertex);
                        dfa_vertex
                    }
                };
                dfa_edges.push(DFAEdge(start, end, symbol));
            }
            unmarked_pos += 1;
        }
        log::debug!(
            "subset construction: {} dfa vertices, {} edges",
            nfa_vertex_sets.len(),
            dfa_edges.len()
        );
        DFA { edges: dfa_edges, states: dfa_states }
    }
}
