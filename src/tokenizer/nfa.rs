use std::collections::{HashMap, HashSet};
use std::ops::{BitAnd, BitOr, RangeInclusive};

#[derive(Debug, Clone, Copy)]
pub enum Condition {
    Epsilon,
    Symbol(char),
}

impl Condition {
    fn is_epsilon(&self) -> bool {
        matches!(self, Condition::Epsilon)
    }
    fn is_match(&self, symbol: char) -> bool {
        match self {
            Condition::Epsilon => false,
            Condition::Symbol(s) => *s == symbol,
        }
    }
}

/// `NFAEdge(from, to, condition)`
#[derive(Debug, Clone, Copy)]
pub struct NFAEdge(pub u32, pub u32, pub Condition);

/// Thompson-style automaton. Vertex `0` is the start, vertex `vertex_num - 1` the end,
/// `states` maps accepting vertices to the token class they recognise.
#[derive(Debug, Clone)]
pub struct NFA<AcceptEnum> {
    edges: Vec<NFAEdge>,
    vertex_num: u32,
    states: HashMap<u32, AcceptEnum>,
    symbol_set: HashSet<char>,
}

// 基础构造
impl<Ac> NFA<Ac> {
    pub fn new(
        edges: Vec<NFAEdge>,
        vertex_num: u32,
        states: HashMap<u32, Ac>,
        symbol_set: HashSet<char>,
    ) -> NFA<Ac> {
        NFA { edges, vertex_num, states, symbol_set }
    }
    pub fn from_symbol(symbol: char) -> NFA<Ac> {
        let edges = vec![NFAEdge(0, 1, Condition::Symbol(symbol))];
        let symbol_set = HashSet::from([symbol]);
        NFA { edges, vertex_num: 2, states: HashMap::new(), symbol_set }
    }
    /// Any one of the symbols in `s`.
    pub fn from_symbol_set(s: &str) -> NFA<Ac> {
        NFA::one_of(s.chars())
    }
    pub fn from_symbol_range(symbol_rng: RangeInclusive<char>) -> NFA<Ac> {
        NFA::one_of(symbol_rng)
    }
    //        -> 1 --
    //  0     -> 2 --   -> n + 1
    //        -> n --
    fn one_of(symbols: impl Iterator<Item = char>) -> NFA<Ac> {
        let mut edges = Vec::new();
        let mut symbol_set = HashSet::new();
        let mut vertex_num = 0;
        for symbol in symbols {
            vertex_num += 1;
            edges.push(NFAEdge(0, vertex_num, Condition::Symbol(symbol)));
            symbol_set.insert(symbol);
        }
        let end = vertex_num + 1;
        for vertex in 1..end {
            edges.push(NFAEdge(vertex, end, Condition::Epsilon));
        }
        NFA { edges, vertex_num: end + 1, states: HashMap::new(), symbol_set }
    }
    /// Marks the end vertex as accepting `state`, replacing any previous mark.
    pub fn set_state(&mut self, state: Ac) {
        self.states.clear();
        self.states.insert(self.end(), state);
    }
    fn end(&self) -> u32 {
        self.vertex_num - 1
    }
    pub fn get_states(&self) -> &HashMap<u32, Ac> {
        &self.states
    }
    pub fn get_vertex_num(&self) -> u32 {
        self.vertex_num
    }
    pub fn symbol_set(&self) -> &HashSet<char> {
        &self.symbol_set
    }
    pub fn get_edges(&self) -> &Vec<NFAEdge> {
        &self.edges
    }
}

// 闭包运算
impl<Ac> NFA<Ac> {
    /// Kleene star: zero or more repetitions.
    pub fn closure(mut self) -> NFA<Ac> {
        let end = self.end();
        self.edges.insert(0, NFAEdge(0, end, Condition::Epsilon));
        self.edges.push(NFAEdge(end, 0, Condition::Epsilon));
        self
    }
    /// Zero or one occurrence.
    pub fn optional(mut self) -> NFA<Ac> {
        let end = self.end();
        self.edges.insert(0, NFAEdge(0, end, Condition::Epsilon));
        self
    }
}

// 子集构造所需的集合运算
impl<Ac> NFA<Ac> {
    pub fn e_closure_with_vertex(&self, vertex: u32) -> HashSet<u32> {
        self.e_closure(&HashSet::from([vertex]))
    }
    pub fn e_closure(&self, vertexs: &HashSet<u32>) -> HashSet<u32> {
        let mut result = HashSet::new();
        let mut stack: Vec<u32> = vertexs.iter().copied().collect();
        while let Some(current_vertex) = stack.pop() {
            if !result.insert(current_vertex) {
                continue;
            }
            for NFAEdge(start, end, condition) in &self.edges {
                if *start == current_vertex && condition.is_epsilon() && !result.contains(end) {
                    stack.push(*end);
                }
            }
        }
        result
    }
    /// Vertices reachable from `nfa_vertexs` on `symbol`, epsilon closure included.
    pub fn move_set(&self, nfa_vertexs: &HashSet<u32>, symbol: char) -> HashSet<u32> {
        let targets = self
            .edges
            .iter()
            .filter(|NFAEdge(start, _, condition)| nfa_vertexs.contains(start) && condition.is_match(symbol))
            .map(|NFAEdge(_, end, _)| *end)
            .collect();
        self.e_closure(&targets)
    }
}

impl<Ac: Copy> NFA<Ac> {
    pub fn get_state(&self, vertexs: &HashSet<u32>) -> Option<Ac> {
        vertexs.iter().find_map(|v| self.states.get(v).copied())
    }
}

impl<Ac: Copy> BitOr for NFA<Ac> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        let tvn = self.vertex_num;
        let ovn = rhs.vertex_num;

        let new_start = 0;
        let new_end = tvn + ovn + 1;
        let new_symbol_set = &self.symbol_set | &rhs.symbol_set;
        let new_states = self
            .states
            .values()
            .chain(rhs.states.values())
            .map(|state| (new_end, *state))
            .collect();

        let mut edges = Vec::with_capacity(self.edges.len() + rhs.edges.len() + 4);
        //              -> self.start(1)
        // new_start(0)
        //              -> rhs.start(tvn + 1)
        edges.push(NFAEdge(new_start, 1, Condition::Epsilon));
        edges.push(NFAEdge(new_start, tvn + 1, Condition::Epsilon));
        // self.start(1) -> ... -> self.end(tvn) -> new_end
        for NFAEdge(start, end, condition) in self.edges {
            edges.push(NFAEdge(start + 1, end + 1, condition));
        }
        edges.push(NFAEdge(tvn, new_end, Condition::Epsilon));
        // rhs.start(tvn + 1) -> ... -> rhs.end(tvn + ovn) -> new_end
        for NFAEdge(start, end, condition) in rhs.edges {
            edges.push(NFAEdge(start + tvn + 1, end + tvn + 1, condition));
        }
        edges.push(NFAEdge(tvn + ovn, new_end, Condition::Epsilon));

        NFA { edges, vertex_num: new_end + 1, states: new_states, symbol_set: new_symbol_set }
    }
}

impl<Ac: Copy> BitAnd for NFA<Ac> {
    type Output = Self;

    /// Concatenation, `self` then `rhs`.
    fn bitand(self, rhs: Self) -> Self::Output {
        let tvn = self.vertex_num;
        let ovn = rhs.vertex_num;

        let new_start = 0;
        let new_end = tvn + ovn + 1;
        let new_symbol_set = &self.symbol_set | &rhs.symbol_set;
        let new_states = self
            .states
            .values()
            .chain(rhs.states.values())
            .map(|state| (new_end, *state))
            .collect();

        let mut edges = Vec::with_capacity(self.edges.len() + rhs.edges.len() + 3);
        // new_start(0) -> self.start(1) -> ... -> self.end(tvn)
        edges.push(NFAEdge(new_start, 1, Condition::Epsilon));
        for NFAEdge(start, end, condition) in self.edges {
            edges.push(NFAEdge(start + 1, end + 1, condition));
        }
        // self.end(tvn) -> rhs.start(tvn + 1) -> ... -> rhs.end(tvn + ovn) -> new_end
        edges.push(NFAEdge(tvn, tvn + 1, Condition::Epsilon));
        for NFAEdge(start, end, condition) in rhs.edges {
            edges.push(NFAEdge(start + tvn + 1, end + tvn + 1, condition));
        }
        edges.push(NFAEdge(tvn + ovn, new_end, Condition::Epsilon));

        NFA { edges, vertex_num: new_end + 1, states: new_states, symbol_set: new_symbol_set }
    }
}

/// Joins several token NFAs under one fresh start vertex, keeping each accepting state.
#[macro_export]
macro_rules! link_nfa {
    ($($nfa: expr), *) => {
        {
            use std::collections::{HashMap, HashSet};
            use $crate::tokenizer::nfa::*;
            let mut vertex_num = 1;
            let mut edges = Vec::new();
            let mut symbol_set = HashSet::new();
            let mut states = HashMap::new();
            $(
                let offset = vertex_num;
                edges.push(NFAEdge(0, offset, Condition::Epsilon));
                for NFAEdge(start, end, condition) in $nfa.get_edges() {
                    edges.push(NFAEdge(*start + offset, *end + offset, *condition));
                }
                vertex_num += $nfa.get_vertex_num();
                symbol_set = &symbol_set | $nfa.symbol_set();
                $nfa.get_states().iter().for_each(|(v, s)| { states.insert(v + offset, *s); });
            )*
            NFA::new(edges, vertex_num, states, symbol_set)
        }
    };
}
