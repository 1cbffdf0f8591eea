/*!
A circuit of conjunctions over (possibly negated) inputs, used to build partial interpolants.

Each node of a circuit is either the constant false, an input (a variable), or the conjunction of two edges.
An [Edge] is a node together with a flag for negation, and so a disjunction is the negation of a conjunction of negations.

- Nodes are stored in an arena, and every node is stored after the nodes it refers to.
  So, the order of nodes is a topological order.
- Conjunctions are hashed by their edges, so building the same conjunction twice returns the same edge.
- Constants are folded, so a conjunction never refers to a constant.

```rust
# use otter_craig::interpolant::circuit::{Circuit, Edge};
let mut circuit = Circuit::default();

let p = circuit.input(1);
let q = circuit.input(2);

let p_or_q = circuit.or(p, q);
assert_eq!(circuit.or(q, p), p_or_q);
assert_eq!(circuit.and(p_or_q, Edge::TRUE), p_or_q);
assert_eq!(circuit.and(p, !p), Edge::FALSE);

assert!(circuit.evaluate(p_or_q, |atom| atom == 2));
assert!(!circuit.evaluate(p_or_q, |_| false));
```
*/

use std::collections::{BTreeSet, HashMap};

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// An edge to a node of a circuit, possibly negated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(u32);

impl Edge {
    /// The constant false.
    pub const FALSE: Edge = Edge(0);

    /// The constant true.
    pub const TRUE: Edge = Edge(1);

    fn new(node: usize, negated: bool) -> Self {
        Edge(((node as u32) << 1) | negated as u32)
    }

    /// The index of the node of the edge.
    pub fn node(&self) -> usize {
        (self.0 >> 1) as usize
    }

    /// Whether the edge is negated.
    pub fn is_negated(&self) -> bool {
        self.0 & 1 == 1
    }

    /// Whether the edge is to a constant.
    pub fn is_constant(&self) -> bool {
        self.node() == 0
    }

    /// The edge, with `value` as a constant.
    pub fn constant(value: bool) -> Self {
        match value {
            true => Self::TRUE,
            false => Self::FALSE,
        }
    }
}

impl std::ops::Not for Edge {
    type Output = Edge;

    fn not(self) -> Self::Output {
        Edge(self.0 ^ 1)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.is_constant(), self.is_negated()) {
            (true, false) => write!(f, "⊥"),
            (true, true) => write!(f, "⊤"),
            (false, false) => write!(f, "n{}", self.node()),
            (false, true) => write!(f, "¬n{}", self.node()),
        }
    }
}

/// A node of a circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node {
    /// The constant false, always the first node.
    False,

    /// An input, for the variable.
    Input(Atom),

    /// The conjunction of two edges.
    And(Edge, Edge),
}

/// A circuit of conjunctions over (possibly negated) inputs.
#[derive(Clone, Debug)]
pub struct Circuit {
    nodes: Vec<Node>,

    /// Edges to inputs, by variable.
    inputs: HashMap<Atom, Edge>,

    /// Edges to conjunctions, by the ordered pair of conjuncts.
    conjunctions: HashMap<(Edge, Edge), Edge>,
}

impl Default for Circuit {
    fn default() -> Self {
        Circuit {
            nodes: vec![Node::False],
            inputs: HashMap::default(),
            conjunctions: HashMap::default(),
        }
    }
}

impl Circuit {
    /// An edge to the input for `atom`.
    pub fn input(&mut self, atom: Atom) -> Edge {
        if let Some(edge) = self.inputs.get(&atom) {
            return *edge;
        }
        let edge = Edge::new(self.nodes.len(), false);
        self.nodes.push(Node::Input(atom));
        self.inputs.insert(atom, edge);
        edge
    }

    /// An edge to the input for the atom of `literal`, negated if the literal has negative polarity.
    pub fn literal(&mut self, literal: CLiteral) -> Edge {
        let edge = self.input(literal.atom());
        match literal.polarity() {
            true => edge,
            false => !edge,
        }
    }

    /// An edge to the conjunction of `a` and `b`.
    pub fn and(&mut self, a: Edge, b: Edge) -> Edge {
        if a == Edge::FALSE || b == Edge::FALSE || a == !b {
            return Edge::FALSE;
        }
        if a == Edge::TRUE || a == b {
            return b;
        }
        if b == Edge::TRUE {
            return a;
        }

        let pair = if a < b { (a, b) } else { (b, a) };
        if let Some(edge) = self.conjunctions.get(&pair) {
            return *edge;
        }
        let edge = Edge::new(self.nodes.len(), false);
        self.nodes.push(Node::And(pair.0, pair.1));
        self.conjunctions.insert(pair, edge);
        edge
    }

    /// An edge to the disjunction of `a` and `b`.
    pub fn or(&mut self, a: Edge, b: Edge) -> Edge {
        !self.and(!a, !b)
    }

    /// The node at `index`, if any.
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// A count of nodes, including the constant.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the circuit has only the constant node.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// The indices of the nodes reachable from `edge`, excluding the constant, in topological order.
    pub fn cone(&self, edge: Edge) -> Vec<usize> {
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![edge.node()];
        let mut cone = Vec::default();

        while let Some(index) = stack.pop() {
            if index == 0 || seen[index] {
                continue;
            }
            seen[index] = true;
            cone.push(index);
            if let Node::And(a, b) = self.nodes[index] {
                stack.push(a.node());
                stack.push(b.node());
            }
        }

        cone.sort_unstable();
        cone
    }

    /// The variables of the inputs reachable from `edge`.
    pub fn atoms(&self, edge: Edge) -> BTreeSet<Atom> {
        self.cone(edge)
            .into_iter()
            .filter_map(|index| match self.nodes[index] {
                Node::Input(atom) => Some(atom),
                _ => None,
            })
            .collect()
    }

    /// The value of `edge` on the valuation given by `value_of`.
    pub fn evaluate(&self, edge: Edge, value_of: impl Fn(Atom) -> bool) -> bool {
        let mut values = vec![false; edge.node() + 1];
        for index in self.cone(edge) {
            values[index] = match self.nodes[index] {
                Node::False => false,
                Node::Input(atom) => value_of(atom),
                Node::And(a, b) => {
                    (values[a.node()] ^ a.is_negated()) && (values[b.node()] ^ b.is_negated())
                }
            };
        }
        values[edge.node()] ^ edge.is_negated()
    }

    /// A circuit with only the nodes reachable from `edge`, and the edge in the circuit.
    pub fn extract(&self, edge: Edge) -> (Circuit, Edge) {
        let mut extracted = Circuit::default();
        let mut map: HashMap<usize, Edge> = HashMap::default();
        map.insert(0, Edge::FALSE);

        let relocate = |map: &HashMap<usize, Edge>, edge: Edge| -> Edge {
            let base = map.get(&edge.node()).copied().unwrap_or(Edge::FALSE);
            match edge.is_negated() {
                true => !base,
                false => base,
            }
        };

        for index in self.cone(edge) {
            let fresh = match self.nodes[index] {
                Node::False => Edge::FALSE,
                Node::Input(atom) => extracted.input(atom),
                Node::And(a, b) => {
                    let a = relocate(&map, a);
                    let b = relocate(&map, b);
                    extracted.and(a, b)
                }
            };
            map.insert(index, fresh);
        }

        let output = relocate(&map, edge);
        (extracted, output)
    }
}
