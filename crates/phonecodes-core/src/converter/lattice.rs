use tracing::{debug, debug_span};

use crate::settings::{settings, CostSettings};
use crate::table::SymbolTable;

/// Best arrival at one input position.
///
/// `nodes[n]` covers the first `n` input characters; the symbol emitted to
/// reach it spans chars `prev..n`. Node 0 is the start of input and has no
/// symbol.
#[derive(Debug, Clone, Copy)]
pub struct LatticeNode<'a> {
    /// Minimum cumulative cost over all decompositions ending exactly here
    pub cost: u64,
    /// Position of the predecessor node (char index)
    pub prev: usize,
    /// Table value on a hit, or the single untranslated input character
    pub symbol: &'a str,
    /// Whether `symbol` came from the table
    pub translated: bool,
}

/// Minimum-cost segmentation lattice over an input string.
pub struct Lattice<'a> {
    pub input: &'a str,
    /// nodes[n] = best arrival after n chars; len = char_count + 1
    pub nodes: Vec<LatticeNode<'a>>,
    pub char_count: usize,
    /// Byte offset of each char position, plus `input.len()` at the end
    byte_offsets: Vec<usize>,
}

/// Result of the backward trace: one entry per emitted symbol, left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    pub symbols: Vec<String>,
    /// hits[i] is false when symbols[i] is an untranslated input character
    pub hits: Vec<bool>,
}

/// Fill the lattice left to right.
///
/// Each position starts from the pessimistic arrival (previous char passed
/// through at `oov_cost`), then every table key ending here is tried in
/// ascending length. A key replaces the current arrival only when strictly
/// cheaper, so at equal cost the shorter key found first wins.
pub fn build_lattice<'a>(
    table: &'a SymbolTable,
    input: &'a str,
    cost: CostSettings,
) -> Lattice<'a> {
    let mut byte_offsets: Vec<usize> = input.char_indices().map(|(i, _)| i).collect();
    let char_count = byte_offsets.len();
    byte_offsets.push(input.len());
    let _span = debug_span!("build_lattice", char_count).entered();

    let symbol_cost = u64::from(cost.symbol_cost);
    let oov_cost = u64::from(cost.oov_cost);
    let max_key = table.max_key_chars();

    let mut nodes = Vec::with_capacity(char_count + 1);
    nodes.push(LatticeNode {
        cost: 0,
        prev: 0,
        symbol: "",
        translated: false,
    });

    for n in 1..=char_count {
        let end = byte_offsets[n];
        let mut best = LatticeNode {
            cost: nodes[n - 1].cost + oov_cost,
            prev: n - 1,
            symbol: &input[byte_offsets[n - 1]..end],
            translated: false,
        };
        for m in 1..=n.min(max_key) {
            let key = &input[byte_offsets[n - m]..end];
            if let Some(value) = table.get(key) {
                let candidate = nodes[n - m].cost + symbol_cost;
                if candidate < best.cost {
                    best = LatticeNode {
                        cost: candidate,
                        prev: n - m,
                        symbol: value,
                        translated: true,
                    };
                }
            }
        }
        nodes.push(best);
    }

    debug!(total_cost = nodes[char_count].cost);
    Lattice {
        input,
        nodes,
        char_count,
        byte_offsets,
    }
}

impl<'a> Lattice<'a> {
    /// Positions on the best path, from the first symbol's end to `char_count`.
    pub fn best_path(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut n = self.char_count;
        while n > 0 {
            path.push(n);
            n = self.nodes[n].prev;
        }
        path.reverse();
        path
    }

    /// Source text consumed by the symbol ending at position `n`.
    pub fn source_span(&self, n: usize) -> &'a str {
        let prev = self.nodes[n].prev;
        &self.input[self.byte_offsets[prev]..self.byte_offsets[n]]
    }

    pub fn total_cost(&self) -> u64 {
        self.nodes[self.char_count].cost
    }

    /// Walk predecessor links from the end and emit symbols in input order.
    pub fn backtrace(&self) -> Segmentation {
        let _span = debug_span!("backtrace", char_count = self.char_count).entered();
        let mut symbols = Vec::new();
        let mut hits = Vec::new();
        let mut n = self.char_count;
        while n > 0 {
            let node = &self.nodes[n];
            symbols.push(node.symbol.to_string());
            hits.push(node.translated);
            n = node.prev;
        }
        symbols.reverse();
        hits.reverse();
        let misses = hits.iter().filter(|h| !**h).count();
        debug!(symbols = symbols.len(), misses);
        Segmentation { symbols, hits }
    }
}

/// Translate `input` into the cheapest sequence of table symbols, with the
/// costs from [`settings()`].
pub fn segment_translate(input: &str, table: &SymbolTable) -> Segmentation {
    segment_translate_with(input, table, settings().cost)
}

pub fn segment_translate_with(
    input: &str,
    table: &SymbolTable,
    cost: CostSettings,
) -> Segmentation {
    if input.is_empty() {
        return Segmentation::default();
    }
    build_lattice(table, input, cost).backtrace()
}
