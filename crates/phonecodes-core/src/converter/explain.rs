use serde::Serialize;

use crate::registry::Conversion;

/// Diagnostic trace of one conversion.
#[derive(Debug, Serialize)]
pub struct Explanation {
    pub input: String,
    pub conversion: String,
    /// Input after case folding, as seen by the lattice
    pub segmented_input: String,
    pub char_count: usize,
    pub total_cost: u64,
    pub steps: Vec<ExplainStep>,
    /// Symbols after tone/stress reattachment; `None` without a tone configuration
    pub reattached: Option<Vec<String>>,
    pub text: String,
}

/// One symbol on the best path.
#[derive(Debug, Serialize)]
pub struct ExplainStep {
    /// Start position (char index, inclusive)
    pub start: usize,
    /// End position (char index, exclusive)
    pub end: usize,
    pub source: String,
    pub output: String,
    pub translated: bool,
    /// Cumulative path cost at `end`
    pub cost: u64,
}

pub fn explain(input: &str, conversion: Conversion) -> Explanation {
    let folded = conversion.fold_case(input);
    let lattice = conversion.lattice(&folded);
    let translated = conversion.translate(&lattice);

    let steps: Vec<ExplainStep> = lattice
        .best_path()
        .into_iter()
        .map(|end| {
            let node = &lattice.nodes[end];
            ExplainStep {
                start: node.prev,
                end,
                source: lattice.source_span(end).to_string(),
                output: node.symbol.to_string(),
                translated: node.translated,
                cost: node.cost,
            }
        })
        .collect();
    let text = translated.symbols().concat().trim().to_string();

    Explanation {
        input: input.to_string(),
        conversion: format!("{:?}", conversion),
        segmented_input: folded.to_string(),
        char_count: lattice.char_count,
        total_cost: lattice.total_cost(),
        steps,
        reattached: translated.reattached,
        text,
    }
}

/// Human-readable rendering of an [`Explanation`].
pub fn format_text(result: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== {} for \"{}\" ({} chars, cost {}) ===\n",
        result.conversion, result.segmented_input, result.char_count, result.total_cost,
    ));
    for step in &result.steps {
        let mark = if step.translated { ' ' } else { '?' };
        out.push_str(&format!(
            "  {}[{},{}] {:<8} -> {:<8} cost={}\n",
            mark,
            step.start,
            step.end,
            format!("{:?}", step.source),
            format!("{:?}", step.output),
            step.cost,
        ));
    }

    if let Some(ref symbols) = result.reattached {
        let quoted: Vec<String> = symbols.iter().map(|s| format!("{s:?}")).collect();
        out.push_str(&format!("\n  reattached: [{}]\n", quoted.join(", ")));
    }
    out.push_str(&format!("\n  => {}\n", result.text));
    out
}
