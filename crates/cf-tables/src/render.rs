//! LaTeX rendering of sweep results.
//!
//! Tables use the `longtable` environment: the header block is emitted once
//! for the first page (`\endfirsthead`) and once for continuation pages
//! (`\endhead`), and LaTeX repeats the latter at every page break.

use crate::regime::{FlowRegime, MACH_PRECISION};
use crate::sweep_executor::{FlowRow, SweepResult};
use cf_core::Real;

/// Fixed document preamble.
pub const PREAMBLE: &str = r"\documentclass{article}
\usepackage{longtable}  % Allows tables to continue across pages
\usepackage{tabularx}   % Adjusts column widths
\usepackage{geometry}   % Sets 1-inch margins
\usepackage{booktabs}   % Improve table formatting
\geometry{margin=1in}   % 1-inch margins
\begin{document}
";

/// Document terminator.
pub const END_DOCUMENT: &str = r"\end{document}";

/// Accumulates tables into one LaTeX document with a single preamble.
#[derive(Debug, Clone, Default)]
pub struct LatexDocument {
    body: String,
    tables: usize,
}

impl LatexDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section and table for `result`.
    pub fn push_table(&mut self, result: &SweepResult) {
        if self.tables > 0 {
            self.body.push('\n');
        }
        self.body.push_str(&render_table(result));
        self.tables += 1;
    }

    pub fn table_count(&self) -> usize {
        self.tables
    }

    /// Close the document and return its full text.
    pub fn finish(self) -> String {
        let mut out = String::with_capacity(PREAMBLE.len() + self.body.len() + 32);
        out.push_str(PREAMBLE);
        out.push_str(&self.body);
        out.push('\n');
        out.push_str(END_DOCUMENT);
        out
    }
}

/// Render a complete document around a sequence of results.
pub fn render_document<'a, I>(results: I) -> String
where
    I: IntoIterator<Item = &'a SweepResult>,
{
    let mut doc = LatexDocument::new();
    for result in results {
        doc.push_table(result);
    }
    doc.finish()
}

/// Section heading, longtable with both header blocks, rows, caption and terminator.
pub fn render_table(result: &SweepResult) -> String {
    let regime = result.regime;
    let gamma = format_gamma(result.gamma());
    let header = header_block(regime);

    let mut out = String::new();
    out.push_str(&format!(
        "\\section*{{{} for $\\gamma = {}$}}\n",
        regime.title(),
        gamma
    ));
    out.push_str(&format!(
        "\\begin{{longtable}}{{{}}}\n\n",
        "c".repeat(regime.column_count())
    ));
    out.push_str(&header);
    out.push_str("\\endfirsthead\n");
    out.push_str(&format!(
        "\\multicolumn{{{}}}{{c}}{{~}} \\\\\n",
        regime.column_count()
    ));
    out.push_str(&header);
    out.push_str("\\endhead\n");

    for row in &result.rows {
        out.push_str(&format_row(regime, row));
    }

    out.push_str("\\bottomrule\n");
    out.push_str(&format!(
        "\\caption{{{} for $\\gamma = {}$.}}\n",
        regime.caption(),
        gamma
    ));
    out.push_str("\\end{longtable}\n");
    out
}

/// `\toprule`, header cells, `\midrule`.
pub fn header_block(regime: FlowRegime) -> String {
    let cells: Vec<&str> = std::iter::once(regime.mach_header())
        .chain(regime.columns().iter().map(|c| c.header))
        .collect();
    format!("\\toprule\n{} \\\\\n\\midrule\n", cells.join(" & "))
}

/// One table row terminated by `\\`.
pub fn format_row(regime: FlowRegime, row: &FlowRow) -> String {
    let mut cells = Vec::with_capacity(row.values.len() + 1);
    cells.push(format!("{:.*}", MACH_PRECISION, row.mach));
    for (value, col) in row.values.iter().zip(regime.columns()) {
        cells.push(format!("{:.*}", col.precision, value));
    }
    format!("{} \\\\\n", cells.join(" & "))
}

/// Shortest decimal form of γ (1.4, 1.33, ...).
pub fn format_gamma(gamma: Real) -> String {
    format!("{gamma}")
}
