//! Sweep execution, document assembly and output writing.

use cf_project::TableProject;
use cf_tables::{FlowRegime, LatexDocument, SweepResult, execute_sweep};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::hash::document_digest;

/// One rendered document, not yet written.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    /// Output path as configured (relative paths are resolved at write time)
    pub output: PathBuf,
    pub content: String,
    pub tables: usize,
    pub rows: usize,
    pub skipped: usize,
    pub digest: String,
}

/// Outcome of writing one document.
#[derive(Debug, Clone)]
pub struct WrittenDocument {
    pub path: PathBuf,
    pub tables: usize,
    pub rows: usize,
    pub skipped: usize,
    pub bytes: usize,
    pub digest: String,
}

/// Run every sweep of `project` and group the tables into documents.
///
/// Table sets sharing an output path share one document, in the order the
/// path first appears; within a document tables follow configuration order.
pub fn build_documents(project: &TableProject) -> AppResult<Vec<GeneratedDocument>> {
    let mut groups: Vec<(PathBuf, Vec<SweepResult>)> = Vec::new();

    for table in &project.tables {
        let results = table
            .sweeps()?
            .iter()
            .map(|params| execute_sweep(table.regime, params))
            .collect::<Vec<_>>();

        match groups.iter_mut().find(|(path, _)| *path == table.output) {
            Some((_, existing)) => existing.extend(results),
            None => groups.push((table.output.clone(), results)),
        }
    }

    Ok(groups
        .into_iter()
        .map(|(output, results)| assemble(output, &results))
        .collect())
}

fn assemble(output: PathBuf, results: &[SweepResult]) -> GeneratedDocument {
    let mut doc = LatexDocument::new();
    let mut rows = 0;
    let mut skipped = 0;
    for result in results {
        doc.push_table(result);
        rows += result.rows.len();
        skipped += result.skipped.len();
    }
    let tables = doc.table_count();
    let content = doc.finish();
    let digest = document_digest(&content);

    GeneratedDocument {
        output,
        content,
        tables,
        rows,
        skipped,
        digest,
    }
}

/// Write one document under `out_dir` (absolute output paths are kept as is).
pub fn write_document(doc: &GeneratedDocument, out_dir: &Path) -> AppResult<WrittenDocument> {
    let path = out_dir.join(&doc.output);

    let write = |path: &Path| -> std::io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(doc.content.as_bytes())?;
        writer.flush()
    };

    write(&path).map_err(|source| AppError::OutputWrite {
        path: path.clone(),
        source,
    })?;

    info!(
        path = %path.display(),
        tables = doc.tables,
        rows = doc.rows,
        digest = %doc.digest,
        "document written"
    );

    Ok(WrittenDocument {
        path,
        tables: doc.tables,
        rows: doc.rows,
        skipped: doc.skipped,
        bytes: doc.content.len(),
        digest: doc.digest.clone(),
    })
}

/// Build and write every document of `project`. Stops at the first write failure.
pub fn generate(project: &TableProject, out_dir: &Path) -> AppResult<Vec<WrittenDocument>> {
    build_documents(project)?
        .iter()
        .map(|doc| write_document(doc, out_dir))
        .collect()
}

/// One evaluated point: Mach number plus `(column name, value)` pairs.
#[derive(Debug, Clone)]
pub struct PointEvaluation {
    pub regime: FlowRegime,
    pub mach: f64,
    pub gamma: f64,
    pub values: Vec<(&'static str, f64)>,
}

/// Evaluate every column of `regime` at a single point.
pub fn evaluate_point(regime: FlowRegime, mach: f64, gamma: f64) -> AppResult<PointEvaluation> {
    let row = cf_tables::evaluate_row(regime, mach, gamma).map_err(|(column, error)| {
        AppError::Relation(format!("{} at M = {}: {}", column, mach, error))
    })?;

    let values = regime
        .columns()
        .iter()
        .map(|c| c.name)
        .zip(row.values)
        .collect();

    Ok(PointEvaluation {
        regime,
        mach,
        gamma,
        values,
    })
}
