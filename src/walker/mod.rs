mod tree;
mod types;

pub use tree::{collect_sources, find_collisions, find_collisions_with, is_case_insensitive};
pub use types::{FileReport, FileSummary, ReportSummary, SourceFile, TreeReport, WalkOptions};

use crate::errors::{ConfigError, ExtractorError, ExtractorResult};
use crate::pipeline::{extract_file, ExtractOptions};
use log::{info, warn};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Carve every file under `input_root` into a mirrored tree under `output_root`.
///
/// Fails only when `input_root` is missing or the worker pool cannot be built.
/// Per-file failures are recorded in the returned report and do not stop the
/// walk.
pub fn extract_tree(
    input_root: &Path,
    output_root: &Path,
    options: &ExtractOptions,
    walk: &WalkOptions,
) -> ExtractorResult<TreeReport> {
    let sources = collect_sources(input_root, Some(output_root))?;
    info!("Found {} files to scan", sources.len());

    let collisions = find_collisions(&sources, output_root);
    let process = |(index, source): (usize, &SourceFile)| {
        process_source(index, source, output_root, options, &collisions)
    };

    let files: Vec<FileReport> = if walk.jobs == 1 {
        sources.iter().enumerate().map(process).collect()
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(walk.jobs)
            .build()
            .map_err(|e| ConfigError::new(format!("failed to build worker pool: {}", e)))?;
        // Indexed collect keeps walk order.
        pool.install(|| sources.par_iter().enumerate().map(process).collect())
    };

    Ok(TreeReport {
        input_root: input_root.to_path_buf(),
        output_root: output_root.to_path_buf(),
        files,
    })
}

fn process_source(
    index: usize,
    source: &SourceFile,
    output_root: &Path,
    options: &ExtractOptions,
    collisions: &HashMap<usize, PathBuf>,
) -> FileReport {
    info!("Processing {}", source.path.display());
    let result = match collisions.get(&index) {
        Some(dest) => Err(ExtractorError::from(ConfigError::new(format!(
            "destination {} is shared with another source file",
            dest.display()
        )))),
        None => extract_file(&source.path, &source.output_base(output_root), options),
    };
    if let Err(e) = &result {
        warn!("Skipping {}: {}", source.path.display(), e);
    }
    FileReport {
        source: source.path.clone(),
        result,
    }
}
