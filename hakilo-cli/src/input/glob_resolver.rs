//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Resolve file arguments to existing file paths
///
/// Each argument is taken literally when it names a file, otherwise as a
/// glob pattern. Files come back in argument order without duplicates. An
/// argument that resolves to no file is reported as
/// [`CliError::FileNotFound`].
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let matched = resolve_one(pattern)?;
        if matched.is_empty() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }
        for path in matched {
            if !files.contains(&path) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

fn resolve_one(pattern: &str) -> Result<Vec<PathBuf>> {
    let literal = Path::new(pattern);
    if literal.is_file() {
        return Ok(vec![literal.to_path_buf()]);
    }

    // Not a file and not a valid pattern: nothing can match
    let paths = match glob(pattern) {
        Ok(paths) => paths,
        Err(e) => {
            log::debug!("{pattern} is not a glob pattern: {e}");
            return Ok(Vec::new());
        }
    };

    let mut matched = Vec::new();
    for path_result in paths {
        let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
        if path.is_file() {
            matched.push(path);
        }
    }
    log::debug!("Pattern {pattern} matched {} file(s)", matched.len());

    Ok(matched)
}
