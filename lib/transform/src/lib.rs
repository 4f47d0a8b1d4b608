mod render;
mod sourcemap;
mod transformer;

pub use render::*;
pub use sourcemap::*;
pub use transformer::*;

use ariadne::Report;
use evaluator::{Environment, EvalError, Evaluator};
use parser::ParseError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Eval(#[from] EvalError),
}

impl TransformError {
    pub fn into_report(&mut self) -> Report {
        match self {
            TransformError::Parse(err) => err.into_report(),
            TransformError::Eval(err) => err.into_report(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Name for the `file`/`sources` fields of the map, `"source.js"` when absent.
    pub filename: Option<String>,
    /// Compile each distinct condition once per call.
    pub expression_cache: bool,
}

impl Default for TransformOptions {
    fn default() -> TransformOptions {
        TransformOptions {
            filename: None,
            expression_cache: true,
        }
    }
}

/**
 * Rewrites conditional directive blocks in the source.
 *
 * Returns Ok(None) when the source has no directive lines at all,
 * otherwise the rewritten code plus a hires source map covering the
 * deletions. Malformed block structure and broken or unanswerable
 * conditions come back as errors.
 */
pub fn process(
    source: &str,
    variables: &Environment,
    options: TransformOptions,
) -> Result<Option<Transformed>, TransformError> {
    // every directive line carries a '#', its absence proves there is
    // nothing to do without scanning line by line
    if !source.contains('#') {
        return Ok(None);
    }

    let lines = parser::scan(source);
    if lines.is_empty() {
        return Ok(None);
    }

    let tree = parser::build(lines)?;
    let mut evaluator = Evaluator::with_cache(options.expression_cache);
    let drops = collect_drops(&tree, &mut evaluator, variables)?;

    Ok(Some(render(source, drops, options.filename.as_deref())))
}
