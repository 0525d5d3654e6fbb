//! The plugin contract the conversion pipeline drives.

use crate::notebook::{Notebook, Resources};

/// A single-pass notebook transform invoked by the host pipeline.
///
/// Implementations are stateless across calls: the notebook and resources
/// are handed over by value and the (possibly modified) pair is handed
/// back. Failures propagate to the pipeline, which owns reporting.
pub trait Preprocessor {
    fn name(&self) -> &str;

    fn preprocess(
        &self,
        notebook: Notebook,
        resources: Resources,
    ) -> anyhow::Result<(Notebook, Resources)>;
}
