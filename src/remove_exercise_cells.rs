//! Truncates a notebook at the first exercise heading.
//!
//! Course notebooks keep their exercises at the end, introduced by an
//! `## Exercise` markdown heading. The published (solution-free) variant is
//! everything before that heading, with empty code cells dropped as well.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::notebook::{Cell, Notebook, Resources};
use crate::preprocess::Preprocessor;

// Matches the heading prefix only, so both "## Exercise" and the plural
// "## Exercices" headings used across the course material are caught.
static EXERCISE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"## Exerc").unwrap());

#[derive(Default)]
pub struct RemoveExerciseCells;

impl RemoveExerciseCells {
    pub(crate) const NAME: &'static str = "remove-exercise-cells";

    /// Create a new `RemoveExerciseCells`.
    pub fn new() -> Self {
        RemoveExerciseCells
    }
}

impl Preprocessor for RemoveExerciseCells {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn preprocess(
        &self,
        mut notebook: Notebook,
        resources: Resources,
    ) -> anyhow::Result<(Notebook, Resources)> {
        let total = notebook.cells.len();
        let mut kept: Vec<Cell> = Vec::with_capacity(total);

        for cell in std::mem::take(&mut notebook.cells) {
            match cell {
                Cell::Markdown {
                    mut source,
                    metadata,
                } => {
                    let marker = EXERCISE_MARKER.find(&source).map(|m| m.start());
                    match marker {
                        Some(idx) => {
                            // A heading mid-cell splits the cell; a cell that
                            // *starts* with the heading is kept whole. Either
                            // way the scan ends here.
                            if idx > 0 {
                                source.truncate(idx);
                            }
                            debug!(
                                "exercise heading found, keeping {} of {} cells",
                                kept.len() + 1,
                                total
                            );
                            kept.push(Cell::Markdown { source, metadata });
                            break;
                        }
                        None => kept.push(Cell::Markdown { source, metadata }),
                    }
                }
                Cell::Code { source, metadata } => {
                    if source.is_empty() {
                        debug!("dropping empty code cell");
                        continue;
                    }
                    kept.push(Cell::Code { source, metadata });
                }
                other => kept.push(other),
            }
        }

        notebook.cells = kept;
        Ok((notebook, resources))
    }
}
