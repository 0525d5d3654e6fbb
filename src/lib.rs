//! # `nb-course-preprocess`
//!
//! Preprocessors that prepare course notebooks for publication, meant to be
//! driven by a notebook-conversion pipeline. Two transforms are provided:
//!
//! - [`RemoveExerciseCells`] cuts the notebook off at the first
//!   `## Exercise` markdown heading and drops empty code cells, so the
//!   published material stops where the exercises begin.
//! - [`AddBinderComponent`] appends a markdown cell holding a
//!   `<Binder filepath="..." />` component that the site renders as a
//!   launch link for the source notebook.
//!
//! Both implement the [`Preprocessor`] contract: a stateless, single-pass
//! transform taking the notebook and the pipeline's resources by value and
//! handing the pair back.
//!
//! ## Basic Usage
//!
//! ```rust
//! use nb_course_preprocess::{
//!     AddBinderComponent, Notebook, Preprocessor, RemoveExerciseCells, Resources,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let notebook: Notebook = serde_json::from_value(serde_json::json!({
//!     "cells": [
//!         {"cell_type": "markdown", "source": "# Lesson\n## Exercise"},
//!     ]
//! }))?;
//! let resources: Resources = serde_json::from_value(serde_json::json!({
//!     "metadata": {"path": "notebooks", "name": "lesson1"}
//! }))?;
//!
//! let (notebook, resources) = RemoveExerciseCells::new().preprocess(notebook, resources)?;
//! let (notebook, _) = AddBinderComponent::new().preprocess(notebook, resources)?;
//! assert_eq!(notebook.cells.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod add_binder_component;
pub mod notebook;
pub mod preprocess;
pub mod remove_exercise_cells;

pub use add_binder_component::{binder_component, AddBinderComponent};
pub use notebook::{Cell, Notebook, Resources};
pub use preprocess::Preprocessor;
pub use remove_exercise_cells::RemoveExerciseCells;
