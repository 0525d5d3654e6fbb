//! Appends a `<Binder filepath="..." />` component cell.
//!
//! The published site renders this component as a launch-on-Binder link for
//! the notebook being converted. The filepath is rebuilt from the output
//! `path` and notebook `name` the pipeline carries in its resources.

use anyhow::Context;
use handlebars::{no_escape, Handlebars};
use log::debug;
use once_cell::sync::Lazy;
use serde_json::json;

use crate::notebook::{Cell, Notebook, Resources};
use crate::preprocess::Preprocessor;

const BINDER_TEMPLATE: &str = r#"<Binder filepath="{{filepath}}" />"#;

static TEMPLATES: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut handlebars = Handlebars::new();
    // The filepath lands in an attribute consumed verbatim by the site
    // component, not in HTML text.
    handlebars.register_escape_fn(no_escape);
    handlebars
        .register_template_string("binder", BINDER_TEMPLATE)
        .expect("binder template is valid");
    handlebars
});

/// Render the Binder component markup for a notebook at `path`/`name`.
pub fn binder_component(path: &str, name: &str) -> anyhow::Result<String> {
    let filepath = format!("{path}/{name}.ipynb");
    Ok(TEMPLATES.render("binder", &json!({ "filepath": filepath }))?)
}

#[derive(Default)]
pub struct AddBinderComponent;

impl AddBinderComponent {
    pub(crate) const NAME: &'static str = "add-binder-component";

    /// Create a new `AddBinderComponent`.
    pub fn new() -> Self {
        AddBinderComponent
    }
}

impl Preprocessor for AddBinderComponent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn preprocess(
        &self,
        mut notebook: Notebook,
        resources: Resources,
    ) -> anyhow::Result<(Notebook, Resources)> {
        let path = resources
            .metadata
            .get("path")
            .and_then(|v| v.as_str())
            .context("resources metadata has no `path` entry")?;
        let name = resources
            .metadata
            .get("name")
            .and_then(|v| v.as_str())
            .context("resources metadata has no `name` entry")?;

        let source = binder_component(path, name)?;
        debug!("appending binder cell: {source}");
        notebook.cells.push(Cell::markdown(source));
        Ok((notebook, resources))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use rstest::*;

    #[fixture]
    fn lesson_resources() -> Resources {
        serde_json::from_value(json!({
            "metadata": {"path": "notebooks", "name": "lesson1"}
        }))
        .unwrap()
    }

    #[rstest]
    fn test_binder_component_markup() -> Result<()> {
        let markup = binder_component("notebooks", "lesson1")?;
        assert_eq!(markup, r#"<Binder filepath="notebooks/lesson1.ipynb" />"#);
        Ok(())
    }

    #[rstest]
    fn test_filepath_is_not_escaped() -> Result<()> {
        let markup = binder_component("a&b", "c d")?;
        assert_eq!(markup, r#"<Binder filepath="a&b/c d.ipynb" />"#);
        Ok(())
    }

    #[rstest]
    fn test_appends_exactly_one_markdown_cell(lesson_resources: Resources) -> Result<()> {
        let notebook = Notebook::new(vec![Cell::code("x = 1")]);
        let (out, resources) =
            AddBinderComponent::new().preprocess(notebook, lesson_resources.clone())?;
        assert_eq!(out.cells.len(), 2);
        assert_eq!(
            out.cells[1],
            Cell::markdown(r#"<Binder filepath="notebooks/lesson1.ipynb" />"#)
        );
        assert!(resources == lesson_resources);
        Ok(())
    }

    #[rstest]
    fn test_appends_to_empty_notebook(lesson_resources: Resources) -> Result<()> {
        let (out, _) =
            AddBinderComponent::new().preprocess(Notebook::default(), lesson_resources)?;
        assert_eq!(out.cells.len(), 1);
        Ok(())
    }

    #[rstest]
    #[case::no_path(json!({"name": "lesson1"}), "path")]
    #[case::no_name(json!({"path": "notebooks"}), "name")]
    #[case::non_string_path(json!({"path": 3, "name": "lesson1"}), "path")]
    fn test_missing_metadata_is_an_error(
        #[case] metadata: serde_json::Value,
        #[case] key: &str,
    ) -> Result<()> {
        let resources: Resources = serde_json::from_value(json!({ "metadata": metadata }))?;
        let err = AddBinderComponent::new()
            .preprocess(Notebook::default(), resources)
            .unwrap_err();
        assert!(err.to_string().contains(key));
        Ok(())
    }
}
