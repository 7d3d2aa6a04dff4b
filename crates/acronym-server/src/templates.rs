//! HTML page rendering

use minijinja::Environment;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::error::ServerError;

const INDEX_TEMPLATE: &str = "index.html";
const BUILTIN_INDEX: &str = include_str!("../templates/index.html");

/// Values available to `index.html`
#[derive(Debug, Default, Serialize)]
pub struct IndexPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Templates compiled into the binary
    pub fn builtin() -> Result<Self, ServerError> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, BUILTIN_INDEX)?;
        Ok(Self { env })
    }

    /// Use `<dir>/index.html` when present, the built-in page otherwise
    pub fn load(dir: &Path) -> Result<Self, ServerError> {
        let path = dir.join(INDEX_TEMPLATE);
        if !path.is_file() {
            info!("No {} found, using built-in page", path.display());
            return Self::builtin();
        }

        let source = std::fs::read_to_string(&path)?;
        let mut env = Environment::new();
        env.add_template_owned(INDEX_TEMPLATE, source)?;
        info!("Loaded page template from {}", path.display());
        Ok(Self { env })
    }

    pub fn render_index(&self, page: &IndexPage) -> Result<String, ServerError> {
        let html = self.env.get_template(INDEX_TEMPLATE)?.render(page)?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_has_both_forms() -> Result<(), ServerError> {
        let html = Templates::builtin()?.render_index(&IndexPage::default())?;

        assert!(html.contains(r#"action="/search""#));
        assert!(html.contains(r#"name="newAcronym""#));
        assert!(!html.contains("not found"));
        Ok(())
    }

    #[test]
    fn test_result_and_not_found_states() -> Result<(), ServerError> {
        let templates = Templates::builtin()?;

        let found = templates.render_index(&IndexPage {
            acronym: Some("API".to_string()),
            result: Some("Application Programming Interface".to_string()),
        })?;
        assert!(found.contains("Application Programming Interface"));

        let missing = templates.render_index(&IndexPage {
            acronym: Some("HTTP".to_string()),
            result: None,
        })?;
        assert!(missing.contains("Acronym 'HTTP' not found"));
        Ok(())
    }

    #[test]
    fn test_values_are_html_escaped() -> Result<(), ServerError> {
        let html = Templates::builtin()?.render_index(&IndexPage {
            acronym: Some("<b>".to_string()),
            result: None,
        })?;
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("<b>"));
        Ok(())
    }

    #[test]
    fn test_template_dir_override() -> Result<(), ServerError> {
        let dir = tempfile::tempdir()?;
        std::fs::write(
            dir.path().join("index.html"),
            "custom {{ acronym | default('none') }}",
        )?;

        let html = Templates::load(dir.path())?.render_index(&IndexPage::default())?;
        assert_eq!(html, "custom none");
        Ok(())
    }

    #[test]
    fn test_missing_template_dir_falls_back_to_builtin() -> Result<(), ServerError> {
        let dir = tempfile::tempdir()?;
        let html = Templates::load(&dir.path().join("absent"))?.render_index(&IndexPage::default())?;
        assert!(html.contains("Acronym Lookup"));
        Ok(())
    }
}
