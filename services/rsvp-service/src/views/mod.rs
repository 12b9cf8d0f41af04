use serde::Serialize;
use tera::{Context, Tera};

pub const INDEX: &str = "index.html";
pub const RSVP: &str = "rsvp.html";
pub const SUBMIT: &str = "submit.html";
pub const MULTIPLE_INVITATIONS: &str = "multiple-invitations.html";
pub const THANK_YOU: &str = "thankyou.html";
pub const ERROR: &str = "error.html";

/// Named HTML views backed by the templates directory.
#[derive(Clone)]
pub struct ViewRenderer {
    tera: Tera,
}

impl ViewRenderer {
    pub fn from_dir(template_dir: &str) -> Result<Self, tera::Error> {
        let pattern = format!("{}/**/*.html", template_dir.trim_end_matches('/'));
        let tera = Tera::new(&pattern)?;
        tracing::debug!("Loaded {} templates from {}", tera.get_template_names().count(), template_dir);
        Ok(Self { tera })
    }

    pub fn render<T: Serialize>(&self, view: &str, data: &T) -> Result<String, tera::Error> {
        let context = Context::from_serialize(data)?;
        self.tera.render(view, &context)
    }
}

#[cfg(test)]
pub(crate) fn test_renderer() -> ViewRenderer {
    ViewRenderer::from_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/templates")).unwrap()
}
