//! HTML templates
//!
//! Pages are minijinja templates. Every page extends `layout.html`, which
//! renders the member navigation when the context carries a `username` and
//! the guest navigation otherwise. Templates named `*.html` are auto-escaped.

use std::sync::LazyLock;

use minijinja::{Environment, Value, context};

use crate::error::app_error::{AppError, AppResult};

const LAYOUT: &str = include_str!("../templates/layout.html");
const ERROR_PAGE: &str = include_str!("../templates/error.html");

static SHARED: LazyLock<Templates> = LazyLock::new(|| Templates::new(&[]));

/// A crate's page templates together with the shared layout
pub struct Templates {
    env: Result<Environment<'static>, minijinja::Error>,
}

impl Templates {
    /// Register `(name, source)` pairs next to the layout.
    ///
    /// A template that fails to parse is logged here and reported again by
    /// every [`Templates::render`] call.
    pub fn new(pages: &[(&'static str, &'static str)]) -> Self {
        let env = Self::build(pages);
        if let Err(e) = &env {
            tracing::error!(error = %e, "Template setup failed");
        }
        Self { env }
    }

    fn build(
        pages: &[(&'static str, &'static str)],
    ) -> Result<Environment<'static>, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("layout.html", LAYOUT)?;
        env.add_template("error.html", ERROR_PAGE)?;
        for &(name, source) in pages {
            env.add_template(name, source)?;
        }
        Ok(env)
    }

    pub fn render(&self, name: &str, ctx: Value) -> AppResult<String> {
        let env = self
            .env
            .as_ref()
            .map_err(|e| AppError::internal(format!("Template setup failed: {e}")))?;
        env.get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(|e| AppError::internal("Template rendering failed").with_source(e))
    }
}

/// The error page: `kind` as heading, `detail` as message
pub fn error_page(kind: &str, detail: &str) -> AppResult<String> {
    SHARED.render("error.html", context! { kind => kind, detail => detail })
}
