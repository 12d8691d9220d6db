//! HTML rendering with handlebars. Templates are compiled into the binary.

use axum::response::Html;
use handlebars::Handlebars;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
    Index,
    Test,
    Result,
    Admin,
}

impl View {
    const ALL: [View; 4] = [View::Index, View::Test, View::Result, View::Admin];

    pub(crate) fn name(self) -> &'static str {
        match self {
            View::Index => "index",
            View::Test => "test",
            View::Result => "result",
            View::Admin => "admin",
        }
    }

    fn source(self) -> &'static str {
        match self {
            View::Index => include_str!("../templates/index.hbs"),
            View::Test => include_str!("../templates/test.hbs"),
            View::Result => include_str!("../templates/result.hbs"),
            View::Admin => include_str!("../templates/admin.hbs"),
        }
    }
}

const PARTIALS: [(&str, &str); 2] = [
    ("header", include_str!("../templates/partials/header.hbs")),
    ("footer", include_str!("../templates/partials/footer.hbs")),
];

#[derive(Error, Debug)]
pub(crate) enum ViewError {
    #[error("Failed to compile template")]
    Template(#[from] handlebars::TemplateError),

    #[error("Failed to render template")]
    Render(#[from] handlebars::RenderError),
}

pub(crate) struct Views {
    registry: Handlebars<'static>,
}

impl fmt::Debug for Views {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Views").finish_non_exhaustive()
    }
}

impl Views {
    pub(crate) fn new() -> Result<Self, ViewError> {
        let mut registry = Handlebars::new();
        for (name, source) in PARTIALS {
            registry.register_partial(name, source)?;
        }
        for view in View::ALL {
            registry.register_template_string(view.name(), view.source())?;
        }
        Ok(Self { registry })
    }

    pub(crate) fn render<T: Serialize>(&self, view: View, data: &T) -> Result<Html<String>, ViewError> {
        self.registry
            .render(view.name(), data)
            .map(Html)
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn std::error::Error, view = view.name(), "failed to render view");
            })
            .map_err(ViewError::from)
    }
}
