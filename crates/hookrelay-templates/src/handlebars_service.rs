use std::path::{Path, PathBuf};

use handlebars::{handlebars_helper, no_escape, Handlebars};
use hookrelay_config::Config;
use serde_json::Value;
use tracing::{debug, info};

use crate::{Result, TemplateError, TemplateService};

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("release", include_str!("templates/release.hbs")),
    ("push", include_str!("templates/push.hbs")),
    ("issuecomment", include_str!("templates/issuecomment.hbs")),
    ("pullrequest", include_str!("templates/pullrequest.hbs")),
];

handlebars_helper!(short_sha: |sha: Json| {
    sha.as_str().unwrap_or_default().chars().take(7).collect::<String>()
});

handlebars_helper!(first_line: |text: Json| {
    text.as_str().unwrap_or_default().lines().next().unwrap_or_default().to_string()
});

handlebars_helper!(len: |items: Json| {
    match items {
        Value::Array(a) => a.len(),
        Value::Object(o) => o.len(),
        Value::String(s) => s.chars().count(),
        _ => 0,
    }
});

handlebars_helper!(ref_name: |reference: Json| {
    let reference = reference.as_str().unwrap_or_default();
    reference
        .strip_prefix("refs/heads/")
        .or_else(|| reference.strip_prefix("refs/tags/"))
        .unwrap_or(reference)
        .to_string()
});

/// Handlebars renderer with built-in templates.
pub struct HandlebarsTemplateService {
    handlebars: Handlebars<'static>,
}

impl HandlebarsTemplateService {
    /// Build from configuration, applying overrides from `BOT_TEMPLATES_DIR` if set.
    pub fn new(config: &Config) -> Result<Self> {
        if config.templates.directory.is_empty() {
            Self::builtin()
        } else {
            Self::with_directory(&config.templates.directory)
        }
    }

    /// Build with the built-in templates only.
    pub fn builtin() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(no_escape);
        handlebars.register_helper("short_sha", Box::new(short_sha));
        handlebars.register_helper("first_line", Box::new(first_line));
        handlebars.register_helper("len", Box::new(len));
        handlebars.register_helper("ref_name", Box::new(ref_name));

        for (key, source) in BUILTIN_TEMPLATES {
            register(&mut handlebars, key, source)?;
        }

        Ok(Self { handlebars })
    }

    /// Build with the built-in templates, then override them with `<key>.hbs` files
    /// found in `directory`.
    pub fn with_directory<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let mut service = Self::builtin()?;
        let directory = directory.as_ref();

        for (key, _) in BUILTIN_TEMPLATES {
            let path = directory.join(format!("{key}.hbs"));
            if !path.is_file() {
                continue;
            }

            let source = read_template(&path)?;
            register(&mut service.handlebars, key, &source)?;
            info!(
                template = key,
                path = %path.display(),
                message = "Overriding built-in template"
            );
        }

        Ok(service)
    }
}

fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| TemplateError::ReadError {
        path: PathBuf::from(path),
        source: e,
    })
}

fn register(handlebars: &mut Handlebars<'static>, key: &str, source: &str) -> Result<()> {
    handlebars
        .register_template_string(key, source)
        .map_err(|e| TemplateError::InvalidTemplate {
            key: key.into(),
            source: Box::new(e),
        })
}

fn split_messages(rendered: &str) -> Vec<String> {
    rendered
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .map(String::from)
        .collect()
}

impl TemplateService for HandlebarsTemplateService {
    #[tracing::instrument(skip(self, payload))]
    fn render(&self, template_key: &str, payload: &Value) -> Result<Vec<String>> {
        if !self.handlebars.has_template(template_key) {
            return Err(TemplateError::UnknownTemplate {
                key: template_key.into(),
            });
        }

        let rendered = self
            .handlebars
            .render(template_key, payload)
            .map_err(|e| TemplateError::RenderError {
                key: template_key.into(),
                source: e,
            })?;

        let messages = split_messages(&rendered);
        debug!(count = messages.len(), message = "Rendered template");

        Ok(messages)
    }
}
