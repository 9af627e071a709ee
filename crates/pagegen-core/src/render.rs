//! Template rendering for planned files
//!
//! Templates are compiled into the binary and rendered with minijinja in
//! strict mode: a context field a template expects but does not receive is
//! a render error, never an empty string in the output.

use crate::error::{GenError, GenResult};
use crate::naming;
use crate::plan::{FileRole, PlannedFile};
use crate::writer::RenderedFile;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// Shared snippets pulled in with `{% include %}`
const PARTIALS: &[(&str, &str)] = &[
    (
        "_entity-types.ts",
        include_str!("../templates/_entity-types.ts.jinja"),
    ),
    (
        "_mock-data.ts",
        include_str!("../templates/_mock-data.ts.jinja"),
    ),
    (
        "_fetch-loader.ts",
        include_str!("../templates/_fetch-loader.ts.jinja"),
    ),
    (
        "_list-imports.tsx",
        include_str!("../templates/_list-imports.tsx.jinja"),
    ),
    (
        "_list-body.tsx",
        include_str!("../templates/_list-body.tsx.jinja"),
    ),
];

fn role_source(role: FileRole) -> &'static str {
    match role {
        FileRole::Entity => include_str!("../templates/entity.ts.jinja"),
        FileRole::RepositoryInterface => include_str!("../templates/repository-interface.ts.jinja"),
        FileRole::RepositoryImpl => include_str!("../templates/repository-impl.ts.jinja"),
        FileRole::UseCase => include_str!("../templates/use-case.ts.jinja"),
        FileRole::PresentationComponent => {
            include_str!("../templates/presentation-component.tsx.jinja")
        }
        FileRole::ListComponent => include_str!("../templates/list-component.tsx.jinja"),
        FileRole::RoutePage => include_str!("../templates/page.tsx.jinja"),
        FileRole::PageTransition => include_str!("../templates/template.tsx.jinja"),
    }
}

/// Turns one planned file into source text
pub trait Renderer: Send + Sync {
    fn render(&self, file: &PlannedFile) -> GenResult<String>;
}

/// Renders the embedded templates
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new() -> GenResult<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_filter("ts_type", ts_type);
        env.add_filter("pascal", pascal);
        env.add_filter("js_string", js_string);
        env.add_filter("jsx_text", jsx_text);

        for &(name, source) in PARTIALS {
            env.add_template(name, source)
                .map_err(|e| GenError::Template {
                    name: name.to_string(),
                    reason: e.to_string(),
                })?;
        }
        for role in FileRole::ALL {
            env.add_template(role.template_name(), role_source(role))
                .map_err(|e| GenError::Template {
                    name: role.template_name().to_string(),
                    reason: e.to_string(),
                })?;
        }

        Ok(Self { env })
    }
}

impl Renderer for TemplateRenderer {
    fn render(&self, file: &PlannedFile) -> GenResult<String> {
        let render_error = |e: minijinja::Error| GenError::Render {
            role: file.role,
            reason: e.to_string(),
        };

        self.env
            .get_template(file.role.template_name())
            .map_err(render_error)?
            .render(&file.context)
            .map_err(render_error)
    }
}

/// Render every planned file, stopping at the first failure
pub fn render_files(
    renderer: &dyn Renderer,
    planned: &[PlannedFile],
) -> GenResult<Vec<RenderedFile>> {
    planned
        .iter()
        .map(|file| {
            Ok(RenderedFile {
                role: file.role,
                path: file.path.clone(),
                content: renderer.render(file)?,
            })
        })
        .collect()
}

/// Column type to the TypeScript type of its field
fn ts_type(kind: String) -> String {
    match kind.as_str() {
        "number" => "number",
        "boolean" => "boolean",
        "date" => "Date",
        _ => "string",
    }
    .to_string()
}

fn pascal(value: String) -> String {
    naming::to_pascal_case(&value)
}

/// Escape user text for the inside of a quoted or template JS string literal
fn js_string(value: String) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '`' => out.push_str("\\`"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape user text for JSX children and double-quoted JSX attributes
fn jsx_text(value: String) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}
