// src/command/template.rs

//! Command-line templates filled from hook parameters.
//!
//! `"echo built {0}"` renders the first hook parameter in place of `{0}`.
//! Missing parameters render as the empty string; `{{` and `}}` are literal
//! braces.

use std::sync::LazyLock;

use regex::Regex;

use super::spec::{CommandSpec, StaticSpec};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{[^{}]*\}|[{}]").expect("placeholder regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Param(usize),
}

/// A parsed command-line template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `source`, rejecting unbalanced braces and non-numeric
    /// placeholders.
    pub fn parse(source: &str) -> Result<Self, String> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut last = 0;

        for m in PLACEHOLDER.find_iter(source) {
            text.push_str(&source[last..m.start()]);
            last = m.end();

            match m.as_str() {
                "{{" => text.push('{'),
                "}}" => text.push('}'),
                "{" | "}" => {
                    return Err(format!(
                        "unbalanced brace at byte {} in template {source:?}",
                        m.start()
                    ));
                }
                placeholder => {
                    let inner = &placeholder[1..placeholder.len() - 1];
                    let index = inner.trim().parse::<usize>().map_err(|_| {
                        format!("placeholder {placeholder} in template {source:?} is not a parameter index")
                    })?;
                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    segments.push(Segment::Param(index));
                }
            }
        }

        text.push_str(&source[last..]);
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Ok(Self { segments })
    }

    /// Highest parameter index referenced, if any.
    pub fn max_param(&self) -> Option<usize> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(i) => Some(*i),
                Segment::Text(_) => None,
            })
            .max()
    }

    pub fn render(&self, params: &[String]) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(t) => out.push_str(t),
                Segment::Param(i) => {
                    if let Some(p) = params.get(*i) {
                        out.push_str(p);
                    }
                }
            }
        }
        out
    }

    /// Wrap this template as a parameter-derived command.
    pub fn into_spec(self) -> CommandSpec {
        CommandSpec::derived(move |params| StaticSpec::Literal(self.render(params)))
    }
}
