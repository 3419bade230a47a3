//! Reply post-processing as an ordered list of independent steps.
//!
//! Every step reads and rewrites a [`Draft`]. None of them can fail: a gap in
//! the model reply degrades to a fallback value instead.

use regex::Regex;
use std::sync::LazyLock;

use super::name::{name_from_description, name_from_marker, FALLBACK_COMPONENT_NAME};
use super::types::GenerationResult;

/// Working state threaded through the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Description the user typed. Only used for name inference.
    pub description: String,
    /// Reply text as received.
    pub raw: String,
    /// Reply text still to be processed.
    pub text: String,
    pub name: String,
    pub code: String,
}

impl Draft {
    pub fn new(raw: &str, description: &str) -> Self {
        Self {
            description: description.to_string(),
            raw: raw.to_string(),
            text: raw.to_string(),
            name: FALLBACK_COMPONENT_NAME.to_string(),
            code: String::new(),
        }
    }
}

pub type Step = fn(&mut Draft);

/// Steps in the order they run.
pub const PIPELINE: [(&str, Step); 7] = [
    ("extract_name", extract_name),
    ("strip_name_line", strip_name_line),
    ("extract_code_block", extract_code_block),
    ("strip_fences", strip_fences),
    ("ensure_default_export", ensure_default_export),
    ("synthesize_placeholder", synthesize_placeholder),
    ("ensure_usage_header", ensure_usage_header),
];

static NAME_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[^\n]*COMPONENT_NAME:[^\n]*(?:\n|$)").expect("valid name line regex")
});

static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)```(?i:tsx|typescript|jsx|javascript|react|ts|js)[ \t]*\r?\n(.*?)```",
    )
    .expect("valid code block regex")
});

static FENCE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*```[\w+-]*\s*$").expect("valid fence regex"));

static DEFAULT_EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bexport\s+default\b|\bexport\s*\{[^}]*\bas\s+default\b")
        .expect("valid default export regex")
});

static REACT_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s+(?:\*\s+as\s+)?React\b[^;]*from\s+['"]react['"]"#)
        .expect("valid react import regex")
});

/// Run every step of [`PIPELINE`] over a model reply.
pub fn parse_response(raw: &str, description: &str) -> GenerationResult {
    let mut draft = Draft::new(raw, description);

    for (_, step) in PIPELINE {
        step(&mut draft);
    }

    GenerationResult {
        component_name: draft.name,
        component_code: draft.code,
        raw_response: draft.raw,
    }
}

/// Marker line first, then the description, then the fallback name.
pub fn extract_name(draft: &mut Draft) {
    draft.name = name_from_marker(&draft.text)
        .or_else(|| name_from_description(&draft.description))
        .unwrap_or_else(|| FALLBACK_COMPONENT_NAME.to_string());
}

pub fn strip_name_line(draft: &mut Draft) {
    draft.text = NAME_LINE.replace_all(&draft.text, "").trim().to_string();
}

/// First fenced block in a JS/TS dialect, else the whole remaining text.
pub fn extract_code_block(draft: &mut Draft) {
    let block = CODE_BLOCK
        .captures(&draft.text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|code| !code.is_empty());

    draft.code = match block {
        Some(code) => code.to_string(),
        None => draft.text.trim().to_string(),
    };
}

pub fn strip_fences(draft: &mut Draft) {
    draft.code = draft
        .code
        .lines()
        .filter(|line| !FENCE_LINE.is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();
}

/// A named export of the component without a default export gets one.
pub fn ensure_default_export(draft: &mut Draft) {
    if has_named_export(&draft.code, &draft.name) && !DEFAULT_EXPORT.is_match(&draft.code) {
        append(&mut draft.code, &format!("export default {};", draft.name));
    }
}

/// Replies carrying only a props type get a minimal implementation.
pub fn synthesize_placeholder(draft: &mut Draft) {
    if has_definition(&draft.code, &draft.name) {
        return;
    }

    let props_type = if declares_props(&draft.code, &draft.name) {
        format!("{}Props", draft.name)
    } else {
        "{ title?: string; description?: string; ctaText?: string; ctaLink?: string }".to_string()
    };

    append(&mut draft.code, &placeholder_component(&draft.name, &props_type));

    if !DEFAULT_EXPORT.is_match(&draft.code) {
        append(&mut draft.code, &format!("export default {};", draft.name));
    }

    if !REACT_IMPORT.is_match(&draft.code) {
        draft.code = format!("import React from 'react';\n\n{}", draft.code);
    }
}

/// Prepend a usage comment unless one is present. Safe to run repeatedly.
pub fn ensure_usage_header(draft: &mut Draft) {
    if draft.code.contains("USAGE") {
        return;
    }

    draft.code = format!("{}\n{}", usage_header(&draft.name), draft.code);
}

fn append(code: &mut String, snippet: &str) {
    let trimmed = code.trim_end().len();
    code.truncate(trimmed);
    if !code.is_empty() {
        code.push_str("\n\n");
    }
    code.push_str(snippet);
    code.push('\n');
}

fn has_named_export(code: &str, name: &str) -> bool {
    let name = regex::escape(name);
    let pattern = format!(
        r"\bexport\s+(?:const|let|var|function|class)\s+{name}\b|\bexport\s*\{{[^}}]*\b{name}\b[^}}]*\}}"
    );
    Regex::new(&pattern)
        .map(|re| re.is_match(code))
        .unwrap_or(false)
}

fn has_definition(code: &str, name: &str) -> bool {
    let pattern = format!(
        r"\b(?:function|const|let|var|class)\s+{}\b",
        regex::escape(name)
    );
    Regex::new(&pattern)
        .map(|re| re.is_match(code))
        .unwrap_or(false)
}

fn declares_props(code: &str, name: &str) -> bool {
    let pattern = format!(
        r"\b(?:interface|type)\s+{}Props\b",
        regex::escape(name)
    );
    Regex::new(&pattern)
        .map(|re| re.is_match(code))
        .unwrap_or(false)
}

fn placeholder_component(name: &str, props_type: &str) -> String {
    format!(
        r#"const {name}: React.FC<{props_type}> = ({{ title, description, ctaText, ctaLink }}) => {{
  return (
    <section className="{class}">
      {{title && <h2>{{title}}</h2>}}
      {{description && <p>{{description}}</p>}}
      {{ctaText && <a href={{ctaLink ?? '#'}}>{{ctaText}}</a>}}
    </section>
  );
}};"#,
        class = kebab_case(name)
    )
}

fn usage_header(name: &str) -> String {
    format!(
        r#"/**
 * USAGE:
 * import {name} from './{name}';
 *
 * <{name} title="..." description="..." />
 *
 * Customize {name}Props and the markup below to match your design system.
 */"#
    )
}

fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
