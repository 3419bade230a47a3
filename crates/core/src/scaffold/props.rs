//! Regex-and-brace-counting extraction of a component's props declaration.
//!
//! This is a heuristic reader, not a TypeScript parser: it understands one
//! member per `;` or line, skips nested object bodies and comments, and tags
//! each declared type with one of the [`TypeTag`] values.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Closed set of type shapes the sample strategies know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    String,
    Number,
    Boolean,
    Array,
    Function,
    Union,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropDescriptor {
    pub name: String,
    /// Declared type text with whitespace collapsed.
    pub declared_type: String,
    pub type_tag: TypeTag,
    pub required: bool,
}

impl PropDescriptor {
    pub fn new(name: &str, declared_type: &str, required: bool) -> Self {
        let declared_type = collapse_whitespace(declared_type);
        let declared_type = declared_type.trim_start_matches('|').trim().to_string();
        Self {
            name: name.to_string(),
            type_tag: infer_type_tag(&declared_type),
            declared_type,
            required,
        }
    }

    /// Top-level union alternatives, without `null` and `undefined`.
    pub fn union_options(&self) -> Vec<String> {
        significant_alternatives(&self.declared_type)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Unquoted string literals among the union alternatives.
    pub fn literal_options(&self) -> Vec<String> {
        self.union_options()
            .iter()
            .filter_map(|option| unquote(option))
            .collect()
    }

    /// Element type text for array props, e.g. `string` for `string[]`.
    pub fn element_type(&self) -> Option<String> {
        if self.type_tag != TypeTag::Array {
            return None;
        }
        let options = self.union_options();
        let declared = options
            .first()
            .map(String::as_str)
            .unwrap_or(self.declared_type.as_str())
            .trim();
        let inner = match declared.strip_suffix("[]") {
            Some(stripped) => stripped.trim_start_matches('(').trim_end_matches(')'),
            None => declared
                .strip_prefix("ReadonlyArray<")
                .or_else(|| declared.strip_prefix("Array<"))
                .and_then(|rest| rest.strip_suffix('>'))
                .unwrap_or(""),
        };
        Some(inner.trim().to_string())
    }
}

/// Props declaration found in component code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropsDeclaration {
    /// Whether other modules can `import type` it.
    pub exported: bool,
    pub props: Vec<PropDescriptor>,
}

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid block comment regex"));

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(^|[^:])//[^\n]*").expect("valid line comment regex"));

static MEMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*(?:readonly\s+)?([A-Za-z_$][\w$]*)\s*(\?)?\s*:\s*(.+?)\s*,?\s*$")
        .expect("valid member regex")
});

static METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*([A-Za-z_$][\w$]*)\s*(\?)?\s*\((.*)$").expect("valid method regex")
});

static MEMBER_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:readonly\s+)?[A-Za-z_$][\w$]*\s*\??\s*[:(]").expect("valid start regex")
});

/// Locate `<Component>Props` and read its members.
///
/// Returns `None` when the code declares no such interface or type alias.
pub fn find_props(code: &str, component: &str) -> Option<PropsDeclaration> {
    let pattern = format!(
        r"(?m)^\s*(export\s+)?(?:interface\s+{name}Props\b[^{{=]*|type\s+{name}Props\s*=\s*)\{{",
        name = regex::escape(component)
    );
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(code)?;
    let exported = caps.get(1).is_some();
    let body_start = caps.get(0)?.end();
    let body = matching_body(&code[body_start..]);

    Some(PropsDeclaration {
        exported,
        props: parse_members(body),
    })
}

/// Text up to the brace closing an already opened block.
fn matching_body(rest: &str) -> &str {
    let mut depth = 1usize;
    for (i, c) in rest.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return &rest[..i];
                }
            }
            _ => {}
        }
    }
    rest
}

fn parse_members(body: &str) -> Vec<PropDescriptor> {
    let without_blocks = BLOCK_COMMENT.replace_all(body, "");
    let cleaned = LINE_COMMENT.replace_all(&without_blocks, "$1");

    split_top_level(&cleaned, ';')
        .into_iter()
        .flat_map(split_member_lines)
        .filter_map(|member| parse_member(&member))
        .collect()
}

/// Break a `;`-free chunk into members at lines that start a new member.
fn split_member_lines(chunk: &str) -> Vec<String> {
    let mut members: Vec<String> = Vec::new();
    let mut depth = 0i32;

    for line in chunk.lines() {
        if depth == 0 && (MEMBER_START.is_match(line) || members.is_empty()) {
            members.push(line.to_string());
        } else if let Some(last) = members.last_mut() {
            last.push('\n');
            last.push_str(line);
        }
        depth += nesting_delta(line);
    }

    members
}

fn parse_member(member: &str) -> Option<PropDescriptor> {
    if member.trim().is_empty() {
        return None;
    }
    if let Some(caps) = MEMBER.captures(member) {
        return Some(PropDescriptor::new(
            &caps[1],
            &caps[3],
            caps.get(2).is_none(),
        ));
    }
    METHOD.captures(member).map(|caps| {
        let mut prop = PropDescriptor::new(
            &caps[1],
            &format!("({}", caps[3].trim()),
            caps.get(2).is_none(),
        );
        prop.type_tag = TypeTag::Function;
        prop
    })
}

/// Tag a declared type text.
pub fn infer_type_tag(declared: &str) -> TypeTag {
    let declared = declared.trim();

    if declared.contains("=>") || declared.starts_with("Function") {
        return TypeTag::Function;
    }

    let alternatives = significant_alternatives(declared);
    if alternatives.len() > 1 {
        return TypeTag::Union;
    }

    let single = alternatives.first().copied().unwrap_or(declared);
    if unquote(single).is_some() {
        return TypeTag::Union;
    }
    if single.ends_with("[]") || single.starts_with("Array<") || single.starts_with("ReadonlyArray<")
    {
        return TypeTag::Array;
    }

    match single {
        "number" | "bigint" => TypeTag::Number,
        "boolean" | "true" | "false" => TypeTag::Boolean,
        _ => TypeTag::String,
    }
}

fn significant_alternatives(declared: &str) -> Vec<&str> {
    split_top_level(declared, '|')
        .into_iter()
        .map(str::trim)
        .filter(|option| !option.is_empty() && *option != "undefined" && *option != "null")
        .collect()
}

fn unquote(option: &str) -> Option<String> {
    let option = option.trim();
    ['\'', '"', '`'].iter().find_map(|quote| {
        option
            .strip_prefix(*quote)
            .and_then(|rest| rest.strip_suffix(*quote))
            .map(str::to_string)
    })
}

/// Split on `separator` outside of brackets, braces, parens and generics.
fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    let mut previous = '\0';

    for (i, c) in text.char_indices() {
        match c {
            '{' | '(' | '[' | '<' => depth += 1,
            '}' | ')' | ']' => depth -= 1,
            '>' if previous != '=' => depth -= 1,
            c if c == separator && depth == 0 => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
        previous = c;
    }
    parts.push(&text[start..]);
    parts
}

fn nesting_delta(line: &str) -> i32 {
    let mut delta = 0;
    let mut previous = '\0';
    for c in line.chars() {
        match c {
            '{' | '(' | '[' | '<' => delta += 1,
            '}' | ')' | ']' => delta -= 1,
            '>' if previous != '=' => delta -= 1,
            _ => {}
        }
        previous = c;
    }
    delta
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
