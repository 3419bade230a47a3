//! Representative values for props.
//!
//! The scaffold writers only talk to [`SampleStrategy`]; the keyword
//! heuristics below are one implementation keyed on [`TypeTag`], and a
//! strategy backed by a real type checker can replace it without touching
//! the callers.

use super::props::{PropDescriptor, TypeTag};

pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400";

/// A TypeScript literal or expression used as a prop value.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleValue {
    Str(String),
    Number(f64),
    Bool(bool),
    Array(Vec<SampleValue>),
    /// Emitted verbatim, e.g. an arrow function.
    Expr(String),
}

impl SampleValue {
    /// Render as TypeScript source.
    pub fn to_ts(&self) -> String {
        match self {
            SampleValue::Str(s) => serde_json::to_string(s).unwrap_or_else(|_| format!("{s:?}")),
            SampleValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                format!("{}", *n as i64)
            }
            SampleValue::Number(n) => n.to_string(),
            SampleValue::Bool(b) => b.to_string(),
            SampleValue::Array(items) => {
                let items: Vec<String> = items.iter().map(SampleValue::to_ts).collect();
                format!("[{}]", items.join(", "))
            }
            SampleValue::Expr(expr) => expr.clone(),
        }
    }
}

pub trait SampleStrategy {
    /// Value used in the default mock set and the default story.
    fn sample(&self, component: &str, prop: &PropDescriptor) -> SampleValue;

    /// Value that replaces `default` in the alternative set, if the prop is
    /// one worth varying.
    fn alternative(
        &self,
        component: &str,
        prop: &PropDescriptor,
        default: &SampleValue,
    ) -> Option<SampleValue>;
}

/// Name-keyword heuristics. Display values only, no semantic guarantees.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordHeuristics;

impl SampleStrategy for KeywordHeuristics {
    fn sample(&self, component: &str, prop: &PropDescriptor) -> SampleValue {
        sample_for(component, &prop.name, prop.type_tag, prop)
    }

    fn alternative(
        &self,
        component: &str,
        prop: &PropDescriptor,
        default: &SampleValue,
    ) -> Option<SampleValue> {
        let name = prop.name.to_lowercase();

        match (prop.type_tag, default) {
            (TypeTag::Union, _) => {
                let literals = prop.literal_options();
                literals.get(1).map(|second| SampleValue::Str(second.clone()))
            }
            (_, SampleValue::Bool(b)) => Some(SampleValue::Bool(!b)),
            (_, SampleValue::Number(n)) if has_any(&name, PRICE_WORDS) => {
                Some(SampleValue::Number(if *n == 49.99 { 29.99 } else { 49.99 }))
            }
            (_, SampleValue::Str(_)) if is_link(&name) => None,
            (_, SampleValue::Str(_)) if has_any(&name, CTA_WORDS) => {
                Some(SampleValue::Str("Get Started".to_string()))
            }
            (_, SampleValue::Str(_)) if has_any(&name, THEME_WORDS) => {
                Some(SampleValue::Str("dark".to_string()))
            }
            (_, SampleValue::Str(_)) if name.contains("subtitle") => None,
            (_, SampleValue::Str(_)) if has_any(&name, TITLE_WORDS) => {
                Some(SampleValue::Str(format!("Alternative {component} Title")))
            }
            _ => None,
        }
    }
}

/// Generic variation of a value, for when no prop qualified for an
/// alternative on its own. The result always differs from `value`.
pub fn vary(value: &SampleValue) -> Option<SampleValue> {
    let varied = match value {
        SampleValue::Str(s) => Some(SampleValue::Str(format!("{s} (alternative)"))),
        SampleValue::Number(n) => Some(SampleValue::Number(n * 2.0 + 1.0)),
        SampleValue::Bool(b) => Some(SampleValue::Bool(!b)),
        SampleValue::Array(items) if items.is_empty() => Some(SampleValue::Array(vec![
            SampleValue::Expr(PLACEHOLDER_ITEM.to_string()),
        ])),
        SampleValue::Array(items) => Some(SampleValue::Array(
            items[..items.len() - 1].to_vec(),
        )),
        SampleValue::Expr(_) => Some(SampleValue::Expr(NOOP_FUNCTION.to_string())),
    };

    varied.filter(|varied| varied != value)
}

const NOOP_FUNCTION: &str = "() => {}";

/// Stand-in element for arrays whose element type has no sample.
const PLACEHOLDER_ITEM: &str = "{} as never";

const IMAGE_WORDS: &[&str] = &["image", "img", "photo", "picture", "avatar", "logo", "thumbnail", "src"];
const LINK_WORDS: &[&str] = &["link", "href", "url"];
const CTA_WORDS: &[&str] = &["cta", "button", "action", "label"];
const TITLE_WORDS: &[&str] = &["title", "heading", "headline"];
const DESCRIPTION_WORDS: &[&str] = &["description", "text", "content", "body", "summary", "caption", "message"];
const PRICE_WORDS: &[&str] = &["price", "amount", "cost"];
const THEME_WORDS: &[&str] = &["theme", "variant", "mode"];
const FALSE_BY_DEFAULT: &[&str] = &["disabled", "loading", "hidden", "collapsed", "readonly", "error", "closed"];

fn has_any(name: &str, words: &[&str]) -> bool {
    words.iter().any(|word| name.contains(word))
}

fn is_link(name: &str) -> bool {
    has_any(name, LINK_WORDS) && !has_any(name, IMAGE_WORDS)
}

fn sample_for(component: &str, prop_name: &str, tag: TypeTag, prop: &PropDescriptor) -> SampleValue {
    match tag {
        TypeTag::String => SampleValue::Str(string_sample(component, prop_name)),
        TypeTag::Number => SampleValue::Number(number_sample(prop_name)),
        TypeTag::Boolean => {
            let name = prop_name.to_lowercase();
            SampleValue::Bool(!has_any(&name, FALSE_BY_DEFAULT))
        }
        TypeTag::Array => array_sample(prop_name, prop.element_type().as_deref()),
        TypeTag::Function => SampleValue::Expr(format!("() => console.log('{prop_name} called')")),
        TypeTag::Union => union_sample(component, prop_name, prop),
    }
}

fn string_sample(component: &str, prop_name: &str) -> String {
    let name = prop_name.to_lowercase();

    if name.ends_with("alt") {
        format!("{component} image")
    } else if has_any(&name, IMAGE_WORDS) {
        PLACEHOLDER_IMAGE_URL.to_string()
    } else if is_link(&name) {
        "#".to_string()
    } else if has_any(&name, CTA_WORDS) {
        "Learn More".to_string()
    } else if name.contains("subtitle") {
        format!("{component} subtitle")
    } else if has_any(&name, TITLE_WORDS) {
        format!("{component} Title")
    } else if name.contains("email") {
        "hello@example.com".to_string()
    } else if name.contains("phone") {
        "+1 (555) 010-0000".to_string()
    } else if name.contains("date") {
        "2024-01-01".to_string()
    } else if has_any(&name, PRICE_WORDS) {
        "$29.99".to_string()
    } else if has_any(&name, THEME_WORDS) {
        "light".to_string()
    } else if name.contains("color") {
        "#3b82f6".to_string()
    } else if has_any(&name, DESCRIPTION_WORDS) {
        format!("A short description for the {component} component.")
    } else if name.contains("name") || name.contains("author") {
        "Jane Doe".to_string()
    } else {
        format!("Sample {prop_name}")
    }
}

fn number_sample(prop_name: &str) -> f64 {
    let name = prop_name.to_lowercase();

    if has_any(&name, PRICE_WORDS) {
        29.99
    } else if name.contains("rating") || name.contains("score") {
        4.5
    } else if name.contains("year") {
        2024.0
    } else if name.contains("percent") || name.contains("progress") {
        75.0
    } else if name.contains("count") || name.contains("quantity") || name.contains("total") {
        3.0
    } else if name.starts_with("max") {
        100.0
    } else if name.starts_with("min") || name.contains("index") {
        0.0
    } else {
        42.0
    }
}

fn array_sample(prop_name: &str, element: Option<&str>) -> SampleValue {
    match element {
        Some("string") => {
            let label = item_label(prop_name);
            SampleValue::Array(
                (1..=3)
                    .map(|i| SampleValue::Str(format!("{label} {i}")))
                    .collect(),
            )
        }
        Some("number") => {
            SampleValue::Array((1..=3).map(|i| SampleValue::Number(i as f64)).collect())
        }
        Some("boolean") => {
            SampleValue::Array(vec![SampleValue::Bool(true), SampleValue::Bool(false)])
        }
        _ => SampleValue::Array(Vec::new()),
    }
}

/// `features` -> `Feature`, `tags` -> `Tag`.
fn item_label(prop_name: &str) -> String {
    let singular = prop_name
        .strip_suffix("ies")
        .map(|stem| format!("{stem}y"))
        .or_else(|| prop_name.strip_suffix('s').map(str::to_string))
        .unwrap_or_else(|| "item".to_string());
    let mut chars = singular.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => "Item".to_string(),
    }
}

fn union_sample(component: &str, prop_name: &str, prop: &PropDescriptor) -> SampleValue {
    if let Some(first) = prop.literal_options().into_iter().next() {
        return SampleValue::Str(first);
    }

    // Non-literal union: sample the first alternative on its own.
    match prop.union_options().first() {
        Some(option) => {
            let alternative = PropDescriptor::new(prop_name, option, prop.required);
            if alternative.type_tag == TypeTag::Union {
                SampleValue::Str(string_sample(component, prop_name))
            } else {
                sample_for(component, prop_name, alternative.type_tag, &alternative)
            }
        }
        None => SampleValue::Str(string_sample(component, prop_name)),
    }
}
