use regex::Regex;
use std::sync::LazyLock;

/// Name used when neither the reply nor the description yields one.
pub const FALLBACK_COMPONENT_NAME: &str = "GeneratedComponent";

static NAME_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"COMPONENT_NAME:[ \t*`]*([A-Za-z][A-Za-z0-9]*)").expect("valid name marker regex")
});

static DESCRIPTION_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:create|build|make|generate)\s+(?:an?\s+|the\s+)?((?:[a-z][a-z0-9]*[\s-]+){0,2}?[a-z][a-z0-9]*)\s+component\b",
    )
    .expect("valid description regex")
});

/// Read the name from a `COMPONENT_NAME: Foo` line.
pub fn name_from_marker(text: &str) -> Option<String> {
    NAME_MARKER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| pascal_case(m.as_str()))
        .filter(|name| !name.is_empty())
}

/// Infer a name from phrases like "create a pricing card component".
pub fn name_from_description(description: &str) -> Option<String> {
    DESCRIPTION_NAME
        .captures(description)
        .and_then(|caps| caps.get(1))
        .map(|m| pascal_case(&without_leading_article(m.as_str())))
        .filter(|name| !name.is_empty())
}

// "create a component" would otherwise capture the article itself.
fn without_leading_article(words: &str) -> String {
    words
        .split_whitespace()
        .skip_while(|word| matches!(word.to_ascii_lowercase().as_str(), "a" | "an" | "the"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join words into a PascalCase identifier.
///
/// Only the first letter of each word is touched, so `heroCTA` stays
/// `HeroCTA` and `pricing card` becomes `PricingCard`.
pub fn pascal_case(words: &str) -> String {
    words
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_name() {
        assert_eq!(
            name_from_marker("COMPONENT_NAME: Foo\n```tsx\n```"),
            Some("Foo".to_string())
        );
    }

    #[test]
    fn test_marker_name_without_space_and_with_bold() {
        assert_eq!(
            name_from_marker("COMPONENT_NAME:HeroBanner"),
            Some("HeroBanner".to_string())
        );
        assert_eq!(
            name_from_marker("**COMPONENT_NAME:** `PricingCard`"),
            Some("PricingCard".to_string())
        );
    }

    #[test]
    fn test_marker_name_is_pascal_cased() {
        assert_eq!(
            name_from_marker("COMPONENT_NAME: navBar"),
            Some("NavBar".to_string())
        );
    }

    #[test]
    fn test_marker_missing() {
        assert_eq!(name_from_marker("Here is your component"), None);
        assert_eq!(name_from_marker("COMPONENT_NAME: 123"), None);
        assert_eq!(name_from_marker("COMPONENT_NAME:\n```tsx\nconst A = 1;\n```"), None);
    }

    #[test]
    fn test_description_single_word() {
        assert_eq!(
            name_from_description("Please create a Widget component for the sidebar"),
            Some("Widget".to_string())
        );
        assert_eq!(
            name_from_description("create a widget component"),
            Some("Widget".to_string())
        );
    }

    #[test]
    fn test_description_multiple_words() {
        assert_eq!(
            name_from_description("Build a pricing card component with three tiers"),
            Some("PricingCard".to_string())
        );
        assert_eq!(
            name_from_description("generate an image-gallery component"),
            Some("ImageGallery".to_string())
        );
    }

    #[test]
    fn test_description_without_phrase() {
        assert_eq!(
            name_from_description("A pricing card with title and price"),
            None
        );
        assert_eq!(name_from_description(""), None);
        assert_eq!(name_from_description("create a component that shows a map"), None);
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("pricing card"), "PricingCard");
        assert_eq!(pascal_case("heroCTA"), "HeroCTA");
        assert_eq!(pascal_case("user_profile-card"), "UserProfileCard");
        assert_eq!(pascal_case("  "), "");
    }
}
