//! Auxiliary files derived from a generated component.

pub mod barrel;
pub mod mock;
pub mod props;
pub mod sample;
pub mod story;

pub use barrel::barrel_module;
pub use mock::{build_mock_sets, mock_data_module, MockSets};
pub use props::{find_props, PropDescriptor, PropsDeclaration, TypeTag};
pub use sample::{KeywordHeuristics, SampleStrategy, SampleValue};
pub use story::story_module;

pub const BARREL_FILE_NAME: &str = "index.ts";

/// Which optional scaffold files to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub storybook: bool,
    pub mock_data: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFiles {
    pub barrel: String,
    pub mock_data: Option<String>,
    pub story: Option<String>,
}

pub fn component_file_name(component: &str) -> String {
    format!("{component}.tsx")
}

pub fn story_file_name(component: &str) -> String {
    format!("{component}.stories.tsx")
}

/// Mock modules are always `<Component>.mock.ts`.
pub fn mock_file_name(component: &str) -> String {
    format!("{component}.mock.ts")
}

/// Generate scaffold files with the keyword heuristics.
pub fn generate_scaffold(component: &str, code: &str, options: ScaffoldOptions) -> ScaffoldFiles {
    generate_scaffold_with(component, code, options, &KeywordHeuristics)
}

pub fn generate_scaffold_with(
    component: &str,
    code: &str,
    options: ScaffoldOptions,
    strategy: &dyn SampleStrategy,
) -> ScaffoldFiles {
    let declaration = find_props(code, component);

    ScaffoldFiles {
        barrel: barrel_module(component),
        mock_data: options
            .mock_data
            .then(|| mock_data_module(component, declaration.as_ref(), strategy)),
        story: options.storybook.then(|| {
            story_module(component, declaration.as_ref(), options.mock_data, strategy)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODE: &str = r#"
export interface PricingProps {
  title: string;
  price: number;
}

export default function Pricing({ title, price }: PricingProps) {
  return <div>{title}: {price}</div>;
}
"#;

    #[test]
    fn test_barrel_only_by_default() {
        let files = generate_scaffold("Pricing", CODE, ScaffoldOptions::default());

        assert_eq!(files.barrel, barrel_module("Pricing"));
        assert_eq!(files.mock_data, None);
        assert_eq!(files.story, None);
    }

    #[test]
    fn test_all_files() {
        let files = generate_scaffold(
            "Pricing",
            CODE,
            ScaffoldOptions {
                storybook: true,
                mock_data: true,
            },
        );

        let mock = files.mock_data.unwrap();
        assert!(mock.contains("title: \"Pricing Title\","));
        assert!(mock.contains("price: 29.99,"));
        assert!(mock.contains("...defaultPricingProps,"));

        let story = files.story.unwrap();
        assert!(story.contains("from './Pricing.mock';"));
    }

    #[test]
    fn test_story_without_mock_data() {
        let files = generate_scaffold(
            "Pricing",
            CODE,
            ScaffoldOptions {
                storybook: true,
                mock_data: false,
            },
        );

        let story = files.story.unwrap();
        assert!(!story.contains(".mock"));
        assert!(story.contains("title: \"Pricing Title\","));
    }

    /// Strategy stub proving callers do not depend on the heuristics.
    struct Constant;

    impl SampleStrategy for Constant {
        fn sample(&self, _: &str, _: &PropDescriptor) -> SampleValue {
            SampleValue::Expr("undefined as never".to_string())
        }

        fn alternative(&self, _: &str, _: &PropDescriptor, _: &SampleValue) -> Option<SampleValue> {
            None
        }
    }

    #[test]
    fn test_pluggable_strategy() {
        let files = generate_scaffold_with(
            "Pricing",
            CODE,
            ScaffoldOptions {
                storybook: false,
                mock_data: true,
            },
            &Constant,
        );

        let mock = files.mock_data.unwrap();
        assert!(mock.contains("title: undefined as never,"));
        assert!(mock.contains("price: undefined as never,"));
    }

    #[test]
    fn test_file_names() {
        assert_eq!(component_file_name("Card"), "Card.tsx");
        assert_eq!(story_file_name("Card"), "Card.stories.tsx");
        assert_eq!(mock_file_name("Card"), "Card.mock.ts");
    }
}
