use super::mock::{alternative_set_name, build_mock_sets, default_set_name, object_literal};
use super::props::PropsDeclaration;
use super::sample::SampleStrategy;

/// Prop name fragments inlined into stories when there is no mock module.
const INLINE_PROP_WORDS: &[&str] = &["image", "title", "description"];

/// Source of `<Component>.stories.tsx` with `Default` and `Variant` stories.
///
/// With mock data the stories use the mock module's exported sets. Without
/// it, only image/title/description props get inline literals.
pub fn story_module(
    component: &str,
    declaration: Option<&PropsDeclaration>,
    with_mock_data: bool,
    strategy: &dyn SampleStrategy,
) -> String {
    let mut out = format!(
        r#"import type {{ Meta, StoryObj }} from '@storybook/react';
import {component} from './{component}';
"#
    );

    let (default_args, variant_args) = if with_mock_data {
        let default_name = default_set_name(component);
        let alternative_name = alternative_set_name(component);
        out.push_str(&format!(
            "import {{ {default_name}, {alternative_name} }} from './{component}.mock';\n"
        ));
        (default_name, alternative_name)
    } else {
        let inline = declaration.map(|d| PropsDeclaration {
            exported: d.exported,
            props: d
                .props
                .iter()
                .filter(|prop| {
                    let name = prop.name.to_lowercase();
                    INLINE_PROP_WORDS.iter().any(|word| name.contains(word))
                })
                .cloned()
                .collect(),
        });
        let sets = build_mock_sets(component, inline.as_ref(), strategy);
        (
            indent(&object_literal(&sets.default, None)),
            indent(&object_literal(&sets.alternative(), None)),
        )
    };

    out.push_str(&format!(
        r#"
const meta: Meta<typeof {component}> = {{
  title: 'Components/{component}',
  component: {component},
  tags: ['autodocs'],
}};

export default meta;
type Story = StoryObj<typeof {component}>;

export const Default: Story = {{
  args: {default_args},
}};

export const Variant: Story = {{
  args: {variant_args},
}};
"#
    ));

    out
}

/// Indent continuation lines of a nested object literal by one level.
fn indent(literal: &str) -> String {
    literal.replace('\n', "\n  ")
}
