use super::props::PropsDeclaration;
use super::sample::{vary, SampleStrategy, SampleValue};

/// The two value sets a mock module exports.
#[derive(Debug, Clone, PartialEq)]
pub struct MockSets {
    pub default: Vec<(String, SampleValue)>,
    /// Fields that differ from `default`. The alternative set is always
    /// `{ ...default, ...overrides }`.
    pub overrides: Vec<(String, SampleValue)>,
}

impl MockSets {
    /// Alternative set with the overrides applied, in declaration order.
    pub fn alternative(&self) -> Vec<(String, SampleValue)> {
        self.default
            .iter()
            .map(|(name, value)| {
                let value = self
                    .overrides
                    .iter()
                    .find(|(overridden, _)| overridden == name)
                    .map(|(_, value)| value)
                    .unwrap_or(value);
                (name.clone(), value.clone())
            })
            .collect()
    }
}

pub fn default_set_name(component: &str) -> String {
    format!("default{component}Props")
}

pub fn alternative_set_name(component: &str) -> String {
    format!("alternative{component}Props")
}

/// Sample every prop, then pick the overrides for the alternative set.
///
/// When the strategy proposes no alternative for any prop, one value is
/// varied so the two sets never coincide. Plain values are preferred over
/// function expressions.
pub fn build_mock_sets(
    component: &str,
    declaration: Option<&PropsDeclaration>,
    strategy: &dyn SampleStrategy,
) -> MockSets {
    let props = declaration.map(|d| d.props.as_slice()).unwrap_or_default();

    let default: Vec<(String, SampleValue)> = props
        .iter()
        .map(|prop| (prop.name.clone(), strategy.sample(component, prop)))
        .collect();

    let mut overrides: Vec<(String, SampleValue)> = props
        .iter()
        .zip(&default)
        .filter_map(|(prop, (name, value))| {
            strategy
                .alternative(component, prop, value)
                .filter(|alternative| alternative != value)
                .map(|alternative| (name.clone(), alternative))
        })
        .collect();

    if overrides.is_empty() {
        let is_expr = |value: &SampleValue| matches!(value, SampleValue::Expr(_));
        if let Some(forced) = default
            .iter()
            .filter(|(_, value)| !is_expr(value))
            .chain(default.iter().filter(|(_, value)| is_expr(value)))
            .find_map(|(name, value)| {
                vary(value)
                    .filter(|varied| varied != value)
                    .map(|varied| (name.clone(), varied))
            })
        {
            overrides.push(forced);
        }
    }

    MockSets { default, overrides }
}

/// Source of `<Component>.mock.ts`.
pub fn mock_data_module(
    component: &str,
    declaration: Option<&PropsDeclaration>,
    strategy: &dyn SampleStrategy,
) -> String {
    let sets = build_mock_sets(component, declaration, strategy);
    let default_name = default_set_name(component);
    let alternative_name = alternative_set_name(component);

    let (header, annotation) = match declaration {
        Some(d) if d.exported => (
            format!("import type {{ {component}Props }} from './{component}';\n\n"),
            format!(": {component}Props"),
        ),
        Some(_) => (
            format!(
                "import type {{ ComponentProps }} from 'react';\nimport {component} from './{component}';\n\ntype {component}Props = ComponentProps<typeof {component}>;\n\n"
            ),
            format!(": {component}Props"),
        ),
        None => (String::new(), String::new()),
    };

    let mut out = header;
    out.push_str(&format!(
        "export const {default_name}{annotation} = {};\n\n",
        object_literal(&sets.default, None)
    ));
    out.push_str(&format!(
        "export const {alternative_name}{annotation} = {};\n",
        object_literal(&sets.overrides, Some(&default_name))
    ));
    out
}

/// Render an object literal, optionally spreading another object first.
pub fn object_literal(fields: &[(String, SampleValue)], spread: Option<&str>) -> String {
    if fields.is_empty() && spread.is_none() {
        return "{}".to_string();
    }

    let mut lines = Vec::with_capacity(fields.len() + 1);
    if let Some(spread) = spread {
        lines.push(format!("  ...{spread},"));
    }
    for (name, value) in fields {
        lines.push(format!("  {name}: {},", value.to_ts()));
    }

    format!("{{\n{}\n}}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::props::{find_props, PropDescriptor};
    use crate::scaffold::sample::KeywordHeuristics;

    fn declaration(exported: bool, props: &[(&str, &str)]) -> PropsDeclaration {
        PropsDeclaration {
            exported,
            props: props
                .iter()
                .map(|(name, declared)| PropDescriptor::new(name, declared, true))
                .collect(),
        }
    }

    #[test]
    fn test_pricing_scenario() {
        let d = declaration(true, &[("title", "string"), ("price", "number")]);
        let module = mock_data_module("Pricing", Some(&d), &KeywordHeuristics);

        assert_eq!(
            module,
            r#"import type { PricingProps } from './Pricing';

export const defaultPricingProps: PricingProps = {
  title: "Pricing Title",
  price: 29.99,
};

export const alternativePricingProps: PricingProps = {
  ...defaultPricingProps,
  title: "Alternative Pricing Title",
  price: 49.99,
};
"#
        );
    }

    #[test]
    fn test_alternative_is_shallow_override() {
        let d = declaration(
            true,
            &[("title", "string"), ("description", "string"), ("dark", "boolean")],
        );
        let sets = build_mock_sets("Hero", Some(&d), &KeywordHeuristics);
        let alternative = sets.alternative();

        assert_eq!(alternative.len(), sets.default.len());
        assert_eq!(alternative[1], sets.default[1]);
        assert_ne!(alternative[0], sets.default[0]);
        assert_eq!(alternative[2].1, SampleValue::Bool(false));
    }

    #[test]
    fn test_forced_override_when_nothing_qualifies() {
        let d = declaration(true, &[("onClick", "() => void"), ("description", "string")]);
        let sets = build_mock_sets("Note", Some(&d), &KeywordHeuristics);

        assert_eq!(sets.overrides.len(), 1);
        assert_eq!(sets.overrides[0].0, "description");
    }

    #[test]
    fn test_unsampled_array_still_varies() {
        let d = find_props("export interface ListProps { rows: Row[] }", "List").unwrap();
        let sets = build_mock_sets("List", Some(&d), &KeywordHeuristics);

        assert_eq!(sets.default, vec![("rows".to_string(), SampleValue::Array(Vec::new()))]);
        assert_ne!(sets.default, sets.alternative());
        assert_eq!(
            mock_data_module("List", Some(&d), &KeywordHeuristics),
            "import type { ListProps } from './List';\n\nexport const defaultListProps: ListProps = {\n  rows: [],\n};\n\nexport const alternativeListProps: ListProps = {\n  ...defaultListProps,\n  rows: [{} as never],\n};\n"
        );
    }

    /// Samples every prop as a one-item list and never proposes alternatives.
    struct SingleItem;

    impl SampleStrategy for SingleItem {
        fn sample(&self, _: &str, _: &PropDescriptor) -> SampleValue {
            SampleValue::Array(vec![SampleValue::Str("only".to_string())])
        }

        fn alternative(&self, _: &str, _: &PropDescriptor, _: &SampleValue) -> Option<SampleValue> {
            None
        }
    }

    #[test]
    fn test_single_item_array_varies() {
        let d = declaration(true, &[("tags", "string[]")]);
        let sets = build_mock_sets("Tags", Some(&d), &SingleItem);

        assert_eq!(
            sets.overrides,
            vec![("tags".to_string(), SampleValue::Array(Vec::new()))]
        );
        assert_ne!(sets.default, sets.alternative());
    }

    #[test]
    fn test_only_callbacks_still_vary() {
        let d = declaration(true, &[("onOpen", "() => void"), ("onClose", "() => void")]);
        let sets = build_mock_sets("Drawer", Some(&d), &KeywordHeuristics);

        assert_eq!(
            sets.overrides,
            vec![("onOpen".to_string(), SampleValue::Expr("() => {}".to_string()))]
        );
    }

    #[test]
    fn test_unexported_props_use_component_props() {
        let code = "interface BadgeProps { label: string }\nconst Badge = (p: BadgeProps) => null;";
        let d = find_props(code, "Badge").unwrap();
        let module = mock_data_module("Badge", Some(&d), &KeywordHeuristics);

        assert!(module.starts_with("import type { ComponentProps } from 'react';\nimport Badge from './Badge';"));
        assert!(module.contains("type BadgeProps = ComponentProps<typeof Badge>;"));
        assert!(module.contains("export const defaultBadgeProps: BadgeProps = {"));
    }

    #[test]
    fn test_no_declaration() {
        let module = mock_data_module("Divider", None, &KeywordHeuristics);

        assert_eq!(
            module,
            "export const defaultDividerProps = {};\n\nexport const alternativeDividerProps = {\n  ...defaultDividerProps,\n};\n"
        );
    }
}
