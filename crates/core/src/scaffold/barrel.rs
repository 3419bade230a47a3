/// Source of the directory's `index.ts`.
pub fn barrel_module(component: &str) -> String {
    format!(
        "export {{ default }} from './{component}';\nexport {{ default as {component} }} from './{component}';\nexport * from './{component}';\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barrel_reexports_default_and_named() {
        assert_eq!(
            barrel_module("Card"),
            "export { default } from './Card';\nexport { default as Card } from './Card';\nexport * from './Card';\n"
        );
    }
}
