//! Catalogue fixtures

use serde::Deserialize;

use crate::catalog::Category;

/// Wrapper for the category tree in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Root (main) categories with nested children
    pub categories: Vec<Category>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::catalog::{CategoryLevel, validate_tree};

    use super::*;

    #[test]
    fn catalog_fixture_parses_nested_yaml() -> TestResult {
        let yaml = r#"
categories:
  - id: cat-jewellery
    name: { en: Jewellery, ur: "زیورات", ar: "مجوهرات" }
    slug: jewellery
    level: 1
    children:
      - id: cat-rings
        name: { en: Rings, ur: "انگوٹھیاں", ar: "خواتم" }
        slug: rings
        level: 2
        parent: cat-jewellery
"#;

        let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

        validate_tree(&fixture.categories)?;

        let root = fixture.categories.first().ok_or("missing root")?;

        assert_eq!(root.level, CategoryLevel::Main);
        assert_eq!(root.children.len(), 1);

        Ok(())
    }
}
