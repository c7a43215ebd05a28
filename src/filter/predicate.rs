use mongodb::bson::{doc, Document};

use crate::database::models::Product;

/// Predicate over the product collection, combinable by logical AND.
///
/// Absent fields impose no constraint. `title` and `category` are
/// case-insensitive substring matches against their own fields; `brand` is
/// an exact match. Substring values are regex-escaped before rendering so
/// user-supplied metacharacters match literally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPredicate {
    pub title_contains: Option<String>,
    pub category_contains: Option<String>,
    pub brand: Option<String>,
}

impl ProductPredicate {
    pub fn new(
        title: Option<String>,
        category: Option<String>,
        brand: Option<String>,
    ) -> Self {
        Self {
            title_contains: title.filter(|s| !s.is_empty()),
            category_contains: category.filter(|s| !s.is_empty()),
            brand: brand.filter(|s| !s.is_empty()),
        }
    }

    /// Render the predicate as a MongoDB filter document
    pub fn to_document(&self) -> Document {
        let mut filter = doc! {};

        if let Some(ref title) = self.title_contains {
            filter.insert("title", doc! { "$regex": escape_regex(title), "$options": "i" });
        }

        if let Some(ref category) = self.category_contains {
            filter.insert(
                "category",
                doc! { "$regex": escape_regex(category), "$options": "i" },
            );
        }

        if let Some(ref brand) = self.brand {
            filter.insert("brand", brand.as_str());
        }

        filter
    }

    /// Evaluate the predicate against a single product.
    ///
    /// Mirrors the semantics of `to_document` so substitutable store
    /// implementations stay in agreement with the MongoDB rendering.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(ref title) = self.title_contains {
            if !contains_ignore_case(&product.title, title) {
                return false;
            }
        }

        if let Some(ref category) = self.category_contains {
            if !contains_ignore_case(&product.category, category) {
                return false;
            }
        }

        if let Some(ref brand) = self.brand {
            if product.brand != *brand {
                return false;
            }
        }

        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Escape regex metacharacters so the value matches as a literal substring
fn escape_regex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '^' | '$' | '.' | '|' | '?' | '*' | '+' | '(' | ')' | '[' | ']' | '{' | '}'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::NewProduct;

    fn product(title: &str, category: &str, brand: &str) -> Product {
        Product::new(NewProduct {
            title: title.to_string(),
            category: category.to_string(),
            brand: brand.to_string(),
            price: 1.0,
            extra: Default::default(),
        })
    }

    #[test]
    fn test_empty_predicate_renders_empty_document() {
        let predicate = ProductPredicate::default();
        assert!(predicate.to_document().is_empty());
        assert!(predicate.matches(&product("Phone", "mobile", "X")));
    }

    #[test]
    fn test_title_is_case_insensitive_substring() {
        let predicate = ProductPredicate::new(Some("phone".to_string()), None, None);

        let rendered = predicate.to_document();
        let title = rendered.get_document("title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), "phone");
        assert_eq!(title.get_str("$options").unwrap(), "i");

        assert!(predicate.matches(&product("Smart PHONE A", "mobile", "X")));
        assert!(!predicate.matches(&product("Tablet", "mobile", "X")));
    }

    #[test]
    fn test_category_is_driven_by_its_own_value() {
        let predicate = ProductPredicate::new(
            Some("phone".to_string()),
            Some("mob".to_string()),
            None,
        );

        let rendered = predicate.to_document();
        let category = rendered.get_document("category").unwrap();
        assert_eq!(category.get_str("$regex").unwrap(), "mob");

        assert!(predicate.matches(&product("Phone A", "Mobile", "X")));
        assert!(!predicate.matches(&product("Phone B", "audio", "X")));
    }

    #[test]
    fn test_brand_is_exact_match() {
        let predicate = ProductPredicate::new(None, None, Some("X".to_string()));

        let rendered = predicate.to_document();
        assert_eq!(rendered.get_str("brand").unwrap(), "X");

        assert!(predicate.matches(&product("Phone A", "mobile", "X")));
        assert!(!predicate.matches(&product("Phone B", "mobile", "x")));
        assert!(!predicate.matches(&product("Phone C", "mobile", "XY")));
    }

    #[test]
    fn test_empty_strings_impose_no_constraint() {
        let predicate = ProductPredicate::new(
            Some(String::new()),
            Some(String::new()),
            Some(String::new()),
        );
        assert_eq!(predicate, ProductPredicate::default());
    }

    #[test]
    fn test_regex_metacharacters_match_literally() {
        assert_eq!(escape_regex("a.b*c"), "a\\.b\\*c");
        assert_eq!(escape_regex("(x|y)"), "\\(x\\|y\\)");

        let predicate = ProductPredicate::new(Some(".*".to_string()), None, None);
        let rendered = predicate.to_document();
        assert_eq!(
            rendered.get_document("title").unwrap().get_str("$regex").unwrap(),
            "\\.\\*"
        );

        // the in-memory evaluation treats it as a literal substring too
        assert!(predicate.matches(&product("weird .* title", "mobile", "X")));
        assert!(!predicate.matches(&product("Phone A", "mobile", "X")));
    }
}
