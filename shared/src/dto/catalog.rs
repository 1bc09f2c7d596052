//! Brand and category hierarchy: brand → main category → sub category.

use serde::{Deserialize, Serialize};

/// Product brand
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Top-level category belonging to a brand
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MainCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub brand_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,
}

/// Second-level category belonging to a main category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub main_category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_category: Option<MainCategory>,
}

/// Brand create/update payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrandInput {
    pub name: String,
}

/// Main category create/update payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MainCategoryInput {
    pub name: String,
    pub brand_id: i64,
}

/// Sub category create/update payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryInput {
    pub name: String,
    pub main_category_id: i64,
}

/// Node of the cascading category picker (`value`/`label` pairs)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTreeNode {
    pub value: i64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryTreeNode>,
}

impl CategoryTreeNode {
    /// Find the node with `value` anywhere below (and including) this node.
    pub fn find(&self, value: i64) -> Option<&CategoryTreeNode> {
        if self.value == value {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_find_descends_into_children() {
        let body = r#"{"value":1,"label":"Acme","children":[
            {"value":10,"label":"Tools","children":[{"value":100,"label":"Drills"}]}
        ]}"#;
        let tree: CategoryTreeNode = serde_json::from_str(body).unwrap();
        assert_eq!(tree.find(100).map(|n| n.label.as_str()), Some("Drills"));
        assert!(tree.find(7).is_none());
    }

    #[test]
    fn test_main_category_input_is_camel_case() {
        let input = MainCategoryInput {
            name: "Tools".to_string(),
            brand_id: 4,
        };
        let wire = serde_json::to_value(&input).unwrap();
        assert_eq!(wire["brandId"], 4);
    }
}
