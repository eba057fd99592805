//! 商品目录数据模型

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// 商品标识，目录中既可能是数字也可能是字符串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(Number),
    Text(String),
}

impl ProductId {
    /// 与查询参数比较：数字 id 按数值比较（`"007"` 与 `7` 相等），字符串 id 精确比较
    ///
    /// 十六进制、八进制、二进制写法（`"0x7"`、`"0o7"`、`"0b111"`）不视为相等。
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ProductId::Text(id) => id == raw,
            ProductId::Number(n) => match (n.as_f64(), raw.trim().parse::<f64>()) {
                (Some(stored), Ok(wanted)) => stored == wanted,
                _ => false,
            },
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Text(id) => f.write_str(id),
            // 整数值的浮点 id 不带 ".0"
            ProductId::Number(n) if n.is_f64() => match n.as_f64() {
                Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", v as i64),
                _ => write!(f, "{}", n),
            },
            ProductId::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub new_price: f64,
    #[serde(default)]
    pub old_price: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImages {
    #[serde(default)]
    pub single_image: String,
    #[serde(default)]
    pub thumbs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub flavor: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub servings: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Price,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub img: ProductImages,
}

impl Product {
    pub fn category(&self) -> Option<&str> {
        non_empty(&self.category)
    }

    pub fn flavor(&self) -> Option<&str> {
        non_empty(&self.flavor)
    }

    pub fn servings(&self) -> Option<&str> {
        non_empty(&self.servings)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    /// 原价为 0 视为没有原价
    pub fn old_price(&self) -> Option<f64> {
        self.price.old_price.filter(|price| *price != 0.0)
    }

    /// 折扣为 0 视为没有折扣
    pub fn discount(&self) -> Option<f64> {
        self.discount.filter(|discount| *discount != 0.0)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

// 目录里的份数有时写成数字
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(json: &str) -> Product {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_numeric_id_matches_loosely() {
        let id = ProductId::Number(7.into());
        assert!(id.matches("7"));
        assert!(id.matches(" 7 "));
        assert!(id.matches("007"));
        assert!(id.matches("7.0"));
        assert!(!id.matches("8"));
        assert!(!id.matches("siete"));
        for literal in ["0x7", "0o7", "0b111"] {
            assert!(!id.matches(literal), "{}", literal);
        }
    }

    #[test]
    fn test_text_id_matches_exactly() {
        let id = ProductId::Text("flan-7".to_string());
        assert!(id.matches("flan-7"));
        assert!(!id.matches("FLAN-7"));
        assert!(!id.matches("flan-7 "));

        let numeric_text = ProductId::Text("7".to_string());
        assert!(numeric_text.matches("7"));
        assert!(!numeric_text.matches("007"));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(product(r#"{"id": 7, "price": {"newPrice": 1}}"#).id.to_string(), "7");
        assert_eq!(product(r#"{"id": 7.0, "price": {"newPrice": 1}}"#).id.to_string(), "7");
        assert_eq!(product(r#"{"id": 7.5, "price": {"newPrice": 1}}"#).id.to_string(), "7.5");
        assert_eq!(product(r#"{"id": "ab", "price": {"newPrice": 1}}"#).id.to_string(), "ab");
    }

    #[test]
    fn test_minimal_product_defaults() {
        let p = product(r#"{"id": 7, "name": "Mini Flan", "price": {"newPrice": 25}}"#);
        assert_eq!(p.price.new_price, 25.0);
        assert!(p.old_price().is_none());
        assert!(p.discount().is_none());
        assert!(p.category().is_none());
        assert!(p.img.thumbs.is_empty());
        assert!(p.img.single_image.is_empty());
    }

    #[test]
    fn test_full_product() {
        let p = product(
            r#"{
                "id": 3,
                "name": "Arcoíris",
                "category": "decorada",
                "flavor": "fresa",
                "servings": 12,
                "description": "",
                "price": {"newPrice": 80, "oldPrice": 95.5},
                "discount": 15,
                "img": {"singleImage": "img/3.jpg", "thumbs": ["img/3a.jpg", "img/3b.jpg"]}
            }"#,
        );
        assert_eq!(p.category(), Some("decorada"));
        assert_eq!(p.servings(), Some("12"));
        assert_eq!(p.description(), None);
        assert_eq!(p.old_price(), Some(95.5));
        assert_eq!(p.discount(), Some(15.0));
        assert_eq!(p.img.thumbs.len(), 2);
    }

    #[test]
    fn test_zero_old_price_and_discount_are_absent() {
        let p = product(r#"{"id": 1, "price": {"newPrice": 10, "oldPrice": 0}, "discount": 0}"#);
        assert!(p.old_price().is_none());
        assert!(p.discount().is_none());
    }

    #[test]
    fn test_new_price_is_required() {
        assert!(serde_json::from_str::<Product>(r#"{"id": 1, "price": {}}"#).is_err());
        assert!(serde_json::from_str::<Product>(r#"{"id": 1}"#).is_err());
    }
}
