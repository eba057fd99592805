//! 分类名称、表情与标签的固定查找表

struct CategoryInfo {
    key: &'static str,
    label: &'static str,
    emoji: &'static str,
    tags: &'static [&'static str],
}

const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { key: "individual", label: "Gelatinas Individuales", emoji: "🍮", tags: &["individual", "personal"] },
    CategoryInfo { key: "decorada", label: "Gelatinas Decoradas", emoji: "🌈", tags: &["decorada", "colorida", "cumpleaños"] },
    CategoryInfo { key: "premium", label: "Gelatinas Premium", emoji: "👑", tags: &["premium", "elegante", "especial"] },
    CategoryInfo { key: "saludable", label: "Gelatinas Saludables", emoji: "🥗", tags: &["saludable", "natural", "light"] },
    CategoryInfo { key: "personalizada", label: "Gelatinas Personalizadas", emoji: "🎨", tags: &["personalizada", "única"] },
    CategoryInfo { key: "adultos", label: "Para Adultos", emoji: "🍷", tags: &["adultos", "sofisticada"] },
];

const DEFAULT_LABEL: &str = "Gelatinas";
const DEFAULT_EMOJI: &str = "🍮";
const BASE_TAGS: [&str; 3] = ["gelatina", "artesanal", "fresca"];

fn lookup(category: Option<&str>) -> Option<&'static CategoryInfo> {
    let category = category?;
    CATEGORIES.iter().find(|info| info.key == category)
}

pub fn category_label(category: Option<&str>) -> &'static str {
    lookup(category).map_or(DEFAULT_LABEL, |info| info.label)
}

pub fn category_emoji(category: Option<&str>) -> &'static str {
    lookup(category).map_or(DEFAULT_EMOJI, |info| info.emoji)
}

/// 基础标签加分类专属标签
pub fn product_tags(category: Option<&str>) -> Vec<&'static str> {
    let mut tags = BASE_TAGS.to_vec();
    if let Some(info) = lookup(category) {
        tags.extend_from_slice(info.tags);
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category() {
        assert_eq!(category_label(Some("premium")), "Gelatinas Premium");
        assert_eq!(category_emoji(Some("adultos")), "🍷");
        assert_eq!(
            product_tags(Some("decorada")),
            vec!["gelatina", "artesanal", "fresca", "decorada", "colorida", "cumpleaños"]
        );
    }

    #[test]
    fn test_unknown_or_missing_category_falls_back() {
        assert_eq!(category_label(Some("vegana")), "Gelatinas");
        assert_eq!(category_label(None), "Gelatinas");
        assert_eq!(category_emoji(None), "🍮");
        assert_eq!(product_tags(Some("vegana")), vec!["gelatina", "artesanal", "fresca"]);
    }
}
