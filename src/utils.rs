//! HTML 与格式化工具

/// 转义插入到 HTML 文本或属性中的内容
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// 价格固定两位小数，例如 `Bs. 25.00`
///
/// 恰好落在两分之间的值（如 `10.125`）向远离零的方向进位。
pub fn format_price(currency: &str, amount: f64) -> String {
    let cents = amount * 100.0;
    // 只有八分之一的整数倍才可能精确落在半分上
    let amount = if (amount * 8.0).fract() == 0.0 && cents.fract().abs() == 0.5 {
        cents.round() / 100.0
    } else {
        amount
    };
    format!("{} {:.2}", currency, amount)
}

/// SKU：前缀加上左侧补零到三位的 id
pub fn format_sku(prefix: &str, id: &str) -> String {
    format!("{}{:0>3}", prefix, id)
}

/// 把页面状态编码为查询字符串链接
pub fn page_href(path: &str, params: &[(&str, String)]) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        query.append_pair(key, value);
    }
    let query = query.finish();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}
