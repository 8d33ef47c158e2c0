//! HTML 转义与搜索高亮

use regex::{Regex, RegexBuilder};

/// 转义 HTML 特殊字符
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 搜索高亮器
///
/// 在原文上做大小写无关匹配，匹配片段与其余片段分别转义，
/// 因此查询词中的 `&`、`<` 等字符也能正确命中。
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    pub fn new(query: &str) -> Self {
        if query.is_empty() {
            return Self { pattern: None };
        }

        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build();

        match pattern {
            Ok(pattern) => Self {
                pattern: Some(pattern),
            },
            Err(e) => {
                tracing::warn!(error = %e, "Search query cannot be highlighted");
                Self { pattern: None }
            }
        }
    }

    /// 生成转义后的文本，命中部分包裹 `<span class="search-result">`
    pub fn apply(&self, value: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return escape_html(value);
        };

        let mut out = String::with_capacity(value.len() + 32);
        let mut cursor = 0;
        for m in pattern.find_iter(value) {
            out.push_str(&escape_html(&value[cursor..m.start()]));
            out.push_str(r#"<span class="search-result">"#);
            out.push_str(&escape_html(m.as_str()));
            out.push_str("</span>");
            cursor = m.end();
        }
        out.push_str(&escape_html(&value[cursor..]));
        out
    }
}
