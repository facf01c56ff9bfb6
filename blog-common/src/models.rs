use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 文章 - 博客中的一篇文章，加载后不可变
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// 文章唯一标识符，用于查找和页面地址
    pub id: u32,
    /// 文章标题
    pub title: String,
    /// 作者名称
    pub author: String,
    /// 发布日期（日历日期，按UTC展示）
    pub publish_date: NaiveDate,
    /// 文章标签列表，保留作者书写顺序
    #[serde(default)]
    pub tags: Vec<String>,
    /// 封面图片地址
    pub image_url: String,
    /// 文章正文（HTML片段，不做解析）
    pub content: String,
}

impl Post {
    /// 文章是否带有指定标签（区分大小写的精确匹配）
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// 标题是否包含查询词（忽略大小写）
    pub fn title_contains(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.title.to_lowercase().contains(needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(tags: &[&str]) -> Post {
        Post {
            id: 1,
            title: "Desvendando o CSS Grid Layout".to_string(),
            author: "Ana Coder".to_string(),
            publish_date: NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image_url: "https://picsum.photos/800/400?random=1".to_string(),
            content: "<p>Grid</p>".to_string(),
        }
    }

    #[test]
    fn test_tag_match_is_exact() {
        let p = post(&["CSS", "Frontend"]);
        assert!(p.has_tag("CSS"));
        assert!(!p.has_tag("css"));
        assert!(!p.has_tag(""));
    }

    #[test]
    fn test_title_contains_ignores_case() {
        let p = post(&[]);
        assert!(p.title_contains("css grid"));
        assert!(p.title_contains(""));
        assert!(!p.title_contains("flexbox"));
    }

    #[test]
    fn test_json_shape_is_camel_case() {
        let json = r#"{
            "id": 7,
            "title": "T",
            "author": "A",
            "publishDate": "2025-09-15",
            "tags": ["X"],
            "imageUrl": "img",
            "content": "<p></p>"
        }"#;
        let p: Post = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.publish_date, NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());
        assert_eq!(p.image_url, "img");
    }
}
