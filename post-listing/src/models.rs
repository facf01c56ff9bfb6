use serde::{Deserialize, Serialize};

use blog_common::{format_naive_date, post_href, Post};

/// 默认每次展示的文章数量，也是"加载更多"的步长
pub const PAGE_SIZE: usize = 6;

/// 没有匹配文章时的提示
pub const NO_RESULTS_MESSAGE: &str = "Nenhum post encontrado.";

/// "不过滤"标签选项的文字
pub const ALL_TAGS_LABEL: &str = "Todos";

/// 列表配置 - 客户端可通过 JSON 传入
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    /// 每页条数 (可选, 默认为6)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    PAGE_SIZE
}

/// 筛选状态 - 搜索词、选中标签和分页游标
///
/// 游标表示要展示的文章数量而不是页码；
/// 搜索词或标签变化时游标回到一页的大小。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    search_term: String,
    selected_tag: Option<String>,
    visible_count: usize,
    page_size: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl FilterState {
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            search_term: String::new(),
            selected_tag: None,
            visible_count: page_size,
            page_size,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// 选中的标签，`None` 表示不过滤（与空字符串标签不同）
    pub fn selected_tag(&self) -> Option<&str> {
        self.selected_tag.as_deref()
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.visible_count = self.page_size;
    }

    pub fn set_tag(&mut self, tag: Option<&str>) {
        self.selected_tag = tag.map(str::to_string);
        self.visible_count = self.page_size;
    }

    /// 多展示一页；已全部展示时不变
    pub fn load_more(&mut self, matching: usize) -> bool {
        if self.visible_count >= matching {
            return false;
        }
        self.visible_count += self.page_size;
        true
    }

    /// 文章是否满足当前筛选条件；`term_lower` 为已转小写的搜索词
    pub(crate) fn matches_lowered(&self, post: &Post, term_lower: &str) -> bool {
        let tag_match = match &self.selected_tag {
            Some(tag) => post.has_tag(tag),
            None => true,
        };
        tag_match && post.title_contains(term_lower)
    }
}

/// 卡片 - 列表网格中一篇文章的摘要
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardModel {
    pub id: u32,
    pub title: String,
    pub image_url: String,
    pub tags: Vec<String>,
    /// 展示用日期，例如 "15 de setembro de 2025"
    pub formatted_date: String,
    /// 详情页链接 `post.html?id=<id>`
    pub href: String,
}

impl From<&Post> for CardModel {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            image_url: post.image_url.clone(),
            tags: post.tags.clone(),
            formatted_date: format_naive_date(post.publish_date),
            href: post_href(post.id),
        }
    }
}

/// 列表视图 - 每次筛选变化后重新计算
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    /// 当前展示的卡片
    pub cards: Vec<CardModel>,
    /// 是否还有未展示的匹配文章（控制"加载更多"按钮）
    pub has_more: bool,
    /// 匹配文章总数
    pub total: usize,
    /// 没有卡片时必须展示的提示
    pub empty_message: Option<String>,
}

impl ListingView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// 标签选项 - 标签筛选栏中的一项
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TagOption {
    pub label: String,
    /// `None` 表示"Todos"选项
    pub tag: Option<String>,
    pub active: bool,
}
