use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};
use urlencoding::encode;

use blog_common::{format_naive_date, parse_post_id, Post, PostRepository};

/// 页面标题后缀
pub const SITE_NAME: &str = "Meu Blog Hardcore";

/// 文章不存在时的固定文案
pub const NOT_FOUND_TITLE: &str = "Erro 404";
pub const NOT_FOUND_MESSAGE: &str = "O post que procura não foi encontrado.";
pub const NOT_FOUND_DOCUMENT_TITLE: &str = "Post Não Encontrado";

/// 分享目标
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShareTarget {
    WhatsApp,
    Twitter,
    LinkedIn,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 3] = [ShareTarget::WhatsApp, ShareTarget::Twitter, ShareTarget::LinkedIn];

    pub fn label(&self) -> &'static str {
        match self {
            ShareTarget::WhatsApp => "WhatsApp",
            ShareTarget::Twitter => "Twitter",
            ShareTarget::LinkedIn => "LinkedIn",
        }
    }

    /// 按固定模板构建分享链接，不检查链接是否可达
    pub fn url(&self, title: &str, page_url: &str) -> String {
        match self {
            ShareTarget::WhatsApp => format!(
                "https://api.whatsapp.com/send?text={}",
                encode(&format!("{} - {}", title, page_url))
            ),
            ShareTarget::Twitter => format!(
                "https://twitter.com/intent/tweet?url={}&text={}",
                encode(page_url),
                encode(title)
            ),
            ShareTarget::LinkedIn => format!(
                "https://www.linkedin.com/shareArticle?mini=true&url={}&title={}",
                encode(page_url),
                encode(title)
            ),
        }
    }
}

/// 分享链接
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub target: ShareTarget,
    pub label: &'static str,
    pub url: String,
}

/// 详情页模型 - 文章全部字段加展示日期和分享链接
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DetailModel {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub publish_date: NaiveDate,
    pub formatted_date: String,
    pub tags: Vec<String>,
    pub image_url: String,
    /// 原样嵌入的正文
    pub content: String,
    pub share_links: Vec<ShareLink>,
    /// 浏览器标签页标题
    pub document_title: String,
}

impl DetailModel {
    fn from_post(post: &Post, page_url: &str) -> Self {
        let share_links = ShareTarget::ALL
            .iter()
            .map(|target| ShareLink {
                target: *target,
                label: target.label(),
                url: target.url(&post.title, page_url),
            })
            .collect();

        Self {
            id: post.id,
            title: post.title.clone(),
            author: post.author.clone(),
            publish_date: post.publish_date,
            formatted_date: format_naive_date(post.publish_date),
            tags: post.tags.clone(),
            image_url: post.image_url.clone(),
            content: post.content.clone(),
            share_links,
            document_title: format!("{} - {}", post.title, SITE_NAME),
        }
    }
}

/// 文章不存在页面模型，是正常的渲染状态而不是错误
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundModel {
    pub title: &'static str,
    pub message: &'static str,
    pub document_title: String,
}

impl Default for NotFoundModel {
    fn default() -> Self {
        Self {
            title: NOT_FOUND_TITLE,
            message: NOT_FOUND_MESSAGE,
            document_title: format!("{} - {}", NOT_FOUND_DOCUMENT_TITLE, SITE_NAME),
        }
    }
}

/// 详情页渲染结果
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetailPage {
    Found(DetailModel),
    NotFound(NotFoundModel),
}

impl DetailPage {
    pub fn is_found(&self) -> bool {
        matches!(self, DetailPage::Found(_))
    }

    pub fn document_title(&self) -> &str {
        match self {
            DetailPage::Found(model) => &model.document_title,
            DetailPage::NotFound(model) => &model.document_title,
        }
    }
}

/// 详情页渲染器
pub struct DetailRenderer<'a> {
    repository: &'a PostRepository,
}

impl<'a> DetailRenderer<'a> {
    pub fn new(repository: &'a PostRepository) -> Self {
        Self { repository }
    }

    /// 根据 `id` 参数渲染详情页
    ///
    /// 参数缺失、无法解析或文章不存在都得到 `NotFound`，三者不区分。
    pub fn render(&self, id_param: Option<&str>, page_url: &str) -> DetailPage {
        let Some(id) = id_param.and_then(parse_post_id) else {
            warn!(param = ?id_param, "无法解析文章ID");
            return DetailPage::NotFound(NotFoundModel::default());
        };

        match self.repository.by_id(id) {
            Ok(post) => {
                debug!(id, "渲染文章详情");
                DetailPage::Found(DetailModel::from_post(post, page_url))
            }
            Err(e) => {
                warn!(error = %e, "文章详情渲染失败");
                DetailPage::NotFound(NotFoundModel::default())
            }
        }
    }
}
