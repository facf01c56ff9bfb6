use wasm_bindgen::prelude::*;
use serde::Serialize;
use std::fmt::Display;
use tracing::warn;
use web_sys::console;

use blog_common::{query_param, CommentWidget, PostRepository, Theme};

// 导出模块
pub mod comments;
pub mod renderer;

pub use comments::{CommentWidgetConfig, GiscusLoader};
pub use renderer::{DetailModel, DetailPage, DetailRenderer, NotFoundModel, ShareLink, ShareTarget};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// 初始化函数 - 设置错误处理
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 版本信息
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn js_error(context: &str, e: impl Display) -> JsValue {
    let message = format!("{}: {}", context, e);
    console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_error("序列化结果失败", e))
}

/// 评论组件脚本标签描述
#[derive(Serialize)]
struct ScriptTag<'a> {
    src: &'static str,
    attributes: &'a [(&'static str, String)],
}

/// 文章详情JS接口 - 供详情页脚本使用
#[wasm_bindgen]
pub struct PostDetailJS {
    repository: PostRepository,
    comments: GiscusLoader,
}

impl PostDetailJS {
    fn build(repository: PostRepository, comments_json: Option<String>) -> Result<PostDetailJS, JsValue> {
        let config = match comments_json {
            Some(json) => serde_json::from_str(&json).map_err(|e| js_error("解析评论配置失败", e))?,
            None => CommentWidgetConfig::default(),
        };
        Ok(PostDetailJS {
            repository,
            comments: GiscusLoader::new(config),
        })
    }

    /// 渲染页面后按主题加载评论组件；主题只影响评论组件，无效时不阻止渲染
    fn render_page(&mut self, search: &str, page_url: &str, theme: &str) -> (DetailPage, Result<(), String>) {
        let id_param = query_param(search, "id");
        let page = DetailRenderer::new(&self.repository).render(id_param.as_deref(), page_url);
        (page, self.reload_named(theme))
    }

    /// 无法识别的主题名回退到默认主题并返回错误说明
    fn reload_named(&mut self, theme: &str) -> Result<(), String> {
        let (theme, result) = match theme.parse::<Theme>() {
            Ok(theme) => (theme, Ok(())),
            Err(e) => {
                warn!(error = %e, "主题参数无效，使用默认主题");
                (Theme::default(), Err(e))
            }
        };
        self.comments.reload(theme);
        result
    }
}

fn warn_theme(e: &str) {
    console::warn_1(&JsValue::from_str(&format!("主题参数无效，使用默认主题: {}", e)));
}

#[wasm_bindgen]
impl PostDetailJS {
    /// 使用内置示例文章创建
    #[wasm_bindgen(constructor)]
    pub fn new(comments_json: Option<String>) -> Result<PostDetailJS, JsValue> {
        let repository = PostRepository::sample().map_err(|e| js_error("加载示例文章失败", e))?;
        Self::build(repository.clone(), comments_json)
    }

    /// 从 JSON 文章数组创建
    pub fn from_json(posts_json: &str, comments_json: Option<String>) -> Result<PostDetailJS, JsValue> {
        let repository = PostRepository::from_json(posts_json).map_err(|e| js_error("解析文章数据失败", e))?;
        Self::build(repository, comments_json)
    }

    /// 从压缩快照创建
    pub fn from_snapshot(data: &[u8], comments_json: Option<String>) -> Result<PostDetailJS, JsValue> {
        let repository = PostRepository::from_snapshot(data).map_err(|e| js_error("解析文章快照失败", e))?;
        Self::build(repository, comments_json)
    }

    /// 渲染详情页
    ///
    /// `search` 为 `location.search`，`page_url` 为 `location.href`；
    /// 渲染后按当前主题加载评论组件。
    pub fn render(&mut self, search: &str, page_url: &str, theme: &str) -> Result<JsValue, JsValue> {
        let (page, theme_result) = self.render_page(search, page_url, theme);
        if let Err(e) = theme_result {
            warn_theme(&e);
        }
        to_js(&page)
    }

    /// 主题变化时重新加载评论组件，返回新的脚本标签描述
    pub fn reload_comments(&mut self, theme: &str) -> Result<JsValue, JsValue> {
        if let Err(e) = self.reload_named(theme) {
            warn_theme(&e);
        }
        self.comment_script()
    }

    /// 当前评论组件脚本标签描述；尚未加载时为 `null`
    pub fn comment_script(&self) -> Result<JsValue, JsValue> {
        match self.comments.current_attributes() {
            Some(attributes) => to_js(&ScriptTag {
                src: self.comments.script_src(),
                attributes,
            }),
            None => Ok(JsValue::NULL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> PostDetailJS {
        PostDetailJS {
            repository: PostRepository::sample().unwrap().clone(),
            comments: GiscusLoader::default(),
        }
    }

    fn data_theme(detail: &PostDetailJS) -> Option<&str> {
        detail
            .comments
            .current_attributes()?
            .iter()
            .find(|(k, _)| *k == "data-theme")
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_unknown_theme_still_renders_post() {
        let mut detail = detail();
        let (page, theme_result) = detail.render_page("?id=2", "https://blog.example/post.html?id=2", "sepia");
        assert!(page.is_found());
        assert!(theme_result.is_err());
        assert_eq!(data_theme(&detail), Some(Theme::default().as_str()));
    }

    #[test]
    fn test_known_theme_loads_comments() {
        let mut detail = detail();
        let (page, theme_result) = detail.render_page("?id=999", "https://blog.example/post.html?id=999", "light");
        assert!(!page.is_found());
        assert!(theme_result.is_ok());
        assert_eq!(data_theme(&detail), Some("light"));

        assert!(detail.reload_named("").is_err());
        assert_eq!(data_theme(&detail), Some("dark"));
        assert_eq!(detail.comments.loads(), 2);
    }
}
