use serde::{Deserialize, Serialize};
use tracing::debug;

use blog_common::{CommentWidget, Theme};

/// Giscus 脚本地址
pub const GISCUS_SCRIPT_SRC: &str = "https://giscus.app/client.js";

/// 评论组件配置 - 对应 Giscus 脚本标签上的 data-* 属性
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CommentWidgetConfig {
    pub repo: String,
    pub repo_id: String,
    pub category: String,
    pub category_id: String,
    /// 讨论与页面的映射方式
    pub mapping: String,
    pub reactions_enabled: bool,
    pub emit_metadata: bool,
    pub input_position: String,
    pub lang: String,
}

impl Default for CommentWidgetConfig {
    fn default() -> Self {
        Self {
            repo: "AlvesPataca/meuBlog".to_string(),
            repo_id: "R_kgDOPzTnBQ".to_string(),
            category: "General".to_string(),
            category_id: "DIC_kwDOPzTnBc4CvqPl".to_string(),
            mapping: "title".to_string(),
            reactions_enabled: true,
            emit_metadata: false,
            input_position: "bottom".to_string(),
            lang: "pt".to_string(),
        }
    }
}

impl CommentWidgetConfig {
    /// 生成脚本标签属性，主题在加载时确定
    pub fn attributes(&self, theme: Theme) -> Vec<(&'static str, String)> {
        let flag = |b: bool| (if b { "1" } else { "0" }).to_string();
        vec![
            ("data-repo", self.repo.clone()),
            ("data-repo-id", self.repo_id.clone()),
            ("data-category", self.category.clone()),
            ("data-category-id", self.category_id.clone()),
            ("data-mapping", self.mapping.clone()),
            ("data-reactions-enabled", flag(self.reactions_enabled)),
            ("data-emit-metadata", flag(self.emit_metadata)),
            ("data-input-position", self.input_position.clone()),
            ("data-lang", self.lang.clone()),
            ("data-theme", theme.as_str().to_string()),
        ]
    }
}

/// Giscus 加载器 - 记录当前应注入的脚本属性
///
/// 每次 `reload` 都会整体替换属性，页面脚本据此清空容器并重新插入脚本。
#[derive(Debug, Clone, Default)]
pub struct GiscusLoader {
    config: CommentWidgetConfig,
    current: Option<Vec<(&'static str, String)>>,
    loads: usize,
}

impl GiscusLoader {
    pub fn new(config: CommentWidgetConfig) -> Self {
        Self {
            config,
            current: None,
            loads: 0,
        }
    }

    pub fn script_src(&self) -> &'static str {
        GISCUS_SCRIPT_SRC
    }

    /// 当前脚本属性；尚未加载时为 `None`
    pub fn current_attributes(&self) -> Option<&[(&'static str, String)]> {
        self.current.as_deref()
    }

    /// 加载次数
    pub fn loads(&self) -> usize {
        self.loads
    }
}

impl CommentWidget for GiscusLoader {
    fn reload(&mut self, theme: Theme) {
        self.current = Some(self.config.attributes(theme));
        self.loads += 1;
        debug!(theme = theme.as_str(), loads = self.loads, "重新加载评论组件");
    }
}
