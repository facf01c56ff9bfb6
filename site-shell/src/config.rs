use serde::{Deserialize, Serialize};

/// 站点配置 - 客户端可通过 JSON 传入，缺省字段使用默认值
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// 导航栏变为"已滚动"样式的滚动距离（像素）
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f64,
    /// 提示自动消失时间（毫秒）
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u32,
    /// 主题偏好在 localStorage 中的键名
    #[serde(default = "default_theme_key")]
    pub theme_storage_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: default_scroll_threshold(),
            toast_duration_ms: default_toast_duration_ms(),
            theme_storage_key: default_theme_key(),
        }
    }
}

fn default_scroll_threshold() -> f64 {
    50.0
}

fn default_toast_duration_ms() -> u32 {
    3000
}

fn default_theme_key() -> String {
    "theme".to_string()
}
