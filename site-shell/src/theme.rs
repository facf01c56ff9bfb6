use std::collections::HashMap;
use tracing::debug;
use wasm_bindgen::JsValue;
use web_sys::console;

use blog_common::{CommentWidget, Theme};

/// 主题偏好存储
pub trait ThemeStore {
    /// 读取已保存的主题；只有保存值为 "light" 时才是浅色
    fn get_theme(&self) -> Theme;
    fn set_theme(&mut self, theme: Theme);
}

/// 内存中的键值存储，用于测试和没有 localStorage 的环境
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    key: String,
    values: HashMap<String, String>,
}

impl MemoryThemeStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            values: HashMap::new(),
        }
    }

    /// 直接写入原始值，模拟之前会话留下的数据
    pub fn with_raw(mut self, value: &str) -> Self {
        self.values.insert(self.key.clone(), value.to_string());
        self
    }

    pub fn raw(&self) -> Option<&str> {
        self.values.get(&self.key).map(String::as_str)
    }
}

impl ThemeStore for MemoryThemeStore {
    fn get_theme(&self) -> Theme {
        theme_from_raw(self.raw())
    }

    fn set_theme(&mut self, theme: Theme) {
        self.values.insert(self.key.clone(), theme.as_str().to_string());
    }
}

/// 浏览器 localStorage 存储
#[derive(Debug, Clone)]
pub struct LocalStorageThemeStore {
    key: String,
}

impl LocalStorageThemeStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn get_theme(&self) -> Theme {
        let raw = Self::storage().and_then(|s| s.get_item(&self.key).ok().flatten());
        theme_from_raw(raw.as_deref())
    }

    fn set_theme(&mut self, theme: Theme) {
        let saved = Self::storage().map(|s| s.set_item(&self.key, theme.as_str()));
        if !matches!(saved, Some(Ok(()))) {
            console::warn_1(&JsValue::from_str("无法保存主题偏好"));
        }
    }
}

fn theme_from_raw(raw: Option<&str>) -> Theme {
    match raw {
        Some("light") => Theme::Light,
        _ => Theme::Dark,
    }
}

/// 主题控制器 - 持有当前主题，并显式传递给需要它的组件
#[derive(Debug)]
pub struct ThemeController<S: ThemeStore> {
    store: S,
    theme: Theme,
}

impl<S: ThemeStore> ThemeController<S> {
    /// 读取已保存的偏好
    pub fn load(store: S) -> Self {
        let theme = store.get_theme();
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 切换主题、保存偏好，并让评论组件按新主题重新加载
    pub fn toggle(&mut self, widget: Option<&mut dyn CommentWidget>) -> Theme {
        self.theme = self.theme.toggled();
        self.store.set_theme(self.theme);
        debug!(theme = self.theme.as_str(), "主题已切换");

        if let Some(widget) = widget {
            widget.reload(self.theme);
        }
        self.theme
    }
}
