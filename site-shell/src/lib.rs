use wasm_bindgen::prelude::*;
use std::fmt::Display;
use web_sys::console;

use blog_common::{CommentWidget, Theme};

// 导出模块
pub mod config;
pub mod contact;
pub mod nav;
pub mod theme;
pub mod toast;

pub use config::SiteConfig;
pub use contact::{ContactSubmission, SubmissionOutcome};
pub use nav::{current_page, is_active_link, NavState};
pub use theme::{LocalStorageThemeStore, MemoryThemeStore, ThemeController, ThemeStore};
pub use toast::{Toast, ToastKind};

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

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_error("序列化结果失败", e))
}

/// 由页面脚本提供的评论组件重载回调，参数为主题名
struct JsCommentWidget {
    callback: js_sys::Function,
}

impl CommentWidget for JsCommentWidget {
    fn reload(&mut self, theme: Theme) {
        if let Err(e) = self.callback.call1(&JsValue::NULL, &JsValue::from_str(theme.as_str())) {
            console::error_2(&JsValue::from_str("重新加载评论组件失败"), &e);
        }
    }
}

/// 站点外壳JS接口 - 每个页面共用
#[wasm_bindgen]
pub struct SiteShellJS {
    config: SiteConfig,
    theme: ThemeController<LocalStorageThemeStore>,
    nav: NavState,
    contact: ContactSubmission,
    comments: Option<JsCommentWidget>,
}

#[wasm_bindgen]
impl SiteShellJS {
    /// 读取保存的主题偏好并初始化状态
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<SiteShellJS, JsValue> {
        let config: SiteConfig = match config_json {
            Some(json) => serde_json::from_str(&json).map_err(|e| js_error("解析站点配置失败", e))?,
            None => SiteConfig::default(),
        };
        let store = LocalStorageThemeStore::new(&config.theme_storage_key);

        Ok(SiteShellJS {
            theme: ThemeController::load(store),
            nav: NavState::new(config.scroll_threshold),
            contact: ContactSubmission::new(config.toast_duration_ms),
            comments: None,
            config,
        })
    }

    /// 当前主题名："light" 或 "dark"
    pub fn theme(&self) -> String {
        self.theme.theme().as_str().to_string()
    }

    /// 详情页注册评论组件重载回调
    pub fn set_comment_reloader(&mut self, callback: js_sys::Function) {
        self.comments = Some(JsCommentWidget { callback });
    }

    /// 切换主题，返回新主题名
    pub fn toggle_theme(&mut self) -> String {
        let widget = self.comments.as_mut().map(|w| w as &mut dyn CommentWidget);
        self.theme.toggle(widget).as_str().to_string()
    }

    /// 滚动事件，返回导航状态
    pub fn on_scroll(&mut self, scroll_y: f64) -> Result<JsValue, JsValue> {
        self.nav.on_scroll(scroll_y);
        to_js(&self.nav)
    }

    /// 汉堡按钮，返回菜单是否展开
    pub fn toggle_nav(&mut self) -> bool {
        self.nav.toggle_nav()
    }

    /// 菜单区域点击
    pub fn on_nav_click(&mut self, target_is_link: bool) -> bool {
        self.nav.on_nav_click(target_is_link);
        self.nav.is_nav_open()
    }

    /// 导航链接是否对应当前页面
    pub fn is_active_link(&self, pathname: &str, href: &str) -> bool {
        is_active_link(pathname, href)
    }

    /// 开始提交联系表单；已有提交进行中时抛出错误
    pub fn begin_submission(&mut self) -> Result<(), JsValue> {
        self.contact.begin().map_err(|e| js_error("无法提交", e))
    }

    /// 提交收到响应，返回提示和是否重置表单
    pub fn finish_submission(&mut self, ok: bool, body: &str) -> Result<JsValue, JsValue> {
        self.finish(SubmissionOutcome::from_response(ok, body))
    }

    /// 请求失败（网络错误）
    pub fn fail_submission(&mut self) -> Result<JsValue, JsValue> {
        self.finish(SubmissionOutcome::NetworkFailure)
    }

    /// 任意提示，例如页面自己的操作结果；`kind` 为 "success" 或 "error"
    pub fn toast(&self, message: &str, kind: &str) -> Result<JsValue, JsValue> {
        let kind: ToastKind = kind.parse().map_err(|e| js_error("提示类型无效", e))?;
        to_js(&Toast::new(message, kind, self.config.toast_duration_ms))
    }
}

/// 表单提交完成后返回给页面的内容
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionResult {
    toast: Toast,
    reset_form: bool,
}

impl SiteShellJS {
    fn finish(&mut self, outcome: SubmissionOutcome) -> Result<JsValue, JsValue> {
        let toast = self.contact.finish(&outcome);
        to_js(&SubmissionResult {
            toast,
            reset_form: outcome.should_reset_form(),
        })
    }
}
