use wasm_bindgen::prelude::*;
use std::fmt::Display;
use std::rc::Rc;
use web_sys::console;

use blog_common::PostRepository;

// 导出模块
pub mod engine;
pub mod models;

pub use engine::{tag_options, view, ListingEngine};
pub use models::{CardModel, FilterState, ListingConfig, ListingView, TagOption, PAGE_SIZE};

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

// 记录错误到浏览器控制台并转换为 JS 错误
fn js_error(context: &str, e: impl Display) -> JsValue {
    let message = format!("{}: {}", context, e);
    console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

fn parse_config(config_json: Option<String>) -> Result<ListingConfig, JsValue> {
    match config_json {
        Some(json) => serde_json::from_str(&json).map_err(|e| js_error("解析列表配置失败", e)),
        None => Ok(ListingConfig::default()),
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_error("序列化结果失败", e))
}

/// 文章列表JS接口 - 供列表页脚本使用
#[wasm_bindgen]
pub struct PostListingJS {
    engine: ListingEngine,
}

impl PostListingJS {
    fn with_repository(repository: PostRepository, config_json: Option<String>) -> Result<PostListingJS, JsValue> {
        let config = parse_config(config_json)?;
        Ok(PostListingJS {
            engine: ListingEngine::new(Rc::new(repository), &config),
        })
    }
}

#[wasm_bindgen]
impl PostListingJS {
    /// 使用内置示例文章创建
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<PostListingJS, JsValue> {
        let repository = PostRepository::sample().map_err(|e| js_error("加载示例文章失败", e))?;
        Self::with_repository(repository.clone(), config_json)
    }

    /// 从 JSON 文章数组创建
    pub fn from_json(posts_json: &str, config_json: Option<String>) -> Result<PostListingJS, JsValue> {
        let repository = PostRepository::from_json(posts_json).map_err(|e| js_error("解析文章数据失败", e))?;
        Self::with_repository(repository, config_json)
    }

    /// 从压缩快照创建
    pub fn from_snapshot(data: &[u8], config_json: Option<String>) -> Result<PostListingJS, JsValue> {
        let repository = PostRepository::from_snapshot(data).map_err(|e| js_error("解析文章快照失败", e))?;
        Self::with_repository(repository, config_json)
    }

    /// 搜索框输入
    pub fn set_search_term(&mut self, term: &str) -> Result<JsValue, JsValue> {
        to_js(&self.engine.set_search_term(term))
    }

    /// 点击标签；`undefined` 表示"Todos"
    pub fn set_tag(&mut self, tag: Option<String>) -> Result<JsValue, JsValue> {
        to_js(&self.engine.set_tag(tag.as_deref()))
    }

    /// 点击"加载更多"
    pub fn load_more(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.engine.load_more())
    }

    /// 当前视图
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.engine.view())
    }

    /// 标签筛选栏选项
    pub fn tag_options(&self) -> Result<JsValue, JsValue> {
        to_js(&self.engine.tag_options())
    }

    /// 所有标签（首次出现顺序）
    pub fn all_tags(&self) -> js_sys::Array {
        self.engine
            .repository()
            .unique_tags()
            .iter()
            .map(|tag| JsValue::from_str(tag))
            .collect()
    }
}
