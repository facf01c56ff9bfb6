use serde::Serialize;

/// 未指定页面时的默认页面
pub const DEFAULT_PAGE: &str = "index.html";

/// 导航状态 - 滚动样式、返回顶部按钮和移动端菜单
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavState {
    /// 超过阈值后导航栏使用"已滚动"样式，返回顶部按钮同时可见
    scrolled: bool,
    /// 移动端菜单是否展开
    nav_open: bool,
    #[serde(skip)]
    threshold: f64,
}

impl NavState {
    pub fn new(threshold: f64) -> Self {
        Self {
            scrolled: false,
            nav_open: false,
            threshold,
        }
    }

    /// 处理滚动事件，返回样式是否发生变化
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.scrolled
    }

    pub fn is_nav_open(&self) -> bool {
        self.nav_open
    }

    /// 汉堡按钮
    pub fn toggle_nav(&mut self) -> bool {
        self.nav_open = !self.nav_open;
        self.nav_open
    }

    /// 点击菜单中的链接后收起菜单；点击其他区域不变
    pub fn on_nav_click(&mut self, target_is_link: bool) {
        if target_is_link {
            self.nav_open = false;
        }
    }
}

/// 当前页面名称：路径的最后一段，为空时是 `index.html`
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => DEFAULT_PAGE,
    }
}

/// 导航链接是否指向当前页面
pub fn is_active_link(pathname: &str, href: &str) -> bool {
    current_page(pathname) == href
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        let mut nav = NavState::new(50.0);
        assert!(!nav.on_scroll(50.0));
        assert!(!nav.is_scrolled());

        assert!(nav.on_scroll(51.0));
        assert!(nav.is_scrolled());
        assert!(nav.back_to_top_visible());

        assert!(!nav.on_scroll(300.0));
        assert!(nav.on_scroll(0.0));
        assert!(!nav.back_to_top_visible());
    }

    #[test]
    fn test_hamburger_menu() {
        let mut nav = NavState::new(50.0);
        assert!(nav.toggle_nav());
        nav.on_nav_click(false);
        assert!(nav.is_nav_open());
        nav.on_nav_click(true);
        assert!(!nav.is_nav_open());
        assert!(nav.toggle_nav());
        assert!(!nav.toggle_nav());
    }

    #[test]
    fn test_current_page() {
        assert_eq!(current_page("/blog/post.html"), "post.html");
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page(""), "index.html");
        assert!(is_active_link("/sobre.html", "sobre.html"));
        assert!(is_active_link("/", "index.html"));
        assert!(!is_active_link("/post.html", "index.html"));
    }
}
