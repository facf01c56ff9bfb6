use std::rc::Rc;
use tracing::debug;

use blog_common::{Post, PostRepository};
use crate::models::{
    CardModel, FilterState, ListingConfig, ListingView, TagOption, ALL_TAGS_LABEL, NO_RESULTS_MESSAGE,
};

/// 计算列表视图：只依赖仓库和筛选状态
///
/// 1. 标题（小写）包含搜索词（小写）
/// 2. 且未选标签或文章带有该标签
/// 3. 保持仓库顺序，取前 `visible_count` 篇
pub fn view(repository: &PostRepository, state: &FilterState) -> ListingView {
    let filtered = filter_posts(repository, state);
    let total = filtered.len();

    let cards: Vec<CardModel> = filtered
        .into_iter()
        .take(state.visible_count())
        .map(CardModel::from)
        .collect();

    debug!(
        term = state.search_term(),
        tag = ?state.selected_tag(),
        visible = cards.len(),
        total,
        "列表视图已重新计算"
    );

    let empty_message = cards.is_empty().then(|| NO_RESULTS_MESSAGE.to_string());

    ListingView {
        cards,
        has_more: state.visible_count() < total,
        total,
        empty_message,
    }
}

/// 标签选项：固定的"Todos"在前，其余按首次出现顺序；只有一项处于激活状态
pub fn tag_options(repository: &PostRepository, state: &FilterState) -> Vec<TagOption> {
    let selected = state.selected_tag();

    std::iter::once(TagOption {
        label: ALL_TAGS_LABEL.to_string(),
        tag: None,
        active: selected.is_none(),
    })
    .chain(repository.unique_tags().iter().map(|tag| TagOption {
        label: tag.clone(),
        tag: Some(tag.clone()),
        active: selected == Some(tag.as_str()),
    }))
    .collect()
}

// 筛选匹配的文章，保持仓库顺序
fn filter_posts<'a>(repository: &'a PostRepository, state: &FilterState) -> Vec<&'a Post> {
    let term = state.search_term().to_lowercase();
    repository
        .all()
        .iter()
        .filter(|post| state.matches_lowered(post, &term))
        .collect()
}

/// 列表引擎 - 持有一次列表页会话的筛选状态
///
/// 每个修改操作都会返回重新计算后的视图。
#[derive(Debug, Clone)]
pub struct ListingEngine {
    repository: Rc<PostRepository>,
    state: FilterState,
}

impl ListingEngine {
    pub fn new(repository: Rc<PostRepository>, config: &ListingConfig) -> Self {
        Self {
            repository,
            state: FilterState::new(config.page_size),
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn repository(&self) -> &PostRepository {
        &self.repository
    }

    /// 更新搜索词并重置分页
    pub fn set_search_term(&mut self, term: &str) -> ListingView {
        self.state.set_search_term(term);
        self.view()
    }

    /// 选择标签（单选），`None` 清除标签筛选；重置分页
    pub fn set_tag(&mut self, tag: Option<&str>) -> ListingView {
        self.state.set_tag(tag);
        self.view()
    }

    /// 加载更多
    pub fn load_more(&mut self) -> ListingView {
        let matching = filter_posts(&self.repository, &self.state).len();
        if !self.state.load_more(matching) {
            debug!(matching, "已展示全部匹配文章，忽略加载更多");
        }
        self.view()
    }

    pub fn view(&self) -> ListingView {
        view(&self.repository, &self.state)
    }

    pub fn tag_options(&self) -> Vec<TagOption> {
        tag_options(&self.repository, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ListingEngine {
        let repository = PostRepository::sample().unwrap().clone();
        ListingEngine::new(Rc::new(repository), &ListingConfig::default())
    }

    #[test]
    fn test_default_view() {
        let view = engine().view();
        assert_eq!(view.cards.len(), 6);
        assert!(view.has_more);
        assert_eq!(view.total, 20);
        assert_eq!(view.empty_message, None);

        let ids: Vec<u32> = view.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_load_more_until_exhausted() {
        let mut engine = engine();
        assert_eq!(engine.load_more().cards.len(), 12);

        let view = engine.load_more();
        assert_eq!(view.cards.len(), 18);
        assert!(view.has_more);

        let view = engine.load_more();
        assert_eq!(view.cards.len(), 20);
        assert!(!view.has_more);

        let before = engine.state().visible_count();
        let view = engine.load_more();
        assert_eq!(view.cards.len(), 20);
        assert_eq!(engine.state().visible_count(), before);
    }

    #[test]
    fn test_tag_held_by_two_posts() {
        let mut engine = engine();
        let view = engine.set_tag(Some("Backend"));
        let ids: Vec<u32> = view.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 4]);
        assert!(!view.has_more);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut engine = engine();
        let view = engine.set_search_term("css GRID");
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].title, "Desvendando o CSS Grid Layout");
    }

    #[test]
    fn test_search_and_tag_combine() {
        let mut engine = engine();
        engine.set_tag(Some("JavaScript"));
        let view = engine.set_search_term("node");
        let ids: Vec<u32> = view.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn test_tag_match_is_case_sensitive() {
        let mut engine = engine();
        let view = engine.set_tag(Some("css"));
        assert!(view.is_empty());
    }

    #[test]
    fn test_no_results_state() {
        let mut engine = engine();
        let view = engine.set_search_term("rust");
        assert!(view.cards.is_empty());
        assert!(!view.has_more);
        assert_eq!(view.empty_message.as_deref(), Some(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_card_model() {
        let view = engine().view();
        let card = &view.cards[0];
        assert_eq!(card.href, "post.html?id=1");
        assert_eq!(card.formatted_date, "15 de setembro de 2025");
        assert_eq!(card.tags, vec!["CSS", "Frontend", "Web Design"]);
        assert_eq!(card.image_url, "https://picsum.photos/800/400?random=1");
    }

    #[test]
    fn test_tag_options_single_select() {
        let mut engine = engine();
        let options = engine.tag_options();
        assert_eq!(options.len(), 10);
        assert_eq!(options[0].label, "Todos");
        assert!(options[0].active);
        assert_eq!(options.iter().filter(|o| o.active).count(), 1);

        engine.set_tag(Some("HTML"));
        engine.set_tag(Some("CSS"));
        let options = engine.tag_options();
        let active: Vec<&str> = options.iter().filter(|o| o.active).map(|o| o.label.as_str()).collect();
        assert_eq!(active, vec!["CSS"]);

        engine.set_tag(None);
        assert!(engine.tag_options()[0].active);
    }

    #[test]
    fn test_empty_repository_renders_no_results() {
        let repository = Rc::new(PostRepository::from_posts(Vec::new()).unwrap());
        let engine = ListingEngine::new(repository, &ListingConfig::default());
        let view = engine.view();
        assert!(view.is_empty());
        assert!(view.empty_message.is_some());
        assert_eq!(engine.tag_options().len(), 1);
    }
}
