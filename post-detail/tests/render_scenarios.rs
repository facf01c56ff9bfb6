use blog_common::{query_param, CommentWidget, PostRepository, Theme};
use post_detail::{DetailPage, DetailRenderer, GiscusLoader, NotFoundModel};

const SITE: &str = "https://blog.example/";

fn render_from_search(search: &str) -> DetailPage {
    let repo = PostRepository::sample().unwrap();
    let id = query_param(search, "id");
    DetailRenderer::new(repo).render(id.as_deref(), &format!("{}post.html{}", SITE, search))
}

#[test]
fn unknown_id_renders_fallback() {
    let page = render_from_search("?id=999");
    assert_eq!(page, DetailPage::NotFound(NotFoundModel::default()));
    assert_eq!(page.document_title(), "Post Não Encontrado - Meu Blog Hardcore");
}

#[test]
fn missing_query_renders_fallback() {
    assert!(!render_from_search("").is_found());
    assert!(!render_from_search("?ref=home").is_found());
    assert!(!render_from_search("?id=").is_found());
}

#[test]
fn listing_links_resolve_to_details() {
    let repo = PostRepository::sample().unwrap();
    for post in repo.all() {
        let href = blog_common::post_href(post.id);
        let search = href.trim_start_matches("post.html");
        let DetailPage::Found(model) = render_from_search(search) else {
            panic!("{} 应指向已有文章", href);
        };
        assert_eq!(model.id, post.id);
    }
}

#[test]
fn comments_reload_after_render_and_theme_change() {
    let repo = PostRepository::from_json(
        r#"[{"id": 5, "title": "Rust & WASM", "author": "A", "publishDate": "2025-08-20",
             "tags": [], "imageUrl": "img", "content": "<p>x</p>"}]"#,
    )
    .unwrap();
    let mut comments = GiscusLoader::default();

    let page = DetailRenderer::new(&repo).render(Some("5"), "https://blog.example/post.html?id=5");
    comments.reload(Theme::default());
    assert!(page.is_found());

    let theme = Theme::default().toggled();
    comments.reload(theme);

    let attrs = comments.current_attributes().unwrap();
    assert!(attrs.contains(&("data-theme", "light".to_string())));
    assert_eq!(comments.loads(), 2);

    let DetailPage::Found(model) = page else { unreachable!() };
    assert_eq!(model.formatted_date, "20 de agosto de 2025");
    assert_eq!(
        model.share_links[1].url,
        "https://twitter.com/intent/tweet?url=https%3A%2F%2Fblog.example%2Fpost.html%3Fid%3D5&text=Rust%20%26%20WASM"
    );
}
