use chrono::Utc;
use mockall::mock;
use mockall::predicate::*;
use uuid::Uuid;

use portfolio_api::entities::blog_post::{
    BlogPost, BlogPostInsert, NewBlogPostRequest, UpdateBlogPostRequest,
};
use portfolio_api::errors::AppError;
use portfolio_api::use_cases::blog::BlogHandler;

mock! {
    pub BlogRepo {}

    #[async_trait::async_trait]
    impl portfolio_api::repositories::blog_post::BlogPostRepository for BlogRepo {
        async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<BlogPost, AppError>;
        async fn get_blog_post_by_id(&self, id: &Uuid) -> Result<BlogPost, AppError>;
        async fn get_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError>;
        async fn list_blog_posts(&self, published_only: bool, page: u32, per_page: u32) -> Result<Vec<BlogPost>, AppError>;
        async fn count_blog_posts(&self, published_only: bool) -> Result<i64, AppError>;
        async fn update_blog_post(&self, id: &Uuid, post: &UpdateBlogPostRequest) -> Result<BlogPost, AppError>;
        async fn publish_blog_post(&self, id: &Uuid) -> Result<BlogPost, AppError>;
        async fn delete_blog_post(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

fn post(slug: &str, published: bool) -> BlogPost {
    BlogPost {
        id: Uuid::new_v4(),
        title: "A Post".into(),
        slug: slug.into(),
        excerpt: "Short summary".into(),
        content_markdown: "# Heading\n\nBody.".into(),
        image_url: None,
        published,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn stored(insert: &BlogPostInsert) -> BlogPost {
    BlogPost {
        id: Uuid::new_v4(),
        title: insert.title.clone(),
        slug: insert.slug.clone(),
        excerpt: insert.excerpt.clone(),
        content_markdown: insert.content_markdown.clone(),
        image_url: insert.image_url.clone(),
        published: insert.published,
        created_at: insert.created_at,
        updated_at: insert.updated_at,
    }
}

#[tokio::test]
async fn unpublished_post_is_not_resolvable_by_slug() {
    let mut repo = MockBlogRepo::new();
    repo.expect_get_blog_post_by_slug()
        .with(eq("hidden-draft"))
        .returning(|slug| Ok(Some(post(slug, false))));

    let handler = BlogHandler::new(repo);

    let err = handler.post_by_slug("hidden-draft").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn missing_slug_is_not_found() {
    let mut repo = MockBlogRepo::new();
    repo.expect_get_blog_post_by_slug().returning(|_| Ok(None));

    let handler = BlogHandler::new(repo);

    let err = handler.post_by_slug("no-such-post").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn published_post_resolves_with_rendered_html() {
    let mut repo = MockBlogRepo::new();
    repo.expect_get_blog_post_by_slug()
        .with(eq("a-post"))
        .returning(|slug| Ok(Some(post(slug, true))));

    let handler = BlogHandler::new(repo);

    let detail = handler.post_by_slug("a-post").await.unwrap();
    assert_eq!(detail.slug, "a-post");
    assert!(detail.content_html.contains("<h1>Heading</h1>"));
}

#[tokio::test]
async fn create_generates_the_slug_from_the_title() {
    let mut repo = MockBlogRepo::new();
    repo.expect_create_blog_post()
        .withf(|insert: &BlogPostInsert| insert.slug == "my-first-post")
        .times(1)
        .returning(|insert| Ok(stored(insert)));

    let handler = BlogHandler::new(repo);

    let response = handler
        .create_post(NewBlogPostRequest {
            title: "My First Post".into(),
            slug: None,
            excerpt: "Hello world".into(),
            content_markdown: "Hello.".into(),
            image_url: None,
            published: false,
        })
        .await
        .unwrap();

    assert_eq!(response.slug, "my-first-post");
    assert_eq!(response.preview_url, "/blog/my-first-post");
}

#[tokio::test]
async fn published_listing_requests_only_published_rows() {
    let mut repo = MockBlogRepo::new();
    repo.expect_list_blog_posts()
        .withf(|published_only, page, per_page| *published_only && *page == 2 && *per_page == 6)
        .times(1)
        .returning(|_, _, _| Ok(vec![post("first", true), post("second", true)]));
    repo.expect_count_blog_posts()
        .with(eq(true))
        .returning(|_| Ok(14));

    let handler = BlogHandler::new(repo);

    let listing = handler.published_posts(2).await.unwrap();
    assert_eq!(listing.posts.len(), 2);
    assert_eq!(listing.total, 14);
    assert_eq!(listing.per_page, 6);
}

#[tokio::test]
async fn malformed_post_id_is_rejected_as_invalid_input() {
    let mut repo = MockBlogRepo::new();
    repo.expect_get_blog_post_by_id().times(0);

    let handler = BlogHandler::new(repo);

    let err = handler.get_post("not-a-uuid").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}
