use validator::Validate;

use crate::{
    constants::POSTS_PER_PAGE,
    entities::blog_post::{
        BlogPost, BlogPostCreatedResponse, BlogPostDetailResponse, BlogPostInsert,
        BlogPostListResponse, NewBlogPostRequest, UpdateBlogPostRequest,
    },
    errors::AppError,
    repositories::blog_post::BlogPostRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct BlogHandler<R>
where
    R: BlogPostRepository,
{
    pub blog_post_repo: R,
}

impl<R> BlogHandler<R>
where
    R: BlogPostRepository,
{
    pub fn new(blog_post_repo: R) -> Self {
        BlogHandler { blog_post_repo }
    }

    /// Creates a new blog post, generating the slug from the title when
    /// none is provided
    pub async fn create_post(&self, request: NewBlogPostRequest) -> Result<BlogPostCreatedResponse, AppError> {
        let insert = BlogPostInsert::try_from(request)?;

        let post = self.blog_post_repo.create_blog_post(&insert).await?;

        Ok(BlogPostCreatedResponse {
            id: post.id,
            slug: post.slug.clone(),
            preview_url: format!("/blog/{}", post.slug),
        })
    }

    /// Lists published posts, newest first
    pub async fn published_posts(&self, page: u32) -> Result<BlogPostListResponse, AppError> {
        self.list_posts(true, page, POSTS_PER_PAGE).await
    }

    /// Lists posts for the admin surface, including unpublished ones
    pub async fn all_posts(&self, page: u32, per_page: u32) -> Result<BlogPostListResponse, AppError> {
        self.list_posts(false, page, per_page).await
    }

    async fn list_posts(
        &self,
        published_only: bool,
        page: u32,
        per_page: u32,
    ) -> Result<BlogPostListResponse, AppError> {
        let posts = self
            .blog_post_repo
            .list_blog_posts(published_only, page, per_page)
            .await?;
        let total = self.blog_post_repo.count_blog_posts(published_only).await?;

        Ok(BlogPostListResponse {
            posts: posts.iter().map(BlogPost::to_list_item).collect(),
            total,
            page,
            per_page,
        })
    }

    /// Resolves a post by slug for public display. Unpublished posts are
    /// not resolvable through this path.
    pub async fn post_by_slug(&self, slug: &str) -> Result<BlogPostDetailResponse, AppError> {
        let post = self
            .blog_post_repo
            .get_blog_post_by_slug(slug)
            .await?
            .filter(|post| post.published)
            .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;

        Ok(post.to_detail_response())
    }

    /// Retrieves a post by its ID (admin path; publish state is ignored)
    pub async fn get_post(&self, id: &str) -> Result<BlogPost, AppError> {
        let valid_id = valid_uuid(id)?;
        self.blog_post_repo.get_blog_post_by_id(&valid_id).await
    }

    /// Applies a partial update to an existing post
    pub async fn update_post(
        &self,
        id: &str,
        request: &UpdateBlogPostRequest,
    ) -> Result<BlogPost, AppError> {
        request.validate()?;

        let valid_id = valid_uuid(id)?;
        self.blog_post_repo.update_blog_post(&valid_id, request).await
    }

    /// Marks a post as published
    pub async fn publish_post(&self, id: &str) -> Result<BlogPost, AppError> {
        let valid_id = valid_uuid(id)?;
        self.blog_post_repo.publish_blog_post(&valid_id).await
    }

    /// Deletes a post by its ID
    pub async fn delete_post(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.blog_post_repo
            .delete_blog_post(&valid_id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::NotFound("Blog post not found".to_string()),
                _ => e,
            })
    }
}
