use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::blog_post::{BlogPost, BlogPostInsert, UpdateBlogPostRequest},
    errors::AppError,
    repositories::sqlx_repo::{page_offset, SqlxBlogPostRepo},
};

#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<BlogPost, AppError>;
    async fn get_blog_post_by_id(&self, id: &Uuid) -> Result<BlogPost, AppError>;
    /// Looks up by slug regardless of publish state; the public use case
    /// applies the published-only rule.
    async fn get_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError>;
    async fn list_blog_posts(
        &self,
        published_only: bool,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<BlogPost>, AppError>;
    async fn count_blog_posts(&self, published_only: bool) -> Result<i64, AppError>;
    async fn update_blog_post(
        &self,
        id: &Uuid,
        post: &UpdateBlogPostRequest,
    ) -> Result<BlogPost, AppError>;
    async fn publish_blog_post(&self, id: &Uuid) -> Result<BlogPost, AppError>;
    async fn delete_blog_post(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxBlogPostRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxBlogPostRepo { pool }
    }
}

fn map_slug_conflict(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.constraint() == Some("blog_posts_slug_key") {
            return AppError::Conflict("Slug already exists".into());
        }
    }
    AppError::from(e)
}

#[async_trait]
impl BlogPostRepository for SqlxBlogPostRepo {
    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<BlogPost, AppError> {
        let created = sqlx::query_as::<_, BlogPost>(
            r#"
            INSERT INTO blog_posts (
                title, slug, excerpt, content_markdown, image_url,
                published, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.excerpt)
        .bind(&post.content_markdown)
        .bind(&post.image_url)
        .bind(post.published)
        .bind(post.created_at)
        .bind(post.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_slug_conflict)?;

        Ok(created)
    }

    async fn get_blog_post_by_id(&self, id: &Uuid) -> Result<BlogPost, AppError> {
        let post = sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;

        Ok(post)
    }

    async fn get_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError> {
        let post = sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        Ok(post)
    }

    async fn list_blog_posts(
        &self,
        published_only: bool,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<BlogPost>, AppError> {
        let mut builder = QueryBuilder::new("SELECT * FROM blog_posts");

        if published_only {
            builder.push(" WHERE published = TRUE");
        }

        builder.push(" ORDER BY created_at DESC");
        builder.push(" LIMIT ").push_bind(per_page as i64);
        builder.push(" OFFSET ").push_bind(page_offset(page, per_page));

        let posts = builder
            .build_query_as::<BlogPost>()
            .fetch_all(&self.pool)
            .await?;

        Ok(posts)
    }

    async fn count_blog_posts(&self, published_only: bool) -> Result<i64, AppError> {
        // Single query with the same filter predicate as listing
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM blog_posts
            WHERE ($1::boolean IS FALSE OR published = TRUE)
            "#,
        )
        .bind(published_only)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn update_blog_post(
        &self,
        id: &Uuid,
        post: &UpdateBlogPostRequest,
    ) -> Result<BlogPost, AppError> {
        // COALESCE used to preserve existing fields when no new value is provided
        let updated = sqlx::query_as::<_, BlogPost>(
            r#"
            UPDATE blog_posts SET
                title = COALESCE($1, title),
                slug = COALESCE($2, slug),
                excerpt = COALESCE($3, excerpt),
                content_markdown = COALESCE($4, content_markdown),
                image_url = COALESCE($5, image_url),
                published = COALESCE($6, published),
                updated_at = NOW()
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(post.title.flatten_str())
        .bind(post.slug.flatten_str())
        .bind(post.excerpt.flatten_str())
        .bind(post.content_markdown.flatten_str())
        .bind(post.image_url.flatten_str())
        .bind(post.published.flatten_copied())
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_slug_conflict)?;

        Ok(updated)
    }

    async fn publish_blog_post(&self, id: &Uuid) -> Result<BlogPost, AppError> {
        let published = sqlx::query_as::<_, BlogPost>(
            r#"
            UPDATE blog_posts SET
                published = TRUE,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(published)
    }

    async fn delete_blog_post(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Record not found".to_string()));
        }

        Ok(())
    }
}
