use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    entities::contact::{ContactInsert, ContactMessage},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactRepo,
};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact(&self, msg: &ContactInsert) -> Result<ContactMessage, AppError>;
    async fn get_contact_by_id(&self, id: &Uuid) -> Result<ContactMessage, AppError>;
    async fn list_contacts(&self) -> Result<Vec<ContactMessage>, AppError>;
    async fn count_contacts(&self) -> Result<i64, AppError>;
    async fn set_read(&self, id: &Uuid, read: bool) -> Result<ContactMessage, AppError>;
}

impl SqlxContactRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxContactRepo { pool }
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepo {
    async fn create_contact(&self, msg: &ContactInsert) -> Result<ContactMessage, AppError> {
        let created = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, email, subject, message, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.subject)
        .bind(&msg.message)
        .bind(msg.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_contact_by_id(&self, id: &Uuid) -> Result<ContactMessage, AppError> {
        let contact = sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact message not found".to_string()))?;

        Ok(contact)
    }

    async fn list_contacts(&self) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn count_contacts(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn set_read(&self, id: &Uuid, read: bool) -> Result<ContactMessage, AppError> {
        let updated = sqlx::query_as::<_, ContactMessage>(
            r#"
            UPDATE contact_messages SET read = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(read)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact message not found".to_string()))?;

        Ok(updated)
    }
}
