use sqlx::PgPool;

use crate::models::ManagerSubmission;

pub async fn insert(pool: &PgPool, manager: &ManagerSubmission) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("INSERT INTO managers (nama) VALUES ($1) RETURNING id")
        .bind(&manager.name)
        .fetch_one(pool)
        .await
}
