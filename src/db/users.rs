use sqlx::PgPool;

use crate::models::UserSubmission;

pub async fn insert(pool: &PgPool, user: &UserSubmission) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (nama, nim, kontak) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&user.name)
    .bind(&user.member_id)
    .bind(&user.contact)
    .fetch_one(pool)
    .await
}
