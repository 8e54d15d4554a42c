use sqlx::PgPool;

use crate::models::NewVisitor;

pub async fn insert(pool: &PgPool, visitor: &NewVisitor) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO visitors (nama, instansi, kontak, pic_lab, tujuan, tujuan_custom, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
    )
    .bind(&visitor.name)
    .bind(&visitor.organization)
    .bind(&visitor.contact)
    .bind(&visitor.lab_contact)
    .bind(&visitor.purpose)
    .bind(visitor.custom_purpose.as_deref())
    .bind(visitor.created_at)
    .fetch_one(pool)
    .await
}
