use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect, Set,
};

use crate::entities::authors;

pub mod dto;

pub use dto::{AuthorCreate, AuthorUpdate};

pub async fn create_author<C: ConnectionTrait>(
    conn: &C,
    dto: AuthorCreate,
) -> Result<authors::Model, DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = authors::ActiveModel {
        username: Set(dto.username),
        hashed_password: Set(dto.hashed_password),
        email: Set(dto.email),
        created_at: Set(now),
        updated_at: Set(now),
    };

    active.insert(conn).await
}

pub async fn find_by_username<C: ConnectionTrait>(
    conn: &C,
    username: &str,
) -> Result<Option<authors::Model>, DbErr> {
    authors::Entity::find_by_id(username.to_owned()).one(conn).await
}

pub async fn list_page<C: ConnectionTrait>(
    conn: &C,
    limit: u64,
    offset: u64,
) -> Result<Vec<authors::Model>, DbErr> {
    authors::Entity::find()
        .order_by_asc(authors::Column::Username)
        .limit(limit)
        .offset(offset)
        .all(conn)
        .await
}

/// Fails with `RecordNotUpdated` when the row vanished between read and write.
pub async fn update_author<C: ConnectionTrait>(
    conn: &C,
    dto: AuthorUpdate,
) -> Result<authors::Model, DbErr> {
    let active = authors::ActiveModel {
        username: Set(dto.username),
        hashed_password: Set(dto.hashed_password),
        email: Set(dto.email),
        updated_at: Set(dto.updated_at),
        ..Default::default()
    };

    active.update(conn).await
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_author<C: ConnectionTrait>(conn: &C, username: &str) -> Result<u64, DbErr> {
    let res = authors::Entity::delete_by_id(username.to_owned())
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
