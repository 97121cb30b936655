use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryOrder, QuerySelect, Set,
};

use crate::entities::recipes::{self, StringList};

pub mod dto;

pub use dto::{RecipeCreate, RecipeUpdate};

pub async fn create_recipe<C: ConnectionTrait>(
    conn: &C,
    dto: RecipeCreate,
) -> Result<recipes::Model, DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = recipes::ActiveModel {
        id: NotSet,
        author: Set(dto.author),
        ingredients: Set(StringList(dto.ingredients)),
        steps: Set(StringList(dto.steps)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i64,
) -> Result<Option<recipes::Model>, DbErr> {
    recipes::Entity::find_by_id(id).one(conn).await
}

pub async fn list_page<C: ConnectionTrait>(
    conn: &C,
    limit: u64,
    offset: u64,
) -> Result<Vec<recipes::Model>, DbErr> {
    recipes::Entity::find()
        .order_by_asc(recipes::Column::Id)
        .limit(limit)
        .offset(offset)
        .all(conn)
        .await
}

pub async fn update_recipe<C: ConnectionTrait>(
    conn: &C,
    dto: RecipeUpdate,
) -> Result<recipes::Model, DbErr> {
    let active = recipes::ActiveModel {
        id: Set(dto.id),
        ingredients: Set(StringList(dto.ingredients)),
        steps: Set(StringList(dto.steps)),
        updated_at: Set(dto.updated_at),
        ..Default::default()
    };

    active.update(conn).await
}

pub async fn delete_recipe<C: ConnectionTrait>(conn: &C, id: i64) -> Result<u64, DbErr> {
    let res = recipes::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}
