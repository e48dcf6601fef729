use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(250))", unique)]
    pub title: String,
    #[sea_orm(column_type = "String(StringLen::N(250))")]
    pub author: String,
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// All books, ascending by id.
pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
    Entity::find().order_by_asc(Column::Id).all(db).await
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(db).await
}

/// Inserts a row; the store assigns the id and enforces title uniqueness.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    title: &str,
    author: &str,
    rating: f64,
) -> Result<Model, DbErr> {
    let am = ActiveModel {
        title: Set(title.to_string()),
        author: Set(author.to_string()),
        rating: Set(rating),
        ..Default::default()
    };
    am.insert(db).await
}

pub async fn set_rating<C: ConnectionTrait>(db: &C, book: Model, rating: f64) -> Result<Model, DbErr> {
    let mut am: ActiveModel = book.into();
    am.rating = Set(rating);
    am.update(db).await
}

pub async fn delete<C: ConnectionTrait>(db: &C, book: Model) -> Result<(), DbErr> {
    book.delete(db).await?;
    Ok(())
}
