use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bot_status")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// One of `online`, `maintenance` or `offline`
    pub status: String,
    pub status_message: Option<String>,
    pub announcement: Option<String>,
    pub updated_by: Option<String>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
