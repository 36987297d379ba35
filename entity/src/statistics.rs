use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "statistics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub server_id: String,
    pub date: DateTimeUtc,
    pub server_count: i32,
    pub user_count: i32,
    pub commands_executed: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::discord_server::Entity",
        from = "Column::ServerId",
        to = "super::discord_server::Column::Id",
        on_delete = "Cascade"
    )]
    DiscordServer,
}

impl Related<super::discord_server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordServer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
