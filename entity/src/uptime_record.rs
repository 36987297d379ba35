use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "uptime_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub server_id: String,
    pub date: DateTimeUtc,
    /// Uptime percentage for the day
    pub uptime: f64,
    pub incidents: i32,
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
