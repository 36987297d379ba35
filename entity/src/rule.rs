use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub server_id: String,
    pub name: String,
    /// Either `COMMAND` or `AUTO`
    pub rule_type: String,
    pub description: String,
    pub permission: Option<String>,
    pub trigger: Option<String>,
    pub usage_count: i32,
    pub trigger_count: i32,
    pub is_active: bool,
    pub created_by: Option<String>,
    pub created_at: DateTimeUtc,
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
