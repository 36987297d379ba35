use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "discord_server")]
pub struct Model {
    /// Discord guild ID
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub member_count: i64,
    pub icon_url: Option<String>,
    pub is_active: bool,
    pub added_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rule::Entity")]
    Rule,
    #[sea_orm(has_many = "super::statistics::Entity")]
    Statistics,
    #[sea_orm(has_many = "super::uptime_record::Entity")]
    UptimeRecord,
}

impl Related<super::rule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rule.def()
    }
}

impl Related<super::statistics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Statistics.def()
    }
}

impl Related<super::uptime_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UptimeRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
