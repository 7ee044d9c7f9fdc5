use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "full_name")]
    pub full_name: String,
    pub position: String,
    pub salary: i64,
    #[sea_orm(column_name = "projected_points")]
    pub projected_points: f64,
    #[sea_orm(column_name = "is_active")]
    pub is_active: bool,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::draft_picks::Entity")]
    DraftPicks,
}

impl Related<super::draft_picks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DraftPicks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
