use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum DraftStatus {
    #[sea_orm(string_value = "SCHEDULED")]
    Scheduled,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "PAUSED")]
    Paused,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum LeaguePhase {
    #[sea_orm(string_value = "PRE_DRAFT")]
    PreDraft,
    #[sea_orm(string_value = "REGULAR_SEASON")]
    RegularSeason,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leagues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_name = "max_teams", column_type = "SmallInteger")]
    pub max_teams: i16,
    #[sea_orm(column_name = "draft_date")]
    pub draft_date: Option<OffsetDateTime>,
    #[sea_orm(column_name = "draft_status")]
    pub draft_status: DraftStatus,
    #[sea_orm(column_name = "salary_cap_amount")]
    pub salary_cap_amount: i64,
    #[sea_orm(column_name = "current_phase")]
    pub current_phase: LeaguePhase,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fantasy_teams::Entity")]
    FantasyTeams,
    #[sea_orm(has_many = "super::draft_order::Entity")]
    DraftOrder,
}

impl Related<super::fantasy_teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FantasyTeams.def()
    }
}

impl Related<super::draft_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DraftOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
