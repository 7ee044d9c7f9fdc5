use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Why the orchestrator completed an entry. Entries completed by direct
/// human action carry no reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AutoPickReason {
    #[sea_orm(string_value = "TIME_EXPIRED")]
    TimeExpired,
    #[sea_orm(string_value = "AUTODRAFT_ENABLED")]
    AutodraftEnabled,
    #[sea_orm(string_value = "INSUFFICIENT_CAP_SPACE")]
    InsufficientCapSpace,
    #[sea_orm(string_value = "NO_ELIGIBLE_PLAYERS")]
    NoEligiblePlayers,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "draft_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "league_id")]
    pub league_id: i64,
    /// Globally unique within a league, monotone across rounds.
    #[sea_orm(column_name = "pick_number")]
    pub pick_number: i32,
    #[sea_orm(column_type = "SmallInteger")]
    pub round: i16,
    #[sea_orm(column_name = "team_position", column_type = "SmallInteger")]
    pub team_position: i16,
    #[sea_orm(column_name = "is_completed")]
    pub is_completed: bool,
    #[sea_orm(column_name = "is_auto_picked")]
    pub is_auto_picked: bool,
    #[sea_orm(column_name = "auto_pick_reason")]
    pub auto_pick_reason: Option<AutoPickReason>,
    /// Null until the pick becomes current.
    #[sea_orm(column_name = "time_started")]
    pub time_started: Option<OffsetDateTime>,
    #[sea_orm(column_name = "time_expires")]
    pub time_expires: Option<OffsetDateTime>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::leagues::Entity",
        from = "Column::LeagueId",
        to = "super::leagues::Column::Id"
    )]
    League,
}

impl Related<super::leagues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::League.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
