use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::leagues::DraftStatus;

/// Per-league draft cursor singleton. Created when the draft starts,
/// mutated exclusively by the orchestrator while in progress.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "draft_state")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "league_id")]
    pub league_id: i64,
    #[sea_orm(column_name = "current_pick_id")]
    pub current_pick_id: Option<i64>,
    #[sea_orm(column_name = "current_pick_number")]
    pub current_pick_number: i32,
    #[sea_orm(column_name = "current_round", column_type = "SmallInteger")]
    pub current_round: i16,
    #[sea_orm(column_name = "draft_status")]
    pub draft_status: DraftStatus,
    #[sea_orm(column_name = "is_auto_pick_active")]
    pub is_auto_pick_active: bool,
    #[sea_orm(column_name = "total_picks")]
    pub total_picks: i32,
    #[sea_orm(column_name = "completed_picks")]
    pub completed_picks: i32,
    #[sea_orm(column_name = "draft_started_at")]
    pub draft_started_at: Option<OffsetDateTime>,
    #[sea_orm(column_name = "draft_completed_at")]
    pub draft_completed_at: Option<OffsetDateTime>,
    #[sea_orm(column_name = "last_activity_at")]
    pub last_activity_at: Option<OffsetDateTime>,
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
