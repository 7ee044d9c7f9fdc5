use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fantasy_teams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "league_id")]
    pub league_id: i64,
    #[sea_orm(column_name = "team_name")]
    pub team_name: String,
    /// 1..N slot in round one; fixed for the duration of the draft.
    #[sea_orm(column_name = "draft_position", column_type = "SmallInteger")]
    pub draft_position: i16,
    #[sea_orm(column_name = "autodraft_enabled")]
    pub autodraft_enabled: bool,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::leagues::Entity",
        from = "Column::LeagueId",
        to = "super::leagues::Column::Id"
    )]
    League,
    #[sea_orm(has_many = "super::draft_picks::Entity")]
    DraftPicks,
}

impl Related<super::leagues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::League.def()
    }
}

impl Related<super::draft_picks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DraftPicks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
