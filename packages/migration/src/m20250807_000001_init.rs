use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
// Status/enum columns are stored as TEXT so the same schema runs on
// Postgres (prod) and SQLite (tests); the entity layer owns the value sets.

#[derive(Iden)]
enum Leagues {
    Table,
    Id,
    Name,
    MaxTeams,
    DraftDate,
    DraftStatus,
    SalaryCapAmount,
    CurrentPhase,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum LeagueSettings {
    Table,
    Id,
    LeagueId,
    DraftTimePerPick,
    DraftAutoPickEnabled,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum FantasyTeams {
    Table,
    Id,
    LeagueId,
    TeamName,
    DraftPosition,
    AutodraftEnabled,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    FullName,
    Position,
    Salary,
    ProjectedPoints,
    IsActive,
    CreatedAt,
}

#[derive(Iden)]
enum DraftOrder {
    Table,
    Id,
    LeagueId,
    PickNumber,
    Round,
    TeamPosition,
    IsCompleted,
    IsAutoPicked,
    AutoPickReason,
    TimeStarted,
    TimeExpires,
    CreatedAt,
}

#[derive(Iden)]
enum DraftState {
    Table,
    Id,
    LeagueId,
    CurrentPickId,
    CurrentPickNumber,
    CurrentRound,
    DraftStatus,
    IsAutoPickActive,
    TotalPicks,
    CompletedPicks,
    DraftStartedAt,
    DraftCompletedAt,
    LastActivityAt,
}

#[derive(Iden)]
enum DraftPicks {
    Table,
    Id,
    LeagueId,
    PickNumber,
    Round,
    FantasyTeamId,
    PlayerId,
    CreatedAt,
}

#[derive(Iden)]
enum LeagueMessages {
    Table,
    Id,
    LeagueId,
    MessageType,
    Body,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // leagues
        manager
            .create_table(
                Table::create()
                    .table(Leagues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Leagues::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Leagues::Name).string().not_null())
                    .col(ColumnDef::new(Leagues::MaxTeams).small_integer().not_null())
                    .col(
                        ColumnDef::new(Leagues::DraftDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Leagues::DraftStatus)
                            .string()
                            .not_null()
                            .default("SCHEDULED"),
                    )
                    .col(
                        ColumnDef::new(Leagues::SalaryCapAmount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Leagues::CurrentPhase)
                            .string()
                            .not_null()
                            .default("PRE_DRAFT"),
                    )
                    .col(
                        ColumnDef::new(Leagues::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Leagues::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // index used by the run-loop scan for startable drafts
        manager
            .create_index(
                Index::create()
                    .name("idx_leagues_draft_status")
                    .table(Leagues::Table)
                    .col(Leagues::DraftStatus)
                    .to_owned(),
            )
            .await?;

        // league_settings
        manager
            .create_table(
                Table::create()
                    .table(LeagueSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeagueSettings::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(LeagueSettings::LeagueId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeagueSettings::DraftTimePerPick)
                            .integer()
                            .not_null()
                            .default(60),
                    )
                    .col(
                        ColumnDef::new(LeagueSettings::DraftAutoPickEnabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(LeagueSettings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeagueSettings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_settings_league_id")
                            .from(LeagueSettings::Table, LeagueSettings::LeagueId)
                            .to(Leagues::Table, Leagues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_league_settings_league_id")
                    .table(LeagueSettings::Table)
                    .col(LeagueSettings::LeagueId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // fantasy_teams
        manager
            .create_table(
                Table::create()
                    .table(FantasyTeams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FantasyTeams::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(FantasyTeams::LeagueId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FantasyTeams::TeamName).string().not_null())
                    .col(
                        ColumnDef::new(FantasyTeams::DraftPosition)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FantasyTeams::AutodraftEnabled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(FantasyTeams::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FantasyTeams::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fantasy_teams_league_id")
                            .from(FantasyTeams::Table, FantasyTeams::LeagueId)
                            .to(Leagues::Table, Leagues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_fantasy_teams_league_draft_position")
                    .table(FantasyTeams::Table)
                    .col(FantasyTeams::LeagueId)
                    .col(FantasyTeams::DraftPosition)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Players::FullName).string().not_null())
                    .col(ColumnDef::new(Players::Position).string().not_null())
                    .col(ColumnDef::new(Players::Salary).big_integer().not_null())
                    .col(
                        ColumnDef::new(Players::ProjectedPoints)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Players::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_players_salary")
                    .table(Players::Table)
                    .col(Players::Salary)
                    .to_owned(),
            )
            .await?;

        // draft_order
        manager
            .create_table(
                Table::create()
                    .table(DraftOrder::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DraftOrder::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(DraftOrder::LeagueId).big_integer().not_null())
                    .col(ColumnDef::new(DraftOrder::PickNumber).integer().not_null())
                    .col(ColumnDef::new(DraftOrder::Round).small_integer().not_null())
                    .col(
                        ColumnDef::new(DraftOrder::TeamPosition)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DraftOrder::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(DraftOrder::IsAutoPicked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(DraftOrder::AutoPickReason).string().null())
                    .col(
                        ColumnDef::new(DraftOrder::TimeStarted)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(DraftOrder::TimeExpires)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(DraftOrder::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_draft_order_league_id")
                            .from(DraftOrder::Table, DraftOrder::LeagueId)
                            .to(Leagues::Table, Leagues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_draft_order_league_pick_number")
                    .table(DraftOrder::Table)
                    .col(DraftOrder::LeagueId)
                    .col(DraftOrder::PickNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // scan for incomplete picks by league
        manager
            .create_index(
                Index::create()
                    .name("idx_draft_order_league_incomplete")
                    .table(DraftOrder::Table)
                    .col(DraftOrder::LeagueId)
                    .col(DraftOrder::IsCompleted)
                    .to_owned(),
            )
            .await?;

        // draft_state (per-league singleton cursor)
        manager
            .create_table(
                Table::create()
                    .table(DraftState::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DraftState::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(DraftState::LeagueId).big_integer().not_null())
                    .col(
                        ColumnDef::new(DraftState::CurrentPickId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(DraftState::CurrentPickNumber)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(DraftState::CurrentRound)
                            .small_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(DraftState::DraftStatus)
                            .string()
                            .not_null()
                            .default("SCHEDULED"),
                    )
                    .col(
                        ColumnDef::new(DraftState::IsAutoPickActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(DraftState::TotalPicks)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DraftState::CompletedPicks)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DraftState::DraftStartedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(DraftState::DraftCompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(DraftState::LastActivityAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_draft_state_league_id")
                            .from(DraftState::Table, DraftState::LeagueId)
                            .to(Leagues::Table, Leagues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_draft_state_league_id")
                    .table(DraftState::Table)
                    .col(DraftState::LeagueId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // draft_picks (committed selections; doubles as the roster log)
        manager
            .create_table(
                Table::create()
                    .table(DraftPicks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DraftPicks::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(DraftPicks::LeagueId).big_integer().not_null())
                    .col(ColumnDef::new(DraftPicks::PickNumber).integer().not_null())
                    .col(ColumnDef::new(DraftPicks::Round).small_integer().not_null())
                    .col(
                        ColumnDef::new(DraftPicks::FantasyTeamId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DraftPicks::PlayerId).big_integer().not_null())
                    .col(
                        ColumnDef::new(DraftPicks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_draft_picks_league_id")
                            .from(DraftPicks::Table, DraftPicks::LeagueId)
                            .to(Leagues::Table, Leagues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_draft_picks_fantasy_team_id")
                            .from(DraftPicks::Table, DraftPicks::FantasyTeamId)
                            .to(FantasyTeams::Table, FantasyTeams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_draft_picks_player_id")
                            .from(DraftPicks::Table, DraftPicks::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // a player can be drafted at most once per league
        manager
            .create_index(
                Index::create()
                    .name("ux_draft_picks_league_player")
                    .table(DraftPicks::Table)
                    .col(DraftPicks::LeagueId)
                    .col(DraftPicks::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_draft_picks_team")
                    .table(DraftPicks::Table)
                    .col(DraftPicks::FantasyTeamId)
                    .to_owned(),
            )
            .await?;

        // league_messages (best-effort activity feed)
        manager
            .create_table(
                Table::create()
                    .table(LeagueMessages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeagueMessages::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(LeagueMessages::LeagueId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeagueMessages::MessageType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LeagueMessages::Body).string().not_null())
                    .col(
                        ColumnDef::new(LeagueMessages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_messages_league_id")
                            .from(LeagueMessages::Table, LeagueMessages::LeagueId)
                            .to(Leagues::Table, Leagues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeagueMessages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DraftPicks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DraftState::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DraftOrder::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FantasyTeams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LeagueSettings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Leagues::Table).to_owned())
            .await?;
        Ok(())
    }
}
