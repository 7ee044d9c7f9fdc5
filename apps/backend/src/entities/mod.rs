pub mod draft_order;
pub mod draft_picks;
pub mod draft_state;
pub mod fantasy_teams;
pub mod league_messages;
pub mod league_settings;
pub mod leagues;
pub mod players;

pub use draft_order::Entity as DraftOrder;
pub use draft_picks::Entity as DraftPicks;
pub use draft_state::Entity as DraftState;
pub use fantasy_teams::Entity as FantasyTeams;
pub use league_messages::Entity as LeagueMessages;
pub use league_settings::Entity as LeagueSettings;
pub use leagues::Entity as Leagues;
pub use players::Entity as Players;
