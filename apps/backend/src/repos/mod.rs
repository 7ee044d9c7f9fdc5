pub mod draft_order;
pub mod draft_state;
pub mod leagues;
pub mod messages;
pub mod picks;
pub mod players;
pub mod teams;
