pub mod draft_flow;
pub mod leagues;
pub mod picks;
pub mod teams;
