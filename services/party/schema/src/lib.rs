//! sea-orm entities for the party service tables.

pub mod admin_actions;
pub mod live_state;
pub mod photo_likes;
pub mod photos;
pub mod questions;
pub mod scores;
pub mod users;
