// src/core/mod.rs
//! Small pure helpers the table builders lean on: game id decoding, name
//! shaping, stolen-base attribution and innings arithmetic. Nothing in here
//! touches the filesystem or knows about whole bundles.

pub mod game_id;
pub mod innings;
pub mod names;
pub mod sanitize;
pub mod steals;

pub use game_id::{GameIdentity, parse_game_id};
pub use innings::{innings_to_outs, parse_innings};
pub use names::{PlayerIndex, display_name, slug_from_link};
pub use steals::{Side, resolve_stolen_bases};
