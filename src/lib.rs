pub mod button;
pub mod collision;
pub mod entities;
pub mod error;
pub mod fleet;
pub mod game;
pub mod geometry;
pub mod input;
pub mod render;
pub mod scoreboard;
pub mod settings;
