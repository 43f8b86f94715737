//! Walled grid Snake: a snake eats apples to grow and score, dies on walls or
//! its own tail, and speeds up with every level.
//!
//! The core ([`snake`], [`board`], [`game`], [`timer`]) knows nothing about
//! terminals; presentation happens behind the [`view::View`] trait, with the
//! ratatui front end in [`terminal_view`], [`renderer`] and [`ui`].

pub mod apple;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod terminal_view;
pub mod timer;
pub mod ui;
pub mod view;
