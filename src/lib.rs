//! A small desktop calculator.
//!
//! The [`calculator`] engine owns all arithmetic state and has no UI
//! dependency. [`input`] maps buttons and keys onto it, [`display`] projects
//! it into the two visible text lines and [`ui`] hosts it in a GPUI window.

pub mod calculator;
pub mod config;
pub mod display;
pub mod input;
pub mod ui;
