//! Button Kit GPUI - A small GPUI component library demo
//!
//! This library provides a reusable, theme-aware [`components::Button`]
//! control, the configuration/theme/logging plumbing around it, and a
//! storybook for previewing and exercising the component.

pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod stories;
pub mod storybook;
pub mod theme;
