//! Storybook - Component preview system for button-kit-gpui
//!
//! This module provides a component preview system for GPUI components.
//!
//! # Components
//!
//! - [`Story`] - Trait for defining previewable stories
//! - [`StoryBrowser`] - Main UI for browsing stories
//! - [`story_container`], [`story_section`], etc. - Layout helpers
//!
//! Stories render statically against a theme, and may additionally define
//! a `play()` step that simulates user activation of their controls -
//! the headless counterpart of clicking through a story by hand. Emitted
//! activation payloads surface in the browser's actions panel and in the
//! `storybook --play` output.
//!
//! # Usage
//!
//! ```ignore
//! // Define a story
//! use crate::storybook::{story_container, story_section, story_item, Story};
//!
//! pub struct MyComponentStory;
//!
//! impl Story for MyComponentStory {
//!     fn id(&self) -> &'static str { "my-component" }
//!     fn name(&self) -> &'static str { "My Component" }
//!     fn category(&self) -> &'static str { "Components" }
//!     fn render(&self, theme: &Theme) -> AnyElement {
//!         let colors = &theme.colors;
//!         story_container(colors)
//!             .child(story_section(colors, "Variants")
//!                 .child(story_item(colors, "Default", MyComponent::new())))
//!             .into_any_element()
//!     }
//! }
//!
//! // Register it in stories/mod.rs get_all_stories()
//! ```

mod browser;
mod layout;
mod registry;
mod story;

pub use browser::StoryBrowser;
pub use layout::{code_block, story_container, story_divider, story_item, story_section};
pub use registry::{all_categories, all_stories, find_story, stories_by_category, StoryEntry};
pub use story::{PlayOutcome, Story, StoryVariant};
