//! Story Definitions for Button Kit Components
//!
//! This module contains all the story definitions for the storybook.
//! Stories are manually registered in get_all_stories().

mod button_stories;
#[cfg(test)]
mod button_stories_tests;

use crate::storybook::StoryEntry;
use std::sync::OnceLock;

// Re-export story types
pub use button_stories::ButtonStory;

/// Static storage for all stories
static ALL_STORIES: OnceLock<Vec<StoryEntry>> = OnceLock::new();

/// Get all registered stories
pub fn get_all_stories() -> &'static Vec<StoryEntry> {
    ALL_STORIES.get_or_init(|| {
        vec![
            // Components
            StoryEntry::new(Box::new(ButtonStory)),
        ]
    })
}
