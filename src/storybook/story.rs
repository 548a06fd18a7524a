use gpui::*;
use std::collections::HashMap;

use crate::theme::Theme;

/// A story renders a component in various states for preview
///
/// Stories are stateless previews of components. They render static
/// elements against the supplied theme and don't require app state or
/// window mutations.
pub trait Story: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn category(&self) -> &'static str;
    /// Render the story preview.
    fn render(&self, theme: &Theme) -> AnyElement;
    fn variants(&self) -> Vec<StoryVariant> {
        vec![StoryVariant::default()]
    }
    /// Simulate the story's interaction checks without a window: activate
    /// each interactive control once and report what its activation
    /// channel delivered. Stories with no interactive controls return
    /// an empty list.
    fn play(&self) -> Vec<PlayOutcome> {
        Vec::new()
    }
}

#[derive(Default, Clone)]
pub struct StoryVariant {
    pub name: String,
    pub description: Option<String>,
    pub props: HashMap<String, String>,
}

/// One simulated activation: which control was located, and the payload
/// its activation channel delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub control: SharedString,
    pub payload: SharedString,
}
