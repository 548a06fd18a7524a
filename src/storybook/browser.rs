//! StoryBrowser - Main UI for browsing and previewing stories
//!
//! Features:
//! - Left sidebar with searchable story list grouped by category
//! - Right panel showing selected story preview
//! - Actions panel showing activation payloads emitted by story controls
//! - Keyboard navigation support (up/down to select, enter to play)

use gpui::*;

use crate::logging;
use crate::storybook::{all_categories, all_stories, StoryEntry};
use crate::theme::Theme;

/// Main browser view for the storybook
pub struct StoryBrowser {
    stories: Vec<&'static StoryEntry>,
    selected_index: usize,
    filter: String,
    theme: Theme,
    focus_handle: FocusHandle,
}

impl StoryBrowser {
    pub fn new(theme: Theme, cx: &mut Context<Self>) -> Self {
        let stories: Vec<_> = all_stories().collect();
        Self {
            stories,
            selected_index: 0,
            filter: String::new(),
            theme,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn select_story(&mut self, story_id: &str) {
        if let Some(pos) = self.stories.iter().position(|s| s.story.id() == story_id) {
            self.selected_index = pos;
        }
    }

    /// Run the selected story's play step and feed its outcomes into the
    /// activation log shown in the actions panel.
    fn play_selected(&mut self, cx: &mut Context<Self>) {
        if let Some(entry) = self.stories.get(self.selected_index) {
            let outcomes = entry.story.play();
            tracing::info!(
                story = entry.story.id(),
                outcomes = outcomes.len(),
                "Story play step finished"
            );
            for outcome in outcomes {
                logging::log_activation(&outcome.control, &outcome.payload);
            }
            cx.notify();
        }
    }

    fn filtered_stories(&self) -> Vec<&'static StoryEntry> {
        if self.filter.is_empty() {
            self.stories.clone()
        } else {
            let filter_lower = self.filter.to_lowercase();
            self.stories
                .iter()
                .filter(|s| {
                    s.story.name().to_lowercase().contains(&filter_lower)
                        || s.story.category().to_lowercase().contains(&filter_lower)
                })
                .copied()
                .collect()
        }
    }

    fn render_search_bar(&self, _cx: &mut Context<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let filter = self.filter.clone();
        div()
            .p_2()
            .border_b_1()
            .border_color(rgb(colors.ui.divider))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_2()
                    .px_2()
                    .py_1()
                    .bg(rgb(colors.background.panel))
                    .rounded_md()
                    .child(div().text_color(rgb(colors.text.muted)).child("🔍"))
                    .child(
                        div()
                            .flex_1()
                            .text_sm()
                            .text_color(if filter.is_empty() {
                                rgb(colors.text.muted)
                            } else {
                                rgb(colors.text.secondary)
                            })
                            .child(if filter.is_empty() {
                                "Search stories...".to_string()
                            } else {
                                filter
                            }),
                    ),
            )
    }

    fn render_story_list(
        &self,
        filtered: &[&'static StoryEntry],
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let colors = self.theme.colors.clone();
        let hover_bg = colors.ui.divider;
        let categories = all_categories();

        div()
            .flex()
            .flex_col()
            .flex_1()
            .overflow_hidden()
            .children(categories.into_iter().map(|category| {
                let category_stories: Vec<_> = filtered
                    .iter()
                    .filter(|s| s.story.category() == category)
                    .copied()
                    .collect();

                if category_stories.is_empty() {
                    return div().into_any_element();
                }

                div()
                    .flex()
                    .flex_col()
                    .child(
                        // Category header
                        div()
                            .px_3()
                            .py_2()
                            .text_xs()
                            .text_color(rgb(colors.text.muted))
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(category.to_uppercase()),
                    )
                    .children(category_stories.into_iter().map(|story| {
                        let is_selected = self
                            .stories
                            .iter()
                            .position(|s| s.story.id() == story.story.id())
                            == Some(self.selected_index);

                        let story_id = story.story.id();

                        let base = div()
                            .id(ElementId::Name(story_id.into()))
                            .px_3()
                            .py_1()
                            .cursor_pointer()
                            .text_sm()
                            .rounded_sm()
                            .child(story.story.name())
                            .on_click(cx.listener(move |this, _event, _window, cx| {
                                if let Some(pos) =
                                    this.stories.iter().position(|s| s.story.id() == story_id)
                                {
                                    this.selected_index = pos;
                                    cx.notify();
                                }
                            }));

                        if is_selected {
                            base.bg(rgb(colors.palette.primary))
                                .text_color(rgb(colors.text.on_fill))
                        } else {
                            base.text_color(rgb(colors.text.secondary))
                                .hover(move |s| s.bg(rgb(hover_bg)))
                        }
                    }))
                    .into_any_element()
            }))
    }

    fn render_toolbar(&self, _cx: &mut Context<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        div()
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .px_4()
            .py_2()
            .border_b_1()
            .border_color(rgb(colors.ui.divider))
            .bg(rgb(colors.background.panel))
            .child(
                // Left: story info
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_base()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(rgb(colors.text.primary))
                            .child(
                                self.stories
                                    .get(self.selected_index)
                                    .map(|s| s.story.name())
                                    .unwrap_or("No story selected"),
                            ),
                    )
                    .child(
                        div().text_xs().text_color(rgb(colors.text.muted)).child(
                            self.stories
                                .get(self.selected_index)
                                .map(|s| format!("({})", s.story.category()))
                                .unwrap_or_default(),
                        ),
                    ),
            )
            .child(
                // Right: hint for the play step
                div()
                    .text_xs()
                    .text_color(rgb(colors.text.muted))
                    .child("↵ play story"),
            )
    }

    fn render_preview(&self) -> AnyElement {
        if let Some(story) = self.stories.get(self.selected_index) {
            story.story.render(&self.theme)
        } else {
            div()
                .flex()
                .items_center()
                .justify_center()
                .size_full()
                .text_color(rgb(self.theme.colors.text.muted))
                .child("No story selected")
                .into_any_element()
        }
    }

    /// Bottom strip listing the most recent activation payloads, the
    /// counterpart of a story harness's action logger.
    fn render_actions_panel(&self) -> impl IntoElement {
        let colors = &self.theme.colors;
        let recent = logging::last_activations(6);

        div()
            .flex()
            .flex_col()
            .border_t_1()
            .border_color(rgb(colors.ui.divider))
            .bg(rgb(colors.background.panel))
            .px_3()
            .py_2()
            .child(
                div()
                    .text_xs()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(rgb(colors.text.muted))
                    .child("ACTIONS"),
            )
            .children(if recent.is_empty() {
                vec![div()
                    .text_xs()
                    .text_color(rgb(colors.text.muted))
                    .child("No activations yet")]
            } else {
                recent
                    .into_iter()
                    .map(|line| {
                        div()
                            .text_xs()
                            .text_color(rgb(colors.text.secondary))
                            .child(line)
                    })
                    .collect()
            })
    }

    fn move_selection_up(&mut self, cx: &mut Context<Self>) {
        let filtered = self.filtered_stories();
        if filtered.is_empty() {
            return;
        }

        if let Some(current) = self.stories.get(self.selected_index) {
            if let Some(pos) = filtered
                .iter()
                .position(|s| s.story.id() == current.story.id())
            {
                if pos > 0 {
                    let prev_story = filtered[pos - 1];
                    if let Some(main_pos) = self
                        .stories
                        .iter()
                        .position(|s| s.story.id() == prev_story.story.id())
                    {
                        self.selected_index = main_pos;
                        cx.notify();
                    }
                }
            }
        }
    }

    fn move_selection_down(&mut self, cx: &mut Context<Self>) {
        let filtered = self.filtered_stories();
        if filtered.is_empty() {
            return;
        }

        if let Some(current) = self.stories.get(self.selected_index) {
            if let Some(pos) = filtered
                .iter()
                .position(|s| s.story.id() == current.story.id())
            {
                if pos < filtered.len() - 1 {
                    let next_story = filtered[pos + 1];
                    if let Some(main_pos) = self
                        .stories
                        .iter()
                        .position(|s| s.story.id() == next_story.story.id())
                    {
                        self.selected_index = main_pos;
                        cx.notify();
                    }
                }
            }
        }
    }
}

impl Render for StoryBrowser {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = self.theme.colors.clone();
        let filtered = self.filtered_stories();
        let preview = self.render_preview();

        div()
            .id("story-browser")
            .key_context("StoryBrowser")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                let key = event.keystroke.key.as_str();
                match key {
                    "up" | "arrowup" => this.move_selection_up(cx),
                    "down" | "arrowdown" => this.move_selection_down(cx),
                    "enter" => this.play_selected(cx),
                    _ => {}
                }
            }))
            .flex()
            .flex_row()
            .size_full()
            .bg(rgb(colors.background.main))
            .text_color(rgb(colors.text.secondary))
            // Left sidebar: story list
            .child(
                div()
                    .w(px(280.))
                    .border_r_1()
                    .border_color(rgb(colors.ui.divider))
                    .flex()
                    .flex_col()
                    .bg(rgb(colors.background.panel))
                    .child(
                        // Header
                        div()
                            .px_3()
                            .py_2()
                            .border_b_1()
                            .border_color(rgb(colors.ui.divider))
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(rgb(colors.text.primary))
                                    .child("Button Kit Storybook"),
                            ),
                    )
                    .child(self.render_search_bar(cx))
                    .child(self.render_story_list(&filtered, cx)),
            )
            // Right panel: toolbar, story preview, actions
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .child(self.render_toolbar(cx))
                    .child(div().flex_1().child(preview))
                    .child(self.render_actions_panel()),
            )
    }
}

impl Focusable for StoryBrowser {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
