//! Themed layout helpers for story content.

use gpui::*;

use crate::theme::ColorScheme;

/// Container for story content
pub fn story_container(colors: &ColorScheme) -> Div {
    div()
        .flex()
        .flex_col()
        .gap_4()
        .p_4()
        .bg(rgb(colors.background.main))
        .size_full()
        .overflow_hidden()
}

/// Section with title
pub fn story_section(colors: &ColorScheme, title: &str) -> Div {
    div().flex().flex_col().gap_2().child(
        div()
            .text_sm()
            .text_color(rgb(colors.text.muted))
            .child(title.to_string()),
    )
}

/// Item row with label and element
pub fn story_item(colors: &ColorScheme, label: &str, element: impl IntoElement) -> Div {
    div()
        .flex()
        .flex_row()
        .items_center()
        .gap_4()
        .child(
            div()
                .w(px(120.))
                .text_sm()
                .text_color(rgb(colors.text.muted))
                .child(label.to_string()),
        )
        .child(element)
}

/// Code block for examples
pub fn code_block(colors: &ColorScheme, code: &str) -> Div {
    div()
        .font_family("Menlo")
        .text_sm()
        .text_color(rgb(colors.text.secondary))
        .p_2()
        .bg(rgb(colors.background.panel))
        .rounded_md()
        .overflow_hidden()
        .child(code.to_string())
}

/// Horizontal divider
pub fn story_divider(colors: &ColorScheme) -> Div {
    div().h(px(1.)).w_full().bg(rgb(colors.ui.divider)).my_2()
}
