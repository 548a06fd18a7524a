//! Button Kit - application shell
//!
//! Composes a single Button with fixed (config-overridable) parameters and
//! shows the activation payloads it emits.

use gpui::*;

use button_kit_gpui::components::{Button, ButtonColors, ButtonProps};
use button_kit_gpui::config;
use button_kit_gpui::error::NotifyResultExt;
use button_kit_gpui::logging;
use button_kit_gpui::theme::{self, Theme};

struct AppShell {
    title: SharedString,
    button_props: ButtonProps,
    theme: Theme,
}

impl Render for AppShell {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let colors = self.theme.colors.clone();
        let button_colors = ButtonColors::from_theme(&self.theme);

        let button = Button::from_props(self.button_props.clone(), button_colors);
        let control = button.control_id();
        let button = button.on_activate(Box::new(move |event, window, _cx| {
            logging::log_activation(&control, &event.payload);
            window.refresh();
        }));

        let recent = logging::last_activations(8);

        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(rgb(colors.background.main))
            .text_color(rgb(colors.text.secondary))
            .child(
                // Title bar
                div()
                    .px_4()
                    .py_2()
                    .bg(rgb(colors.background.title_bar))
                    .border_b_1()
                    .border_color(rgb(colors.ui.divider))
                    .text_sm()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(rgb(colors.text.primary))
                    .child(self.title.clone()),
            )
            .child(
                // The one composed control
                div()
                    .flex_1()
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(button),
            )
            .child(
                // Activation feed
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
                            .child("ACTIVATIONS"),
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
                    }),
            )
    }
}

fn main() {
    // Guard must stay alive for the duration of the program
    let _guard = logging::init();

    let config = config::load_config();
    let theme = theme::load_theme();

    let width = config.window_width();
    let height = config.window_height();
    let title: SharedString = config.window_title().into();
    let button_props = config.shell_button_props();

    tracing::info!(
        label = %button_props.label,
        color = button_props.color.name(),
        "Shell button configured"
    );

    Application::new().run(move |cx: &mut App| {
        let window_size = size(px(width), px(height));
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                window_size,
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some(title.clone()),
                appears_transparent: false,
                ..Default::default()
            }),
            focus: true,
            show: true,
            kind: WindowKind::Normal,
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            cx.new(|_cx| AppShell {
                title: title.clone(),
                button_props: button_props.clone(),
                theme: theme.clone(),
            })
        })
        .log_err();
    });
}
