//! Storybook - Component Preview Tool for button-kit-gpui
//!
//! A standalone binary for previewing and testing Button Kit components.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin storybook
//! cargo run --bin storybook -- --story "button"
//! cargo run --bin storybook -- --play
//! ```

use gpui::*;

use button_kit_gpui::logging;
use button_kit_gpui::storybook::{all_stories, StoryBrowser};
use button_kit_gpui::theme;

fn main() {
    // Parse command line args
    let args: Vec<String> = std::env::args().collect();
    let mut initial_story: Option<String> = None;
    let mut play = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--story" | "-s" => {
                if i + 1 < args.len() {
                    initial_story = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--play" | "-p" => {
                play = true;
            }
            "--help" | "-h" => {
                eprintln!("Button Kit Storybook - Component Preview Tool");
                eprintln!();
                eprintln!("Usage: storybook [OPTIONS]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  -s, --story <ID>     Open a specific story by ID");
                eprintln!("  -p, --play           Run story play steps headlessly and exit");
                eprintln!("  -h, --help           Show this help message");
                eprintln!();
                eprintln!("Available stories:");
                eprintln!("  button           - Button component variants");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    let _guard = logging::init();

    if play {
        run_play(initial_story.as_deref());
        return;
    }

    let theme = theme::load_theme();

    Application::new().run(move |cx| {
        // Create window options
        let window_size = size(px(1200.), px(800.));
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                window_size,
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some("Button Kit Storybook".into()),
                appears_transparent: false,
                ..Default::default()
            }),
            window_min_size: Some(size(px(800.), px(600.))),
            focus: true,
            show: true,
            kind: WindowKind::Normal,
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            cx.new(|cx| {
                let mut browser = StoryBrowser::new(theme.clone(), cx);

                // Select initial story if specified
                if let Some(ref story_id) = initial_story {
                    browser.select_story(story_id);
                }

                browser
            })
        })
        .expect("Failed to open storybook window");
    });
}

/// Headless interaction checks: run each story's play step and report the
/// activations its controls delivered.
fn run_play(only: Option<&str>) {
    let mut total = 0;

    for entry in all_stories() {
        if only.is_some_and(|id| id != entry.story.id()) {
            continue;
        }

        let outcomes = entry.story.play();
        tracing::info!(
            story = entry.story.id(),
            outcomes = outcomes.len(),
            "Story play step finished"
        );

        for outcome in &outcomes {
            logging::log_activation(&outcome.control, &outcome.payload);
            println!(
                "{}: [{}] {}",
                entry.story.id(),
                outcome.control,
                outcome.payload
            );
        }
        total += outcomes.len();
    }

    println!("{} activation(s) delivered", total);
}
