//! Reusable UI Components for Button Kit
//!
//! # Components
//!
//! - [`Button`] - Interactive button with semantic color variants
//!   (Primary, Accent, Warn) and an activation event channel
//!
//! # Design Patterns
//!
//! All components follow these patterns:
//! - **Colors struct**: Pre-computed colors (Copy/Clone) for efficient closure use
//! - **Builder pattern**: Fluent API with `.method()` chaining
//! - **IntoElement trait**: Compatible with GPUI's element system
//! - **Theme integration**: Use `from_theme()` for colors

pub mod button;
#[cfg(test)]
mod button_tests;

// Re-export commonly used types
pub use button::{
    ActivationEvent, ActivationHandler, Button, ButtonColor, ButtonColors, ButtonProps,
};
