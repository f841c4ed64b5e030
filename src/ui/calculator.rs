//! The calculator window view.
//!
//! Holds the [`Calculator`] for the lifetime of the window, forwards clicks
//! and key presses through the input mapping and re-renders the display.

use gpui::{
    App, Context, Div, FocusHandle, Focusable, KeyDownEvent, SharedString, Window, div,
    prelude::*,
};

use crate::calculator::{CalcError, Calculator, copy_to_clipboard};
use crate::display::DisplayText;
use crate::input::{Action, Key, action_for_key, dispatch};
use crate::ui::buttons::render_button_grid;
use crate::ui::theme::theme;

pub struct CalculatorView {
    calculator: Calculator,
    /// Failure from the last evaluation, shown until the next action.
    error: Option<CalcError>,
    focus_handle: FocusHandle,
}

impl CalculatorView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            calculator: Calculator::new(),
            error: None,
            focus_handle,
        }
    }

    /// Apply one action and schedule a re-render.
    pub fn perform(&mut self, action: Action, cx: &mut Context<Self>) {
        self.error = dispatch(&mut self.calculator, action).err();
        cx.notify();
    }

    fn display_text(&self) -> DisplayText {
        DisplayText::from_calculator(&self.calculator, self.error.as_ref())
    }

    fn copy_primary(&self) {
        let text = self.display_text().primary;
        match copy_to_clipboard(&text) {
            Ok(()) => tracing::debug!(%text, "Copied result"),
            Err(e) => tracing::error!(error = %e, "Copy failed"),
        }
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        let modifiers = &keystroke.modifiers;

        if modifiers.control || modifiers.platform {
            if keystroke.key == "c" {
                self.copy_primary();
                cx.stop_propagation();
            }
            return;
        }
        if modifiers.alt {
            return;
        }

        let key = match keystroke.key.as_str() {
            "enter" => Some(Key::Enter),
            "backspace" => Some(Key::Backspace),
            _ => keystroke
                .key_char
                .as_deref()
                .and_then(|s| {
                    let mut chars = s.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Some(c),
                        _ => None,
                    }
                })
                .map(Key::Char),
        };

        if let Some(action) = key.and_then(action_for_key) {
            self.perform(action, cx);
            cx.stop_propagation();
        }
    }

    fn render_display(&self) -> Div {
        let t = theme();
        let text = self.display_text();
        let primary_color = if self.error.is_some() {
            t.error_text_color
        } else {
            t.primary_text_color
        };

        div()
            .flex()
            .flex_col()
            .items_end()
            .justify_end()
            .px(t.panel_padding * 2.0)
            .py(t.panel_padding)
            .bg(t.panel_background)
            .rounded(t.panel_radius)
            .child(
                div()
                    .h(t.annotation_text_size * 1.5)
                    .text_size(t.annotation_text_size)
                    .text_color(t.annotation_text_color)
                    .child(SharedString::from(text.annotation)),
            )
            .child(
                div()
                    .w_full()
                    .flex()
                    .justify_end()
                    .overflow_hidden()
                    .text_size(t.primary_text_size)
                    .text_color(primary_color)
                    .child(SharedString::from(text.primary)),
            )
    }
}

impl Focusable for CalculatorView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for CalculatorView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let t = theme();

        div()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .size_full()
            .flex()
            .flex_col()
            .gap(t.panel_gap)
            .p(t.panel_padding)
            .bg(t.window_background)
            .child(self.render_display())
            .child(
                div()
                    .flex()
                    .flex_col()
                    .flex_1()
                    .p(t.panel_padding)
                    .bg(t.panel_background)
                    .rounded(t.panel_radius)
                    .child(render_button_grid(cx)),
            )
    }
}
