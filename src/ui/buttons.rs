//! Button grid layout and rendering.

use gpui::{Context, Div, ElementId, Hsla, SharedString, Stateful, div, prelude::*};

use crate::input::Action;
use crate::ui::calculator::CalculatorView;
use crate::ui::theme::theme;

/// Button labels, row by row. Every label parses with [`Action::from_label`].
pub const BUTTON_ROWS: &[&[&str]] = &[
    &["MC", "MR", "M-", "M+"],
    &["C", "√", "^", "/"],
    &["7", "8", "9", "*"],
    &["4", "5", "6", "-"],
    &["1", "2", "3", "+"],
    &["AC", "0", ".", "="],
    &["±", "%"],
];

/// How a button is colored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Digits and the decimal point.
    Plain,
    /// Operations and `=`.
    Accent,
    /// Memory, clearing, sign and percentage.
    Muted,
}

impl ButtonStyle {
    pub fn for_action(action: Action) -> Self {
        match action {
            Action::Digit(_) => Self::Plain,
            Action::Operation(_) | Action::Evaluate => Self::Accent,
            Action::ClearAll
            | Action::ClearEntry
            | Action::ToggleSign
            | Action::Percentage
            | Action::MemoryClear
            | Action::MemoryAdd
            | Action::MemorySubtract
            | Action::MemoryRecall => Self::Muted,
        }
    }

    fn colors(self) -> (Hsla, Hsla, Hsla) {
        let t = theme();
        match self {
            Self::Plain => (
                t.button_background,
                t.button_background_hover,
                t.button_text_color,
            ),
            Self::Accent => (
                t.accent_background,
                t.accent_background_hover,
                t.accent_text_color,
            ),
            Self::Muted => (
                t.muted_background,
                t.muted_background_hover,
                t.button_text_color,
            ),
        }
    }
}

/// Render the whole grid. Each button forwards its action to the view.
pub fn render_button_grid(cx: &mut Context<CalculatorView>) -> Div {
    let t = theme();
    let mut grid = div().flex().flex_col().flex_1().gap(t.button_gap);
    let mut index = 0;

    for row in BUTTON_ROWS {
        let mut row_element = div().flex().flex_row().flex_1().gap(t.button_gap);
        for label in row.iter() {
            let Some(action) = Action::from_label(label) else {
                tracing::warn!(label, "Skipping button without an action");
                continue;
            };
            row_element = row_element.child(render_button(index, label, action, cx));
            index += 1;
        }
        grid = grid.child(row_element);
    }

    grid
}

fn render_button(
    index: usize,
    label: &'static str,
    action: Action,
    cx: &mut Context<CalculatorView>,
) -> Stateful<Div> {
    let t = theme();
    let (background, hover_background, text_color) = ButtonStyle::for_action(action).colors();

    div()
        .id(ElementId::NamedInteger("calc-button".into(), index as u64))
        .flex_1()
        .min_h(t.button_height)
        .flex()
        .items_center()
        .justify_center()
        .bg(background)
        .hover(move |style| style.bg(hover_background))
        .rounded(t.button_radius)
        .cursor_pointer()
        .text_size(t.button_text_size)
        .text_color(text_color)
        .child(SharedString::from(label))
        .on_click(cx.listener(move |this, _event, _window, cx| {
            this.perform(action, cx);
        }))
}
