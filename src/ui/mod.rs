pub mod buttons;
pub mod calculator;
pub mod theme;

pub use calculator::CalculatorView;
pub use theme::{Appearance, CalcTheme, init_theme, theme};

use crate::config::Config;
use gpui::{
    App, AppContext, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px, size,
};

/// Resolve the theme and open the calculator window.
pub fn open_calculator(config: &Config, cx: &mut App) -> anyhow::Result<()> {
    let appearance = Appearance::resolve(config.appearance, cx.window_appearance());
    tracing::info!(?appearance, accent = ?config.accent, "Resolved theme");
    init_theme(CalcTheme::new(appearance, config.accent));

    let window = &config.window;
    let bounds = Bounds::centered(None, size(px(window.width), px(window.height)), cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some("Calculator".into()),
            ..Default::default()
        }),
        is_resizable: window.resizable,
        ..Default::default()
    };

    cx.open_window(options, |window, cx| {
        cx.new(|cx| CalculatorView::new(window, cx))
    })?;
    cx.activate(true);

    Ok(())
}
