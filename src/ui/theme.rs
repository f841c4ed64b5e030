//! Colors and metrics for the calculator window.
//!
//! The theme is resolved once at startup from the configured appearance and
//! accent, then read through [`theme()`].

use std::sync::OnceLock;

use gpui::{Hsla, Pixels, WindowAppearance, hsla, px};

use crate::config::{Accent, AppearanceMode};

static THEME: OnceLock<CalcTheme> = OnceLock::new();

/// Light or dark, after resolving [`AppearanceMode::System`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    /// Resolve the configured mode against the platform appearance.
    pub fn resolve(mode: AppearanceMode, platform: WindowAppearance) -> Self {
        match mode {
            AppearanceMode::Light => Self::Light,
            AppearanceMode::Dark => Self::Dark,
            AppearanceMode::System => match platform {
                WindowAppearance::Light | WindowAppearance::VibrantLight => Self::Light,
                WindowAppearance::Dark | WindowAppearance::VibrantDark => Self::Dark,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct CalcTheme {
    pub window_background: Hsla,
    pub panel_background: Hsla,
    pub panel_radius: Pixels,
    pub panel_padding: Pixels,
    pub panel_gap: Pixels,

    pub primary_text_color: Hsla,
    pub primary_text_size: Pixels,
    pub annotation_text_color: Hsla,
    pub annotation_text_size: Pixels,
    pub error_text_color: Hsla,

    pub button_background: Hsla,
    pub button_background_hover: Hsla,
    pub button_text_color: Hsla,
    pub accent_background: Hsla,
    pub accent_background_hover: Hsla,
    pub accent_text_color: Hsla,
    pub muted_background: Hsla,
    pub muted_background_hover: Hsla,
    pub button_height: Pixels,
    pub button_radius: Pixels,
    pub button_text_size: Pixels,
    pub button_gap: Pixels,
}

impl CalcTheme {
    pub fn new(appearance: Appearance, accent: Accent) -> Self {
        let (accent_hue, accent_saturation) = match accent {
            Accent::Blue => (207.0, 0.6),
            Accent::Green => (160.0, 0.5),
            Accent::DarkBlue => (218.0, 0.7),
        };
        let accent_lightness = match (appearance, accent) {
            (_, Accent::DarkBlue) => 0.35,
            (Appearance::Light, _) => 0.52,
            (Appearance::Dark, _) => 0.38,
        };
        let accent_color = |l: f32| hsla(accent_hue / 360.0, accent_saturation, l, 1.0);

        let (window_l, panel_l, button_l, muted_l, text_l, annotation_l) = match appearance {
            Appearance::Light => (0.92, 0.86, 0.97, 0.78, 0.1, 0.45),
            Appearance::Dark => (0.1, 0.16, 0.24, 0.2, 0.95, 0.7),
        };
        let hover_shift = match appearance {
            Appearance::Light => -0.06,
            Appearance::Dark => 0.06,
        };
        let gray = |l: f32| hsla(0.0, 0.0, l, 1.0);

        Self {
            window_background: gray(window_l),
            panel_background: gray(panel_l),
            panel_radius: px(10.0),
            panel_padding: px(10.0),
            panel_gap: px(10.0),

            primary_text_color: gray(text_l),
            primary_text_size: px(40.0),
            annotation_text_color: gray(annotation_l),
            annotation_text_size: px(14.0),
            error_text_color: hsla(15.0 / 360.0, 0.7, 0.55, 1.0),

            button_background: gray(button_l),
            button_background_hover: gray(button_l + hover_shift),
            button_text_color: gray(text_l),
            accent_background: accent_color(accent_lightness),
            accent_background_hover: accent_color(accent_lightness - 0.06),
            accent_text_color: gray(1.0),
            muted_background: gray(muted_l),
            muted_background_hover: gray(muted_l + hover_shift),
            button_height: px(50.0),
            button_radius: px(10.0),
            button_text_size: px(20.0),
            button_gap: px(5.0),
        }
    }
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self::new(Appearance::Dark, Accent::default())
    }
}

/// Install the theme for this process. Only the first call takes effect.
pub fn init_theme(theme: CalcTheme) {
    if THEME.set(theme).is_err() {
        tracing::warn!("Theme already initialized, keeping the existing one");
    }
}

/// The process-wide theme, falling back to the dark default when
/// [`init_theme`] was never called.
pub fn theme() -> &'static CalcTheme {
    THEME.get_or_init(CalcTheme::default)
}
