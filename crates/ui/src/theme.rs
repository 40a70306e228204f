use demo_state_protocol::{Color, ThemeColors, ThemeMode, ThemeToken};

pub fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

pub fn resolve(colors: &ThemeColors, token: ThemeToken) -> egui::Color32 {
    to_color32(colors.resolve(token))
}

// ── Typography scale ───────────────────────────────────────────────────────

pub const FONT_TITLE: f32 = 18.0;
pub const FONT_BODY: f32 = 13.0;
pub const FONT_CAPTION: f32 = 11.0;

// ── egui visual presets ────────────────────────────────────────────────────

/// egui visuals painted with the active client's palette.
pub fn client_visuals(colors: &ThemeColors, mode: ThemeMode) -> egui::Visuals {
    let mut v = match mode {
        ThemeMode::Dark => egui::Visuals::dark(),
        ThemeMode::Light => egui::Visuals::light(),
    };
    let primary = resolve(colors, ThemeToken::Primary);
    let accent = resolve(colors, ThemeToken::Accent);

    // Dark palettes keep egui's dark surfaces; their "background" token is
    // the foreground card color.
    if mode == ThemeMode::Light {
        let background = resolve(colors, ThemeToken::Background);
        v.panel_fill = background;
        v.window_fill = background;
        v.override_text_color = Some(resolve(colors, ThemeToken::Text));
    }

    v.hyperlink_color = primary;
    v.widgets.active.bg_fill = primary;
    v.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, accent);
    v.selection.bg_fill = primary.gamma_multiply(0.35);
    v.selection.stroke = egui::Stroke::new(1.0, primary);
    v.window_corner_radius = egui::CornerRadius::same(6);
    v.menu_corner_radius = egui::CornerRadius::same(6);
    v.widgets.noninteractive.corner_radius = egui::CornerRadius::same(5);
    v.widgets.inactive.corner_radius = egui::CornerRadius::same(5);
    v.widgets.hovered.corner_radius = egui::CornerRadius::same(5);
    v.widgets.active.corner_radius = egui::CornerRadius::same(5);
    v.widgets.open.corner_radius = egui::CornerRadius::same(5);
    v
}

/// Apply the panel's typography scale to egui styles.
pub fn apply_typography(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(FONT_TITLE),
    );
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(FONT_BODY));
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(FONT_BODY),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::proportional(FONT_CAPTION),
    );
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> ThemeColors {
        ThemeColors {
            primary_color: Color::rgb(0xd3, 0x2f, 0x2f),
            secondary_color: Color::rgb(0xff, 0xc1, 0x07),
            accent_color: Color::rgb(0x4c, 0xaf, 0x50),
            background_color: Color::rgb(0xff, 0xff, 0xff),
            text_color: Color::rgb(0x21, 0x21, 0x21),
        }
    }

    #[test]
    fn tokens_map_to_palette() {
        assert_eq!(
            resolve(&palette(), ThemeToken::Primary),
            egui::Color32::from_rgb(0xd3, 0x2f, 0x2f)
        );
        assert_eq!(
            resolve(&palette(), ThemeToken::Text),
            egui::Color32::from_rgb(0x21, 0x21, 0x21)
        );
    }

    #[test]
    fn light_visuals_use_client_background() {
        let v = client_visuals(&palette(), ThemeMode::Light);
        assert!(!v.dark_mode);
        assert_eq!(v.panel_fill, egui::Color32::WHITE);
        assert_eq!(v.hyperlink_color, egui::Color32::from_rgb(0xd3, 0x2f, 0x2f));
    }

    #[test]
    fn dark_visuals_keep_dark_surfaces() {
        let v = client_visuals(&palette(), ThemeMode::Dark);
        assert!(v.dark_mode);
        assert_ne!(v.panel_fill, egui::Color32::WHITE);
        assert_eq!(v.override_text_color, None);
    }
}
