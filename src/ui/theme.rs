use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Dark,
    Light,
}

impl ThemeKind {
    pub fn from_config_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub kind: ThemeKind,
    pub card_border: Color,
    pub card_title: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub placeholder_icon: Color,
    pub gauge_filled: Color,
    pub gauge_unfilled: Color,
    pub sparkline_color: Color,
    pub statusbar_bg: Color,
    pub surface_bg: Color,
    pub pill_key_fg: Color,
    pub pill_key_bg: Color,
    pub pill_desc_fg: Color,
    pub status_ok: Color,
    pub status_err: Color,
}

impl Theme {
    pub fn from_config(name: &str) -> Self {
        match ThemeKind::from_config_str(name) {
            ThemeKind::Dark => Self::dark(),
            ThemeKind::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Theme {
            kind: ThemeKind::Dark,
            card_border: Color::Rgb(88, 91, 112),
            card_title: Color::Rgb(205, 214, 244),
            text_primary: Color::Rgb(205, 214, 244),
            text_secondary: Color::Rgb(147, 153, 178),
            placeholder_icon: Color::Rgb(108, 112, 134),
            gauge_filled: Color::Rgb(0, 136, 206),
            gauge_unfilled: Color::Rgb(49, 50, 68),
            sparkline_color: Color::Rgb(137, 180, 250),
            statusbar_bg: Color::Rgb(24, 24, 37),
            surface_bg: Color::Rgb(30, 30, 46),
            pill_key_fg: Color::Rgb(17, 17, 27),
            pill_key_bg: Color::Rgb(203, 166, 247),
            pill_desc_fg: Color::Rgb(186, 194, 222),
            status_ok: Color::Rgb(166, 227, 161),
            status_err: Color::Rgb(243, 139, 168),
        }
    }

    pub fn light() -> Self {
        Theme {
            kind: ThemeKind::Light,
            card_border: Color::Rgb(188, 192, 204),
            card_title: Color::Rgb(76, 79, 105),
            text_primary: Color::Rgb(76, 79, 105),
            text_secondary: Color::Rgb(108, 111, 133),
            placeholder_icon: Color::Rgb(140, 143, 161),
            gauge_filled: Color::Rgb(0, 136, 206),
            gauge_unfilled: Color::Rgb(220, 224, 232),
            sparkline_color: Color::Rgb(30, 102, 245),
            statusbar_bg: Color::Rgb(230, 233, 239),
            surface_bg: Color::Rgb(239, 241, 245),
            pill_key_fg: Color::Rgb(239, 241, 245),
            pill_key_bg: Color::Rgb(136, 57, 239),
            pill_desc_fg: Color::Rgb(92, 95, 119),
            status_ok: Color::Rgb(64, 160, 43),
            status_err: Color::Rgb(210, 15, 57),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
