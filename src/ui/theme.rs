/// Workshop palette and theme
///
/// The warm showroom palette from the brand guide: paper background, carbon
/// text, brass accents.
use iced::theme::Palette;
use iced::{Color, Theme};

/// #F8F7F4, page background
pub const PAPER: Color = Color::from_rgb(0.973, 0.969, 0.957);
/// #524F4A, headings and body text
pub const CARBON: Color = Color::from_rgb(0.322, 0.310, 0.290);
/// #BB9E7A, accents, badges, active controls
pub const BRASS: Color = Color::from_rgb(0.733, 0.620, 0.478);
/// #DBD8D3, muted card surfaces
pub const LINEN: Color = Color::from_rgb(0.859, 0.847, 0.827);

pub fn theme() -> Theme {
    Theme::custom(
        "Taller".to_string(),
        Palette {
            background: PAPER,
            text: CARBON,
            primary: BRASS,
            success: Color::from_rgb(0.2, 0.55, 0.3),
            danger: Color::from_rgb(0.75, 0.25, 0.2),
        },
    )
}
