use ratatui::style::Color;

pub const GOLD: Color = Color::Rgb(0xf5, 0xc5, 0x42);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const FLASH: Color = Color::Rgb(0xff, 0xff, 0xf0);
pub const GAUGE_FILL: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const GAUGE_TRACK: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const NOTICE_TEXT: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const HINT_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
