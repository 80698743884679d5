use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub button: Rgb,
    pub button_text: Rgb,
    pub label: Rgb,
    pub border: Rgb,
    pub error: Rgb,
    pub normal_text: Rgb,
    pub success: Rgb,
}

pub const LIGHT: Palette = Palette {
    background: Rgb::from_hex(0xFFFFFF),
    foreground: Rgb::from_hex(0x000000),
    button: Rgb::from_hex(0xDDDDDD),
    button_text: Rgb::from_hex(0x000000),
    label: Rgb::from_hex(0x000000),
    border: Rgb::from_hex(0x000000),
    error: Rgb::from_hex(0xFF0000),
    normal_text: Rgb::from_hex(0x000000),
    success: Rgb::from_hex(0x00FF00),
};

pub const DARK: Palette = Palette {
    background: Rgb::from_hex(0x000000),
    foreground: Rgb::from_hex(0xFFFFFF),
    button: Rgb::from_hex(0x333333),
    button_text: Rgb::from_hex(0xFFFFFF),
    label: Rgb::from_hex(0xFFFFFF),
    border: Rgb::from_hex(0xFFFFFF),
    error: Rgb::from_hex(0xFF0000),
    normal_text: Rgb::from_hex(0xFFFFFF),
    success: Rgb::from_hex(0x00FF00),
};

impl Palette {
    pub fn for_mode(dark_mode: bool) -> Palette {
        if dark_mode {
            DARK
        } else {
            LIGHT
        }
    }
}
