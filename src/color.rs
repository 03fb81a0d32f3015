use image::Rgba;

/// An opaque sRGB color as it appears in the generated table.
///
/// Ordering is lexicographic over `(r, g, b)`; the extractor relies on it to
/// break histogram ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Fallback for assets that are missing, unreadable or fully transparent.
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Serialize to uppercase hex `#RRGGBB`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl From<Rgba<u8>> for Color {
    /// Drops the alpha channel.
    fn from(px: Rgba<u8>) -> Self {
        let [r, g, b, _] = px.0;
        Self { r, g, b }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
