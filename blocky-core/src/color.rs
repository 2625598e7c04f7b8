/// RGBA colors in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba(pub [f32; 4]);

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    pub fn r(&self) -> f32 {
        self.0[0]
    }

    pub fn g(&self) -> f32 {
        self.0[1]
    }

    pub fn b(&self) -> f32 {
        self.0[2]
    }

    pub fn a(&self) -> f32 {
        self.0[3]
    }

    /// Scale the RGB channels by `factor`, keeping alpha.
    ///
    /// Used for the flat per-face brightness of the solids.
    pub fn shaded(self, factor: f32) -> Self {
        let [r, g, b, a] = self.0;
        Self([r * factor, g * factor, b * factor, a])
    }

    /// Relative luminance (Rec. 709 weights).
    pub fn luminance(&self) -> f32 {
        0.2126 * self.r() + 0.7152 * self.g() + 0.0722 * self.b()
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Rgba {
    fn from(c: [f32; 4]) -> Self {
        Self(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shaded_keeps_alpha() {
        let c = Rgba::new(1.0, 0.5, 0.2, 0.4).shaded(0.5);
        assert_eq!(c, Rgba::new(0.5, 0.25, 0.1, 0.4));
    }

    #[test]
    fn test_luminance_bounds() {
        assert!((Rgba::WHITE.luminance() - 1.0).abs() < 1e-6);
        assert_eq!(Rgba::BLACK.luminance(), 0.0);
    }
}
