/// Straight-alpha RGBA color with 8-bit channels.
///
/// This is the representation handed to the rasterizer: four `u8` channels, no
/// premultiplication and no gamma handling. Animated colors interpolate each
/// channel independently in this space.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from alpha-first channel order, `(a, r, g, b)`.
    ///
    /// Palette constants are written in this order.
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }
}

impl From<[u8; 4]> for Rgba8 {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_order_maps_alpha_first() {
        let c = Rgba8::from_argb(255, 251, 218, 97);
        assert_eq!(c, Rgba8::new(251, 218, 97, 255));
        assert!(c.is_opaque());
    }

    #[test]
    fn array_round_trip_keeps_channel_order() {
        assert_eq!(Rgba8::from([1, 2, 3, 4]).to_array(), [1, 2, 3, 4]);
    }
}
