use crate::coords::Vec2;
use crate::paint::Rgba8;

/// Values a keyframe track can interpolate.
pub trait Interpolate: Clone {
    /// Linear blend from `a` (t = 0) to `b` (t = 1).
    fn lerp(a: &Self, b: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Interpolate for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Vec2::new(f32::lerp(&a.x, &b.x, t), f32::lerp(&a.y, &b.y, t))
    }
}

// Per-channel, straight alpha, no gamma correction.
impl Interpolate for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
            let a = f32::from(a);
            let b = f32::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_endpoints_are_exact() {
        assert_eq!(f32::lerp(&0.0, &360.0, 0.0), 0.0);
        assert_eq!(f32::lerp(&0.0, &360.0, 1.0), 360.0);
        assert_eq!(f32::lerp(&0.0, &360.0, 0.5), 180.0);
    }

    #[test]
    fn vector_is_component_wise() {
        let v = Vec2::lerp(&Vec2::zero(), &Vec2::new(2.0, 4.0), 0.25);
        assert_eq!(v, Vec2::new(0.5, 1.0));
    }

    #[test]
    fn color_channels_move_independently() {
        let a = Rgba8::new(0, 255, 100, 0);
        let b = Rgba8::new(255, 0, 100, 255);
        assert_eq!(Rgba8::lerp(&a, &b, 0.5), Rgba8::new(128, 128, 100, 128));
    }

    #[test]
    fn color_endpoints_are_exact() {
        let a = Rgba8::from_argb(255, 251, 218, 97);
        let b = Rgba8::from_argb(255, 65, 88, 208);
        assert_eq!(Rgba8::lerp(&a, &b, 0.0), a);
        assert_eq!(Rgba8::lerp(&a, &b, 1.0), b);
    }
}
