use gpui::Rgba;

use crate::theme::ColorValue;

/// Extension trait for handing theme colors to GPUI.
pub trait ColorValueExt {
    fn to_rgba(&self) -> Rgba;
}

impl ColorValueExt for ColorValue {
    fn to_rgba(&self) -> Rgba {
        let [r, g, b, a] = self.to_f32_channels();
        Rgba { r, g, b, a }
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgba() {
        let color = ColorValue::from_hex(0xff0000).with_alpha(0);
        assert_eq!(color.to_rgba(), Rgba { r: 1., g: 0., b: 0., a: 0. });
    }
}
