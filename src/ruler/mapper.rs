//! Bidirectional mapping between device-pixel pointer positions and logical
//! coordinates.
//!
//! Pure value type with no side effects; everything else in the ruler goes
//! through it so scale/offset math lives in exactly one place.

use crate::types::RulerOptions;

/// Maps device-pixel positions along the primary axis to logical coordinates
/// and back, using the scale, offset, and strip thickness captured at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    scale: f32,
    offset: f32,
    thickness: f32,
}

impl CoordinateMapper {
    /// Captures the mapping parameters from the current options.
    pub fn new(options: &RulerOptions) -> Self {
        Self {
            scale: options.scale,
            offset: options.offset,
            thickness: options.thickness,
        }
    }

    /// Converts a device-pixel position (relative to the strip origin,
    /// including the strip's own thickness margin) to a logical coordinate.
    pub fn to_logical(&self, device: f32) -> i32 {
        ((device - self.thickness - self.offset) / self.scale).floor() as i32
    }

    /// Converts a logical coordinate back to a device-pixel position,
    /// rounded to three decimals.
    pub fn to_device(&self, logical: i32) -> f32 {
        round3(logical as f32 * self.scale + self.offset)
    }
}

fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RulerOptions;

    fn mapper(scale: f32, offset: f32, thickness: f32) -> CoordinateMapper {
        CoordinateMapper::new(&RulerOptions {
            scale,
            offset,
            thickness,
            ..Default::default()
        })
    }

    #[test]
    fn known_fixed_point() {
        // scale=1, offset=40, thickness=0: device 90 maps to logical 50.
        let m = mapper(1.0, 40.0, 0.0);
        assert_eq!(m.to_logical(90.0), 50);
    }

    #[test]
    fn thickness_shifts_pointer_mapping() {
        // Construction scenario: offset=40, scale=2, thickness=20.
        let m = mapper(2.0, 40.0, 20.0);
        assert_eq!(m.to_logical(140.0), 40);
    }

    #[test]
    fn to_device_rounds_to_three_decimals() {
        let m = mapper(0.333, 0.0, 0.0);
        assert_eq!(m.to_device(3), 0.999);
        let m = mapper(1.0, 40.0, 0.0);
        assert_eq!(m.to_device(50), 90.0);
    }

    #[test]
    fn double_round_trip_is_stable() {
        // floor on the way in, round on the way out: a second pass through
        // the mapper must not move the logical coordinate.
        for &(scale, offset) in &[(1.0f32, 0.0f32), (1.0, 40.0), (2.0, 40.0), (0.5, 13.0)] {
            let m = mapper(scale, offset, 0.0);
            let mut x = -250.0f32;
            while x <= 250.0 {
                let logical = m.to_logical(x);
                let again = m.to_logical(m.to_device(logical));
                assert_eq!(again, logical, "scale={scale} offset={offset} x={x}");
                x += 0.25;
            }
        }
    }

    #[test]
    fn negative_device_positions_floor_downward() {
        let m = mapper(2.0, 0.0, 0.0);
        assert_eq!(m.to_logical(-1.0), -1);
        assert_eq!(m.to_logical(-4.0), -2);
    }
}
