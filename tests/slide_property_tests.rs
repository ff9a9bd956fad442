use dawnr::slide::{Rgb, Slide};
use proptest::prelude::*;

fn brightness_slide(from: u8, to: u8) -> Slide {
    Slide {
        from_brightness: from,
        to_brightness: to,
        from_color: Rgb::new(0, 0, 0),
        to_color: Rgb::new(0, 0, 0),
    }
}

proptest! {
    /// Interpolated values never escape the interval between the endpoints.
    #[test]
    fn prop_brightness_stays_within_endpoint_bounds(
        from in 0u8..=255,
        to in 0u8..=255,
        progress in 0.0f64..=1.0,
    ) {
        let value = brightness_slide(from, to).brightness(progress);
        let low = from.min(to);
        let high = from.max(to);
        prop_assert!((low..=high).contains(&value));
    }

    /// Progress 0 and 1 hit the endpoints exactly; the arithmetic at the
    /// boundaries involves no fractions, so truncation cannot bite there.
    #[test]
    fn prop_endpoints_are_exact(from in 0u8..=255, to in 0u8..=255) {
        let slide = brightness_slide(from, to);
        prop_assert_eq!(slide.brightness(0.0), from);
        prop_assert_eq!(slide.brightness(1.0), to);
    }

    /// Advancing progress never moves the value against the ramp direction.
    #[test]
    fn prop_brightness_is_monotonic(
        from in 0u8..=255,
        to in 0u8..=255,
        p1 in 0.0f64..=1.0,
        p2 in 0.0f64..=1.0,
    ) {
        let slide = brightness_slide(from, to);
        let (earlier, later) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
        let a = slide.brightness(earlier);
        let b = slide.brightness(later);
        if from <= to {
            prop_assert!(a <= b);
        } else {
            prop_assert!(a >= b);
        }
    }

    /// The model is pure: repeated calls with the same progress agree.
    #[test]
    fn prop_interpolation_is_idempotent(
        from in 0u8..=255,
        to in 0u8..=255,
        progress in 0.0f64..=1.0,
    ) {
        let slide = Slide {
            from_brightness: from,
            to_brightness: to,
            from_color: Rgb::new(to, from, to),
            to_color: Rgb::new(from, to, from),
        };
        prop_assert_eq!(slide.brightness(progress), slide.brightness(progress));
        prop_assert_eq!(slide.color(progress), slide.color(progress));
    }

    /// Each color channel interpolates exactly like a brightness ramp with
    /// the same endpoints: channels are fully independent.
    #[test]
    fn prop_color_channels_interpolate_independently(
        from_red in 0u8..=255,
        to_red in 0u8..=255,
        from_green in 0u8..=255,
        to_green in 0u8..=255,
        from_blue in 0u8..=255,
        to_blue in 0u8..=255,
        progress in 0.0f64..=1.0,
    ) {
        let slide = Slide {
            from_brightness: 1,
            to_brightness: 32,
            from_color: Rgb::new(from_red, from_green, from_blue),
            to_color: Rgb::new(to_red, to_green, to_blue),
        };
        let color = slide.color(progress);
        prop_assert_eq!(color.red, brightness_slide(from_red, to_red).brightness(progress));
        prop_assert_eq!(color.green, brightness_slide(from_green, to_green).brightness(progress));
        prop_assert_eq!(color.blue, brightness_slide(from_blue, to_blue).brightness(progress));
    }
}
