//! Display logic for the digital clock window.
//!
//! Everything here is independent of the windowing toolkit: string
//! formatting for the time and date, the fixed weekday/month tables, and
//! the arithmetic behind the gradient background and font scaling.

use chrono::{Datelike, Timelike};

/// RGB triple, as stored in the settings file.
pub type Rgb = [u8; 3];

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Window height the base font sizes were chosen for.
pub const REFERENCE_HEIGHT: f32 = 300.0;

/// `HH:MM[:SS]` in 24-hour mode, `hh:MM[:SS] AM|PM` otherwise.
pub fn format_time<T: Timelike>(t: &T, show_seconds: bool, use_24h: bool) -> String {
    let (hour, suffix) = if use_24h {
        (t.hour(), "")
    } else {
        let (pm, h12) = t.hour12();
        (h12, if pm { " PM" } else { " AM" })
    };

    if show_seconds {
        format!("{:02}:{:02}:{:02}{}", hour, t.minute(), t.second(), suffix)
    } else {
        format!("{:02}:{:02}{}", hour, t.minute(), suffix)
    }
}

/// e.g. `Monday, 19 October 2026`
pub fn format_date<D: Datelike>(d: &D) -> String {
    let weekday = WEEKDAYS[d.weekday().num_days_from_monday() as usize];
    let month = MONTHS[d.month0() as usize];
    format!("{}, {} {} {}", weekday, d.day(), month, d.year())
}

/// Linear interpolation between two colors; `t` is clamped to [0, 1].
pub fn lerp_color(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let mut out = [0u8; 3];
    for (i, channel) in out.iter_mut().enumerate() {
        let from = a[i] as f32;
        let to = b[i] as f32;
        *channel = (from + (to - from) * t).round() as u8;
    }
    out
}

/// Splits a vertical span of `height` pixels into horizontal bands going
/// from `top` to `bottom`. Returns `(y_start, y_end, color)` per band; the
/// bands tile `[0, height)` with no gaps.
pub fn gradient_bands(top: Rgb, bottom: Rgb, height: f32, bands: usize) -> Vec<(f32, f32, Rgb)> {
    if height <= 0.0 || !height.is_finite() {
        return Vec::new();
    }

    let max_bands = (height.ceil() as usize).max(1);
    let n = bands.clamp(1, max_bands);

    (0..n)
        .map(|i| {
            let y0 = height * i as f32 / n as f32;
            let y1 = if i + 1 == n {
                height
            } else {
                height * (i + 1) as f32 / n as f32
            };
            let t = if n == 1 {
                0.0
            } else {
                i as f32 / (n - 1) as f32
            };
            (y0, y1, lerp_color(top, bottom, t))
        })
        .collect()
}

/// Font size proportional to the window height, never below `min_size`.
pub fn scaled_font_size(base_size: f32, base_height: f32, current_height: f32, min_size: f32) -> f32 {
    if base_height <= 0.0 {
        return base_size.max(min_size);
    }
    (base_size * current_height / base_height).max(min_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_time_24h() {
        let t = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(7, 5, 9)
            .unwrap();
        assert_eq!(format_time(&t, true, true), "07:05:09");
        assert_eq!(format_time(&t, false, true), "07:05");
    }

    #[test]
    fn test_format_time_12h() {
        let d = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let midnight = d.and_hms_opt(0, 30, 0).unwrap();
        let evening = d.and_hms_opt(21, 4, 59).unwrap();
        assert_eq!(format_time(&midnight, true, false), "12:30:00 AM");
        assert_eq!(format_time(&evening, false, false), "09:04 PM");
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(format_date(&d), "Monday, 19 October 2026");
        let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(format_date(&d), "Thursday, 29 February 2024");
    }

    #[test]
    fn test_lerp_color() {
        let black = [0, 0, 0];
        let white = [255, 255, 255];
        assert_eq!(lerp_color(black, white, 0.0), black);
        assert_eq!(lerp_color(black, white, 1.0), white);
        assert_eq!(lerp_color(black, white, 0.5), [128, 128, 128]);
        assert_eq!(lerp_color([10, 200, 30], [30, 100, 30], 0.5), [20, 150, 30]);
        // Out of range
        assert_eq!(lerp_color(black, white, -1.0), black);
        assert_eq!(lerp_color(black, white, 7.0), white);
    }

    #[test]
    fn test_gradient_bands_endpoints_and_tiling() {
        let top = [20, 30, 90];
        let bottom = [200, 60, 40];
        let bands = gradient_bands(top, bottom, 480.0, 64);
        assert_eq!(bands.len(), 64);
        assert_eq!(bands[0].0, 0.0);
        assert_eq!(bands[0].2, top);
        assert_eq!(bands[63].1, 480.0);
        assert_eq!(bands[63].2, bottom);
        for pair in bands.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn test_gradient_bands_clamped() {
        // Never more bands than pixel rows.
        assert_eq!(gradient_bands([0; 3], [255; 3], 3.0, 100).len(), 3);
        let single = gradient_bands([1, 2, 3], [255; 3], 50.0, 0);
        assert_eq!(single, vec![(0.0, 50.0, [1, 2, 3])]);
        assert!(gradient_bands([0; 3], [255; 3], 0.0, 10).is_empty());
    }

    #[test]
    fn test_scaled_font_size() {
        assert_eq!(scaled_font_size(48.0, 300.0, 600.0, 12.0), 96.0);
        assert_eq!(scaled_font_size(48.0, 300.0, 30.0, 12.0), 12.0);
        assert_eq!(scaled_font_size(48.0, 0.0, 600.0, 12.0), 48.0);
    }
}
