/// Round `v` to `digits` decimal places.
pub(crate) fn round_to(v: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    let r = (v * scale).round() / scale;
    // Avoid emitting "-0".
    if r == 0.0 { 0.0 } else { r }
}

/// Round key times to `digits` places while keeping them usable by SMIL players:
/// the first is pinned to 0, the last to 1 and the sequence never decreases.
pub(crate) fn quantize_key_times(times: &mut [f64], digits: u32) {
    let mut floor = 0.0f64;
    for t in times.iter_mut() {
        let r = round_to(t.clamp(0.0, 1.0), digits).max(floor);
        *t = r;
        floor = r;
    }
    if let Some(first) = times.first_mut() {
        *first = 0.0;
    }
    if let Some(last) = times.last_mut() {
        *last = 1.0;
    }
}

/// Format a number the way SVG attributes expect: no trailing `.0`, no `-0`.
pub(crate) fn fmt_num(v: f64) -> String {
    if v == 0.0 {
        return "0".to_owned();
    }
    format!("{v}")
}

/// Fixed-precision formatting for key times.
pub(crate) fn fmt_fixed(v: f64, digits: usize) -> String {
    format!("{:.*}", digits, if v == 0.0 { 0.0 } else { v })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_four_digits() {
        assert_eq!(round_to(0.123_456, 4), 0.1235);
        assert_eq!(round_to(-0.000_01, 4), 0.0);
    }

    #[test]
    fn quantize_never_decreases() {
        // 0.33335 and 0.33334 both round to 0.3333/0.3334 but the order must hold.
        let mut t = vec![0.0, 0.333_35, 0.333_349, 0.5, 1.0];
        quantize_key_times(&mut t, 4);
        assert!(t.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(t[0], 0.0);
        assert_eq!(*t.last().unwrap(), 1.0);
    }

    #[test]
    fn quantize_pins_endpoints() {
        let mut t = vec![0.000_04, 0.999_99];
        quantize_key_times(&mut t, 4);
        assert_eq!(t, vec![0.0, 1.0]);
    }

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_num(880.0), "880");
        assert_eq!(fmt_num(-880.0), "-880");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(52.5), "52.5");
        assert_eq!(fmt_fixed(0.5, 4), "0.5000");
        assert_eq!(fmt_fixed(-0.0, 4), "0.0000");
    }
}
