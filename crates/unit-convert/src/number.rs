//! Float rendering for reply text.
//!
//! [`render`] prints the shortest decimal that round-trips to the same `f64`, always with a
//! fractional part (`10` → `10.0`). Magnitudes below `1e-4` or at/above `1e16` use exponent form
//! with a signed, two-digit exponent (`1e+16`, `1.5e-05`). Non-finite values print as `nan`,
//! `inf`, `-inf`.

const EXPONENT_LOWER: f64 = 1e-4;
const EXPONENT_UPPER: f64 = 1e16;

/// Renders `value` for a reply sentence. See module docs for the format.
pub fn render(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return render_exponent(value);
    }

    let plain = value.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}

/// Rounds to `places` decimals, ties to even (`0.0625` → `0.062`).
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

fn render_exponent(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => formatted,
        },
        None => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_whole_numbers_keep_fraction() {
        assert_eq!(render(0.0), "0.0");
        assert_eq!(render(10.0), "10.0");
        assert_eq!(render(-40.0), "-40.0");
        assert_eq!(render(-0.0), "-0.0");
    }

    #[test]
    fn test_render_shortest_round_trip() {
        assert_eq!(render(2.54), "2.54");
        assert_eq!(render(1.609344), "1.609344");
        assert_eq!(render(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(render(0.0001), "0.0001");
    }

    #[test]
    fn test_render_exponent_form() {
        assert_eq!(render(1e16), "1e+16");
        assert_eq!(render(1.5e-5), "1.5e-05");
        assert_eq!(render(-2.5e20), "-2.5e+20");
        assert_eq!(render(1e-100), "1e-100");
    }

    #[test]
    fn test_render_non_finite() {
        assert_eq!(render(f64::NAN), "nan");
        assert_eq!(render(f64::INFINITY), "inf");
        assert_eq!(render(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_round_to_three_places() {
        assert_eq!(render(round_to(3.32149, 3)), "3.321");
        assert_eq!(render(round_to(0.74, 3)), "0.74");
        assert_eq!(render(round_to(113.0, 3)), "113.0");
    }

    #[test]
    fn test_round_to_ties_to_even() {
        assert_eq!(round_to(0.0625, 3), 0.062);
        assert_eq!(round_to(0.1875, 3), 0.188);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(-0.0625, 3), -0.062);
    }
}
