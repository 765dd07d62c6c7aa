//! Conversion functions. Each takes the raw argument text and returns the reply sentence.

use crate::error::ConversionError;
use crate::number::render;
use crate::ConversionResult;

const CM_PER_FOOT: f64 = 30.48;
const CM_PER_INCH: f64 = 2.54;
const KM_PER_MILE: f64 = 1.609344;
const KG_PER_POUND: f64 = 0.453592;
const ML_PER_FLUID_OUNCE: f64 = 29.5735;
const OUNCES_PER_KG: f64 = 35.274;
const G_PER_OUNCE: f64 = 28.3495;
const ML_PER_CUP: f64 = 236.588;
const L_PER_GALLON: f64 = 3.78541;

/// Parses a decimal, accepting single `_` separators between digits (`1_000`).
fn parse_number(raw: &str, unit: &'static str) -> Result<f64, ConversionError> {
    let invalid = ConversionError::InvalidNumber { unit };
    let text = raw.trim();
    if !text.contains('_') {
        return text.parse::<f64>().map_err(|_| invalid);
    }

    let bytes = text.as_bytes();
    let separators_ok = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && i + 1 < bytes.len()
                && bytes[i - 1].is_ascii_digit()
                && bytes[i + 1].is_ascii_digit())
    });
    if !separators_ok {
        return Err(invalid);
    }
    text.replace('_', "").parse::<f64>().map_err(|_| invalid)
}

/// Parses and rejects anything that is not `>= 0` (NaN included).
fn parse_quantity(raw: &str, unit: &'static str) -> Result<f64, ConversionError> {
    let value = parse_number(raw, unit)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ConversionError::Negative { unit })
    }
}

/// Feet → centimetres, 2 decimals.
pub fn feet_to_cm(raw: &str) -> ConversionResult {
    let feet = parse_quantity(raw, "feet")?;
    let cm = feet * CM_PER_FOOT;
    Ok(format!(
        "{} feet is approximately {:.2} centimetres.",
        render(feet),
        cm
    ))
}

/// Inches → centimetres, unrounded.
pub fn inches_to_cm(raw: &str) -> ConversionResult {
    let inches = parse_quantity(raw, "inches")?;
    let cm = inches * CM_PER_INCH;
    Ok(format!(
        "{} inches is approximately {} centimetres.",
        render(inches),
        render(cm)
    ))
}

/// Miles → kilometres, unrounded.
pub fn miles_to_km(raw: &str) -> ConversionResult {
    let miles = parse_quantity(raw, "miles")?;
    let km = miles * KM_PER_MILE;
    Ok(format!(
        "{} miles is approximately {} kilometres.",
        render(miles),
        render(km)
    ))
}

/// Pounds → kilograms and grams, both unrounded. Grams are derived from the kilogram value.
pub fn pounds_to_kg(raw: &str) -> ConversionResult {
    let pounds = parse_quantity(raw, "pounds")?;
    let kg = pounds * KG_PER_POUND;
    let grams = kg * 1000.0;
    Ok(format!(
        "{} pounds is approximately {} kg or {} g.",
        render(pounds),
        render(kg),
        render(grams)
    ))
}

/// Fluid ounces → litres and millilitres, 3 decimals.
///
/// The litre figure is the fluid-ounce quantity divided by 1000, not `ml / 1000`.
pub fn fluid_ounce_to_ml(raw: &str) -> ConversionResult {
    let fluid_ounces = parse_quantity(raw, "fluid ounce")?;
    let ml = fluid_ounces * ML_PER_FLUID_OUNCE;
    let liters = fluid_ounces / 1000.0;
    Ok(format!(
        "{} fluid ounce(fl.oz) is approximately {:.3} L or {:.3} mL.",
        render(fluid_ounces),
        liters,
        ml
    ))
}

/// Ounces → kilograms (3 decimals) and grams (unrounded).
pub fn ounce_to_g(raw: &str) -> ConversionResult {
    let ounces = parse_quantity(raw, "ounce")?;
    let grams = ounces * G_PER_OUNCE;
    let kg = ounces / OUNCES_PER_KG;
    Ok(format!(
        "{} ounce (oz) is approximately {:.3} kg or {} g.",
        render(ounces),
        kg,
        render(grams)
    ))
}

/// Cups → millilitres, unrounded.
pub fn cup_to_ml(raw: &str) -> ConversionResult {
    let cups = parse_quantity(raw, "cup(s)")?;
    let ml = cups * ML_PER_CUP;
    Ok(format!(
        "{} cup(s) is approximately {} mL.",
        render(cups),
        render(ml)
    ))
}

/// Gallons → litres, 3 decimals.
pub fn gallon_to_l(raw: &str) -> ConversionResult {
    let gallons = parse_quantity(raw, "gallon(s)")?;
    let liters = gallons * L_PER_GALLON;
    Ok(format!(
        "{} gallon(s) is approximately {:.3} L.",
        render(gallons),
        liters
    ))
}

/// Fahrenheit → Celsius, unrounded. Any number is accepted, negative included.
pub fn fahrenheit_to_celsius(raw: &str) -> ConversionResult {
    let fahrenheit = parse_number(raw, "degrees Fahrenheit")?;
    let celsius = (fahrenheit - 32.0) * 5.0 / 9.0;
    Ok(format!(
        "{}°F is approximately {}°C.",
        render(fahrenheit),
        render(celsius)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_trims_whitespace() {
        assert_eq!(parse_number("  12.5 ", "feet"), Ok(12.5));
    }

    #[test]
    fn test_parse_quantity_rejects_nan() {
        assert_eq!(
            parse_quantity("nan", "feet"),
            Err(ConversionError::Negative { unit: "feet" })
        );
    }

    #[test]
    fn test_parse_quantity_accepts_zero() {
        assert_eq!(parse_quantity("0", "cup(s)"), Ok(0.0));
    }
}
