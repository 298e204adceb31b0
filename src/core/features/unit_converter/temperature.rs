//! Temperature scales.
//!
//! Celsius, Fahrenheit and Kelvin are related by offsets, so they get one
//! directed rule per ordered pair instead of a scale factor.

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 3] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "celsius",
            TemperatureScale::Fahrenheit => "fahrenheit",
            TemperatureScale::Kelvin => "kelvin",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "°C",
            TemperatureScale::Fahrenheit => "°F",
            TemperatureScale::Kelvin => "K",
        }
    }

    /// Resolve a unit name or symbol
    pub fn lookup(unit: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|scale| scale.name() == unit)
            .or_else(|| Self::ALL.into_iter().find(|scale| scale.symbol() == unit))
    }
}

/// Apply the directed rule for `from -> to`, returning the value and the formula shown to the user
pub fn convert_temperature(value: f64, from: TemperatureScale, to: TemperatureScale) -> (f64, String) {
    use TemperatureScale::*;

    match (from, to) {
        (Celsius, Fahrenheit) => (
            (value * 9.0 / 5.0) + FAHRENHEIT_OFFSET,
            format!("({} × 9/5) + 32", value),
        ),
        (Fahrenheit, Celsius) => (
            (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
            format!("({} - 32) × 5/9", value),
        ),
        (Celsius, Kelvin) => (value + KELVIN_OFFSET, format!("{} + 273.15", value)),
        (Kelvin, Celsius) => (value - KELVIN_OFFSET, format!("{} - 273.15", value)),
        (Fahrenheit, Kelvin) => (
            (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0 + KELVIN_OFFSET,
            format!("({} - 32) × 5/9 + 273.15", value),
        ),
        (Kelvin, Fahrenheit) => (
            (value - KELVIN_OFFSET) * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
            format!("({} - 273.15) × 9/5 + 32", value),
        ),
        _ => (value, super::NO_CONVERSION.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use TemperatureScale::*;

    #[test]
    fn test_reference_points() {
        assert_eq!(convert_temperature(0.0, Celsius, Fahrenheit).0, 32.0);
        assert_eq!(convert_temperature(100.0, Celsius, Fahrenheit).0, 212.0);
        assert_eq!(convert_temperature(0.0, Celsius, Kelvin).0, 273.15);
        assert_relative_eq!(convert_temperature(-40.0, Fahrenheit, Celsius).0, -40.0);
        assert_relative_eq!(convert_temperature(212.0, Fahrenheit, Kelvin).0, 373.15, max_relative = 1e-12);
    }

    #[test]
    fn test_rules_compose_consistently() {
        for value in [-459.67, -40.0, 0.0, 36.6, 100.0, 1.0e6] {
            for a in TemperatureScale::ALL {
                for b in TemperatureScale::ALL {
                    for c in TemperatureScale::ALL {
                        let (ab, _) = convert_temperature(value, a, b);
                        let (abc, _) = convert_temperature(ab, b, c);
                        let (ac, _) = convert_temperature(value, a, c);
                        assert_relative_eq!(abc, ac, epsilon = 1e-9, max_relative = 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn test_formula_shows_operands() {
        let (_, formula) = convert_temperature(25.0, Celsius, Fahrenheit);
        assert_eq!(formula, "(25 × 9/5) + 32");
        let (_, formula) = convert_temperature(300.0, Kelvin, Fahrenheit);
        assert_eq!(formula, "(300 - 273.15) × 9/5 + 32");
    }

    #[test]
    fn test_same_scale_is_identity() {
        let (value, formula) = convert_temperature(12.5, Kelvin, Kelvin);
        assert_eq!(value, 12.5);
        assert_eq!(formula, "no conversion needed");
    }

    #[test]
    fn test_lookup_accepts_symbols() {
        assert_eq!(TemperatureScale::lookup("°F"), Some(Fahrenheit));
        assert_eq!(TemperatureScale::lookup("kelvin"), Some(Kelvin));
        assert_eq!(TemperatureScale::lookup("rankine"), None);
    }
}
