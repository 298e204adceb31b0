//! Scale tables for the multiplicative categories.
//!
//! Every factor is "how many of this unit equal one base unit", so a
//! conversion is always `value * factor[to] / factor[from]`. The first entry
//! of each table is the base unit (factor 1) and table order is display order.

/// A unit within a scale table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    pub name: &'static str,
    pub symbol: &'static str,
    pub factor: f64,
}

const fn unit(name: &'static str, symbol: &'static str, factor: f64) -> UnitDef {
    UnitDef { name, symbol, factor }
}

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;
const TIB: f64 = GIB * 1024.0;
const PIB: f64 = TIB * 1024.0;

// Length (base: meter)
pub const LENGTH: &[UnitDef] = &[
    unit("meter", "m", 1.0),
    unit("kilometer", "km", 0.001),
    unit("centimeter", "cm", 100.0),
    unit("millimeter", "mm", 1000.0),
    unit("inch", "in", 39.3701),
    unit("foot", "ft", 3.28084),
    unit("yard", "yd", 1.09361),
    unit("mile", "mi", 0.000621371),
    unit("nautical mile", "nmi", 0.000539957),
];

// Weight (base: kilogram)
pub const WEIGHT: &[UnitDef] = &[
    unit("kilogram", "kg", 1.0),
    unit("gram", "g", 1000.0),
    unit("milligram", "mg", 1e6),
    unit("pound", "lb", 2.20462),
    unit("ounce", "oz", 35.274),
    unit("ton", "t", 0.001),
    unit("stone", "st", 0.157473),
];

// Volume (base: liter)
pub const VOLUME: &[UnitDef] = &[
    unit("liter", "L", 1.0),
    unit("milliliter", "mL", 1000.0),
    unit("cubic meter", "m³", 0.001),
    unit("gallon (US)", "gal", 0.264172),
    unit("quart (US)", "qt", 1.05669),
    unit("pint (US)", "pt", 2.11338),
    unit("cup (US)", "cup", 4.22675),
    unit("fluid ounce (US)", "fl oz", 33.814),
    unit("tablespoon (US)", "tbsp", 67.628),
    unit("teaspoon (US)", "tsp", 202.884),
];

// Time (base: second)
pub const TIME: &[UnitDef] = &[
    unit("second", "s", 1.0),
    unit("millisecond", "ms", 1000.0),
    unit("minute", "min", 1.0 / 60.0),
    unit("hour", "h", 1.0 / 3600.0),
    unit("day", "d", 1.0 / 86400.0),
    unit("week", "wk", 1.0 / 604800.0),
    unit("month (30 days)", "mo", 1.0 / 2592000.0),
    unit("year (365 days)", "yr", 1.0 / 31536000.0),
    unit("decade", "dec", 1.0 / 315360000.0),
    unit("century", "cent", 1.0 / 3.1536e9),
    unit("millennium", "kyr", 1.0 / 3.1536e10),
];

// Data (base: byte). Binary-prefixed names alias the kilo/mega rows.
pub const DATA: &[UnitDef] = &[
    unit("byte", "B", 1.0),
    unit("kilobyte", "KB", 1.0 / KIB),
    unit("megabyte", "MB", 1.0 / MIB),
    unit("gigabyte", "GB", 1.0 / GIB),
    unit("terabyte", "TB", 1.0 / TIB),
    unit("petabyte", "PB", 1.0 / PIB),
    unit("bit", "bit", 8.0),
    unit("kibibyte", "KiB", 1.0 / KIB),
    unit("mebibyte", "MiB", 1.0 / MIB),
    unit("gibibyte", "GiB", 1.0 / GIB),
    unit("tebibyte", "TiB", 1.0 / TIB),
    unit("pebibyte", "PiB", 1.0 / PIB),
];

// Area (base: square meter)
pub const AREA: &[UnitDef] = &[
    unit("square meter", "m²", 1.0),
    unit("square kilometer", "km²", 1e-6),
    unit("square centimeter", "cm²", 10000.0),
    unit("square millimeter", "mm²", 1e6),
    unit("square inch", "in²", 1550.0031),
    unit("square foot", "ft²", 10.76391),
    unit("square yard", "yd²", 1.19599),
    unit("acre", "ac", 0.000247105),
    unit("hectare", "ha", 0.0001),
];

// Speed (base: meter per second)
pub const SPEED: &[UnitDef] = &[
    unit("meter per second", "m/s", 1.0),
    unit("kilometer per hour", "km/h", 3.6),
    unit("mile per hour", "mph", 2.23694),
    unit("knot", "kn", 1.94384),
    unit("foot per second", "ft/s", 3.28084),
    unit("inch per second", "in/s", 39.3701),
];

// Energy (base: joule)
pub const ENERGY: &[UnitDef] = &[
    unit("joule", "J", 1.0),
    unit("kilojoule", "kJ", 0.001),
    unit("calorie", "cal", 0.239006),
    unit("kilocalorie", "kcal", 0.000239006),
    unit("watt hour", "Wh", 0.000277778),
    unit("kilowatt hour", "kWh", 2.77778e-7),
    unit("electron volt", "eV", 6.242e18),
    unit("british thermal unit", "BTU", 0.000947817),
];

// Pressure (base: pascal)
pub const PRESSURE: &[UnitDef] = &[
    unit("pascal", "Pa", 1.0),
    unit("kilopascal", "kPa", 0.001),
    unit("megapascal", "MPa", 1e-6),
    unit("bar", "bar", 1e-5),
    unit("atmosphere", "atm", 9.86923e-6),
    unit("torr", "Torr", 0.00750062),
    unit("psi", "psi", 0.000145038),
    unit("millimeter of mercury", "mmHg", 0.00750062),
];

// Power (base: watt)
pub const POWER: &[UnitDef] = &[
    unit("watt", "W", 1.0),
    unit("kilowatt", "kW", 0.001),
    unit("megawatt", "MW", 1e-6),
    unit("horsepower", "hp", 0.00134102),
    unit("british thermal unit per hour", "BTU/h", 3.41214),
    unit("calorie per second", "cal/s", 0.239006),
];

// Frequency (base: hertz)
pub const FREQUENCY: &[UnitDef] = &[
    unit("hertz", "Hz", 1.0),
    unit("kilohertz", "kHz", 0.001),
    unit("megahertz", "MHz", 1e-6),
    unit("gigahertz", "GHz", 1e-9),
    unit("cycle per second", "cps", 1.0),
    unit("revolution per minute", "rpm", 60.0),
    unit("beat per minute", "bpm", 60.0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_TABLES: [&[UnitDef]; 11] = [
        LENGTH, WEIGHT, VOLUME, TIME, DATA, AREA, SPEED, ENERGY, PRESSURE, POWER, FREQUENCY,
    ];

    #[test]
    fn test_tables_are_well_formed() {
        for table in ALL_TABLES {
            assert!(!table.is_empty());
            assert_eq!(table[0].factor, 1.0, "first entry is the base unit");

            let mut names = HashSet::new();
            let mut symbols = HashSet::new();
            for def in table {
                assert!(def.factor.is_finite() && def.factor > 0.0, "{} factor", def.name);
                assert!(names.insert(def.name), "duplicate name {}", def.name);
                assert!(symbols.insert(def.symbol), "duplicate symbol {}", def.symbol);
            }
        }
    }

    #[test]
    fn test_binary_prefixes_alias_decimal_rows() {
        let factor = |name: &str| DATA.iter().find(|d| d.name == name).unwrap().factor;
        assert_eq!(factor("kibibyte"), factor("kilobyte"));
        assert_eq!(factor("gibibyte"), factor("gigabyte"));
        assert_eq!(factor("pebibyte"), factor("petabyte"));
    }
}
