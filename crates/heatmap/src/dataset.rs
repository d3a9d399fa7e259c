//! Fixed sunshine dataset: monthly hours of sunshine for six US cities.
//!
//! The city list is input data ordered by latitude (north to south) by the
//! caller; nothing here re-sorts it.

/// Month labels for the twelve grid columns.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Days per month, for daily-average derivation.
const DAYS_IN_MONTH: [f32; 12] = [
    31.0, 28.0, 31.0, 30.0, 31.0, 30.0, 31.0, 31.0, 30.0, 31.0, 30.0, 31.0,
];

/// A city with its monthly sunshine series.
///
/// Immutable after construction; `lat` is used only for the row annotation.
#[derive(Debug, Clone)]
pub struct City {
    pub name: &'static str,
    pub lat: f32,
    pub monthly: [f32; 12],
}

impl City {
    /// Exact sum of the twelve monthly values.
    pub fn annual_total(&self) -> f32 {
        self.monthly.iter().sum()
    }

    /// Per-day averages for each month, formatted to one decimal place.
    pub fn daily_averages(&self) -> Vec<String> {
        self.monthly
            .iter()
            .zip(DAYS_IN_MONTH.iter())
            .map(|(hours, days)| format!("{:.1}", hours / days))
            .collect()
    }
}

/// The fixed dataset, ordered by latitude north to south.
pub fn cities() -> Vec<City> {
    vec![
        City {
            name: "Seattle",
            lat: 47.61,
            monthly: [69.0, 108.0, 178.0, 207.0, 253.0, 268.0, 312.0, 281.0, 221.0, 142.0, 72.0, 52.0],
        },
        City {
            name: "Chicago",
            lat: 41.88,
            monthly: [135.0, 136.0, 187.0, 215.0, 281.0, 311.0, 318.0, 283.0, 226.0, 193.0, 113.0, 106.0],
        },
        City {
            name: "New York",
            lat: 40.73,
            monthly: [154.0, 171.0, 213.0, 237.0, 268.0, 289.0, 302.0, 271.0, 235.0, 213.0, 169.0, 155.0],
        },
        City {
            name: "San Francisco",
            lat: 37.73,
            monthly: [165.0, 182.0, 251.0, 281.0, 314.0, 330.0, 300.0, 272.0, 267.0, 243.0, 189.0, 156.0],
        },
        City {
            name: "Houston",
            lat: 29.75,
            monthly: [144.0, 141.0, 193.0, 212.0, 266.0, 298.0, 294.0, 281.0, 238.0, 239.0, 181.0, 146.0],
        },
        City {
            name: "Miami",
            lat: 25.76,
            monthly: [222.0, 227.0, 266.0, 275.0, 280.0, 251.0, 267.0, 263.0, 216.0, 215.0, 212.0, 209.0],
        },
    ]
}

/// Global (min, max) across every city's monthly values.
///
/// Annual totals are excluded; the color scale spans the per-month range only.
pub fn value_range(cities: &[City]) -> (f32, f32) {
    cities
        .iter()
        .flat_map(|c| c.monthly.iter().copied())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seattle_annual_total_is_exact_sum() {
        let cities = cities();
        assert_eq!(cities[0].name, "Seattle");
        assert_eq!(cities[0].annual_total(), 2169.0);
    }

    #[test]
    fn test_every_annual_total_matches_manual_sum() {
        for city in cities() {
            let manual: f32 = city.monthly.iter().sum();
            assert_eq!(city.annual_total(), manual, "{}", city.name);
        }
    }

    #[test]
    fn test_value_range_spans_monthly_values_only() {
        let cities = cities();
        let (min, max) = value_range(&cities);
        assert_eq!(min, 52.0); // Seattle December
        assert_eq!(max, 330.0); // San Francisco June
    }

    #[test]
    fn test_cities_ordered_north_to_south() {
        let cities = cities();
        for pair in cities.windows(2) {
            assert!(pair[0].lat > pair[1].lat);
        }
    }

    #[test]
    fn test_daily_averages_use_month_lengths() {
        let cities = cities();
        let averages = cities[0].daily_averages();
        assert_eq!(averages.len(), 12);
        assert_eq!(averages[0], "2.2"); // 69 / 31
        assert_eq!(averages[1], "3.9"); // 108 / 28
    }
}
