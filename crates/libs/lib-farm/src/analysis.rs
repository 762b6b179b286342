//! # Crop Health Analysis
//!
//! Converts a sensor reading into a weighted 0-100 health percentage and a
//! four-tier label. Five independent sub-scores are summed against a fixed
//! total-weight denominator:
//!
//! | factor        | full | partial | floor | weight |
//! |---------------|------|---------|-------|--------|
//! | soil moisture | 20 in [40,60] | 15 in [30,70] | 5 | 20 |
//! | pH            | 20 in [6.0,7.0] | 15 in [5.5,7.5] | 5 | 20 |
//! | N / P / K     | 10 each in its optimal band | - | 5 | 30 combined |
//! | temperature   | 15 in [20,30] | 10 in [15,35] | 5 | 15 |
//! | humidity      | 15 in [60,80] | 10 in [50,90] | 5 | 15 |
//!
//! percentage = round(Σscore / Σweight × 100). Labels are inclusive at the
//! lower bound: ≥80 Excellent, ≥60 Good, ≥40 Fair, else Poor.

use shared::dto::device::SensorSnapshot;

/// Optimal nutrient bands in mg/kg.
const NITROGEN_BAND: (f64, f64) = (40.0, 80.0);
const PHOSPHORUS_BAND: (f64, f64) = (20.0, 50.0);
const POTASSIUM_BAND: (f64, f64) = (40.0, 80.0);

/// Sum of all factor weights; the score denominator.
const TOTAL_WEIGHT: u32 = 100;

/// Four-tier health label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthLabel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthLabel {
    /// Thresholds are inclusive at the lower bound.
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= 80 => HealthLabel::Excellent,
            p if p >= 60 => HealthLabel::Good,
            p if p >= 40 => HealthLabel::Fair,
            _ => HealthLabel::Poor,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthLabel::Excellent => "Excellent",
            HealthLabel::Good => "Good",
            HealthLabel::Fair => "Fair",
            HealthLabel::Poor => "Poor",
        }
    }

    /// CSS class hook for the dashboard card.
    pub fn css_class(self) -> &'static str {
        match self {
            HealthLabel::Excellent => "health-excellent",
            HealthLabel::Good => "health-good",
            HealthLabel::Fair => "health-fair",
            HealthLabel::Poor => "health-poor",
        }
    }
}

/// One factor's contribution, kept for the breakdown view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorScore {
    pub name: &'static str,
    pub points: u32,
    pub max: u32,
}

/// Full analysis result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub percentage: u32,
    pub label: HealthLabel,
    pub factors: Vec<FactorScore>,
}

fn banded(value: f64, full: (f64, f64), partial: (f64, f64), points: (u32, u32, u32)) -> u32 {
    if value >= full.0 && value <= full.1 {
        points.0
    } else if value >= partial.0 && value <= partial.1 {
        points.1
    } else {
        points.2
    }
}

fn nutrient(value: f64, band: (f64, f64)) -> u32 {
    if value >= band.0 && value <= band.1 {
        10
    } else {
        5
    }
}

/// Score a sensor reading. Deterministic: the same reading always produces
/// the same report.
pub fn analyze(reading: &SensorSnapshot) -> HealthReport {
    let npk = nutrient(reading.nitrogen, NITROGEN_BAND)
        + nutrient(reading.phosphorus, PHOSPHORUS_BAND)
        + nutrient(reading.potassium, POTASSIUM_BAND);

    let factors = vec![
        FactorScore {
            name: "Soil moisture",
            points: banded(reading.soil_moisture, (40.0, 60.0), (30.0, 70.0), (20, 15, 5)),
            max: 20,
        },
        FactorScore {
            name: "Soil pH",
            points: banded(reading.ph, (6.0, 7.0), (5.5, 7.5), (20, 15, 5)),
            max: 20,
        },
        FactorScore {
            name: "NPK nutrients",
            points: npk,
            max: 30,
        },
        FactorScore {
            name: "Temperature",
            points: banded(reading.temperature, (20.0, 30.0), (15.0, 35.0), (15, 10, 5)),
            max: 15,
        },
        FactorScore {
            name: "Humidity",
            points: banded(reading.humidity, (60.0, 80.0), (50.0, 90.0), (15, 10, 5)),
            max: 15,
        },
    ];

    let score: u32 = factors.iter().map(|f| f.points).sum();
    let percentage = (f64::from(score) / f64::from(TOTAL_WEIGHT) * 100.0).round() as u32;

    HealthReport {
        percentage,
        label: HealthLabel::from_percentage(percentage),
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(
        soil_moisture: f64,
        ph: f64,
        nitrogen: f64,
        phosphorus: f64,
        potassium: f64,
        temperature: f64,
        humidity: f64,
    ) -> SensorSnapshot {
        SensorSnapshot {
            soil_moisture,
            ph,
            nitrogen,
            phosphorus,
            potassium,
            temperature,
            humidity,
            recorded_at: "2026-01-05T09:00:00Z".to_string(),
        }
    }

    #[test]
    fn all_optimal_scores_hundred() {
        let report = analyze(&reading(42.0, 6.8, 45.0, 32.0, 68.0, 29.8, 65.0));
        assert_eq!(report.percentage, 100);
        assert_eq!(report.label, HealthLabel::Excellent);
    }

    #[test]
    fn all_out_of_band_floors_at_35() {
        // Every factor at its floor: moisture 5, pH 5, NPK 15, temp 5,
        // humidity 5 -> 35, the minimum possible total.
        let report = analyze(&reading(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(report.percentage, 35);
        assert_eq!(report.label, HealthLabel::Poor);
    }

    #[test]
    fn partial_bands_score_between() {
        // Moisture 35 is in [30,70] only -> 15; everything else optimal.
        let report = analyze(&reading(35.0, 6.5, 50.0, 30.0, 50.0, 25.0, 70.0));
        assert_eq!(report.percentage, 95);
        assert_eq!(report.label, HealthLabel::Excellent);
    }

    #[test]
    fn label_thresholds_are_inclusive() {
        assert_eq!(HealthLabel::from_percentage(80), HealthLabel::Excellent);
        assert_eq!(HealthLabel::from_percentage(79), HealthLabel::Good);
        assert_eq!(HealthLabel::from_percentage(60), HealthLabel::Good);
        assert_eq!(HealthLabel::from_percentage(59), HealthLabel::Fair);
        assert_eq!(HealthLabel::from_percentage(40), HealthLabel::Fair);
        assert_eq!(HealthLabel::from_percentage(39), HealthLabel::Poor);
    }

    #[test]
    fn analysis_is_deterministic() {
        let snapshot = reading(55.0, 7.2, 90.0, 10.0, 44.0, 33.0, 85.0);
        assert_eq!(analyze(&snapshot), analyze(&snapshot));
    }

    #[test]
    fn breakdown_sums_to_percentage() {
        let report = analyze(&reading(55.0, 7.2, 90.0, 10.0, 44.0, 33.0, 85.0));
        let total: u32 = report.factors.iter().map(|f| f.points).sum();
        assert_eq!(report.percentage, total);
        let max: u32 = report.factors.iter().map(|f| f.max).sum();
        assert_eq!(max, 100);
    }
}
