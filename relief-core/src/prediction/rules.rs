#[cfg(test)]
#[path = "../../tests/unit/prediction/rules_test.rs"]
mod rules_test;

use super::DelayFeatures;

/// A maximum delay in minutes.
pub const MAX_DELAY_MINUTES: f64 = 120.;

/// Calculates delay in minutes from conditions using deterministic rules. The same function
/// labels synthetic training samples and serves predictions when no trained model is available.
pub fn get_rule_based_delay(features: &DelayFeatures) -> f64 {
    let mut delay = 0.;

    if features.visibility < 2000. {
        delay += 40. * (1. - features.visibility / 2000.);
    } else if features.visibility < 5000. {
        delay += 20. * (1. - features.visibility / 5000.);
    }

    if features.wind_speed > 15. {
        delay += 15.;
    } else if features.wind_speed > 10. {
        delay += 10.;
    }

    if features.precipitation > 10. {
        delay += 25.;
    } else if features.precipitation > 2. {
        delay += 10.;
    }

    if features.temperature < 0. {
        delay += 20.;
    } else if features.temperature > 30. {
        delay += 10.;
    }

    delay += features.traffic_load * 30.;
    delay *= features.road_type_factor;

    delay.clamp(0., MAX_DELAY_MINUTES)
}
