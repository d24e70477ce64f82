//! Glide polar fitting and the built-in polar table.
//!
//! A polar is the quadratic `sink = a*v^2 + b*v + c` relating airspeed to
//! sink rate. The stored coefficients carry a reference-weight projection
//! (`a` multiplied and `c` divided by the square root of the unballasted
//! all-up weight) so consumers can rescale them to the flown weight.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed pilot weight assumed by the weight projection, in kg.
pub const PILOT_WEIGHT_KG: f64 = 70.0;

/// Number of polars in the built-in table.
pub const BUILTIN_POLAR_COUNT: usize = 6;

#[derive(Debug, Error)]
pub enum PolarError {
    /// The configuration store referenced a polar outside the built-in table.
    #[error("unknown built-in polar id {0}")]
    UnknownId(usize),
}

/// One (speed, sink) reference sample. Speed in km/h, sink in m/s
/// (negative down).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PolarSample {
    pub speed_kph: f64,
    pub sink_mps: f64,
}

/// Weight triple associated with a polar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PolarWeights {
    pub pilot_kg: f64,
    /// Glider empty weight: reference gross mass minus the pilot
    pub empty_kg: f64,
    /// Maximum water ballast
    pub ballast_kg: f64,
}

/// Quadratic sink polar with its associated weights.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GlidePolar {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub weights: PolarWeights,
}

impl GlidePolar {
    /// Fit a polar from three reference samples plus the glider's dry gross
    /// mass and maximum water ballast.
    ///
    /// Uses the determinant-based two-equation elimination for a 3-point
    /// quadratic. Degenerate sample sets (duplicate speeds) zero the
    /// affected coefficient instead of dividing by zero; the fit never
    /// fails and never produces NaN.
    pub fn from_reference(
        samples: [PolarSample; 3],
        dry_gross_kg: f64,
        max_ballast_kg: f64,
    ) -> Self {
        let v1 = samples[0].speed_kph / 3.6;
        let v2 = samples[1].speed_kph / 3.6;
        let v3 = samples[2].speed_kph / 3.6;
        let w1 = samples[0].sink_mps;
        let w2 = samples[1].sink_mps;
        let w3 = samples[2].sink_mps;

        let d = v1 * v1 * (v2 - v3) + v2 * v2 * (v3 - v1) + v3 * v3 * (v1 - v2);
        let mut a = if d == 0.0 {
            0.0
        } else {
            ((v2 - v3) * (w1 - w3) + (v3 - v1) * (w2 - w3)) / d
        };

        let d = v2 - v3;
        let b = if d == 0.0 {
            0.0
        } else {
            (w2 - w3 - a * (v2 * v2 - v3 * v3)) / d
        };

        let weights = PolarWeights {
            pilot_kg: PILOT_WEIGHT_KG,
            empty_kg: dry_gross_kg - PILOT_WEIGHT_KG,
            ballast_kg: max_ballast_kg,
        };

        let mut c = w3 - a * v3 * v3 - b * v3;

        // Project the reference-condition curve onto the loaded weight.
        let load = (weights.pilot_kg + weights.empty_kg).sqrt();
        a *= load;
        c /= load;

        Self { a, b, c, weights }
    }

    /// All-up weight with the given water ballast aboard, in kg.
    pub fn all_up_kg(&self, ballast_kg: f64) -> f64 {
        self.weights.pilot_kg + self.weights.empty_kg + ballast_kg
    }

    /// Sink rate in m/s at airspeed `v_mps` for the given all-up weight.
    ///
    /// Undoes the stored projection: `a` is divided and `c` multiplied by
    /// the square root of the flown weight.
    pub fn sink_rate(&self, v_mps: f64, all_up_kg: f64) -> f64 {
        let w = all_up_kg.sqrt();
        (self.a / w) * v_mps * v_mps + self.b * v_mps + self.c * w
    }
}

const BUILTIN_COEFFICIENTS: [[f64; 3]; BUILTIN_POLAR_COUNT] = [
    [-0.0538770500225782443497, 0.1323114348, -0.1273364037098239098543],
    [-0.0532456270195884696748, 0.1509454717, -0.1474304674787072275183],
    [-0.0598306909918491529791, 0.1896480967, -0.1883344146619101871894],
    [-0.0303118230885946660507, 0.0771466019, -0.0799469636558217515699],
    [-0.0222929913566948641563, 0.0318771616, -0.0307925896846546928318],
    [-0.0430828898445299480353, 0.0746938776, -0.0487285153053357557183],
];

const BUILTIN_WEIGHTS: [[f64; 3]; BUILTIN_POLAR_COUNT] = [
    [70.0, 190.0, 1.0],
    [70.0, 250.0, 100.0],
    [70.0, 240.0, 285.0],
    [70.0, 287.0, 165.0],
    [70.0, 400.0, 120.0],
    [70.0, 527.0, 303.0],
];

/// Look up a pre-fitted polar from the built-in table.
///
/// Ids come from the configuration store's polar selection. An id beyond
/// the table is a configuration error; the caller decides how to surface
/// it. (Custom polars parsed from files arrive through
/// [`GlidePolar::from_reference`] instead.)
pub fn builtin(id: usize) -> Result<GlidePolar, PolarError> {
    if id >= BUILTIN_POLAR_COUNT {
        return Err(PolarError::UnknownId(id));
    }
    let [a, b, c] = BUILTIN_COEFFICIENTS[id];
    let [pilot_kg, empty_kg, ballast_kg] = BUILTIN_WEIGHTS[id];
    Ok(GlidePolar {
        a,
        b,
        c,
        weights: PolarWeights {
            pilot_kg,
            empty_kg,
            ballast_kg,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // WinPilot reference line for an LS-3:
    // 403, 101, 115.03, -0.86, 174.04, -1.76, 212.72, -3.4
    const LS3_SAMPLES: [PolarSample; 3] = [
        PolarSample { speed_kph: 115.03, sink_mps: -0.86 },
        PolarSample { speed_kph: 174.04, sink_mps: -1.76 },
        PolarSample { speed_kph: 212.72, sink_mps: -3.4 },
    ];

    #[test]
    fn fit_reproduces_the_reference_samples() {
        let polar = GlidePolar::from_reference(LS3_SAMPLES, 403.0, 101.0);
        // At the reference weight the projection cancels out.
        let reference_kg = polar.all_up_kg(0.0);
        assert!((reference_kg - 403.0).abs() < 1e-9);

        for sample in LS3_SAMPLES {
            let sink = polar.sink_rate(sample.speed_kph / 3.6, reference_kg);
            assert!(
                (sink - sample.sink_mps).abs() < 1e-9,
                "expected {} m/s at {} km/h, got {}",
                sample.sink_mps,
                sample.speed_kph,
                sink
            );
        }
    }

    #[test]
    fn fit_splits_weights_around_the_pilot() {
        let polar = GlidePolar::from_reference(LS3_SAMPLES, 403.0, 101.0);
        assert_eq!(polar.weights.pilot_kg, PILOT_WEIGHT_KG);
        assert_eq!(polar.weights.empty_kg, 333.0);
        assert_eq!(polar.weights.ballast_kg, 101.0);
    }

    #[test]
    fn ballast_flattens_the_high_speed_end() {
        let polar = GlidePolar::from_reference(LS3_SAMPLES, 403.0, 101.0);
        let dry = polar.sink_rate(59.0, polar.all_up_kg(0.0));
        let wet = polar.sink_rate(59.0, polar.all_up_kg(101.0));
        assert!(wet > dry, "ballasted sink {wet} should be shallower than {dry}");
    }

    #[test]
    fn degenerate_duplicate_speeds_fall_back_to_flat() {
        let samples = [
            PolarSample { speed_kph: 100.0, sink_mps: -0.7 },
            PolarSample { speed_kph: 150.0, sink_mps: -1.2 },
            PolarSample { speed_kph: 150.0, sink_mps: -2.0 },
        ];
        let polar = GlidePolar::from_reference(samples, 300.0, 0.0);
        assert_eq!(polar.a, 0.0);
        assert_eq!(polar.b, 0.0);
        assert!(polar.c.is_finite());
        assert!(polar.sink_rate(40.0, 300.0).is_finite());
    }

    #[test]
    fn builtin_table_is_well_formed() {
        for id in 0..BUILTIN_POLAR_COUNT {
            let polar = builtin(id).unwrap();
            assert!(polar.a < 0.0, "polar {id} should curve downward");
            assert_eq!(polar.weights.pilot_kg, PILOT_WEIGHT_KG);

            // A plausible sink rate somewhere mid-envelope.
            let sink = polar.sink_rate(30.0, polar.all_up_kg(0.0));
            assert!(sink < -0.2 && sink > -4.0, "polar {id} sinks at {sink} m/s");
        }
    }

    #[test]
    fn builtin_rejects_ids_beyond_the_table() {
        assert!(matches!(builtin(6), Err(PolarError::UnknownId(6))));
        assert!(builtin(5).is_ok());
    }
}
