//! Golden kernel tests.
//!
//! Reference kernels below were computed in double precision from the
//! same algorithm: A&S 26.2.23 quantile, stratified midpoints, two-lobe
//! mixture weights, per-channel renormalization. The `f32` implementation
//! must match them within [`GOLDEN_TOLERANCE`].

use sss_kernel::Profile;
use sss_math::Vec3;

/// Allowed absolute deviation from the double-precision reference.
const GOLDEN_TOLERANCE: f32 = 1e-4;

/// `(position, [w.r, w.g, w.b])` per tap.
type GoldenKernel = [(f32, [f32; 3]); 7];

struct GoldenCase {
    name: &'static str,
    profile: Profile,
    taps: GoldenKernel,
}

fn cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            name: "skin",
            profile: Profile::new(Vec3::new(0.3, 0.2, 0.1), Vec3::new(1.0, 0.8, 0.5), 0.5),
            taps: [
                (-0.952_585_3, [0.142_857_1, 0.135_234_6, 0.075_225_6]),
                (-0.514_430_8, [0.142_857_1, 0.105_438_5, 0.108_811_4]),
                (-0.237_680_3, [0.142_857_1, 0.155_217_2, 0.105_930_9]),
                (-0.000_000_1, [0.142_857_1, 0.208_219_3, 0.420_064_0]),
                (0.237_680_3, [0.142_857_1, 0.155_217_2, 0.105_930_9]),
                (0.514_430_8, [0.142_857_1, 0.105_438_5, 0.108_811_4]),
                (0.952_585_3, [0.142_857_1, 0.135_234_6, 0.075_225_6]),
            ],
        },
        GoldenCase {
            name: "uniform",
            profile: Profile::new(Vec3::splat(0.3), Vec3::splat(1.0), 0.5),
            taps: [
                (-0.952_585_3, [0.142_857_1; 3]),
                (-0.514_430_8, [0.142_857_1; 3]),
                (-0.237_680_3, [0.142_857_1; 3]),
                (-0.000_000_1, [0.142_857_1; 3]),
                (0.237_680_3, [0.142_857_1; 3]),
                (0.514_430_8, [0.142_857_1; 3]),
                (0.952_585_3, [0.142_857_1; 3]),
            ],
        },
        GoldenCase {
            name: "marble",
            profile: Profile::new(Vec3::new(0.9, 0.5, 0.2), Vec3::new(1.8, 1.2, 0.6), 0.25),
            taps: [
                (-1.648_705_3, [0.142_857_1, 0.052_224_0, 0.005_893_1]),
                (-0.890_361_1, [0.142_857_1, 0.108_124_5, 0.033_344_5]),
                (-0.411_369_8, [0.142_857_1, 0.210_314_6, 0.134_373_8]),
                (-0.000_000_1, [0.142_857_1, 0.258_673_9, 0.652_777_3]),
                (0.411_369_8, [0.142_857_1, 0.210_314_6, 0.134_373_8]),
                (0.890_361_1, [0.142_857_1, 0.108_124_5, 0.033_344_5]),
                (1.648_705_3, [0.142_857_1, 0.052_224_0, 0.005_893_1]),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use sss_kernel::{compute_kernel, NUM_SAMPLES};

    #[test]
    fn test_golden_kernels() {
        assert_eq!(NUM_SAMPLES, 7, "golden data assumes 7 taps");

        for case in cases() {
            let kernel = compute_kernel(&case.profile).unwrap();
            for (i, (tap, (position, weight))) in kernel.iter().zip(case.taps).enumerate() {
                assert!(
                    (tap.position - position).abs() < GOLDEN_TOLERANCE,
                    "{} tap {}: position {} vs {}",
                    case.name,
                    i,
                    tap.position,
                    position
                );
                for c in 0..3 {
                    assert!(
                        (tap.weight[c] - weight[c]).abs() < GOLDEN_TOLERANCE,
                        "{} tap {} channel {}: weight {} vs {}",
                        case.name,
                        i,
                        c,
                        tap.weight[c],
                        weight[c]
                    );
                }
            }
        }
    }
}
