use chromatile_core::{space, ColorRecord, Mode, SurfacePoint};

// ============================================================================
// Round-trip: unconvert(convert(p)) recovers p for every descriptor
// ============================================================================

const TOLERANCE: f64 = 1e-9;

#[test]
fn surface_round_trip_holds_for_every_mode_and_channel() {
    let grid = [-1.0, -0.7, -0.3, 0.0, 0.4, 0.8, 1.0];
    let depths = [-1.0, -0.5, 0.0, 0.5, 1.0];
    for mode in Mode::ALL {
        let descriptor = space(mode);
        for channel in &descriptor.channels {
            for &x in &grid {
                for &y in &grid {
                    for &z in &depths {
                        let patch = channel.convert(SurfacePoint::with_depth(x, y, z));
                        // The depth coordinate makes the patch cover all
                        // three channels, so the base values are irrelevant.
                        let color = ColorRecord::new(mode, [0.0; 3]).merge(&patch);
                        let coord = channel.unconvert(&color);
                        let key = channel.spec().key;
                        assert!(
                            (coord.x - x).abs() < TOLERANCE,
                            "{mode}/{key}: x {x} came back as {}",
                            coord.x
                        );
                        assert!(
                            (coord.y - y).abs() < TOLERANCE,
                            "{mode}/{key}: y {y} came back as {}",
                            coord.y
                        );
                        assert!(
                            (coord.z - z).abs() < TOLERANCE,
                            "{mode}/{key}: z {z} came back as {}",
                            coord.z
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn pointer_conversion_without_depth_leaves_held_channel_alone() {
    for mode in Mode::ALL {
        let descriptor = space(mode);
        for channel in &descriptor.channels {
            let patch = channel.convert(SurfacePoint::new(0.5, -0.5));
            assert_eq!(patch.len(), 2, "{mode}/{}", channel.spec().key);
            assert!(patch.get(channel.spec().key).is_none());
        }
    }
}

// ============================================================================
// Idempotence: get(set(v)) == v across the held channel's range
// ============================================================================

#[test]
fn set_then_get_is_identity_across_the_range() {
    for mode in Mode::ALL {
        let descriptor = space(mode);
        for channel in &descriptor.channels {
            let spec = channel.spec();
            let base = ColorRecord::new(mode, [0.0; 3]);
            for i in 0..=10 {
                let value = spec.min + (spec.max - spec.min) * f64::from(i) / 10.0;
                let color = base.merge(&channel.set(value));
                assert_eq!(
                    channel.get(&color),
                    value,
                    "{mode}/{}: set({value}) did not round-trip",
                    spec.key
                );
            }
        }
    }
}
