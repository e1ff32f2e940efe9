use std::f64::consts::TAU;

use scara_core::{
    algorithm::{ActuatorAngles, ForwardKinematics, InverseKinematics},
    ArmGeometry, Target,
};

fn grid(step: f64, extent: f64) -> impl Iterator<Item = Target> {
    let steps = (2.0 * extent / step) as i32;

    (0..=steps).flat_map(move |i| {
        (0..=steps).map(move |j| {
            Target::new(-extent + i as f64 * step, -extent + j as f64 * step)
        })
    })
}

#[test]
fn actuator_angles_stay_normalized() {
    for geometry in [
        ArmGeometry::default(),
        ArmGeometry::new(150.0, 70.0).unwrap(),
    ] {
        let ik = InverseKinematics::new(geometry);

        for target in grid(7.5, geometry.max_reach()) {
            if !geometry.is_reachable(&target) {
                continue;
            }

            for angles in ik.solutions(&target).unwrap() {
                let actuator = ActuatorAngles::from(angles);

                assert!((0.0..TAU).contains(&actuator.alpha), "alpha at {}", target);
                assert!((0.0..TAU).contains(&actuator.beta), "beta at {}", target);
            }
        }
    }
}

#[test]
fn forward_kinematics_reconstructs_target() {
    let geometry = ArmGeometry::new(150.0, 70.0).unwrap();
    let ik = InverseKinematics::new(geometry);
    let fk = ForwardKinematics::new(geometry);

    for target in grid(5.0, geometry.max_reach()) {
        if !geometry.is_reachable(&target) {
            continue;
        }

        let unchecked = ik.solve_unchecked(&target);
        if unchecked.is_finite() {
            let point = fk.solve(&unchecked);
            assert!((point - target.point).norm() < 1e-6, "unchecked at {}", target);
        }

        for angles in ik.solutions(&target).unwrap() {
            let point = fk.solve(&angles);
            assert!((point - target.point).norm() < 1e-6, "checked at {}", target);
        }
    }
}

#[test]
fn unreachable_targets_propagate_nan() {
    let geometry = ArmGeometry::default();
    let ik = InverseKinematics::new(geometry);

    for target in grid(10.0, 300.0) {
        if target.distance() <= geometry.max_reach() + 1e-6 {
            continue;
        }

        let angles = ik.solve_unchecked(&target);
        let actuator = ActuatorAngles::from(angles);

        assert!(angles.a1.is_nan() && angles.a2.is_nan(), "joint at {}", target);
        assert!(
            actuator.alpha.is_nan() && actuator.beta.is_nan(),
            "actuator at {}",
            target
        );
        assert!(ik.solve(&target).is_err());
    }
}
