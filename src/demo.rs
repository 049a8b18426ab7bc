//! Demo scenario: classify random points against a rotated box
//!
//! A cube is rotated by the configured Euler angles, once by moving the
//! collider's vertices and once by moving the sample points the other way.
//! Both views must agree on every point.

use eule_collision::{Collider, Corner, TrapazoidalPrismCollider};
use eule_math::{Quaternion, Random, Vector3d};

use crate::config::EuleConfig;

/// Outcome of [`run`]
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    /// Points classified
    pub samples: usize,
    /// Points inside the rotated prism
    pub contained: usize,
    /// Points where the rotated prism and the inverse-rotated point disagree
    pub disagreements: usize,
    /// Whether `q * q.inverse()` is the identity within the configured epsilon
    pub inverse_is_identity: bool,
}

impl DemoReport {
    /// Fraction of points inside the prism
    pub fn contained_ratio(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.contained as f64 / self.samples as f64
        }
    }
}

/// Run the scenario described by `config`
pub fn run(config: &EuleConfig) -> DemoReport {
    let [roll, pitch, yaw] = config.demo.euler_angles;
    let rotation = Quaternion::from_euler(Vector3d::new(roll, pitch, yaw));
    let inverse = rotation.inverse();
    log::info!("Rotation {} as euler {}", rotation, rotation.to_euler_angles());
    log::debug!("Rotation matrix:{}", rotation.to_rotation_matrix());

    let identity = &rotation * &inverse;
    let inverse_is_identity = identity
        .raw_values()
        .similar(&Quaternion::identity().raw_values(), config.comparison.epsilon);

    let h = config.demo.half_extent;
    let reference = TrapazoidalPrismCollider::axis_aligned(Vector3d::ZERO, Vector3d::new(h, h, h));
    let mut rotated = reference.clone();
    for corner in (0..8).filter_map(Corner::from_index) {
        rotated.set_vertex(corner, rotation.rotate_vector(reference.vertex(corner)));
    }

    let mut rng = Random::from_seed_option(config.random.seed);
    let extent = 2.0 * h;
    let mut contained = 0;
    let mut disagreements = 0;

    for _ in 0..config.demo.sample_count {
        let p = Vector3d::new(
            rng.random_range(-extent, extent),
            rng.random_range(-extent, extent),
            rng.random_range(-extent, extent),
        );

        let inside = rotated.contains(p);
        if inside {
            contained += 1;
        }
        if inside != reference.contains(inverse.rotate_vector(p)) {
            log::warn!("Containment mismatch at {}", p);
            disagreements += 1;
        }
    }

    let report = DemoReport {
        samples: config.demo.sample_count,
        contained,
        disagreements,
        inverse_is_identity,
    };
    log::info!(
        "{} of {} points inside ({:.3}), {} disagreements",
        report.contained,
        report.samples,
        report.contained_ratio(),
        report.disagreements
    );
    report
}
