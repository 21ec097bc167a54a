//! Synthetic training data generated fresh at every startup
//!
//! The features are uniform noise and the labels are coin flips; the
//! fitted model carries no real health signal. Callers pass the RNG so
//! tests can pin a seed.

use ndarray::{Array1, Array2};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

use crate::data::profile::HealthProfile;

/// Number of synthetic training samples
pub const N_SAMPLES: usize = 100;

/// Generate the startup training set: a `N_SAMPLES` x 5 matrix of
/// uniform [0,1) features and `N_SAMPLES` labels drawn from {0,1}.
pub fn training_set<R: Rng + ?Sized>(rng: &mut R) -> (Array2<f64>, Array1<f64>) {
    let x = Array2::random_using(
        (N_SAMPLES, HealthProfile::N_FEATURES),
        Uniform::new(0.0, 1.0),
        rng,
    );
    let y = labels(rng);

    (x, y)
}

/// Draw `N_SAMPLES` binary labels uniformly from {0,1}
pub fn labels<R: Rng + ?Sized>(rng: &mut R) -> Array1<f64> {
    Array1::from_iter((0..N_SAMPLES).map(|_| rng.gen_range(0..2) as f64))
}
