use polymirror::*;

use core::iter;
pub use rand;

/// Largest magnitude of the coordinates of random points.
pub const MAX_COORD_MAG: Float = 7.0;

/// Largest degree of random mirrors.
pub const MAX_DEGREE: usize = 3;

pub trait Random: Sized {
    /// Generate a randomized value using the provided `rng`
    ///
    /// This method must not fail. If creating a value is faillible, keep trying until success
    fn random(rng: &mut (impl rand::Rng + ?Sized)) -> Self;
}

impl Random for Point {
    fn random(rng: &mut (impl rand::Rng + ?Sized)) -> Self {
        rand_point(rng, MAX_COORD_MAG)
    }
}

impl Random for Polynomial {
    fn random(rng: &mut (impl rand::Rng + ?Sized)) -> Self {
        let degree = rng.gen_range(0..=MAX_DEGREE);

        // keep higher degree terms small so the mirror stays in view
        let mut coeff = |i: usize| {
            let scale = 1.0 / (1 << (degree - i)) as Float;
            (rng.gen::<Float>() - 0.5) * 2.0 * scale
        };

        let leading = coeff(0);
        let rest: Vec<Float> = (1..=degree).map(&mut coeff).collect();

        Polynomial::with_leading(leading, rest)
    }
}

impl Random for Scene {
    /// The source and camera lie above the mirror, on either side of the origin,
    /// the guess lies between them.
    fn random(rng: &mut (impl rand::Rng + ?Sized)) -> Self {
        let mirror = Polynomial::random(rng);

        let [source, camera] = [-1.0, 1.0].map(|side| {
            let x = side * rng.gen_range(0.5..MAX_COORD_MAG);
            Point::new(x, mirror.eval(x) + rng.gen_range(1.0..MAX_COORD_MAG))
        });

        let guess = rng.gen_range(source.x..camera.x);

        Scene::new(source, camera, mirror, guess)
    }
}

pub fn random_scenes(rng: &mut (impl rand::Rng + ?Sized)) -> Vec<Scene> {
    const MIN_NUM_SCENES: usize = 1;
    const MAX_NUM_SCENES: usize = 32;
    let num_scenes = rng.gen_range(MIN_NUM_SCENES..MAX_NUM_SCENES);

    iter::repeat_with(|| Scene::random(rng))
        .take(num_scenes)
        .collect()
}

pub fn rand_point(rng: &mut (impl rand::Rng + ?Sized), max_coord_mag: Float) -> Point {
    // the rng generates floats in 0.0..1.0, scale and translate the range accordingly

    Point::from(Vector::from_fn(|_, _| {
        (rng.gen::<Float>() - 0.5) * (max_coord_mag.abs() * 2.0)
    }))
}
