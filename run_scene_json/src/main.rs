use clap::Parser;
use polymirror::{Reflection, Scene};
use polymirror_json::{deserialize_scenes, serde_json, serialize_reflection};

use std::{error::Error, fs::File, io::BufReader, path::PathBuf};

/// Locate the reflection point of every scene in a JSON scene file
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the scene file
    file: PathBuf,

    /// Largest acceptable reflection error, larger ones are reported
    #[arg(short, long, default_value_t = 1e-6)]
    tolerance: f64,

    /// Print one JSON object per scene instead of plain text
    #[arg(long)]
    json: bool,
}

enum Verdict {
    Found(f64),
    OutOfTolerance(f64),
    Unchecked,
    Degenerate,
}

fn judge(scene: &Scene, reflection: &Reflection, tolerance: f64) -> Verdict {
    if reflection.is_degenerate() {
        return Verdict::Degenerate;
    }

    match scene.check(reflection) {
        Some(e) if e <= tolerance => Verdict::Found(e),
        Some(e) => Verdict::OutOfTolerance(e),
        None => Verdict::Unchecked,
    }
}

fn report(i: usize, scene: &Scene, reflection: &Reflection, tolerance: f64) {
    let p = reflection.point;

    match judge(scene, reflection, tolerance) {
        Verdict::Found(e) => {
            log::debug!("scene {i}: reflection error {e:.3e}");
        }
        Verdict::OutOfTolerance(e) => log::warn!(
            "scene {i}: ({}, {}) is off by {e:.3e}, try another guess than {}",
            p.x,
            p.y,
            scene.guess
        ),
        Verdict::Unchecked => log::warn!("scene {i}: the reflection point couldn't be checked"),
        Verdict::Degenerate => log::warn!(
            "scene {i}: the search broke down (history: {:?})",
            reflection.history.as_slice()
        ),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let json: serde_json::Value = serde_json::from_reader(BufReader::new(File::open(&args.file)?))?;
    let scenes = deserialize_scenes(&json)?;

    log::info!("{} scene(s) loaded from {}", scenes.len(), args.file.display());

    for (i, scene) in scenes.iter().enumerate() {
        let reflection = scene.locate();

        report(i, scene, &reflection, args.tolerance);

        if args.json {
            println!("{}", serialize_reflection(scene, &reflection));
        } else {
            let p = reflection.point;
            println!("{i}: x = {}, y = {}", p.x, p.y);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polymirror::{Point, Polynomial, SecantHistory};

    fn scene(guess: f64) -> Scene {
        Scene::new(
            [-5., 5.],
            [5., 5.],
            Polynomial::try_new([0., 0.]).unwrap(),
            guess,
        )
    }

    #[test]
    fn located_point_is_accepted() {
        let s = scene(0.);
        assert!(matches!(judge(&s, &s.locate(), 1e-6), Verdict::Found(_)));
    }

    #[test]
    fn wrong_point_is_out_of_tolerance() {
        let s = scene(0.);
        let r = Reflection {
            point: Point::new(3., 0.),
            history: SecantHistory::new(),
        };
        assert!(matches!(judge(&s, &r, 1e-6), Verdict::OutOfTolerance(_)));
    }

    #[test]
    fn nan_guess_is_degenerate() {
        let s = scene(f64::NAN);
        assert!(matches!(judge(&s, &s.locate(), 1e-6), Verdict::Degenerate));
    }
}
