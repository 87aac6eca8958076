use clap::Parser;
use polymirror::Scene;
use polymirror_json::{serde_json, serialize_scenes};
use polymirror_random::{rand, random_scenes, Random};
use rand::{rngs::StdRng, SeedableRng};

use std::{error::Error, fs::File, iter, path::PathBuf};

/// Write a JSON file of random reflection scenes
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Where to write the scene file
    file: PathBuf,

    /// Number of scenes (random if not given)
    #[arg(short, long)]
    count: Option<usize>,

    /// Seed, for reproducible files
    #[arg(short, long)]
    seed: Option<u64>,
}

fn generate_scenes(count: Option<usize>, rng: &mut impl rand::Rng) -> Vec<Scene> {
    match count {
        Some(n) => iter::repeat_with(|| Scene::random(rng)).take(n).collect(),
        None => random_scenes(rng),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let scenes = generate_scenes(args.count, &mut rng);

    serde_json::to_writer_pretty(File::create(&args.file)?, &serialize_scenes(&scenes))?;

    log::info!("wrote {} scene(s) to {}", scenes.len(), args.file.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_respected() {
        let mut rng = StdRng::seed_from_u64(5);

        for n in [0, 1, 5, 40] {
            assert_eq!(generate_scenes(Some(n), &mut rng).len(), n);
        }
    }

    #[test]
    fn count_is_random_when_absent() {
        let mut rng = StdRng::seed_from_u64(5);
        let n = generate_scenes(None, &mut rng).len();
        assert!((1..32).contains(&n));
    }

    #[test]
    fn seed_makes_scenes_reproducible() {
        let first = generate_scenes(Some(3), &mut StdRng::seed_from_u64(9));
        let second = generate_scenes(Some(3), &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }
}
