use clap::Parser;
use kd_tree::{KdTree, Point};
use log::info;
use macroquad::window::Conf;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws a 2-d tree over uniformly random points and queries it interactively.
#[derive(Debug, Parser)]
#[command(about)]
struct Args {
    /// Number of points to insert.
    #[arg(short, long, default_value_t = 100)]
    count: usize,

    /// Seed for reproducible point sets.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "2-d Tree - Random Points".to_owned(),
        window_width: 800,
        window_height: 800,
        ..Default::default()
    }
}

/// Generates `count` uniformly distributed points in the unit square.
fn generate_points(rng: &mut StdRng, count: usize) -> Vec<Point> {
    (0..count)
        .map(|_| Point::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect()
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    info!("generating {} points with seed {}", args.count, seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let tree: KdTree = generate_points(&mut rng, args.count).into_iter().collect();
    kd_viz::run(tree, &format!("random (seed {})", seed)).await;
}
