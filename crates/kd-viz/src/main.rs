use std::path::PathBuf;
use std::process;

use clap::Parser;
use kd_tree::KdTree;
use kd_viz::load_points;
use log::error;
use macroquad::window::Conf;

/// Draws a 2-d tree built from a point file and queries it interactively.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// File of whitespace-separated `x y` pairs in the unit square.
    file: PathBuf,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "2-d Tree Visualization".to_owned(),
        window_width: 800,
        window_height: 800,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let points = match load_points(&args.file) {
        Ok(points) => points,
        Err(err) => {
            error!("{}: {}", args.file.display(), err);
            process::exit(1);
        }
    };

    let tree: KdTree = points.into_iter().collect();
    kd_viz::run(tree, &args.file.display().to_string()).await;
}
