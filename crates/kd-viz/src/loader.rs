//! Point file loading.
//!
//! A point file is a whitespace-separated list of decimal numbers read
//! pairwise as `x y` coordinates. Line breaks carry no meaning.

use std::fs;
use std::path::Path;

use kd_tree::Point;
use log::info;
use thiserror::Error;

/// Errors that can occur while loading a point file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read point file: {0}")]
    Io(#[from] std::io::Error),

    #[error("token {index} is not a number: {token:?}")]
    InvalidNumber { index: usize, token: String },

    #[error("expected an even number of coordinates, found {0}")]
    OddCoordinateCount(usize),
}

/// Parses whitespace-separated coordinate pairs.
///
/// Token indices in errors are 1-based.
pub fn parse_points(text: &str) -> Result<Vec<Point>, LoadError> {
    let values = text
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
                index: i + 1,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<f64>, LoadError>>()?;

    if values.len() % 2 != 0 {
        return Err(LoadError::OddCoordinateCount(values.len()));
    }

    Ok(values
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect())
}

/// Reads and parses a point file.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let points = parse_points(&text)?;
    info!("loaded {} points from {}", points.len(), path.display());
    Ok(points)
}
