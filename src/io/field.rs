//! Landmark field files.
//!
//! Two formats are accepted:
//!
//! **YAML** (`.yaml` / `.yml`):
//!
//! ```yaml
//! landmarks:
//!   - { x: 0.0, y: 0.0 }
//!   - { x: 10.0, y: 0.0 }
//! ```
//!
//! **Text** (any other extension): one landmark per line as `x y` or `x,y`.
//! Blank lines and lines starting with `#` are ignored. This is the format
//! corner extractors usually dump.
//!
//! Landmark order in the file is the landmark index order.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{LandmarkField, WorldPoint};

/// Landmark file error
#[derive(Debug, Error)]
pub enum FieldLoadError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed text line
    #[error("Invalid landmark on line {line}: {content:?}")]
    InvalidLine {
        /// 1-based line number
        line: usize,
        /// Offending line
        content: String,
    },

    /// Coordinate is NaN or infinite
    #[error("Non-finite landmark coordinate at index {0}")]
    NonFinite(usize),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FieldLoadError>;

/// On-disk YAML layout.
#[derive(Debug, Serialize, Deserialize)]
struct FieldFile {
    landmarks: LandmarkField,
}

/// Load a landmark field, choosing the format from the file extension.
pub fn load_field(path: &Path) -> Result<LandmarkField> {
    let contents = std::fs::read_to_string(path)?;

    let field = if is_yaml(path) {
        parse_field_yaml(&contents)?
    } else {
        parse_field_text(&contents)?
    };

    debug!("Loaded {} landmarks from {:?}", field.len(), path);
    Ok(field)
}

/// Save a landmark field as YAML.
pub fn save_field_yaml(field: &LandmarkField, path: &Path) -> Result<()> {
    let file = FieldFile {
        landmarks: field.clone(),
    };
    std::fs::write(path, serde_yaml::to_string(&file)?)?;
    Ok(())
}

/// Parse the YAML format.
pub fn parse_field_yaml(yaml: &str) -> Result<LandmarkField> {
    let file: FieldFile = serde_yaml::from_str(yaml)?;
    check_finite(&file.landmarks)?;
    Ok(file.landmarks)
}

/// Parse the text format.
pub fn parse_field_text(text: &str) -> Result<LandmarkField> {
    let mut points = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let invalid = || FieldLoadError::InvalidLine {
            line: i + 1,
            content: raw.to_string(),
        };

        let mut coords = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::parse::<f64>);

        let x = coords.next().ok_or_else(invalid)?.map_err(|_| invalid())?;
        let y = coords.next().ok_or_else(invalid)?.map_err(|_| invalid())?;
        if coords.next().is_some() {
            return Err(invalid());
        }

        points.push(WorldPoint::new(x, y));
    }

    let field = LandmarkField::new(points);
    check_finite(&field)?;
    Ok(field)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
}

fn check_finite(field: &LandmarkField) -> Result<()> {
    match field.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(FieldLoadError::NonFinite(index)),
        None => Ok(()),
    }
}
