//! Point file I/O: CSV (`x`,`y` columns) through polars, JSON `[[x, y], ...]`.

use anyhow::{bail, Context, Result};
use dchull::Vec2;
use polars::prelude::*;
use std::fs;
use std::path::Path;

pub fn read_points(path: &Path) -> Result<Vec<Vec2<f64>>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(path),
        Some("json") => read_json(path),
        _ => bail!("unsupported point file {} (expected .csv or .json)", path.display()),
    }
}

fn read_csv(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => bail!("row {row} of {} has a missing coordinate", path.display()),
        })
        .collect()
}

fn read_json(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(raw.into_iter().map(|[x, y]| Vec2::new(x, y)).collect())
}

pub fn write_csv(path: &Path, pts: &[Vec2<f64>]) -> Result<()> {
    ensure_parent(path)?;
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn csv_written_by_sample_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("pts.csv");
        let pts = vec![Vec2::new(0.0, 0.0), Vec2::new(1.5, -2.0), Vec2::new(3.0, 4.25)];
        write_csv(&path, &pts).unwrap();
        assert_eq!(read_points(&path).unwrap(), pts);
    }

    #[test]
    fn csv_with_integer_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ints.csv");
        fs::write(&path, "x,y\n0,0\n2,0\n1,1\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts[2], Vec2::new(1.0, 1.0));
    }

    #[test]
    fn json_pairs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.json");
        fs::write(&path, "[[0, 0], [5, 5]]").unwrap();
        assert_eq!(
            read_points(&path).unwrap(),
            vec![Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0)]
        );
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = read_points(Path::new("points.txt")).unwrap_err();
        assert!(err.to_string().contains("unsupported"));
    }
}
