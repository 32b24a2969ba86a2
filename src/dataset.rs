//! Comma-separated datasets in, one cluster id per line out.
//!
//! Input rows are numeric, without a header; blank lines are skipped. Output has one
//! line per point in input order, holding the cluster id or `-1` for noise.

use crate::cluster::ClusterAssignment;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Parse comma-separated numeric rows.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Vec<f32>>> {
    let mut points: Vec<Vec<f32>> = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split(',')
            .map(|cell| {
                let cell = cell.trim();
                cell.parse::<f32>().map_err(|e| Error::Parse {
                    line: idx + 1,
                    message: format!("{:?}: {}", cell, e),
                })
            })
            .collect::<Result<Vec<f32>>>()?;
        if let Some(first) = points.first() {
            if first.len() != row.len() {
                return Err(Error::DimensionMismatch {
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        points.push(row);
    }
    Ok(points)
}

/// Load a comma-separated dataset from `path`.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Vec<f32>>> {
    read_points(BufReader::new(File::open(path)?))
}

/// Write one label per line, `-1` for noise.
pub fn write_assignment<W: Write>(mut writer: W, assignment: &ClusterAssignment) -> Result<()> {
    for label in assignment.to_signed_labels() {
        writeln!(writer, "{}", label)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `assignment` to `path`, replacing any existing file.
pub fn save_assignment(path: impl AsRef<Path>, assignment: &ClusterAssignment) -> Result<()> {
    write_assignment(BufWriter::new(File::create(path)?), assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::cluster;

    #[test]
    fn test_read_points() {
        let input = "0,0\n 1.5 , -2\n\n3e1,4\n";
        let points = read_points(input.as_bytes()).unwrap();
        assert_eq!(points, vec![vec![0.0, 0.0], vec![1.5, -2.0], vec![30.0, 4.0]]);
    }

    #[test]
    fn test_read_points_errors() {
        assert!(matches!(
            read_points("1,2\n3,x\n".as_bytes()),
            Err(Error::Parse { line: 2, .. })
        ));
        assert!(matches!(
            read_points("1,2\n3\n".as_bytes()),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        ));
        assert!(read_points("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_write_assignment() {
        let data = vec![
            vec![0.0, 0.0],
            vec![1.0, 1.0],
            vec![2.0, 2.0],
            vec![10.0, 10.0],
            vec![11.0, 11.0],
            vec![12.0, 12.0],
            vec![100.0, 100.0],
        ];
        let assignment = cluster(&data, 2, None).unwrap();

        let mut out = Vec::new();
        write_assignment(&mut out, &assignment).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0\n0\n0\n1\n1\n1\n-1\n");
    }
}
