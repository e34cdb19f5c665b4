// src/output.rs
use crate::ensemble::PathEnsemble;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Long-format dump: one row per (series, path, step)
pub fn write_ensemble<W: Write, E: PathEnsemble + ?Sized>(out: &mut W, ensemble: &E) -> io::Result<()> {
    let time = ensemble.time();
    writeln!(out, "series,path,step,time,value")?;
    for series in ensemble.series() {
        for (path, row) in series.values.outer_iter().enumerate() {
            for (step, (t, v)) in time.iter().zip(row.iter()).enumerate() {
                writeln!(out, "{},{},{},{},{}", series.name, path, step, t, v)?;
            }
        }
    }
    Ok(())
}

pub fn write_ensemble_to_csv<P: AsRef<Path>, E: PathEnsemble + ?Sized>(
    filename: P,
    ensemble: &E,
) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    write_ensemble(&mut file, ensemble)?;
    file.flush()
}

pub fn write_summary_to_csv<P: AsRef<Path>, K: Display, V: Display>(
    filename: P,
    summary_data: &[(K, V)],
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ensemble::MertonEnsemble;
    use ndarray::array;

    #[test]
    fn test_long_format_rows() {
        let ensemble = MertonEnsemble {
            time: array![0.0, 1.0],
            x: array![[0.0, 0.5]],
            s: array![[1.0, 2.0]],
        };
        let mut buf = Vec::new();
        write_ensemble(&mut buf, &ensemble).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 1 + 2 * 2);
        assert_eq!(lines[0], "series,path,step,time,value");
        assert_eq!(lines[2], "X,0,1,1,0.5");
        assert_eq!(lines[4], "S,0,1,1,2");
    }

    #[test]
    fn test_summary_file() {
        let path = std::env::temp_dir().join("jump_paths_summary_test.csv");
        write_summary_to_csv(&path, &[("paths", 25.0), ("mean", 1.5)]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(text, "paths,25\nmean,1.5\n");
    }
}
