//! CSV export of mission logs.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use rakshak::{LOG_HEADER, MissionLog};

/// Write the log as CSV: header line, then one row per record in order.
pub fn write_csv<W: Write>(log: &MissionLog, mut out: W) -> io::Result<()> {
    writeln!(out, "{}", LOG_HEADER.join(","))?;
    for record in log {
        writeln!(out, "{}", record.fields().join(","))?;
    }
    out.flush()
}

/// Save the log as `<log_dir>/<id>.csv`, replacing any previous log.
///
/// The file is written next to its destination as `<id>.csv.tmp` and renamed
/// into place, so readers never see a half-written log.
pub fn save_csv(log: &MissionLog, log_dir: &Path, id: &str) -> io::Result<PathBuf> {
    let final_path = log_dir.join(format!("{id}.csv"));
    let tmp_path = log_dir.join(format!("{id}.csv.tmp"));

    let file = File::create(&tmp_path)?;
    if let Err(e) = write_csv(log, BufWriter::new(file)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    if let Err(e) = fs::rename(&tmp_path, &final_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(final_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rakshak::Mission;

    fn corridor_log() -> MissionLog {
        Mission::parse("E..@", "corridor").unwrap().run().unwrap().log
    }

    #[test]
    fn test_csv_rows() {
        let mut buf = Vec::new();
        write_csv(&corridor_log(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Command,Front,Left,Right,Payload");
        assert_eq!(lines[1], "POWER_ON,WALL,WALL,EMPTY,empty");
        assert_eq!(lines[5], "PICKUP,EMPTY,WALL,WALL,carrying");
        assert_eq!(lines.last().copied(), Some("EJECT,OCCUPANT,WALL,WALL,empty"));
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_save_replaces_previous_log() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("corridor.csv"), "stale").unwrap();

        let path = save_csv(&corridor_log(), dir.path(), "corridor").unwrap();
        assert_eq!(path, dir.path().join("corridor.csv"));

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Command,Front,Left,Right,Payload\nPOWER_ON,"));
        assert!(!dir.path().join("corridor.csv.tmp").exists());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in the way makes the rename fail.
        fs::create_dir(dir.path().join("corridor.csv")).unwrap();
        fs::write(dir.path().join("corridor.csv").join("keep"), "x").unwrap();

        assert!(save_csv(&corridor_log(), dir.path(), "corridor").is_err());
        assert!(!dir.path().join("corridor.csv.tmp").exists());
        assert!(dir.path().join("corridor.csv").join("keep").exists());
    }
}
