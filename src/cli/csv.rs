use crate::cli::output::ReportRow;
use std::path::Path;
use wafipset::Result;

/*-------------------------------------------------------------------------------------------------
  Save the Report to a CSV File
-------------------------------------------------------------------------------------------------*/

pub fn save(rows: &[ReportRow], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush().map_err(csv::Error::from)?;

    Ok(())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::report_rows;
    use std::fs;
    use wafipset::Planner;

    #[test]
    fn test_save_report() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("report.csv");

        let plan = Planner::new(None).plan(&["8.8.8.8", "127.0.0.1"]);
        save(&report_rows(&plan, false), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "network,status,detail");
        assert_eq!(lines[1], "8.8.8.8/32,Insert,Valid global IPv4 network");
        assert!(lines[2].starts_with("127.0.0.1,Excluded,"));
        assert_eq!(lines.len(), 3);
    }
}
