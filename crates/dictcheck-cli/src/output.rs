//! Report file naming.

use std::path::{Path, PathBuf};

/// Suffix appended to the input file stem to name its report.
pub const REPORT_SUFFIX: &str = "-validation-results.json";

/// Default report location for an input file.
///
/// The report sits next to the input and is named after the part of the
/// file name before its first dot: `dir/pm.dict.yaml` becomes
/// `dir/pm-validation-results.json`.
pub fn report_path_for(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    let stem = if stem.is_empty() { "dictionary" } else { stem };

    let report_name = format!("{stem}{REPORT_SUFFIX}");
    match input.parent() {
        Some(parent) => parent.join(report_name),
        None => PathBuf::from(report_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lands_next_to_input() {
        assert_eq!(
            report_path_for(Path::new("/data/pm_dictionary.yaml")),
            PathBuf::from("/data/pm_dictionary-validation-results.json")
        );
    }

    #[test]
    fn stem_stops_at_first_dot() {
        assert_eq!(
            report_path_for(Path::new("dir/pm.dict.v2.yaml")),
            PathBuf::from("dir/pm-validation-results.json")
        );
    }

    #[test]
    fn bare_file_name() {
        assert_eq!(
            report_path_for(Path::new("input.yaml")),
            PathBuf::from("input-validation-results.json")
        );
    }

    #[test]
    fn dotfile_falls_back_to_default_stem() {
        assert_eq!(
            report_path_for(Path::new("/tmp/.yaml")),
            PathBuf::from("/tmp/dictionary-validation-results.json")
        );
    }
}
