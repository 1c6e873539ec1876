use crate::naming;
use crate::scanner::ImageFile;
use std::collections::HashMap;
use std::path::PathBuf;

/// One file with its assigned destination name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCopy {
    pub source: PathBuf,
    pub folder: String,
    pub seq: u32,
    pub file_name: String,
}

/// Per-folder counters for a single source directory.
#[derive(Debug, Default)]
pub struct Sequencer {
    counters: HashMap<String, u32>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the next number for `folder`, starting at 1.
    pub fn next(&mut self, folder: &str) -> u32 {
        let counter = self.counters.entry(folder.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }
}

/// Sort by modification time ascending. Equal times fall back to the full path.
pub fn sort_by_modified(files: &mut [ImageFile]) {
    files.sort_by(|a, b| a.modified.cmp(&b.modified).then_with(|| a.path.cmp(&b.path)));
}

/// Order the files of one source directory and give each a destination name.
///
/// Every file consumes a sequence number, whatever later happens to it.
pub fn plan(mut files: Vec<ImageFile>) -> Vec<PlannedCopy> {
    sort_by_modified(&mut files);

    let mut sequencer = Sequencer::new();
    files
        .into_iter()
        .map(|file| {
            let folder = naming::folder_base_name(&file.path);
            let seq = sequencer.next(&folder);
            let ext = naming::lowercase_extension(&file.path);
            let file_name = naming::build_file_name(&folder, seq, &ext);
            log::debug!("planned {} as {}", file.path.display(), file_name);

            PlannedCopy {
                source: file.path,
                folder,
                seq,
                file_name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn make_file(path: &str, secs: i64) -> ImageFile {
        ImageFile {
            path: PathBuf::from(path),
            modified: Local.timestamp_opt(1_700_000_000 + secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_plan_orders_by_modified_time() {
        let files = vec![
            make_file("src/A/late.png", 30),
            make_file("src/A/early.JPG", 10),
            make_file("src/A/middle.gif", 20),
        ];
        let planned = plan(files);
        let names: Vec<&str> = planned.iter().map(|p| p.file_name.as_str()).collect();
        assert_eq!(names, vec!["A_0001.jpg", "A_0002.gif", "A_0003.png"]);
    }

    #[test]
    fn test_plan_counts_per_folder() {
        let files = vec![
            make_file("src/A/a1.jpg", 1),
            make_file("src/B/b1.jpg", 2),
            make_file("src/A/a2.jpg", 3),
            make_file("src/A/sub/s1.jpg", 4),
            make_file("src/B/b2.jpg", 5),
        ];
        let planned = plan(files);
        let names: Vec<&str> = planned.iter().map(|p| p.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["A_0001.jpg", "B_0001.jpg", "A_0002.jpg", "sub_0001.jpg", "B_0002.jpg"]
        );
    }

    #[test]
    fn test_equal_times_fall_back_to_path() {
        let files = vec![
            make_file("src/A/zeta.jpg", 5),
            make_file("src/A/alpha.jpg", 5),
            make_file("src/A/first.jpg", 1),
        ];
        let planned = plan(files);
        let sources: Vec<&str> = planned
            .iter()
            .map(|p| p.source.to_str().unwrap())
            .collect();
        assert_eq!(sources, vec!["src/A/first.jpg", "src/A/alpha.jpg", "src/A/zeta.jpg"]);
        assert_eq!(planned[2].seq, 3);
    }

    #[test]
    fn test_sequencer_starts_at_one() {
        let mut sequencer = Sequencer::new();
        assert_eq!(sequencer.next("A"), 1);
        assert_eq!(sequencer.next("A"), 2);
        assert_eq!(sequencer.next("B"), 1);
        assert_eq!(sequencer.next("A"), 3);
    }
}
