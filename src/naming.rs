use std::fs;
use std::path::Path;

/// Base name of the file's immediate parent folder.
///
/// Parents such as `.` or `..` have no name of their own and are resolved
/// on disk first. Only a filesystem root (or an unresolvable parent) gives "".
pub fn folder_base_name(path: &Path) -> String {
    let parent = match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => return String::new(),
    };

    if let Some(name) = parent.file_name() {
        return name.to_string_lossy().into_owned();
    }
    fs::canonicalize(parent)
        .ok()
        .and_then(|resolved| resolved.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default()
}

/// Lowercase extension including the leading dot, or empty if there is none.
pub fn lowercase_extension(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// `<folder>_<seq>` with the sequence zero-padded to four digits, followed by `ext`.
///   ("Vacation", 7, ".jpg") -> Vacation_0007.jpg
pub fn build_file_name(folder: &str, seq: u32, ext: &str) -> String {
    format!("{}_{:04}{}", folder, seq, ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_file_name() {
        assert_eq!(build_file_name("Vacation", 7, ".jpg"), "Vacation_0007.jpg");
        assert_eq!(build_file_name("A", 1, ".png"), "A_0001.png");
        assert_eq!(build_file_name("A", 12345, ".gif"), "A_12345.gif");
    }

    #[test]
    fn test_folder_base_name() {
        assert_eq!(folder_base_name(Path::new("/photos/Vacation/p1.jpg")), "Vacation");
        assert_eq!(folder_base_name(Path::new("src/A/sub/p1.jpg")), "sub");
        assert_eq!(folder_base_name(Path::new("/p1.jpg")), "");
    }

    #[test]
    fn test_folder_base_name_resolves_dot_segments() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let vacation = temp_dir.path().join("Vacation");
        fs::create_dir_all(vacation.join("sub")).unwrap();

        let via_parent = vacation.join("sub").join("..").join("p1.jpg");
        assert_eq!(folder_base_name(&via_parent), "Vacation");

        let via_dot = vacation.join(".").join("p1.jpg");
        assert_eq!(folder_base_name(&via_dot), "Vacation");
    }

    #[test]
    fn test_lowercase_extension() {
        assert_eq!(lowercase_extension(Path::new("p2.PNG")), ".png");
        assert_eq!(lowercase_extension(Path::new("p1.jpeg")), ".jpeg");
        assert_eq!(lowercase_extension(Path::new("noext")), "");
    }
}
