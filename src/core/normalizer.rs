//! Filename tidying.
//!
//! Turns raw filenames such as `Inception.2010.mp4` into display titles such
//! as `Inception 2010`.

use crate::utils::fs::split_extension;

/// Characters treated as word separators in raw filenames.
const SEPARATORS: [char; 3] = ['_', '-', '.'];

/// Tidy a raw filename into a display title.
///
/// Drops the extension, turns every `_`, `-` and `.` into a single space and
/// trims both ends. Runs of separators become runs of spaces; inner
/// whitespace is left alone.
pub fn tidy_name(filename: &str) -> String {
    let (stem, _) = split_extension(filename);
    stem.replace(SEPARATORS, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tidy_name() {
        assert_eq!(tidy_name("Inception.2010.mp4"), "Inception 2010");
        assert_eq!(tidy_name("The_Matrix-1999.mkv"), "The Matrix 1999");
        assert_eq!(tidy_name("Show.Name.S01E02.mp4"), "Show Name S01E02");
        assert_eq!(tidy_name("plain"), "plain");
    }

    #[test]
    fn test_tidy_name_keeps_inner_runs() {
        assert_eq!(tidy_name("A__B.mp4"), "A  B");
        assert_eq!(tidy_name("A - B.mkv"), "A   B");
    }

    #[test]
    fn test_tidy_name_trims_ends() {
        assert_eq!(tidy_name("_Leading.and.trailing_.avi"), "Leading and trailing");
        assert_eq!(tidy_name("  spaced  .mp4"), "spaced");
    }

    #[test]
    fn test_tidy_name_dotfile() {
        assert_eq!(tidy_name(".mp4"), "");
        assert_eq!(tidy_name(".hidden"), "");
    }

    #[test]
    fn test_tidy_name_has_no_separators() {
        for name in [
            "a.b.c.d",
            "x-y_z.tar.gz",
            "...",
            "-_-.",
            "Foo.S01E01.mp4",
            "no extension here",
        ] {
            let tidied = tidy_name(name);
            assert!(!tidied.contains(SEPARATORS), "{name:?} -> {tidied:?}");
            assert_eq!(tidied, tidied.trim());
        }
    }

    #[test]
    fn test_tidy_name_idempotent_without_separators() {
        for name in ["Inception 2010", "Foo S01E01", "plain"] {
            let once = tidy_name(name);
            assert_eq!(tidy_name(&once), once);
        }
    }
}
