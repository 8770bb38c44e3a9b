//! Splitting `/`-delimited relative paths into components.

use itertools::Itertools;

/// Path separator used by every tree operation.
pub const SEPARATOR: char = '/';

/// Split a path into its non-empty components.
///
/// Leading, trailing and repeated separators collapse, so `"/a//b/"` yields
/// `["a", "b"]`. An input without any non-empty component yields an empty vector.
pub fn split_components(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).filter(|c| !c.is_empty()).collect()
}

/// Join components back into canonical `a/b/c` form.
pub fn join_components<S: AsRef<str>>(components: &[S]) -> String {
    components.iter().map(AsRef::as_ref).join("/")
}

/// Split into `(parent components, final component)`.
///
/// Returns `None` when the path has no components at all.
pub fn split_parent(path: &str) -> Option<(Vec<&str>, &str)> {
    let mut components = split_components(path);
    let last = components.pop()?;
    Some((components, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a/b/c", vec!["a", "b", "c"])]
    #[case("/a//b/", vec!["a", "b"])]
    #[case("file.txt", vec!["file.txt"])]
    #[case("", vec![])]
    #[case("///", vec![])]
    #[case("dir1/file 1.txt", vec!["dir1", "file 1.txt"])]
    fn test_split_components(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_components(input), expected);
    }

    #[test]
    fn test_join_components() {
        assert_eq!(join_components(&["a", "b", "c"]), "a/b/c");
        assert_eq!(join_components::<&str>(&[]), "");
    }

    #[test]
    fn test_split_parent() {
        assert_eq!(split_parent("a/b/c"), Some((vec!["a", "b"], "c")));
        assert_eq!(split_parent("/top/"), Some((vec![], "top")));
        assert_eq!(split_parent("//"), None);
    }
}
