use std::path::{Component, Path};

pub trait PathExt {
    /// Name starts with `.` (and is not `.` or `..`).
    fn is_hidden(&self) -> bool;
    /// Normal components as owned strings, dropping `.`, `..` and roots.
    ///
    /// `None` if any component is not valid UTF-8.
    fn to_components(&self) -> Option<Vec<String>>;
}

impl PathExt for Path {
    fn is_hidden(&self) -> bool {
        self.file_name()
            .map(|name| name.to_string_lossy().starts_with('.'))
            .unwrap_or(false)
    }

    fn to_components(&self) -> Option<Vec<String>> {
        self.components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_str().map(str::to_owned)),
                _ => None,
            })
            .collect()
    }
}
