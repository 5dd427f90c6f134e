//! Fixed input and output locations.
//!
//! Both files live at the repository root, resolved from this crate's own
//! manifest directory so the tool works from any current directory.

use std::path::{Path, PathBuf};

/// File name of the source channel listing.
pub const DEFAULT_INPUT_FILE: &str = "List-Channels.pdf";

/// File name of the extracted text.
pub const DEFAULT_OUTPUT_FILE: &str = "channel_list_full.txt";

/// The repository root (two levels above `crates/channel-extract`).
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest_dir.to_path_buf())
}

/// Source PDF and destination text file for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ExtractPaths {
    /// Default file names joined onto `root`.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            input: root.join(DEFAULT_INPUT_FILE),
            output: root.join(DEFAULT_OUTPUT_FILE),
        }
    }

    /// Default file names at the repository root.
    pub fn defaults() -> Self {
        Self::from_root(workspace_root())
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

impl Default for ExtractPaths {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_root_joins_default_names() {
        let paths = ExtractPaths::from_root("/srv/site");
        assert_eq!(paths.input, PathBuf::from("/srv/site/List-Channels.pdf"));
        assert_eq!(paths.output, PathBuf::from("/srv/site/channel_list_full.txt"));
    }

    #[test]
    fn workspace_root_contains_crates_dir() {
        let root = workspace_root();
        assert!(root.join("crates").join("channel-extract").is_dir());
    }

    #[test]
    fn defaults_resolve_under_workspace_root() {
        let paths = ExtractPaths::defaults();
        assert_eq!(paths.input.parent(), Some(workspace_root().as_path()));
        assert!(paths.output.ends_with(DEFAULT_OUTPUT_FILE));
    }

    #[test]
    fn overrides_replace_one_side_only() {
        let paths = ExtractPaths::from_root("/srv/site").with_output("/tmp/out.txt");
        assert_eq!(paths.input, PathBuf::from("/srv/site/List-Channels.pdf"));
        assert_eq!(paths.output, PathBuf::from("/tmp/out.txt"));

        let paths = paths.with_input("in.pdf");
        assert_eq!(paths.input, PathBuf::from("in.pdf"));
    }
}
