//! Glob expansion and parent-directory grouping.

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::PathBuf;

use termcolor::WriteColor;

use super::{RenderConfig, render_entries};
use crate::entry::Entry;
use crate::hidden::is_path_hidden;
use crate::theme::Stylist;

/// Expand `pattern` and render the matches grouped by parent directory.
///
/// Both single-level and globstar (`**`) wildcards are supported. Groups
/// print as `parent:` headers followed by a flat listing of the children.
/// A group is skipped entirely when its parent is hidden (and hidden
/// entries were not requested) or when no visible children remain, so an
/// empty header is never printed. An invalid pattern expands to nothing;
/// pattern syntax is a presentation concern, not an error.
pub fn render_glob_groups(
    w: &mut dyn WriteColor,
    stylist: &dyn Stylist,
    pattern: &str,
    config: &RenderConfig,
) -> io::Result<()> {
    for (parent, paths) in group_by_parent(expand(pattern)) {
        if !config.show_hidden && is_path_hidden(&parent) {
            continue;
        }

        let children = resolve_children(&paths, config.show_hidden);
        if children.is_empty() {
            continue;
        }

        writeln!(w, "{}:", parent.display())?;
        render_entries(w, stylist, children, config)?;
    }
    Ok(())
}

fn expand(pattern: &str) -> Vec<PathBuf> {
    match glob::glob(pattern) {
        Ok(paths) => paths.filter_map(|p| p.ok()).collect(),
        Err(_) => Vec::new(),
    }
}

/// Group matches by parent directory, parents ordered case-insensitively.
/// A bare file name groups under `.` like any other relative match.
fn group_by_parent(paths: Vec<PathBuf>) -> Vec<(PathBuf, Vec<PathBuf>)> {
    let mut groups: HashMap<PathBuf, Vec<PathBuf>> = HashMap::new();
    for path in paths {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        groups.entry(parent).or_default().push(path);
    }

    let mut ordered: Vec<_> = groups.into_iter().collect();
    ordered.sort_by_key(|(parent, _)| parent.to_string_lossy().to_lowercase());
    ordered
}

/// Resolve matched paths into entries, applying the hidden filter.
/// Matches that fail to resolve metadata are dropped silently.
fn resolve_children(paths: &[PathBuf], show_hidden: bool) -> Vec<Entry> {
    let mut children = Vec::new();
    for path in paths {
        let Ok(entry) = Entry::from_path(path) else {
            continue;
        };
        if show_hidden || !entry.is_hidden() {
            children.push(entry);
        }
    }
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use std::fs;
    use std::path::Path;
    use termcolor::NoColor;

    fn temp_dir() -> tempfile::TempDir {
        tempfile::Builder::new()
            .prefix("lsr-glob")
            .tempdir()
            .expect("Failed to create temp dir")
    }

    fn plain_config() -> RenderConfig {
        RenderConfig {
            color: false,
            icons: false,
            ..RenderConfig::default()
        }
    }

    fn render(pattern: &str, config: &RenderConfig) -> String {
        let mut sink = NoColor::new(Vec::new());
        render_glob_groups(&mut sink, &Theme::Dark, pattern, config).expect("render");
        String::from_utf8(sink.into_inner()).expect("utf8")
    }

    #[test]
    fn test_groups_by_parent_directory() {
        let grouped = group_by_parent(vec![
            PathBuf::from("/a/x"),
            PathBuf::from("/a/y"),
            PathBuf::from("/b/z"),
        ]);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, Path::new("/a"));
        assert_eq!(grouped[0].1, [Path::new("/a/x"), Path::new("/a/y")]);
        assert_eq!(grouped[1].0, Path::new("/b"));
        assert_eq!(grouped[1].1, [Path::new("/b/z")]);
    }

    #[test]
    fn test_parents_order_case_insensitively() {
        let grouped = group_by_parent(vec![PathBuf::from("/B/x"), PathBuf::from("/a/y")]);
        assert_eq!(grouped[0].0, Path::new("/a"));
        assert_eq!(grouped[1].0, Path::new("/B"));
    }

    #[test]
    fn test_bare_names_group_under_current_dir() {
        let grouped = group_by_parent(vec![PathBuf::from("x.txt")]);
        assert_eq!(grouped[0].0, Path::new("."));
    }

    #[test]
    fn test_glob_renders_group_headers() {
        let dir = temp_dir();
        fs::create_dir(dir.path().join("one")).expect("mkdir");
        fs::create_dir(dir.path().join("two")).expect("mkdir");
        fs::write(dir.path().join("one/f1.txt"), "").expect("write");
        fs::write(dir.path().join("two/f2.txt"), "").expect("write");

        let pattern = format!("{}/*/*.txt", dir.path().display());
        let out = render(&pattern, &plain_config());
        let expected = format!(
            "{root}/one:\nf1.txt\n{root}/two:\nf2.txt\n",
            root = dir.path().display()
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_hidden_parent_suppresses_group() {
        let dir = temp_dir();
        fs::create_dir(dir.path().join(".shadow")).expect("mkdir");
        fs::create_dir(dir.path().join("lit")).expect("mkdir");
        fs::write(dir.path().join(".shadow/f.txt"), "").expect("write");
        fs::write(dir.path().join("lit/f.txt"), "").expect("write");

        let pattern = format!("{}/*/f.txt", dir.path().display());
        let out = render(&pattern, &plain_config());
        assert!(out.contains("lit:"));
        assert!(!out.contains(".shadow"));

        let all = RenderConfig {
            show_hidden: true,
            ..plain_config()
        };
        let out = render(&pattern, &all);
        assert!(out.contains(".shadow"));
    }

    #[test]
    fn test_group_of_only_hidden_children_prints_no_header() {
        let dir = temp_dir();
        fs::create_dir(dir.path().join("ghosts")).expect("mkdir");
        fs::create_dir(dir.path().join("vis")).expect("mkdir");
        fs::write(dir.path().join("ghosts/.g.txt"), "").expect("write");
        fs::write(dir.path().join("vis/f.txt"), "").expect("write");

        let pattern = format!("{}/*/*", dir.path().display());
        let out = render(&pattern, &plain_config());
        assert!(out.contains("vis:"));
        assert!(!out.contains("ghosts"));
    }

    #[test]
    fn test_globstar_matches_across_depths() {
        let dir = temp_dir();
        fs::create_dir_all(dir.path().join("a/b")).expect("mkdir");
        fs::write(dir.path().join("top.log"), "").expect("write");
        fs::write(dir.path().join("a/b/deep.log"), "").expect("write");

        let pattern = format!("{}/**/*.log", dir.path().display());
        let out = render(&pattern, &plain_config());
        assert!(out.contains("top.log"));
        assert!(out.contains("deep.log"));
    }

    #[test]
    fn test_invalid_pattern_renders_nothing() {
        let out = render("[", &plain_config());
        assert_eq!(out, "");
    }
}
