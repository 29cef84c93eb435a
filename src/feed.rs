//! XML feed discovery and parsing
//!
//! Feeds are small XML files describing launchable entries, either nested
//! (`<feed><screen><entry>...</entry></screen></feed>`) or as a flat list
//! of `<entry>` elements under the root. An entry needs a `<title>` and an
//! `<arg>` (the exec command) and is skipped entirely without them;
//! `<description>` and `<link href="...">` are optional. Icon hrefs
//! resolve relative to the feed file's directory.

use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed XML in {path}: {source}")]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },
}

/// One launchable application description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub description: String,
    /// Icon path resolved against the feed file's directory.
    pub icon_path: Option<PathBuf>,
    /// Command handed to the launch script on tap.
    pub exec: String,
}

/// Recursively collect `*.xml` files under `dir`, sorted so load order is
/// deterministic. Paths that cannot be visited are logged and skipped.
pub fn discover_feeds(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        match entry {
            Ok(e) if e.file_type().is_file() => {
                let is_xml = e
                    .path()
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("xml"))
                    .unwrap_or(false);
                if is_xml {
                    files.push(e.into_path());
                }
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!("error accessing feed path: {}", err);
            }
        }
    }
    files.sort();
    files
}

/// Parse one feed file into its entries.
pub fn parse_feed(path: &Path) -> Result<Vec<FeedEntry>, FeedError> {
    let text = std::fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    parse_feed_str(&text, base).map_err(|source| FeedError::Xml {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every feed under every directory, in deterministic order.
/// Unreadable or malformed files are logged and skipped.
pub fn load_all(dirs: &[PathBuf]) -> Vec<FeedEntry> {
    let mut entries = Vec::new();
    for dir in dirs {
        for file in discover_feeds(dir) {
            match parse_feed(&file) {
                Ok(mut parsed) => {
                    tracing::debug!(feed = %file.display(), count = parsed.len(), "loaded feed");
                    entries.append(&mut parsed);
                }
                Err(err) => tracing::warn!("skipping feed: {}", err),
            }
        }
    }
    entries
}

/// Which `<entry>` child element text is currently being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Description,
    Exec,
}

#[derive(Debug, Default)]
struct Draft {
    title: Option<String>,
    description: Option<String>,
    icon: Option<String>,
    exec: Option<String>,
}

fn parse_feed_str(text: &str, base: &Path) -> Result<Vec<FeedEntry>, quick_xml::Error> {
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);

    let mut entries = Vec::new();
    let mut in_entry = false;
    let mut field: Option<Field> = None;
    let mut draft = Draft::default();

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.name().as_ref() {
                b"entry" => {
                    in_entry = true;
                    draft = Draft::default();
                }
                b"title" if in_entry => field = Some(Field::Title),
                b"description" if in_entry => field = Some(Field::Description),
                b"arg" if in_entry => field = Some(Field::Exec),
                b"link" if in_entry => draft.icon = href_attribute(e)?,
                _ => {}
            },
            Event::Empty(ref e) => {
                if in_entry && e.name().as_ref() == b"link" {
                    draft.icon = href_attribute(e)?;
                }
            }
            Event::Text(ref t) => {
                if in_entry {
                    let value = t.unescape()?.into_owned();
                    match field {
                        Some(Field::Title) => draft.title = Some(value),
                        Some(Field::Description) => draft.description = Some(value),
                        Some(Field::Exec) => draft.exec = Some(value),
                        None => {}
                    }
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"entry" => {
                    in_entry = false;
                    // title and exec are mandatory; skip the entry silently
                    if let (Some(title), Some(exec)) = (draft.title.take(), draft.exec.take()) {
                        entries.push(FeedEntry {
                            title,
                            description: draft.description.take().unwrap_or_default(),
                            icon_path: draft.icon.take().map(|href| base.join(href)),
                            exec,
                        });
                    }
                }
                b"title" | b"description" | b"arg" => field = None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(entries)
}

fn href_attribute(
    e: &quick_xml::events::BytesStart<'_>,
) -> Result<Option<String>, quick_xml::Error> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"href" {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const NESTED_FEED: &str = r#"<?xml version="1.0"?>
<feed>
  <screen>
    <entry>
      <title>Clock</title>
      <description>A clock</description>
      <link href="icons/clock.png"/>
      <arg>clock --fullscreen</arg>
    </entry>
    <entry>
      <title>Weather</title>
      <arg>weather</arg>
    </entry>
  </screen>
</feed>"#;

    const FLAT_FEED: &str = r#"<?xml version="1.0"?>
<root>
  <entry>
    <title>Gallery</title>
    <arg>gallery</arg>
  </entry>
</root>"#;

    #[test]
    fn test_parse_nested_feed() {
        let entries = parse_feed_str(NESTED_FEED, Path::new("/data/feeds")).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Clock");
        assert_eq!(entries[0].description, "A clock");
        assert_eq!(entries[0].exec, "clock --fullscreen");
        assert_eq!(
            entries[0].icon_path.as_deref(),
            Some(Path::new("/data/feeds/icons/clock.png"))
        );
        assert_eq!(entries[1].title, "Weather");
        assert_eq!(entries[1].description, "");
        assert_eq!(entries[1].icon_path, None);
    }

    #[test]
    fn test_parse_flat_feed() {
        let entries = parse_feed_str(FLAT_FEED, Path::new(".")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Gallery");
    }

    #[test]
    fn test_entry_without_title_skipped() {
        let xml = r#"<feed><screen>
            <entry><arg>orphan</arg></entry>
            <entry><title>Kept</title><arg>kept</arg></entry>
        </screen></feed>"#;
        let entries = parse_feed_str(xml, Path::new(".")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Kept");
    }

    #[test]
    fn test_entry_without_arg_skipped() {
        let xml = r#"<feed><screen>
            <entry><title>No Command</title></entry>
        </screen></feed>"#;
        let entries = parse_feed_str(xml, Path::new(".")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_idempotent() {
        let a = parse_feed_str(NESTED_FEED, Path::new("/d")).unwrap();
        let b = parse_feed_str(NESTED_FEED, Path::new("/d")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_discover_sorted_and_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("b.xml"), FLAT_FEED).unwrap();
        fs::write(dir.path().join("a.xml"), FLAT_FEED).unwrap();
        fs::write(dir.path().join("sub/c.XML"), FLAT_FEED).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a feed").unwrap();

        let files = discover_feeds(dir.path());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.xml"),
                PathBuf::from("b.xml"),
                PathBuf::from("sub/c.XML"),
            ]
        );
    }

    #[test]
    fn test_discover_missing_dir() {
        let files = discover_feeds(Path::new("/nonexistent/feed/dir"));
        assert!(files.is_empty());
    }

    #[test]
    fn test_load_all_skips_malformed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.xml"), FLAT_FEED).unwrap();
        fs::write(dir.path().join("bad.xml"), "<feed><entry></feed>").unwrap();
        let entries = load_all(&[dir.path().to_path_buf()]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Gallery");
    }
}
