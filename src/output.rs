//! Write rendered pages and the optional JSON manifest.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::associate::SignEntry;
use crate::error::Result;
use crate::render::render_page;

/// Path of the page for `label`. Labels are used verbatim.
pub fn page_path(dir: &Path, label: &str) -> PathBuf {
    dir.join(format!("{label}.html"))
}

/// Write one page per entry into `dir`, creating it if needed.
///
/// Returns the number of files written. Entries are written in order, so a
/// failure leaves the earlier pages in place.
pub fn write_pages(entries: &[SignEntry], dir: &Path, base_url: &str) -> Result<usize> {
    fs::create_dir_all(dir)?;
    for entry in entries {
        let path = page_path(dir, &entry.label);
        fs::write(&path, render_page(entry, base_url))?;
        debug!("wrote {}", path.display());
    }
    info!("wrote {} pages to {}", entries.len(), dir.display());
    Ok(entries.len())
}

#[cfg(feature = "cli")]
mod manifest {
    use std::path::Path;

    use serde::Serialize;

    use crate::associate::SignEntry;
    use crate::error::Result;
    use crate::render::expanded_attributes;

    #[derive(Serialize)]
    struct ManifestEntry<'a> {
        label: &'a str,
        name: Option<&'a str>,
        images: Vec<Vec<(String, String)>>,
    }

    /// JSON array of `{label, name, images}`, image attributes as
    /// `[name, value]` pairs with `src` made absolute.
    pub fn manifest_json(entries: &[SignEntry], base_url: &str) -> Result<String> {
        let manifest: Vec<ManifestEntry> = entries
            .iter()
            .map(|entry| ManifestEntry {
                label: &entry.label,
                name: entry.name.as_deref(),
                images: entry
                    .images
                    .iter()
                    .map(|attrs| {
                        expanded_attributes(attrs, base_url)
                            .into_iter()
                            .map(|a| (a.name, a.value))
                            .collect()
                    })
                    .collect(),
            })
            .collect();
        Ok(serde_json::to_string_pretty(&manifest)?)
    }

    pub fn write_manifest(entries: &[SignEntry], path: &Path, base_url: &str) -> Result<()> {
        std::fs::write(path, manifest_json(entries, base_url)?)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use manifest::{manifest_json, write_manifest};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Attribute;

    fn entry(label: &str, src: &str) -> SignEntry {
        SignEntry {
            label: label.into(),
            name: None,
            images: vec![vec![Attribute::new("src", src)]],
        }
    }

    #[test]
    fn test_page_path() {
        assert_eq!(
            page_path(Path::new("out"), "5.1"),
            Path::new("out").join("5.1.html")
        );
    }

    #[test]
    fn test_write_pages() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pages");
        let entries = [entry("101", "/a.png"), entry("5.1", "/b.png")];

        let written = write_pages(&entries, &out, "https://likumi.lv").unwrap();
        assert_eq!(written, 2);

        let page = std::fs::read_to_string(out.join("5.1.html")).unwrap();
        assert!(page.contains("<title>5.1.</title>"));
        assert!(page.contains("src=\"https://likumi.lv/b.png\""));
        assert!(out.join("101.html").exists());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_manifest_json() {
        let mut sign = entry("101", "/a.png");
        sign.name = Some("Līkums".into());
        sign.images[0].push(Attribute::new("width", "80"));

        let json = manifest_json(&[sign], "https://likumi.lv").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "label": "101",
                "name": "Līkums",
                "images": [[["src", "https://likumi.lv/a.png"], ["width", "80"]]]
            }])
        );
    }
}
