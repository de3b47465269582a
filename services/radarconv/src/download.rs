//! `download`: bulk retrieval of linked files from an HTTP index page.
//!
//! Fetches the index, collects `href` links with the requested extension,
//! and downloads each sequentially with streaming writes. A per-file
//! failure is logged and skipped; an unreachable index page fails the
//! command.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use futures::StreamExt;
use tracing::{info, warn};

pub async fn run(index_url: &str, output_dir: &Path, extension: &str) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let response = reqwest::get(index_url)
        .await
        .with_context(|| format!("failed to fetch index page {}", index_url))?;
    if !response.status().is_success() {
        bail!("index page returned {}", response.status());
    }
    let body = response.text().await.context("failed to read index page")?;

    let links = extract_links(&body, extension);
    info!(count = links.len(), extension, "links found on index page");

    let mut downloaded = 0usize;
    let mut failed = 0usize;
    for (idx, link) in links.iter().enumerate() {
        let url = resolve_url(index_url, link);
        let name = match file_name(&url) {
            Some(name) => name,
            None => {
                warn!(url = %url, "cannot derive a file name, skipping");
                failed += 1;
                continue;
            }
        };
        info!(
            file = name,
            progress = format!("{}/{}", idx + 1, links.len()),
            "downloading"
        );

        match fetch_to_file(&url, &output_dir.join(name)).await {
            Ok(bytes) => {
                info!(file = name, bytes, "downloaded");
                downloaded += 1;
            }
            Err(e) => {
                warn!(file = name, error = %e, "download failed, continuing");
                failed += 1;
            }
        }
    }

    info!(downloaded, failed, "download run complete");
    Ok(())
}

async fn fetch_to_file(url: &str, path: &Path) -> Result<u64> {
    let response = reqwest::get(url).await.context("request failed")?;
    if !response.status().is_success() {
        bail!("server returned {}", response.status());
    }

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut stream = response.bytes_stream();
    let mut written = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("error reading response chunk")?;
        file.write_all(&chunk).context("error writing chunk")?;
        written += chunk.len() as u64;
    }
    Ok(written)
}

/// Pull `href` attribute values out of an HTML page, keeping those that
/// end with `extension`. Directory listings are simple enough that a
/// quote-delimited scan covers them.
fn extract_links(html: &str, extension: &str) -> Vec<String> {
    let mut links = Vec::new();
    let mut rest = html;
    while let Some(pos) = rest.find("href=") {
        rest = &rest[pos + 5..];
        let Some(quote) = rest.chars().next() else { break };
        if quote != '"' && quote != '\'' {
            continue;
        }
        rest = &rest[1..];
        let Some(end) = rest.find(quote) else { break };
        let link = &rest[..end];
        rest = &rest[end + 1..];
        if link.ends_with(extension) {
            links.push(link.to_string());
        }
    }
    links
}

/// Join a possibly relative link against the index page URL.
fn resolve_url(base: &str, link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        return link.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), link.trim_start_matches('/'))
}

fn file_name(url: &str) -> Option<&str> {
    url.rsplit('/').next().filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_matching_hrefs() {
        let html = r#"
            <html><body>
            <a href="file_a.grib2.gz">a</a>
            <a href='file_b.grib2.gz'>b</a>
            <a href="readme.html">doc</a>
            </body></html>
        "#;
        let links = extract_links(html, ".gz");
        assert_eq!(links, vec!["file_a.grib2.gz", "file_b.grib2.gz"]);
    }

    #[test]
    fn ignores_pages_without_links() {
        assert!(extract_links("<p>nothing here</p>", ".gz").is_empty());
    }

    #[test]
    fn resolves_relative_links() {
        assert_eq!(
            resolve_url("https://example.com/2D/PrecipRate/", "x.gz"),
            "https://example.com/2D/PrecipRate/x.gz"
        );
        assert_eq!(
            resolve_url("https://example.com/dir", "https://other.com/y.gz"),
            "https://other.com/y.gz"
        );
    }

    #[test]
    fn file_name_from_url() {
        assert_eq!(
            file_name("https://example.com/a/b/file.gz"),
            Some("file.gz")
        );
        assert_eq!(file_name("https://example.com/a/"), None);
    }
}
