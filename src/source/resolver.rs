//! Resolution of documents and blank templates to bytes

use crate::error::{Error, Result};
use crate::forms::SchemaTable;
use crate::pdf::check_pdf_header;
use crate::source::cache::{template_key, CacheManager};
use base64::Engine;
use futures_util::StreamExt;
use std::net::IpAddr;
use std::path::Path;

/// Document bytes plus a display name for logs and responses
pub struct ResolvedDocument {
    pub data: Vec<u8>,
    pub source_name: String,
}

/// Read a PDF from disk
pub fn resolve_path<P: AsRef<Path>>(path: P) -> Result<ResolvedDocument> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::PdfNotFound {
            path: path.display().to_string(),
        });
    }

    let data = std::fs::read(path)?;
    check_pdf_header(&data)?;

    Ok(ResolvedDocument {
        data,
        source_name: path.display().to_string(),
    })
}

/// Decode a base64 PDF
pub fn resolve_base64(base64_data: &str) -> Result<ResolvedDocument> {
    let data = base64::engine::general_purpose::STANDARD.decode(base64_data.trim())?;
    check_pdf_header(&data)?;

    Ok(ResolvedDocument {
        data,
        source_name: "<base64>".to_string(),
    })
}

/// Loopback, link-local, private, CGNAT and unspecified addresses
fn is_private_ip(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            v4.is_loopback()
                || v4.is_private()
                || v4.is_link_local()
                || v4.is_broadcast()
                || v4.is_unspecified()
                || v4.octets()[0] == 100 && (v4.octets()[1] & 0xC0) == 64
        }
        IpAddr::V6(v6) => {
            let first = v6.segments()[0];
            v6.is_loopback()
                || v6.is_unspecified()
                || (first & 0xFE00) == 0xFC00
                || (first & 0xFFC0) == 0xFE80
        }
    }
}

/// Resolve the URL's host and refuse it if any address is private
async fn check_ssrf(url_str: &str) -> Result<()> {
    let parsed = url::Url::parse(url_str).map_err(|e| Error::SourceResolution {
        reason: format!("Invalid URL: {}", e),
    })?;

    let host = parsed.host_str().ok_or_else(|| Error::SourceResolution {
        reason: "URL has no host".to_string(),
    })?;
    let port = parsed.port_or_known_default().unwrap_or(443);

    let addrs = tokio::net::lookup_host((host, port))
        .await
        .map_err(|e| Error::SourceResolution {
            reason: format!("DNS resolution failed for {}: {}", host, e),
        })?;

    for addr in addrs {
        if is_private_ip(&addr.ip()) {
            return Err(Error::SsrfBlocked {
                url: url_str.to_string(),
            });
        }
    }

    Ok(())
}

/// Download a PDF with SSRF protection and a size limit
pub async fn resolve_url(
    url: &str,
    allow_private_urls: bool,
    max_download_bytes: u64,
) -> Result<ResolvedDocument> {
    if !allow_private_urls {
        check_ssrf(url).await?;
    }

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::SourceResolution {
            reason: format!("HTTP request failed with status: {}", response.status()),
        });
    }

    if let Some(content_length) = response.content_length() {
        if content_length > max_download_bytes {
            return Err(Error::DownloadTooLarge {
                size: content_length,
                max_size: max_download_bytes,
            });
        }
    }

    // Content-Length can lie; enforce the limit while streaming
    let mut data = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        data.extend_from_slice(&chunk?);
        if data.len() as u64 > max_download_bytes {
            return Err(Error::DownloadTooLarge {
                size: data.len() as u64,
                max_size: max_download_bytes,
            });
        }
    }

    check_pdf_header(&data)?;

    Ok(ResolvedDocument {
        data,
        source_name: url.to_string(),
    })
}

/// Fetch bytes previously stored in the cache
pub fn resolve_cache(cache_key: &str, cache: &CacheManager) -> Result<ResolvedDocument> {
    let data = cache.get(cache_key).ok_or_else(|| Error::CacheKeyNotFound {
        key: cache_key.to_string(),
    })?;

    Ok(ResolvedDocument {
        data,
        source_name: format!("<cache:{}>", cache_key),
    })
}

/// Where blank templates come from
#[derive(Debug, Clone)]
pub struct TemplateSource<'a> {
    /// Directory holding `<name>.pdf` files; replaces the download when set
    pub template_dir: Option<&'a Path>,
    pub allow_private_urls: bool,
    pub max_download_bytes: u64,
}

/// Blank template bytes for `schema`.
///
/// Served from the cache when present. Otherwise read from the template
/// directory, or downloaded from the template's official URL, and cached
/// under `template:<name>`.
pub async fn resolve_template(
    schema: &SchemaTable,
    source: &TemplateSource<'_>,
    cache: &CacheManager,
) -> Result<ResolvedDocument> {
    let key = template_key(schema.name);
    if let Ok(cached) = resolve_cache(&key, cache) {
        tracing::debug!(template = schema.name, "Template served from cache");
        return Ok(cached);
    }

    let resolved = match source.template_dir {
        Some(dir) => resolve_path(dir.join(format!("{}.pdf", schema.name)))?,
        None => {
            tracing::info!(template = schema.name, url = schema.url, "Downloading template");
            resolve_url(
                schema.url,
                source.allow_private_urls,
                source.max_download_bytes,
            )
            .await?
        }
    };

    if !cache.put(key, resolved.data.clone()) {
        tracing::warn!(
            template = schema.name,
            bytes = resolved.data.len(),
            "Template exceeds cache budget; it will be fetched again next time"
        );
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::templates::{disc001, disc002};

    const MINIMAL_PDF: &[u8] = b"%PDF-1.7\n%%EOF\n";

    #[test]
    fn test_resolve_base64_not_pdf() {
        let result = resolve_base64("SGVsbG8gV29ybGQ=");
        assert!(matches!(result, Err(Error::InvalidPdf { .. })));
    }

    #[test]
    fn test_resolve_base64_invalid_base64() {
        let result = resolve_base64("not valid base64!!!");
        assert!(matches!(result, Err(Error::Base64Decode(_))));
    }

    #[test]
    fn test_resolve_path_not_found() {
        let result = resolve_path("/nonexistent/path/disc001.pdf");
        assert!(matches!(result, Err(Error::PdfNotFound { .. })));
    }

    #[test]
    fn test_resolve_cache_missing_key() {
        let cache = CacheManager::new(4, 1024);
        let result = resolve_cache("nope", &cache);
        assert!(matches!(result, Err(Error::CacheKeyNotFound { .. })));
    }

    #[test]
    fn test_is_private_ip() {
        for ip in [
            "127.0.0.1",
            "10.0.0.1",
            "172.16.0.1",
            "192.168.1.1",
            "169.254.169.254",
            "100.64.0.1",
            "0.0.0.0",
            "255.255.255.255",
            "::1",
            "::",
            "fd00::1",
            "fe80::1",
        ] {
            assert!(is_private_ip(&ip.parse().unwrap()), "{ip} should be private");
        }
        for ip in ["8.8.8.8", "203.0.113.1", "2001:db8::1"] {
            assert!(!is_private_ip(&ip.parse().unwrap()), "{ip} should be public");
        }
    }

    #[tokio::test]
    async fn test_resolve_template_from_dir_then_cache() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("disc002.pdf"), MINIMAL_PDF).unwrap();
        let cache = CacheManager::new(4, 1024 * 1024);
        let source = TemplateSource {
            template_dir: Some(dir.path()),
            allow_private_urls: false,
            max_download_bytes: 1024,
        };

        let first = resolve_template(&disc002::SCHEMA, &source, &cache)
            .await
            .unwrap();
        assert_eq!(first.data, MINIMAL_PDF);
        assert!(cache.contains("template:disc002"));

        std::fs::remove_file(dir.path().join("disc002.pdf")).unwrap();
        let second = resolve_template(&disc002::SCHEMA, &source, &cache)
            .await
            .unwrap();
        assert_eq!(second.source_name, "<cache:template:disc002>");
    }

    #[tokio::test]
    async fn test_resolve_template_missing_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CacheManager::new(4, 1024);
        let source = TemplateSource {
            template_dir: Some(dir.path()),
            allow_private_urls: false,
            max_download_bytes: 1024,
        };

        let result = resolve_template(&disc001::SCHEMA, &source, &cache).await;
        assert!(matches!(result, Err(Error::PdfNotFound { .. })));
        assert!(cache.is_empty());
    }
}
