//! MCP Server implementation using rmcp

use crate::error::Error;
use crate::forms::{
    matcher::match_candidate, templates, ExtractionResult, FillReport, FormEngine, FormEvent,
    IntakeData, OrderingRule, RecordingSink, TracingSink,
};
use crate::pdf::{inspect_widgets, FormDocument, PdfiumForm, Rect, WidgetKind};
use crate::source::{
    resolve_base64, resolve_cache, resolve_path, resolve_template, resolve_url, template_key,
    CacheManager, ResolvedDocument, TemplateSource,
};
use anyhow::Result;
use base64::Engine;
use rmcp::{
    handler::server::tool::ToolRouter, handler::server::wrapper::Parameters, model::*,
    schemars::JsonSchema, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where a document comes from
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum DocumentSource {
    /// File path (absolute or relative)
    Path {
        /// Path to the PDF file
        path: String,
    },
    /// Base64 encoded PDF data
    Base64 {
        /// Base64 encoded PDF content
        base64: String,
    },
    /// URL to download PDF from
    Url {
        /// URL of the PDF file
        url: String,
    },
    /// Reference to a cached PDF (filled output or downloaded template)
    CacheRef {
        /// Cache key from a previous operation
        cache_key: String,
    },
}

const SOURCE_KEYS: [&str; 4] = ["path", "base64", "url", "cache_key"];

impl<'de> serde::Deserialize<'de> for DocumentSource {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;

        let Some(obj) = value.as_object() else {
            let kind = match &value {
                serde_json::Value::Array(_) => "an array",
                serde_json::Value::String(_) => "a string",
                serde_json::Value::Number(_) => "a number",
                serde_json::Value::Bool(_) => "a boolean",
                serde_json::Value::Null => "null",
                serde_json::Value::Object(_) => "an object",
            };
            return Err(serde::de::Error::custom(format!(
                "Invalid source: expected an object with one of \"path\", \"base64\", \"url\", or \"cache_key\", but got {}",
                kind
            )));
        };

        for key in SOURCE_KEYS {
            let Some(v) = obj.get(key) else {
                continue;
            };
            let s = v.as_str().ok_or_else(|| {
                serde::de::Error::custom(format!("\"{}\" must be a string", key))
            })?;
            let s = s.to_string();
            return Ok(match key {
                "path" => DocumentSource::Path { path: s },
                "base64" => DocumentSource::Base64 { base64: s },
                "url" => DocumentSource::Url { url: s },
                _ => DocumentSource::CacheRef { cache_key: s },
            });
        }

        let keys: Vec<&String> = obj.keys().collect();
        Err(serde::de::Error::custom(format!(
            "Invalid source: expected an object with one of \"path\", \"base64\", \"url\", or \"cache_key\", but got keys: {:?}",
            keys
        )))
    }
}

/// Security and resource configuration for the server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directories that path sources and output paths must stay within.
    /// Empty means unrestricted.
    pub resource_dirs: Vec<String>,
    /// Allow URLs that resolve to private/reserved IPs (default: false)
    pub allow_private_urls: bool,
    /// Maximum download size in bytes for URL sources and templates (default: 50MB)
    pub max_download_bytes: u64,
    /// Maximum total bytes in cache (default: 256MB)
    pub cache_max_bytes: usize,
    /// Maximum number of cache entries (default: 100)
    pub cache_max_entries: usize,
    /// Directory with `disc001.pdf` / `disc002.pdf`; when set, templates are
    /// never downloaded
    pub template_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            resource_dirs: Vec::new(),
            allow_private_urls: false,
            max_download_bytes: 50 * 1024 * 1024, // 50MB
            cache_max_bytes: 256 * 1024 * 1024,   // 256MB
            cache_max_entries: 100,
            template_dir: None,
        }
    }
}

/// Form interrogatories MCP server
#[derive(Clone)]
pub struct FormServer {
    cache: Arc<CacheManager>,
    tool_router: ToolRouter<Self>,
    config: Arc<ServerConfig>,
}

// ============================================================================
// Request/Response types for fill_interrogatories
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FillInterrogatoriesParams {
    /// Template name: "disc001" (General) or "disc002" (Employment Law)
    pub template: String,
    /// Case details and the interrogatories to select
    #[serde(default)]
    pub data: IntakeData,
    /// Blank form to fill instead of the official template
    #[serde(default)]
    pub template_source: Option<DocumentSource>,
    /// Output file path (optional). If provided, saves the filled PDF to this path.
    #[serde(default)]
    pub output_path: Option<String>,
    /// Include the filled PDF as base64 in the response
    #[serde(default)]
    pub include_base64: bool,
}

#[derive(Debug, Serialize)]
pub struct FillInterrogatoriesResult {
    /// Source identifier of the blank form
    pub source: String,
    /// Cache key for the output PDF (usable as a source in other tools)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_cache_key: Option<String>,
    /// Number of pages in the output PDF
    pub output_page_count: usize,
    #[serde(flatten)]
    pub report: Option<FillReport>,
    /// Diagnostics in the order they happened
    pub events: Vec<FormEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================================
// Request types for read_interrogatories
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReadInterrogatoriesParams {
    /// Template name: "disc001" or "disc002"
    pub template: String,
    /// Filled form to read
    pub source: DocumentSource,
    /// Log every widget at debug level
    #[serde(default)]
    pub debug: bool,
}

// ============================================================================
// Request/Response types for inspect_form_fields
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct InspectFormFieldsParams {
    /// PDF to inspect
    pub source: DocumentSource,
    /// Template whose read table should annotate each checkbox (optional)
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FieldInfo {
    /// Page number (1-indexed)
    pub page: usize,
    pub name: String,
    pub kind: WidgetKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rect: Option<Rect>,
    /// Identifier the template's read table maps this checkbox to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InspectFormFieldsResult {
    pub source: String,
    pub fields: Vec<FieldInfo>,
    pub total_fields: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================================
// Response types for list_templates
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub url: &'static str,
    pub fill_entries: usize,
    pub read_entries: usize,
    /// "widgets" or "anchors"
    pub text_strategy: &'static str,
    pub text_entries: usize,
    /// "decimal" or "section_pair"
    pub ordering: &'static str,
    /// Whether unmapped checked boxes are read by their section number
    pub section_fallback: bool,
    /// Whether the blank template is already in the cache
    pub cached: bool,
}

// ============================================================================
// Tool implementations
// ============================================================================

#[tool_router]
impl FormServer {
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a server restricted to the given resource directories
    pub fn with_resource_dirs(dirs: Vec<String>) -> Self {
        Self::with_config(ServerConfig {
            resource_dirs: dirs,
            ..ServerConfig::default()
        })
    }

    pub fn with_config(config: ServerConfig) -> Self {
        let cache = CacheManager::new(config.cache_max_entries, config.cache_max_bytes);
        Self {
            cache: Arc::new(cache),
            tool_router: Self::tool_router(),
            config: Arc::new(config),
        }
    }

    /// Fill a California form interrogatories template
    #[tool(
        description = "Fill a California Judicial Council form interrogatories PDF (DISC-001 General or DISC-002 Employment Law).

Checks the boxes for data.selected_sections (e.g. [\"1\", \"6.3\"] for disc001, [\"200.1\", \"201.1\"] for disc002) and writes attorney and case details. Unknown section numbers are reported in `unmapped`; sections whose checkbox was not found are reported in `unresolved`.

The blank template is downloaded from courts.ca.gov once and cached, unless template_source is given.
The output is always cached (output_cache_key) for chaining with read_interrogatories.

Source format for template_source: one of {\"path\": \"/absolute/path.pdf\"}, {\"url\": \"https://...\"}, {\"base64\": \"...\"}, or {\"cache_key\": \"...\"}"
    )]
    async fn fill_interrogatories(
        &self,
        Parameters(params): Parameters<FillInterrogatoriesParams>,
    ) -> String {
        let result = self
            .process_fill_interrogatories(&params)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, template = %params.template, "fill_interrogatories failed");
                FillInterrogatoriesResult {
                    source: params
                        .template_source
                        .as_ref()
                        .map(Self::source_name)
                        .unwrap_or_else(|| template_key(&params.template)),
                    output_cache_key: None,
                    output_page_count: 0,
                    report: None,
                    events: vec![],
                    output_path: None,
                    output_base64: None,
                    error: Some(e.client_message()),
                }
            });

        serde_json::to_string_pretty(&result).unwrap_or_default()
    }

    /// Read which interrogatories are selected in a filled form
    #[tool(
        description = "Read a filled DISC-001 or DISC-002 PDF and report which interrogatories are checked.

Returns {\"success\", \"selected_interrogatories\", \"form_data\", \"all_checkboxes\", \"error\"}. Checked boxes that are not in the template's table but carry a section number like 213.1 in their field name are reported by that number.

Source format: one of {\"path\": \"/absolute/path.pdf\"}, {\"url\": \"https://...\"}, {\"base64\": \"...\"}, or {\"cache_key\": \"...\"}"
    )]
    async fn read_interrogatories(
        &self,
        Parameters(params): Parameters<ReadInterrogatoriesParams>,
    ) -> String {
        let result = self.process_read_interrogatories(&params).await;
        result.to_json().unwrap_or_default()
    }

    /// List every form field in a PDF
    #[tool(
        description = "List every form widget in a PDF with page, name, kind (checkbox/text/other), value, checked state and rectangle.

Useful when a new template revision changes field names. With `template` set, each checkbox also shows the interrogatory its name maps to.

Source format: one of {\"path\": \"/absolute/path.pdf\"}, {\"url\": \"https://...\"}, {\"base64\": \"...\"}, or {\"cache_key\": \"...\"}"
    )]
    async fn inspect_form_fields(
        &self,
        Parameters(params): Parameters<InspectFormFieldsParams>,
    ) -> String {
        let result = self
            .process_inspect_form_fields(&params)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "inspect_form_fields failed");
                InspectFormFieldsResult {
                    source: Self::source_name(&params.source),
                    fields: vec![],
                    total_fields: 0,
                    error: Some(e.client_message()),
                }
            });

        serde_json::to_string_pretty(&result).unwrap_or_default()
    }

    /// List the supported templates
    #[tool(description = "List the supported form templates with their official download URLs and mapping table sizes.")]
    async fn list_templates(&self) -> String {
        let response = serde_json::json!({ "templates": self.template_infos() });
        serde_json::to_string_pretty(&response).unwrap_or_default()
    }
}

impl FormServer {
    fn source_name(source: &DocumentSource) -> String {
        match source {
            DocumentSource::Path { path } => path.clone(),
            DocumentSource::Base64 { .. } => "<base64>".to_string(),
            DocumentSource::Url { url } => url.clone(),
            DocumentSource::CacheRef { cache_key } => format!("<cache:{}>", cache_key),
        }
    }

    async fn resolve_source(&self, source: &DocumentSource) -> crate::error::Result<ResolvedDocument> {
        match source {
            DocumentSource::Path { path } => {
                let path = self.validate_path_access(path)?;
                resolve_path(path)
            }
            DocumentSource::Base64 { base64 } => resolve_base64(base64),
            DocumentSource::Url { url } => {
                resolve_url(
                    url,
                    self.config.allow_private_urls,
                    self.config.max_download_bytes,
                )
                .await
            }
            DocumentSource::CacheRef { cache_key } => resolve_cache(cache_key, &self.cache),
        }
    }

    fn template_source(&self) -> TemplateSource<'_> {
        TemplateSource {
            template_dir: self.config.template_dir.as_deref().map(Path::new),
            allow_private_urls: self.config.allow_private_urls,
            max_download_bytes: self.config.max_download_bytes,
        }
    }

    /// Canonical path inside a resource directory.
    /// If no resource_dirs are configured, all paths are allowed.
    fn validate_path_access(&self, path: &str) -> crate::error::Result<PathBuf> {
        if self.config.resource_dirs.is_empty() {
            return Ok(PathBuf::from(path));
        }

        let canonical = std::fs::canonicalize(path).map_err(|_| Error::PathAccessDenied {
            path: path.to_string(),
        })?;
        self.ensure_in_resource_dirs(canonical, path)
    }

    /// Like [`Self::validate_path_access`], but for a file that may not exist yet
    fn validate_output_path_access(&self, path: &str) -> crate::error::Result<PathBuf> {
        if self.config.resource_dirs.is_empty() {
            return Ok(PathBuf::from(path));
        }

        let path_obj = Path::new(path);
        let file_name = path_obj.file_name().ok_or_else(|| Error::PathAccessDenied {
            path: path.to_string(),
        })?;
        let parent = match path_obj.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let canonical_parent =
            std::fs::canonicalize(parent).map_err(|_| Error::PathAccessDenied {
                path: path.to_string(),
            })?;
        self.ensure_in_resource_dirs(canonical_parent.join(file_name), path)
    }

    fn ensure_in_resource_dirs(
        &self,
        canonical: PathBuf,
        requested: &str,
    ) -> crate::error::Result<PathBuf> {
        let allowed = self.config.resource_dirs.iter().any(|dir| {
            std::fs::canonicalize(dir)
                .map(|d| canonical.starts_with(d))
                .unwrap_or(false)
        });

        if allowed {
            Ok(canonical)
        } else {
            Err(Error::PathAccessDenied {
                path: requested.to_string(),
            })
        }
    }

    /// Write output data to a file path, with sandbox validation
    fn write_output(
        &self,
        output_path: &Option<String>,
        data: &[u8],
    ) -> crate::error::Result<Option<String>> {
        let Some(path_str) = output_path else {
            return Ok(None);
        };
        let path = self.validate_output_path_access(path_str)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(&path, data)?;
        tracing::info!(path = %path.display(), bytes = data.len(), "Wrote filled form");
        Ok(Some(path_str.clone()))
    }

    pub async fn process_fill_interrogatories(
        &self,
        params: &FillInterrogatoriesParams,
    ) -> crate::error::Result<FillInterrogatoriesResult> {
        let engine = FormEngine::for_template(&params.template)?;

        let resolved = match &params.template_source {
            Some(source) => self.resolve_source(source).await?,
            None => resolve_template(engine.schema(), &self.template_source(), &self.cache).await?,
        };
        let source_name = resolved.source_name;
        let data = resolved.data;
        let intake = params.data.clone();

        // CPU-bound PDFium work
        let (output_data, report, events, output_page_count) =
            tokio::task::spawn_blocking(move || {
                PdfiumForm::with_bytes(&data, |form| {
                    let mut sink = RecordingSink::default();
                    let report = engine.fill(form, &intake, &mut sink)?;
                    let output = form.save_to_bytes()?;
                    Ok((output, report, sink.into_events(), form.page_count()))
                })
            })
            .await
            .map_err(|e| Error::Pdfium {
                reason: format!("Task join error: {}", e),
            })??;

        // Always cache the output for chaining operations
        let output_cache_key = self.cache.put_new(output_data.clone());
        if output_cache_key.is_none() {
            tracing::warn!(bytes = output_data.len(), "Filled form exceeds cache budget");
        }

        let output_path = self.write_output(&params.output_path, &output_data)?;
        let output_base64 = params
            .include_base64
            .then(|| base64::engine::general_purpose::STANDARD.encode(&output_data));

        Ok(FillInterrogatoriesResult {
            source: source_name,
            output_cache_key,
            output_page_count,
            report: Some(report),
            events,
            output_path,
            output_base64,
            error: None,
        })
    }

    /// Never fails; every error becomes `success: false`
    pub async fn process_read_interrogatories(
        &self,
        params: &ReadInterrogatoriesParams,
    ) -> ExtractionResult {
        let engine = match FormEngine::for_template(&params.template) {
            Ok(engine) => engine,
            Err(e) => return ExtractionResult::failure(e.client_message()),
        };

        let resolved = match self.resolve_source(&params.source).await {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!(error = %e, "read_interrogatories: source resolution failed");
                return ExtractionResult::failure(e.client_message());
            }
        };

        let debug = params.debug;
        let data = resolved.data;
        let joined = tokio::task::spawn_blocking(move || {
            PdfiumForm::with_bytes(&data, |form| Ok(engine.read(&*form, &mut TracingSink, debug)))
        })
        .await;

        match joined {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, source = %resolved.source_name, "read_interrogatories failed");
                ExtractionResult::failure(e.client_message())
            }
            Err(e) => ExtractionResult::failure(format!("Task join error: {}", e)),
        }
    }

    pub async fn process_inspect_form_fields(
        &self,
        params: &InspectFormFieldsParams,
    ) -> crate::error::Result<InspectFormFieldsResult> {
        let schema = params
            .template
            .as_deref()
            .map(templates::lookup)
            .transpose()?;

        let resolved = self.resolve_source(&params.source).await?;
        let data = resolved.data;

        let widgets = tokio::task::spawn_blocking(move || inspect_widgets(&data))
            .await
            .map_err(|e| Error::Pdfium {
                reason: format!("Task join error: {}", e),
            })??;

        let fields: Vec<FieldInfo> = widgets
            .into_iter()
            .map(|w| {
                let identifier = match (schema, w.kind) {
                    (Some(schema), WidgetKind::Checkbox) => {
                        match_candidate(&w.name, schema.read).map(|(_, e)| e.id.to_string())
                    }
                    _ => None,
                };
                FieldInfo {
                    page: w.page + 1,
                    checked: (w.kind == WidgetKind::Checkbox).then_some(w.checked),
                    name: w.name,
                    kind: w.kind,
                    value: w.value,
                    rect: w.rect,
                    identifier,
                }
            })
            .collect();

        Ok(InspectFormFieldsResult {
            source: resolved.source_name,
            total_fields: fields.len(),
            fields,
            error: None,
        })
    }

    pub fn template_infos(&self) -> Vec<TemplateInfo> {
        templates::TEMPLATES
            .iter()
            .map(|t| TemplateInfo {
                name: t.name,
                title: t.title,
                url: t.url,
                fill_entries: t.fill.len(),
                read_entries: t.read.len(),
                text_strategy: t.text.name(),
                text_entries: t.text.len(),
                ordering: match t.ordering {
                    OrderingRule::Decimal => "decimal",
                    OrderingRule::SectionPair => "section_pair",
                },
                section_fallback: t.section_fallback,
                cached: self.cache.contains(&template_key(t.name)),
            })
            .collect()
    }
}

impl Default for FormServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for FormServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Form Interrogatories MCP Server fills and reads California Judicial Council \
                 form interrogatories (DISC-001 General, DISC-002 Employment Law). \
                 Use list_templates to see supported forms."
                    .into(),
            ),
        }
    }
}

/// Run the MCP server with default configuration
pub async fn run_server() -> Result<()> {
    run_server_with_config(ServerConfig::default()).await
}

/// Run the MCP server with full configuration
pub async fn run_server_with_config(config: ServerConfig) -> Result<()> {
    let server = FormServer::with_config(config);

    tracing::info!("Form Interrogatories MCP Server ready, waiting for connections...");

    let service = server.serve(rmcp::transport::io::stdio()).await?;
    service.waiting().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_source_name() {
        assert_eq!(
            FormServer::source_name(&DocumentSource::Path {
                path: "/forms/disc001.pdf".to_string()
            }),
            "/forms/disc001.pdf"
        );
        assert_eq!(
            FormServer::source_name(&DocumentSource::Base64 {
                base64: "...".to_string()
            }),
            "<base64>"
        );
        assert_eq!(
            FormServer::source_name(&DocumentSource::CacheRef {
                cache_key: "abc123".to_string()
            }),
            "<cache:abc123>"
        );
    }

    #[test]
    fn test_document_source_deserialization() {
        let source: DocumentSource = serde_json::from_str(r#"{"path": "/a.pdf"}"#).unwrap();
        assert!(matches!(source, DocumentSource::Path { .. }));

        let source: DocumentSource = serde_json::from_str(r#"{"cache_key": "k"}"#).unwrap();
        assert!(matches!(source, DocumentSource::CacheRef { .. }));

        let err = serde_json::from_str::<DocumentSource>(r#"{"path": 3}"#).unwrap_err();
        assert!(err.to_string().contains("\"path\" must be a string"));

        let err = serde_json::from_str::<DocumentSource>(r#""a.pdf""#).unwrap_err();
        assert!(err.to_string().contains("but got a string"));
    }

    #[test]
    fn test_fill_params_deserialization() {
        let json = r#"{
            "template": "disc001",
            "data": {
                "attorney_name": "John Smith",
                "set_number": 1,
                "selected_sections": ["1", 17, "6.3"]
            }
        }"#;
        let params: FillInterrogatoriesParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.template, "disc001");
        assert_eq!(params.data.selected_ids(), vec!["1", "17", "6.3"]);
        assert!(params.template_source.is_none());
        assert!(!params.include_base64);
    }

    #[test]
    fn test_template_infos() {
        let server = FormServer::new();
        let infos = server.template_infos();

        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].name, "disc001");
        assert_eq!(infos[0].text_strategy, "anchors");
        assert_eq!(infos[0].ordering, "decimal");
        assert!(!infos[0].section_fallback);
        assert_eq!(infos[1].name, "disc002");
        assert_eq!(infos[1].text_strategy, "widgets");
        assert_eq!(infos[1].ordering, "section_pair");
        assert!(infos[1].section_fallback);
        assert!(!infos[1].cached);
    }

    #[tokio::test]
    async fn test_fill_unknown_template() {
        let server = FormServer::new();
        let params: FillInterrogatoriesParams =
            serde_json::from_str(r#"{"template": "disc009"}"#).unwrap();

        let err = server.process_fill_interrogatories(&params).await.unwrap_err();
        assert!(matches!(err, Error::UnknownTemplate { .. }));
    }

    #[tokio::test]
    async fn test_fill_rejects_non_pdf_template_source() {
        let server = FormServer::new();
        let params: FillInterrogatoriesParams = serde_json::from_str(
            r#"{"template": "disc002", "template_source": {"base64": "SGVsbG8gV29ybGQ="}}"#,
        )
        .unwrap();

        let err = server.process_fill_interrogatories(&params).await.unwrap_err();
        assert!(matches!(err, Error::InvalidPdf { .. }));
    }

    #[test]
    fn test_read_failure_is_structured() {
        let server = FormServer::new();
        let params: ReadInterrogatoriesParams = serde_json::from_str(
            r#"{"template": "disc002", "source": {"cache_key": "missing"}}"#,
        )
        .unwrap();

        let result = tokio_test::block_on(server.process_read_interrogatories(&params));
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Cache key not found"));
        assert!(result.selected_interrogatories.is_empty());
    }

    #[test]
    fn test_path_access_outside_resource_dirs() {
        let allowed = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();
        let outside = other.path().join("form.pdf");
        std::fs::write(&outside, b"%PDF-1.7").unwrap();

        let server = FormServer::with_resource_dirs(vec![allowed.path().display().to_string()]);
        let result = server.validate_path_access(&outside.display().to_string());
        assert!(matches!(result, Err(Error::PathAccessDenied { .. })));
    }

    #[test]
    fn test_write_output_inside_resource_dir() {
        let dir = tempfile::tempdir().unwrap();
        let server = FormServer::with_resource_dirs(vec![dir.path().display().to_string()]);
        let target = dir.path().join("filled.pdf").display().to_string();

        let written = server
            .write_output(&Some(target.clone()), b"%PDF-1.7 filled")
            .unwrap();

        assert_eq!(written, Some(target.clone()));
        assert_eq!(std::fs::read(&target).unwrap(), b"%PDF-1.7 filled");
        assert_eq!(server.write_output(&None, b"x").unwrap(), None);
    }
}
