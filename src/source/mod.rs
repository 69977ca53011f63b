//! Document sources and caching

pub mod cache;
pub mod resolver;

pub use cache::{template_key, CacheManager};
pub use resolver::{
    resolve_base64, resolve_cache, resolve_path, resolve_template, resolve_url, ResolvedDocument,
    TemplateSource,
};
