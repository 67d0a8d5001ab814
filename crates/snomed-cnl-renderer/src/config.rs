//! Configuration types for the definition renderer.

use std::collections::HashSet;

use snomed_cnl::SctId;

/// Configuration for the controlled English generator.
///
/// # Example
///
/// ```rust
/// use snomed_cnl_renderer::{NameCacheConfig, RendererConfig};
///
/// let config = RendererConfig::builder()
///     .with_name_cache(NameCacheConfig::default())
///     .with_stop_list([123037004, 91723000])
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct RendererConfig {
    /// Name cache configuration (None = caching disabled).
    pub name_cache: Option<NameCacheConfig>,
    /// Part-of stop-list override (None = ask the store).
    pub stop_list: Option<HashSet<SctId>>,
}

impl RendererConfig {
    /// Creates a new builder for RendererConfig.
    pub fn builder() -> RendererConfigBuilder {
        RendererConfigBuilder::default()
    }
}

/// Builder for RendererConfig.
#[derive(Debug, Clone, Default)]
pub struct RendererConfigBuilder {
    name_cache: Option<NameCacheConfig>,
    stop_list: Option<HashSet<SctId>>,
}

impl RendererConfigBuilder {
    /// Enables name caching with the given configuration.
    pub fn with_name_cache(mut self, name_cache: NameCacheConfig) -> Self {
        self.name_cache = Some(name_cache);
        self
    }

    /// Replaces the store's part-of stop-list.
    pub fn with_stop_list(mut self, stop_list: impl IntoIterator<Item = SctId>) -> Self {
        self.stop_list = Some(stop_list.into_iter().collect());
        self
    }

    /// Builds the RendererConfig.
    pub fn build(self) -> RendererConfig {
        RendererConfig {
            name_cache: self.name_cache,
            stop_list: self.stop_list,
        }
    }
}

/// Configuration for the concept name cache.
#[derive(Debug, Clone)]
pub struct NameCacheConfig {
    /// Maximum number of cached names.
    pub max_entries: usize,
}

impl Default for NameCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 100_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_config_default() {
        let config = RendererConfig::default();
        assert!(config.name_cache.is_none());
        assert!(config.stop_list.is_none());
    }

    #[test]
    fn test_renderer_config_builder() {
        let config = RendererConfig::builder()
            .with_name_cache(NameCacheConfig { max_entries: 500 })
            .with_stop_list([123037004])
            .build();

        assert_eq!(config.name_cache.map(|c| c.max_entries), Some(500));
        assert!(config.stop_list.is_some_and(|s| s.contains(&123037004)));
    }

    #[test]
    fn test_name_cache_config_default() {
        assert_eq!(NameCacheConfig::default().max_entries, 100_000);
    }
}
