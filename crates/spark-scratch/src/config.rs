//! 临时缓冲与参考数组池的配置。
//!
//! # 设计概要（How）
//! - [`TemporaryArrayOptions`] 控制单次租借：是否在归还前清理、多大的请求绕过池；
//! - [`SlabArrayPoolConfig`] 控制参考池的分桶下限与缓存上限；
//! - [`ScratchConfig`] 把两者组合为一个可从 TOML 加载的整体，所有字段都有默认值，
//!   配置文件只需写出需要覆盖的键。
//!
//! ```rust
//! use spark_scratch::ScratchConfig;
//!
//! let config = ScratchConfig::from_toml_str(
//!     r#"
//!     [temporary_array]
//!     max_pooled_length = 4096
//!
//!     [pool]
//!     max_cached_arrays = 8
//!     "#,
//! )
//! .expect("配置应可解析");
//! assert_eq!(config.temporary_array.max_pooled_length, 4096);
//! assert!(!config.temporary_array.clear_on_return);
//! assert_eq!(config.pool.min_array_length, 16);
//! ```

use serde::Deserialize;
use thiserror::Error;

/// 超过该长度的请求直接分配，不经过池。
pub const DEFAULT_MAX_POOLED_LENGTH: usize = 1024 * 1024;

/// 参考池的最小分桶长度。
pub const DEFAULT_MIN_ARRAY_LENGTH: usize = 16;

/// 参考池自由链表的默认缓存上限。
pub const DEFAULT_MAX_CACHED_ARRAYS: usize = 64;

/// 单次租借的选项。
///
/// - `clear_on_return`：调用方请求的清理标志；对持有所有权的元素类型（`needs_drop`）无论如何都会清理；
/// - `max_pooled_length`：超过该长度时直接分配，避免超大数组长期滞留在池中。
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TemporaryArrayOptions {
    pub clear_on_return: bool,
    pub max_pooled_length: usize,
}

impl Default for TemporaryArrayOptions {
    fn default() -> Self {
        Self {
            clear_on_return: false,
            max_pooled_length: DEFAULT_MAX_POOLED_LENGTH,
        }
    }
}

impl TemporaryArrayOptions {
    /// 设置清理标志。
    pub fn with_clear_on_return(mut self, clear_on_return: bool) -> Self {
        self.clear_on_return = clear_on_return;
        self
    }

    /// 设置绕过池的长度阈值。
    pub fn with_max_pooled_length(mut self, max_pooled_length: usize) -> Self {
        self.max_pooled_length = max_pooled_length;
        self
    }
}

/// [`SlabArrayPool`](crate::SlabArrayPool) 的配置。
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SlabArrayPoolConfig {
    /// 分桶下限：请求长度向上取整到不小于该值的 2 的幂。
    pub min_array_length: usize,
    /// 自由链表最多缓存的数组数量，超出后归还的数组直接释放。
    pub max_cached_arrays: usize,
}

impl Default for SlabArrayPoolConfig {
    fn default() -> Self {
        Self {
            min_array_length: DEFAULT_MIN_ARRAY_LENGTH,
            max_cached_arrays: DEFAULT_MAX_CACHED_ARRAYS,
        }
    }
}

/// 组合配置，对应配置文件中的 `[temporary_array]` 与 `[pool]` 两节。
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ScratchConfig {
    pub temporary_array: TemporaryArrayOptions,
    pub pool: SlabArrayPoolConfig,
}

impl ScratchConfig {
    /// 从 TOML 文本解析配置。
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(ConfigError::Parse)
    }
}

/// 配置解析失败。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse scratch configuration: {0}")]
    Parse(#[source] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ScratchConfig::from_toml_str("").expect("空配置应回退到默认值");
        assert_eq!(config, ScratchConfig::default());
        assert_eq!(
            config.temporary_array.max_pooled_length,
            DEFAULT_MAX_POOLED_LENGTH
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ScratchConfig::from_toml_str("[pool]\nbucket_count = 3\n")
            .expect_err("未知键应报错");
        assert!(err.to_string().contains("scratch configuration"));
    }

    #[test]
    fn builder_overrides_fields() {
        let options = TemporaryArrayOptions::default()
            .with_clear_on_return(true)
            .with_max_pooled_length(32);
        assert!(options.clear_on_return);
        assert_eq!(options.max_pooled_length, 32);
    }
}
