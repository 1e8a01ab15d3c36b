#![deny(unsafe_code)]

//! `spark-scratch` 提供从数组池租借、作用域结束时必定归还的定长临时缓冲。
//!
//! # 模块定位（Why）
//! - 热路径上的临时数组适合向共享池租借；但归还动作一旦依赖调用方记忆，
//!   就会出现漏还、重复归还或归还后继续使用的问题。
//! - 本 crate 把归还绑定到句柄生命周期，并在类型层面拒绝释放后的访问。
//!
//! # 设计概要（How）
//! - `temporary_array` 模块实现 [`TemporaryArray`]：逻辑长度固定，视图与下标访问以逻辑长度为界，
//!   `Drop` 时经 [`ArrayPool::reclaim`] 归还存储；
//! - `pool` 模块提供参考实现 [`SlabArrayPool`]，以自由链表复用 2 的幂分桶的数组；
//! - `ext` 模块提供 [`ArrayPoolExt`]，可直接在 `Arc<池>` 上租借；
//! - `config` 模块集中默认值与可从 TOML 加载的 [`ScratchConfig`]。
//!
//! # 命名约定（Consistency）
//! - 池契约与错误类型来自 `spark-memory-core`，此处原样再导出，调用端只需依赖本 crate。

mod config;
mod ext;
mod pool;
mod temporary_array;

pub use config::{
    ConfigError, DEFAULT_MAX_CACHED_ARRAYS, DEFAULT_MAX_POOLED_LENGTH, DEFAULT_MIN_ARRAY_LENGTH,
    ScratchConfig, SlabArrayPoolConfig, TemporaryArrayOptions,
};
pub use ext::ArrayPoolExt;
pub use pool::{SlabArrayPool, SlabArrayPoolBuilder};
pub use spark_memory_core::{ArrayPool, MemoryError, PoolStats, Result};
pub use temporary_array::TemporaryArray;
