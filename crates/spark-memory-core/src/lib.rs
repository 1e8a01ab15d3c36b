#![deny(unsafe_code)]
#![doc = "spark-memory-core: 序列比较引擎与池化临时缓冲共享的基础契约。"]
#![doc = ""]
#![doc = "本 crate 只定义契约，不落地实现：比较算法位于 `spark-compare`，临时缓冲位于 `spark-scratch`。"]

//! # 模块定位（Why）
//! - `spark-compare` 与 `spark-scratch` 互不依赖，但共享同一套错误分类、池契约与序列访问抽象；
//!   将其下沉到独立 crate，避免两侧各自定义一份相近的类型。
//!
//! # 模块划分（How）
//! - [`error`]：`MemoryError` 错误分类与稳定错误码；
//! - [`pool`]：外部分配池契约 [`ArrayPool`] 及其统计快照 [`PoolStats`]；
//! - [`sequence`]：比较引擎所需的序列访问契约 [`Sequence`]，在入口处一次性判定随机访问或迭代访问。

pub mod error;
pub mod pool;
pub mod sequence;

pub use error::{LengthCheck, MemoryError, Result, codes};
pub use pool::{ArrayPool, PoolStats};
pub use sequence::{Access, Cursor, Sequence};
