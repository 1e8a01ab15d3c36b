#![deny(unsafe_code)]

//! `spark-compare` 提供面向定长序列的字典序比较引擎。
//!
//! # 模块定位（Why）
//! - 框架中的键、向量与临时缓冲经常需要“逐元素比较、首个差异定胜负”的全序判定；
//!   把这一算法族收敛到一处，调用方只需挑选合适的序列形态与元素比较函数。
//! - 浮点元素单独提供容差序（[`TolerantOrd`]），吸收表示误差带来的“1 != 1”问题。
//!
//! # 设计概要（How）
//! - [`array`]、[`slice`]、[`collection`]、[`memory`] 分别覆盖原生数组、借用切片、
//!   通用集合（随机访问或仅迭代）与拥有所有权的缓冲视图；
//! - 四种形态最终都委派给同一个扫描核心：切片直接按下标扫描，集合在入口处一次性归类为
//!   下标访问或迭代访问后推进统一游标；
//! - [`LexicographicComparer`] 把方向（升序/降序）与元素序打包成可复用的比较器。
//!
//! # 契约说明（What）
//! - 所有入口返回 `Result<Ordering, MemoryError>`：长度不一致返回 `LengthMismatch`，
//!   `*_optional*` 入口在单侧缺失时返回 `NullReference`；
//! - 同一对象与自身比较时直接返回 `Equal`，不会调用元素比较函数；
//! - 引擎不分配内存，也不修改输入。
//!
//! ```rust
//! use core::cmp::Ordering;
//!
//! assert_eq!(spark_compare::slice::compare(&[1, 2, 3], &[1, 2, 4]), Ok(Ordering::Less));
//! assert_eq!(
//!     spark_compare::slice::compare_tolerant(&[f64::NAN], &[1.0]),
//!     Ok(Ordering::Less)
//! );
//! ```

pub mod array;
pub mod collection;
mod comparer;
pub mod memory;
mod scan;
pub mod slice;
mod tolerance;

pub use comparer::{Direction, LexicographicComparer};
pub use spark_memory_core::{MemoryError, Result, Sequence};
pub use tolerance::{F32_TOLERANCE, F64_TOLERANCE, TolerantOrd};
