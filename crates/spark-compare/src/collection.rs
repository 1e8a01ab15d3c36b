//! 通用只读集合的比较入口。
//!
//! # 设计背景（Why）
//! - 集合可能支持随机访问（`Vec`、`VecDeque`），也可能只能前向迭代（`LinkedList`、`BTreeSet`）；
//!   两侧可以是不同的集合类型，只要元素类型一致。
//!
//! # 执行逻辑（How）
//! 1. 同一对象直接返回 `Equal`；
//! 2. 比较声明长度，不同则返回 `LengthMismatch`（`Declared` 阶段）；
//! 3. 两侧各自通过 [`Sequence::access`](spark_memory_core::Sequence::access) 归类一次，配对推进游标；
//!    任一侧提前耗尽返回 `LengthMismatch`（`Enumeration` 阶段）。

use core::cmp::Ordering;

use spark_memory_core::{Result, Sequence};

use crate::{TolerantOrd, scan};

/// 使用给定的元素比较函数按字典序比较两个集合。
pub fn compare_by<T, X, Y, F>(x: &X, y: &Y, order: F) -> Result<Ordering>
where
    X: Sequence<Item = T> + ?Sized,
    Y: Sequence<Item = T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    scan::sequences(x, y, order)
}

/// 按元素的自然全序比较。
pub fn compare<T, X, Y>(x: &X, y: &Y) -> Result<Ordering>
where
    T: Ord,
    X: Sequence<Item = T> + ?Sized,
    Y: Sequence<Item = T> + ?Sized,
{
    scan::sequences(x, y, Ord::cmp)
}

/// 按浮点容差序比较。
pub fn compare_tolerant<T, X, Y>(x: &X, y: &Y) -> Result<Ordering>
where
    T: TolerantOrd,
    X: Sequence<Item = T> + ?Sized,
    Y: Sequence<Item = T> + ?Sized,
{
    scan::sequences(x, y, TolerantOrd::tolerant_cmp)
}

/// 可缺失参数版本：两侧都缺失视为相等，仅一侧缺失返回 `NullReference`。
pub fn compare_optional_by<T, X, Y, F>(x: Option<&X>, y: Option<&Y>, order: F) -> Result<Ordering>
where
    X: Sequence<Item = T> + ?Sized,
    Y: Sequence<Item = T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    match scan::require_both(x, y)? {
        Some((x, y)) => scan::sequences(x, y, order),
        None => Ok(Ordering::Equal),
    }
}

/// 可缺失参数、自然全序版本。
pub fn compare_optional<T, X, Y>(x: Option<&X>, y: Option<&Y>) -> Result<Ordering>
where
    T: Ord,
    X: Sequence<Item = T> + ?Sized,
    Y: Sequence<Item = T> + ?Sized,
{
    compare_optional_by(x, y, Ord::cmp)
}
