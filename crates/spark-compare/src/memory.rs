//! 拥有所有权的缓冲视图比较入口（`Vec<T>`、`Box<[T]>`、`Arc<[T]>`、`bytes::Bytes` 等）。
//!
//! 所有实现 `AsRef<[T]>` 的缓冲都先取出切片视图，再交给切片扫描核心；
//! 因此共享同一底层分配的两个句柄（例如克隆出的 `Arc<[T]>`）会命中同一性短路。

use core::cmp::Ordering;

use spark_memory_core::Result;

use crate::{TolerantOrd, scan};

/// 使用给定的元素比较函数按字典序比较两个缓冲视图。
pub fn compare_by<T, X, Y, F>(x: &X, y: &Y, order: F) -> Result<Ordering>
where
    X: AsRef<[T]> + ?Sized,
    Y: AsRef<[T]> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    scan::slices(x.as_ref(), y.as_ref(), order)
}

/// 按元素的自然全序比较。
pub fn compare<T, X, Y>(x: &X, y: &Y) -> Result<Ordering>
where
    T: Ord,
    X: AsRef<[T]> + ?Sized,
    Y: AsRef<[T]> + ?Sized,
{
    compare_by(x, y, Ord::cmp)
}

/// 按浮点容差序比较。
pub fn compare_tolerant<T, X, Y>(x: &X, y: &Y) -> Result<Ordering>
where
    T: TolerantOrd,
    X: AsRef<[T]> + ?Sized,
    Y: AsRef<[T]> + ?Sized,
{
    compare_by(x, y, TolerantOrd::tolerant_cmp)
}
