//! 借用切片（`&[T]`）的比较入口。
//!
//! 临时缓冲的视图（`TemporaryArray::view()`）同样是切片，直接走本模块即可。

use core::cmp::Ordering;

use spark_memory_core::Result;

use crate::{TolerantOrd, scan};

/// 使用给定的元素比较函数按字典序比较两个切片。
///
/// # 契约说明（What）
/// - 长度不同返回 `LengthMismatch`；
/// - `x` 与 `y` 指向同一段内存（地址与长度均相同）时直接返回 `Equal`；
/// - 否则返回第一个非 `Equal` 的元素比较结果，全部相等则为 `Equal`。
pub fn compare_by<T, F>(x: &[T], y: &[T], order: F) -> Result<Ordering>
where
    F: FnMut(&T, &T) -> Ordering,
{
    scan::slices(x, y, order)
}

/// 按元素的自然全序比较。
pub fn compare<T: Ord>(x: &[T], y: &[T]) -> Result<Ordering> {
    scan::slices(x, y, Ord::cmp)
}

/// 按浮点容差序比较。
pub fn compare_tolerant<T: TolerantOrd>(x: &[T], y: &[T]) -> Result<Ordering> {
    scan::slices(x, y, TolerantOrd::tolerant_cmp)
}

/// 可缺失参数版本：两侧都缺失视为相等，仅一侧缺失返回 `NullReference`。
pub fn compare_optional_by<T, F>(x: Option<&[T]>, y: Option<&[T]>, order: F) -> Result<Ordering>
where
    F: FnMut(&T, &T) -> Ordering,
{
    match scan::require_both(x, y)? {
        Some((x, y)) => scan::slices(x, y, order),
        None => Ok(Ordering::Equal),
    }
}

/// 可缺失参数、自然全序版本。
pub fn compare_optional<T: Ord>(x: Option<&[T]>, y: Option<&[T]>) -> Result<Ordering> {
    compare_optional_by(x, y, Ord::cmp)
}
