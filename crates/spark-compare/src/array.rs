//! 原生定长数组（`[T; N]`）的比较入口。
//!
//! 两侧长度由类型参数 `N`、`M` 各自给出，允许不同；不同时在运行期返回 `LengthMismatch`，
//! 与其它序列形态保持同一契约。

use core::cmp::Ordering;

use spark_memory_core::Result;

use crate::{TolerantOrd, scan};

/// 使用给定的元素比较函数按字典序比较两个数组。
pub fn compare_by<T, F, const N: usize, const M: usize>(
    x: &[T; N],
    y: &[T; M],
    order: F,
) -> Result<Ordering>
where
    F: FnMut(&T, &T) -> Ordering,
{
    scan::slices(x.as_slice(), y.as_slice(), order)
}

/// 按元素的自然全序比较。
pub fn compare<T: Ord, const N: usize, const M: usize>(x: &[T; N], y: &[T; M]) -> Result<Ordering> {
    compare_by(x, y, Ord::cmp)
}

/// 按浮点容差序比较。
pub fn compare_tolerant<T: TolerantOrd, const N: usize, const M: usize>(
    x: &[T; N],
    y: &[T; M],
) -> Result<Ordering> {
    compare_by(x, y, TolerantOrd::tolerant_cmp)
}

/// 可缺失参数版本。
pub fn compare_optional_by<T, F, const N: usize, const M: usize>(
    x: Option<&[T; N]>,
    y: Option<&[T; M]>,
    order: F,
) -> Result<Ordering>
where
    F: FnMut(&T, &T) -> Ordering,
{
    match scan::require_both(x, y)? {
        Some((x, y)) => compare_by(x, y, order),
        None => Ok(Ordering::Equal),
    }
}

/// 可缺失参数、自然全序版本。
pub fn compare_optional<T: Ord, const N: usize, const M: usize>(
    x: Option<&[T; N]>,
    y: Option<&[T; M]>,
) -> Result<Ordering> {
    compare_optional_by(x, y, Ord::cmp)
}
