use core::{cmp::Ordering, ptr};

use spark_memory_core::{MemoryError, Result, Sequence};

/// 切片形态的扫描核心：数组、切片与内存视图均归结到这里。
pub(crate) fn slices<T, F>(x: &[T], y: &[T], mut order: F) -> Result<Ordering>
where
    F: FnMut(&T, &T) -> Ordering,
{
    // 胖指针比较同时覆盖地址与长度。
    if ptr::eq(x, y) {
        return Ok(Ordering::Equal);
    }
    if x.len() != y.len() {
        return Err(MemoryError::declared_mismatch(x.len(), y.len()));
    }
    for (a, b) in x.iter().zip(y) {
        match order(a, b) {
            Ordering::Equal => {}
            decided => return Ok(decided),
        }
    }
    Ok(Ordering::Equal)
}

/// 通用集合形态的扫描核心。
///
/// 两侧在入口处各自归类一次，随后只推进游标；任一侧先于另一侧耗尽时报告枚举阶段的长度不一致。
pub(crate) fn sequences<T, X, Y, F>(x: &X, y: &Y, mut order: F) -> Result<Ordering>
where
    X: Sequence<Item = T> + ?Sized,
    Y: Sequence<Item = T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    let (left_len, right_len) = (x.len(), y.len());
    // 经 `identity` 穿透引用转发；零尺寸类型可能共享地址，因此同时要求长度一致。
    if ptr::eq(x.identity(), y.identity()) && left_len == right_len {
        return Ok(Ordering::Equal);
    }
    if left_len != right_len {
        return Err(MemoryError::declared_mismatch(left_len, right_len));
    }

    let mut left = x.access().into_cursor();
    let mut right = y.access().into_cursor();
    let mut position = 0usize;
    loop {
        match (left.next(), right.next()) {
            (Some(a), Some(b)) => {
                position += 1;
                match order(a, b) {
                    Ordering::Equal => {}
                    decided => return Ok(decided),
                }
            }
            (None, None) => return Ok(Ordering::Equal),
            (Some(_), None) => {
                return Err(MemoryError::enumeration_mismatch(position + 1, position));
            }
            (None, Some(_)) => {
                return Err(MemoryError::enumeration_mismatch(position, position + 1));
            }
        }
    }
}

/// 处理可缺失参数：两侧都缺失视为相等（`Ok(None)`），仅一侧缺失报告 `NullReference`。
pub(crate) fn require_both<'a, X: ?Sized, Y: ?Sized>(
    x: Option<&'a X>,
    y: Option<&'a Y>,
) -> Result<Option<(&'a X, &'a Y)>> {
    match (x, y) {
        (Some(x), Some(y)) => Ok(Some((x, y))),
        (None, None) => Ok(None),
        (None, Some(_)) => Err(MemoryError::NullReference { argument: "x" }),
        (Some(_), None) => Err(MemoryError::NullReference { argument: "y" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn identical_slice_skips_element_calls() {
        let values = [3, 1, 2];
        let calls = Cell::new(0);
        let result = slices(&values, &values, |a: &i32, b: &i32| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        });
        assert_eq!(result, Ok(Ordering::Equal));
        assert_eq!(calls.get(), 0, "同一对象不应触发元素比较");
    }

    #[test]
    fn sub_slices_of_same_storage_are_not_identical() {
        let values = [1, 2, 1, 3];
        let result = slices(&values[..2], &values[2..], i32::cmp);
        assert_eq!(result, Ok(Ordering::Greater));
    }

    #[test]
    fn scan_stops_at_first_difference() {
        let calls = Cell::new(0);
        let result = slices(&[1, 5, 0], &[1, 2, 3], |a: &i32, b: &i32| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        });
        assert_eq!(result, Ok(Ordering::Greater));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn identity_is_seen_through_forwarding_references() {
        let values: std::collections::LinkedList<i32> = [1, 2, 3].into_iter().collect();
        let (left, right) = (&values, &values);
        let calls = Cell::new(0);
        let result = sequences(&left, &right, |a: &i32, b: &i32| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        });
        assert_eq!(result, Ok(Ordering::Equal));
        assert_eq!(calls.get(), 0, "经引用转发的同一集合不应触发元素比较");
    }

    #[test]
    fn require_both_names_missing_side() {
        let present = [1];
        assert_eq!(
            require_both::<[i32], [i32]>(None, Some(&present[..])),
            Err(MemoryError::NullReference { argument: "x" })
        );
        assert_eq!(
            require_both::<[i32], [i32]>(Some(&present[..]), None),
            Err(MemoryError::NullReference { argument: "y" })
        );
        assert_eq!(require_both::<[i32], [i32]>(None, None), Ok(None));
    }
}
