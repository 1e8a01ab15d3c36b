use core::{
    cmp::Ordering,
    fmt::{self, Write},
};

/// `f32` 容差：机器 epsilon。
pub const F32_TOLERANCE: f32 = f32::EPSILON;

/// `f64` 容差：固定绝对阈值。
pub const F64_TOLERANCE: f64 = 0.000_000_01;

/// 规范文本在科学计数法下保留的小数位数：`f32` 共 7 位有效数字，`f64` 共 9 位。
const F32_TEXT_DIGITS: usize = 6;
const F64_TEXT_DIGITS: usize = 8;

/// 规范文本缓冲的容量。科学计数法的最长输出（如 `-1.23456789e-308`）远小于该容量；
/// 写不下时按“文本不同”处理。
const TEXT_CAPACITY: usize = 32;

/// 浮点元素的容差序。
///
/// # 规则（What）
/// 1. `a` 为 NaN：`b` 也为 NaN 时相等，否则 `Less`（NaN 排在所有非 NaN 之前）；
/// 2. `b` 为 NaN：`Greater`；
/// 3. `a == b`：相等（包含 `0.0 == -0.0`）；
/// 4. `|a - b|` 落在容差内（`f32` 为 `<= f32::EPSILON`，`f64` 为 `< 1e-8`）**且**二者的规范十进制文本
///    完全一致：相等；
/// 5. 其余情况按数值大小比较。
///
/// 规范文本为固定有效数字的科学计数法（`f32` 7 位、`f64` 9 位），精度随数量级缩放，
/// 因此 `1e-9` 与 `3e-9` 这类小量级的值不会被折叠为相等。渲染在栈上完成，不分配内存。
///
/// # 注意（Gotchas）
/// 该序**不是**严格全序：在容差边界上可能出现 `A≈B`、`B≈C` 但 `A≠C`。
/// 调用方只能依赖“数值上不可区分的值比较为相等”，不能依赖排序稳定性。
///
/// ```rust
/// use core::cmp::Ordering;
/// use spark_compare::TolerantOrd;
///
/// assert_eq!(f64::NAN.tolerant_cmp(&f64::NAN), Ordering::Equal);
/// assert_eq!(1.0_f64.tolerant_cmp(&(1.0 + 1e-10)), Ordering::Equal);
/// assert_eq!(1.0_f64.tolerant_cmp(&2.0), Ordering::Less);
/// assert_eq!(1e-9_f64.tolerant_cmp(&3e-9), Ordering::Less);
/// ```
pub trait TolerantOrd: Copy {
    /// 按容差序比较两个值。
    fn tolerant_cmp(&self, other: &Self) -> Ordering;
}

impl TolerantOrd for f32 {
    fn tolerant_cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (*self, *other);
        if let Some(decided) = nan_order(a.is_nan(), b.is_nan()) {
            return decided;
        }
        if a == b
            || (a - b).abs() <= F32_TOLERANCE && same_canonical_text(a, b, F32_TEXT_DIGITS)
        {
            return Ordering::Equal;
        }
        a.total_cmp(&b)
    }
}

impl TolerantOrd for f64 {
    fn tolerant_cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (*self, *other);
        if let Some(decided) = nan_order(a.is_nan(), b.is_nan()) {
            return decided;
        }
        if a == b
            || (a - b).abs() < F64_TOLERANCE && same_canonical_text(a, b, F64_TEXT_DIGITS)
        {
            return Ordering::Equal;
        }
        a.total_cmp(&b)
    }
}

fn nan_order(a_is_nan: bool, b_is_nan: bool) -> Option<Ordering> {
    match (a_is_nan, b_is_nan) {
        (true, true) => Some(Ordering::Equal),
        (true, false) => Some(Ordering::Less),
        (false, true) => Some(Ordering::Greater),
        (false, false) => None,
    }
}

fn same_canonical_text<V: fmt::LowerExp>(a: V, b: V, digits: usize) -> bool {
    let mut left = CanonicalText::new();
    let mut right = CanonicalText::new();
    if write!(left, "{a:.digits$e}").is_err() || write!(right, "{b:.digits$e}").is_err() {
        return false;
    }
    left.as_bytes() == right.as_bytes()
}

/// 定长栈缓冲，承接 `fmt::Write` 输出。
struct CanonicalText {
    bytes: [u8; TEXT_CAPACITY],
    len: usize,
}

impl CanonicalText {
    fn new() -> Self {
        Self {
            bytes: [0; TEXT_CAPACITY],
            len: 0,
        }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl Write for CanonicalText {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > TEXT_CAPACITY {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_sorts_first_and_equals_itself() {
        assert_eq!(f64::NAN.tolerant_cmp(&f64::NAN), Ordering::Equal);
        assert_eq!(f64::NAN.tolerant_cmp(&1.0), Ordering::Less);
        assert_eq!(1.0_f64.tolerant_cmp(&f64::NAN), Ordering::Greater);
        assert_eq!(f32::NAN.tolerant_cmp(&f32::NEG_INFINITY), Ordering::Less);
    }

    #[test]
    fn f64_round_off_noise_is_absorbed() {
        assert_eq!(1.0_f64.tolerant_cmp(&(1.0 + 1e-10)), Ordering::Equal);
        assert_eq!((0.1_f64 + 0.2).tolerant_cmp(&0.3), Ordering::Equal);
        assert_eq!(1.0_f64.tolerant_cmp(&2.0), Ordering::Less);
    }

    #[test]
    fn f64_close_values_with_different_text_stay_ordered() {
        // 差值小于阈值，但保留 9 位有效数字后文本不同。
        let a = 0.123_456_784_49_f64;
        let b = 0.123_456_784_51_f64;
        assert!((a - b).abs() < F64_TOLERANCE);
        assert_eq!(a.tolerant_cmp(&b), Ordering::Less);
        assert_eq!(b.tolerant_cmp(&a), Ordering::Greater);
    }

    #[test]
    fn f64_beyond_threshold_is_numeric() {
        assert_eq!(1.0_f64.tolerant_cmp(&1.000_000_1), Ordering::Less);
    }

    #[test]
    fn f32_adjacent_small_values_are_equal() {
        let a = 0.1_f32;
        let b = f32::from_bits(a.to_bits() + 1);
        assert_ne!(a, b);
        assert_eq!(a.tolerant_cmp(&b), Ordering::Equal);
    }

    #[test]
    fn f32_epsilon_apart_near_one_is_absorbed() {
        let a = 1.0_f32;
        let b = 1.0_f32 + f32::EPSILON;
        assert_eq!(a.tolerant_cmp(&b), Ordering::Equal);
    }

    #[test]
    fn small_magnitudes_are_not_collapsed() {
        assert_eq!(1e-9_f64.tolerant_cmp(&3e-9), Ordering::Less);
        assert_eq!(0.0_f64.tolerant_cmp(&4e-9), Ordering::Less);
        assert_eq!(4e-9_f64.tolerant_cmp(&1e-300), Ordering::Greater);
        assert_eq!(1e-8_f32.tolerant_cmp(&4e-8), Ordering::Less);
        assert_eq!(2e-9_f64.tolerant_cmp(&(2e-9 + 1e-20)), Ordering::Equal);
    }

    #[test]
    fn signed_zero_is_equal() {
        assert_eq!(0.0_f64.tolerant_cmp(&-0.0), Ordering::Equal);
        assert_eq!((-0.0_f32).tolerant_cmp(&0.0), Ordering::Equal);
    }

    #[test]
    fn infinities_compare_numerically() {
        assert_eq!(f64::INFINITY.tolerant_cmp(&f64::INFINITY), Ordering::Equal);
        assert_eq!(
            f64::NEG_INFINITY.tolerant_cmp(&f64::INFINITY),
            Ordering::Less
        );
        assert_eq!(f64::INFINITY.tolerant_cmp(&f64::MAX), Ordering::Greater);
    }

    #[test]
    fn oversized_text_is_treated_as_distinct() {
        let mut text = CanonicalText::new();
        let long = "9".repeat(TEXT_CAPACITY + 1);
        assert!(text.write_str(&long).is_err());
        assert!(same_canonical_text(-f64::MIN_POSITIVE, -f64::MIN_POSITIVE, F64_TEXT_DIGITS));
    }
}
