use core::{cmp::Ordering, fmt, marker::PhantomData};

use spark_memory_core::{Result, Sequence};

use crate::{TolerantOrd, collection, memory, slice};

/// 比较方向。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// 保持引擎结果。
    #[default]
    Ascending,
    /// 翻转引擎结果（`Equal` 保持不变）。
    Descending,
}

impl Direction {
    /// 按方向调整比较结果。
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// `LexicographicComparer` 将方向与元素序打包为可复用的序列比较器。
///
/// # 使用方式（How）
/// - 自然全序：[`ascending`](Self::ascending) / [`descending`](Self::descending)；
/// - 浮点容差序：[`tolerant`](Self::tolerant)；
/// - 自定义元素序：[`with_order`](Self::with_order)。
///
/// 比较器本身不持有任何序列，可在多次比较之间共享；错误语义与各形态的入口函数一致。
///
/// ```rust
/// use core::cmp::Ordering;
/// use spark_compare::LexicographicComparer;
///
/// let descending = LexicographicComparer::<u32>::descending();
/// assert_eq!(descending.compare_slices(&[1, 2], &[1, 3]), Ok(Ordering::Greater));
/// ```
pub struct LexicographicComparer<T, F = fn(&T, &T) -> Ordering> {
    direction: Direction,
    order: F,
    _element: PhantomData<fn(&T)>,
}

impl<T: Ord> LexicographicComparer<T> {
    /// 自然全序、升序。
    pub fn ascending() -> Self {
        Self::with_order(Direction::Ascending, Ord::cmp)
    }

    /// 自然全序、降序。
    pub fn descending() -> Self {
        Self::with_order(Direction::Descending, Ord::cmp)
    }
}

impl<T: TolerantOrd> LexicographicComparer<T> {
    /// 浮点容差序。
    pub fn tolerant(direction: Direction) -> Self {
        Self::with_order(direction, TolerantOrd::tolerant_cmp)
    }
}

impl<T, F> LexicographicComparer<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// 使用自定义元素序构造比较器。
    pub fn with_order(direction: Direction, order: F) -> Self {
        Self {
            direction,
            order,
            _element: PhantomData,
        }
    }

    /// 当前方向。
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// 比较两个切片（含数组与临时缓冲视图）。
    pub fn compare_slices(&self, x: &[T], y: &[T]) -> Result<Ordering> {
        slice::compare_by(x, y, &self.order).map(|ordering| self.direction.apply(ordering))
    }

    /// 比较两个通用集合。
    pub fn compare_collections<X, Y>(&self, x: &X, y: &Y) -> Result<Ordering>
    where
        X: Sequence<Item = T> + ?Sized,
        Y: Sequence<Item = T> + ?Sized,
    {
        collection::compare_by(x, y, &self.order).map(|ordering| self.direction.apply(ordering))
    }

    /// 比较两个拥有所有权的缓冲视图。
    pub fn compare_memory<X, Y>(&self, x: &X, y: &Y) -> Result<Ordering>
    where
        X: AsRef<[T]> + ?Sized,
        Y: AsRef<[T]> + ?Sized,
    {
        memory::compare_by(x, y, &self.order).map(|ordering| self.direction.apply(ordering))
    }
}

impl<T, F: Clone> Clone for LexicographicComparer<T, F> {
    fn clone(&self) -> Self {
        Self {
            direction: self.direction,
            order: self.order.clone(),
            _element: PhantomData,
        }
    }
}

impl<T, F> fmt::Debug for LexicographicComparer<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexicographicComparer")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}
