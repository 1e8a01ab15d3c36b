use std::{fmt, sync::Arc};

use spark_memory_core::{ArrayPool, Result};

use crate::{config::TemporaryArrayOptions, temporary_array::TemporaryArray};

/// 在池句柄上直接租借 [`TemporaryArray`] 的便捷入口。
///
/// 等价于把池句柄克隆为 `Arc<dyn ArrayPool<T>>` 后调用 [`TemporaryArray::rent_with`]；
/// 已经持有 `Arc<dyn ArrayPool<T>>` 的调用方直接使用 `TemporaryArray::rent` 即可。
///
/// ```rust
/// use std::sync::Arc;
/// use spark_scratch::{ArrayPoolExt, SlabArrayPool};
///
/// let pool = Arc::new(SlabArrayPool::<i64>::new());
/// let scratch = pool.rent_temporary(3).expect("租借临时数组");
/// assert_eq!(scratch.len(), 3);
/// ```
pub trait ArrayPoolExt<T: Default> {
    fn rent_temporary<L>(&self, length: L) -> Result<TemporaryArray<T>>
    where
        L: TryInto<usize> + Copy + fmt::Display;

    fn rent_temporary_with<L>(
        &self,
        length: L,
        options: &TemporaryArrayOptions,
    ) -> Result<TemporaryArray<T>>
    where
        L: TryInto<usize> + Copy + fmt::Display;
}

impl<T, P> ArrayPoolExt<T> for Arc<P>
where
    T: Default,
    P: ArrayPool<T> + 'static,
{
    fn rent_temporary<L>(&self, length: L) -> Result<TemporaryArray<T>>
    where
        L: TryInto<usize> + Copy + fmt::Display,
    {
        self.rent_temporary_with(length, &TemporaryArrayOptions::default())
    }

    fn rent_temporary_with<L>(
        &self,
        length: L,
        options: &TemporaryArrayOptions,
    ) -> Result<TemporaryArray<T>>
    where
        L: TryInto<usize> + Copy + fmt::Display,
    {
        let pool: Arc<dyn ArrayPool<T>> = self.clone();
        TemporaryArray::rent_with(Some(pool), length, options)
    }
}
