use std::{fmt, iter, mem, slice, sync::Arc};

use spark_memory_core::{ArrayPool, MemoryError, Result};
use tracing::{debug, trace, warn};

use crate::config::TemporaryArrayOptions;

/// 存储的来源。
///
/// 释放逻辑只需对来源做一次 `match`：池化存储归还原池，直接分配的存储随句柄一起释放。
enum Origin<T> {
    Pooled(Arc<dyn ArrayPool<T>>),
    Direct,
}

/// `TemporaryArray` 是从数组池租借、作用域结束时必定归还的定长临时缓冲。
///
/// # 设计动机（Why）
/// - 热路径上的临时数组若每次都向堆申请，会带来分配抖动；向共享池租借可以复用内存，
///   但“忘记归还”或“重复归还”都会破坏池的簿记。
/// - 将归还动作绑定到句柄的 `Drop`，无论作用域以正常返回、提前返回、`?` 传播还是 panic 展开结束，
///   存储都恰好归还一次。
///
/// # 架构关系（How）
/// - `storage` 持有租借到的整块存储（容量可能大于请求长度）；释放后置为 `None`，
///   任何后续访问都返回 [`MemoryError::UseAfterDispose`]；
/// - `origin` 记录存储来自哪个池，或是直接分配；
/// - 所有视图与下标访问都以逻辑长度 `length` 为界，而不是底层容量。
///
/// # 契约说明（What）
/// - **构造**：[`rent`](Self::rent)/[`rent_with`](Self::rent_with) 在长度为负或超出 `usize` 时返回
///   [`MemoryError::InvalidLength`]，且不与池发生任何交互；未提供池、长度为 0 或超过
///   `max_pooled_length` 时直接分配，释放时不归还任何池；
/// - **清理**：元素类型带有析构逻辑（`core::mem::needs_drop::<T>()`，即可能持有下游所有权或引用计数）时，
///   无论调用方如何设置，`clear_on_return` 都强制为 `true`；
/// - **释放**：[`dispose`](Self::dispose) 幂等；池化存储在需要时先整体重置为 `T::default()`，
///   再通过 [`ArrayPool::reclaim`] 归还；释放本身从不返回错误。
///
/// # 风险与取舍（Trade-offs）
/// - 句柄没有内部同步，修改需要 `&mut self`；多个句柄可以并发地向同一个池租借，
///   池的线程安全由池实现负责。
/// - 长度固定，不支持追加或扩容。
///
/// ```rust
/// use std::sync::Arc;
/// use spark_memory_core::ArrayPool;
/// use spark_scratch::{SlabArrayPool, TemporaryArray};
///
/// let pool: Arc<dyn ArrayPool<u32>> = Arc::new(SlabArrayPool::<u32>::new());
/// let mut scratch = TemporaryArray::rent(Some(pool.clone()), 5).expect("租借临时数组");
/// assert_eq!(scratch.view().unwrap().len(), 5);
/// assert!(scratch.capacity().unwrap() >= 5);
/// scratch.set(0, 42).unwrap();
/// drop(scratch);
/// assert_eq!(pool.statistics().returned, 1);
/// ```
pub struct TemporaryArray<T: Default> {
    storage: Option<Box<[T]>>,
    origin: Origin<T>,
    length: usize,
    clear_on_return: bool,
}

impl<T: Default> TemporaryArray<T> {
    /// 以默认选项租借 `length` 个元素。
    pub fn rent<L>(pool: Option<Arc<dyn ArrayPool<T>>>, length: L) -> Result<Self>
    where
        L: TryInto<usize> + Copy + fmt::Display,
    {
        Self::rent_with(pool, length, &TemporaryArrayOptions::default())
    }

    /// 按给定选项租借 `length` 个元素。
    pub fn rent_with<L>(
        pool: Option<Arc<dyn ArrayPool<T>>>,
        length: L,
        options: &TemporaryArrayOptions,
    ) -> Result<Self>
    where
        L: TryInto<usize> + Copy + fmt::Display,
    {
        let length: usize = length
            .try_into()
            .map_err(|_| MemoryError::InvalidLength {
                requested: length.to_string(),
            })?;
        let clear_on_return = options.clear_on_return || mem::needs_drop::<T>();

        let (storage, origin) = match pool {
            Some(pool) if length > 0 && length <= options.max_pooled_length => {
                let storage = pool.rent(length);
                if storage.len() < length {
                    warn!(
                        requested = length,
                        returned = storage.len(),
                        "array pool returned storage shorter than requested, allocating directly"
                    );
                    pool.reclaim(storage, false);
                    (allocate(length), Origin::Direct)
                } else {
                    (storage, Origin::Pooled(pool))
                }
            }
            Some(_) => {
                debug!(
                    length,
                    max_pooled_length = options.max_pooled_length,
                    "temporary array bypasses the pool"
                );
                (allocate(length), Origin::Direct)
            }
            None => {
                debug!(length, "no array pool supplied, allocating directly");
                (allocate(length), Origin::Direct)
            }
        };

        Ok(Self {
            storage: Some(storage),
            origin,
            length,
            clear_on_return,
        })
    }

    /// 不经过任何池，直接分配 `length` 个元素。
    pub fn direct(length: usize) -> Self {
        Self {
            storage: Some(allocate(length)),
            origin: Origin::Direct,
            length,
            clear_on_return: mem::needs_drop::<T>(),
        }
    }

    /// 逻辑长度；释放后仍可读取。
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// 底层存储的实际容量（不小于逻辑长度）。
    pub fn capacity(&self) -> Result<usize> {
        self.storage
            .as_ref()
            .map(|storage| storage.len())
            .ok_or(MemoryError::UseAfterDispose {
                operation: "capacity",
            })
    }

    /// 归还前是否清理存储。
    pub fn clear_on_return(&self) -> bool {
        self.clear_on_return
    }

    /// 存储是否来自池且尚未归还。
    pub fn is_pooled(&self) -> bool {
        matches!(self.origin, Origin::Pooled(_))
    }

    pub fn is_disposed(&self) -> bool {
        self.storage.is_none()
    }

    /// 返回恰好 `len()` 个元素的只读视图。
    pub fn view(&self) -> Result<&[T]> {
        self.bounded("view")
    }

    /// 返回恰好 `len()` 个元素的可写视图。
    pub fn view_mut(&mut self) -> Result<&mut [T]> {
        self.bounded_mut("view_mut")
    }

    /// 读取下标处元素，按逻辑长度做边界检查。
    pub fn get(&self, index: usize) -> Result<&T> {
        let length = self.length;
        self.bounded("get")?
            .get(index)
            .ok_or(MemoryError::IndexOutOfRange { index, length })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let length = self.length;
        self.bounded_mut("get_mut")?
            .get_mut(index)
            .ok_or(MemoryError::IndexOutOfRange { index, length })
    }

    /// 写入下标处元素，按逻辑长度做边界检查。
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let length = self.length;
        let slot = self
            .bounded_mut("set")?
            .get_mut(index)
            .ok_or(MemoryError::IndexOutOfRange { index, length })?;
        *slot = value;
        Ok(())
    }

    /// 按下标顺序遍历逻辑长度内的元素。
    pub fn iter(&self) -> Result<slice::Iter<'_, T>> {
        Ok(self.bounded("iter")?.iter())
    }

    /// 查找首个等于 `item` 的下标。
    pub fn index_of(&self, item: &T) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        Ok(self
            .bounded("index_of")?
            .iter()
            .position(|candidate| candidate == item))
    }

    pub fn contains(&self, item: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        Ok(self.index_of(item)?.is_some())
    }

    /// 从 `destination[offset..]` 开始复制，复制数量取两侧剩余长度的较小值，返回实际复制数。
    pub fn copy_to(&self, destination: &mut [T], offset: usize) -> Result<usize>
    where
        T: Clone,
    {
        let source = self.bounded("copy_to")?;
        let Some(target) = destination.get_mut(offset..) else {
            return Ok(0);
        };
        let count = source.len().min(target.len());
        target[..count].clone_from_slice(&source[..count]);
        Ok(count)
    }

    /// 归还存储并将句柄标记为已释放。
    ///
    /// 幂等：重复调用不会再次归还，也不会报错。`Drop` 会自动调用本方法。
    pub fn dispose(&mut self) {
        let Some(mut storage) = self.storage.take() else {
            trace!(length = self.length, "temporary array already disposed");
            return;
        };
        match mem::replace(&mut self.origin, Origin::Direct) {
            Origin::Pooled(pool) => {
                if self.clear_on_return {
                    storage.fill_with(T::default);
                }
                trace!(
                    length = self.length,
                    capacity = storage.len(),
                    cleared = self.clear_on_return,
                    "returning temporary array to pool"
                );
                pool.reclaim(storage, self.clear_on_return);
            }
            Origin::Direct => drop(storage),
        }
    }

    fn bounded(&self, operation: &'static str) -> Result<&[T]> {
        let length = self.length;
        self.storage
            .as_deref()
            .map(|storage| &storage[..length])
            .ok_or(MemoryError::UseAfterDispose { operation })
    }

    fn bounded_mut(&mut self, operation: &'static str) -> Result<&mut [T]> {
        let length = self.length;
        self.storage
            .as_deref_mut()
            .map(|storage| &mut storage[..length])
            .ok_or(MemoryError::UseAfterDispose { operation })
    }
}

impl<T: Default> Drop for TemporaryArray<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<T: Default> fmt::Debug for TemporaryArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporaryArray")
            .field("length", &self.length)
            .field("capacity", &self.storage.as_ref().map(|storage| storage.len()))
            .field("pooled", &self.is_pooled())
            .field("clear_on_return", &self.clear_on_return)
            .finish()
    }
}

fn allocate<T: Default>(length: usize) -> Box<[T]> {
    iter::repeat_with(T::default).take(length).collect()
}
