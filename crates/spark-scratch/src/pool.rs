use std::{
    fmt, iter,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use spin::Mutex;
use tracing::{debug, trace};

use spark_memory_core::{ArrayPool, PoolStats};

use crate::config::SlabArrayPoolConfig;

/// `SlabArrayPool` 是基于自由链表（Free List）的参考数组池，
/// 为没有自有池的调用方、测试与基准提供一个可直接注入的 [`ArrayPool`] 实现。
///
/// # 模块角色（Why）
/// - 临时缓冲只依赖 `ArrayPool` 契约；本实现让该契约有一个开箱即用的默认协作者；
/// - 通过统计快照暴露租借与归还次数，契约测试可以据此断言“恰好归还一次”。
///
/// # 核心机制（How）
/// - 请求长度向上取整到不小于 `min_array_length` 的 2 的幂，同一分桶的数组可以互相复用；
/// - 内部维护 `spin::Mutex<Vec<Box<[T]>>>` 作为自由链表，租借时按分桶长度精确匹配；
/// - `PoolMetrics` 以原子计数累计 `rented`、`returned`、`misses` 等指标。
///
/// # 契约说明（What）
/// - **线程安全**：共享状态由 `spin::Mutex` 与原子计数保护；`clone` 得到的是同一个池的另一个句柄；
/// - **后置条件**：`rent(n)` 返回的数组长度为 `n` 所在分桶的长度，必然 `>= n`；
/// - 复用的数组保留上一位租借者留下的内容，是否清理由归还方决定；
/// - 自由链表已满或归还的数组不属于任何分桶（长度不是 2 的幂，或小于分桶下限）时，数组直接释放并计入 `discarded`。
///
/// # 设计权衡（Trade-offs）
/// - 使用自旋锁而非操作系统互斥量：临界区只有一次 `Vec` 查找与交换，持锁时间极短；
/// - `shrink_to_fit` 采取“清空自由链表”的简单策略，便于在峰值过后快速归还内存。
pub struct SlabArrayPool<T> {
    inner: Arc<PoolInner<T>>,
}

impl<T> Clone for SlabArrayPool<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SlabArrayPool<T> {
    fn default() -> Self {
        Self::with_config(SlabArrayPoolConfig::default())
    }
}

impl<T> fmt::Debug for SlabArrayPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlabArrayPool")
            .field("config", &self.inner.config)
            .field("cached_arrays", &self.inner.free_list.lock().len())
            .finish()
    }
}

impl<T> SlabArrayPool<T> {
    /// 以默认配置创建空池。
    pub fn new() -> Self {
        Self::default()
    }

    /// 以给定配置创建空池；`min_array_length` 为 0 时按 1 处理。
    pub fn with_config(config: SlabArrayPoolConfig) -> Self {
        Self {
            inner: Arc::new(PoolInner {
                free_list: Mutex::new(Vec::new()),
                metrics: PoolMetrics::default(),
                config,
            }),
        }
    }

    pub fn builder() -> SlabArrayPoolBuilder {
        SlabArrayPoolBuilder::default()
    }

    pub fn config(&self) -> &SlabArrayPoolConfig {
        &self.inner.config
    }

    /// 清空自由链表，返回释放的数组数量。
    pub fn shrink_to_fit(&self) -> usize {
        let released = {
            let mut list = self.inner.free_list.lock();
            let released = list.len();
            list.clear();
            list.shrink_to_fit();
            released
        };
        debug!(released, "slab array pool shrunk");
        released
    }

    /// 请求长度所在分桶的长度。
    fn bucket_length(&self, minimum_length: usize) -> usize {
        let floor = self.inner.config.min_array_length.max(1);
        let wanted = minimum_length.max(floor);
        wanted.checked_next_power_of_two().unwrap_or(wanted)
    }

    fn accepts(&self, length: usize) -> bool {
        length.is_power_of_two() && length >= self.inner.config.min_array_length
    }
}

impl<T: Default + Send> ArrayPool<T> for SlabArrayPool<T> {
    fn rent(&self, minimum_length: usize) -> Box<[T]> {
        let bucket = self.bucket_length(minimum_length);
        let reused = {
            let mut list = self.inner.free_list.lock();
            let index = list.iter().position(|array| array.len() == bucket);
            index.map(|index| list.swap_remove(index))
        };
        self.inner.metrics.rented.fetch_add(1, Ordering::Relaxed);

        match reused {
            Some(array) => array,
            None => {
                self.inner.metrics.misses.fetch_add(1, Ordering::Relaxed);
                trace!(minimum_length, bucket, "slab array pool miss");
                iter::repeat_with(T::default).take(bucket).collect()
            }
        }
    }

    fn reclaim(&self, storage: Box<[T]>, cleared: bool) {
        let metrics = &self.inner.metrics;
        metrics.returned.fetch_add(1, Ordering::Relaxed);
        if cleared {
            metrics.cleared_returns.fetch_add(1, Ordering::Relaxed);
        }

        if !self.accepts(storage.len()) {
            metrics.discarded.fetch_add(1, Ordering::Relaxed);
            return;
        }
        let rejected = {
            let mut list = self.inner.free_list.lock();
            if list.len() < self.inner.config.max_cached_arrays {
                list.push(storage);
                None
            } else {
                Some(storage)
            }
        };
        // 在锁外释放，避免元素析构占用临界区。
        if let Some(storage) = rejected {
            metrics.discarded.fetch_add(1, Ordering::Relaxed);
            drop(storage);
        }
    }

    fn statistics(&self) -> PoolStats {
        let metrics = &self.inner.metrics;
        PoolStats {
            rented: metrics.rented.load(Ordering::Relaxed),
            returned: metrics.returned.load(Ordering::Relaxed),
            cleared_returns: metrics.cleared_returns.load(Ordering::Relaxed),
            misses: metrics.misses.load(Ordering::Relaxed),
            discarded: metrics.discarded.load(Ordering::Relaxed),
            cached_arrays: self.inner.free_list.lock().len(),
        }
    }
}

struct PoolInner<T> {
    free_list: Mutex<Vec<Box<[T]>>>,
    metrics: PoolMetrics,
    config: SlabArrayPoolConfig,
}

#[derive(Default)]
struct PoolMetrics {
    rented: AtomicU64,
    returned: AtomicU64,
    cleared_returns: AtomicU64,
    misses: AtomicU64,
    discarded: AtomicU64,
}

/// [`SlabArrayPool`] 的构建器。
#[derive(Clone, Debug, Default)]
pub struct SlabArrayPoolBuilder {
    config: SlabArrayPoolConfig,
}

impl SlabArrayPoolBuilder {
    pub fn min_array_length(mut self, min_array_length: usize) -> Self {
        self.config.min_array_length = min_array_length;
        self
    }

    pub fn max_cached_arrays(mut self, max_cached_arrays: usize) -> Self {
        self.config.max_cached_arrays = max_cached_arrays;
        self
    }

    pub fn build<T>(self) -> SlabArrayPool<T> {
        SlabArrayPool::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_round_up_to_bucket() {
        let pool = SlabArrayPool::<u8>::new();
        assert_eq!(pool.rent(0).len(), 16);
        assert_eq!(pool.rent(5).len(), 16);
        assert_eq!(pool.rent(17).len(), 32);
        assert_eq!(pool.rent(1024).len(), 1024);
    }

    #[test]
    fn returned_array_is_reused_within_bucket() {
        let pool = SlabArrayPool::<u32>::new();
        let mut first = pool.rent(20);
        first[0] = 7;
        pool.reclaim(first, false);

        let second = pool.rent(30);
        assert_eq!(second.len(), 32);
        assert_eq!(second[0], 7, "未清理的归还应原样复用");
        let stats = pool.statistics();
        assert_eq!(stats.rented, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.cached_arrays, 0);
    }

    #[test]
    fn full_free_list_discards_returns() {
        let pool: SlabArrayPool<u8> = SlabArrayPool::<u8>::builder().max_cached_arrays(1).build();
        let a = pool.rent(1);
        let b = pool.rent(1);
        pool.reclaim(a, true);
        pool.reclaim(b, false);
        let stats = pool.statistics();
        assert_eq!(stats.returned, 2);
        assert_eq!(stats.cleared_returns, 1);
        assert_eq!(stats.discarded, 1);
        assert_eq!(stats.cached_arrays, 1);
        assert_eq!(stats.outstanding(), 0);
    }

    #[test]
    fn foreign_lengths_are_not_cached() {
        let pool = SlabArrayPool::<u8>::new();
        pool.reclaim(vec![0u8; 24].into_boxed_slice(), false);
        pool.reclaim(vec![0u8; 8].into_boxed_slice(), false);
        assert_eq!(pool.statistics().discarded, 2);
        assert_eq!(pool.statistics().cached_arrays, 0);
    }

    #[test]
    fn shrink_releases_cached_arrays() {
        let pool = SlabArrayPool::<u8>::new();
        let clone = pool.clone();
        let array = pool.rent(64);
        clone.reclaim(array, false);
        assert_eq!(pool.statistics().cached_arrays, 1);
        assert_eq!(pool.shrink_to_fit(), 1);
        assert_eq!(clone.statistics().cached_arrays, 0);
    }
}
