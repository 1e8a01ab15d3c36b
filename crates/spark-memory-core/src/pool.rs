/// `ArrayPool` 描述临时缓冲所依赖的外部分配池。
///
/// # 设计初衷（Why）
/// - 池本身属于外部协作者：核心只要求“至少给出请求长度的存储”与“接收归还”两项能力，
///   不假设任何容量增长策略，也不假设内部锁的具体形式。
/// - 通过 trait 对象（`Arc<dyn ArrayPool<T>>`）注入，临时缓冲与具体池实现保持松耦合。
///
/// # 契约定义（What）
/// - `rent(minimum_length)`：返回长度 **不小于** `minimum_length` 的存储；
/// - `reclaim(storage, cleared)`：接收此前 `rent` 给出的存储。`cleared == true` 表示租借方在归还前
///   已将整块存储重置为默认值；池可据此更新统计，但不得依赖未清理存储中的内容；
/// - **线程安全**：多个缓冲可能并发地向同一个池租借与归还，实现必须自行保证簿记一致；
/// - **前置条件**：`reclaim` 运行在释放路径上，实现不得 panic，否则在展开过程中会导致进程中止。
pub trait ArrayPool<T>: Send + Sync {
    /// 租借至少 `minimum_length` 个元素的存储。
    fn rent(&self, minimum_length: usize) -> Box<[T]>;

    /// 归还此前租借的存储。
    fn reclaim(&self, storage: Box<[T]>, cleared: bool);

    /// 返回池当前的统计快照；不维护统计的实现可沿用默认空快照。
    fn statistics(&self) -> PoolStats {
        PoolStats::default()
    }
}

/// 池级统计快照。
///
/// 所有字段均为累计值或瞬时值的拷贝，读取后不会随池状态继续变化。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// 累计成功租出的次数。
    pub rented: u64,
    /// 累计归还次数。
    pub returned: u64,
    /// 归还时已清理的次数。
    pub cleared_returns: u64,
    /// 自由链表未命中、需要新分配的次数。
    pub misses: u64,
    /// 因缓存已满而直接丢弃的归还次数。
    pub discarded: u64,
    /// 当前缓存在自由链表中的数组数量。
    pub cached_arrays: usize,
}

impl PoolStats {
    /// 仍在外借、尚未归还的租约数。
    pub fn outstanding(&self) -> u64 {
        self.rented.saturating_sub(self.returned)
    }
}
