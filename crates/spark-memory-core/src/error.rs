use thiserror::Error;

/// `MemoryError` 汇总比较引擎与临时缓冲可能产生的全部失败。
///
/// # 设计背景（Why）
/// - 所有失败都是本地、同步、立即暴露的：调用方要么提前校验输入，要么在收到错误后中止当前操作；
///   核心既不重试，也不尝试恢复。
/// - 每个变体对应一个稳定错误码（见 [`codes`]），沿用框架 `<领域>.<语义>` 的命名约定，
///   便于日志与告警按码聚合。
///
/// # 契约说明（What）
/// - 错误值满足 `Clone + Eq + Send + Sync + 'static`，测试可直接 `assert_eq!`；
/// - 释放（dispose）路径永远不会产生错误，因此这里没有“归还失败”之类的变体。
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MemoryError {
    /// 契约要求的序列或缓冲参数缺失。
    #[error("required argument `{argument}` is absent")]
    NullReference { argument: &'static str },

    /// 两个序列在声明长度或枚举过程中被发现长度不一致。
    ///
    /// `left`/`right` 在 [`LengthCheck::Declared`] 下为声明长度，
    /// 在 [`LengthCheck::Enumeration`] 下为各侧已产出的元素数。
    #[error("sequence lengths do not match ({stage}): left {left}, right {right}")]
    LengthMismatch {
        left: usize,
        right: usize,
        stage: LengthCheck,
    },

    /// 请求的缓冲长度为负或超出平台可表示范围。
    #[error("invalid buffer length {requested}: must be at least zero and fit in usize")]
    InvalidLength { requested: String },

    /// 下标越过逻辑长度（而非底层容量）。
    #[error("index {index} is out of range for length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    /// 缓冲已归还存储后仍被访问。
    #[error("temporary array already disposed; `{operation}` is not available")]
    UseAfterDispose { operation: &'static str },
}

impl MemoryError {
    /// 返回稳定错误码。
    ///
    /// ```rust
    /// use spark_memory_core::{MemoryError, codes};
    ///
    /// let err = MemoryError::IndexOutOfRange { index: 5, length: 5 };
    /// assert_eq!(err.code(), codes::INDEX_OUT_OF_RANGE);
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            MemoryError::NullReference { .. } => codes::NULL_REFERENCE,
            MemoryError::LengthMismatch { .. } => codes::LENGTH_MISMATCH,
            MemoryError::InvalidLength { .. } => codes::INVALID_LENGTH,
            MemoryError::IndexOutOfRange { .. } => codes::INDEX_OUT_OF_RANGE,
            MemoryError::UseAfterDispose { .. } => codes::USE_AFTER_DISPOSE,
        }
    }

    /// 构造声明长度不一致的错误。
    pub fn declared_mismatch(left: usize, right: usize) -> Self {
        MemoryError::LengthMismatch {
            left,
            right,
            stage: LengthCheck::Declared,
        }
    }

    /// 构造枚举过程中发现的长度不一致错误。
    pub fn enumeration_mismatch(left: usize, right: usize) -> Self {
        MemoryError::LengthMismatch {
            left,
            right,
            stage: LengthCheck::Enumeration,
        }
    }
}

/// 长度不一致是在哪个阶段被发现的。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthCheck {
    /// 入口处比较声明长度。
    Declared,
    /// 配对迭代时一侧先耗尽。
    Enumeration,
}

impl core::fmt::Display for LengthCheck {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LengthCheck::Declared => f.write_str("declared"),
            LengthCheck::Enumeration => f.write_str("enumeration"),
        }
    }
}

/// 带默认错误类型的 `Result` 别名。
pub type Result<T, E = MemoryError> = core::result::Result<T, E>;

/// 稳定错误码集合。
///
/// 码值一旦发布不得修改；新增语义时追加常量。
pub mod codes {
    /// 必需参数缺失。
    pub const NULL_REFERENCE: &str = "memory.null_reference";
    /// 序列长度不一致。
    pub const LENGTH_MISMATCH: &str = "memory.length_mismatch";
    /// 非法的缓冲长度。
    pub const INVALID_LENGTH: &str = "memory.invalid_length";
    /// 下标越界。
    pub const INDEX_OUT_OF_RANGE: &str = "memory.index_out_of_range";
    /// 释放后访问。
    pub const USE_AFTER_DISPOSE: &str = "memory.use_after_dispose";
}
