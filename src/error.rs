//! 统一错误处理 - 哈希表可能返回的错误类型和恢复建议

/// Cuckoo哈希表可能发生的错误
///
/// 键不存在属于正常控制流，查询/删除通过 [`Lookup`](crate::types::Lookup)
/// 与 [`Removal`](crate::types::Removal) 返回，不经过此类型。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CuckooError {
    #[error("无效参数: {reason}")]
    InvalidArgument {
        reason: String,
    },

    #[error("定长字段宽度不匹配 (期望: {expected} 字节, 实际: {actual} 字节)")]
    WidthMismatch {
        expected: usize,
        actual: usize,
    },

    #[error("内存分配失败 (大小: {size}, 对齐: {align})")]
    AllocationFailed {
        size: usize,
        align: usize,
    },

    #[error("无效配置: {reason}")]
    InvalidConfig {
        reason: String,
    },

    #[error("值反序列化失败")]
    ValueDeserialization,
}

impl CuckooError {
    /// 获取错误恢复建议
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { .. } => Some("提供足够大小的输出缓冲区"),
            Self::WidthMismatch { .. } => Some("检查键/值长度是否与建表时声明的宽度一致"),
            Self::AllocationFailed { .. } => Some("检查系统内存或减小表大小"),
            Self::InvalidConfig { .. } => Some("检查配置参数"),
            Self::ValueDeserialization => Some("检查值序列化格式"),
        }
    }

    /// 判断错误是否可恢复
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::AllocationFailed { .. })
    }

    /// 参数校验类错误（调用方修正参数即可重试）
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::WidthMismatch { .. } | Self::InvalidConfig { .. }
        )
    }
}
