use thiserror::Error;

/// 优化器操作错误类型
///
/// 所有错误都立即上抛给调用方（训练循环），本库内部不做重试或静默纠正：
/// 梯度/状态与参数不匹配属于外围系统的编程错误，而非瞬态故障。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptimizerError {
    // 调用时：梯度或状态与参数不匹配
    #[error("非法参数：{0}")]
    InvalidArgument(String),

    // 构造时：超参数非法
    #[error("非法配置：{0}")]
    ConfigurationError(String),
}
