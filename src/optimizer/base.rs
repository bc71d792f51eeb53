/*
 * @Description  : 优化器基础trait与学习率策略
 */

use std::fmt;
use std::sync::Arc;

use crate::errors::OptimizerError;
use crate::tensor::Tensor;

/// 优化器核心 trait
///
/// 任何基于梯度的更新规则都只需实现两个操作：`init`为单个参数分配初始
/// 状态，`apply`根据梯度计算新的参数值与新状态。训练循环据此可在不同
/// 优化器之间自由切换，无需继承层级。
///
/// # 约定
/// - 参数由训练循环持有，优化器只读取参数并返回替换值，绝不原地修改；
/// - 状态的回传由调用方负责：每次`apply`都必须传入本优化器上一次为该
///   参数返回的状态（或`init`的产物）；
/// - 不同参数之间的状态彼此独立，更新顺序无关紧要。
pub trait Optimizer {
    /// 单个参数的优化器状态类型
    type State;

    /// 为单个参数分配一份全新的初始状态。
    /// 只使用参数的形状，不读取也不修改其内容。
    fn init(&self, parameter: &Tensor) -> Self::State;

    /// 执行一次参数更新，返回`(新参数值, 新状态)`。
    ///
    /// `apply`是其三个输入加固定超参数的纯函数：无隐藏全局状态、无随机性。
    /// 输出张量与输入参数形状一致。出错时（如梯度与参数形状不一致）整个
    /// 调用失败，参数与状态都不会被改动。
    fn apply(
        &self,
        gradient: &Tensor,
        parameter: &Tensor,
        state: &Self::State,
    ) -> Result<(Tensor, Self::State), OptimizerError>;
}

/// 学习率策略：固定常数，或由外部注入的步数函数。
///
/// 本库不实现任何调度算法（余弦退火、warmup等都属于训练循环的职责），
/// 只在每次更新时以该参数更新前的步数`t`求值一次。
#[derive(Clone)]
pub enum LearningRate {
    /// 固定学习率
    Constant(f32),
    /// 步数到学习率的映射，每次更新都会被调用
    Scheduled(Arc<dyn Fn(usize) -> f32 + Send + Sync>),
}

impl LearningRate {
    /// 用一个步数函数构造学习率策略
    pub fn scheduled(schedule: impl Fn(usize) -> f32 + Send + Sync + 'static) -> Self {
        Self::Scheduled(Arc::new(schedule))
    }

    /// 求出第`step`步的学习率
    pub fn at(&self, step: usize) -> f32 {
        match self {
            Self::Constant(lr) => *lr,
            Self::Scheduled(schedule) => schedule(step),
        }
    }
}

impl From<f32> for LearningRate {
    fn from(lr: f32) -> Self {
        Self::Constant(lr)
    }
}

impl fmt::Debug for LearningRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(lr) => f.debug_tuple("Constant").field(lr).finish(),
            Self::Scheduled(_) => f.write_str("Scheduled(<fn>)"),
        }
    }
}
