/*
 * @Description  : 优化器模块：`Optimizer` trait、学习率策略与AMSGrad更新规则
 */

mod amsgrad;
mod base;

pub use amsgrad::{Amsgrad, AmsgradState};
pub use base::{LearningRate, Optimizer};
