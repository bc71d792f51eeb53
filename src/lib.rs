//! # Amsgrad
//!
//! `amsgrad`项目旨在用纯rust实现[AMSGrad](https://arxiv.org/abs/1904.09237)这一
//! 基于梯度的参数更新算法，供外部的自动微分训练循环调用：
//! 训练循环每步对每个可训练参数提供一个梯度，本库据此产出新的参数值，
//! 并逐参数维护`(m, v, v_hat, t)`这四项优化器状态。
//!
//! 模型定义、数据加载、自动微分、学习率调度与设备管理均不在本库范围内。

pub mod errors;
pub mod optimizer;
pub mod tensor;

pub use errors::OptimizerError;
pub use optimizer::{Amsgrad, AmsgradState, LearningRate, Optimizer};
pub use tensor::Tensor;
