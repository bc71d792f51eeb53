/*
 * @Description  : AMSGrad优化器实现（更新规则 + 逐参数状态管理）
 *                 参考论文：https://arxiv.org/abs/1904.09237
 */

use std::collections::HashMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::base::{LearningRate, Optimizer};
use crate::errors::OptimizerError;
use crate::tensor::Tensor;

/// 单个参数的AMSGrad状态
///
/// 四个字段与参数本身形状一致（`t`除外），可按参数标识序列化成普通记录，
/// 供外围系统做检查点恢复（本库不规定任何文件格式）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmsgradState {
    /// 一阶矩估计（梯度的指数滑动平均）
    pub m: Tensor,
    /// 二阶矩估计（梯度平方的指数滑动平均）
    pub v: Tensor,
    /// 二阶矩的历史最大值，逐元素单调不减——AMSGrad修正项
    pub v_hat: Tensor,
    /// 时间步：该参数已执行的更新次数加一，从1起每次更新恰好加1
    pub t: usize,
}

/// AMSGrad 优化器
///
/// 在Adam的基础上以二阶矩的历史最大值做分母，保证自适应步长不随训练变大，
/// 从而修复Adam的不收敛反例：
/// - m = β1_eff * m + (1 - β1_eff) * g
/// - v = β2 * v + (1 - β2) * g²
/// - `v_hat` = max(`v_hat`, v)
/// - θ = θ - α * m / (√`v_hat` + ε)
///
/// 其中β1_eff在`beta_decay`开启时为`β1 / t`（t为更新前的步数），否则为β1。
///
/// # 使用示例
/// ```ignore
/// let mut optimizer = Amsgrad::new(0.001);
/// // 训练循环：参数与梯度由外部的自动微分引擎提供
/// let new_params = optimizer.step(&params, &grads)?;
/// ```
#[derive(Debug)]
pub struct Amsgrad {
    /// 学习率策略（常数或步数函数）
    lr: LearningRate,
    /// β1 (一阶矩衰减)
    beta1: f32,
    /// β2 (二阶矩衰减)
    beta2: f32,
    /// 数值稳定项
    epsilon: f32,
    /// 是否按`β1 / t`退火一阶矩衰减系数
    beta_decay: bool,
    /// 逐参数状态（按参数在参数集合中的位置索引，首次见到时惰性分配）
    states: HashMap<usize, AmsgradState>,
}

/// 校验衰减系数位于开区间(0, 1)
fn check_beta(name: &str, value: f32) -> Result<(), OptimizerError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(OptimizerError::ConfigurationError(format!(
            "超参数`{name}`须位于开区间(0, 1)，当前值为{value}"
        )))
    }
}

impl Amsgrad {
    /// 创建使用默认超参数的AMSGrad优化器：
    /// β1=0.9，β2=0.999，ε=1e-6，`beta_decay`关闭
    pub fn new(learning_rate: impl Into<LearningRate>) -> Self {
        Self {
            lr: learning_rate.into(),
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-6,
            beta_decay: false,
            states: HashMap::new(),
        }
    }

    /// 创建带完整配置的AMSGrad优化器
    ///
    /// # Errors
    /// 若`beta1`、`beta2`不在开区间(0, 1)内，或`epsilon`不为正，
    /// 返回[`OptimizerError::ConfigurationError`]
    pub fn new_with_config(
        learning_rate: impl Into<LearningRate>,
        beta1: f32,
        beta2: f32,
        epsilon: f32,
        beta_decay: bool,
    ) -> Result<Self, OptimizerError> {
        check_beta("beta1", beta1)?;
        check_beta("beta2", beta2)?;
        if epsilon <= 0.0 {
            return Err(OptimizerError::ConfigurationError(format!(
                "超参数`epsilon`须为正数，当前值为{epsilon}"
            )));
        }
        Ok(Self {
            lr: learning_rate.into(),
            beta1,
            beta2,
            epsilon,
            beta_decay,
            states: HashMap::new(),
        })
    }

    /// 对一批参数执行一次更新，返回与输入同序的新参数值。
    ///
    /// 首次见到的参数会被惰性分配初始状态；逐参数的更新彼此独立（这是
    /// 天然的并行边界），故并行分发到工作线程、汇合后统一提交。
    ///
    /// # Errors
    /// 参数与梯度数量不一致、或任一梯度与其参数形状不一致时，返回
    /// [`OptimizerError::InvalidArgument`]；此时所有参数与状态均保持原样。
    pub fn step(
        &mut self,
        parameters: &[Tensor],
        gradients: &[Tensor],
    ) -> Result<Vec<Tensor>, OptimizerError> {
        if parameters.len() != gradients.len() {
            return Err(OptimizerError::InvalidArgument(format!(
                "参数数量（{}）与梯度数量（{}）不一致",
                parameters.len(),
                gradients.len()
            )));
        }
        // 先整体校验形状，保证出错时不发生任何部分更新
        for (idx, (parameter, gradient)) in parameters.iter().zip(gradients).enumerate() {
            if !gradient.is_same_shape(parameter) {
                return Err(OptimizerError::InvalidArgument(format!(
                    "第{idx}个参数与其梯度的形状不一致：参数形状为{:?}，梯度形状为{:?}",
                    parameter.shape(),
                    gradient.shape()
                )));
            }
        }

        // 惰性初始化：参数首次出现时才为其分配状态
        for (idx, parameter) in parameters.iter().enumerate() {
            if !self.states.contains_key(&idx) {
                let state = self.init(parameter);
                self.states.insert(idx, state);
            }
        }

        // 并行执行逐参数更新
        let snapshots: Vec<&AmsgradState> = (0..parameters.len())
            .map(|idx| &self.states[&idx])
            .collect();
        let updated = parameters
            .par_iter()
            .zip(gradients.par_iter())
            .zip(snapshots.par_iter())
            .map(|((parameter, gradient), state)| self.apply(gradient, parameter, state))
            .collect::<Result<Vec<_>, _>>()?;

        // 全部成功后才写回状态并返回新参数
        let mut new_parameters = Vec::with_capacity(updated.len());
        for (idx, (parameter, state)) in updated.into_iter().enumerate() {
            self.states.insert(idx, state);
            new_parameters.push(parameter);
        }
        Ok(new_parameters)
    }

    /// 清空全部累积状态，所有参数回到“从未见过”的状态
    pub fn reset(&mut self) {
        self.states.clear();
    }

    /// 获取指定参数的优化器状态
    ///
    /// 用于调试和可视化优化过程
    pub fn state(&self, index: usize) -> Option<&AmsgradState> {
        self.states.get(&index)
    }

    /// 导出全部逐参数状态（按参数位置索引）
    ///
    /// 外围系统可据此做检查点：状态与参数一一对应，恢复后训练可精确续跑
    pub fn states(&self) -> &HashMap<usize, AmsgradState> {
        &self.states
    }

    /// 用一组逐参数状态覆盖当前状态（检查点恢复）
    pub fn load_states(&mut self, states: HashMap<usize, AmsgradState>) {
        self.states = states;
    }

    /// 获取学习率策略
    pub fn learning_rate(&self) -> &LearningRate {
        &self.lr
    }

    /// 设置学习率策略
    pub fn set_learning_rate(&mut self, learning_rate: impl Into<LearningRate>) {
        self.lr = learning_rate.into();
    }

    /// 获取β1（一阶矩衰减系数）
    pub const fn beta1(&self) -> f32 {
        self.beta1
    }

    /// 获取β2（二阶矩衰减系数）
    pub const fn beta2(&self) -> f32 {
        self.beta2
    }

    /// 获取ε（数值稳定项）
    pub const fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// 是否开启了一阶矩衰减系数的退火
    pub const fn beta_decay(&self) -> bool {
        self.beta_decay
    }
}

impl Optimizer for Amsgrad {
    type State = AmsgradState;

    fn init(&self, parameter: &Tensor) -> AmsgradState {
        AmsgradState {
            m: Tensor::zeros_like(parameter),
            v: Tensor::zeros_like(parameter),
            v_hat: Tensor::zeros_like(parameter),
            t: 1,
        }
    }

    fn apply(
        &self,
        gradient: &Tensor,
        parameter: &Tensor,
        state: &AmsgradState,
    ) -> Result<(Tensor, AmsgradState), OptimizerError> {
        if !gradient.is_same_shape(parameter) {
            return Err(OptimizerError::InvalidArgument(format!(
                "梯度与参数的形状不一致：参数形状为{:?}，梯度形状为{:?}",
                parameter.shape(),
                gradient.shape()
            )));
        }
        if !state.m.is_same_shape(parameter)
            || !state.v.is_same_shape(parameter)
            || !state.v_hat.is_same_shape(parameter)
        {
            return Err(OptimizerError::InvalidArgument(format!(
                "优化器状态与参数的形状不一致：参数形状为{:?}，状态形状为{:?}",
                parameter.shape(),
                state.m.shape()
            )));
        }

        // 学习率在该参数更新前的步数t上求值（调度函数在此被真正调用）
        let lr = self.lr.at(state.t);

        // beta_decay开启时按`β1 / t`退火动量系数（t为更新前的步数，首步即β1）。
        // 该公式忠实复刻原始实现，不做clamp。
        let b1 = if self.beta_decay {
            self.beta1 / state.t as f32
        } else {
            self.beta1
        };

        // 更新一阶矩：m' = β1_eff * m + (1 - β1_eff) * g
        let m = b1 * &state.m + (1.0 - b1) * gradient;

        // 更新二阶矩：v' = β2 * v + (1 - β2) * g²
        let v = self.beta2 * &state.v + (1.0 - self.beta2) * gradient.square();

        // AMSGrad修正：v_hat' = max(v_hat, v')，逐元素单调不减
        let v_hat = state.v_hat.maximum(&v);

        // 参数更新：θ' = θ - α * m' / (√v_hat' + ε)
        // ε兜底v_hat'恰好为零的情形（如首步遇到零梯度）
        let new_parameter = parameter - lr * &(&m / &(v_hat.sqrt() + self.epsilon));

        Ok((
            new_parameter,
            AmsgradState {
                m,
                v,
                v_hat,
                t: state.t + 1,
            },
        ))
    }
}
