use crate::tensor::Tensor;
use approx::AbsDiffEq;
use ndarray::Zip;
use std::cmp::PartialEq;

impl Tensor {
    /// 逐元素平方。二阶矩的更新项`(1 - β2) * g²`由此而来。
    pub fn square(&self) -> Tensor {
        Tensor {
            data: self.data.mapv(|x| x * x),
        }
    }

    /// 逐元素开平方
    pub fn sqrt(&self) -> Tensor {
        Tensor {
            data: self.data.mapv(f32::sqrt),
        }
    }

    /// 逐元素取两个张量中的较大值，返回新的张量。
    /// AMSGrad靠它维护二阶矩的历史最大值`v_hat`：`v_hat`逐元素单调不减，
    /// 这保证了分母（自适应步长）不会随训练变大。
    ///
    /// # Panics
    /// 若两个张量的形状不一致
    pub fn maximum(&self, other: &Tensor) -> Tensor {
        assert!(
            self.is_same_shape(other),
            "形状不一致，无法逐元素取最大值：第一个张量的形状为{:?}，第二个张量的形状为{:?}",
            self.shape(),
            other.shape()
        );
        Tensor {
            data: Zip::from(&self.data)
                .and(&other.data)
                .map_collect(|a, b| a.max(*b)),
        }
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

/// 浮点近似比较（用于数值场景的测试断言）：
/// 形状严格一致且所有元素逐个满足绝对误差界，才视为近似相等。
impl AbsDiffEq for Tensor {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.is_same_shape(other)
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| f32::abs_diff_eq(a, b, epsilon))
    }
}
