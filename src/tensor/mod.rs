use ndarray::{Array, IxDyn};
use rand::distributions::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

mod ops {
    pub mod arith;
    pub mod others;
}

mod property;

#[cfg(test)]
pub mod tests;

/// 定义张量的结构体。其可以是标量、向量、矩阵或更高维度的数组。
/// 注：只要通Tensor初始化的都是张量（即使标量也是张量）；
/// 而通常意义上的数字（类型为usize、i32、f64等）就只是纯数（number），在这里不被认为是张量。
///
/// 本库作为优化器只需要逐元素运算，元素类型固定为f32。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tensor {
    data: Array<f32, IxDyn>,
}

impl Tensor {
    /// 创建一个张量，若为标量，`shape`可以是[]、[1]、[1,1]、[1,1,1]...
    /// 若为向量，`shape`可以是[n]、[1,n]、[n,1]；
    /// 若为矩阵，`shape`可以是[n,m]；
    /// 若为更高维度的数组，`shape`可以是[c,n,m,...]；
    /// 注：除了`data`长度为1且shape为`[]`的情况（标量），`data`的长度必须和`shape`中所有元素的乘积相等。
    ///
    /// # Panics
    /// 若`data`的长度与`shape`不符
    pub fn new(data: &[f32], shape: &[usize]) -> Tensor {
        let data = Array::from_shape_vec(IxDyn(shape), data.to_vec())
            .unwrap_or_else(|_| panic!("数据长度{}与形状{:?}不符", data.len(), shape));
        Tensor { data }
    }

    /// 创建一个指定形状的全零张量。
    pub fn zeros(shape: &[usize]) -> Tensor {
        Tensor {
            data: Array::zeros(IxDyn(shape)),
        }
    }

    /// 创建一个与`other`形状一致的全零张量。
    /// 优化器用它来初始化各项矩估计（一阶矩、二阶矩及其历史最大值）。
    pub fn zeros_like(other: &Tensor) -> Tensor {
        Self::zeros(other.shape())
    }

    /// 创建一个随机张量，其值在[min, max]的闭区间。形状约定同`new`。
    pub fn new_random(min: f32, max: f32, shape: &[usize]) -> Tensor {
        let mut rng = rand::thread_rng();
        let data = (0..shape.iter().product::<usize>())
            .map(|_| Uniform::from(min..=max).sample(&mut rng))
            .collect::<Vec<_>>();
        Tensor::new(&data, shape)
    }
}
