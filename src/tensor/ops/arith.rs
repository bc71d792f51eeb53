/*
 * 张量的四则运算：实现了两个张量“逐元素”（或张量与纯数）加减乘除的运算，
 * 并返回一个新的张量。与常见张量库不同，这里的两个张量操作数必须形状严格
 * 一致——本库作为优化器，梯度、状态与参数三者形状必然相同，隐式广播只会
 * 掩盖外围系统的编程错误，所以干脆不支持。
 */

use crate::tensor::Tensor;
use std::ops::{Add, Div, Mul, Sub};

/// 两个张量逐元素运算前的形状校验：要求形状严格一致，不做广播。
///
/// # Panics
/// 若两个张量的形状不一致
fn check_same_shape(op_name: &str, lhs: &Tensor, rhs: &Tensor) {
    assert!(
        lhs.is_same_shape(rhs),
        "形状不一致，无法逐元素{}：第一个张量的形状为{:?}，第二个张量的形状为{:?}",
        op_name,
        lhs.shape(),
        rhs.shape()
    );
}

/// 为某个四则运算批量实现全部操作数组合：
/// （不）带引用的张量 ⊕（不）带引用的张量、（不）带引用的张量 ⊕ f32、
/// f32 ⊕（不）带引用的张量。
macro_rules! impl_elementwise_op {
    ($trait_name:ident, $method:ident, $op:tt, $op_name:literal) => {
        impl $trait_name for Tensor {
            type Output = Tensor;

            fn $method(self, rhs: Tensor) -> Tensor {
                check_same_shape($op_name, &self, &rhs);
                Tensor {
                    data: &self.data $op &rhs.data,
                }
            }
        }

        impl<'a> $trait_name<&'a Tensor> for Tensor {
            type Output = Tensor;

            fn $method(self, rhs: &'a Tensor) -> Tensor {
                check_same_shape($op_name, &self, rhs);
                Tensor {
                    data: &self.data $op &rhs.data,
                }
            }
        }

        impl $trait_name<Tensor> for &Tensor {
            type Output = Tensor;

            fn $method(self, rhs: Tensor) -> Tensor {
                check_same_shape($op_name, self, &rhs);
                Tensor {
                    data: &self.data $op &rhs.data,
                }
            }
        }

        impl<'a, 'b> $trait_name<&'b Tensor> for &'a Tensor {
            type Output = Tensor;

            fn $method(self, rhs: &'b Tensor) -> Tensor {
                check_same_shape($op_name, self, rhs);
                Tensor {
                    data: &self.data $op &rhs.data,
                }
            }
        }

        impl $trait_name<f32> for Tensor {
            type Output = Tensor;

            fn $method(self, scalar: f32) -> Tensor {
                Tensor {
                    data: &self.data $op scalar,
                }
            }
        }

        impl $trait_name<f32> for &Tensor {
            type Output = Tensor;

            fn $method(self, scalar: f32) -> Tensor {
                Tensor {
                    data: &self.data $op scalar,
                }
            }
        }

        impl $trait_name<Tensor> for f32 {
            type Output = Tensor;

            fn $method(self, tensor: Tensor) -> Tensor {
                Tensor {
                    data: self $op &tensor.data,
                }
            }
        }

        impl<'a> $trait_name<&'a Tensor> for f32 {
            type Output = Tensor;

            fn $method(self, tensor: &'a Tensor) -> Tensor {
                Tensor {
                    data: self $op &tensor.data,
                }
            }
        }
    };
}

impl_elementwise_op!(Add, add, +, "相加");
impl_elementwise_op!(Sub, sub, -, "相减");
impl_elementwise_op!(Mul, mul, *, "相乘");
impl_elementwise_op!(Div, div, /, "相除");
