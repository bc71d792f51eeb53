/*
 * 张量四则运算的单元测试：逐元素运算要求形状严格一致，不支持广播。
 */

use crate::tensor::Tensor;

#[test]
fn test_add_with_or_without_ownership() {
    let tensor1 = Tensor::new(&[1., 2., 3.], &[3]);
    let tensor2 = Tensor::new(&[4., 5., 6.], &[3]);
    let expected = Tensor::new(&[5., 7., 9.], &[3]);

    // 不带引用的张量 + 不带引用的张量
    assert_eq!(tensor1.clone() + tensor2.clone(), expected);
    // 不带引用的张量 + 带引用的张量
    assert_eq!(tensor1.clone() + &tensor2, expected);
    // 带引用的张量 + 不带引用的张量
    assert_eq!(&tensor1 + tensor2.clone(), expected);
    // 带引用的张量 + 带引用的张量
    assert_eq!(&tensor1 + &tensor2, expected);

    // 验证原始张量仍然可用
    assert_eq!(tensor1, Tensor::new(&[1., 2., 3.], &[3]));
    assert_eq!(tensor2, Tensor::new(&[4., 5., 6.], &[3]));
}

#[test]
fn test_add_with_scalar() {
    let tensor = Tensor::new(&[1., 2., 3.], &[3]);
    let expected = Tensor::new(&[6., 7., 8.], &[3]);

    assert_eq!(tensor.clone() + 5., expected);
    assert_eq!(&tensor + 5., expected);
    assert_eq!(5. + tensor.clone(), expected);
    assert_eq!(5. + &tensor, expected);
}

#[test]
fn test_sub_tensors_and_scalar() {
    let tensor1 = Tensor::new(&[5., 7., 9.], &[3]);
    let tensor2 = Tensor::new(&[1., 2., 3.], &[3]);
    assert_eq!(&tensor1 - &tensor2, Tensor::new(&[4., 5., 6.], &[3]));
    assert_eq!(&tensor1 - 1., Tensor::new(&[4., 6., 8.], &[3]));
    assert_eq!(10. - &tensor1, Tensor::new(&[5., 3., 1.], &[3]));
}

#[test]
fn test_mul_tensors_and_scalar() {
    let tensor1 = Tensor::new(&[1., 2., 3., 4.], &[2, 2]);
    let tensor2 = Tensor::new(&[2., 3., 4., 5.], &[2, 2]);
    assert_eq!(&tensor1 * &tensor2, Tensor::new(&[2., 6., 12., 20.], &[2, 2]));
    assert_eq!(&tensor1 * 2., Tensor::new(&[2., 4., 6., 8.], &[2, 2]));
    assert_eq!(0.5 * &tensor1, Tensor::new(&[0.5, 1., 1.5, 2.], &[2, 2]));
}

#[test]
fn test_div_tensors_and_scalar() {
    let tensor1 = Tensor::new(&[2., 6., 12.], &[3]);
    let tensor2 = Tensor::new(&[2., 3., 4.], &[3]);
    assert_eq!(&tensor1 / &tensor2, Tensor::new(&[1., 2., 3.], &[3]));
    assert_eq!(&tensor1 / 2., Tensor::new(&[1., 3., 6.], &[3]));
}

#[test]
fn test_elementwise_ops_on_high_dim_tensors() {
    let shape = &[2, 1, 2];
    let tensor1 = Tensor::new(&[1., 2., 3., 4.], shape);
    let tensor2 = Tensor::new(&[4., 3., 2., 1.], shape);
    assert_eq!(&tensor1 + &tensor2, Tensor::new(&[5., 5., 5., 5.], shape));
    assert_eq!(&tensor1 * &tensor2, Tensor::new(&[4., 6., 6., 4.], shape));
}

#[test]
#[should_panic(expected = "形状不一致，无法逐元素相加")]
fn test_add_panics_on_shape_mismatch() {
    let tensor1 = Tensor::new(&[1., 2., 3.], &[3]);
    let tensor2 = Tensor::new(&[1., 2.], &[2]);
    let _ = &tensor1 + &tensor2;
}

#[test]
#[should_panic(expected = "形状不一致，无法逐元素相乘")]
fn test_mul_panics_even_when_broadcastable() {
    // [2, 2]与[2]在NumPy下可广播，这里一律拒绝
    let tensor1 = Tensor::new(&[1., 2., 3., 4.], &[2, 2]);
    let tensor2 = Tensor::new(&[1., 2.], &[2]);
    let _ = &tensor1 * &tensor2;
}
