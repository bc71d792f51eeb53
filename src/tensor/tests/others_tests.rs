use crate::tensor::Tensor;
use approx::assert_abs_diff_eq;

#[test]
fn test_square() {
    let tensor = Tensor::new(&[-2., 0., 3.], &[3]);
    assert_eq!(tensor.square(), Tensor::new(&[4., 0., 9.], &[3]));
}

#[test]
fn test_sqrt() {
    let tensor = Tensor::new(&[0., 4., 9.], &[3]);
    assert_eq!(tensor.sqrt(), Tensor::new(&[0., 2., 3.], &[3]));
}

#[test]
fn test_maximum_is_elementwise() {
    let tensor1 = Tensor::new(&[1., 5., 3., 0.], &[2, 2]);
    let tensor2 = Tensor::new(&[2., 4., 3., -1.], &[2, 2]);
    let result = tensor1.maximum(&tensor2);
    assert_eq!(result, Tensor::new(&[2., 5., 3., 0.], &[2, 2]));
    // 原张量不受影响
    assert_eq!(tensor1, Tensor::new(&[1., 5., 3., 0.], &[2, 2]));
}

#[test]
#[should_panic(expected = "形状不一致，无法逐元素取最大值")]
fn test_maximum_panics_on_shape_mismatch() {
    let tensor1 = Tensor::new(&[1., 2.], &[2]);
    let tensor2 = Tensor::new(&[1., 2., 3.], &[3]);
    let _ = tensor1.maximum(&tensor2);
}

#[test]
fn test_partial_eq_requires_same_shape() {
    let a = Tensor::new(&[1., 2.], &[2]);
    let b = Tensor::new(&[1., 2.], &[1, 2]);
    assert_ne!(a, b);
    assert_eq!(a, Tensor::new(&[1., 2.], &[2]));
}

#[test]
fn test_abs_diff_eq_with_tolerance() {
    let a = Tensor::new(&[1., 2.], &[2]);
    let b = Tensor::new(&[1.000001, 1.999999], &[2]);
    assert_abs_diff_eq!(a, b, epsilon = 1e-4);
    // 形状不一致时不近似相等
    assert!(!approx::abs_diff_eq!(
        a,
        Tensor::new(&[1., 2.], &[1, 2]),
        epsilon = 1e-4
    ));
}
