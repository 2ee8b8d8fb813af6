use ndarray::Array2;

use crate::Error;

/// A second-order tensor in three dimensions, stored as a 3×3 array.
///
/// The shape is not encoded in the type; operations that need 3×3 operands
/// check it and fail with [`Error::ShapeMismatch`].
pub type Tensor3 = Array2<f64>;

pub(crate) fn zeros() -> Tensor3 {
    Array2::zeros((3, 3))
}

pub(crate) fn check_shape(operand: &'static str, tensor: &Tensor3) -> Result<(), Error> {
    match tensor.dim() {
        (3, 3) => Ok(()),
        (rows, cols) => Err(Error::ShapeMismatch {
            operand,
            rows,
            cols,
        }),
    }
}

/// Returns the Frobenius norm `sqrt(Σ Tᵢⱼ²)`.
#[must_use]
pub fn frobenius_norm(tensor: &Tensor3) -> f64 {
    tensor.iter().map(|x| x * x).sum::<f64>().sqrt()
}
