use cgmath::{Matrix4, SquareMatrix};

/// Anything that can produce a view transform for uniform publishing.
pub trait Camera {
    fn view_matrix(&self) -> Matrix4<f32>;
}

/// A 4x4 float matrix in the column-major layout shaders expect.
///
/// 64 bytes, no padding, uploadable as-is.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MatrixUniform {
    pub columns: [[f32; 4]; 4],
}

impl Default for MatrixUniform {
    fn default() -> Self {
        Matrix4::identity().into()
    }
}

impl From<Matrix4<f32>> for MatrixUniform {
    fn from(matrix: Matrix4<f32>) -> Self {
        Self {
            columns: matrix.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn default_is_identity() {
        let uniform = MatrixUniform::default();
        for (i, column) in uniform.columns.iter().enumerate() {
            for (j, value) in column.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(*value, expected);
            }
        }
    }

    #[test]
    fn translation_lands_in_fourth_column() {
        let uniform: MatrixUniform =
            Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0)).into();
        assert_eq!(uniform.columns[3][0], 1.0);
        assert_eq!(uniform.columns[3][1], 2.0);
        assert_eq!(uniform.columns[3][2], 3.0);
        assert_eq!(uniform.columns[3][3], 1.0);
    }
}
