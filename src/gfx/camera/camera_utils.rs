use cgmath::Matrix4;

pub trait Camera: Sized {
    fn build_view_projection_matrix(&self) -> Matrix4<f32>;
}

/// Column-major array layout expected by WGSL `mat4x4<f32>`
pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    matrix4.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::SquareMatrix;

    #[test]
    fn test_matrix_columns_are_preserved() {
        let mut matrix = Matrix4::<f32>::identity();
        matrix.w.x = 5.0;

        let array = convert_matrix4_to_array(matrix);

        assert_eq!(array[3][0], 5.0);
        assert_eq!(array[0], [1.0, 0.0, 0.0, 0.0]);
    }
}
