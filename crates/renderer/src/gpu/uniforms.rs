use bytemuck::{Pod, Zeroable};

/// Uniform block backing the fragment shader's `u_Color`.
///
/// The layout must match the std140 block declared in the fragment shader: a
/// single vec4 whose first three components carry the tint and whose fourth
/// slot is always written as zero.
#[repr(C, align(16))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TintUniforms {
    u_color: [f32; 4],
}

unsafe impl Zeroable for TintUniforms {}
unsafe impl Pod for TintUniforms {}

impl TintUniforms {
    /// Starts at pure red, the first color of the cycle.
    pub fn new() -> Self {
        let mut uniforms = Self { u_color: [0.0; 4] };
        uniforms.set_color([1.0, 0.0, 0.0]);
        uniforms
    }

    pub fn set_color(&mut self, rgb: [f32; 3]) {
        self.u_color = [rgb[0], rgb[1], rgb[2], 0.0];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_block_is_a_single_vec4() {
        assert_eq!(std::mem::size_of::<TintUniforms>(), 16);
    }

    #[test]
    fn alpha_slot_stays_zero() {
        let mut uniforms = TintUniforms::new();
        uniforms.set_color([0.25, 0.5, 0.75]);
        assert_eq!(
            bytemuck::bytes_of(&uniforms),
            bytemuck::bytes_of(&[0.25f32, 0.5, 0.75, 0.0])
        );
    }
}
