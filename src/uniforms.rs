use bytemuck::Pod;
use bytemuck::Zeroable;
use nalgebra_glm as glm;

use std::mem::offset_of;
use std::mem::size_of;


// Uniform block layouts follow WGSL rules: vec3 sits in a 16-byte slot,
// mat3x3 is three vec4-padded columns (48 bytes), mat4x4 is 64 bytes.
// bytemuck's Pod derive rejects implicit padding, so every alignment hole
// is an explicit named field. All matrices are column-major.

///// OBJECT TRANSFORMS ////////////////////////////////////////////////////////////////////////////
/// Per-object uniforms, bound at `BufferIndex::LocalUniforms`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ObjectTransforms {
    pub model_view   : [[f32; 4]; 4],  // 64 Bytes, offset 0
    pub normal_matrix: [[f32; 4]; 3],  // 48 Bytes, offset 64 (3 columns, each padded to a vec4)
    pub _pad1        : [[f32; 4]; 4],  // reserved,  offset 112
    pub _pad2        : [[f32; 4]; 4],  // reserved,  offset 176
    pub _pad3        : [[f32; 4]; 4],  // reserved,  offset 240
}

impl ObjectTransforms {
    pub fn from_model_view(model_view: &glm::Mat4) -> Self {
        Self {
            model_view   : (*model_view).into(),
            normal_matrix: calc_normal_matrix(model_view),
            _pad1        : [[0.0; 4]; 4],
            _pad2        : [[0.0; 4]; 4],
            _pad3        : [[0.0; 4]; 4],
        }
    }
}
///// OBJECT TRANSFORMS ////////////////////////////////////////////////////////////////////////////

///// SKYBOX TRANSFORMS ////////////////////////////////////////////////////////////////////////////
/// Skybox uniforms. The skybox pipeline reuses the `LocalUniforms` slot for
/// this block; it never binds `ObjectTransforms` in the same draw.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SkyboxTransforms {
    pub model_view_projection: [[f32; 4]; 4],  // 64 Bytes, offset 0
}

impl SkyboxTransforms {
    pub fn from_model_view_projection(mvp: &glm::Mat4) -> Self {
        Self {
            model_view_projection: (*mvp).into(),
        }
    }
}
///// SKYBOX TRANSFORMS ////////////////////////////////////////////////////////////////////////////

///// PER-FRAME CONSTANTS //////////////////////////////////////////////////////////////////////////
/// Frame-wide uniforms, bound at `BufferIndex::PerFrameConstants`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PerFrameConstants {
    pub projection     : [[f32; 4]; 4],  // 64 Bytes, offset 0
    pub camera_position: [f32; 3],       // 12 Bytes, offset 64
    pub _pad0          : f32,            // tail of the camera_position vec3 slot
    pub _pad1          : [f32; 4],       // reserved vec3 slot, offset 80
    pub _pad2          : [f32; 4],       // reserved vec3 slot, offset 96
    pub _pad3          : [f32; 4],       // reserved vec3 slot, offset 112
    pub _pad4          : [[f32; 4]; 4],  // reserved, offset 128
    pub _pad5          : [[f32; 4]; 4],  // reserved, offset 192
}

impl PerFrameConstants {
    pub fn new(projection: &glm::Mat4, camera_position: &glm::Vec3) -> Self {
        Self {
            projection     : (*projection).into(),
            camera_position: (*camera_position).into(),
            ..Self::zeroed()
        }
    }
}
///// PER-FRAME CONSTANTS //////////////////////////////////////////////////////////////////////////

/// Inverse-transpose of the model-view upper 3x3, padded to vec4 columns.
pub fn calc_normal_matrix(model_view: &glm::Mat4) -> [[f32; 4]; 3] {
    let model_3x3     = model_view.fixed_view::<3, 3>(0, 0).into_owned();
    let normal_matrix = glm::transpose(&glm::inverse(&model_3x3));

    // ---> Column-major, each column padded to a vec4:
    [
        [normal_matrix[(0, 0)], normal_matrix[(1, 0)], normal_matrix[(2, 0)], 0.0],
        [normal_matrix[(0, 1)], normal_matrix[(1, 1)], normal_matrix[(2, 1)], 0.0],
        [normal_matrix[(0, 2)], normal_matrix[(1, 2)], normal_matrix[(2, 2)], 0.0],
    ]
}

// ---> Static safety net against silent layout drift. A mismatch here is a
//      compile error, not a corrupted frame.
const _: () = {
    assert!(size_of::<ObjectTransforms>() == 304);
    assert!(offset_of!(ObjectTransforms, model_view) == 0);
    assert!(offset_of!(ObjectTransforms, normal_matrix) == 64);
    assert!(offset_of!(ObjectTransforms, _pad1) == 112);
    assert!(offset_of!(ObjectTransforms, _pad2) == 176);
    assert!(offset_of!(ObjectTransforms, _pad3) == 240);

    assert!(size_of::<SkyboxTransforms>() == 64);
    assert!(offset_of!(SkyboxTransforms, model_view_projection) == 0);

    assert!(size_of::<PerFrameConstants>() == 256);
    assert!(offset_of!(PerFrameConstants, projection) == 0);
    assert!(offset_of!(PerFrameConstants, camera_position) == 64);
    assert!(offset_of!(PerFrameConstants, _pad1) == 80);
    assert!(offset_of!(PerFrameConstants, _pad2) == 96);
    assert!(offset_of!(PerFrameConstants, _pad3) == 112);
    assert!(offset_of!(PerFrameConstants, _pad4) == 128);
    assert!(offset_of!(PerFrameConstants, _pad5) == 192);
};
