use bytemuck::Pod;
use bytemuck::Zeroable;


// Four interpretations of the same attribute-index space. A mesh picks exactly
// one variant per draw call; under that variant every index below keeps the
// same meaning in the vertex buffer layout and in the shader input struct.

///// VERTEX ATTRIBUTE VARIANTS ////////////////////////////////////////////////////////////////////
/// Full format: position + normal + tangent + texcoord.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeVNTT {
    Position = 0,
    Normal   = 1,
    Tangent  = 2,
    Texcoord = 3,
}

/// Reduced format without the tangent (no normal mapping).
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeVNT {
    Position = 0,
    Normal   = 1,
    Texcoord = 2,
}

/// Minimal textured format.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeVT {
    Position = 0,
    Texcoord = 1,
}

/// Lit, untextured format.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeVN {
    Position = 0,
    Normal   = 1,
}

impl VertexAttributeVNTT {
    pub const ALL: [Self; 4] = [Self::Position, Self::Normal, Self::Tangent, Self::Texcoord];

    pub const fn location(self) -> u32 {
        self as u32
    }
}

impl VertexAttributeVNT {
    pub const ALL: [Self; 3] = [Self::Position, Self::Normal, Self::Texcoord];

    pub const fn location(self) -> u32 {
        self as u32
    }
}

impl VertexAttributeVT {
    pub const ALL: [Self; 2] = [Self::Position, Self::Texcoord];

    pub const fn location(self) -> u32 {
        self as u32
    }
}

impl VertexAttributeVN {
    pub const ALL: [Self; 2] = [Self::Position, Self::Normal];

    pub const fn location(self) -> u32 {
        self as u32
    }
}
///// VERTEX ATTRIBUTE VARIANTS ////////////////////////////////////////////////////////////////////

///// VNTT VERTEX STRUCTURE ////////////////////////////////////////////////////////////////////////
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct VertexVNTT {
    pub position: [f32; 3],  // @location(0)
    pub normal  : [f32; 3],  // @location(1)
    pub tangent : [f32; 3],  // @location(2)
    pub texcoord: [f32; 2],  // @location(3)
}

impl VertexVNTT {
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<VertexVNTT>() as wgpu::BufferAddress,
            step_mode   : wgpu::VertexStepMode::Vertex,
            attributes  : &[
                wgpu::VertexAttribute { // Position
                    offset         : 0,
                    shader_location: VertexAttributeVNTT::Position as u32,
                    format         : wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute { // Normal
                    offset         : 12,  // 0 + 4Bytes x 3
                    shader_location: VertexAttributeVNTT::Normal as u32,
                    format         : wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute { // Tangent
                    offset         : 24,  // 12 + 4Bytes x 3
                    shader_location: VertexAttributeVNTT::Tangent as u32,
                    format         : wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute { // Texture Coordinates
                    offset         : 36,  // 24 + 4Bytes x 3
                    shader_location: VertexAttributeVNTT::Texcoord as u32,
                    format         : wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}
///// VNTT VERTEX STRUCTURE ////////////////////////////////////////////////////////////////////////

///// VNT VERTEX STRUCTURE /////////////////////////////////////////////////////////////////////////
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct VertexVNT {
    pub position: [f32; 3],  // @location(0)
    pub normal  : [f32; 3],  // @location(1)
    pub texcoord: [f32; 2],  // @location(2)
}

impl VertexVNT {
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<VertexVNT>() as wgpu::BufferAddress,
            step_mode   : wgpu::VertexStepMode::Vertex,
            attributes  : &[
                wgpu::VertexAttribute { // Position
                    offset         : 0,
                    shader_location: VertexAttributeVNT::Position as u32,
                    format         : wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute { // Normal
                    offset         : 12,  // 0 + 4Bytes x 3
                    shader_location: VertexAttributeVNT::Normal as u32,
                    format         : wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute { // Texture Coordinates
                    offset         : 24,  // 12 + 4Bytes x 3
                    shader_location: VertexAttributeVNT::Texcoord as u32,
                    format         : wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}
///// VNT VERTEX STRUCTURE /////////////////////////////////////////////////////////////////////////

///// VT VERTEX STRUCTURE //////////////////////////////////////////////////////////////////////////
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct VertexVT {
    pub position: [f32; 3],  // @location(0)
    pub texcoord: [f32; 2],  // @location(1)
}

impl VertexVT {
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<VertexVT>() as wgpu::BufferAddress,
            step_mode   : wgpu::VertexStepMode::Vertex,
            attributes  : &[
                wgpu::VertexAttribute { // Position
                    offset         : 0,
                    shader_location: VertexAttributeVT::Position as u32,
                    format         : wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute { // Texture Coordinates
                    offset         : 12,  // 0 + 4Bytes x 3
                    shader_location: VertexAttributeVT::Texcoord as u32,
                    format         : wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}
///// VT VERTEX STRUCTURE //////////////////////////////////////////////////////////////////////////

///// VN VERTEX STRUCTURE //////////////////////////////////////////////////////////////////////////
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct VertexVN {
    pub position: [f32; 3],  // @location(0)
    pub normal  : [f32; 3],  // @location(1)
}

impl VertexVN {
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<VertexVN>() as wgpu::BufferAddress,
            step_mode   : wgpu::VertexStepMode::Vertex,
            attributes  : &[
                wgpu::VertexAttribute { // Position
                    offset         : 0,
                    shader_location: VertexAttributeVN::Position as u32,
                    format         : wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute { // Normal
                    offset         : 12,  // 0 + 4Bytes x 3
                    shader_location: VertexAttributeVN::Normal as u32,
                    format         : wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}
///// VN VERTEX STRUCTURE //////////////////////////////////////////////////////////////////////////
