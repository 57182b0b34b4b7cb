///// BUFFER BINDING SLOTS /////////////////////////////////////////////////////////////////////////
/// GPU buffer binding slots, shared with the shaders as literal numbers.
///
/// `MeshPositions` is the vertex buffer slot (`set_vertex_buffer`); the other
/// two are uniform bindings in bind group 0.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferIndex {
    MeshPositions     = 0,
    LocalUniforms     = 1,
    PerFrameConstants = 2,
}

impl BufferIndex {
    pub const ALL: [BufferIndex; 3] = [
        BufferIndex::MeshPositions,
        BufferIndex::LocalUniforms,
        BufferIndex::PerFrameConstants,
    ];

    pub const fn slot(self) -> u32 {
        self as u32
    }
}

impl From<BufferIndex> for u32 {
    fn from(index: BufferIndex) -> u32 {
        index.slot()
    }
}
///// BUFFER BINDING SLOTS /////////////////////////////////////////////////////////////////////////

///// TEXTURE BINDING SLOTS ////////////////////////////////////////////////////////////////////////
/// Texture binding slots for one PBR material, bind group 1.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureIndex {
    Albedo     = 0,
    AO         = 1,
    Emissive   = 2,
    Metallic   = 3,
    Normal     = 4,
    Roughness  = 5,
    Irradiance = 6,  // cube map, fed by the skybox...
}

impl TextureIndex {
    pub const ALL: [TextureIndex; 7] = [
        TextureIndex::Albedo,
        TextureIndex::AO,
        TextureIndex::Emissive,
        TextureIndex::Metallic,
        TextureIndex::Normal,
        TextureIndex::Roughness,
        TextureIndex::Irradiance,
    ];

    pub const fn slot(self) -> u32 {
        self as u32
    }

    pub fn layout_entry(self) -> wgpu::BindGroupLayoutEntry {
        let view_dimension = match self {
            TextureIndex::Irradiance => wgpu::TextureViewDimension::Cube,
            _                        => wgpu::TextureViewDimension::D2,
        };

        wgpu::BindGroupLayoutEntry {
            binding   : self.slot(),
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty        : wgpu::BindingType::Texture {
                sample_type   : wgpu::TextureSampleType::Float { filterable: true },
                view_dimension,
                multisampled  : false,
            },
            count     : None,
        }
    }
}

impl From<TextureIndex> for u32 {
    fn from(index: TextureIndex) -> u32 {
        index.slot()
    }
}
///// TEXTURE BINDING SLOTS ////////////////////////////////////////////////////////////////////////

///// BIND GROUP LAYOUTS ///////////////////////////////////////////////////////////////////////////
/// Layout entries for the scene uniform slots in bind group 0.
///
/// Local uniforms only feed the vertex stage; per-frame constants are read by
/// both stages (the fragment stage needs the camera position for lighting).
pub fn scene_uniform_layout_entries() -> [wgpu::BindGroupLayoutEntry; 2] {
    [
        uniform_entry(BufferIndex::LocalUniforms.slot(), wgpu::ShaderStages::VERTEX),
        uniform_entry(
            BufferIndex::PerFrameConstants.slot(),
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        ),
    ]
}

/// Layout entries for all seven material textures in bind group 1.
/// Samplers are the renderer's business and live outside this contract.
pub fn material_texture_layout_entries() -> [wgpu::BindGroupLayoutEntry; 7] {
    [
        TextureIndex::Albedo.layout_entry(),
        TextureIndex::AO.layout_entry(),
        TextureIndex::Emissive.layout_entry(),
        TextureIndex::Metallic.layout_entry(),
        TextureIndex::Normal.layout_entry(),
        TextureIndex::Roughness.layout_entry(),
        TextureIndex::Irradiance.layout_entry(),
    ]
}

fn uniform_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty                : wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size  : None,
        },
        count: None,
    }
}
///// BIND GROUP LAYOUTS ///////////////////////////////////////////////////////////////////////////
