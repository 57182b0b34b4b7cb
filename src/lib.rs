// SealShaderTypes: the layout contract between host code and shader code.
//
// Host side and device side are compiled independently and meet on raw bytes,
// so everything here is fixed: binding indices, field order, field offsets.
// Changing any numeric value or reordering any field is a breaking change.

pub mod bindings;
pub mod uniforms;
pub mod vertex;

// ---> Device-side half of the contract:
// Prepend this to every scene/skybox shader source before compiling it, the
// same way a C header would be included. The structs and binding slots in
// here must stay in lockstep with the Rust types above (checked in tests).
pub const CONTRACT_WGSL: &str = include_str!("contract.wgsl");
