use thiserror::Error;

/// Errors raised while mounting the particle field or bringing up the GPU.
#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("mount target `{0}` not found")]
    MissingMountTarget(String),
    #[error("host call failed: {0}")]
    Host(String),
    #[error("failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter found")]
    NoAdapter,
    #[error("failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
}
