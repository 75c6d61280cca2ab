#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Can not parse compare op from str '{}'.", _0)]
    CompareOpParseFailure(String),
    #[fail(display = "Can not parse blend factor from str '{}'.", _0)]
    BlendFactorParseFailure(String),
    #[fail(display = "Can not parse blend op from str '{}'.", _0)]
    BlendOpParseFailure(String),
    #[fail(display = "Can not parse cull mode from str '{}'.", _0)]
    CullModeParseFailure(String),
    #[fail(display = "Can not parse front face from str '{}'.", _0)]
    FrontFaceParseFailure(String),
    #[fail(display = "Color write mask 0x{:02X} has bits outside of RGBA.", _0)]
    ColorWriteMaskInvalid(u8),
    #[fail(display = "Window surface is invalid.")]
    WindowInvalid,
    #[fail(display = "Another device is still alive.")]
    DeviceAlreadyExists,
    #[fail(display = "OpenGL implementation doesn\'t support {}.", _0)]
    Requirement(String),
    #[fail(display = "Backend: {}", _0)]
    Backend(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;
