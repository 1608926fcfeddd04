/// Errors returned by [`parse`](crate::parse) and friends.
///
/// `NotAPointer` and `NotAStructure` are always returned. Every other variant
/// only surfaces when [`Options::errors_are_critical`](crate::Options) is set;
/// otherwise the offending field is zeroed and parsing carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("passed data is not a pointer")]
    NotAPointer,
    #[error("passed data is not a structure")]
    NotAStructure,
    #[error("invalid '{var}' environment variable data: '{value}'")]
    DebugFlag { var: &'static str, value: String },

    #[error("environment variable '{var}' doesn't contain boolean")]
    NotBool { var: String },

    #[error("environment variable '{var}' doesn't contain integer")]
    NotInt { var: String },
    #[error("environment variable '{var}' doesn't contain int8")]
    NotInt8 { var: String },
    #[error("environment variable '{var}' doesn't contain int16")]
    NotInt16 { var: String },
    #[error("environment variable '{var}' doesn't contain int32")]
    NotInt32 { var: String },
    #[error("environment variable '{var}' doesn't contain isize")]
    NotIsize { var: String },

    #[error("environment variable '{var}' doesn't contain unsigned integer")]
    NotUint { var: String },
    #[error("environment variable '{var}' doesn't contain uint8")]
    NotUint8 { var: String },
    #[error("environment variable '{var}' doesn't contain uint16")]
    NotUint16 { var: String },
    #[error("environment variable '{var}' doesn't contain uint32")]
    NotUint32 { var: String },
    #[error("environment variable '{var}' doesn't contain usize")]
    NotUsize { var: String },

    #[error("environment variable '{var}' doesn't contain floating point number")]
    NotFloat { var: String },

    #[error("element for environment variable '{var}' doesn't hold a writable scalar")]
    NotFillable { var: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
