use crate::{Error, Options, Result, Source, fill::parse_bool, parse::DEBUG_ENV_VAR};

/// Emits a `tracing::debug!` event only when the debug flag of the current
/// parse is on.
macro_rules! debug_trace {
    ($debug:expr, $($arg:tt)+) => {
        if $debug {
            ::tracing::debug!($($arg)+);
        }
    };
}

/// State for a single parse call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Context {
    pub options: Options,
    pub debug: bool,
}

impl Context {
    /// Reads the debug flag from `source`.
    ///
    /// An invalid flag is always reported and leaves tracing off; it's only an
    /// error when errors are critical.
    pub fn new<S: Source + ?Sized>(options: Options, source: &S) -> Result<Self> {
        let mut context = Self {
            options,
            debug: false,
        };

        if let Some(raw) = source.get_var(DEBUG_ENV_VAR) {
            match parse_bool(&raw) {
                Some(debug) => {
                    context.debug = debug;
                    debug_trace!(debug, "debug mode activated");
                }
                None => {
                    tracing::warn!(
                        var = DEBUG_ENV_VAR,
                        value = %raw,
                        "invalid debug flag value, tracing stays off"
                    );
                    if options.errors_are_critical {
                        return Err(Error::DebugFlag {
                            var: DEBUG_ENV_VAR,
                            value: raw,
                        });
                    }
                }
            }
        }

        Ok(context)
    }

    pub fn critical(&self) -> bool {
        self.options.errors_are_critical
    }
}
