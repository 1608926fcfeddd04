use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

/// Where raw values come from.
///
/// [`parse`](crate::parse) reads the process environment through [`Env`];
/// [`parse_with`](crate::parse_with) accepts any other implementation, such as
/// a plain map in tests.
pub trait Source {
    /// Returns `None` if the variable is not set.
    fn get_var(&self, key: &str) -> Option<String>;
}

/// The process environment.
///
/// Values that aren't valid UTF-8 are converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct Env;

impl Source for Env {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<S: BuildHasher> Source for HashMap<String, String, S> {
    fn get_var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Source for BTreeMap<String, String> {
    fn get_var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn get_var(&self, key: &str) -> Option<String> {
        (**self).get_var(key)
    }
}
