use structenv::Record;

#[derive(Record)]
pub struct Config {
    #[env(flatten, skip)]
    pub inner: Inner,
}

#[derive(Record, Default)]
pub struct Inner {
    pub value: String,
}

fn main() {}
