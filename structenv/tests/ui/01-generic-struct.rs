use structenv::Record;

#[derive(Record)]
pub struct Config<T> {
    pub value: T,
}

fn main() {}
