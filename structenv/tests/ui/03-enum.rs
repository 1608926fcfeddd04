use structenv::Record;

#[derive(Record)]
pub enum Mode {
    Fast,
    Safe,
}

fn main() {}
