use structenv::Record;

#[derive(Record)]
pub struct Endpoint(pub String, pub u16);

fn main() {}
