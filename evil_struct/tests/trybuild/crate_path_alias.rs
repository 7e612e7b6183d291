//! `crate = "..."` points generated code at a renamed dependency.

use evil_struct as records;
use records::{EvilStruct, Schema, mapping};

#[derive(Clone, Debug, PartialEq, EvilStruct)]
#[evil_struct(crate = "records")]
struct Settings {
    #[attribute(default = String::from("localhost"))]
    host: String,
    port: Option<i64>,
}

fn main() {
    let settings = Settings::load(mapping! { "port" => 8080 });
    assert!(settings.is_ok_and(|s| s.host == "localhost" && s.port == Some(8080)));
}
