//! Compile-time checks for `#[derive(EvilStruct)]`.

#[test]
fn derive_compiles_with_a_crate_alias() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/crate_path_alias.rs");
}
