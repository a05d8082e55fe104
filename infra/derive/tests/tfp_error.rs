#[test]
fn tfp_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/tfp_error_pass.rs");
}
