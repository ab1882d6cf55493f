//! Compiler flag selection shared with `bindings/rust/build.rs`.

#[path = "../bindings/rust/build_flags.rs"]
mod build_flags;

use build_flags::needs_utf8_flag;

#[test]
fn test_utf8_flag_follows_target_env() {
    assert!(needs_utf8_flag(Some("msvc")));
    assert!(!needs_utf8_flag(Some("gnu")));
    assert!(!needs_utf8_flag(Some("musl")));
    assert!(!needs_utf8_flag(Some("")));
    assert!(!needs_utf8_flag(None));
}
