/// Whether the C compiler for `target_env` needs `-utf-8` to read parser.c.
///
/// `target_env` is Cargo's `CARGO_CFG_TARGET_ENV` for the crate being built,
/// not the environment the build script itself was compiled for.
pub fn needs_utf8_flag(target_env: Option<&str>) -> bool {
    target_env == Some("msvc")
}
