mod build_flags;

fn main() {
    // Generated sources live under src/:
    //   src/parser.c
    //   src/grammar.json
    //   src/node-types.json
    //   src/tree_sitter/parser.h
    let src_dir = std::path::Path::new("src");
    let parser_path = src_dir.join("parser.c");

    println!("cargo:rerun-if-changed={}", parser_path.display());
    println!(
        "cargo:rerun-if-changed={}",
        src_dir.join("tree_sitter").join("parser.h").display()
    );
    println!("cargo:rerun-if-changed=bindings/rust/build_flags.rs");

    let mut build = cc::Build::new();

    build
        .include(src_dir)
        .warnings(false)
        .flag_if_supported("-std=c11")
        .flag_if_supported("-Wno-unused-parameter")
        .flag_if_supported("-Wno-unused-but-set-variable")
        .flag_if_supported("-Wno-trigraphs");

    let target_env = std::env::var("CARGO_CFG_TARGET_ENV").ok();
    if build_flags::needs_utf8_flag(target_env.as_deref()) {
        build.flag("-utf-8");
    }

    build.file(&parser_path);
    build.compile("tree_sitter_wfg");
}
