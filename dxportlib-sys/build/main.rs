use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=DXPORTLIB_LIB_DIR");

    // Without `link` the table is resolved at runtime and nothing needs linking.
    if env::var_os("CARGO_FEATURE_LINK").is_none() {
        return;
    }

    if let Err(err) = pkg_config::probe_library("DxPortLib") {
        println!("cargo:warning=cannot find DxPortLib using pkg-config ({err}), linking by name");
        if let Some(lib_dir) = env::var_os("DXPORTLIB_LIB_DIR") {
            println!(
                "cargo:rustc-link-search=native={}",
                lib_dir.to_string_lossy()
            );
        }
        println!("cargo:rustc-link-lib=DxPortLib");
    }
}
