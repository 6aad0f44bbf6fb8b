//! Build script for compiling the Voxview protocol definition
//!
//! Uses tonic-prost-build to generate Rust stubs from the voxview.v1 proto
//! contract. Stub generation follows the crate's `client`/`server` features
//! so downstream crates only pay for the side they use.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Tell Cargo to rerun this build script if the proto file changes
    println!("cargo:rerun-if-changed=src/proto/voxview.proto");

    // Source a protoc binary when one isn't provided by the environment, so
    // stub generation works on hosts without a system-installed compiler.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(protoc) = protoc_bin_vendored::protoc_bin_path() {
            // SAFETY: build scripts are single-threaded at this point.
            unsafe {
                std::env::set_var("PROTOC", protoc);
            }
        }
    }

    tonic_prost_build::configure()
        .build_client(std::env::var_os("CARGO_FEATURE_CLIENT").is_some())
        .build_server(std::env::var_os("CARGO_FEATURE_SERVER").is_some())
        .compile_protos(&["src/proto/voxview.proto"], &["src/proto"])?;

    Ok(())
}
