//! Regenerates the committed prost code for the bytebridge request envelope.
//!
//! Run from the workspace root:
//!
//! ```sh
//! cargo run --bin bytebridge_proto_gen
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const PROTO_ROOT: &str = "schemas/proto";
const PROTO_FILES: &[&str] = &["bytebridge/api.proto"];
const OUT_DIR: &str = "rust/bytebridge/src/protocol";

fn workspace_root() -> PathBuf {
    // CARGO_MANIFEST_DIR is rust/bytebridge_proto_gen.
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() -> Result<()> {
    let root = workspace_root();
    let proto_root = root.join(PROTO_ROOT);
    let protos: Vec<_> = PROTO_FILES.iter().map(|p| proto_root.join(p)).collect();
    let out_dir = root.join(OUT_DIR);

    prost_build::Config::new()
        .out_dir(&out_dir)
        .bytes(["."])
        .compile_protos(&protos, &[&proto_root])
        .with_context(|| format!("failed to compile {protos:?}"))?;

    println!("Wrote {}", out_dir.join("bytebridge.rs").display());
    Ok(())
}
