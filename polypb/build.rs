use std::io::Result;

fn main() -> Result<()> {
    #[cfg(feature = "generate_proto")]
    prost_build::Config::new()
        .out_dir("src/proto/")
        .compile_protos(&["src/polypb.proto"], &["src/"])?;
    Ok(())
}
