use vergen::EmitBuilder;

// Emits build timestamp and git SHA for the startup log line.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .build_timestamp()
        .git_sha(false)
        .emit()?;

    Ok(())
}
