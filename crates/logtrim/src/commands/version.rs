pub fn run() -> anyhow::Result<()> {
    println!("logtrim {}", env!("CARGO_PKG_VERSION"));
    println!("Progress-log compaction for long-running projects");
    Ok(())
}
