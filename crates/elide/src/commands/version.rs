pub fn run() -> anyhow::Result<()> {
    println!("elide {}", env!("CARGO_PKG_VERSION"));
    println!("Lossy text compression with LLM-backed reconstruction");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_output() {
        let result = run();
        assert!(result.is_ok());
    }
}
