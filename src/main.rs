//! Binary entrypoint.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    relation_chain::interface::cli::run().await
}

#[cfg(test)]
mod tests {
    #[test]
    fn main_returns_usage_error_under_test_harness_args() {
        // Under `cargo test`, env::args() does not match the CLI contract.
        let res = super::main();
        assert!(res.is_err());
    }
}
