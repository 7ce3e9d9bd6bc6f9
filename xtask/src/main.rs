//! Custom cargo commands for lexibench.
//!
//! Usage:
//!   cargo xtask verify            - Run full verification suite
//!   cargo xtask test              - Run all tests
//!   cargo xtask check             - Quick check (check + test + clippy)
//!   cargo xtask bench             - Run criterion benchmarks
//!   cargo xtask fuzz [SECONDS]    - Fuzz every structure against BTreeSet

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGET: &str = "membership_differential";
const DEFAULT_FUZZ_SECONDS: u64 = 60;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => {
            let seconds = match args.next() {
                Some(s) => s
                    .parse()
                    .with_context(|| format!("Invalid fuzz duration {:?}", s))?,
                None => DEFAULT_FUZZ_SECONDS,
            };
            fuzz(seconds)?
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify           Run full verification suite (contracts + tests + clippy)
  test             Run all Rust tests
  check            Quick check (cargo check + test + clippy)
  bench            Run criterion benchmarks
  fuzz [SECONDS]   Run the membership fuzzer (default {}s, needs cargo-fuzz)
"#,
        DEFAULT_FUZZ_SECONDS
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("lexibench Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract call sites...");
    check_contract_calls()?;
    println!("✓ Contracts wired into builds\n");

    println!("[2/4] Running Rust tests (debug, contracts on)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running Rust tests (release)...");
    run_cargo(&["test", "--quiet", "--release"])?;
    println!("✓ Release tests passed\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench", "--bench", "lookup_bench"])
}

/// Run the differential fuzzer for a fixed time budget
fn fuzz(seconds: u64) -> Result<()> {
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", seconds);

    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", FUZZ_TARGET, "--", &max_time])
        .current_dir(&root)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("Fuzzer {} found a failure", FUZZ_TARGET);
    }

    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Each structure with an internal invariant must check it after building.
fn check_contract_calls() -> Result<()> {
    let root = project_root()?;
    let expected = [
        ("src/index/sorted.rs", "check_strictly_sorted"),
        ("src/index/hash.rs", "check_buckets_consistent"),
        ("src/harness/measure.rs", "check_size_consistent"),
        ("src/types.rs", "check_fraction"),
    ];

    for (file, contract) in expected {
        let source = std::fs::read_to_string(root.join(file))
            .with_context(|| format!("Failed to read {}", file))?;
        if !source.contains(&format!("{}(", contract)) {
            bail!(
                "{} no longer calls {}. Someone may have removed a contract check!",
                file,
                contract
            );
        }
    }

    Ok(())
}
