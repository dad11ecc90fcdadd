//! Application entry point and dispatch.

use std::cmp::Ordering;
use std::io;

use anyhow::Result;
use tracing::debug;

use largeint_core::{LargeInt, PoolHandle};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "largeint", &mut io::stdout());
        return Ok(());
    }

    let pool = PoolHandle::new();

    if !config.quiet {
        // Constructor and deep-copy demonstration
        let p = LargeInt::from_u64(&pool, 10_023);
        let q = p.clone();
        println!("P: {p}");
        println!("Q: {q}");
        println!();
    }

    let (value1, value2) = read_values(&pool, config)?;
    debug!(
        digits1 = value1.digit_count(),
        digits2 = value2.digit_count(),
        "operands ready"
    );

    if !config.quiet {
        println!("value1: {value1}");
        println!("value2: {value2}");
        println!();
        match value1.cmp(&value2) {
            Ordering::Less => println!("value1 is less than value2"),
            Ordering::Equal => println!("value1 is equal to value2"),
            Ordering::Greater => println!("value1 is greater than value2"),
        }
        println!();
    }

    let sum = &value1 + &value2;
    let product = &value1 * &value2;
    println!("sum:     {sum}");
    println!("product: {product}");

    if !config.quiet {
        println!();
        let mut compound = value1.clone();
        compound += &value2;
        println!("value1 += value2: {compound}");
        let mut compound = value1.clone();
        compound *= &value2;
        println!("value1 *= value2: {compound}");
        println!();
        // Operands must be untouched by any of the above
        println!("value1: {value1}");
        println!("value2: {value2}");
    }

    if config.stats {
        let pool_ref = pool.lock();
        let stats = pool_ref.stats();
        println!();
        println!(
            "pool: {} hits, {} misses, {} releases, slab {} ({} free)",
            stats.hits,
            stats.misses,
            stats.releases,
            pool_ref.slab_len(),
            pool_ref.free_len()
        );
    }

    Ok(())
}

/// Obtain the two operands from the command line or stdin tokens.
fn read_values(pool: &PoolHandle, config: &AppConfig) -> Result<(LargeInt, LargeInt)> {
    match config.values.as_slice() {
        [first, second] => {
            let a = LargeInt::parse(pool, first)?;
            let b = LargeInt::parse(pool, second)?;
            Ok((a, b))
        }
        [_] => anyhow::bail!("expected two values, got one"),
        _ => {
            if !config.quiet {
                println!("Please enter two values:");
            }
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let a = LargeInt::read_from(pool, &mut input)?;
            let b = LargeInt::read_from(pool, &mut input)?;
            Ok((a, b))
        }
    }
}
