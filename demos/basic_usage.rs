// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_adder::numeric::{add_strings, compare_magnitude, validate};
use decimal_adder::prelude::*;
use std::io::Cursor;
use std::sync::Arc;

fn main() {
    println!("=== Decimal Adder Example ===\n");

    // Floating point gets this wrong
    println!("f64:     0.1 + 0.2 = {}", 0.1f64 + 0.2f64);
    println!("strings: 0.1 + 0.2 = {}\n", add_strings("0.1", "0.2"));

    // Validation with reasons
    println!("Validating literals...");
    for token in ["12.5", "-0.5", ".5", "5.", "12.5.3", "+3", "abc"] {
        match validate(token) {
            Ok(()) => println!("  {:>8}  ok", token),
            Err(e) => println!("  {:>8}  {}", token, e),
        }
    }

    // Magnitude comparison
    println!("\nComparing magnitudes...");
    for (a, b) in [("100", "99.999"), ("1.5", "1.50"), ("0.05", "0.5")] {
        println!("  {} vs {}: {:?}", a, b, compare_magnitude(a, b));
    }

    // Value type arithmetic
    println!("\n=== DecimalLiteral ===");
    let huge: DecimalLiteral = "99999999999999999999999999999999.99".parse().unwrap();
    let cent: DecimalLiteral = "0.01".parse().unwrap();
    println!("  {} + {} = {}", huge, cent, &huge + &cent);
    println!("  {} - {} = {}", cent, huge, &cent - &huge);

    let mut values: Vec<DecimalLiteral> = ["3.25", "-1.75", "0", "-10", "2.5"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    values.sort();
    println!("  sorted: {:?}", values);
    println!("  total:  {}", values.iter().sum::<DecimalLiteral>());

    // Driver over an in-memory file
    println!("\n=== Pair Runner ===");
    let input = "1.5 2.3\n-1.5 2.3\n10 -10\nabc 1\n0.999 0.001\n-3.25 -1.75\n100.1 99.9\n";
    let runner = PairRunner::new(Arc::new(WriterSink::stdout()));
    let summary = runner.run(Cursor::new(input)).unwrap();

    println!(
        "\nPairs: {}  summed: {}  rejected: {}",
        summary.pairs, summary.summed, summary.rejected
    );
}
