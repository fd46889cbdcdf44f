//! Tree Labeling
//!
//! This example labels a small tree in pre-order with both labelers and
//! prints every stage.
//!
//! Key concepts:
//! - Trees written in compact notation
//! - Direct labeling with an explicit counter
//! - Composed labeling through unit, bind and advance
//!
//! Run with: RUST_LOG=debug cargo run --example label_tree

use treelabel::labeling::{label_with, LabelOptions, Strategy};
use treelabel::notation;

const SAMPLE: &str = "a(b, c(d(e, f), g))";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Tree Labeling Example ===\n");

    let tree = notation::parse(SAMPLE)?;
    println!("Input tree {SAMPLE}:");
    print!("{}", tree.show());

    let direct = label_with(tree.clone(), &LabelOptions::new().using(Strategy::Direct))?;
    println!("\nLabeled directly:");
    print!("{}", direct.show());

    let composed = label_with(tree, &LabelOptions::new().using(Strategy::Composed))?;
    println!("\nLabeled through the state computation:");
    print!("{}", composed.show());

    println!("\nBoth labelers agree: {}", direct == composed);
    println!("As JSON: {}", serde_json::to_string(&composed)?);

    println!("\n=== Example Complete ===");
    Ok(())
}
