// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example category_counts
// ...
// Total hands      22100
// Elapsed:         0.002s
// Hands/sec:       11050000
//
// Trail:           52 (0.24%)
// Sequence:        704 (3.19%)
// Pair:            3744 (16.94%)
// High Card:       17600 (79.64%)
// ```

use std::time::Instant;

use patti_eval::*;

fn main() {
    // Evaluate all 22,100 hands.
    let now = Instant::now();
    let mut counts = [0usize; 4];

    Deck::new().expect("standard deck").for_each(3, |cards| {
        let (category, _) = evaluate(cards).expect("3 cards hand");
        counts[category as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        let count = counts[category as usize];
        let label = format!("{category}:");
        let pct = 100.0 * count as f64 / total as f64;
        println!("{label:<16} {count} ({pct:.2}%)");
    }
}
