//! Basic SAX encoding and comparison with sax-rs.
//!
//! Encodes two similar sine-based series and one square wave, then ranks
//! them by MINDIST against the first.
//!
//! Run with: cargo run --release --example basic_sax

use sax_rs::Sax;

fn main() {
    let n = 256;
    let word_size = 16;
    let alphabet_size = 8;

    let base: Vec<f64> = (0..n)
        .map(|i| (i as f64 * std::f64::consts::TAU / 64.0).sin())
        .collect();
    // Same shape with a little noise and an offset
    let similar: Vec<f64> = base
        .iter()
        .enumerate()
        .map(|(i, &x)| x + 3.0 + ((i as f64 * 7.3).sin() * 0.05))
        .collect();
    let square: Vec<f64> = (0..n)
        .map(|i| if (i / 32) % 2 == 0 { 1.0 } else { -1.0 })
        .collect();

    let mut sax = match Sax::with_params(word_size, alphabet_size, 1e-6) {
        Ok(sax) => sax,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return;
        }
    };

    let w_base = sax.to_letter_representation(&base);
    let w_similar = sax.to_letter_representation(&similar);
    let w_square = sax.to_letter_representation(&square);

    println!("Series length: {n}");
    println!("Word size: {word_size}, alphabet size: {alphabet_size}");
    println!("  base:    {}", w_base.symbols);
    println!("  similar: {}", w_similar.symbols);
    println!("  square:  {}", w_square.symbols);

    // Scale MINDIST back to the original resolution
    sax.set_scaling_factor(w_base.scaling_factor);
    println!("\nScaling factor: {:.4}", w_base.scaling_factor);

    for (name, word) in [("base", &w_base), ("similar", &w_similar), ("square", &w_square)] {
        match sax.compare_strings(w_base.as_bytes(), word.as_bytes()) {
            Ok(d) => println!("  MINDIST(base, {name}) = {d:.4}"),
            Err(err) => println!("  MINDIST(base, {name}) failed: {err}"),
        }
    }

    // Batch comparison, plus sliding-window words of the base series
    let candidates = [&w_similar.symbols, &w_square.symbols];
    let scores = sax.batch_compare(&candidates, &w_base.symbols);
    println!("\nBatch scores: {scores:?}");

    match sax.sliding_window(&base, Some(8), Some(0.5)) {
        Ok(sw) => {
            println!(
                "\nSliding window: {} windows of {} points",
                sw.window_indices.len(),
                sw.window_size
            );
            let words = sw.symbols.as_bytes().chunks(word_size);
            for (&(start, end), chunk) in sw.window_indices.iter().zip(words) {
                println!("  [{start:>3}, {end:>3}) {}", String::from_utf8_lossy(chunk));
            }
        }
        Err(err) => println!("sliding window failed: {err}"),
    }
}
