//! Uniform Pruning Examples
//!
//! This example demonstrates the pruning primitives and the builder API:
//! - Pruning a short trace with the free function
//! - Inspecting a masked view without copying the data
//! - Builder usage with a search-space cap
//! - Tie-breaking between equally uniform candidates
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use uniprune::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), PruneError> {
    println!("{}", "=".repeat(80));
    println!("Uniform Pruning - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_free_function()?;
    example_2_masked_view()?;
    example_3_builder()?;
    example_4_search_cap();
    example_5_tie_break()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Free Function
/// Keeps three samples of a clustered trace
fn example_1_free_function() -> Result<(), PruneError> {
    println!("Example 1: Free Function");
    println!("{}", "-".repeat(80));

    let trace = vec![1.0, 4.5, 4.6, 5.0, 5.1, 5.2, 6.0, 9.0];
    let kept = prune_uniform_exhaustive(&trace, 3)?;

    println!("input:  {:?}", trace);
    println!("kept:   {:?}", kept);
    println!("score:  {}", score(&kept));

    /* Expected Output:
    input:  [1.0, 4.5, 4.6, 5.0, 5.1, 5.2, 6.0, 9.0]
    kept:   [1.0, 5.0, 9.0]
    score:  0
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Masked View
/// Views share the input and skip removed positions lazily
fn example_2_masked_view() -> Result<(), PruneError> {
    println!("Example 2: Masked View");
    println!("{}", "-".repeat(80));

    let base = vec![1, 2, 3, 4, 5, 6];
    let view = MaskedView::new(&base, vec![4, 0, 2])?;

    println!("view:      {:?}", view);
    println!("len:       {}", view.len());
    println!("view[1]:   {}", view[1]);
    println!("from 1:    {:?}", view.iter_from(1).collect::<Vec<_>>());
    println!("kept at:   {:?}", view.kept_indices().collect::<Vec<_>>());

    /* Expected Output:
    view:      [2, 4, 6]
    len:       3
    view[1]:   4
    from 1:    [4, 6]
    kept at:   [1, 3, 5]
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Builder
/// Full result with indices and scores
fn example_3_builder() -> Result<(), PruneError> {
    println!("Example 3: Builder");
    println!("{}", "-".repeat(80));

    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];

    let pruner = Pruner::new()
        .output_size(4)
        .max_candidates(1_000)
        .adapter(Exhaustive)
        .build()?;

    let result = pruner.prune(&x)?;
    println!("{}", result);

    /* Expected Output:
    Summary:
      Input points:  7
      Output points: 4
      Candidates:    10
      Input score:   0
      Score:         0

    Retained Data:
       Index            X
    ---------------------
           0     1.000000
           2     3.000000
           4     5.000000
           6     7.000000
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Search Cap
/// Large searches are refused before any work is done
fn example_4_search_cap() {
    println!("Example 4: Search Cap");
    println!("{}", "-".repeat(80));

    let x: Vec<f64> = (0..40).map(|i| (i as f64).sqrt()).collect();

    let outcome = Pruner::new()
        .output_size(20)
        .max_candidates(1_000_000)
        .adapter(Exhaustive)
        .build()
        .and_then(|pruner| pruner.prune(&x));

    match outcome {
        Ok(result) => println!("pruned to {} points", result.len()),
        Err(e) => println!("refused: {}", e),
    }

    /* Expected Output:
    refused: Search space too large: 33578000610 candidates (limit is 1000000)
    */

    println!();
}

#[cfg(feature = "std")]
/// Example 5: Tie-Breaking
/// Equal scores resolve to the removal set enumerated first
fn example_5_tie_break() -> Result<(), PruneError> {
    println!("Example 5: Tie-Breaking");
    println!("{}", "-".repeat(80));

    // Dropping either interior point scores 4
    let x = vec![0.0, 1.0, 5.0, 6.0];
    let kept = prune_uniform_exhaustive(&x, 3)?;

    println!("removed: {:?}", kept.removed());
    println!("kept:    {:?}", kept);

    /* Expected Output:
    removed: [1]
    kept:    [0.0, 5.0, 6.0]
    */

    println!();
    Ok(())
}
