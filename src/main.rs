//! Demo runner: prints the kata catalog and exercises one example per
//! category, replacing the per-file `main` printouts of the original
//! archive.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use algo_katas::catalog::ALGORITHM_CATALOG;
use algo_katas::concurrency::dining_philosophers::run_dinner;
use algo_katas::graph::dijkstra::dijkstra;
use algo_katas::graph::invariant::{Invariant, NonNegative};
use algo_katas::graph::max_flow::FlowNetwork;
use algo_katas::graph::min_cut::min_cut;
use algo_katas::graph::mst::min_connection_cost;
use algo_katas::graph::topological_sort::topological_sort;

#[derive(Parser)]
#[command(name = "katas", about = "Interview algorithm kata showcase")]
struct Args {
    /// Only list catalog entries whose path starts with this category.
    #[arg(long)]
    category: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("=== Kata Catalog ===");
    for (path, kind, determinism) in ALGORITHM_CATALOG {
        if let Some(prefix) = &args.category {
            if !path.starts_with(prefix.as_str()) {
                continue;
            }
        }
        println!("{path:<50} | {kind:<25} | {determinism}");
    }

    if args.category.is_some() {
        return Ok(());
    }

    println!("\n=== Sanity Check Examples ===");

    {
        let adj = vec![vec![1, 2], vec![3], vec![3], vec![]];
        println!("Topological sort example: {:?}", topological_sort(&adj));

        let weighted = vec![vec![(1, 4), (2, 1)], vec![(3, 1)], vec![(1, 2), (3, 5)], vec![]];
        let dist = dijkstra(&weighted, 0);
        let non_negative = NonNegative;
        assert!(dist.iter().all(|&d| non_negative.check(&(d as i64))));
        println!("Dijkstra example: {dist:?}");

        let connections = [(1, 2, 5), (1, 3, 6), (2, 3, 1)];
        println!(
            "Connecting cities example: {:?}",
            min_connection_cost(3, &connections)
        );

        let mut net = FlowNetwork::new(4);
        net.add_edge(0, 1, 3)?;
        net.add_edge(0, 2, 2)?;
        net.add_edge(1, 3, 2)?;
        net.add_edge(2, 3, 3)?;
        println!("Max flow example: {:?}", net.max_flow_dinic(0, 3)?);
        println!("Min cut example: {:?}", min_cut(&net, 0, 3)?);
    }

    {
        use algo_katas::arrays::kadane::max_subarray_sum;
        use algo_katas::intervals::merge::merge_intervals;
        use algo_katas::strings::manacher::longest_palindrome;

        println!(
            "Kadane example: {:?}",
            max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4])
        );
        println!(
            "Merge intervals example: {:?}",
            merge_intervals(&[(1, 3), (2, 6), (8, 10), (15, 18)])
        );
        println!("Manacher example: {:?}", longest_palindrome("forgeeksskeegfor"));
    }

    {
        println!("Dining philosophers example: {:?}", run_dinner(5, 100));
    }

    Ok(())
}
