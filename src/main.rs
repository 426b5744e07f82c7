use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indexed_bst::{IndexedBst, SlotIndex, TreeConfig, DEFAULT_CAPACITY};
use tracing_subscriber::EnvFilter;

// Reference tree: root 50, seven distinct keys, then 10, 25 and 30 again as duplicates
const DEMO_ROOT: i32 = 50;
const DEMO_KEYS: [i32; 10] = [10, 60, 25, 30, 92, 15, 67, 10, 25, 30];
const DEMO_PROBES: [i32; 6] = [92, 10, 67, 50, 5555, -55];
const DEMO_SORT_BUFFER: usize = 16;

#[derive(Parser, Debug)]
#[command(name = "indexed-bst", about = "Binary search tree stored in a flat slot array")]
struct Cli {
    /// Maximum number of slots the tree may occupy.
    #[arg(long, global = true, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,
    /// Log insertions and duplicates at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the reference tree and run every operation against it.
    Demo,
    /// Tree-sort the given keys.
    Sort {
        /// Keys to insert, first one becomes the root.
        #[arg(required = true, allow_negative_numbers = true)]
        keys: Vec<i32>,
        /// Sort into a zero-filled buffer of this many entries.
        #[arg(long)]
        buffer: Option<usize>,
    },
    /// Print traversals and shape metrics for the given keys.
    Inspect {
        /// Keys to insert, first one becomes the root.
        #[arg(required = true, allow_negative_numbers = true)]
        keys: Vec<i32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = TreeConfig::with_capacity(cli.capacity);
    match cli.command {
        Commands::Demo => run_demo(config)?,
        Commands::Sort { keys, buffer } => run_sort(config, &keys, buffer)?,
        Commands::Inspect { keys } => run_inspect(config, &keys)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_tree(config: TreeConfig, keys: &[i32]) -> Result<IndexedBst> {
    let mut tree = IndexedBst::new(config).context("invalid tree configuration")?;
    for &key in keys {
        tree.insert(key)
            .with_context(|| format!("failed to insert key {key}"))?;
    }
    Ok(tree)
}

fn run_demo(config: TreeConfig) -> Result<()> {
    let mut tree =
        IndexedBst::create_root_with(DEMO_ROOT, config).context("failed to create root")?;
    for key in DEMO_KEYS {
        tree.insert(key)
            .with_context(|| format!("failed to insert key {key}"))?;
    }
    let root = SlotIndex::ROOT;

    println!("In order: {}", join(tree.in_order(root)?));
    println!("Tree array: {tree}");
    println!("Tree Height/Depth = {}", tree.max_depth(root)?);
    println!("Is tree a BST: {}", tree.validate_is_bst());

    println!("\nSearching items:");
    for key in DEMO_PROBES {
        print_find(&tree, &format!("find({key})"), tree.find(key)?)?;
    }

    println!("\nSearching items recursively:");
    for key in DEMO_PROBES {
        print_find(
            &tree,
            &format!("find_recursive({key})"),
            tree.find_recursive(root, key)?,
        )?;
    }

    println!("\nMinimum/maximum in subtrees by choosing different roots");
    let root_node = tree.node(root)?;
    let subtrees = [
        ("Right sub-tree", root_node.right),
        ("Left sub-tree", root_node.left),
        ("Overall tree", Some(root)),
    ];
    for (label, subtree) in subtrees {
        let Some(subtree) = subtree else {
            println!("{label} of root({}): empty", root_node.key);
            continue;
        };
        let min = tree.key(tree.min_in_subtree(subtree)?)?;
        let max = tree.key(tree.max_in_subtree(subtree)?)?;
        println!("{label} of root({}), min:{min}, max:{max}", root_node.key);
    }

    println!("\nTree Sort (in-order into a {DEMO_SORT_BUFFER}-entry buffer)");
    let mut sorted = vec![0; DEMO_SORT_BUFFER];
    tree.tree_sort_into(&mut sorted)?;
    println!("{}", join(sorted));

    Ok(())
}

fn run_sort(config: TreeConfig, keys: &[i32], buffer: Option<usize>) -> Result<()> {
    let tree = build_tree(config, keys)?;
    match buffer {
        Some(len) => {
            let mut sorted = vec![0; len];
            tree.tree_sort_into(&mut sorted)
                .context("sort buffer cannot hold every key")?;
            println!("{}", join(sorted));
        }
        None => println!("{}", join(tree.tree_sort())),
    }
    Ok(())
}

fn run_inspect(config: TreeConfig, keys: &[i32]) -> Result<()> {
    let tree = build_tree(config, keys)?;
    let root = SlotIndex::ROOT;

    println!("Slots: {} of {}", tree.len(), tree.capacity());
    println!("Tree array: {tree}");
    println!("In order: {}", join(tree.in_order(root)?));
    println!("Pre order: {}", join(tree.pre_order(root)?));
    println!("Post order: {}", join(tree.post_order(root)?));
    println!("Depth: {}", tree.max_depth(root)?);
    println!("Is tree a BST: {}", tree.validate_is_bst());
    Ok(())
}

fn print_find(tree: &IndexedBst, label: &str, found: Option<SlotIndex>) -> Result<()> {
    match found {
        Some(slot) => println!("{label} : slot[{slot}]={}", tree.key(slot)?),
        None => println!("{label} : not found"),
    }
    Ok(())
}

fn join(keys: impl IntoIterator<Item = i32>) -> String {
    keys.into_iter()
        .map(|key| key.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
