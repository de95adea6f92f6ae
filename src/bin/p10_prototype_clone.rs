// Pattern 10: Prototype - shallow vs deep clone
//
// Usage: p10_prototype_clone [--verbose] [config.toml]
// Without a path the config comes from $OOP_DEMO_CONFIG, or defaults.

use colored::Colorize;
use log::{debug, info};
use oop_concepts::report::{heading, init_logging, shape_line, value_line, verbose_requested};
use oop_concepts::{Cloner, DemoConfig, Prototype, Value};
use std::error::Error;
use std::path::Path;
use std::process;

fn load_config(args: &[String]) -> Result<DemoConfig, Box<dyn Error>> {
    let path = args.iter().skip(1).find(|arg| !arg.starts_with('-'));
    let config = match path {
        Some(path) => DemoConfig::load(Path::new(path))?,
        None => DemoConfig::from_env()?,
    };
    Ok(config)
}

// ============================================================================
// Example: Typed prototype - Shape implements Prototype
// ============================================================================

fn shape_example(config: &DemoConfig) {
    println!("{}", heading("Shape: shallow vs deep"));
    let watched = config.mutation.dimension.as_str();
    let before = config.shape.dimensions.get(watched).unwrap_or_default();

    let original = config.build_shape();
    let mut shallow = original.clone_shallow();
    let deep = original.clone_deep();
    debug!(
        "shallow shares dimensions: {}, deep shares dimensions: {}",
        shallow.shares_dimensions_with(&original),
        deep.shares_dimensions_with(&original)
    );

    println!("Before mutation:");
    println!("  {}", shape_line("Original", &original, watched, before));
    println!("  {}", shape_line("Shallow Copy", &shallow, watched, before));
    println!("  {}", shape_line("Deep Copy", &deep, watched, before));

    original.set_dimension(watched, config.mutation.value);
    info!("set original.dimensions.{watched} = {}", config.mutation.value);

    println!("After original.dimensions.{watched} = {}:", config.mutation.value);
    println!("  {}", shape_line("Original", &original, watched, before));
    println!("  {}", shape_line("Shallow Copy", &shallow, watched, before));
    println!("  {}", shape_line("Deep Copy", &deep, watched, before));

    shallow.kind = format!("{} (copy)", shallow.kind);
    println!("After renaming the shallow copy:");
    println!("  original.type = {}", original.kind.green());
    println!("  shallow.type  = {}", shallow.kind.yellow());
    println!();
}

// ============================================================================
// Example: Value graphs - aliasing, cycles and opaque fields
// ============================================================================

fn graph_example(config: &DemoConfig) -> Result<(), Box<dyn Error>> {
    println!("{}", heading("Value graph: cycles and policies"));
    let cloner = Cloner::new(config.cloner);
    let watched = config.mutation.dimension.as_str();

    let source = Value::from(&config.build_shape());
    source.set("self", source.clone());
    println!("  {}", value_line("Source", &source));

    let shallow = cloner.clone_shallow(&source)?;
    match cloner.clone_deep(&source) {
        Ok(deep) => {
            if let Some(dims) = source.get("dimensions") {
                dims.set(watched, config.mutation.value);
            }
            println!("  {}", value_line("Shallow Copy", &shallow));
            println!("  {}", value_line("Deep Copy", &deep));
            println!(
                "  deep.self is deep: {}",
                deep.get("self").is_some_and(|s| s.same_node(&deep))
            );
        }
        Err(err) => println!("  {} {}", "Deep copy refused:".yellow(), err),
    }

    let widget = Value::object_from([
        ("type", Value::from("Widget")),
        ("render", Value::function("render", |_| Value::Null)),
        ("conn", Value::handle("db", 1)),
    ]);
    println!("  {}", value_line("Widget", &widget));
    match cloner.clone_deep(&widget) {
        Ok(copy) => println!("  {}", value_line("Widget Copy", &copy)),
        Err(err) => println!("  {} {}", "Deep copy refused:".yellow(), err),
    }
    Ok(())
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let config = load_config(args)?;
    info!(
        "cloner policies: cycles={:?}, opaque={:?}, max_depth={}",
        config.cloner.cycles, config.cloner.opaque, config.cloner.max_depth
    );
    shape_example(&config);
    graph_example(&config)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    init_logging(verbose_requested(&args));

    if let Err(err) = run(&args) {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}
