use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use uniquetree::build_tree;
use uniquetree::model::{BuildError, Record};

fn main() {
    setup_logging();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), BuildError> {
    let records = [
        Some(Record::new(52, Some(1), Some(2))), // root
        Some(Record::new(23, Some(3), Some(4))),
        Some(Record::new(87, Some(5), Some(6))),
        Some(Record::new(34, Some(7), Some(8))),
        Some(Record::new(45, Some(9), Some(10))),
        Some(Record::new(67, Some(11), None)),
        Some(Record::new(78, Some(12), Some(13))),
        Some(Record::leaf(12)),
        Some(Record::leaf(19)),
        Some(Record::new(33, Some(14), Some(15))),
        Some(Record::leaf(49)),
        Some(Record::leaf(56)),
        Some(Record::new(69, Some(16), None)),
        Some(Record::leaf(85)),
        Some(Record::leaf(62)),
        Some(Record::leaf(13)),
        Some(Record::leaf(24)),
    ];

    let mut tree = build_tree(&records)?;
    tree.double_even_values();
    tree.print_tree();
    println!("{}", tree.summary());

    Ok(())
}

fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(env_filter)
        .init();
}
