use std::io::Write;

use structopt::StructOpt;

use topocost::{read_pricing, CostModel, Pricing, Strategy};

#[derive(Debug, Clone, StructOpt)]
#[structopt(
    name = "Cost Sweep",
    about = "Tabulate topology build cost over a range of node counts"
)]
pub struct Opt {
    /// Sweep node counts from 1 up to this value, inclusive
    #[structopt(short = "n", long = "max-nodes")]
    pub max_nodes: usize,

    /// Pricing file in toml; defaults to the built-in unit prices
    #[structopt(short = "p", long = "pricing")]
    pub pricing: Option<std::path::PathBuf>,

    /// Divide each estimate by n, giving per-machine cost
    #[structopt(long = "normalized")]
    pub normalized: bool,

    /// Output path; defaults to stdout
    #[structopt(short = "o", long = "output")]
    pub output: Option<std::path::PathBuf>,
}

fn main() {
    logging::init_log();

    let opt = Opt::from_args();
    log::info!("Opts: {:#?}", opt);

    let pricing = if let Some(path) = &opt.pricing {
        log::info!("parsing pricing from file: {:?}", path);
        read_pricing(path)
    } else {
        Pricing::default()
    };
    log::info!("pricing: {:#?}", pricing);

    let model = CostModel::new(pricing);
    let strategies = Strategy::all();

    let mut out: Box<dyn Write> = match &opt.output {
        Some(path) => Box::new(std::fs::File::create(path).expect("fail to create file")),
        None => Box::new(std::io::stdout()),
    };

    let header: Vec<String> = strategies.iter().map(|s| s.to_string()).collect();
    writeln!(out, "n\t{}", header.join("\t")).unwrap();

    for n in 1..=opt.max_nodes {
        let mut row = Vec::with_capacity(strategies.len());
        for &strategy in &strategies {
            let cost = model
                .estimate(strategy, n)
                .expect("node count is positive");
            if opt.normalized {
                row.push(format!("{:.2}", cost.val() as f64 / n as f64));
            } else {
                row.push(format!("{}", cost.val()));
            }
        }
        writeln!(out, "{}\t{}", n, row.join("\t")).unwrap();
    }

    log::info!("wrote {} rows", opt.max_nodes);
}
