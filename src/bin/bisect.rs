//! Bisect Binary
//!
//! Finds the approximate optimal bipartition of a system's nodes.
//! Without arguments, runs the two-variable demo system.

use anyhow::Context;
use bipart::dto::Node;
use bipart::dto::Request;
use bipart::dto::Response;
use bipart::partition::Search;
use bipart::partition::Universe;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// node labels forming the initial universe, in order
    labels: Vec<String>,
    #[arg(long, conflicts_with_all = ["labels", "input"], help = "Generate n variables at t and t+1")]
    system: Option<usize>,
    #[arg(long, conflicts_with = "labels", help = "Read a JSON request {\"nodes\": [...]}")]
    input: Option<std::path::PathBuf>,
    #[arg(long, help = "Print the response as JSON")]
    json: bool,
    #[arg(long, help = "Include every candidate partition in the output")]
    trace: bool,
    #[arg(short, long, help = "Log each search level")]
    verbose: bool,
}

impl Args {
    fn universe(&self) -> anyhow::Result<Universe> {
        let request = match (&self.input, self.system) {
            (Some(path), _) => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))
                .and_then(|body| {
                    serde_json::from_str::<Request>(&body)
                        .with_context(|| format!("parsing {}", path.display()))
                })?,
            (None, Some(n)) => Request {
                nodes: Node::system(n).iter().map(|n| n.to_string()).collect(),
            },
            (None, None) if self.labels.is_empty() => Request::default(),
            (None, None) => Request {
                nodes: self.labels.clone(),
            },
        };
        Ok(request.universe()?)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    bipart::log(args.verbose)?;
    let universe = args.universe()?;
    log::info!("initial system {}", universe);
    let search = Search::new(universe)
        .budget(bipart::deadline())
        .run()
        .context("searching for optimal partition")?;
    let response = match args.trace {
        true => Response::traced(&search)?,
        false => Response::optimal(&search)?,
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        for (i, candidate) in response.candidates.iter().enumerate() {
            println!("{:>2}. {}", i + 1, candidate);
        }
        println!("optimal partition");
        println!("subset 1  {:?}", names(response.optimal.subset1()));
        println!("subset 2  {:?}", names(response.optimal.subset2()));
        println!("emd value {:.6}", response.optimal.emd());
    }
    Ok(())
}

fn names(labels: &[bipart::partition::Label]) -> Vec<String> {
    labels.iter().map(|x| x.to_string()).collect()
}
