//! Command line interface for word-graph.

pub mod args;
pub mod logging;
pub mod session;

use crate::errors::{Result, WordGraphError};
use crate::graph::model::WordGraph;
use crate::nlp::tokenizer::Tokenizer;
use args::WordGraphArgs;
use rand::rngs::StdRng;
use rand::SeedableRng;
use session::{Session, StdinSource};
use std::io;
use tracing::{info, warn};

/// Load the document named on the command line and run the interactive menu
///
/// An unreadable document is reported and the session continues with an
/// empty graph.
pub fn execute(args: &WordGraphArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let tokenizer = Tokenizer::new().with_min_length(config.min_token_length);

    let graph = match WordGraph::from_file(&args.input, &tokenizer) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{err}");
            warn!(error = %err, "continuing with an empty graph");
            WordGraph::default()
        }
    };
    info!(
        input = %args.input.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph ready"
    );

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut session = Session::new(graph, config, StdinSource, io::stdout(), rng);
    session
        .run()
        .map_err(|err| WordGraphError::output("stdout", err.to_string()))
}
