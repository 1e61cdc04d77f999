//! Line-oriented interactive menu.

use crate::document::write_output;
use crate::graph::model::WordGraph;
use crate::nlp::tokenizer::Tokenizer;
use crate::query::bridge::BridgeWordQuery;
use crate::query::generate::TextGenerator;
use crate::query::random_walk::{CancellationToken, RandomWalker, WalkStop};
use crate::query::shortest_path::{PathQuery, ShortestPath, ShortestPathEngine};
use crate::render::{DotSnapshotWriter, EdgeSet, GraphRenderer, NoopRenderer};
use crate::types::SessionConfig;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

const RULE: &str =
    "==================================================================================";

// ============================================================================
// Input sources
// ============================================================================

/// Where the session reads its lines from
pub trait LineSource {
    /// Next line without its terminator, `None` at end of input
    fn next_line(&mut self) -> io::Result<Option<String>>;

    /// Cancel `token` when the user asks to stop a running walk
    ///
    /// Returns a handle to join once the walk is over. Sources that cannot
    /// listen while a walk runs return `None`, and walks then run to a
    /// dead end.
    fn watch_for_stop(&mut self, _token: &CancellationToken) -> Option<JoinHandle<()>> {
        None
    }
}

/// Reads from the process stdin without holding its lock between lines
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl LineSource for StdinSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line_end(line)))
    }

    fn watch_for_stop(&mut self, token: &CancellationToken) -> Option<JoinHandle<()>> {
        let token = token.clone();
        Some(thread::spawn(move || {
            let mut line = String::new();
            let _ = io::stdin().read_line(&mut line);
            token.cancel();
        }))
    }
}

/// Adapts any [`BufRead`] (a file, a byte slice in tests)
#[derive(Debug)]
pub struct BufReadSource<B> {
    reader: B,
}

impl<B: BufRead> BufReadSource<B> {
    pub fn new(reader: B) -> Self {
        Self { reader }
    }
}

impl<B: BufRead> LineSource for BufReadSource<B> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line_end(line)))
    }
}

fn trim_line_end(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}

// ============================================================================
// Session
// ============================================================================

/// An interactive session over one graph
pub struct Session<S, W, R> {
    graph: WordGraph,
    config: SessionConfig,
    input: S,
    out: W,
    rng: R,
    tokenizer: Tokenizer,
    renderer: Box<dyn GraphRenderer>,
}

impl<S: LineSource, W: Write, R: Rng> Session<S, W, R> {
    /// Create a session; snapshots are enabled when the config names a directory
    pub fn new(graph: WordGraph, config: SessionConfig, input: S, out: W, rng: R) -> Self {
        let renderer: Box<dyn GraphRenderer> = match &config.snapshot_dir {
            Some(dir) => Box::new(DotSnapshotWriter::new(dir.clone())),
            None => Box::new(NoopRenderer),
        };
        let tokenizer = Tokenizer::new().with_min_length(config.min_token_length);
        Self {
            graph,
            config,
            input,
            out,
            rng,
            tokenizer,
            renderer,
        }
    }

    /// Replace the snapshot renderer
    pub fn with_renderer(mut self, renderer: Box<dyn GraphRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn graph(&self) -> &WordGraph {
        &self.graph
    }

    /// Consume the session, returning its output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run the menu until "Exit" or end of input
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "Hello and welcome!")?;
        self.snapshot(None);

        loop {
            writeln!(self.out, "Please input the function you want to use:")?;
            writeln!(self.out, "1. Query bridge words")?;
            writeln!(self.out, "2. Generate new text")?;
            writeln!(self.out, "3. Calculate the shortest path")?;
            writeln!(self.out, "4. Random walk")?;
            writeln!(self.out, "5. Exit")?;
            self.out.flush()?;

            let Some(choice) = self.input.next_line()? else {
                break;
            };
            debug!(choice = choice.trim(), "menu selection");
            match choice.trim() {
                "" => continue,
                "1" => self.bridge_words()?,
                "2" => self.generate_text()?,
                "3" => self.shortest_path()?,
                "4" => self.random_walk()?,
                "5" => break,
                _ => writeln!(self.out, "Invalid input! Please try again.")?,
            }
        }

        writeln!(self.out, "Goodbye!")?;
        self.out.flush()
    }

    fn bridge_words(&mut self) -> io::Result<()> {
        writeln!(self.out, "Please input two words:")?;
        self.out.flush()?;
        let Some(words) = self.read_words(2)? else {
            return Ok(());
        };
        let (word1, word2) = (&words[0], &words[1]);

        match BridgeWordQuery::new(&self.graph).find_words(word1, word2) {
            Ok(bridges) => writeln!(
                self.out,
                "The bridge words from \"{}\" to \"{}\" are: {}.",
                word1.to_lowercase(),
                word2.to_lowercase(),
                bridges.join(", ")
            ),
            Err(err) => writeln!(self.out, "{err}"),
        }
    }

    fn generate_text(&mut self) -> io::Result<()> {
        writeln!(self.out, "Please input the text:")?;
        self.out.flush()?;
        let Some(line) = self.input.next_line()? else {
            return Ok(());
        };

        let text = TextGenerator::new(&self.graph, &mut self.rng)
            .with_tokenizer(self.tokenizer.clone())
            .generate(&line);
        writeln!(self.out, "The new text is: {text}")
    }

    fn shortest_path(&mut self) -> io::Result<()> {
        writeln!(self.out, "Please input the word1:")?;
        self.out.flush()?;
        let Some(word1) = self.input.next_line()? else {
            return Ok(());
        };
        writeln!(self.out, "Please input the word2 (leave empty for all words):")?;
        self.out.flush()?;
        let word2 = self.input.next_line()?.unwrap_or_default();

        let engine = ShortestPathEngine::new(&self.graph)
            .with_parallel_threshold(self.config.parallel_threshold);
        let highlight = match engine.query(word1.trim(), Some(word2.trim())) {
            Ok(PathQuery::Single(path)) => {
                self.print_path(&path)?;
                EdgeSet::from_path(&path)
            }
            Ok(PathQuery::AllTargets { source, paths }) => {
                writeln!(self.out, "{RULE}")?;
                writeln!(
                    self.out,
                    "The shortest path from \"{}\" to other words are:",
                    self.graph.label(source)
                )?;
                let mut highlight = EdgeSet::new();
                for entry in &paths {
                    match &entry.result {
                        Ok(path) => {
                            self.print_path(path)?;
                            highlight.extend_path(path);
                        }
                        Err(err) => writeln!(self.out, "{err}")?,
                    }
                }
                writeln!(self.out, "{RULE}")?;
                highlight
            }
            Err(err) => return writeln!(self.out, "{err}"),
        };

        self.snapshot(Some(&highlight));
        Ok(())
    }

    fn print_path(&mut self, path: &ShortestPath) -> io::Result<()> {
        let words = path.words(&self.graph);
        let (Some(first), Some(last)) = (words.first(), words.last()) else {
            return Ok(());
        };
        writeln!(
            self.out,
            "The shortest path from \"{first}\" to \"{last}\" is: {}, with a distance of {}.",
            words.join("->"),
            path.distance
        )
    }

    fn random_walk(&mut self) -> io::Result<()> {
        let token = CancellationToken::new();
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "Press Enter to stop.")?;
        self.out.flush()?;
        let listener = self.input.watch_for_stop(&token);

        let out = &mut self.out;
        let mut output_failed = false;
        let walk = RandomWalker::new(&self.graph, &mut self.rng)
            .with_step_delay(self.config.step_delay())
            .walk_with(&token, |state| {
                let shown = write!(out, "\rThe random walk is: \t{}", state.render())
                    .and_then(|()| out.flush());
                if let Err(err) = shown {
                    warn!(error = %err, "cannot report walk progress, stopping");
                    output_failed = true;
                    token.cancel();
                }
            });
        let trace = walk.render(&self.graph);

        writeln!(self.out, "\nDone!\nThe final random walk is: \t{trace}")?;
        writeln!(self.out, "{RULE}")?;

        if let Some(handle) = listener {
            // the listener is still waiting unless the user pressed Enter
            if walk.stop == WalkStop::DeadEnd || output_failed {
                writeln!(self.out, "Press Enter to return to the menu.")?;
                self.out.flush()?;
            }
            let _ = handle.join();
        }

        match write_output(&self.config.output_path, &trace) {
            Ok(()) => writeln!(
                self.out,
                "The random walk was written to {}.",
                self.config.output_path.display()
            ),
            Err(err) => writeln!(self.out, "{err}"),
        }
    }

    /// Read whitespace-separated words until `n` are collected
    fn read_words(&mut self, n: usize) -> io::Result<Option<Vec<String>>> {
        let mut words = Vec::with_capacity(n);
        while words.len() < n {
            let Some(line) = self.input.next_line()? else {
                return Ok(None);
            };
            words.extend(line.split_whitespace().map(str::to_string));
        }
        words.truncate(n);
        Ok(Some(words))
    }

    fn snapshot(&mut self, highlight: Option<&EdgeSet>) {
        if let Err(err) = self.renderer.render(&self.graph, highlight) {
            warn!(error = %err, "graph snapshot failed");
        }
    }
}
