use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
pub use clap_complete::Shell;

const LONG_ABOUT: &str = r#"spiral lays text into a grid so that reading the grid in a spiral
(outermost ring first, clockwise from the top-left corner) gives the text back.

WORKFLOW:
    1. Encode text into a grid (dimensions are derived unless given)
    2. Decode any grid by reading it in spiral order
    3. Use --verify to check that a grid decodes back to its source

EXAMPLES:
    # Lay a phrase into a grid, checking the round trip
    spiral encode "have a nice day" --verify

    # Read a grid given one row per argument
    spiral decode HAV DAE EYA CIN

    # Stop after the first 5 cells
    spiral decode HAV DAE EYA CIN --count 5

    # Show the built-in sample with element timings
    spiral sample --json"#;

#[derive(Parser)]
#[command(name = "spiral")]
#[command(author, version)]
#[command(about = "Encode text into spiral grids and decode them back")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Output as JSON (shorthand for --format json)
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Enable verbose output (logs ring-by-ring progress)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Returns the effective output format, considering --json shorthand.
    pub fn effective_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lay text into a grid in spiral order
    #[command(long_about = r#"Lay text into a grid in spiral order.

The text is trimmed, uppercased and stripped of whitespace first (use --raw
to keep it as typed). Without --rows/--cols the grid is cols = floor(sqrt(n))
wide and rows = ceil(n / cols) tall. Giving only one of them derives the
other. Cells the text does not reach stay empty.

EXAMPLES:
    spiral encode "have a nice day"
    spiral encode hello world --rows 2 --cols 5
    spiral encode abcdefg --cols 3 --verify"#)]
    Encode {
        /// Text to encode (multiple words are joined)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Grid height in rows
        #[arg(long)]
        rows: Option<usize>,

        /// Grid width in columns
        #[arg(long)]
        cols: Option<usize>,

        /// Decode the grid again and check it reproduces the text
        #[arg(long)]
        verify: bool,

        /// Skip trimming, uppercasing and whitespace removal
        #[arg(long)]
        raw: bool,
    },

    /// Read a grid in spiral order
    #[command(long_about = r#"Read a grid in spiral order.

Each argument is one row; all rows must be the same width. Cells equal to
the placeholder (default '-', or SPIRAL_PLACEHOLDER) count as empty. Rows
starting with '-' must follow a `--` separator.

EXAMPLES:
    spiral decode HAV DAE EYA CIN
    spiral decode --count 2 -- AB --
    spiral decode ABC DEF GHI --animate"#)]
    Decode {
        /// Grid rows, top to bottom
        #[arg(required = true, num_args = 1..)]
        rows: Vec<String>,

        /// Stop after this many cells (default: every cell)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Character that marks an empty cell
        #[arg(short, long)]
        placeholder: Option<char>,

        /// Print elements one tick at a time
        #[arg(long)]
        animate: bool,

        /// Milliseconds per tick (default: SPIRAL_TICK_MS or 200)
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Decode the built-in HAVEANICEDAY sample
    Sample {
        /// Print elements one tick at a time
        #[arg(long)]
        animate: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
