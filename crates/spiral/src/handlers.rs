use std::io;
use std::time::Duration;

use spiral_common::{derive_dimensions, normalize_source};
use spiral_core::{Grid, decode, decode_string, encode_with_placements};
use tracing::{debug, info};

use crate::commands::OutputFormat;
use crate::config::SpiralConfig;
use crate::error::CliError;
use crate::presenter::{DecodeView, EncodeView, Presenter, create_presenter};

pub type HandlerResult = Result<(), CliError>;

/// The built-in example: decodes to HAVEANICEDAY.
pub const SAMPLE_ROWS: [&str; 4] = ["HAV", "DAE", "EYA", "CIN"];

pub struct HandlerContext {
    pub config: SpiralConfig,
    presenter: Box<dyn Presenter>,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, config: SpiralConfig) -> Self {
        Self {
            config,
            presenter: create_presenter(&format),
        }
    }

    pub fn presenter(&self) -> &dyn Presenter {
        self.presenter.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EncodeArgs {
    pub text: Vec<String>,
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub verify: bool,
    pub raw: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DecodeArgs {
    pub rows: Vec<String>,
    pub count: Option<usize>,
    pub placeholder: Option<char>,
    pub animate: bool,
    pub interval_ms: Option<u64>,
}

/// Fill in whichever of `rows`/`cols` is missing for `len` characters.
///
/// With neither given, the grid is `floor(sqrt(len))` columns wide. With one
/// given, the other is the smallest value that fits `len`. A zero side is
/// passed through so the encoder reports the pair as given.
pub fn resolve_dimensions(
    len: usize,
    rows: Option<usize>,
    cols: Option<usize>,
) -> Result<(usize, usize), CliError> {
    match (rows, cols) {
        (Some(rows), Some(cols)) => Ok((rows, cols)),
        (Some(rows), None) => Ok((rows, fit(len, rows))),
        (None, Some(cols)) => Ok((fit(len, cols), cols)),
        (None, None) => derive_dimensions(len).ok_or(CliError::EmptyInput),
    }
}

fn fit(len: usize, given: usize) -> usize {
    if given == 0 {
        return len.max(1);
    }
    len.div_ceil(given).max(1)
}

pub fn prepare_source(text: &[String], raw: bool) -> String {
    let joined = text.join(" ");
    if raw { joined } else { normalize_source(&joined) }
}

pub fn handle_encode(ctx: &HandlerContext, args: &EncodeArgs) -> HandlerResult {
    let source = prepare_source(&args.text, args.raw);
    let len = source.chars().count();
    if len == 0 {
        return Err(CliError::EmptyInput);
    }
    let placeholder = ctx.config.placeholder;
    if let Some(index) = source.chars().position(|c| c == placeholder) {
        return Err(CliError::PlaceholderInSource { placeholder, index });
    }

    let (rows, cols) = resolve_dimensions(len, args.rows, args.cols)?;
    debug!(len, rows, cols, "Resolved grid dimensions");
    let encoding = encode_with_placements(&source, rows, cols)?;

    let decoded = if args.verify {
        let decoded = decode_string(&encoding.grid)?;
        if decoded != source {
            return Err(CliError::RoundTrip {
                expected: source,
                decoded,
            });
        }
        info!(len, "Round trip verified");
        Some(decoded)
    } else {
        None
    };

    ctx.presenter().present_encoding(
        &mut io::stdout().lock(),
        &EncodeView {
            source: &source,
            encoding: &encoding,
            placeholder,
            interval: ctx.config.tick_interval,
            verified: decoded.as_deref(),
        },
    )
}

pub fn handle_decode(ctx: &HandlerContext, args: &DecodeArgs) -> HandlerResult {
    let placeholder = args.placeholder.unwrap_or(ctx.config.placeholder);
    let grid = Grid::from_strs(&args.rows, Some(placeholder))?;
    let grid = match args.count {
        Some(count) => grid.with_target_count(count)?,
        None => grid,
    };
    let interval = args
        .interval_ms
        .map(Duration::from_millis)
        .unwrap_or(ctx.config.tick_interval);

    present_decoded(ctx, &grid, placeholder, interval, args.animate)
}

pub fn handle_sample(ctx: &HandlerContext, animate: bool) -> HandlerResult {
    let grid = Grid::from_strs(&SAMPLE_ROWS, None)?;
    present_decoded(
        ctx,
        &grid,
        ctx.config.placeholder,
        ctx.config.tick_interval,
        animate,
    )
}

fn present_decoded(
    ctx: &HandlerContext,
    grid: &Grid,
    placeholder: char,
    interval: Duration,
    animate: bool,
) -> HandlerResult {
    let elements = decode(grid)?;
    debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        emitted = elements.len(),
        "Grid decoded"
    );
    ctx.presenter().present_decoding(
        &mut io::stdout().lock(),
        &DecodeView {
            grid,
            elements: &elements,
            placeholder,
            interval,
            animate,
        },
    )
}
