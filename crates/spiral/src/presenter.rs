use std::io::{self, Write};
use std::time::Duration;

use serde_json::{Value, json};
use spiral_common::Colors;
use spiral_core::{Cell, EmittedElement, Encoding, Grid, Placement, Tick};

use crate::commands::OutputFormat;
use crate::error::CliError;

/// What `encode` produced, ready for display.
pub struct EncodeView<'a> {
    pub source: &'a str,
    pub encoding: &'a Encoding,
    pub placeholder: char,
    pub interval: Duration,
    /// The decoded text when `--verify` was requested and matched.
    pub verified: Option<&'a str>,
}

/// What `decode` or `sample` produced.
pub struct DecodeView<'a> {
    pub grid: &'a Grid,
    pub elements: &'a [EmittedElement],
    pub placeholder: char,
    pub interval: Duration,
    pub animate: bool,
}

impl DecodeView<'_> {
    fn sequence(&self) -> String {
        self.elements
            .iter()
            .map(|e| e.value.display(self.placeholder))
            .collect()
    }
}

/// Output formatting shared by every command.
///
/// Results go to `out` so a closed pipe surfaces as [`CliError::Io`].
pub trait Presenter {
    fn present_encoding(&self, out: &mut dyn Write, view: &EncodeView<'_>) -> Result<(), CliError>;

    fn present_decoding(&self, out: &mut dyn Write, view: &DecodeView<'_>) -> Result<(), CliError>;

    fn present_error(&self, out: &mut dyn Write, error: &CliError) -> io::Result<()>;
}

pub struct TextPresenter;

impl TextPresenter {
    fn render_cell(cell: Cell, placeholder: char) -> String {
        match cell {
            Cell::Filled(c) => Colors::cell(&c.to_string()),
            Cell::Empty => Colors::dim(&placeholder.to_string()),
        }
    }

    fn write_grid(out: &mut dyn Write, grid: &Grid, placeholder: char) -> io::Result<()> {
        for row in grid.iter_rows() {
            let line: Vec<String> = row
                .iter()
                .map(|&cell| Self::render_cell(cell, placeholder))
                .collect();
            writeln!(out, "  {}", line.join(" "))?;
        }
        Ok(())
    }

    /// One character per tick, flushed as it is emitted.
    fn animate(out: &mut dyn Write, view: &DecodeView<'_>) -> Result<(), CliError> {
        for (i, element) in view.elements.iter().enumerate() {
            if i > 0 {
                std::thread::sleep(view.interval);
            }
            write!(out, "{}", Self::render_cell(element.value, view.placeholder))?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }
}

impl Presenter for TextPresenter {
    fn present_encoding(
        &self,
        out: &mut dyn Write,
        view: &EncodeView<'_>,
    ) -> Result<(), CliError> {
        let grid = &view.encoding.grid;
        writeln!(
            out,
            "{} {}x{} grid, {} of {} cells filled",
            Colors::bold(view.source),
            grid.rows(),
            grid.cols(),
            grid.filled_count(),
            grid.capacity()
        )?;
        Self::write_grid(out, grid, view.placeholder)?;
        if let Some(decoded) = view.verified {
            writeln!(out, "{} Round trip: {}", Colors::success("✓"), decoded)?;
        }
        Ok(())
    }

    fn present_decoding(
        &self,
        out: &mut dyn Write,
        view: &DecodeView<'_>,
    ) -> Result<(), CliError> {
        if view.animate {
            return Self::animate(out, view);
        }
        writeln!(out, "{}", view.sequence())?;
        Ok(())
    }

    fn present_error(&self, out: &mut dyn Write, error: &CliError) -> io::Result<()> {
        writeln!(out, "spiral: {} {}", Colors::error("Error:"), error)?;
        if let Some(suggestion) = error.suggestion() {
            writeln!(out, "{} {}", Colors::dim("Suggestion:"), suggestion)?;
        }
        if error.is_retryable() {
            writeln!(
                out,
                "{}",
                Colors::dim("(This error may be transient - retry may succeed)")
            )?;
        }
        Ok(())
    }
}

pub struct JsonPresenter;

fn delay_ms(tick: Tick, interval: Duration) -> u64 {
    u64::try_from(tick.delay(interval).as_millis()).unwrap_or(u64::MAX)
}

fn placement_json(p: &Placement, interval: Duration) -> Value {
    json!({
        "row": p.row,
        "col": p.col,
        "value": p.value.to_string(),
        "tick": p.tick,
        "delay_ms": delay_ms(p.tick, interval)
    })
}

fn element_json(e: &EmittedElement, interval: Duration) -> Value {
    json!({
        "row": e.row,
        "col": e.col,
        "value": e.value,
        "tick": e.tick,
        "delay_ms": delay_ms(e.tick, interval)
    })
}

fn write_json(out: &mut dyn Write, value: &Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

impl JsonPresenter {
    pub fn encoding_json(view: &EncodeView<'_>) -> Value {
        let grid = &view.encoding.grid;
        let mut output = json!({
            "success": true,
            "source": view.source,
            "rows": grid.rows(),
            "cols": grid.cols(),
            "placeholder": view.placeholder.to_string(),
            "grid": grid.render_rows(view.placeholder),
            "placements": view
                .encoding
                .placements
                .iter()
                .map(|p| placement_json(p, view.interval))
                .collect::<Vec<_>>(),
        });
        if let Some(decoded) = view.verified {
            output["verified"] = json!(true);
            output["decoded"] = json!(decoded);
        }
        output
    }

    pub fn decoding_json(view: &DecodeView<'_>) -> Value {
        json!({
            "success": true,
            "rows": view.grid.rows(),
            "cols": view.grid.cols(),
            "target_count": view.grid.target_count(),
            "sequence": view.sequence(),
            "count": view.elements.len(),
            "elements": view
                .elements
                .iter()
                .map(|e| element_json(e, view.interval))
                .collect::<Vec<_>>(),
        })
    }
}

impl Presenter for JsonPresenter {
    fn present_encoding(
        &self,
        out: &mut dyn Write,
        view: &EncodeView<'_>,
    ) -> Result<(), CliError> {
        Ok(write_json(out, &Self::encoding_json(view))?)
    }

    /// Animation is a terminal concern; JSON carries `delay_ms` instead.
    fn present_decoding(
        &self,
        out: &mut dyn Write,
        view: &DecodeView<'_>,
    ) -> Result<(), CliError> {
        Ok(write_json(out, &Self::decoding_json(view))?)
    }

    fn present_error(&self, out: &mut dyn Write, error: &CliError) -> io::Result<()> {
        write_json(out, &error.to_json())
    }
}

pub fn create_presenter(format: &OutputFormat) -> Box<dyn Presenter> {
    match format {
        OutputFormat::Json => Box::new(JsonPresenter),
        OutputFormat::Text => Box::new(TextPresenter),
    }
}
