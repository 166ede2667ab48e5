//! Renders a nations dataset JSON file into a standalone SVG document.
//!
//! Usage: `render_nations_chart <dataset.json> <output.svg> [--hide <region>]...`

use std::env;
use std::fs;
use std::process::ExitCode;

use scatterplot_rs::api::{ChartEngine, ChartEngineConfig};
use scatterplot_rs::data::dataset_from_file;
use scatterplot_rs::error::{ChartError, ChartResult};
use scatterplot_rs::render::SvgRenderer;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("render_nations_chart: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> ChartResult<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (dataset_path, output_path, hidden_regions) = parse_args(&args)?;

    let records = dataset_from_file(dataset_path)?;
    let mut engine = ChartEngine::new(SvgRenderer::new(), ChartEngineConfig::default())?;
    engine.set_dataset(records)?;
    for region in &hidden_regions {
        engine.toggle_region(region, false)?;
    }
    engine.render()?;

    let marks = engine.rendered_marks().len();
    fs::write(output_path, engine.renderer().document()).map_err(|e| {
        ChartError::DatasetUnavailable(format!("failed to write `{output_path}`: {e}"))
    })?;
    eprintln!("wrote {output_path} ({marks} marks)");
    Ok(())
}

fn parse_args(args: &[String]) -> ChartResult<(&str, &str, Vec<String>)> {
    let mut positional = Vec::new();
    let mut hidden = Vec::new();
    let mut index = 0;
    while index < args.len() {
        if args[index] == "--hide" {
            let region = args.get(index + 1).ok_or_else(|| {
                ChartError::InvalidData("--hide requires a region label".to_owned())
            })?;
            hidden.push(region.clone());
            index += 2;
        } else {
            positional.push(args[index].as_str());
            index += 1;
        }
    }

    match positional.as_slice() {
        [dataset, output] => Ok((dataset, output, hidden)),
        _ => Err(ChartError::InvalidData(
            "usage: render_nations_chart <dataset.json> <output.svg> [--hide <region>]..."
                .to_owned(),
        )),
    }
}
