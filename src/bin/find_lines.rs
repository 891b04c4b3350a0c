use fid_line_finder::config::find_lines::load_config;
use fid_line_finder::io::{load_frames, save_json};
use fid_line_finder::LineFinderReport;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    let finder = config.finder.build_finder().map_err(|e| e.to_string())?;
    let frames = load_frames(&config.input)?;

    let reports = finder.find_lines_batch_with_report(&frames);
    for (index, report) in reports.iter().enumerate() {
        println!("frame {index}: {}", report.summary());
    }

    let summary = FindLinesSummary {
        config_path: config_path.clone(),
        input: config.input.display().to_string(),
        frames: reports,
    };
    if let Some(path) = &config.output.result_json {
        save_json(path, &summary)?;
        println!("JSON report written to {}", path.display());
    } else {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
        println!("{json}");
    }
    Ok(())
}

fn usage() -> String {
    "Usage: find_lines <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FindLinesSummary {
    config_path: String,
    input: String,
    frames: Vec<LineFinderReport>,
}
