use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use std::io;

mod error;
mod formula;
mod geo;
mod places;
mod prompt;
mod report;
mod tour;

use prompt::Prompter;
use tour::TourRequest;

#[derive(Parser, Debug)]
#[command(name = "distances")]
#[command(about = "Compute great-circle distances around a circular tour of points, entered by hand or imported from a JSON file.", long_about = None)]
struct Cli {
    /// Import points from this JSON file instead of asking
    #[arg(short, long)]
    file: Option<String>,

    /// Also write the distances to this CSV file (from, to, distance)
    #[arg(short, long)]
    out: Option<String>,
}

fn gather<R: io::BufRead, W: io::Write>(cli: &Cli, prompter: &mut Prompter<R, W>) -> Result<Option<TourRequest>> {
    let path = match &cli.file {
        Some(path) => Some(path.clone()),
        None => {
            let import = prompter.ask("Do you want to import points from a file? (y/n): ")?;
            if import == "y" {
                Some(prompter.ask("Enter the path to the file: ")?)
            } else {
                None
            }
        }
    };

    let Some(path) = path else {
        return prompter.request().map(Some);
    };

    match places::load(&path) {
        Ok(request) => {
            prompter.say(&format!("Data imported from {}:", path))?;
            Ok(Some(request))
        }
        Err(err) => {
            // A bad file aborts the import, not the program.
            warn!("import of {} failed: {:#}", path, err);
            prompter.say(&format!("{:#}", err))?;
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let Some(request) = gather(&cli, &mut prompter)? else {
        return Ok(());
    };

    info!(
        "{} points, radius {}, formula {:?}",
        request.points.len(),
        request.radius,
        request.formula
    );

    match request.run() {
        Ok(tour) => {
            report::write_text(&mut io::stdout(), &tour, &request.points)?;
            if let Some(out_path) = &cli.out {
                report::write_csv(out_path, &tour)?;
                println!("Wrote {} distances to {}", tour.edges.len(), out_path);
            }
        }
        Err(err) => {
            warn!("{:?}", err);
            println!("{}", err);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn no_flags() -> Cli {
        Cli { file: None, out: None }
    }

    fn gather_from(cli: &Cli, answers: &str) -> (Result<Option<TourRequest>>, String) {
        let mut transcript = Vec::new();
        let result = gather(cli, &mut Prompter::new(answers.as_bytes(), &mut transcript));
        (result, String::from_utf8(transcript).unwrap())
    }

    #[test]
    fn answering_no_asks_for_points() {
        let (request, transcript) = gather_from(&no_flags(), "n\n2\n0 0\n1 1\n6371\nsloc\n");
        let request = request.unwrap().unwrap();
        assert_eq!(request.points.len(), 2);
        assert_eq!(request.formula, "sloc");
        assert!(transcript.starts_with("Do you want to import points from a file? (y/n): Enter the number of points: "));
    }

    #[test]
    fn answering_yes_imports_the_named_file() {
        let path = std::env::temp_dir().join(format!("great-circle-{}-gather.json", std::process::id()));
        fs::write(
            &path,
            r#"{"places": [{"latitude": "1", "longitude": "2"}, {"latitude": "3", "longitude": "4"}],
                "earthRadius": 100.0, "formula": "spherical law of cosines"}"#,
        )
        .unwrap();
        let (request, transcript) = gather_from(&no_flags(), &format!("y\n{}\n", path.display()));
        fs::remove_file(&path).ok();

        let request = request.unwrap().unwrap();
        assert_eq!(request.radius, 100.0);
        assert_eq!(request.formula, "sloc");
        assert!(transcript.contains("Enter the path to the file: "));
        assert!(transcript.contains("Data imported from"));
    }

    #[test_log::test]
    fn failed_import_prints_cause_and_stops() {
        let (request, transcript) = gather_from(&no_flags(), "y\nmissing-places.json\n");
        assert!(request.unwrap().is_none());
        assert!(transcript.contains("opening missing-places.json: "));
    }

    #[test]
    fn wrong_file_type_is_reported() {
        let (request, transcript) = gather_from(&no_flags(), "y\nplaces.txt\n");
        assert!(request.unwrap().is_none());
        assert!(transcript.ends_with("Invalid file format. Please enter a JSON file.\n"));
    }

    #[test]
    fn file_flag_skips_the_question() {
        let cli = Cli {
            file: Some("missing-places.json".to_string()),
            out: None,
        };
        let (request, transcript) = gather_from(&cli, "");
        assert!(request.unwrap().is_none());
        assert!(!transcript.contains("(y/n)"));
    }
}
