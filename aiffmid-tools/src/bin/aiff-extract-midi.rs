use std::process::ExitCode;

use tracing_subscriber::prelude::*;

const USAGE: &str = "usage: aiff-extract-midi <FILE>";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    let args = std::env::args_os().skip(1).collect::<Vec<_>>();
    let [path] = args.as_slice() else {
        eprintln!("invalid invocation");
        eprintln!("{USAGE}");
        return ExitCode::from(1);
    };

    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("cannot open file: {err}");
            return ExitCode::from(2);
        }
    };

    // Pipes and FIFOs can't seek
    let seekable = file.metadata().is_ok_and(|x| x.is_file());
    let reader = std::io::BufReader::new(file);

    if seekable {
        match aiffmid::Seekable::new(reader) {
            Ok(source) => extract(source),
            Err(err) => {
                eprintln!("Error loading input file: {err}");
                ExitCode::from(3)
            }
        }
    } else {
        extract(aiffmid::Streamed::new(reader))
    }
}

fn extract(source: impl aiffmid::Skip) -> ExitCode {
    match aiffmid::extract_midi_to(source, std::io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(aiffmid::ExtractError::Decode(err)) => {
            eprintln!("Error loading input file: {err}");
            ExitCode::from(3)
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(3)
        }
    }
}
