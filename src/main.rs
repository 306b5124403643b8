use bitspin::cli::Args;
use bitspin::prelude::*;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Create adapters (Dependency Injection)
    let stream_provider = FileSystemStreams::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = RotateFileUseCase::new(stream_provider, progress_reporter);

    // Create request and execute
    let request = RotateRequest::builder()
        .direction(args.direction)
        .input_path(args.input)
        .output_path(args.output)
        .build()?;

    use_case.execute(request)?;

    Ok(())
}
