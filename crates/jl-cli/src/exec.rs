//! The extraction command: compile the pattern, stream the inputs.

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;

use jl_lib::{Pattern, PatternErrorPrinter, Runtime};

pub struct ExecArgs {
    pub fieldsep: String,
    pub pattern: String,
    pub files: Vec<PathBuf>,
}

pub fn run(args: ExecArgs) {
    let pattern = match Pattern::compile(&args.pattern) {
        Ok(pattern) => pattern,
        Err(e) => {
            // Check both streams: if either is piped, disable colors.
            let colored = io::stdout().is_terminal() && io::stderr().is_terminal();
            eprintln!(
                "{}",
                PatternErrorPrinter::new(&e, &args.pattern)
                    .colored(colored)
                    .render()
            );
            std::process::exit(1);
        }
    };

    let stdout = io::stdout().lock();
    let out = BufWriter::new(stdout);

    let result = if args.files.is_empty() {
        let mut runtime = Runtime::new(&pattern, &args.fieldsep, out);
        match runtime.process(io::stdin().lock()) {
            Ok(()) => Ok(runtime.into_output()),
            Err(e) => Err(e),
        }
    } else {
        extract_files(&pattern, &args.fieldsep, &args.files, out)
    };

    if let Err(e) = result.and_then(|mut out| out.flush().map_err(Into::into)) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Runs every file through one runtime, so all of them feed the same tables.
pub(crate) fn extract_files<W: Write>(
    pattern: &Pattern,
    fieldsep: &str,
    files: &[PathBuf],
    out: W,
) -> jl_lib::Result<W> {
    let mut runtime = Runtime::new(pattern, fieldsep, out);
    for path in files {
        let file = File::open(path)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))?;
        runtime.process(file)?;
    }
    Ok(runtime.into_output())
}
