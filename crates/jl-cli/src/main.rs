mod cli;
mod exec;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod exec_tests;

fn main() {
    let matches = cli::build_cli().get_matches();
    let params = cli::Params::from_matches(&matches);
    exec::run(params.into());
}
