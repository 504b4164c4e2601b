use clap::Parser;
use podman_docker_names::cli::{Args, Runner};
use podman_docker_names::Logger;

fn main() {
    let args = Args::parse();
    let runner = Runner::new(args);

    if let Err(e) = runner.run() {
        Logger::new(false).error(&e.to_string());
        std::process::exit(1);
    }
}
