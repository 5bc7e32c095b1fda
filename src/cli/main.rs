#![allow(clippy::collapsible_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

mod inspect;
mod parse;
mod read;
mod solve;

fn main() {
    env_logger::init();

    let matches = match parse::cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            match e.use_stderr() {
                true => std::process::exit(1),
                false => std::process::exit(0),
            }
        }
    };

    let code = match matches.subcommand() {
        Some(("solve", args)) => solve::solve(args),
        Some(("inspect", args)) => inspect::inspect(args),
        _ => {
            println!("c No command given, see --help");
            1
        }
    };

    std::process::exit(code)
}
