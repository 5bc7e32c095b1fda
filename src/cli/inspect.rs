use std::{path::PathBuf, time::Instant};

use clap::ArgMatches;

use trail_sat::io::{dimacs::DimacsReader, ClauseSource, Header};

use crate::read::file_reader;

struct Inspection {
    header: Header,
    read_time: std::time::Duration,
    name: String,
}

/// Lists the header of each file matching the pattern of `args`, ordered by count of literals.
pub fn inspect(args: &ArgMatches) -> i32 {
    let (Some(directory), Some(pattern)) = (
        args.get_one::<PathBuf>("directory"),
        args.get_one::<String>("pattern"),
    ) else {
        println!("c A directory is required");
        return 1;
    };

    let full_pattern = directory.join(pattern);
    let paths = match glob::glob(&full_pattern.to_string_lossy()) {
        Ok(paths) => paths,
        Err(e) => {
            println!("c Invalid pattern {pattern}: {e}");
            return 1;
        }
    };

    let mut inspections = Vec::default();

    for path in paths.flatten() {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };

        let start = Instant::now();
        let header = match file_reader(&path) {
            Ok(reader) => DimacsReader::new(reader).read_header(),
            Err(e) => {
                println!("c {e}");
                continue;
            }
        };
        let read_time = start.elapsed();

        match header {
            Ok(header) => inspections.push(Inspection {
                header,
                read_time,
                name,
            }),
            Err(e) => println!("c {name}: {e}"),
        }
    }

    inspections.sort_by_key(|inspection| inspection.header.literal_count);

    for inspection in &inspections {
        println!(
            "{:>10} {:>10} {:>12.2?} {}",
            inspection.header.literal_count,
            inspection.header.clause_count,
            inspection.read_time,
            inspection.name
        );
    }

    0
}
