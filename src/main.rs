use std::env;
use std::process;

use pkgfind::{run_lookup, LookupRequest, PythonInterpreter};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("Packages should be passed as arguments after the name of the searched file.");
        process::exit(1);
    }

    let request = LookupRequest {
        file_name: args[0].clone(),
        packages: args[1..].to_vec(),
    };
    let interpreter = PythonInterpreter::from_env();
    let report = run_lookup(&interpreter, &request);

    for failure in &report.failures {
        eprintln!("{failure}");
    }
    if !report.matches.is_empty() {
        match report.matches.to_json() {
            Ok(document) => println!("{document}"),
            Err(e) => {
                eprintln!("Error writing results: {e}.");
                process::exit(1);
            }
        }
    } else if !report.failures.is_empty() {
        process::exit(1);
    }
}
