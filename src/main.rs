use clap::{value_t, App, Arg};
use dpll::formula::dimacs::{parse, parse_file};
use dpll::*;
use std::time::Duration;

// SAT competition exit codes
const EXIT_SATISFIABLE: i32 = 10;
const EXIT_UNSATISFIABLE: i32 = 20;
const EXIT_UNKNOWN: i32 = 0;

fn main() {
    env_logger::init();

    let matches = App::new("dpll")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decides satisfiability of a CNF formula by DPLL search")
        .arg(
            Arg::with_name("INPUT")
                .help("input file (in DIMACS CNF); reads stdin if omitted")
                .index(1),
        )
        .arg(
            Arg::with_name("model")
                .short("m")
                .long("model")
                .help("print the satisfying assignment as a 'v' line"),
        )
        .arg(
            Arg::with_name("time-limit")
                .short("t")
                .long("time-limit")
                .value_name("SECONDS")
                .takes_value(true)
                .help("give up and report 'unknown' after this many seconds"),
        )
        .get_matches();

    let time_limit = if matches.is_present("time-limit") {
        Some(Duration::from_secs(
            value_t!(matches, "time-limit", u64).unwrap_or_else(|e| e.exit()),
        ))
    } else {
        None
    };

    let f = if let Some(path) = matches.value_of("INPUT") {
        parse_file(path)
    } else {
        parse(std::io::stdin())
    };

    match f {
        Ok(f) => {
            let mut solver = Solver::with_config(f, Config { time_limit });

            let exit_code = match solver.solve() {
                SatResult::Satisfiable(model) => {
                    println!("sat");
                    if matches.is_present("model") {
                        println!("{}", model);
                    }
                    EXIT_SATISFIABLE
                }
                SatResult::Unsatisfiable => {
                    println!("unsat");
                    EXIT_UNSATISFIABLE
                }
                SatResult::Unknown => {
                    println!("unknown");
                    EXIT_UNKNOWN
                }
            };
            log::debug!("{:?}", solver.stats());
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("parse error: {}", e);
            std::process::exit(1);
        }
    }
}
