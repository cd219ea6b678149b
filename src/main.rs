use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::Path;
use tracing::{debug, Level};

use utcgen::generating;
use utcgen::language::Specification;
use utcgen::output;
use utcgen::parsing;
use utcgen::templating::{self, MsTest};

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("utcgen")
        .version(VERSION)
        .propagate_version(true)
        .about("Generate unit test stubs from tabular test case specifications.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit diagnostic logging to standard error."),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate a test class with one stub per test case")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .action(ArgAction::Set)
                        .help("Where to write the generated code. Use '-' for standard output. Defaults to the class name with a .cs extension."),
                )
                .arg(
                    Arg::new("namespace")
                        .long("namespace")
                        .action(ArgAction::Set)
                        .default_value("Tests")
                        .help("The namespace to declare the test class in."),
                )
                .arg(
                    Arg::new("class")
                        .long("class")
                        .action(ArgAction::Set)
                        .default_value("GeneratedFunctionTests")
                        .help("The name of the generated test class."),
                )
                .arg(
                    Arg::new("context")
                        .long("context")
                        .action(ArgAction::Set)
                        .default_value("ApplicationDbContext")
                        .help("The database context type each test builds an in-memory instance of."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The markdown document containing the test case specifications."),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the functions and test cases found in a document")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the parsed specification as JSON rather than as a summary."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The markdown document containing the test case specifications."),
                ),
        )
        .get_matches();

    let verbose = matches.get_flag("debug")
        || matches
            .subcommand()
            .map(|(_, submatches)| submatches.get_flag("debug"))
            .unwrap_or(false);

    let level = if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("generate", submatches)) => generate(submatches),
        Some(("inspect", submatches)) => inspect(submatches),
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: utcgen [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn generate(submatches: &ArgMatches) {
    let filename = submatches
        .get_one::<String>("filename")
        .expect("filename is a required argument");
    let filename = Path::new(filename);

    let template = MsTest {
        namespace: argument(submatches, "namespace"),
        class: argument(submatches, "class"),
        database: argument(submatches, "context"),
    };

    let target = match submatches.get_one::<String>("output") {
        Some(output) => output.clone(),
        None => format!("{}.cs", template.class),
    };
    let target = Path::new(&target);
    let to_stdout = target.to_str() == Some("-");

    debug!(?filename, ?target);

    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    let specification = parsing::parse(&content);

    if to_stdout {
        eprint!("{}", summary(&specification));
    } else {
        print!("{}", summary(&specification));
    }

    let units = generating::generate(&specification);

    let result = match templating::fill(&template, &units) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("{}", problem::concise_rendering_error(&error));
            std::process::exit(1);
        }
    };

    match output::write(target, &result) {
        Ok(()) => {
            if !to_stdout {
                println!("Generated test code at: {}", target.display());
            }
        }
        Err(error) => {
            eprintln!("{}", problem::concise_writing_error(&error));
            std::process::exit(1);
        }
    }
}

fn inspect(submatches: &ArgMatches) {
    let filename = submatches
        .get_one::<String>("filename")
        .expect("filename is a required argument");
    let filename = Path::new(filename);

    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    let specification = parsing::parse(&content);

    if submatches.get_flag("json") {
        match serde_json::to_string_pretty(&specification) {
            Ok(json) => println!("{}", json),
            Err(error) => {
                eprintln!("error: {}", error);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", summary(&specification));
    }
}

fn argument(submatches: &ArgMatches, name: &str) -> String {
    submatches
        .get_one::<String>(name)
        .cloned()
        .unwrap_or_default()
}

/// One line per function: its key, declared name, and how many test cases
/// it has.
fn summary(specification: &Specification) -> String {
    let mut result = format!(
        "Found {} function{}:\n",
        specification.len(),
        if specification.len() == 1 { "" } else { "s" }
    );

    for record in &specification.functions {
        result.push_str(&format!(
            "  {}: {} ({} test case{})\n",
            record.key(),
            record.name,
            record.total_test_cases(),
            if record.total_test_cases() == 1 { "" } else { "s" }
        ));
    }

    result
}
