use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use kp_form::{
    ALL_RELATIONS, AnswerSet, AnswerValue, Card, Derivation, FormConfig, FormSession, InputKind,
    PlanetStatusEntry, StalePolicy, aggregate, layout, lookup, star_lord_auto_filled,
};
use kp_vedic_base::{ALL_GRAHAS, StarChoice, star_choices};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kp", about = "KP house-analysis questionnaire CLI")]
struct Cli {
    /// Log derivation steps to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge signification entries into one summary
    Aggregate {
        /// Entries such as "1, 5, [2]"
        inputs: Vec<String>,
    },
    /// Star lord of a nakshatra
    StarLord {
        /// Star name, e.g. Ashwini or "Purva Falguni"
        star: String,
    },
    /// List the star picker with each star's lord
    Stars,
    /// Show the questions visible for saved answers
    Questions {
        /// Answer file (JSON object keyed by question key)
        #[arg(long)]
        answers: Option<PathBuf>,
        #[command(flatten)]
        form: FormArgs,
    },
    /// Compute totals, summary and planet status lists
    Derive {
        /// Answer file (JSON object keyed by question key)
        #[arg(long)]
        answers: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        form: FormArgs,
    },
    /// Apply edits to an answer file and write the result
    Fill {
        /// Answer file to start from; blank form when omitted
        #[arg(long)]
        answers: Option<PathBuf>,
        /// Edit as key=value; planet lists are comma separated, an empty
        /// value clears the answer
        #[arg(long = "set", value_name = "KEY=VALUE")]
        edits: Vec<String>,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        form: FormArgs,
    },
}

#[derive(Args)]
struct FormArgs {
    /// Session config file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Hidden-answer policy: retain (default) or mask
    #[arg(long)]
    stale_policy: Option<String>,
    /// Reject answers outside each question's vocabulary
    #[arg(long)]
    strict: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "kp_form=debug,kp=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn load_config(args: &FormArgs) -> FormConfig {
    let mut config = match &args.config {
        Some(path) => FormConfig::from_json(&read_file(path)).unwrap_or_else(|e| {
            eprintln!("Invalid config {}: {e}", path.display());
            std::process::exit(1);
        }),
        None => FormConfig::default(),
    };
    if let Some(name) = &args.stale_policy {
        config.stale_policy = StalePolicy::from_name(name).unwrap_or_else(|| {
            eprintln!("Invalid stale policy: {name}");
            eprintln!("Valid: retain (default), mask");
            std::process::exit(1);
        });
    }
    if args.strict {
        config.strict_vocabulary = true;
    }
    debug!(?config, "form config");
    config
}

fn open_session(answers: Option<&Path>, config: FormConfig) -> FormSession {
    let set = match answers {
        Some(path) => AnswerSet::from_json(&read_file(path)).unwrap_or_else(|e| {
            eprintln!("Invalid answer file {}: {e}", path.display());
            std::process::exit(1);
        }),
        None => AnswerSet::new(),
    };
    FormSession::with_answers(set, config).unwrap_or_else(|e| {
        eprintln!("Answers rejected: {e}");
        std::process::exit(1);
    })
}

fn parse_star(s: &str) -> StarChoice {
    StarChoice::parse(s).unwrap_or_else(|| {
        eprintln!("Invalid star: {s}");
        eprintln!("Run `kp stars` for the list of valid names");
        std::process::exit(1);
    })
}

fn apply_edit(session: &mut FormSession, edit: &str) {
    let Some((key, value)) = edit.split_once('=') else {
        eprintln!("Invalid edit: {edit} (expected KEY=VALUE)");
        std::process::exit(1);
    };
    let key = key.trim();
    let is_list = lookup(key).is_some_and(|q| q.kind() == InputKind::PlanetList);
    let result = if value.trim().is_empty() {
        session.clear(key)
    } else if is_list {
        session.set_list(key, value.split(',').map(str::trim))
    } else {
        session.set_text(key, value)
    };
    if let Err(e) = result {
        eprintln!("Cannot apply {edit}: {e}");
        std::process::exit(1);
    }
}

fn display_value(value: Option<&AnswerValue>) -> String {
    match value {
        Some(AnswerValue::Text(s)) => s.clone(),
        Some(AnswerValue::List(v)) => v.join(", "),
        None => String::new(),
    }
}

fn print_entries(label: &str, entries: &[PlanetStatusEntry]) {
    println!("{label}:");
    if entries.is_empty() {
        println!("  (none)");
    }
    for e in entries {
        println!("  {:<8} {}", e.planet, e.designation);
    }
}

fn print_derivation(d: &Derivation) {
    for relation in ALL_RELATIONS {
        println!("{:<32} {}", relation.title(), d.total(relation));
    }
    println!("{:<32} {}", "Summary", d.summary);
    println!();
    print_entries("Direct", &d.planet_status.direct);
    print_entries("Retrograde", &d.planet_status.retrograde);
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Aggregate { inputs } => {
            println!("{}", aggregate(&inputs));
        }

        Commands::StarLord { star } => match parse_star(&star) {
            StarChoice::Star(n) => {
                let lord = n.lord();
                println!("{} -> {} ({})", n.name(), lord.name(), lord.sanskrit_name());
            }
            StarChoice::NotAvailable => {
                println!("Star not available: enter the star lord by hand");
                let names: Vec<&str> = ALL_GRAHAS.iter().map(|g| g.name()).collect();
                println!("Choices: {}", names.join(", "));
            }
        },

        Commands::Stars => {
            for choice in star_choices() {
                match choice.star_lord() {
                    Some(lord) => println!("{:<20} {}", choice.label(), lord.name()),
                    None => println!("{}", choice.label()),
                }
            }
        }

        Commands::Questions { answers, form } => {
            let session = open_session(answers.as_deref(), load_config(&form));
            let structured = session.structured();
            let auto_filled = star_lord_auto_filled(&structured);
            let mut card: Option<Card> = None;
            for q in session.visible_questions() {
                if card != Some(q.card()) {
                    card = Some(q.card());
                    println!("\n== {} ==", q.card().title());
                }
                let mut value = display_value(session.get(q.key));
                if q.kind() == InputKind::Derived || (q.key == layout::STAR_LORD && auto_filled) {
                    value.push_str(" (auto)");
                }
                println!("{}\n    [{}] {}", q.prompt(&structured), q.key, value.trim());
            }
        }

        Commands::Derive { answers, json, form } => {
            let session = open_session(Some(&answers), load_config(&form));
            let d = session.derivation();
            if json {
                match d.to_json_pretty() {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Failed to encode result: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_derivation(d);
            }
        }

        Commands::Fill { answers, edits, out, form } => {
            let mut session = open_session(answers.as_deref(), load_config(&form));
            for edit in &edits {
                apply_edit(&mut session, edit);
            }
            info!(edits = edits.len(), "edits applied");
            let json = session.answers().to_json_pretty().unwrap_or_else(|e| {
                eprintln!("Failed to encode answers: {e}");
                std::process::exit(1);
            });
            match out {
                Some(path) => {
                    if let Err(e) = std::fs::write(&path, json + "\n") {
                        eprintln!("Failed to write {}: {e}", path.display());
                        std::process::exit(1);
                    }
                }
                None => println!("{json}"),
            }
        }
    }
}
