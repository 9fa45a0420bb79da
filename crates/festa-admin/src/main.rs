//! Festa staff console demo
//!
//! Renders the circles grid (and the registration entry outcomes) over an
//! in-memory demo store. Purely a development aid; the real deployment sits
//! behind the web layer.

use clap::{value_parser, Arg, ArgAction, Command};
use festa_admin::{AuthGate, RegistrationEntry, Session, READ_TERMS_SESSION_KEY};
use festa_grid::{CirclesGridSource, GridConfig, GridSource};
use festa_store::{MemoryStore, SortDirection, SortOrder};
use festa_test_utils::{sample_form, sample_reviewer, seeded_store, submitted_circle};
use std::sync::Arc;

struct CliGate(bool);

impl AuthGate for CliGate {
    fn allows(&self, _ability: &str) -> bool {
        self.0
    }
}

struct CliSession {
    read_terms: bool,
}

impl Session for CliSession {
    fn has(&self, key: &str) -> bool {
        key == READ_TERMS_SESSION_KEY && self.read_terms
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Command::new("festa-admin")
        .version("0.1.0")
        .about("Festa staff console (in-memory demo)")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("grid")
                .about("Render the circles grid over demo data")
                .arg(
                    Arg::new("rows")
                        .long("rows")
                        .default_value("5")
                        .value_parser(value_parser!(i64))
                        .help("Number of demo circles to seed"),
                )
                .arg(
                    Arg::new("order")
                        .long("order")
                        .help("Sort key; prefix with '-' for descending"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the full page as pretty JSON"),
                ),
        )
        .subcommand(Command::new("filters").about("Print the grid's filter descriptors"))
        .subcommand(
            Command::new("entry")
                .about("Resolve the public registration entry outcome")
                .arg(
                    Arg::new("deny")
                        .long("deny")
                        .action(ArgAction::SetTrue)
                        .help("Simulate a caller without the create ability"),
                )
                .arg(
                    Arg::new("read-terms")
                        .long("read-terms")
                        .action(ArgAction::SetTrue)
                        .help("Simulate a session that already accepted the terms"),
                )
                .arg(
                    Arg::new("with-terms")
                        .long("with-terms")
                        .action(ArgAction::SetTrue)
                        .help("Give the demo form a description (enables the terms step)"),
                ),
        );

    match cli.get_matches().subcommand() {
        Some(("grid", args)) => {
            let rows = *args.get_one::<i64>("rows").unwrap();
            let order = args.get_one::<String>("order").map(|raw| {
                match raw.strip_prefix('-') {
                    Some(key) => SortOrder {
                        key: key.to_string(),
                        direction: SortDirection::Desc,
                    },
                    None => SortOrder::asc(raw.clone()),
                }
            });

            let store = Arc::new(seeded_store(rows));
            let grid = CirclesGridSource::new(&GridConfig::new(), store.clone(), store.as_ref())?;
            let page = grid.render_page(order)?;

            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                println!("columns: {}", page.keys.join(", "));
                for row in &page.rows {
                    println!("{}", serde_json::to_string(row)?);
                }
                println!();
                println!(
                    "{} rows, {} store statements",
                    page.len(),
                    store.stats().statements()
                );
            }
        }
        Some(("filters", _)) => {
            let store = Arc::new(seeded_store(0));
            let grid = CirclesGridSource::new(&GridConfig::new(), store.clone(), store.as_ref())?;
            println!("{}", serde_json::to_string_pretty(&grid.filterable_keys()?)?);
        }
        Some(("entry", args)) => {
            let mut store = MemoryStore::new();
            let form = if args.get_flag("with-terms") {
                sample_form().with_description("Circles must accept the participation terms.")
            } else {
                sample_form()
            };
            store.insert_form(form);
            store.insert_user(sample_reviewer());
            store.insert_circle(submitted_circle(1, "Demo Circle"));

            let gate = CliGate(!args.get_flag("deny"));
            let session = CliSession {
                read_terms: args.get_flag("read-terms"),
            };
            let entry = RegistrationEntry::new(&gate, &session, &store);
            println!("{:#?}", entry.invoke()?);
        }
        _ => unreachable!("arg_required_else_help"),
    }

    Ok(())
}
