/// Expand preview — interactive shell for testing macro expansion.
///
/// Usage: expand_preview [--oaths <path>] [--seed <n>]
///
/// Commands:
///   say <text>                    — expand a line of text
///   player <full name>            — set player name
///   race <name>                   — set player race
///   region <name>                 — set current region
///   date <text>                   — set quest start date string
///   npc <male|female> [god]       — set last-referenced NPC
///   npc none                      — clear last-referenced NPC
///   res <symbol> <class> <text>   — register a stub resource expansion
///   seed <n>                      — set RNG seed
///   help                          — list commands
///   quit                          — exit
use std::io::{self, BufRead, Write};
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use quest_macros::core::engine::expand_text;
use quest_macros::core::matcher::MacroClass;
use quest_macros::core::resource::{StaticResource, SymbolTable};
use quest_macros::core::text_table::TextTable;
use quest_macros::schema::context::ResolutionContext;
use quest_macros::schema::npc::{Gender, NpcRef};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut oaths_path = None;
    let mut seed: u64 = 42;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--oaths" if i + 1 < args.len() => {
                i += 1;
                oaths_path = Some(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut oaths = TextTable::new();
    if let Some(ref path) = oaths_path {
        match TextTable::load_from_ron(Path::new(path)) {
            Ok(table) => {
                println!("Loaded {} text tables from {}", table.entries.len(), path);
                oaths.merge(table);
            }
            Err(e) => eprintln!("ERROR loading {}: {}", path, e),
        }
    }

    // Session state
    let mut player_name = "Gortwog gro-Nagorm".to_string();
    let mut player_race = "Orc".to_string();
    let mut current_region = "Orsinium".to_string();
    let mut quest_start_date = "12 Hearthfire, 3E 405".to_string();
    let mut last_npc: Option<NpcRef> = None;
    let mut registry = SymbolTable::new();
    let mut rng = StdRng::seed_from_u64(seed);

    println!("Seed: {}", seed);
    println!("Type 'help' for commands.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("expand> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = match line.split_once(' ') {
            Some((c, r)) => (c.to_lowercase(), r.trim()),
            None => (line.to_lowercase(), ""),
        };

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => print_help(),
            "say" => {
                if rest.is_empty() {
                    println!("Usage: say <text>");
                    continue;
                }
                let ctx = ResolutionContext {
                    player_name: player_name.clone(),
                    player_race: player_race.clone(),
                    current_region: current_region.clone(),
                    quest_start_date: quest_start_date.clone(),
                    last_npc: last_npc.clone(),
                    text_source: &oaths,
                };
                println!("{}", expand_text(rest, &ctx, &registry, &mut rng));
            }
            "player" => set_field("player name", &mut player_name, rest),
            "race" => set_field("player race", &mut player_race, rest),
            "region" => set_field("region", &mut current_region, rest),
            "date" => set_field("quest start date", &mut quest_start_date, rest),
            "npc" => {
                let parts: Vec<&str> = rest.split_whitespace().collect();
                match parts.first().copied() {
                    Some("none") => {
                        last_npc = None;
                        println!("Last-referenced NPC cleared.");
                    }
                    Some(gender_word) => {
                        let gender = match gender_word {
                            "male" | "m" => Gender::Male,
                            "female" | "f" => Gender::Female,
                            other => {
                                println!("Unknown gender: {}", other);
                                continue;
                            }
                        };
                        let god = parts.get(1).copied().unwrap_or("Arkay");
                        last_npc = Some(NpcRef::new(gender, god));
                        println!("NPC set: {:?}, god {}", gender, god);
                    }
                    None => {
                        println!("Usage: npc <male|female> [god]  |  npc none");
                    }
                }
            }
            "res" => {
                let parts: Vec<&str> = rest.splitn(3, ' ').collect();
                if parts.len() < 3 {
                    println!("Usage: res <symbol> <class> <text>");
                    println!("  class: name1, name2, name3, name4, faction, binding, details");
                    continue;
                }
                let class = match parse_class(parts[1]) {
                    Some(c) => c,
                    None => {
                        println!("Unknown class: {}", parts[1]);
                        continue;
                    }
                };
                registry.insert(
                    parts[0],
                    Box::new(StaticResource::new().with(class, parts[2])),
                );
                println!("Resource '{}' registered for {:?}", parts[0], class);
            }
            "seed" => match rest.parse::<u64>() {
                Ok(s) => {
                    rng = StdRng::seed_from_u64(s);
                    println!("Seed set to {}", s);
                }
                Err(_) => println!("Invalid seed: {}", rest),
            },
            _ => {
                println!("Unknown command: '{}'. Type 'help' for available commands.", cmd);
            }
        }
    }
}

fn set_field(label: &str, field: &mut String, value: &str) {
    if value.is_empty() {
        println!("Current {}: {}", label, field);
    } else {
        *field = value.to_string();
        println!("{} set to '{}'", label, field);
    }
}

fn parse_class(s: &str) -> Option<MacroClass> {
    match s.to_lowercase().as_str() {
        "name1" => Some(MacroClass::Name1),
        "name2" => Some(MacroClass::Name2),
        "name3" => Some(MacroClass::Name3),
        "name4" => Some(MacroClass::Name4),
        "faction" => Some(MacroClass::Faction),
        "binding" => Some(MacroClass::Binding),
        "details" => Some(MacroClass::Details),
        _ => None,
    }
}

fn print_usage() {
    println!("Expand preview — interactive shell for testing macro expansion.");
    println!();
    println!("Usage: expand_preview [--oaths <path>] [--seed <n>]");
    println!();
    println!("  --oaths <path>  Path to a RON text-table file for %oth lines");
    println!("  --seed <n>      Initial RNG seed (default: 42)");
}

fn print_help() {
    println!("Commands:");
    println!("  say <text>                   Expand a line of text");
    println!("  player <full name>           Set player name");
    println!("  race <name>                  Set player race");
    println!("  region <name>                Set current region");
    println!("  date <text>                  Set quest start date string");
    println!("  npc <male|female> [god]      Set last-referenced NPC");
    println!("  npc none                     Clear last-referenced NPC");
    println!("  res <symbol> <class> <text>  Register a stub resource expansion");
    println!("  seed <n>                     Set RNG seed");
    println!("  help                         Show this help");
    println!("  quit                         Exit");
    println!();
    println!("Macro forms: %pcn %pcf %qdt %ra %pct %oth %reg %god %g %g1 %g2 %g2self %g3");
    println!("             ____sym_ ___sym_ __sym_ _sym_ ==sym_ =#sym_ =sym_");
}
