use std::process;

use clap::{App, Arg};

use meowkoban::engine::PuzzleEngine;
use meowkoban::rooms::RoomCatalog;
use meowkoban::solver::{self, Hint};
use meowkoban::LoadRoom;

fn main() {
    env_logger::init();

    let matches = App::new("meowkoban")
        .version("0.1.0")
        .about("A cat pushes glass onto destination tiles. Finds optimal solutions.")
        .arg(
            Arg::with_name("file")
                .help("Room layout file to solve")
                .conflicts_with("room")
                .conflicts_with("list"),
        )
        .arg(
            Arg::with_name("room")
                .short("-r")
                .long("--room")
                .takes_value(true)
                .help("Builtin room index to solve (default 0)"),
        )
        .arg(
            Arg::with_name("list")
                .short("-l")
                .long("--list")
                .help("List builtin rooms"),
        )
        .arg(
            Arg::with_name("hint")
                .long("--hint")
                .help("Print only the first move instead of the whole solution"),
        )
        .arg(
            Arg::with_name("status")
                .long("--status")
                .help("Print search progress and stats"),
        )
        .get_matches();

    let catalog = RoomCatalog::builtin();

    if matches.is_present("list") {
        for (index, room) in catalog.iter().enumerate() {
            println!("{}: {}", index, room.description);
        }
        return;
    }

    let engine = if let Some(file) = matches.value_of("file") {
        println!("Solving {}...", file);
        file.load_room().unwrap_or_else(|err| {
            eprintln!("Can't load room {}: {}", file, err);
            process::exit(1);
        })
    } else {
        let index = matches
            .value_of("room")
            .unwrap_or("0")
            .parse()
            .unwrap_or_else(|_| {
                eprintln!("Room index must be a number");
                process::exit(1);
            });
        println!("Solving builtin room {}...", index);
        PuzzleEngine::from_catalog(&catalog, index).unwrap_or_else(|err| {
            eprintln!("Can't load room {}: {}", index, err);
            process::exit(1);
        })
    };

    print!("{}", engine.format());
    println!();

    let print_status = matches.is_present("status");
    let solver_ok = solver::find_hint(&engine, print_status).unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });
    if print_status {
        print!("{}", solver_ok.stats);
        println!();
    }

    match solver_ok.hint {
        Hint::AlreadySolved => println!("Already solved"),
        Hint::NoSolution => println!("No solution"),
        Hint::Solution(path) => {
            if matches.is_present("hint") {
                // path is never empty when a solution is reported
                println!("Hint: try moving {}", path.first().unwrap().name());
                return;
            }

            println!("Found solution: {}", path);

            // replay the solution to count pushes and show the end position
            let mut replay = PuzzleEngine::with_state(engine.share_map(), engine.state().clone());
            let mut pushes = 0;
            for &dir in &path {
                let outcome = replay.apply_move(dir).unwrap_or_else(|err| {
                    eprintln!("Solver returned an illegal move: {}", err);
                    process::exit(1);
                });
                if outcome.pushed {
                    pushes += 1;
                }
            }
            println!("Moves: {}", path.len());
            println!("Pushes: {}", pushes);
            println!();
            println!("Final state:");
            print!("{}", replay.format());
        }
    }
}
