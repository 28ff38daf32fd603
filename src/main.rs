use hunch::{build_info, session};
use std::io;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Hunch - Terminal Number-Guessing Game\n");
                println!("Usage: hunch\n");
                println!("Pick a difficulty, then find the secret number before your");
                println!("attempts run out. Each miss tells you the direction, how close");
                println!("you are, and whether you got closer than your last guess.");
                println!("Type 'q' at a guess prompt to leave the round.");
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'hunch --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut rng = rand::thread_rng();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    session::run_session(&mut rng, &mut input, &mut output)
}
