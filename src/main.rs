use echoisle::cli;
use echoisle::services::game::Game;

fn main() {
    println!("*** ECHO ISLE ***");
    println!();

    let args = cli::args::parse();
    let seed = args.seed.unwrap_or(0);

    let mut game = Game::new(seed);
    if let Err(e) = game.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
