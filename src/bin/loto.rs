//! Loto Binary
//!
//! Console lottery: humans and computers race to clear a 3x9 card as
//! barrels 1..=90 are drawn from the bag.

use clap::Parser;
use loto::play::Table;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// how many human players take a seat
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    players: u8,
    /// how many computer players take a seat
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    computers: u8,
}

fn main() {
    loto::log();
    let args = Args::parse();
    let mut rng = rand::rng();
    let mut table = match Table::setup(args.players as usize, args.computers as usize, &mut rng) {
        Ok(table) => table,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    table.play(&mut rng);
}
