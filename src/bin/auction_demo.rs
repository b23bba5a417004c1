//! Non-interactive scenario runner exercising `prepare_registration` and
//! `AuctionCoordinator` end to end. Takes no input; this is not an
//! interactive front-end, just a fixed batch of auction scenarios.

use veiled_auction::config::AuctionConfig;
use veiled_auction::coordinator::AuctionCoordinator;
use veiled_auction::group::CurveContext;
use veiled_auction::prover::prepare_registration;

fn run_scenario(name: &str, min_bid: u64, max_bid: u64, bids: &[(&str, u64)]) {
    println!("\n--- {name} ---");
    let ctx = CurveContext::new();
    let mut coordinator = AuctionCoordinator::new(AuctionConfig::new(min_bid, max_bid).unwrap());

    for (id, _) in bids {
        coordinator.register(*id);
    }

    for (id, bid) in bids {
        match prepare_registration(&ctx, *id, *bid, coordinator.config(), coordinator.sharing_prime()) {
            Ok(package) => match coordinator.submit_registration(package) {
                Ok(()) => println!("{id}: bid accepted"),
                Err(reason) => println!("{id}: rejected ({reason})"),
            },
            Err(reason) => println!("{id}: rejected before submission ({reason})"),
        }
    }

    match coordinator.compute_winner() {
        Some((winner, value)) => println!("winner: {winner}, value: {value}"),
        None => println!("no valid bids"),
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    run_scenario("scenario 1", 100, 1000, &[("B1", 150), ("B2", 920), ("B3", 600)]);
    run_scenario(
        "scenario 2 (tie-break)",
        100,
        1000,
        &[("B1", 350), ("B2", 350), ("B3", 100), ("B4", 300)],
    );
    run_scenario(
        "scenario 3 (out-of-range bidders excluded)",
        100,
        1000,
        &[("B1", 10), ("B2", 999), ("B3", 300), ("B4", 700), ("B5", 2000)],
    );
    run_scenario("scenario 4 (boundary low)", 100, 1000, &[("B1", 100)]);
    run_scenario("scenario 5 (boundary high)", 100, 1000, &[("B1", 1000)]);
    run_scenario("scenario 6 (empty)", 100, 1000, &[]);
}
