//! # Example: pubsub
//!
//! Round trip through the board: subscribe, publish, unsubscribe.
//!
//! Shows how to:
//! - Declare an issue enum.
//! - Register handlers with [`HandlerFn`] and keep the [`Subscription`] tokens.
//! - Publish and observe registration-order invocation.
//! - Unsubscribe one registration and publish again.
//!
//! ## Run
//! ```bash
//! cargo run --example pubsub
//! ```

use bulletin::{Bulletin, HandlerError, HandlerFn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum GameIssue {
    PlayerDied,
    ScoreChanged,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let board = Bulletin::new();

    let respawn = board.subscribe(
        GameIssue::PlayerDied,
        HandlerFn::arc("respawn", || {
            println!("[respawn] moving player to checkpoint");
            Ok::<_, HandlerError>(())
        }),
    );
    board.subscribe(
        GameIssue::PlayerDied,
        HandlerFn::arc("death-counter", || {
            println!("[death-counter] +1");
            Ok::<_, HandlerError>(())
        }),
    );
    board.subscribe(
        GameIssue::ScoreChanged,
        HandlerFn::arc("hud", || {
            println!("[hud] refreshing score label");
            Ok::<_, HandlerError>(())
        }),
    );

    println!("publish PlayerDied:");
    board.publish(GameIssue::PlayerDied)?;

    println!("\npublish ScoreChanged:");
    board.publish(GameIssue::ScoreChanged)?;

    println!("\nunsubscribe respawn, publish PlayerDied again:");
    board.unsubscribe(respawn);
    board.publish(GameIssue::PlayerDied)?;

    println!(
        "\nPlayerDied now has {} subscriber(s)",
        board.subscribers(GameIssue::PlayerDied).len()
    );
    Ok(())
}
