//! # Example: trace
//!
//! Traced subscriptions and the rendered audit report.
//!
//! Shows how to:
//! - Subscribe through [`Bulletin::subscribe_traced`] with origin context.
//! - Render the report with [`TraceLog::render`].
//! - Surface unsubscribe misses with the debug flag.
//!
//! ## Run
//! ```bash
//! cargo run --example trace
//! ```

use bulletin::{Bulletin, HandlerError, HandlerFn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum AppIssue {
    Saved,
    Loaded,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let board = Bulletin::new();
    board.set_debug(true);

    let banner = board.subscribe_traced(
        AppIssue::Saved,
        HandlerFn::arc("banner", || {
            println!("[banner] saved!");
            Ok::<_, HandlerError>(())
        }),
        Some("ui:banner"),
        "save banner flash",
    );
    board.subscribe_traced(
        AppIssue::Saved,
        HandlerFn::arc("cloud", || {
            println!("[cloud] queueing upload");
            Ok::<_, HandlerError>(())
        }),
        Some("sync:cloud"),
        "cloud sync kick",
    );
    board.subscribe_traced(
        AppIssue::Loaded,
        HandlerFn::arc("spinner", || {
            println!("[spinner] hiding");
            Ok::<_, HandlerError>(())
        }),
        None,
        "loading spinner teardown",
    );

    board.publish(AppIssue::Saved)?;
    board.publish(AppIssue::Loaded)?;

    println!("\n{}", board.trace().render());

    // First unsubscribe removes the registration; the second one misses and,
    // with the debug flag on, emits a tracing line.
    board.unsubscribe(banner);
    board.unsubscribe(banner);

    // The audit trail keeps the banner record even though it unsubscribed.
    println!("{}", board.trace().render());
    Ok(())
}
