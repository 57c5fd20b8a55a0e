//! Time Travel
//!
//! This example plays a short game through the same three entry points a
//! UI would use, then jumps back and branches off into a different line.
//!
//! Key concepts:
//! - `play` / `jump_to` intents and their rejections
//! - Reading a `View` to render the board, status and move list
//! - Truncation of future history on a new move
//!
//! Run with: RUST_LOG=timetoe=debug cargo run --example time_travel

use timetoe::audit::audit;
use timetoe::{GameBuilder, Symbols, View};
use tracing_subscriber::EnvFilter;

fn render(view: &View) {
    println!("{}", view.render_board());
    println!("{}", view.status_line());
    for entry in &view.moves {
        let marker = if entry.is_current { ">" } else { " " };
        println!("  {marker} {}", entry.label);
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,timetoe=debug")),
        )
        .init();

    println!("=== Time Travel Example ===\n");

    let mut game = GameBuilder::new()
        .symbols(Symbols {
            x: 'X',
            o: 'O',
            empty: '·',
        })
        .build()?;

    for cell in [0, 3, 1, 4, 2] {
        game.play(cell)?;
    }
    render(&game.current_view());

    if let Err(rejection) = game.play(8) {
        println!("Rejected: {rejection}\n");
    }

    println!("Jumping back to move #3 and playing 2 for O instead...\n");
    game.jump_to(3)?;
    game.play(2)?;
    render(&game.current_view());

    println!("Audit clean: {}", audit(&game).is_success());
    println!("\n=== Example Complete ===");
    Ok(())
}
