use gomoku::{parse_move, Match, MatchRecorder, ScriptedMoves};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <row,col>...", args[0]);
        std::process::exit(1);
    }
    let moves = args[1..]
        .iter()
        .map(|arg| parse_move(arg).map_err(|e| anyhow::anyhow!("bad move '{}': {}", arg, e)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut source = ScriptedMoves::new(moves);
    let mut recorder = MatchRecorder::new();
    let mut game = Match::new();
    // a short script simply leaves the match in progress
    let status = game
        .run(&mut source, &mut recorder)
        .unwrap_or_else(|_| game.status());

    let result = json!({
        "status": status,
        "winner": status.winner().map(|m| m.to_string()),
        "moves": game.move_count(),
        "rejected": source.rejected().len(),
        "board": game.board().snapshot(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
