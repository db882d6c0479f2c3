//! Seeded random self-play for exercising the rules engine end to end.
//!
//! Each game picks uniformly among all legal moves of the side to move until
//! checkmate, stalemate, or the ply limit. Pawns reaching their promotion rank
//! are promoted to `PlayoutConfig::promotion_kind`.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::directions::rank_of;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Checkmate { winner: Team },
    Stalemate,
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    pub promotion_kind: PieceKind,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            promotion_kind: PieceKind::Queen,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub final_state: GameState,
    pub moves_played: Vec<(Square, Square)>,
    pub captures: u16,
}

#[derive(Debug, Clone)]
pub struct PlayoutSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: PlayoutConfig,
    pub verbose: bool,
}

impl Default for PlayoutSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: PlayoutConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayoutSeriesStats {
    pub games: u16,
    pub first_wins: u16,
    pub second_wins: u16,
    pub stalemates: u16,
    pub unfinished: u16,
    pub total_plies: u32,
    pub total_captures: u32,
}

impl PlayoutSeriesStats {
    pub fn report(&self) -> String {
        let avg_plies = if self.games == 0 {
            0.0
        } else {
            f64::from(self.total_plies) / f64::from(self.games)
        };
        format!(
            "games={} first_wins={} second_wins={} stalemates={} unfinished={} avg_plies={:.1} captures={}",
            self.games,
            self.first_wins,
            self.second_wins,
            self.stalemates,
            self.unfinished,
            avg_plies,
            self.total_captures
        )
    }
}

/// Every legal `(from, to)` pair for the side to move.
pub fn all_legal_moves(game_state: &GameState) -> Vec<(Square, Square)> {
    game_state
        .squares_of(game_state.turn())
        .flat_map(|from| {
            game_state
                .legal_moves(from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

/// Play one seeded random game from the starting position.
pub fn play_random_game(seed: u64, config: &PlayoutConfig) -> Result<PlayoutResult, ChessErrors> {
    play_random_game_from(GameState::new_game(), seed, config)
}

/// Play one seeded random game from `initial`.
pub fn play_random_game_from(
    initial: GameState,
    seed: u64,
    config: &PlayoutConfig,
) -> Result<PlayoutResult, ChessErrors> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = initial;
    let mut moves_played = Vec::new();
    let mut captures = 0u16;

    let outcome = loop {
        let legal = all_legal_moves(&state);
        if legal.is_empty() {
            let mover = state.turn();
            break match state.status(mover) {
                GameStatus::Checkmate => PlayoutOutcome::Checkmate {
                    winner: mover.opposite(),
                },
                _ => PlayoutOutcome::Stalemate,
            };
        }
        if moves_played.len() >= usize::from(config.max_plies) {
            break PlayoutOutcome::MaxPlies;
        }

        let (from, to) = legal[rng.random_range(0..legal.len())];
        if let CaptureResult::Captured(_) = state.move_piece(from, to)? {
            captures += 1;
        }
        moves_played.push((from, to));

        if let Some(piece) = state.piece_at(to) {
            if piece.kind() == PieceKind::Pawn && rank_of(to) == promotion_rank(piece.team()) {
                state.promote(to, config.promotion_kind)?;
            }
        }
    };

    Ok(PlayoutResult {
        outcome,
        final_state: state,
        moves_played,
        captures,
    })
}

/// Play `config.games` seeded random games and tally the outcomes.
pub fn play_random_series(config: &PlayoutSeriesConfig) -> Result<PlayoutSeriesStats, ChessErrors> {
    let mut stats = PlayoutSeriesStats {
        games: config.games,
        ..PlayoutSeriesStats::default()
    };

    for i in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let result = play_random_game(seed, &config.per_game)?;

        match result.outcome {
            PlayoutOutcome::Checkmate { winner: Team::First } => stats.first_wins += 1,
            PlayoutOutcome::Checkmate { winner: Team::Second } => stats.second_wins += 1,
            PlayoutOutcome::Stalemate => stats.stalemates += 1,
            PlayoutOutcome::MaxPlies => stats.unfinished += 1,
        }
        stats.total_plies += result.moves_played.len() as u32;
        stats.total_captures += u32::from(result.captures);

        if config.verbose {
            println!(
                "[playout] game {}/{} seed={} outcome={:?} plies={} score={}/{}",
                i + 1,
                config.games,
                seed,
                result.outcome,
                result.moves_played.len(),
                result.final_state.score(Team::First),
                result.final_state.score(Team::Second)
            );
        }
    }

    Ok(stats)
}
