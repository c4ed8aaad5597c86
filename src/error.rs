use std::path::PathBuf;

/// Why a move was turned down. The board is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell is an anchor")]
    Anchor,

    #[error("cell is on the border")]
    Border,

    #[error("cell is already linked")]
    AlreadyLinked,

    #[error("it is not this player's turn")]
    NotYourTurn,

    #[error("the game is already over")]
    GameOver,
}

/// The traversal work-list was asked for an item it does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("dequeue from an empty queue")]
pub struct EmptyQueueError;

/// Errors raised by the board engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board size must be odd and at least 3, got {size}")]
    InvalidConfiguration { size: usize },

    #[error("coordinate ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },

    #[error("illegal move: {0}")]
    IllegalMove(#[from] MoveError),

    #[error("traversal invariant violated: {0}")]
    EmptyQueue(#[from] EmptyQueueError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::InvalidConfiguration { size: 4 };
        assert_eq!(err.to_string(), "board size must be odd and at least 3, got 4");

        let err = GameError::OutOfBounds { x: 7, y: 0, size: 5 };
        assert_eq!(err.to_string(), "coordinate (7, 0) is outside the 5x5 board");
    }

    #[test]
    fn test_move_error_converts() {
        let err: GameError = MoveError::AlreadyLinked.into();
        assert_eq!(err, GameError::IllegalMove(MoveError::AlreadyLinked));
        assert_eq!(err.to_string(), "illegal move: cell is already linked");
    }

    #[test]
    fn test_empty_queue_display() {
        let err: GameError = EmptyQueueError.into();
        assert_eq!(
            err.to_string(),
            "traversal invariant violated: dequeue from an empty queue"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.board_size must be odd".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.board_size must be odd"
        );
    }
}
