pub mod core;
pub use self::core::{AsEmoji, Grid, KeyColorMap, LetterState, Row, Tile, TileColor};

mod session;
pub use session::{Cursor, Phase, Session, Settled, Submission};

mod suggestions;
pub use suggestions::{Suggestions, Ticket};

mod snapshot;
pub use snapshot::Snapshot;
