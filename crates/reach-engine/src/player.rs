//! Players and their castling entitlements.

use reach_core::Color;

/// A player: a name, a color, and the castling entitlements an external
/// move-application collaborator consumes.
///
/// The flags only record whether castling is still available to claim;
/// whether a particular castle is legal in a position is decided
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: Color,
    long_castle: bool,
    short_castle: bool,
}

impl Player {
    /// Creates a player with both castling entitlements intact.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Player {
            name: name.into(),
            color,
            long_castle: true,
            short_castle: true,
        }
    }

    /// Returns the player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns true if the player may still castle long (queenside).
    pub fn allowed_long_castle(&self) -> bool {
        self.long_castle
    }

    /// Returns true if the player may still castle short (kingside).
    pub fn allowed_short_castle(&self) -> bool {
        self.short_castle
    }

    /// Permanently revokes the long-castle entitlement.
    pub fn revoke_long_castle(&mut self) {
        self.long_castle = false;
    }

    /// Permanently revokes the short-castle entitlement.
    pub fn revoke_short_castle(&mut self) {
        self.short_castle = false;
    }
}
