//! Card values and the match predicate.
//!
//! A `Card` is a plain `Copy` value: a color and a rank. The only mutation
//! a card ever sees is a wild card having its color bound when it is
//! played, and unbound again when the discard pile is recycled. Both are
//! crate-private and performed by the engine.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Card color. `Wild` is only ever the color of an unplayed wild card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

impl Color {
    /// The four colors a card can be played as.
    pub const CONCRETE: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Color::Wild)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Wild => "Wild",
        };
        f.write_str(name)
    }
}

/// Card rank: a number 0-9 or an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Rank {
    /// Wild family ranks need a color chosen when played.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Rank::Wild | Rank::WildDrawFour)
    }

    /// Ranks that trigger an effect when played.
    #[must_use]
    pub const fn is_action(self) -> bool {
        !matches!(self, Rank::Number(_))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Number(n) => write!(f, "{}", n),
            Rank::Skip => f.write_str("Skip"),
            Rank::Reverse => f.write_str("Reverse"),
            Rank::DrawTwo => f.write_str("Draw Two"),
            Rank::Wild => f.write_str("Wild"),
            Rank::WildDrawFour => f.write_str("Wild Draw Four"),
        }
    }
}

/// A single card.
///
/// ## Invariant
///
/// A card whose color is `Wild` has a wild rank. Once played, a wild card
/// carries the concrete color its player chose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardFields")]
pub struct Card {
    color: Color,
    rank: Rank,
}

/// Unchecked wire form of a `Card`.
#[derive(Deserialize)]
struct CardFields {
    color: Color,
    rank: Rank,
}

impl TryFrom<CardFields> for Card {
    type Error = GameError;

    fn try_from(fields: CardFields) -> Result<Self, Self::Error> {
        Card::try_new(fields.color, fields.rank)
    }
}

impl Card {
    /// A number card.
    ///
    /// Panics if `n > 9` or `color` is `Wild`.
    #[must_use]
    pub fn number(color: Color, n: u8) -> Self {
        assert!(n <= 9, "Number cards run from 0 to 9");
        Self::colored(color, Rank::Number(n))
    }

    /// A Skip card of the given color.
    #[must_use]
    pub fn skip(color: Color) -> Self {
        Self::colored(color, Rank::Skip)
    }

    /// A Reverse card of the given color.
    #[must_use]
    pub fn reverse(color: Color) -> Self {
        Self::colored(color, Rank::Reverse)
    }

    /// A Draw Two card of the given color.
    #[must_use]
    pub fn draw_two(color: Color) -> Self {
        Self::colored(color, Rank::DrawTwo)
    }

    /// An unplayed Wild card.
    #[must_use]
    pub const fn wild() -> Self {
        Self {
            color: Color::Wild,
            rank: Rank::Wild,
        }
    }

    /// An unplayed Wild Draw Four card.
    #[must_use]
    pub const fn wild_draw_four() -> Self {
        Self {
            color: Color::Wild,
            rank: Rank::WildDrawFour,
        }
    }

    /// Build a card from parts, rejecting combinations the deck never holds.
    ///
    /// Wild ranks accept any color (a bound wild carries its chosen one).
    pub fn try_new(color: Color, rank: Rank) -> Result<Self, GameError> {
        match rank {
            Rank::Number(n) if n > 9 => Err(GameError::InvalidCard(format!(
                "number {} is out of range",
                n
            ))),
            _ if color.is_wild() && !rank.is_wild() => Err(GameError::InvalidCard(format!(
                "{} cannot be Wild colored",
                rank
            ))),
            _ => Ok(Self { color, rank }),
        }
    }

    fn colored(color: Color, rank: Rank) -> Self {
        assert!(!color.is_wild(), "Only wild ranks can be Wild colored");
        Self { color, rank }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Whether this card is from the wild family (bound or not).
    #[must_use]
    pub const fn is_wild(&self) -> bool {
        self.rank.is_wild()
    }

    /// Whether this card can be played on `top`.
    ///
    /// Same color, same rank, or an unbound wild. Only the candidate's
    /// wildness counts: a wild on top behaves like its bound color.
    #[must_use]
    pub fn matches(&self, top: &Card) -> bool {
        self.color == top.color || self.rank == top.rank || self.color.is_wild()
    }

    /// Bind a wild card to the chosen color at play time.
    pub(crate) fn bind_color(&mut self, color: Color) {
        debug_assert!(self.is_wild(), "only wild cards take a chosen color");
        debug_assert!(!color.is_wild(), "chosen color must be concrete");
        self.color = color;
    }

    /// Return a played wild card to its unbound state. No-op for other cards.
    pub(crate) fn unbind(&mut self) {
        if self.is_wild() {
            self.color = Color::Wild;
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.color.is_wild() {
            write!(f, "{}", self.rank)
        } else {
            write!(f, "{} {}", self.color, self.rank)
        }
    }
}

/// Free-function form of [`Card::matches`].
#[must_use]
pub fn matches(candidate: &Card, top: &Card) -> bool {
    candidate.matches(top)
}
