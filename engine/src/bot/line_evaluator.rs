use super::Score;
use crate::game::Mark;

/// Score of a window once the engine's mark is the first one found in it.
pub const OWN_LINE_START: Score = 1;
/// Score of a window once the opponent's mark is the first one found in it.
pub const OPPONENT_LINE_START: Score = -1;
/// Growth per further engine mark in an engine-owned window.
pub const OWN_LINE_FACTOR: Score = 11;
/// Growth per further opponent mark in an opponent-owned window. Kept below
/// `OWN_LINE_FACTOR` so that extending own lines outweighs blocking.
pub const OPPONENT_LINE_FACTOR: Score = 10;

/// Scores one window, scanning its cells in order.
///
/// The first mark found decides who owns the window. Every further mark of
/// the owner multiplies the score; a mark of the other side ends the scan
/// with 0 since the window can no longer be completed.
pub fn evaluate_line<I>(cells: I, my_mark: Mark, opponent_mark: Mark) -> Score
where
    I: IntoIterator<Item = Mark>,
{
    let mut score: Score = 0;

    for cell in cells {
        if score == 0 {
            if cell == my_mark {
                score = OWN_LINE_START;
            } else if cell == opponent_mark {
                score = OPPONENT_LINE_START;
            }
        } else if score > 0 {
            if cell == my_mark {
                score = score.saturating_mul(OWN_LINE_FACTOR);
            } else if cell == opponent_mark {
                return 0;
            }
        } else if cell == opponent_mark {
            score = score.saturating_mul(OPPONENT_LINE_FACTOR);
        } else if cell == my_mark {
            return 0;
        }
    }

    score
}
