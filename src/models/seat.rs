//! Seat coordinates and the per-flight occupancy grid.
//!
//! Every flight has the same fixed cabin: 5 rows of 4 seats. A seat is
//! addressed by its 0-indexed `(row, col)` pair, which is the canonical key
//! stored in the ledger. The label (`"2B"`) is a display artifact derived
//! from it.

use serde::Serialize;

use crate::error::AppError;

/// Number of seat rows on every flight.
pub const SEAT_ROWS: usize = 5;

/// Number of seats per row on every flight.
pub const SEAT_COLS: usize = 4;

/// A validated seat position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Seat {
    pub row: i64,
    pub col: i64,
}

impl Seat {
    /// Build a seat, rejecting coordinates outside the grid.
    pub fn new(row: i64, col: i64) -> Result<Self, AppError> {
        let row_ok = (0..SEAT_ROWS as i64).contains(&row);
        let col_ok = (0..SEAT_COLS as i64).contains(&col);

        if !row_ok || !col_ok {
            return Err(AppError::Validation(format!(
                "Seat ({row}, {col}) is outside the {SEAT_ROWS}x{SEAT_COLS} seat map"
            )));
        }

        Ok(Self { row, col })
    }

    /// Display label: 1-based row number followed by a column letter.
    ///
    /// `(0, 0)` is `"1A"`, `(1, 1)` is `"2B"`.
    pub fn label(&self) -> String {
        format!("{}{}", self.row + 1, (b'A' + self.col as u8) as char)
    }

    /// Parse a label such as `"2B"` back into coordinates.
    pub fn from_label(label: &str) -> Result<Self, AppError> {
        let label = label.trim();
        let invalid = || AppError::Validation(format!("Invalid seat label '{label}'"));

        let letter = label.chars().last().ok_or_else(invalid)?;
        if !letter.is_ascii_alphabetic() {
            return Err(invalid());
        }
        let number = &label[..label.len() - 1];
        let row: i64 = number.parse().map_err(|_| invalid())?;
        let col = (letter.to_ascii_uppercase() as u8 - b'A') as i64;

        Self::new(row.checked_sub(1).ok_or_else(invalid)?, col)
    }

    /// Parse seat input from a form submission.
    ///
    /// Accepts the `"row,col"` pair submitted by the seat picker (e.g.
    /// `"1,1"`) or a seat label (e.g. `"2B"`).
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(AppError::Validation("Please select a seat".to_string()));
        }

        match input.split_once(',') {
            Some((row, col)) => {
                let row = row.trim().parse::<i64>();
                let col = col.trim().parse::<i64>();
                match (row, col) {
                    (Ok(row), Ok(col)) => Self::new(row, col),
                    _ => Err(AppError::Validation(format!(
                        "Seat coordinates must be numeric, got '{input}'"
                    ))),
                }
            }
            None => Self::from_label(input),
        }
    }
}

/// Occupancy grid for one flight.
///
/// `rows[r][c]` is `true` when a booking holds seat `(r, c)`. The grid is
/// always rebuilt from ledger rows and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeatMap {
    pub rows: [[bool; SEAT_COLS]; SEAT_ROWS],
}

impl SeatMap {
    /// Build a grid with every seat in `occupied` marked taken.
    pub fn from_seats<I>(occupied: I) -> Self
    where
        I: IntoIterator<Item = Seat>,
    {
        let mut map = Self::default();
        for seat in occupied {
            map.rows[seat.row as usize][seat.col as usize] = true;
        }
        map
    }

    pub fn is_occupied(&self, seat: Seat) -> bool {
        self.rows[seat.row as usize][seat.col as usize]
    }

    pub fn available_count(&self) -> usize {
        self.rows.iter().flatten().filter(|taken| !**taken).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_derivation() {
        assert_eq!(Seat::new(1, 1).unwrap().label(), "2B");
        assert_eq!(Seat::new(0, 0).unwrap().label(), "1A");
        assert_eq!(Seat::new(4, 3).unwrap().label(), "5D");
    }

    #[test]
    fn labels_parse_back_to_coordinates() {
        for row in 0..SEAT_ROWS as i64 {
            for col in 0..SEAT_COLS as i64 {
                let seat = Seat::new(row, col).unwrap();
                assert_eq!(Seat::from_label(&seat.label()).unwrap(), seat);
            }
        }
        assert_eq!(Seat::from_label("2b").unwrap(), Seat { row: 1, col: 1 });
    }

    #[test]
    fn out_of_range_coordinates_are_validation_errors() {
        for (row, col) in [(5, 0), (0, 4), (-1, 0), (0, -1)] {
            assert!(matches!(Seat::new(row, col), Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn parses_form_pair_and_label() {
        assert_eq!(Seat::parse("1,1").unwrap(), Seat { row: 1, col: 1 });
        assert_eq!(Seat::parse(" 0 , 3 ").unwrap(), Seat { row: 0, col: 3 });
        assert_eq!(Seat::parse("3C").unwrap(), Seat { row: 2, col: 2 });
    }

    #[test]
    fn rejects_malformed_seat_input() {
        for input in [
            "",
            "a,b",
            "1,",
            "1;1",
            "6A",
            "1E",
            "A",
            "0A",
            "-1A",
            "-9223372036854775808A",
            "9223372036854775807,0",
        ] {
            assert!(
                matches!(Seat::parse(input), Err(AppError::Validation(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn seat_map_marks_only_given_seats() {
        let taken = [Seat::new(1, 1).unwrap(), Seat::new(4, 3).unwrap()];
        let map = SeatMap::from_seats(taken);

        for row in 0..SEAT_ROWS as i64 {
            for col in 0..SEAT_COLS as i64 {
                let seat = Seat::new(row, col).unwrap();
                assert_eq!(map.is_occupied(seat), taken.contains(&seat));
            }
        }
        assert_eq!(map.available_count(), SEAT_ROWS * SEAT_COLS - 2);
    }
}
