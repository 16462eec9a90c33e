//! Release year bands.

/// Scores a release year: 2020 and later 4, 2015-2019 3, 2010-2014 2,
/// anything older 1.
///
/// An unknown year (absent or 0) has no score.
pub fn release_year_score(year: Option<i32>) -> Option<u8> {
    let year = year.filter(|&year| year != 0)?;
    let score = match year {
        y if y >= 2020 => 4,
        2015..=2019 => 3,
        2010..=2014 => 2,
        _ => 1,
    };
    Some(score)
}
