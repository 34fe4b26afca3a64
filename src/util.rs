/// Line preprocessing helpers.
///
/// This module provides the small text transformations applied to a raw input
/// line before it reaches the calculator: dropping a trailing `//` comment and
/// splitting off an assignment target.
pub mod line;
