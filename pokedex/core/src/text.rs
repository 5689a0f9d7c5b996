//! Display formatting for API identifiers.

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turns a hyphenated identifier into capitalized words.
pub fn title(name: &str) -> String {
    name.replace('-', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn shout(name: &str) -> String {
    name.to_uppercase()
}

/// Scales a tenth-based API measure (decimeters, hectograms) to its base unit.
pub fn tenths(value: u32) -> f64 {
    f64::from(value) / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_only_touches_first_character() {
        assert_eq!(capitalize("mr-mime"), "Mr-mime");
        assert_eq!(capitalize("pikachu"), "Pikachu");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn title_capitalizes_every_word() {
        assert_eq!(title("omega-ruby"), "Omega Ruby");
        assert_eq!(title("lets-go-pikachu"), "Lets Go Pikachu");
        assert_eq!(title("red"), "Red");
    }

    #[test]
    fn shout_upper_cases_everything() {
        assert_eq!(shout("special-attack"), "SPECIAL-ATTACK");
    }

    #[test]
    fn tenths_prints_like_plain_division() {
        assert_eq!(tenths(69).to_string(), "6.9");
        assert_eq!(tenths(70).to_string(), "7");
        assert_eq!(tenths(9999).to_string(), "999.9");
        assert_eq!(tenths(1).to_string(), "0.1");
    }
}
