use crate::constants::MULTI_INTEREST_TITLE;
use crate::models::interest::find_interest;

pub fn title_for(interests: &[String]) -> String {
    match interests {
        [only] => format!("{} Explorer", only),
        [first, second] => format!("{} & {} Adventure", first, second),
        _ => MULTI_INTEREST_TITLE.to_string(),
    }
}

pub fn description_for(interests: &[String], region: &str, stop_count: usize) -> String {
    let phrases: Vec<String> = interests.iter().map(|label| phrase_for(label)).collect();
    let list = join_interests(&phrases);
    let noun = if stop_count == 1 { "stop" } else { "stops" };
    format!(
        "Discover the best {} around {}. This trip links {} top-rated {} in an easy visiting order.",
        list, region, stop_count, noun
    )
}

/// Catalog labels read as common nouns; anything else is kept as typed.
fn phrase_for(label: &str) -> String {
    match find_interest(label) {
        Some(profile) => profile.label.to_lowercase(),
        None => label.to_string(),
    }
}

/// "a", "a and b", "a, b and c"
fn join_interests(interests: &[String]) -> String {
    match interests {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
