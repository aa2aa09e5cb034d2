use destishare_types::{Destination, VoteField};
use owo_colors::OwoColorize;

/// Wording from the original list view.
pub const EMPTY_LIST_MESSAGE: &str = "No destinations found! Add the first one ✌️";

pub fn count_footer(count: usize) -> String {
    format!(
        "There are {} destinations in the database. Add your own!",
        count
    )
}

/// One uncolored line per destination, used for JSON-adjacent plain output
/// and for tests.
pub fn format_destination_line(destination: &Destination) -> String {
    format!(
        "#{:<5} {} {:<4} {} {:<4} {} {:<4} [{}] {} ({})",
        destination.id,
        VoteField::Recommended.label(),
        destination.votes_recommended,
        VoteField::MustVisit.label(),
        destination.votes_must_visit,
        VoteField::NotWorthIt.label(),
        destination.votes_not_worth_it,
        destination.category,
        destination.text,
        destination.source,
    )
}

pub fn print_destinations(destinations: &[Destination]) {
    if destinations.is_empty() {
        println!("{}", EMPTY_LIST_MESSAGE);
        return;
    }

    for destination in destinations {
        let line = format_destination_line(destination);
        match destination.category.color() {
            // Color the whole line per category, as the original colors its badges
            Some((r, g, b)) => println!("{}", line.truecolor(r, g, b)),
            None => println!("{}", line),
        }
    }

    println!();
    println!("{}", count_footer(destinations.len()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use destishare_types::Category;

    fn sample() -> Destination {
        Destination {
            id: 7,
            text: "Kyoto in autumn".to_string(),
            source: "https://example.com/kyoto".to_string(),
            category: Category::Culture,
            votes_recommended: 5,
            votes_must_visit: 3,
            votes_not_worth_it: 1,
        }
    }

    #[test]
    fn line_contains_id_counters_category_and_source() {
        let line = format_destination_line(&sample());
        assert!(line.contains("#7"));
        assert!(line.contains("[culture]"));
        assert!(line.contains("Kyoto in autumn"));
        assert!(line.contains("(https://example.com/kyoto)"));
        assert!(line.contains('5') && line.contains('3') && line.contains('1'));
    }

    #[test]
    fn count_footer_uses_the_original_wording() {
        assert_eq!(
            count_footer(3),
            "There are 3 destinations in the database. Add your own!"
        );
    }
}
