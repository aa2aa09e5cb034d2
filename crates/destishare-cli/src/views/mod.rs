pub mod destination;

pub use destination::{count_footer, format_destination_line, print_destinations, EMPTY_LIST_MESSAGE};
