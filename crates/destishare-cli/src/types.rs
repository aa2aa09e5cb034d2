use std::fmt;

use clap::ValueEnum;
use destishare_types::VoteField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI spelling of the three vote counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum VoteFieldArg {
    Recommended,
    MustVisit,
    NotWorthIt,
}

impl VoteFieldArg {
    pub fn field(self) -> VoteField {
        match self {
            VoteFieldArg::Recommended => VoteField::Recommended,
            VoteFieldArg::MustVisit => VoteField::MustVisit,
            VoteFieldArg::NotWorthIt => VoteField::NotWorthIt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_field_arg_maps_to_domain_fields() {
        assert_eq!(VoteFieldArg::Recommended.field(), VoteField::Recommended);
        assert_eq!(VoteFieldArg::MustVisit.field(), VoteField::MustVisit);
        assert_eq!(VoteFieldArg::NotWorthIt.field(), VoteField::NotWorthIt);
    }
}
