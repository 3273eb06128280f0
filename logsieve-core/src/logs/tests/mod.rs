mod parse_tests;
mod tally_tests;
