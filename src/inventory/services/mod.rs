mod override_parser;
mod requirement_parser;

pub use override_parser::OverrideParser;
pub use requirement_parser::RequirementParser;
